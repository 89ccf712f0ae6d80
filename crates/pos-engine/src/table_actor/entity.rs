//! Entity trait implementation for the Table domain type.
//!
//! Tables are created in bulk at signup and never deleted. Actions never seed a missing
//! table, so attaching to or clearing an unknown table fails with `NotFound`.

use crate::model::{Table, TableCreate, TableKey};
use crate::table_actor::{TableAction, TableActionResult, TableError};
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Table {
    const KIND: &'static str = "table";
    type Id = TableKey;
    type Create = TableCreate;
    type Update = Infallible;
    type Action = TableAction;
    type ActionResult = TableActionResult;
    type Context = ();
    type Error = TableError;

    fn id(&self) -> TableKey {
        TableKey::new(self.restaurant_id.clone(), self.number)
    }

    fn from_create_params(params: TableCreate) -> Result<Self, TableError> {
        Ok(Self {
            restaurant_id: params.restaurant_id,
            number: params.number,
            order_ids: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), TableError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: TableAction,
        _ctx: &(),
    ) -> Result<TableActionResult, TableError> {
        match action {
            TableAction::Attach(order_id) => {
                self.order_ids.push(order_id);
                Ok(TableActionResult::Attach(()))
            }
            TableAction::Clear => Ok(TableActionResult::Clear(std::mem::take(&mut self.order_ids))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, RestaurantId};

    #[tokio::test]
    async fn test_clear_returns_attached_orders_in_order() {
        let mut table = Table::from_create_params(TableCreate {
            restaurant_id: RestaurantId::from("r1"),
            number: 3,
        })
        .unwrap();

        for id in ["a", "b"] {
            table
                .handle_action(TableAction::Attach(OrderId::from(id)), &())
                .await
                .unwrap();
        }

        let cleared = table.handle_action(TableAction::Clear, &()).await.unwrap();
        assert_eq!(
            cleared,
            TableActionResult::Clear(vec![OrderId::from("a"), OrderId::from("b")])
        );
        assert!(table.order_ids.is_empty());
    }
}
