//! Entity trait implementation for the SalesRecord domain type.
//!
//! A record is created by the first table close of the day ([`ActorEntity::seed`]) and
//! only grows afterwards. Closing a table runs inside the Sales actor, so two tables
//! closed at the same moment both land in the day's total.

use crate::clients::{OrderClient, TableClient};
use crate::model::{OrderKey, SalesKey, SalesRecord, TableKey};
use crate::sales_actor::{SalesAction, SalesError, TableClosure};
use crate::table_actor::TableError;
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use rust_decimal::Decimal;
use std::convert::Infallible;
use tracing::warn;

/// Dependencies of the Sales actor.
#[derive(Clone)]
pub struct SalesContext {
    pub tables: TableClient,
    pub orders: OrderClient,
    /// Multiplier applied to a table's subtotal, e.g. `1.10`.
    pub service_rate: Decimal,
}

#[async_trait]
impl ActorEntity for SalesRecord {
    const KIND: &'static str = "sales";
    type Id = SalesKey;
    type Create = Infallible;
    type Update = Infallible;
    type Action = SalesAction;
    type ActionResult = TableClosure;
    type Context = SalesContext;
    type Error = SalesError;

    fn id(&self) -> SalesKey {
        SalesKey::new(self.restaurant_id.clone(), self.date.clone())
    }

    fn from_create_params(params: Infallible) -> Result<Self, SalesError> {
        match params {}
    }

    fn seed(id: &SalesKey, _action: &SalesAction) -> Option<Self> {
        Some(Self {
            restaurant_id: id.restaurant_id.clone(),
            date: id.key.clone(),
            total: Decimal::ZERO,
            count: 0,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &SalesContext) -> Result<(), SalesError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: SalesAction,
        ctx: &SalesContext,
    ) -> Result<TableClosure, SalesError> {
        match action {
            SalesAction::CloseTable {
                table_number,
                subtotal,
            } => {
                let amount = subtotal.checked_mul(ctx.service_rate).ok_or_else(|| {
                    SalesError::ValidationError(format!(
                        "subtotal {subtotal} overflows with service rate {}",
                        ctx.service_rate
                    ))
                })?;
                let mut updated = self.clone();
                updated.record_sale(amount).ok_or_else(|| {
                    SalesError::ValidationError(format!(
                        "sale of {amount} overflows the day's total {}",
                        self.total
                    ))
                })?;

                let table = TableKey::new(self.restaurant_id.clone(), table_number);
                let removed = ctx.tables.clear(table).await.map_err(|e| match e {
                    TableError::NotFound(key) => SalesError::NotFound(key),
                    other => SalesError::ActorCommunicationError(other.to_string()),
                })?;

                for order_id in &removed {
                    let key = OrderKey::new(self.restaurant_id.clone(), order_id.clone());
                    if let Err(e) = ctx.orders.complete_order(key).await {
                        warn!(%order_id, error = %e, "Order not removed on table close");
                    }
                }

                *self = updated;
                Ok(TableClosure {
                    record: self.clone(),
                    amount,
                    removed,
                })
            }
        }
    }
}
