//! Entity trait implementation for the Order domain type.
//!
//! Placing an order is the engine's main multi-key write. [`ActorEntity::on_create`] runs
//! it as a sequence of single-key steps, each atomic inside its own actor:
//!
//! 1. attach the order id to its table,
//! 2. deduct `ingredient.quantity × item.quantity` from inventory for every ingredient,
//! 3. persist the order (done by the framework once the hook returns).
//!
//! Steps 1 and 2 never fail the order. A missing table or a failed deduction is logged
//! and the order is kept; nothing is rolled back.

use crate::clients::{InventoryClient, ProductClient, TableClient};
use crate::model::{
    Order, OrderCreate, OrderId, OrderKey, OrderStatus, OrderUpdate, ProductKey, TableKey,
    OFF_PREMISES_TABLE,
};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use chrono::Utc;
use ledger_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Dependencies of the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub tables: TableClient,
    pub products: ProductClient,
    pub inventory: InventoryClient,
}

impl Order {
    async fn link_table(&self, ctx: &OrderContext) {
        if self.table_number == OFF_PREMISES_TABLE {
            debug!(order_id = %self.id, "Off-premises order, no table to link");
            return;
        }
        let table = TableKey::new(self.restaurant_id.clone(), self.table_number);
        if let Err(e) = ctx.tables.attach_order(table, self.id.clone()).await {
            warn!(
                order_id = %self.id,
                table_number = self.table_number,
                error = %e,
                "Order kept without table linkage"
            );
        }
    }

    async fn deduct_ingredients(&self, ctx: &OrderContext) {
        for item in &self.items {
            let key = ProductKey::new(self.restaurant_id.clone(), item.product_id.clone());
            let product = match ctx.products.get(key).await {
                Ok(Some(product)) => product,
                Ok(None) => {
                    warn!(order_id = %self.id, product_id = %item.product_id, "Unknown product, no inventory deducted");
                    continue;
                }
                Err(e) => {
                    warn!(order_id = %self.id, product_id = %item.product_id, error = %e, "Product lookup failed, no inventory deducted");
                    continue;
                }
            };

            for ingredient in &product.ingredients {
                let Some(needed) = ingredient.quantity.checked_mul(Decimal::from(item.quantity))
                else {
                    warn!(
                        order_id = %self.id,
                        ingredient = %ingredient.name,
                        quantity = item.quantity,
                        "Ingredient usage overflows, no inventory deducted"
                    );
                    continue;
                };
                let delta = -needed;
                if let Err(e) = ctx
                    .inventory
                    .adjust(
                        &self.restaurant_id,
                        &ingredient.name,
                        delta,
                        &ingredient.unit,
                    )
                    .await
                {
                    warn!(
                        order_id = %self.id,
                        ingredient = %ingredient.name,
                        error = %e,
                        "Inventory deduction failed, order kept"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    const KIND: &'static str = "order";
    type Id = OrderKey;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> OrderKey {
        OrderKey::new(self.restaurant_id.clone(), self.id.clone())
    }

    fn from_create_params(params: OrderCreate) -> Result<Self, OrderError> {
        let items: Vec<_> = params
            .items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .collect();

        if items.is_empty() {
            return Err(OrderError::ValidationError(
                "order has no items with a positive quantity".into(),
            ));
        }
        if let Some(item) = items.iter().find(|item| item.unit_price < Decimal::ZERO) {
            return Err(OrderError::ValidationError(format!(
                "negative unit price for {}",
                item.name
            )));
        }

        Ok(Self {
            id: OrderId::mint(),
            restaurant_id: params.restaurant_id,
            table_number: params.table_number,
            items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        self.link_table(ctx).await;
        self.deduct_ingredients(ctx).await;
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {
            OrderUpdate::LineItem { index, quantity } => {
                if index >= self.items.len() {
                    return Err(OrderError::ValidationError(format!(
                        "line item {index} out of range, order has {}",
                        self.items.len()
                    )));
                }
                if quantity == 0 {
                    self.items.remove(index);
                } else {
                    self.items[index].quantity = quantity;
                }
                Ok(())
            }
        }
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::MarkReady => {
                self.status = OrderStatus::Ready;
                Ok(self.status)
            }
        }
    }
}
