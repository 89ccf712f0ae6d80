use crate::model::{Category, OrderId, ProductId, RestaurantId, TableNumber};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kitchen progress. `Pending → Ready` is one-way; removal is the only later step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Ready,
}

/// One ordered product, with name, price and category copied at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    pub table_number: TableNumber,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Whether the kitchen display should show this order.
    pub fn is_kitchen_pending(&self) -> bool {
        self.status == OrderStatus::Pending
            && self.items.iter().any(|item| item.category == Category::Food)
    }

    /// Sum of `unit_price × quantity`, or `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            item.unit_price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
        })
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub restaurant_id: RestaurantId,
    pub table_number: TableNumber,
    pub items: Vec<LineItem>,
}

/// Edits applied to an existing order.
#[derive(Debug, Clone)]
pub enum OrderUpdate {
    /// Sets the quantity of the item at `index`; `0` removes it and shifts later items down.
    LineItem { index: usize, quantity: u32 },
}
