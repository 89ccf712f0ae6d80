use crate::model::RestaurantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock level of one ingredient. Negative quantities mean the ingredient was oversold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub restaurant_id: RestaurantId,
    pub ingredient: String,
    pub quantity: Decimal,
    pub unit: String,
}
