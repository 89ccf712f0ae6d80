use crate::model::{ProductId, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu section. The kitchen only sees orders containing food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
}

/// Stock consumed by one unit of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
}

/// A menu item. Immutable once created; managers delete and recreate instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub ingredients: Vec<IngredientRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub ingredients: Vec<IngredientRequirement>,
}
