//! Entity trait implementation for the Product domain type.

use crate::model::{Product, ProductCreate, ProductId, ProductKey};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use rust_decimal::Decimal;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    const KIND: &'static str = "product";
    type Id = ProductKey;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> ProductKey {
        ProductKey::new(self.restaurant_id.clone(), self.id.clone())
    }

    fn from_create_params(params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name is required".into()));
        }
        if params.price < Decimal::ZERO {
            return Err(ProductError::ValidationError(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        if let Some(ingredient) = params.ingredients.iter().find(|i| i.name.trim().is_empty()) {
            return Err(ProductError::ValidationError(format!(
                "ingredient name is required ({} {})",
                ingredient.quantity, ingredient.unit
            )));
        }

        Ok(Self {
            id: ProductId::mint(),
            restaurant_id: params.restaurant_id,
            name: params.name,
            price: params.price,
            category: params.category,
            ingredients: params.ingredients,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, RestaurantId};

    fn params(name: &str, price: Decimal) -> ProductCreate {
        ProductCreate {
            restaurant_id: RestaurantId::from("r1"),
            name: name.into(),
            price,
            category: Category::Drink,
            ingredients: vec![],
        }
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Product::from_create_params(params("Lemonade", Decimal::NEGATIVE_ONE)).unwrap_err();
        assert!(matches!(err, ProductError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = Product::from_create_params(params("  ", Decimal::ONE)).unwrap_err();
        assert_eq!(err, ProductError::ValidationError("name is required".into()));
    }

    #[test]
    fn test_free_product_is_allowed() {
        let product = Product::from_create_params(params("Water", Decimal::ZERO)).unwrap();
        assert_eq!(product.id().restaurant_id, RestaurantId::from("r1"));
    }
}
