//! Entity trait implementation for the InventoryItem domain type.
//!
//! Items come into existence through their first adjustment (see [`ActorEntity::seed`]);
//! there is no explicit create and no delete. Quantities are never floored.

use crate::inventory_actor::{InventoryAction, InventoryError};
use crate::model::{InventoryItem, InventoryKey};
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use rust_decimal::Decimal;
use std::convert::Infallible;
use tracing::warn;

#[async_trait]
impl ActorEntity for InventoryItem {
    const KIND: &'static str = "inventory";
    type Id = InventoryKey;
    type Create = Infallible;
    type Update = Infallible;
    type Action = InventoryAction;
    type ActionResult = InventoryItem;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> InventoryKey {
        InventoryKey::new(self.restaurant_id.clone(), self.ingredient.clone())
    }

    fn from_create_params(params: Infallible) -> Result<Self, InventoryError> {
        match params {}
    }

    fn seed(id: &InventoryKey, action: &InventoryAction) -> Option<Self> {
        let InventoryAction::Adjust { unit, .. } = action;
        Some(Self {
            restaurant_id: id.restaurant_id.clone(),
            ingredient: id.key.clone(),
            quantity: Decimal::ZERO,
            unit: unit.clone(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), InventoryError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryItem, InventoryError> {
        match action {
            InventoryAction::Adjust { delta, unit } => {
                if unit != self.unit {
                    warn!(
                        ingredient = %self.ingredient,
                        stored_unit = %self.unit,
                        given_unit = %unit,
                        "Inventory unit mismatch, applying delta unconverted"
                    );
                }
                self.quantity = self.quantity.checked_add(delta).ok_or_else(|| {
                    InventoryError::ValidationError(format!(
                        "adjusting {} by {delta} overflows",
                        self.ingredient
                    ))
                })?;
                Ok(self.clone())
            }
        }
    }
}
