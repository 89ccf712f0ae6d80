//! # Inventory Client
//!
//! Provides a high‑level API for interacting with the `InventoryItem` actor.
use crate::inventory_actor::{InventoryAction, InventoryError};
use crate::model::{InventoryItem, InventoryKey, RestaurantId};
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    /// Adds `delta` to an ingredient, creating it at zero with `unit` on first use.
    #[instrument(skip(self))]
    pub async fn adjust(
        &self,
        restaurant_id: &RestaurantId,
        ingredient: &str,
        delta: Decimal,
        unit: &str,
    ) -> Result<InventoryItem, InventoryError> {
        if ingredient.trim().is_empty() {
            return Err(InventoryError::ValidationError(
                "ingredient name is required".into(),
            ));
        }
        debug!("Sending request");
        let key = InventoryKey::new(restaurant_id.clone(), ingredient.to_string());
        self.inner
            .perform_action(
                key,
                InventoryAction::Adjust {
                    delta,
                    unit: unit.to_string(),
                },
            )
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_inventory(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list(restaurant_id.to_string()).await
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<InventoryError>() {
            Ok(err) => err,
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
