//! # Sales Client
//!
//! Provides a high‑level API for interacting with the `SalesRecord` actor.
use crate::model::{RestaurantId, SalesKey, SalesRecord, TableNumber};
use crate::sales_actor::{SalesAction, SalesError, TableClosure};
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Sales actor.
#[derive(Clone)]
pub struct SalesClient {
    inner: ResourceClient<SalesRecord>,
}

impl SalesClient {
    pub fn new(inner: ResourceClient<SalesRecord>) -> Self {
        Self { inner }
    }

    /// Closes a table and books the sale on `date`.
    #[instrument(skip(self))]
    pub async fn close_table(
        &self,
        restaurant_id: &RestaurantId,
        date: &str,
        table_number: TableNumber,
        subtotal: Decimal,
    ) -> Result<TableClosure, SalesError> {
        debug!("Sending request");
        let key = SalesKey::new(restaurant_id.clone(), date.to_string());
        self.inner
            .perform_action(
                key,
                SalesAction::CloseTable {
                    table_number,
                    subtotal,
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// One record per day with at least one closed table.
    #[instrument(skip(self))]
    pub async fn list_sales(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<SalesRecord>, SalesError> {
        self.list(restaurant_id.to_string()).await
    }
}

#[async_trait]
impl ActorClient<SalesRecord> for SalesClient {
    type Error = SalesError;

    fn inner(&self) -> &ResourceClient<SalesRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<SalesError>() {
            Ok(err) => err,
            Err(other) => SalesError::ActorCommunicationError(other.to_string()),
        }
    }
}
