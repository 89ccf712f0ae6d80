//! # Table Client
//!
//! Provides a high‑level API for interacting with the `Table` actor.
use crate::model::{OrderId, RestaurantId, Table, TableCreate, TableKey, TableNumber};
use crate::table_actor::{TableAction, TableActionResult, TableError};
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Table actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    /// Creates tables `1..=count` for a new restaurant, each with no orders.
    #[instrument(skip(self))]
    pub async fn provision(
        &self,
        restaurant_id: &RestaurantId,
        count: TableNumber,
    ) -> Result<(), TableError> {
        for number in 1..=count {
            self.inner
                .create(TableCreate {
                    restaurant_id: restaurant_id.clone(),
                    number,
                })
                .await
                .map_err(Self::map_error)?;
        }
        debug!(count, "Tables provisioned");
        Ok(())
    }

    /// Every table of a restaurant, in no guaranteed order.
    #[instrument(skip(self))]
    pub async fn list_tables(&self, restaurant_id: &RestaurantId) -> Result<Vec<Table>, TableError> {
        self.list(restaurant_id.to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn attach_order(&self, table: TableKey, order_id: OrderId) -> Result<(), TableError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(table, TableAction::Attach(order_id))
            .await
            .map_err(Self::map_error)?
        {
            TableActionResult::Attach(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Empties the table's order list and returns the ids it held.
    #[instrument(skip(self))]
    pub async fn clear(&self, table: TableKey) -> Result<Vec<OrderId>, TableError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(table, TableAction::Clear)
            .await
            .map_err(Self::map_error)?
        {
            TableActionResult::Clear(order_ids) => Ok(order_ids),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: TableActionResult) -> TableError {
    TableError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(key)) => TableError::NotFound(key),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
