//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
use crate::model::{Product, ProductCreate, ProductId, ProductKey, RestaurantId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        let key = self.inner.create(params).await.map_err(Self::map_error)?;
        Ok(key.key)
    }

    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Product>, ProductError> {
        self.list(restaurant_id.to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductKey) -> Result<(), ProductError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(key)) => ProductError::NotFound(key),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
