//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Table linkage and inventory deduction happen in the Order actor's `on_create` hook.
use crate::model::{Order, OrderCreate, OrderId, OrderKey, OrderStatus, OrderUpdate, RestaurantId};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let key = self.inner.create(params).await.map_err(Self::map_error)?;
        Ok(key.key)
    }

    /// Pending orders containing at least one food item.
    #[instrument(skip(self))]
    pub async fn list_kitchen_orders(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = self.list(restaurant_id.to_string()).await?;
        Ok(orders
            .into_iter()
            .filter(Order::is_kitchen_pending)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: OrderKey) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::MarkReady)
            .await
            .map_err(Self::map_error)
    }

    /// Removes the order whatever its status. Removing a missing order succeeds.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: OrderKey) -> Result<(), OrderError> {
        match self.delete(id).await {
            Err(OrderError::NotFound(key)) => {
                debug!(%key, "Order already removed");
                Ok(())
            }
            other => other,
        }
    }

    #[instrument(skip(self))]
    pub async fn update_line_item(
        &self,
        id: OrderKey,
        index: usize,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate::LineItem { index, quantity })
            .await
            .map_err(Self::map_error)
    }

    /// Resolves order ids, skipping ids that no longer point at an order.
    #[instrument(skip(self))]
    pub async fn orders_for(
        &self,
        restaurant_id: &RestaurantId,
        order_ids: &[OrderId],
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = Vec::with_capacity(order_ids.len());
        for order_id in order_ids {
            match self
                .get(OrderKey::new(restaurant_id.clone(), order_id.clone()))
                .await?
            {
                Some(order) => orders.push(order),
                None => debug!(%order_id, "Skipping dangling order reference"),
            }
        }
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(key)) => OrderError::NotFound(key),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
