//! # Email Index Client
//!
//! Claims and resolves `restaurant-email-index:<email>` entries.
use crate::model::{EmailIndex, RestaurantId};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the email index actor.
#[derive(Clone)]
pub struct EmailIndexClient {
    inner: ResourceClient<EmailIndex>,
}

impl EmailIndexClient {
    pub fn new(inner: ResourceClient<EmailIndex>) -> Self {
        Self { inner }
    }

    /// Maps `email` to `restaurant_id`, failing with `DuplicateEmail` if it is taken.
    #[instrument(skip(self))]
    pub async fn claim(
        &self,
        email: &str,
        restaurant_id: &RestaurantId,
    ) -> Result<(), RestaurantError> {
        debug!("Sending request");
        let entry = EmailIndex {
            email: email.to_string(),
            restaurant_id: restaurant_id.clone(),
        };
        match self.inner.create(entry).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::AlreadyExists(_)) => {
                Err(RestaurantError::DuplicateEmail(email.to_string()))
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The restaurant registered under `email`, if any.
    #[instrument(skip(self))]
    pub async fn lookup(&self, email: &str) -> Result<Option<RestaurantId>, RestaurantError> {
        let entry = self.get(email.to_string()).await?;
        Ok(entry.map(|entry| entry.restaurant_id))
    }
}

#[async_trait]
impl ActorClient<EmailIndex> for EmailIndexClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<EmailIndex> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RestaurantError>() {
            Ok(err) => err,
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
