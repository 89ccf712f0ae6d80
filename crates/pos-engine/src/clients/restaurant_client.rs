//! # Restaurant Client
//!
//! Provides a high‑level API for the restaurant registry: signup, login and the
//! manager-password gate.
use crate::clients::EmailIndexClient;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, Session};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use async_trait::async_trait;
use ledger_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
    email_index: EmailIndexClient,
    payment_token: String,
}

impl RestaurantClient {
    pub fn new(
        inner: ResourceClient<Restaurant>,
        email_index: EmailIndexClient,
        payment_token: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            email_index,
            payment_token: payment_token.into(),
        }
    }

    /// The email index client, injected into the Restaurant actor's context.
    pub fn email_index(&self) -> &EmailIndexClient {
        &self.email_index
    }

    /// Signs a restaurant up. Nothing is written unless the payment token is accepted.
    #[instrument(skip(self, password, payment_token))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        payment_token: &str,
    ) -> Result<RestaurantId, RestaurantError> {
        if payment_token != self.payment_token {
            return Err(RestaurantError::PaymentRequired);
        }
        debug!("Sending request");
        let params = RestaurantCreate {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, RestaurantError> {
        let restaurant_id = self
            .email_index
            .lookup(email)
            .await?
            .ok_or(RestaurantError::InvalidCredentials)?;
        let restaurant = self
            .get(restaurant_id)
            .await?
            .ok_or(RestaurantError::InvalidCredentials)?;

        if restaurant.password != password {
            return Err(RestaurantError::InvalidCredentials);
        }
        Ok(Session {
            restaurant_id: restaurant.id,
            name: restaurant.name,
            has_manager_password: !restaurant.manager_password.is_empty(),
        })
    }

    #[instrument(skip(self, password))]
    pub async fn set_manager_password(
        &self,
        id: RestaurantId,
        password: &str,
    ) -> Result<(), RestaurantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, RestaurantAction::SetManagerPassword(password.to_string()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, password))]
    pub async fn verify_manager_password(
        &self,
        id: RestaurantId,
        password: &str,
    ) -> Result<(), RestaurantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, RestaurantAction::VerifyManagerPassword(password.to_string()))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(key)) => RestaurantError::NotFound(key),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
