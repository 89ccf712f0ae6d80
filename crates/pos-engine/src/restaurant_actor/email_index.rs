//! Entity trait implementation for the email → restaurant id index.
//!
//! Entries are only ever created. Uniqueness comes from the framework rejecting a create
//! on an occupied key, which the index actor checks and writes in one step.

use crate::model::EmailIndex;
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for EmailIndex {
    const KIND: &'static str = "restaurant-email-index";
    type Id = String;
    type Create = EmailIndex;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = RestaurantError;

    fn id(&self) -> String {
        self.email.clone()
    }

    fn from_create_params(params: EmailIndex) -> Result<Self, RestaurantError> {
        Ok(params)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), RestaurantError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), RestaurantError> {
        match action {}
    }
}
