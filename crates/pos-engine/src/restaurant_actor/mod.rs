//! # Restaurant Actor
//!
//! The restaurant registry: signup, login and the manager-password gate.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`Restaurant`]
//! - [`email_index`] - the `restaurant-email-index:<email>` records, owned by their own actor
//! - [`actions`] - [`RestaurantAction`] for the manager password
//! - [`error`] - [`RestaurantError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let restaurant_id = restaurant_client
//!     .register("owner@bistro.test", "secret", "Bistro", "PAID")
//!     .await?;
//! let session = restaurant_client.authenticate("owner@bistro.test", "secret").await?;
//! ```

pub mod actions;
pub mod email_index;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::RestaurantContext;
pub use error::*;

use crate::clients::{EmailIndexClient, RestaurantClient};
use crate::model::{EmailIndex, Restaurant};
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates the Restaurant and email index actors and their clients.
///
/// The registry client needs the index client for login lookups, so both are built here.
pub fn new(
    buffer_size: usize,
    store: Arc<dyn KvStore>,
    payment_token: impl Into<String>,
) -> (
    ResourceActor<Restaurant>,
    ResourceActor<EmailIndex>,
    RestaurantClient,
) {
    let (restaurant_actor, restaurant_client) = ResourceActor::new(buffer_size, store.clone());
    let (index_actor, index_client) = ResourceActor::new(buffer_size, store);
    let client = RestaurantClient::new(
        restaurant_client,
        EmailIndexClient::new(index_client),
        payment_token,
    );
    (restaurant_actor, index_actor, client)
}
