//! # Product Actor
//!
//! The menu. Products are created and deleted by managers and are otherwise immutable;
//! the Order actor reads them to find ingredient requirements.
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize, store: Arc<dyn KvStore>) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, ProductClient::new(generic_client))
}
