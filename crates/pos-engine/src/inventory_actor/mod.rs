//! # Inventory Actor
//!
//! Per-ingredient stock levels under `inventory:<restaurant>:<ingredient>`. Managers
//! restock with positive adjustments; order placement sends negative ones. Because a
//! single actor applies every adjustment, concurrent orders never lose a decrement.
//!
//! - [`entity`] - [`ActorEntity`](ledger_actor::ActorEntity) implementation for [`InventoryItem`]
//! - [`actions`] - [`InventoryAction::Adjust`]
//! - [`error`] - [`InventoryError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryItem;
use ledger_actor::{KvStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Inventory actor and its client.
pub fn new(
    buffer_size: usize,
    store: Arc<dyn KvStore>,
) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    (actor, InventoryClient::new(generic_client))
}
