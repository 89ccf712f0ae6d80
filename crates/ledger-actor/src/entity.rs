//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every ledger record (restaurant, table, order,
//! inventory item, ...) implements to be owned by a generic `ResourceActor`. It names the
//! entity kind used as the storage key prefix, the associated types for ids, DTOs, actions,
//! context and errors, and the lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! # Architecture Note
//! One actor owns every key of one entity kind. Because the hooks run inside that actor's
//! message loop, a read-modify-write expressed as a hook is atomic with respect to every
//! other request for the same kind.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::seed`]
//!
//! The defaults do nothing (`Ok(())` / `None`).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any ledger entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can call other actors. The `Context` type is
/// injected into every hook at `run()` time rather than at construction ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Storage key prefix, e.g. `"order"`.
    const KIND: &'static str;

    /// Identifier. Its `Display` form is the key suffix after `KIND:`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing entity-specific operations (e.g. `MarkReady`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Per-actor error type, recovered by clients through
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from the payload.
    /// Called synchronously before `on_create`; entities mint their own ids here.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Entity to start from when an action targets a key that does not exist yet.
    /// Returning `None` makes the action fail with `NotFound`.
    fn seed(_id: &Self::Id, _action: &Self::Action) -> Option<Self> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. Changes are persisted on `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle an entity-specific action. Changes are persisted on `Ok`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
