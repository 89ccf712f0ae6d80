//! # ActorClient Trait
//!
//! Provides a common interface for entity-specific clients, adding default `get`, `delete`
//! and `list` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard read/delete operations.
///
/// Implementors supply the inner `ResourceClient` and a mapping from [`FrameworkError`]
/// into their own error type; the typical mapping first tries
/// [`FrameworkError::downcast_entity`] so hook failures keep their original variant.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific entity error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Every entity stored under `scope`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, scope: String) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(scope).await.map_err(Self::map_error)
    }
}
