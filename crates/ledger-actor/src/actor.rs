//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer for one entity kind. It
//! implements the "Server" side of the Actor Model, processing messages sequentially so
//! every read-modify-write against its keys is free of lost updates.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::{entity_key, scope_prefix, KvStore, StoreError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns every stored record of one entity kind.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the receiver end of the channel
/// and a handle to the [`KvStore`]. The store is the source of truth; the actor keeps no
/// cache, it only guarantees that nobody else writes keys of kind `T::KIND` while it runs.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially*. Two clients that
/// both decrement the same inventory item are queued, not interleaved, so no `Mutex`
/// or version stamp is needed for the read-modify-write.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use ledger_actor::{ActorEntity, MemoryStore, ResourceActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::convert::Infallible;
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Counter { name: String, value: i64 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     const KIND: &'static str = "counter";
///     type Id = String;
///     type Create = String;
///     type Update = Infallible;
///     type Action = i64;
///     type ActionResult = i64;
///     type Context = ();
///     type Error = CounterError;
///
///     fn id(&self) -> String { self.name.clone() }
///     fn from_create_params(name: String) -> Result<Self, CounterError> { Ok(Self { name, value: 0 }) }
///     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), CounterError> { match update {} }
///     async fn handle_action(&mut self, delta: i64, _: &()) -> Result<i64, CounterError> {
///         self.value += delta;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10, Arc::new(MemoryStore::new()));
///     tokio::spawn(actor.run(()));
///
///     let id = client.create("covers".to_string()).await.unwrap();
///     assert_eq!(client.perform_action(id, 2).await.unwrap(), 2);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Arc<dyn KvStore>,
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The backing store. Several actors share one store; each writes only its own kind.
    pub fn new(buffer_size: usize, store: Arc<dyn KvStore>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach other actors whose clients were created *after* this actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.load(&id).await;
                    let found = matches!(result, Ok(Some(_)));
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { scope, respond_to } => {
                    let result = self.list(&scope).await;
                    match &result {
                        Ok(items) => debug!(entity_type, %scope, count = items.len(), "List"),
                        Err(e) => warn!(entity_type, %scope, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    async fn load(&self, id: &T::Id) -> Result<Option<T>, FrameworkError> {
        let key = entity_key(T::KIND, id);
        match self.store.get(&key).await? {
            Some(value) => {
                let item = serde_json::from_value(value).map_err(StoreError::from)?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, item: &T) -> Result<(), FrameworkError> {
        let key = entity_key(T::KIND, &item.id());
        let value = serde_json::to_value(item).map_err(StoreError::from)?;
        self.store.set(&key, value).await?;
        Ok(())
    }

    async fn create(&self, params: T::Create, ctx: &T::Context) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(entity_error)?;
        let id = item.id();
        let key = entity_key(T::KIND, &id);
        if self.store.get(&key).await?.is_some() {
            return Err(FrameworkError::AlreadyExists(key));
        }
        item.on_create(ctx).await.map_err(entity_error)?;
        self.save(&item).await?;
        Ok(id)
    }

    async fn update(
        &self,
        id: &T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = self
            .load(id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(entity_key(T::KIND, id)))?;
        item.on_update(update, ctx).await.map_err(entity_error)?;
        self.save(&item).await?;
        Ok(item)
    }

    async fn delete(&self, id: &T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        let key = entity_key(T::KIND, id);
        let item = self
            .load(id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(key.clone()))?;
        item.on_delete(ctx).await.map_err(entity_error)?;
        self.store.delete(&key).await?;
        Ok(())
    }

    async fn act(
        &self,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut item = match self.load(id).await? {
            Some(item) => item,
            None => T::seed(id, &action)
                .ok_or_else(|| FrameworkError::NotFound(entity_key(T::KIND, id)))?,
        };
        let result = item
            .handle_action(action, ctx)
            .await
            .map_err(entity_error)?;
        self.save(&item).await?;
        Ok(result)
    }

    async fn list(&self, scope: &str) -> Result<Vec<T>, FrameworkError> {
        let rows = self.store.scan_prefix(&scope_prefix(T::KIND, scope)).await?;
        rows.into_iter()
            .map(|(_, value)| {
                serde_json::from_value(value)
                    .map_err(|e| FrameworkError::Store(StoreError::from(e)))
            })
            .collect()
    }
}
