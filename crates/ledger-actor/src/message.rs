//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the standard lifecycle of a stored record plus a custom `Action`
/// and a scoped `List`:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new record. Fails if the key is taken.
/// - **Get**: Fetches the current state by id.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing record.
/// - **Delete**: Removes the record.
/// - **Action**: Executes a custom [`ActorEntity::Action`], seeding the record if the entity allows it.
/// - **List**: Returns every record of this kind under a scope (a restaurant id).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        scope: String,
        respond_to: Response<Vec<T>>,
    },
}
