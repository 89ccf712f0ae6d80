//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test an actor whose hooks
//! call other actors: run the actor under test for real and mock its collaborators.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn and a store) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real records in a `KvStore` |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use ledger_actor::mock::MockClient;
//! use ledger_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)] struct Table { number: u8 }
//! #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     const KIND: &'static str = "table";
//!     type Id = u8; type Create = u8; type Update = Infallible;
//!     type Action = Infallible; type ActionResult = (); type Context = (); type Error = TableError;
//!     fn id(&self) -> u8 { self.number }
//!     fn from_create_params(number: u8) -> Result<Self, TableError> { Ok(Self { number }) }
//!     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), TableError> { match u {} }
//!     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), TableError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Table>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(3).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(3).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver, or the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    List {
        scope: String,
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (wrong kind or wrong id) panics the mock task, which surfaces in the test as
/// `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { scope, respond_to },
                        Some(Expectation::List {
                            scope: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(scope, expected, "list for unexpected scope");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> Respond<T, Option<T>> {
        self.respond(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Respond<T, T::Id> {
        self.respond(|response| Expectation::Create { response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> Respond<T, ()> {
        self.respond(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> Respond<T, T::ActionResult> {
        self.respond(move |response| Expectation::Action { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self, scope: impl Into<String>) -> Respond<T, Vec<T>> {
        let scope = scope.into();
        self.respond(move |response| Expectation::List { scope, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn respond<R>(
        &mut self,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Respond<T, R> {
        Respond {
            build: Box::new(build),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that records the response of one expectation.
pub struct Respond<T: ActorEntity, R> {
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> Respond<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when the test must inspect the request payload (e.g. the exact
/// `Action` a hook sent) before answering it.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Dish {
        name: String,
        portions: u32,
    }

    #[derive(Debug)]
    enum DishAction {
        Cook(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        const KIND: &'static str = "dish";
        type Id = String;
        type Create = String;
        type Update = Infallible;
        type Action = DishAction;
        type ActionResult = u32;
        type Context = ();
        type Error = DishError;

        fn id(&self) -> String {
            self.name.clone()
        }

        fn from_create_params(name: String) -> Result<Self, Self::Error> {
            Ok(Self { name, portions: 0 })
        }

        async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
            match update {}
        }

        async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<u32, Self::Error> {
            match action {
                DishAction::Cook(n) => {
                    self.portions += n;
                    Ok(self.portions)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client_raw_channel() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let task = tokio::spawn(async move {
            client
                .perform_action("soup".into(), DishAction::Cook(4))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "soup");
        assert!(matches!(action, DishAction::Cook(4)));
        responder.send(Ok(4)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create().return_ok("soup".to_string());
        mock.expect_list("r1").return_ok(vec![Dish {
            name: "soup".into(),
            portions: 2,
        }]);
        mock.expect_delete("soup".to_string())
            .return_err(FrameworkError::NotFound("dish:soup".into()));

        let client = mock.client();
        assert_eq!(client.create("soup".into()).await.unwrap(), "soup");
        assert_eq!(client.list("r1").await.unwrap().len(), 1);
        assert!(matches!(
            client.delete("soup".into()).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }
}
