//! # Mock Clients & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. Use it to test code that
//! *depends* on a resource (a group validating its members against the user actor, a
//! handler translating client errors) without spawning that resource's actor.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real store |
//! | **Error injection** | `return_err(..)` | Needs specific state |
//! | **Use case** | Logic *around* a client | The actor itself, full system |
//!
//! ## Testing Patterns
//!
//! 1. **Pure mock**: the code under test only talks to clients; script every answer.
//! 2. **Single actor**: spawn one `ResourceActor` and drive it through its client.
//! 3. **Actor with mocked dependencies**: spawn the actor under test with mock clients as
//!    its context (see `group_actor_test.rs` in the directory-server crate).
//! 4. **Full system**: start every actor and drive the public API end to end.
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
//!     type Context = (); type Error = TagError;
//!     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1 }));
//!     mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Some(Tag { id: 1 }));
//!     assert!(matches!(client.delete(2).await, Err(FrameworkError::NotFound(_))));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, for tests that want to
//! inspect the exact payload sent (`expect_create`, `expect_update`, …) and answer by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "get",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation (wrong operation or wrong id) is not answered, so the
/// caller sees [`FrameworkError::ActorDropped`], and [`MockClient::verify`] panics with
/// the mismatch.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => answer(&failures, "get", &expected, &id, respond_to, response),
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => answer(&failures, "update", &expected, &id, respond_to, response),
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => answer(&failures, "delete", &expected, &id, respond_to, response),
                    (request, Some(expectation)) => {
                        // recorded before `request` (and its responder) is dropped
                        failures.lock().unwrap().push(format!(
                            "expected {} request, got {}",
                            expectation.kind(),
                            request_kind(&request)
                        ));
                    }
                    (request, None) => {
                        failures.lock().unwrap().push(format!(
                            "unexpected {} request: no expectations left",
                            request_kind(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that all expectations were met and no request mismatched.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {:?}", *mismatches);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }
}

fn answer<I, R>(
    failures: &Mutex<Vec<String>>,
    operation: &str,
    expected: &I,
    actual: &I,
    respond_to: Response<R>,
    response: Result<R, FrameworkError>,
) where
    I: PartialEq + std::fmt::Display,
{
    if expected == actual {
        let _ = respond_to.send(response);
    } else {
        failures
            .lock()
            .unwrap()
            .push(format!("{operation}: expected id {expected}, got {actual}"));
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver.
///
/// The test plays the actor: receive with one of the `expect_*` helpers below, assert on
/// the payload, and answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request and returns it if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Badge {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct BadgeCreate {
        label: String,
    }

    #[derive(Debug)]
    struct BadgeUpdate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Badge error")]
    struct BadgeError;

    #[async_trait]
    impl ActorEntity for Badge {
        type Id = u32;
        type Create = BadgeCreate;
        type Update = BadgeUpdate;
        type Context = ();
        type Error = BadgeError;

        fn from_create_params(id: u32, params: BadgeCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(
            &mut self,
            update: BadgeUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            self.label = update.label;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_low_level_helpers_expose_payloads() {
        let (client, mut receiver) = create_mock_client::<Badge>(10);

        let create_client = client.clone();
        let create_task = tokio::spawn(async move {
            create_client
                .create(BadgeCreate {
                    label: "oncall".to_string(),
                })
                .await
        });
        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "oncall");
        responder.send(Ok(7)).unwrap();
        assert_eq!(create_task.await.unwrap().unwrap(), 7);

        let update_task = tokio::spawn(async move {
            client
                .update(
                    7,
                    BadgeUpdate {
                        label: "primary".to_string(),
                    },
                )
                .await
        });
        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 7);
        responder
            .send(Ok(Badge {
                id,
                label: update.label,
            }))
            .unwrap();
        assert_eq!(update_task.await.unwrap().unwrap().label, "primary");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_create().return_ok(1);
        mock.expect_update(1).return_ok(Badge {
            id: 1,
            label: "renamed".to_string(),
        });
        mock.expect_delete(1).return_ok(());
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let id = client
            .create(BadgeCreate {
                label: "new".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        let updated = client
            .update(
                1,
                BadgeUpdate {
                    label: "renamed".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.label, "renamed");
        client.delete(1).await.unwrap();
        assert!(client.get(1).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_rejects_wrong_id() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_delete(1).return_ok(());

        let result = mock.client().delete(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
    }
}
