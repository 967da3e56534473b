//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Two styles are available:
//! - [`MockClient`] queues canned responses up front and answers requests in order.
//! - [`create_mock_client`] hands back the raw receiver so a test can inspect each
//!   request with [`expect_open`], [`expect_get`] or [`expect_action`] and reply by hand.

use crate::framework::{FrameworkError, SessionClient, SessionEntity, SessionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued, canned reply.
enum Expectation<T: SessionEntity> {
    Open {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Close {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// ```ignore
/// let mut mock = MockClient::<CartSession>::new();
/// mock.expect_open().return_ok(SessionId(1));
/// mock.expect_action(SessionId(1)).return_ok(summary);
///
/// let client = CartClient::new(mock.client());
/// // ...
/// mock.verify();
/// ```
///
/// A request that does not match the next expectation (by kind and id) panics the
/// background task, which surfaces in the test as `ActorDropped`.
pub struct MockClient<T: SessionEntity> {
    client: SessionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();

                match (request, expectation) {
                    (
                        SessionRequest::Open { respond_to, .. },
                        Some(Expectation::Open { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Close { id, respond_to },
                        Some(Expectation::Close { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Close for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Action for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    /// Expects an `open` request.
    pub fn expect_open(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Open { response }
        })
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    /// Expects a `close` request for `id`.
    pub fn expect_close(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Close { id, response }
        })
    }

    /// Expects an action request for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Panics unless every queued expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: SessionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ExpectationBuilder<T: SessionEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: SessionEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }
}

/// Creates a client and the receiver its requests land on.
///
/// Useful when a test wants to look at the request payload (the action sent, say)
/// before deciding how to reply.
pub fn create_mock_client<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Returns the next request if it is an `Open`.
pub async fn expect_open<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Open, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Open { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Action`.
pub async fn expect_action<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
