//! # Session Actor
//!
//! The server half of the framework. A `SessionActor` owns every open session of one
//! entity type and processes requests strictly one at a time, so session state never
//! needs a lock.

use crate::framework::client::SessionClient;
use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::SessionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a set of sessions.
///
/// **Concurrency Model**:
/// Many clients may talk to the actor at once, but the `run` loop handles a single
/// request at a time. Two shoppers hold two distinct entries in `sessions` and can
/// never observe each other's state.
///
/// # Usage Pattern
///
/// 1. **Create**: `SessionActor::new()` returns the actor and a client.
/// 2. **Wire**: pass the shared dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// Sessions are discarded when closed or when the actor shuts down; nothing is persisted.
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    /// `None` once every `u32` id has been handed out.
    next_id: Option<u32>,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates a new `SessionActor` and its associated `SessionClient`.
    ///
    /// `buffer_size` is the capacity of the request channel and must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: Some(1),
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// The `context` is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { params, respond_to } => {
                    debug!(entity_type, ?params, "Open");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Open refused, no ids left");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw_id.checked_add(1);
                    let id = T::Id::from(raw_id);

                    match T::from_open_params(id.clone(), params) {
                        Ok(mut session) => {
                            if let Err(e) = session.on_open(&context).await {
                                warn!(entity_type, error = %e, "on_open failed");
                                let _ = respond_to
                                    .send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.sessions.insert(id.clone(), session);
                            info!(entity_type, %id, size = self.sessions.len(), "Opened");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Open failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                SessionRequest::Get { id, respond_to } => {
                    let session = self.sessions.get(&id).cloned();
                    debug!(entity_type, %id, found = session.is_some(), "Get");
                    let _ = respond_to.send(Ok(session));
                }
                SessionRequest::Close { id, respond_to } => {
                    debug!(entity_type, %id, "Close");
                    let Some(session) = self.sessions.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = session.on_close(&context).await {
                        warn!(entity_type, %id, error = %e, "on_close failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.sessions.remove(&id);
                    info!(entity_type, %id, size = self.sessions.len(), "Closed");
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = session
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.sessions.len(), "Shutdown");
    }
}
