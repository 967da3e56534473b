//! Generic session framework.
//!
//! This module provides the building blocks for keeping per-session state (such as a
//! shopper's cart) inside a single actor task, addressed by a typed session id.
//!
//! # Main Components
//!
//! - [`SessionEntity`] - Trait that session state types implement to be managed by the actor
//! - [`SessionActor`] - Generic actor that owns every open session of one type
//! - [`SessionClient`] - Cloneable handle used to send requests to the actor
//! - [`ActorClient`] - Trait that domain clients implement to inherit `get` and `close`
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use client_trait::ActorClient;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
