//! Runtime orchestration and lifecycle management.
//!
//! - [`StorefrontSystem`] - starts the cart actor, injects the catalog and shuts everything down
//! - [`setup_tracing`] - initializes the tracing subscriber

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
