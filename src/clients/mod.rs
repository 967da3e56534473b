//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod cart_client;

pub use cart_client::*;
