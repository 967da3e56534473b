//! Pure data structures: the catalog record, the cart reducer and the cart session.
//!
//! Nothing in here touches a channel; [`CartSession`] is made actor-managed by the
//! [`SessionEntity`](crate::framework::SessionEntity) impl in [`crate::cart_actor`].

pub mod cart;
pub mod money;
pub mod product;
pub mod session;

pub use cart::*;
pub use money::*;
pub use product::*;
pub use session::*;
