//! # Session Messages
//!
//! The request envelope passed from [`SessionClient`](crate::framework::SessionClient)
//! to [`SessionActor`](crate::framework::SessionActor).

use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// A session has a short lifecycle: it is opened, acted upon any number of times,
/// read, and finally closed. There is no generic update; every mutation goes through
/// [`SessionEntity::Action`] so the entity owns its own invariants.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Open {
        params: T::Open,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Close {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
