//! Data-access trait seams consumed by the middleware chain and handlers.
//!
//! The chain never talks to storage directly; it goes through these traits
//! so the authentication and permission layers can be tested in isolation.

mod form_store;
mod permission_store;
mod user_store;

pub use form_store::FormStore;
pub use permission_store::PermissionStore;
pub use user_store::UserStore;

#[cfg(test)]
pub use form_store::MockFormStore;
#[cfg(test)]
pub use permission_store::MockPermissionStore;
#[cfg(test)]
pub use user_store::MockUserStore;

use thiserror::Error;

/// Failure modes shared by every store.
///
/// `NotFound` is an expected condition the caller maps to a client-facing
/// status; `Unavailable` is a backend fault the caller logs and converts to
/// a generic 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
