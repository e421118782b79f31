//! Request-scoped identity carrier.
//!
//! The authenticate middleware attaches a [`RequestIdentity`] to every
//! request it forwards. Downstream layers read it through [`IdentityExt`],
//! which fails fast with a 500 when a route was wired up without the
//! authenticate layer in front of it.

use axum::http::Request;

use crate::domain::entities::User;
use crate::error::AppError;

/// Who is making the in-flight request.
///
/// Exactly one instance is attached per request, scoped to the request's
/// lifetime; it is never persisted.
#[derive(Debug, Clone)]
pub enum RequestIdentity {
    Anonymous,
    Authenticated(User),
}

impl RequestIdentity {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// The authenticated account, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Typed accessor for the identity attached to a request.
pub trait IdentityExt {
    /// Returns the resolved identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when no identity is attached, i.e. the
    /// authenticate layer has not run for this request. That is a routing
    /// bug, not a client error.
    fn identity(&self) -> Result<&RequestIdentity, AppError>;
}

impl<B> IdentityExt for Request<B> {
    fn identity(&self) -> Result<&RequestIdentity, AppError> {
        self.extensions().get::<RequestIdentity>().ok_or_else(|| {
            tracing::error!(
                method = %self.method(),
                uri = %self.uri(),
                "identity read before the authenticate layer ran"
            );
            AppError::server_error()
        })
    }
}
