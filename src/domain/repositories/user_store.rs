//! Store trait for account lookup.

use crate::domain::entities::User;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Resolves bearer tokens to accounts.
///
/// Token values are opaque strings here; how they are generated, hashed or
/// stored is the collaborator's concern.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryUserStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up the account an authentication token belongs to.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when the token matches no account
    /// - [`StoreError::Unavailable`] on backend failure
    async fn get_by_token(&self, token: &str) -> Result<User, StoreError>;
}
