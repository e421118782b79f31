//! Store trait for permission lookup.

use crate::domain::repositories::StoreError;
use async_trait::async_trait;
use std::collections::HashSet;

/// Provides the set of permission codes granted to an account.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryPermissionStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Returns all permission codes held by `user_id`.
    ///
    /// A user with no grants yields an empty set, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failure.
    async fn get_for_user(&self, user_id: i64) -> Result<HashSet<String>, StoreError>;
}
