//! Store trait for affidavit forms.

use crate::domain::entities::{Form, NewForm};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Persists and retrieves submitted forms.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryFormStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Creates a new form record, assigning its id, timestamp and version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failure.
    async fn create(&self, new_form: NewForm) -> Result<Form, StoreError>;

    /// Fetches a form by id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when no form has this id
    /// - [`StoreError::Unavailable`] on backend failure
    async fn get(&self, id: i64) -> Result<Form, StoreError>;
}
