//! Account entity for form submitters.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered account.
///
/// The password hash never leaves the user store, so it is not part of this
/// entity. `activated` gates access to protected routes via
/// [`crate::api::middleware::guards`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}
