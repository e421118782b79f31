//! # BioAff API
//!
//! A JSON HTTP API backing an affidavit-form submission and user-account
//! workflow, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core entities and store traits
//! - **Infrastructure Layer** ([`infrastructure`]) - Store implementations
//! - **API Layer** ([`api`]) - Handlers, DTOs and the middleware chain
//!
//! The load-bearing pieces are the composed middleware chain
//! (panic recovery → CORS → rate limiting → authentication, see
//! [`api::middleware`]) and the per-client token-bucket rate limiter
//! ([`limiter`], [`registry`]). Everything else is thin plumbing around
//! them.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --port 4000 --limiter-rps 2 --limiter-burst 4 \
//!     --cors-trusted-origin "https://bioaff.example.com"
//! ```
//!
//! ## Configuration
//!
//! Parsed once from command-line flags via [`config::Config`]; see the
//! [`config`] module for the flag surface.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod limiter;
pub mod registry;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::identity::{IdentityExt, RequestIdentity};
    pub use crate::domain::entities::{Form, NewForm, User};
    pub use crate::error::AppError;
    pub use crate::registry::ClientRegistry;
    pub use crate::state::AppState;
}
