//! Request/response body types for the API.

pub mod forms;
pub mod health;
