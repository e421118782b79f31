//! Core business entities.

mod form;
mod user;

pub use form::{Form, NewForm};
pub use user::User;
