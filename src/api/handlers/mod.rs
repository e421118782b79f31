//! API route handlers.

mod forms;
mod health;

pub use forms::{show_form_handler, submit_form_handler};
pub use health::healthcheck_handler;
