//! Form submission response envelope.

use serde::Serialize;

use crate::domain::entities::Form;

/// `{"form": ...}` envelope wrapping a single form record.
#[derive(Serialize)]
pub struct FormResponse {
    pub form: Form,
}
