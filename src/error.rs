//! Application error type and its JSON response mapping.
//!
//! Every client-facing failure is expressed as an [`AppError`] and rendered
//! as a `{"error": ...}` envelope. Expected conditions (401/403/404/429)
//! carry a specific message; server faults always render the same generic
//! message so backend detail never leaks to the client. Logging of faults
//! happens at the call site, where request context is available.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Generic message for every 500 response.
const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process the request";

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unauthorized { message: String, challenge: bool },
    Forbidden { message: String },
    RateLimited,
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: "the requested resource could not be found".into(),
        }
    }

    /// 401 with a `WWW-Authenticate: Bearer` challenge, for a missing or
    /// malformed `Authorization` header.
    pub fn invalid_authentication_token() -> Self {
        Self::Unauthorized {
            message: "invalid or missing authorization token".into(),
            challenge: true,
        }
    }

    /// 401 for credentials that are well-formed but do not resolve to a user.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized {
            message: "invalid authentication credentials".into(),
            challenge: false,
        }
    }

    pub fn authentication_required() -> Self {
        Self::Unauthorized {
            message: "you must be authenticated to access this resource".into(),
            challenge: false,
        }
    }

    pub fn inactive_account() -> Self {
        Self::Forbidden {
            message: "your user account must be activated to access this resource".into(),
        }
    }

    pub fn not_permitted() -> Self {
        Self::Forbidden {
            message: "your user account does not have the necessary permission to access this resource".into(),
        }
    }

    pub fn rate_limit_exceeded() -> Self {
        Self::RateLimited
    }

    pub fn server_error() -> Self {
        Self::Internal
    }

    fn status_and_message(&self) -> (StatusCode, Value) {
        match self {
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, json!(message)),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, json!(message)),
            Self::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, json!(message)),
            Self::Forbidden { message } => (StatusCode::FORBIDDEN, json!(message)),
            Self::RateLimited => (StatusCode::TOO_MANY_REQUESTS, json!("rate limit exceeded")),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!(SERVER_ERROR_MESSAGE),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let challenge = matches!(
            self,
            Self::Unauthorized {
                challenge: true,
                ..
            }
        );
        let (status, message) = self.status_and_message();

        let mut response = (status, Json(json!({ "error": message }))).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
