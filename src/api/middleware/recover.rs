//! Panic recovery middleware.
//!
//! Outermost layer of the chain: an unhandled panic in any inner layer or
//! handler becomes a single generic 500 response instead of tearing down
//! the connection task. The response carries `Connection: close` because
//! in-process state may be inconsistent after a panic, so the keep-alive
//! connection must not be reused.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;

use crate::error::AppError;

/// Wraps the rest of the chain in a panic boundary.
pub async fn layer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                method = %method,
                uri = %uri,
                panic = %panic_message(panic.as_ref()),
                "recovered from panic"
            );

            let mut response = AppError::server_error().into_response();
            response
                .headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
            response
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
