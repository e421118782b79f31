//! CORS middleware with an exact-match trusted-origin list.
//!
//! Grants `Access-Control-Allow-Origin` only when the request's `Origin`
//! header equals one of the configured trusted origins, compared
//! case-sensitively. An untrusted origin is not an error: the chain always
//! continues and the browser enforces the missing grant. Every response
//! advertises `Vary: Origin` so shared caches never serve a response
//! granted to one origin to another.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(req).await;

    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static("Origin"));

    if let Some(origin) = origin
        && state
            .config
            .cors_trusted_origins
            .iter()
            .any(|trusted| *trusted == origin)
        && let Ok(value) = HeaderValue::from_str(&origin)
    {
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }

    response
}
