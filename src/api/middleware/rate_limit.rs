//! Per-client rate limiting middleware.
//!
//! Runs before authentication so unauthenticated flooding is throttled too;
//! the limiter keys on the peer IP address, not on identity. With the
//! limiter disabled in configuration every request passes through
//! unconditionally.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.config.limiter_enabled {
        return Ok(next.run(req).await);
    }

    let ip = match client_ip(&req) {
        Some(ip) => ip,
        None => {
            // Fail closed to a server error, never to an unmetered admit.
            tracing::error!(
                method = %req.method(),
                uri = %req.uri(),
                "client address unavailable for rate limiting"
            );
            return Err(AppError::server_error());
        }
    };

    if !state.registry.admit(ip) {
        return Err(AppError::rate_limit_exceeded());
    }

    Ok(next.run(req).await)
}

/// Client identity for rate limiting: the peer address with the port
/// stripped. Present only when the server is built with connect info.
fn client_ip(req: &Request) -> Option<IpAddr> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip())
}
