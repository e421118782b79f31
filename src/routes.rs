//! Router configuration and middleware composition.
//!
//! # Route Structure
//!
//! - `GET  /v1/healthcheck` - service availability (public)
//! - `POST /v1/forms`       - submit a form (`forms:write` permission)
//! - `GET  /v1/forms/{id}`  - fetch a form (`forms:read` permission)
//!
//! # Middleware
//!
//! The always-on chain runs panic recovery outermost, then CORS, then rate
//! limiting, then authentication; permission guards are attached per route
//! inside the chain. Request tracing wraps everything for observability but
//! never writes a response, so it sits outside even the panic boundary.

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{healthcheck_handler, show_form_handler, submit_form_handler};
use crate::api::middleware::{auth, cors, guards, rate_limit, recover, tracing};
use crate::state::AppState;

/// Builds the `/v1` router with the full middleware chain applied.
///
/// Axum runs the most recently added layer first, so the chain is listed
/// innermost to outermost below.
pub fn api_router(state: AppState) -> Router {
    let submit = Router::new()
        .route("/forms", post(submit_form_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_forms_write,
        ));

    let show = Router::new()
        .route("/forms/{id}", get(show_form_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guards::require_forms_read,
        ));

    let v1 = Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .merge(submit)
        .merge(show);

    Router::new()
        .nest("/v1", v1)
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::layer,
        ))
        .layer(middleware::from_fn_with_state(state.clone(), cors::layer))
        .layer(middleware::from_fn(recover::layer))
        .layer(tracing::layer())
        .with_state(state)
}

/// The served application: the API router with trailing slashes normalized.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
