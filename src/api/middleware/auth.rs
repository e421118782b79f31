//! Bearer token authentication middleware.
//!
//! Innermost of the always-on layers, so every route behind it can read the
//! resolved [`RequestIdentity`]. Anonymous requests are not rejected here;
//! that is the job of the per-route [`crate::api::middleware::guards`].
//!
//! # Header Format
//!
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! # Behavior
//!
//! - No `Authorization` header: attach [`RequestIdentity::Anonymous`], continue
//! - Header not exactly `Bearer <token>`: 401 with a `WWW-Authenticate: Bearer`
//!   challenge, chain stops
//! - Token of the wrong shape, or matching no account: 401 invalid credentials
//! - Store failure: logged with request context, generic 500
//! - Resolved account: attach [`RequestIdentity::Authenticated`], continue
//!
//! Every response, including the short-circuits, advertises
//! `Vary: Authorization` for caching correctness.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::identity::RequestIdentity;
use crate::domain::repositories::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Authentication tokens are opaque 26-byte strings.
const TOKEN_LENGTH: usize = 26;

pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let mut response = match resolve_identity(&state, &mut req).await {
        Ok(()) => next.run(req).await,
        Err(error) => error.into_response(),
    };

    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static("Authorization"));
    response
}

/// Resolves the request's identity and attaches it as a request extension.
async fn resolve_identity(state: &AppState, req: &mut Request) -> Result<(), AppError> {
    let Some(authorization) = req.headers().get(header::AUTHORIZATION) else {
        req.extensions_mut().insert(RequestIdentity::Anonymous);
        return Ok(());
    };

    let authorization = authorization
        .to_str()
        .map_err(|_| AppError::invalid_authentication_token())?;

    // Exactly a scheme-token pair with the Bearer scheme.
    let parts: Vec<&str> = authorization.split(' ').collect();
    let [scheme, token] = parts.as_slice() else {
        return Err(AppError::invalid_authentication_token());
    };
    if *scheme != "Bearer" {
        return Err(AppError::invalid_authentication_token());
    }

    if token.is_empty() || token.len() != TOKEN_LENGTH {
        return Err(AppError::invalid_credentials());
    }

    match state.users.get_by_token(token).await {
        Ok(user) => {
            req.extensions_mut()
                .insert(RequestIdentity::Authenticated(user));
            Ok(())
        }
        Err(StoreError::NotFound) => Err(AppError::invalid_credentials()),
        Err(error) => {
            tracing::error!(
                method = %req.method(),
                uri = %req.uri(),
                error = %error,
                "user lookup failed"
            );
            Err(AppError::server_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::MockUserStore;
    use crate::infrastructure::memory::{MemoryFormStore, MemoryPermissionStore};
    use crate::registry::ClientRegistry;
    use axum::body::Body;
    use chrono::Utc;
    use clap::Parser;
    use std::sync::Arc;

    const VALID_TOKEN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    fn state_with_users(users: MockUserStore) -> AppState {
        let config = crate::config::Config::try_parse_from(["bioaff-api"]).unwrap();
        AppState::new(
            Arc::new(config),
            Arc::new(ClientRegistry::new(2.0, 4)),
            Arc::new(users),
            Arc::new(MemoryPermissionStore::new()),
            Arc::new(MemoryFormStore::new()),
        )
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/v1/forms");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_yields_anonymous_identity() {
        let state = state_with_users(MockUserStore::new());
        let mut req = request(None);

        resolve_identity(&state, &mut req).await.unwrap();

        let identity = req.extensions().get::<RequestIdentity>().unwrap();
        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn wrong_scheme_is_a_malformed_header() {
        let state = state_with_users(MockUserStore::new());
        let mut req = request(Some("Token xyz"));

        let error = resolve_identity(&state, &mut req).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Unauthorized { challenge: true, .. }
        ));
    }

    #[tokio::test]
    async fn three_part_header_is_a_malformed_header() {
        let state = state_with_users(MockUserStore::new());
        let mut req = request(Some("Bearer two tokens"));

        let error = resolve_identity(&state, &mut req).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Unauthorized { challenge: true, .. }
        ));
    }

    #[tokio::test]
    async fn short_token_is_invalid_credentials_without_challenge() {
        let state = state_with_users(MockUserStore::new());
        let mut req = request(Some("Bearer malformedtoken!"));

        let error = resolve_identity(&state, &mut req).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Unauthorized {
                challenge: false,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid_credentials() {
        let mut users = MockUserStore::new();
        users
            .expect_get_by_token()
            .returning(|_| Err(StoreError::NotFound));
        let state = state_with_users(users);
        let mut req = request(Some(&format!("Bearer {VALID_TOKEN}")));

        let error = resolve_identity(&state, &mut req).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Unauthorized {
                challenge: false,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn store_failure_is_a_server_error() {
        let mut users = MockUserStore::new();
        users
            .expect_get_by_token()
            .returning(|_| Err(StoreError::Unavailable("connection refused".into())));
        let state = state_with_users(users);
        let mut req = request(Some(&format!("Bearer {VALID_TOKEN}")));

        let error = resolve_identity(&state, &mut req).await.unwrap_err();
        assert!(matches!(error, AppError::Internal));
    }

    #[tokio::test]
    async fn known_token_attaches_the_authenticated_user() {
        let mut users = MockUserStore::new();
        users.expect_get_by_token().returning(|_| {
            Ok(User {
                id: 7,
                name: "Alice Rivera".into(),
                email: "alice@example.com".into(),
                activated: true,
                created_at: Utc::now(),
            })
        });
        let state = state_with_users(users);
        let mut req = request(Some(&format!("Bearer {VALID_TOKEN}")));

        resolve_identity(&state, &mut req).await.unwrap();

        let identity = req.extensions().get::<RequestIdentity>().unwrap();
        assert_eq!(identity.user().unwrap().id, 7);
    }
}
