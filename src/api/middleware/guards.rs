//! Per-route authorization guards.
//!
//! These compose by delegation: the permission guards run the activated
//! check, which runs the authenticated check first, so a route gets the
//! most specific rejection that applies (401 before 403, 403 inactive
//! before 403 not-permitted). All of them read the identity attached by
//! [`crate::api::middleware::auth`] and fail fast if it is missing.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::identity::IdentityExt;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Permission required to submit forms.
pub const FORMS_WRITE: &str = "forms:write";
/// Permission required to read forms.
pub const FORMS_READ: &str = "forms:read";

/// Rejects anonymous requests with 401.
pub async fn require_authenticated(req: Request, next: Next) -> Result<Response, AppError> {
    authenticated_user(&req)?;
    Ok(next.run(req).await)
}

/// Rejects anonymous requests with 401 and non-activated accounts with 403.
pub async fn require_activated(req: Request, next: Next) -> Result<Response, AppError> {
    activated_user(&req)?;
    Ok(next.run(req).await)
}

/// Guard for routes that create or modify forms.
pub async fn require_forms_write(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_permission(&state, FORMS_WRITE, req, next).await
}

/// Guard for routes that read forms.
pub async fn require_forms_read(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_permission(&state, FORMS_READ, req, next).await
}

/// Admits only activated accounts holding the permission `code`.
async fn require_permission(
    state: &AppState,
    code: &str,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = activated_user(&req)?.id;

    let permissions = match state.permissions.get_for_user(user_id).await {
        Ok(permissions) => permissions,
        Err(error) => {
            tracing::error!(
                method = %req.method(),
                uri = %req.uri(),
                user_id,
                error = %error,
                "permission lookup failed"
            );
            return Err(AppError::server_error());
        }
    };

    if !permissions.contains(code) {
        return Err(AppError::not_permitted());
    }

    Ok(next.run(req).await)
}

fn authenticated_user(req: &Request) -> Result<&User, AppError> {
    req.identity()?
        .user()
        .ok_or_else(AppError::authentication_required)
}

fn activated_user(req: &Request) -> Result<&User, AppError> {
    let user = authenticated_user(req)?;
    if !user.activated {
        return Err(AppError::inactive_account());
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::identity::RequestIdentity;
    use axum::body::Body;
    use chrono::Utc;

    fn user(activated: bool) -> User {
        User {
            id: 1,
            name: "Alice Rivera".into(),
            email: "alice@example.com".into(),
            activated,
            created_at: Utc::now(),
        }
    }

    fn request_with(identity: RequestIdentity) -> Request {
        let mut req = Request::builder().body(Body::empty()).unwrap();
        req.extensions_mut().insert(identity);
        req
    }

    #[test]
    fn anonymous_requests_need_authentication() {
        let req = request_with(RequestIdentity::Anonymous);

        let error = authenticated_user(&req).unwrap_err();
        assert!(matches!(error, AppError::Unauthorized { .. }));
    }

    #[test]
    fn inactive_accounts_are_forbidden() {
        let req = request_with(RequestIdentity::Authenticated(user(false)));

        assert!(authenticated_user(&req).is_ok());
        let error = activated_user(&req).unwrap_err();
        assert!(matches!(error, AppError::Forbidden { .. }));
    }

    #[test]
    fn activated_accounts_pass_both_checks() {
        let req = request_with(RequestIdentity::Authenticated(user(true)));

        assert_eq!(activated_user(&req).unwrap().id, 1);
    }

    #[test]
    fn missing_identity_is_a_server_error() {
        let req = Request::builder().body(Body::empty()).unwrap();

        let error = authenticated_user(&req).unwrap_err();
        assert!(matches!(error, AppError::Internal));
    }
}
