//! Handlers for affidavit form submission and retrieval.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};

use crate::api::dto::forms::FormResponse;
use crate::domain::entities::NewForm;
use crate::domain::repositories::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new affidavit form.
///
/// # Endpoint
///
/// `POST /v1/forms` - guarded by the `forms:write` permission.
///
/// Responds `201 Created` with a `Location` header pointing at the new
/// resource and the created record in a `{"form": ...}` envelope.
pub async fn submit_form_handler(
    State(state): State<AppState>,
    Json(new_form): Json<NewForm>,
) -> Result<(StatusCode, HeaderMap, Json<FormResponse>), AppError> {
    let form = state.forms.create(new_form).await.map_err(|error| {
        tracing::error!(error = %error, "form creation failed");
        AppError::server_error()
    })?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/v1/forms/{}", form.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(FormResponse { form })))
}

/// Fetches a single affidavit form by id.
///
/// # Endpoint
///
/// `GET /v1/forms/{id}` - guarded by the `forms:read` permission.
pub async fn show_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FormResponse>, AppError> {
    match state.forms.get(id).await {
        Ok(form) => Ok(Json(FormResponse { form })),
        Err(StoreError::NotFound) => Err(AppError::not_found()),
        Err(error) => {
            tracing::error!(form_id = id, error = %error, "form lookup failed");
            Err(AppError::server_error())
        }
    }
}
