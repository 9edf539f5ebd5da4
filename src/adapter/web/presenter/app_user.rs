use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::core::domain::validation::ValidationResult;
use crate::core::port::error::AppUserError;

/// Turns use-case outcomes into HTTP responses. The only place error payloads are built.
pub struct AppUserPresenter;

impl AppUserPresenter {
    pub(crate) fn success() -> Response {
        StatusCode::OK.into_response()
    }

    pub(crate) fn found<T: Serialize>(body: T) -> Response {
        (StatusCode::OK, Json(body)).into_response()
    }

    /// `diagnostic` is the only text a 500 ever exposes; the error itself is logged.
    pub(crate) fn failure(error: AppUserError, diagnostic: &str) -> Response {
        match error {
            AppUserError::ValidationError(e) => {
                debug!(error = %e, "rejecting invalid AppUser request");
                (StatusCode::BAD_REQUEST, Json(e.result())).into_response()
            }
            AppUserError::NotFound { id } => {
                debug!(id = %id, "AppUser not found");
                StatusCode::NOT_FOUND.into_response()
            }
            conflict @ AppUserError::Conflict { .. } => {
                let mut result = ValidationResult::new();
                result.reject(conflict.to_string());
                (StatusCode::CONFLICT, Json(result)).into_response()
            }
            unexpected => {
                error!(error = ?unexpected, "{}", diagnostic);
                (StatusCode::INTERNAL_SERVER_ERROR, diagnostic.to_string()).into_response()
            }
        }
    }
}
