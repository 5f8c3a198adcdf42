use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated identity was present on the request.
    ///
    /// The upstream authentication layer is expected to inject the requesting
    /// user's identity into every request; its absence means the request never
    /// passed authentication. Results in a 401 Unauthorized response.
    #[error("Missing authenticated user identity on request")]
    MissingIdentity,

    /// The requester is not allowed to perform this mutation.
    ///
    /// Creator-only operations (closing a prayer, changing participants, and
    /// optionally update/delete under strict ownership) reject any other
    /// identity. Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Message naming the operation that was denied
    #[error("{0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For requests with no authenticated identity
/// - 403 Forbidden - For creator-only operations attempted by another user
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingIdentity => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
        }
    }
}
