use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::{auth::AuthError, AppError};

/// Header carrying the authenticated user identity.
///
/// Authentication itself happens upstream (gateway or auth middleware); by the
/// time a request reaches this service the verified identity has been injected
/// into this header. Requests without it are rejected with 401.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user on the current request.
///
/// Extractor used by every handler that needs the requesting identity, e.g.
/// to stamp `creator_id` on creation or enforce creator-only mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingIdentity)?;

        Ok(CurrentUser { id: id.to_string() })
    }
}
