//! Numeric user id path parameter.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Extractor for the `:id` segment of user routes.
///
/// Anything that is not a base-10 `i64` is answered with a JSON 400
/// instead of axum's plain-text path rejection.
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("invalid user id"))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| AppError::bad_request("invalid user id"))
    }
}
