use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::app_error::AppError;

/// Query string extractor that runs `validator` rules before the handler.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!("Rejected query for {}: {}", parts.uri, e);
                let message = match e.source() {
                    Some(source) => format!("Invalid query: {}", source),
                    None => e.body_text(),
                };
                AppError::new(StatusCode::BAD_REQUEST, &message)
            })?;

        data.validate().map_err(|e| {
            AppError::new(StatusCode::BAD_REQUEST, &format!("Invalid query: {}", e))
        })?;

        Ok(ValidatedQuery(data))
    }
}
