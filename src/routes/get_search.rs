use std::sync::Arc;

use crate::{
    services::search_orchestrator::{SearchOrchestrator, SearchOutcome},
    types::{
        app_state::AppState,
        country::find_country,
        notification::{drain_notifications, notification_channel, Notification},
        search_state::SearchState,
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetSearchPayload {
    #[serde(default)]
    pub query: String,

    #[validate(length(equal = 2, message = "Must be a 2-letter country code"))]
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetSearchResponseData {
    pub state: SearchState,
    pub notifications: Vec<Notification>,
}

#[derive(Serialize, Deserialize)]
pub struct GetSearchResponse {
    pub data: GetSearchResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_search(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetSearchPayload>,
) -> Result<Response, AppError> {
    let requested = payload
        .country
        .unwrap_or_else(|| state.config.default_country.clone());
    let country = find_country(&requested).ok_or_else(|| {
        AppError::new(
            StatusCode::BAD_REQUEST,
            &format!("Unsupported country code: {}", requested),
        )
    })?;

    let (tx, mut rx) = notification_channel();
    let orchestrator = SearchOrchestrator::new(Arc::clone(&state.lookup), tx);

    match orchestrator.search(&payload.query, country.code).await {
        SearchOutcome::Found(_) | SearchOutcome::NoResults => Ok((
            StatusCode::OK,
            Json(GetSearchResponse {
                data: GetSearchResponseData {
                    state: orchestrator.state(),
                    notifications: drain_notifications(&mut rx),
                },
            }),
        )
            .into_response()),
        SearchOutcome::Invalid => Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "Please enter a search term",
        )),
        SearchOutcome::Failed(e) => Err(AppError::from(e)),
        // Requests never share an orchestrator, so nothing can supersede this one.
        SearchOutcome::Superseded => Err(AppError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )),
    }
}
