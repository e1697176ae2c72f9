use crate::{
    services::suggestion_fetcher::fetch_suggestions,
    types::{app_state::AppState, lookup_result::SuggestionEntry},
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
pub struct GetSuggestionsPayload {
    #[serde(default)]
    #[validate(length(max = 32, message = "Must be at most 32 characters"))]
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetSuggestionsResponseData {
    pub country: String,
    pub entries: Vec<SuggestionEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct GetSuggestionsResponse {
    pub data: GetSuggestionsResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetSuggestionsPayload>,
) -> Result<Response, AppError> {
    let country = state.config.suggestion_country.clone();
    let entries = fetch_suggestions(state.lookup.as_ref(), &country, &payload.query).await;

    Ok((
        StatusCode::OK,
        Json(GetSuggestionsResponse {
            data: GetSuggestionsResponseData { country, entries },
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        app::gen_app, services::lookup_client::lookup_service::tests::beverly_hills_response,
        utils::app_config::AppConfig,
    };

    use super::*;

    async fn call(app: axum::Router, uri: &str) -> GetSuggestionsResponse {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn get_response() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(&AppConfig {
            lookup_host: mock_server.url(),
            ..AppConfig::default()
        });

        let mock_server = mock_server
            .mock("GET", "/us/90210")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&beverly_hills_response()).unwrap())
            .create_async()
            .await;

        let body = call(app, "/suggestions?query=90210").await;

        mock_server.assert_async().await;

        assert_eq!(body.data.country, "US");
        assert_eq!(body.data.entries.len(), 1);
        assert_eq!(body.data.entries[0].postcode, "90210");
        assert_eq!(body.data.entries[0].country_code, "US");
        assert_eq!(body.data.entries[0].primary_place_name, "Beverly Hills");
    }

    #[tokio::test]
    async fn short_query_skips_lookup() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(&AppConfig {
            lookup_host: mock_server.url(),
            ..AppConfig::default()
        });

        let mock_server = mock_server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let body = call(app, "/suggestions?query=9").await;

        mock_server.assert_async().await;
        assert!(body.data.entries.is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_yields_empty_list() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(&AppConfig {
            lookup_host: mock_server.url(),
            suggestion_country: "GB".to_string(),
            ..AppConfig::default()
        });

        let mock_server = mock_server
            .mock("GET", "/gb/SW1A")
            .with_status(404)
            .create_async()
            .await;

        let body = call(app, "/suggestions?query=SW1A").await;

        mock_server.assert_async().await;
        assert_eq!(body.data.country, "GB");
        assert!(body.data.entries.is_empty());
    }
}
