use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::types::country::{Country, SUPPORTED_COUNTRIES};

#[derive(Serialize)]
pub struct GetCountriesResponseData {
    pub countries: &'static [Country],
}

#[derive(Serialize)]
pub struct GetCountriesResponse {
    pub data: GetCountriesResponseData,
}

pub async fn get_countries() -> Response {
    (
        StatusCode::OK,
        Json(GetCountriesResponse {
            data: GetCountriesResponseData {
                countries: SUPPORTED_COUNTRIES,
            },
        }),
    )
        .into_response()
}
