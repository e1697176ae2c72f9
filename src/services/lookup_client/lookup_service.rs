use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use urlencoding::encode;

use super::types::{lookup_error::LookupError, zippopotam_response::ZippopotamResponse};
use crate::types::lookup_result::{LookupQuery, LookupResult, PlaceMatch};

pub const DEFAULT_LOOKUP_HOST: &str = "https://api.zippopotam.us";

/// Anything that can resolve a postcode query into places.
#[async_trait]
pub trait PostcodeLookup: Send + Sync {
    async fn lookup(&self, query: &LookupQuery) -> Result<LookupResult, LookupError>;
}

#[derive(Clone)]
pub struct LookupServiceConfig {
    pub host: String,
}

impl Default for LookupServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_LOOKUP_HOST.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct LookupService {
    config: LookupServiceConfig,
    client: reqwest::Client,
}

impl LookupService {
    pub fn new(config: LookupServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, country: &str, sanitized: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.host.trim_end_matches('/'),
            encode(country),
            encode(sanitized)
        )
    }
}

#[async_trait]
impl PostcodeLookup for LookupService {
    async fn lookup(&self, query: &LookupQuery) -> Result<LookupResult, LookupError> {
        let sanitized = query.sanitized();
        if sanitized.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = self.url_for(&query.country_path(), &sanitized);
        debug!("Fetching {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            status if !status.is_success() => return Err(LookupError::Status(status.as_u16())),
            _ => {}
        }

        let body = resp
            .json::<ZippopotamResponse>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(LookupResult {
            postcode: body.post_code,
            country_code: body.country,
            country_abbreviation: body.country_abbreviation,
            places: body
                .places
                .into_iter()
                .map(|p| PlaceMatch {
                    name: p.place_name,
                    region: p.state,
                    region_abbreviation: p.state_abbreviation,
                    latitude: p.latitude,
                    longitude: p.longitude,
                })
                .collect(),
        })
    }
}
