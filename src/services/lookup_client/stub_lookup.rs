use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

use super::{lookup_service::PostcodeLookup, types::lookup_error::LookupError};
use crate::types::lookup_result::{LookupQuery, LookupResult, PlaceMatch};

/// In-memory lookup that records every call it receives.
#[derive(Clone, Default)]
pub struct StubLookup {
    responses: Arc<Mutex<HashMap<String, Result<LookupResult, LookupError>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<LookupQuery>>>,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, query: &str, response: Result<LookupResult, LookupError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), response);
    }

    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<LookupQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_texts(&self) -> Vec<String> {
        self.calls().into_iter().map(|q| q.raw_text).collect()
    }
}

#[async_trait]
impl PostcodeLookup for StubLookup {
    async fn lookup(&self, query: &LookupQuery) -> Result<LookupResult, LookupError> {
        self.calls.lock().unwrap().push(query.clone());

        let delay = self.delays.lock().unwrap().get(&query.raw_text).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(&query.raw_text)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}

pub fn us_result(postcode: &str, places: &[&str]) -> LookupResult {
    LookupResult {
        postcode: postcode.to_string(),
        country_code: "United States".to_string(),
        country_abbreviation: "US".to_string(),
        places: places
            .iter()
            .map(|name| PlaceMatch {
                name: name.to_string(),
                region: "California".to_string(),
                region_abbreviation: "CA".to_string(),
                latitude: "34.0901".to_string(),
                longitude: "-118.4065".to_string(),
            })
            .collect(),
    }
}
