use serde::{Deserialize, Serialize};

/// User input for one lookup. The country code is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupQuery {
    pub raw_text: String,
    pub country_code: String,
}

impl LookupQuery {
    pub fn new(raw_text: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            country_code: country_code.into(),
        }
    }

    /// Trimmed query with everything except ASCII alphanumerics, whitespace
    /// and hyphens removed.
    pub fn sanitized(&self) -> String {
        sanitize_query(&self.raw_text)
    }

    /// Country segment used in the lookup path.
    pub fn country_path(&self) -> String {
        self.country_code.trim().to_lowercase()
    }
}

pub fn sanitize_query(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceMatch {
    pub name: String,
    pub region: String,
    pub region_abbreviation: String,
    pub latitude: String,
    pub longitude: String,
}

/// Normalized response for one postcode/country search. Places keep the
/// order the service returned them in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub postcode: String,
    pub country_code: String,
    pub country_abbreviation: String,
    pub places: Vec<PlaceMatch>,
}

impl LookupResult {
    pub fn is_displayable(&self) -> bool {
        !self.places.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub postcode: String,
    pub country_code: String,
    pub primary_place_name: String,
}

impl SuggestionEntry {
    /// Projects the first place of a result; `None` when there are no places.
    pub fn from_result(result: &LookupResult) -> Option<Self> {
        result.places.first().map(|place| SuggestionEntry {
            postcode: result.postcode.clone(),
            country_code: result.country_abbreviation.clone(),
            primary_place_name: place.name.clone(),
        })
    }
}
