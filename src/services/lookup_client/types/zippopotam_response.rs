use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ZippopotamResponsePlace {
    #[serde(rename = "place name")]
    pub place_name: String,
    pub longitude: String,
    pub latitude: String,
    pub state: String,
    #[serde(rename = "state abbreviation")]
    pub state_abbreviation: String,
}

#[derive(Serialize, Deserialize)]
pub struct ZippopotamResponse {
    #[serde(rename = "post code")]
    pub post_code: String,
    pub country: String,
    #[serde(rename = "country abbreviation")]
    pub country_abbreviation: String,
    #[serde(default)]
    pub places: Vec<ZippopotamResponsePlace>,
}
