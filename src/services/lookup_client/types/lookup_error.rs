use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter a search term")]
    EmptyQuery,

    #[error("No results found")]
    NotFound,

    #[error("API request failed with status {0}")]
    Status(u16),

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to get response body: {0}")]
    Decode(String),
}
