use thiserror::Error;

/// Failures talking to the product search endpoint
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search endpoint answered with status {0}")]
    Status(u16),

    #[error("Could not decode search results: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Whether the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Request(_))
    }
}
