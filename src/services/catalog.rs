use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::domain::Product;
use crate::services::error::SearchError;

/// Source of product search results - allows for mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError>;
}

/// Catalog backed by the remote `GET /products?q=` endpoint
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.products_url()))]
    async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError> {
        let response = self
            .client
            .get(self.products_url())
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;
        debug!("Received {} products", products.len());
        Ok(products)
    }
}

pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::time::{Duration, sleep};

    /// Canned catalog that records every query it is asked for
    #[derive(Clone, Default)]
    pub struct RecordingCatalog {
        responses: Arc<Mutex<HashMap<String, Vec<Product>>>>,
        failure_status: Arc<Mutex<Option<u16>>>,
        delay_ms: Arc<Mutex<u64>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingCatalog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, query: &str, products: Vec<Product>) -> Self {
            self.responses.lock().insert(query.to_string(), products);
            self
        }

        pub fn failing_with_status(self, status: u16) -> Self {
            *self.failure_status.lock() = Some(status);
            self
        }

        pub fn with_delay_ms(self, delay_ms: u64) -> Self {
            *self.delay_ms.lock() = delay_ms;
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ProductCatalog for RecordingCatalog {
        async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError> {
            self.calls.lock().push(query.to_string());

            let delay = *self.delay_ms.lock();
            if delay > 0 {
                sleep(Duration::from_millis(delay)).await;
            }

            if let Some(status) = *self.failure_status.lock() {
                return Err(SearchError::Status(status));
            }

            // Unknown queries behave like an endpoint with no matches
            Ok(self.responses.lock().get(query).cloned().unwrap_or_default())
        }
    }
}
