use std::future::Future;

use reqwest::StatusCode;
use thiserror::Error;

use crate::data_models::{BookResult, parse_results};

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("network response was not ok: {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a search query with a list of books.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<BookResult>, SearchError>> + Send;
}

/// HTTP client for the search collaborator's `GET /api/search` endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> SearchClient {
        SearchClient {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<BookResult>, SearchError> {
        log::info!("searching {} for {:?}", self.endpoint, query);
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = res.text().await?;
        let books = parse_results(&body)?;
        log::info!("received {} results for {:?}", books.len(), query);
        Ok(books)
    }
}
