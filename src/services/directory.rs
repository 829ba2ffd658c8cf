use crate::model::College;
use crate::state::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:80";
const COLLEGES_PATH: &str = "/api/v1/public/colleges";

/// Read-only client for the public institution directory. No retries, no
/// caching; every login screen mount fetches fresh.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_colleges(&self) -> AppResult<Vec<College>> {
        let url = format!("{}{}", self.base_url, COLLEGES_PATH);
        tracing::debug!(%url, "fetching institution directory");
        let colleges = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::DirectoryFetch(format!("Unable to fetch colleges: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::DirectoryFetch(format!("Unable to fetch colleges: {}", e)))?
            .json::<Vec<College>>()
            .await
            .map_err(|e| AppError::DirectoryFetch(format!("Unable to fetch colleges: {}", e)))?;
        tracing::info!(count = colleges.len(), "institution directory loaded");
        Ok(colleges)
    }
}
