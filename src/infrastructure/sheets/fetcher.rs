use std::time::Duration;

use crate::domain::error::{AppError, Result};

/// HTTP client for published-sheet CSV exports.
pub struct SheetFetcher {
    client: reqwest::Client,
}

impl SheetFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("sheetfed/0.1")
            .build()
            .map_err(|e| AppError::FetchError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Downloads the CSV body behind `url`.
    ///
    /// A non-success status is an error even though the transport
    /// succeeded; published sheets answer 4xx when unpublished.
    pub async fn fetch_csv(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching sheet CSV from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchError(format!(
                "Sheet request failed with status {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok(body)
    }

    /// Fire-and-forget POST of a JSON payload.
    ///
    /// Mirrors an opaque cross-origin submit: the request is sent and any
    /// response body or status is ignored. Only transport failures
    /// surface as errors.
    pub async fn post_json_opaque<T: serde::Serialize>(&self, url: &str, payload: &T) -> Result<()> {
        tracing::debug!("Posting form payload to {}", url);

        self.client.post(url).json(payload).send().await?;

        Ok(())
    }
}
