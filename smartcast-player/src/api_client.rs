use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use smartcast_model::VideoRecord;
use std::time::Duration;
use url::Url;

/// Client for the catalog API
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for `base_url` (scheme, host and port)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .with_context(|| format!("invalid server URL '{base_url}'"))?;
        log::info!("[ApiClient] Creating API client with base URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}", self.base_url, path)
    }

    /// `GET /api/videos`
    pub async fn list_videos(&self) -> Result<Vec<VideoRecord>> {
        let url = self.build_url("videos");
        log::debug!("[ApiClient] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .context("catalog response was not a video list"),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// `GET /api/videos/{id}`; a 404 is `Ok(None)`.
    pub async fn get_video(&self, id: &str) -> Result<Option<VideoRecord>> {
        let url = self.build_url(&format!("videos/{id}"));
        log::debug!("[ApiClient] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map(Some)
                .context("catalog response was not a video record"),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(Self::status_error(status, response).await),
        }
    }

    async fn status_error(
        status: StatusCode,
        response: reqwest::Response,
    ) -> anyhow::Error {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        anyhow::anyhow!("Request failed with status {}: {}", status, error_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.build_url("/videos/3"),
            "http://localhost:5000/api/videos/3"
        );
    }

    #[test]
    fn rejects_malformed_base_url() {
        assert!(ApiClient::new("localhost without scheme").is_err());
    }
}
