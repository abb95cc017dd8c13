use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::warn;
use url::Url;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::FoodId;

/// Shared HTTP client configuration for the foods backend.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base_url)?;

        // Endpoint paths are appended to the base, so it must end with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self { client, base_url })
    }

    /// Returns the endpoint URL of a single food.
    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}foods/{}", self.base_url, id)
    }

    /// Returns the favorites collection endpoint URL.
    pub fn favorites_url(&self) -> String {
        format!("{}favorites", self.base_url)
    }

    /// Returns the endpoint URL of a single favorite.
    pub fn favorite_url(&self, id: FoodId) -> String {
        format!("{}favorites/{}", self.base_url, id)
    }

    /// Returns the orders endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}orders", self.base_url)
    }

    /// Sends `request`, mapping transport failures and non-success statuses
    /// to repository errors.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, RepositoryError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request to foods backend failed");
            RepositoryError::unreachable()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::not_found());
        }

        warn!(%status, url = %response.url(), "Foods backend answered with unexpected status");
        Err(RepositoryError::unexpected_status())
    }
}
