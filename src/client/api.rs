use reqwest::StatusCode;
use tracing::debug;

use crate::recommend::{ErrorBody, Place, PlacesResponse, RecommendationRequest};
use crate::system::HealthStatus;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {}", describe(.body))]
    Status { status: StatusCode, body: ErrorBody },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

fn describe(body: &ErrorBody) -> String {
    match &body.details {
        Some(details) => format!("{} ({})", body.error, details),
        None => body.error.clone(),
    }
}

/// HTTP client for a placepick server.
#[derive(Debug, Clone)]
pub struct RecommendClient {
    base_url: String,
    client: reqwest::Client,
}

impl RecommendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Send one recommend request and return the places in server order.
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<Place>, ClientError> {
        let url = format!("{}/api/recommend", self.base_url);
        debug!(url = %url, category = %request.category, "Sending recommend request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_else(|_| ErrorBody {
                error: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
                details: None,
            });
            return Err(ClientError::Status { status, body });
        }

        let data: PlacesResponse = response.json().await?;
        Ok(data.places)
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
