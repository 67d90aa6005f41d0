//! reqwest client for the `/generate-gifts` endpoint.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ServiceConfig;
use crate::form::FormInput;

use super::error::ServiceError;
use super::{GiftOutcome, GiftService};

/// Success body of `/generate-gifts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// Talks to the hosted suggestion endpoint over HTTP.
pub struct HttpGiftService {
    client: Client,
    endpoint: String,
}

impl HttpGiftService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ServiceError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GiftService for HttpGiftService {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn generate(&self, input: &FormInput) -> GiftOutcome {
        tracing::debug!(
            url = %self.endpoint,
            quantity = input.quantity,
            age = input.age,
            gender = %input.gender,
            price_min = input.price_min,
            price_max = input.price_max,
            "Sending gift request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ServiceError::Transport)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                latency_ms,
                error = %body,
                "Gift service error"
            );
            return Err(ServiceError::status(status.as_u16(), &body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(latency_ms, error = %e, "Gift service returned malformed JSON");
            ServiceError::Parse(e)
        })?;

        if parsed.result.trim().is_empty() {
            return Err(ServiceError::EmptyResult);
        }

        tracing::info!(
            latency_ms,
            result_len = parsed.result.len(),
            "Gift suggestions received"
        );
        Ok(parsed.result)
    }
}
