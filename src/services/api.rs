// src/services/api.rs

//! Itinerary API client.
//!
//! Fetches the full itinerary listing (`{ itineraries, ports }`) in one
//! request. Failures are returned as errors; retrying is left to the caller.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, CruisePayload};
use crate::utils::http::{create_async_client, itineraries_url};

/// Anything that can produce a fresh itinerary payload.
#[async_trait]
pub trait CruiseSource: Send + Sync {
    /// Fetch the complete itinerary listing.
    async fn fetch_itineraries(&self) -> Result<CruisePayload>;
}

/// HTTP client for the itinerary API.
pub struct CruiseClient {
    client: Client,
    url: Url,
}

impl CruiseClient {
    /// Create a client, reading the bearer token from the environment
    /// variable named by `config.token_env`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::new);

        if token.is_none() {
            log::warn!(
                "{} is not set; requesting itineraries without authorization",
                config.token_env
            );
        }

        Self::with_token(config, token)
    }

    /// Create a client with an explicit bearer token.
    pub fn with_token(config: &ApiConfig, token: Option<SecretString>) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config, token.as_ref())?,
            url: itineraries_url(config)?,
        })
    }

    /// The listing URL this client requests.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CruiseSource for CruiseClient {
    async fn fetch_itineraries(&self) -> Result<CruisePayload> {
        log::info!("Fetching itineraries from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("Itinerary request failed with status {}", status);
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let payload: CruisePayload = serde_json::from_str(&body)?;

        log::info!(
            "Fetched {} itineraries and {} ports",
            payload.itineraries.len(),
            payload.ports.len()
        );
        Ok(payload)
    }
}
