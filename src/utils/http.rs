// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client.
///
/// Every request carries JSON content headers and, when a token is given,
/// a bearer `Authorization` header marked sensitive.
pub fn create_async_client(
    config: &ApiConfig,
    token: Option<&SecretString>,
) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| AppError::config("API token contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Build the itinerary listing URL from the API settings.
pub fn itineraries_url(config: &ApiConfig) -> Result<Url> {
    let base = config.base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/", base))?.join(config.endpoint.trim_start_matches('/'))?;
    if !config.paginate {
        url.query_pairs_mut().append_pair("pagination", "false");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itineraries_url() {
        let config = ApiConfig::default();
        assert_eq!(
            itineraries_url(&config).unwrap().as_str(),
            "https://staging.cordeliacruises.com/api/v2/itineraries?pagination=false"
        );
    }

    #[test]
    fn test_itineraries_url_paginated() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            endpoint: "/cruises".to_string(),
            paginate: true,
            ..ApiConfig::default()
        };
        assert_eq!(
            itineraries_url(&config).unwrap().as_str(),
            "http://localhost:8080/api/cruises"
        );
    }

    #[test]
    fn test_client_rejects_bad_token() {
        let token = SecretString::new("line\nbreak".to_string());
        assert!(create_async_client(&ApiConfig::default(), Some(&token)).is_err());
    }

    #[test]
    fn test_client_builds_without_token() {
        assert!(create_async_client(&ApiConfig::default(), None).is_ok());
    }
}
