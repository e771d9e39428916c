// src/gateway/mealdb.rs

use async_trait::async_trait;
use reqwest::Client;

use crate::config::AppConfig;
use crate::gateway::{Endpoint, MealGateway};
use crate::models::{DECODE_ERROR_MESSAGE, EMPTY_BODY_PLACEHOLDER, FetchResult};

/// Gateway backed by TheMealDB's public JSON API.
pub struct MealDbGateway {
    client: Client,
    base_url: String,
}

impl MealDbGateway {
    /// Creates a new `MealDbGateway` rooted at the configured base URL.
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl MealGateway for MealDbGateway {
    async fn fetch(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> FetchResult {
        let url = self.url_for(endpoint);

        let resp = match self.client.get(&url).query(params).send().await {
            Ok(resp) => resp,
            Err(e) => {
                return FetchResult::UpstreamError {
                    message: e.to_string(),
                    status: e.status().map(|s| s.as_u16()),
                };
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let kind = if status.is_client_error() { "Client" } else { "Server" };
            return FetchResult::UpstreamError {
                message: format!(
                    "{} {} Error: {} for url: {}",
                    status.as_u16(),
                    kind,
                    status.canonical_reason().unwrap_or("Unknown"),
                    resp.url()
                ),
                status: Some(status.as_u16()),
            };
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                return FetchResult::UpstreamError {
                    message: e.to_string(),
                    status: Some(status.as_u16()),
                };
            }
        };

        match serde_json::from_str(&body) {
            Ok(payload) => FetchResult::Success(payload),
            Err(_) => FetchResult::DecodeError {
                message: DECODE_ERROR_MESSAGE.to_string(),
                raw_body: if body.is_empty() {
                    EMPTY_BODY_PLACEHOLDER.to_string()
                } else {
                    body
                },
            },
        }
    }
}
