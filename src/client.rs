use crate::config::ClientConfig;
use crate::error::{AgriError, Result};
use crate::models::QueryType;
use serde::Deserialize;
use serde_json::Value;

/// Talks to a running backend over HTTP, for `--remote` mode and `check`.
pub struct AgriClient {
    client: reqwest::Client,
    base_url: String,
}

/// API route serving each advisory operation.
pub fn route_for(query_type: QueryType) -> &'static str {
    match query_type {
        QueryType::Crop => "/api/crops/recommend",
        QueryType::Soil => "/api/soil/analyze",
        QueryType::Fertilizer => "/api/fertilizer/recommend",
        QueryType::Pest => "/api/pest/control",
        QueryType::Market => "/api/market/price",
        QueryType::Weather => "/api/weather/info",
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl AgriClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AgriError::Remote(format!("{}: {}", self.base_url, e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("backend returned {}", status),
        };

        if status == reqwest::StatusCode::BAD_REQUEST {
            Err(AgriError::Validation(message))
        } else {
            Err(AgriError::Remote(message))
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgriError::Remote(format!("{}: {}", self.base_url, e)))?;

        match response.status() {
            s if s.is_success() => Ok(response.json().await?),
            reqwest::StatusCode::NOT_FOUND => Err(AgriError::NotFound(url)),
            s => Err(AgriError::Remote(format!("backend returned {}", s))),
        }
    }

    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgriError::Remote(format!("{}: {}", self.base_url, e)))?;

        Ok(response.status().is_success())
    }
}
