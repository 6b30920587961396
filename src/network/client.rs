//! HTTP client wrapper - the gateway to the remote product API

use crate::models::{ApiErrorKind, NewProduct, Product, ProductPatch};

/// A failed API call, classified for the app layer's error policy
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(message: impl Into<String>) -> Self {
        ApiError {
            kind: ApiErrorKind::Network,
            message: message.into(),
        }
    }

    fn request(message: impl Into<String>) -> Self {
        ApiError {
            kind: ApiErrorKind::Request,
            message: message.into(),
        }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Client for the remote product collection endpoint
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: create_client(),
            base_url: base_url.into(),
        }
    }

    /// GET the full product collection. Transport failures and non-JSON
    /// bodies are network errors.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ApiError::network(describe(&e)))?;

        if !response.status().is_success() {
            return Err(ApiError::network(format!(
                "List returned HTTP {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::network(format!("Invalid product list: {}", e)))
    }

    /// POST a new product; returns the server-assigned record
    pub async fn create(&self, payload: &NewProduct) -> Result<Product, ApiError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request(describe(&e)))?;

        Self::read_record(response).await
    }

    /// PUT a partial update; returns the server's view of the record. The
    /// upstream API rejects writes to certain IDs; that surfaces here as a
    /// request error.
    pub async fn update(&self, id: i64, payload: &ProductPatch) -> Result<Product, ApiError> {
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request(describe(&e)))?;

        Self::read_record(response).await
    }

    async fn read_record(response: reqwest::Response) -> Result<Product, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::request(format!(
                "Server rejected the write (HTTP {}): {}",
                status.as_u16(),
                body
            )));
        }
        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::request(format!("Invalid record in response: {}", e)))
    }
}

/// Create an HTTP client with default configuration
fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
