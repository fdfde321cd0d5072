use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::find_mock(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Decodes a 2xx body as `T`; anything else becomes an [`ApiError`]
    /// carrying the server's detail or `fallback`.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::read_error(response, fallback).await)
        }
    }

    pub(crate) async fn read_error(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        ApiError::from_response(status, body, fallback)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::*;
