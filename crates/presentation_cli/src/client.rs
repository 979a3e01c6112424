//! HTTP client for a running EcoRoute server

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Request timeout for server calls
const TIMEOUT: Duration = Duration::from_secs(10);

/// Join a base URL and an absolute path without doubling the slash
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Status and JSON body of a server response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `error` field of an error body
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Thin wrapper over reqwest bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// GET `path` with query parameters and decode the JSON body
    ///
    /// Non-2xx answers are returned, not turned into errors, so callers can
    /// show the server's message.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or the body is not JSON.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = endpoint_url(&self.base_url, path);
        debug!(%url, ?query, "GET");
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok(ApiResponse { status, body })
    }
}
