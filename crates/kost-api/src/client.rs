//! # API Client
//!
//! Thin JSON client over the billing API. Every call carries
//! `Authorization: Bearer <token>` plus `Accept: application/json`; the
//! token comes from the session collaborator — this crate never stores or
//! refreshes session state.
//!
//! ## Status vs Envelope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Failure Detection                                    │
//! │                                                                         │
//! │  GET:     any non-2xx status        → ApiError::Fetch                  │
//! │                                                                         │
//! │  POST/PUT/DELETE: the body decides. Validation rejections arrive as   │
//! │  an error envelope (often WITH a non-2xx status); the envelope is      │
//! │  parsed first so field errors survive. A non-2xx without a readable    │
//! │  envelope falls back to ApiError::Mutation.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope;
use crate::error::{ApiError, ApiResult};

/// JSON client for one API host and one bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (scheme + host, no trailing slash
    /// needed) authenticating with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Sends one request and decodes the JSON body (any status).
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<(StatusCode, Value)> {
        let url = self.url(path);
        debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(%status, "api response");
        Ok((status, body))
    }

    /// GET a collection body. Any non-2xx is a fetch failure; the caller's
    /// collection stays empty and no retry happens here.
    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        let (status, body) = self.send(Method::GET, path, None).await?;
        if !status.is_success() {
            warn!(%path, status = status.as_u16(), "fetch failed");
            return Err(ApiError::fetch(path, status.as_u16()));
        }
        Ok(body)
    }

    /// POST a creation payload; returns the success envelope body.
    pub async fn post(&self, path: &str, payload: &Value) -> ApiResult<Value> {
        let (status, body) = self.send(Method::POST, path, Some(payload)).await?;
        Self::mutation_body(status, body)
    }

    /// PUT an update payload; returns the success envelope body.
    pub async fn put(&self, path: &str, payload: &Value) -> ApiResult<Value> {
        let (status, body) = self.send(Method::PUT, path, Some(payload)).await?;
        Self::mutation_body(status, body)
    }

    /// DELETE; returns the success envelope body.
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        let (status, body) = self.send(Method::DELETE, path, None).await?;
        Self::mutation_body(status, body)
    }

    /// Envelope-first failure detection for mutations (see module docs).
    fn mutation_body(status: StatusCode, body: Value) -> ApiResult<Value> {
        if envelope::is_error(&body) {
            return Err(envelope::parse_error(&body));
        }
        if !status.is_success() {
            return Err(ApiError::mutation(format!(
                "request failed with status {}",
                status.as_u16()
            )));
        }
        Ok(body)
    }
}
