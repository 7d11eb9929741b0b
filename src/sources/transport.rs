//! HTTP transport for remote lookups.
//!
//! The transport is the only piece that talks to the network. Everything
//! above it sees status codes and bodies, which keeps the lookup logic
//! testable against canned responses.

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

use crate::util::config::NetConfig;

/// Media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// A complete HTTP response: status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with the given status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// Create a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Create a 404 response.
    pub fn not_found() -> Self {
        Self::new(404, b"{\"message\":\"Not Found\"}".to_vec())
    }

    /// Check if the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the status is 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// The request never produced a response (DNS, connect, timeout, body read).
#[derive(Debug, Error)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    /// Create a transport error for `url`.
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        TransportError {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Issues read-only GET requests.
pub trait Transport {
    /// Fetch `url`, returning whatever status the server answered with.
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// Blocking `reqwest` transport with a bounded per-request timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl HttpTransport {
    /// Build a transport from network settings and an optional bearer token.
    pub fn new(net: &NetConfig, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(net.timeout())
            .user_agent(net.user_agent())
            .build()
            .context("failed to build HTTP client")?;

        Ok(HttpTransport {
            client,
            token: token.filter(|t| !t.is_empty()),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        tracing::debug!(url = %url, "GET");

        let mut request = self.client.get(url.clone()).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| TransportError::new(url.as_str(), e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::new(url.as_str(), e.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
