//! Test utilities and mocks for pinata unit tests.
//!
//! The network is replaced by [`MockTransport`], which serves canned
//! responses by URL and records every request so tests can count remote
//! calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use pinata::test_support::{MockTransport, tags_url, HttpResponse};
//!
//! #[test]
//! fn test_example() {
//!     let mock = MockTransport::new();
//!     mock.mock_url(&tags_url("owner/repo"), HttpResponse::not_found());
//!
//!     let mut resolver = mock.resolver();
//!     // Resolve, then inspect mock.requests()...
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::resolver::Resolver;
use crate::sources::{GitHubSource, HttpResponse, Transport, TransportError};

// Re-export fixtures for convenience
pub use fixtures::*;

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, HttpResponse>,
    failures: HashMap<String, String>,
    requests: Vec<String>,
    default_response: Option<HttpResponse>,
}

/// Mock HTTP transport for GitHub API calls.
///
/// Clones share state, so a test keeps one handle for assertions while the
/// source under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn mock_url(&self, url: &str, response: HttpResponse) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(url.to_string(), response);
        self
    }

    /// Make requests to a URL fail without a response.
    pub fn fail_url(&self, url: &str, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(url.to_string(), message.to_string());
        self
    }

    /// Set a default response for unmatched URLs.
    pub fn set_default(&self, response: HttpResponse) -> &Self {
        self.state.lock().unwrap().default_response = Some(response);
        self
    }

    /// Get all requested URLs, in order.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Number of requests made.
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// A GitHub source at [`API_URL`] backed by this mock.
    pub fn source(&self) -> GitHubSource {
        GitHubSource::new(Url::parse(API_URL).unwrap(), Box::new(self.clone()))
    }

    /// A resolver with an empty cache backed by this mock.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(Box::new(self.source()))
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(url.to_string());

        if let Some(message) = state.failures.get(url.as_str()) {
            return Err(TransportError::new(url.as_str(), message.clone()));
        }
        if let Some(response) = state.responses.get(url.as_str()) {
            return Ok(response.clone());
        }
        if let Some(ref default) = state.default_response {
            return Ok(default.clone());
        }

        Err(TransportError::new(url.as_str(), "no mock response"))
    }
}
