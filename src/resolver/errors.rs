//! Resolution error types and diagnostics.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::sources::TransportError;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Which remote lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Listing a repository's tags
    TagListing,
    /// Resolving a commit-ish to a commit
    Commit,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::TagListing => write!(f, "tag listing"),
            Lookup::Commit => write!(f, "commit"),
        }
    }
}

/// A remote lookup failed hard. Aborts the file being processed.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ResolutionError {
    #[error("{lookup} lookup for `{key}` failed")]
    #[diagnostic(code(pinata::resolve::transport))]
    Transport {
        lookup: Lookup,
        key: String,
        #[source]
        source: TransportError,
    },

    #[error("{lookup} lookup for `{key}` returned HTTP {status}")]
    #[diagnostic(code(pinata::resolve::status))]
    UnexpectedStatus {
        lookup: Lookup,
        key: String,
        status: u16,
    },

    #[error("{lookup} lookup for `{key}` returned a malformed response")]
    #[diagnostic(code(pinata::resolve::decode))]
    Decode {
        lookup: Lookup,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API URL `{url}` cannot be used as a base")]
    #[diagnostic(code(pinata::resolve::api_url))]
    InvalidUrl { url: String },
}

impl ResolutionError {
    /// The `owner/repo[@ref]` this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ResolutionError::Transport { key, .. }
            | ResolutionError::UnexpectedStatus { key, .. }
            | ResolutionError::Decode { key, .. } => Some(key),
            ResolutionError::InvalidUrl { .. } => None,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolutionError::Transport { source, .. } => Diagnostic::error(self.to_string())
                .with_context(source.to_string())
                .with_suggestion(suggestions::NETWORK),

            ResolutionError::UnexpectedStatus { status, .. } => {
                let diag = Diagnostic::error(self.to_string());
                match status {
                    401 => diag
                        .with_context("the API rejected the credential")
                        .with_suggestion(suggestions::BAD_TOKEN),
                    403 | 429 => diag
                        .with_context("the API rate limit is probably exhausted")
                        .with_suggestion(suggestions::SET_TOKEN),
                    _ => diag.with_suggestion(suggestions::NETWORK),
                }
            }

            ResolutionError::Decode { source, .. } => Diagnostic::error(self.to_string())
                .with_context(source.to_string())
                .with_suggestion(suggestions::API_URL),

            ResolutionError::InvalidUrl { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::API_URL)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_diagnostic() {
        let err = ResolutionError::UnexpectedStatus {
            lookup: Lookup::TagListing,
            key: "actions/checkout".to_string(),
            status: 403,
        };

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("tag listing lookup for `actions/checkout` returned HTTP 403"));
        assert!(output.contains("rate limit"));
        assert!(output.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_transport_diagnostic() {
        let err = ResolutionError::Transport {
            lookup: Lookup::Commit,
            key: "acme/foo@v2".to_string(),
            source: TransportError::new("https://api.github.com/x", "operation timed out"),
        };

        assert_eq!(err.key(), Some("acme/foo@v2"));
        let output = err.to_diagnostic().format(false);
        assert!(output.contains("commit lookup for `acme/foo@v2` failed"));
        assert!(output.contains("operation timed out"));
        assert!(output.contains("network connection"));
    }
}
