//! User-friendly diagnostic messages.
//!
//! Every error shown to the operator carries the failing file, the root
//! cause, and what to try next.

use std::fmt;
use std::path::PathBuf;

use crate::resolver::ResolutionError;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion for transport failures.
    pub const NETWORK: &str = "Check your network connection and re-run pinata";

    /// Suggestion when the API rate limit is exhausted.
    pub const SET_TOKEN: &str = "Set GITHUB_TOKEN (or pass --token) to raise the API rate limit";

    /// Suggestion when the API rejects the credential.
    pub const BAD_TOKEN: &str = "Check that GITHUB_TOKEN holds a valid, unexpired token";

    /// Suggestion for malformed API responses.
    pub const API_URL: &str =
        "Check that `net.api-url` in .pinata/config.toml points at a GitHub API";

    /// Suggestion when the workflow directory is missing.
    pub const NO_WORKFLOWS: &str =
        "Run pinata from the repository root or pass the workflow directory";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(message)
        }
    }

    /// Build a diagnostic for a failed file.
    ///
    /// Resolution errors anywhere in the chain get their tailored
    /// suggestions; anything else reports the full error chain.
    pub fn for_file_error(path: impl Into<PathBuf>, error: &anyhow::Error) -> Self {
        let diag = match error.downcast_ref::<ResolutionError>() {
            Some(resolution) => resolution.to_diagnostic(),
            None => Diagnostic::error(format!("{:#}", error)),
        };
        diag.with_location(path)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            match self.severity {
                Severity::Error => "\x1b[1;31merror\x1b[0m",
                Severity::Warning => "\x1b[1;33mwarning\x1b[0m",
            }
        } else {
            match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            }
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            for suggestion in &self.suggestions {
                output.push_str(&format!("{}: {}\n", help_prefix, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
