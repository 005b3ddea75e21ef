//! Error handling for the barbiere CLI.
//!
//! Structured errors with user-friendly messages, actionable suggestions,
//! error chaining, and exit-code mapping.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use barbiere_core::error::{BarbiereError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (bad date, bad time, bad flag combination).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No tenant state file exists yet.
    #[error("No shop data found at {path}")]
    TenantNotInitialized { path: PathBuf },

    /// `--shop` was given but the data file holds a different shop.
    #[error("Shop '{requested}' not found in the data file (it holds '{actual}')")]
    ShopMismatch { requested: String, actual: String },

    /// An error propagated from the core or the adapters.
    #[error("{0}")]
    Core(#[from] BarbiereError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Check the argument formats: dates are YYYY-MM-DD, times are HH:mm".into(),
                "Use --help for usage information".into(),
            ],

            Self::TenantNotInitialized { path } => vec![
                format!("No data file at: {}", path.display()),
                "Run 'barbiere init' to create a demo shop".into(),
                "Or point --data at an existing file".into(),
            ],

            Self::ShopMismatch { actual, .. } => vec![
                format!("This data file belongs to shop '{actual}'"),
                "Drop --shop, or pass the matching slug".into(),
            ],

            Self::Core(core) => match core.category() {
                CoreCategory::Rule => vec![
                    "The booking rules rejected this operation".into(),
                    "Use 'barbiere slots' to see what is actually available".into(),
                ],
                CoreCategory::NotFound => vec![
                    "Check the id you passed".into(),
                    "Use 'barbiere barbers' / 'barbiere services' / 'barbiere agenda' to list ids"
                        .into(),
                ],
                CoreCategory::Conflict => vec![
                    "Someone took that slot first".into(),
                    "Re-run 'barbiere slots' and pick another time".into(),
                ],
                _ => vec!["Check the error details above".into()],
            },

            Self::ConfigError { .. } => vec![
                "Check your config file syntax".into(),
                "Environment overrides use the BARBIERE_ prefix".into(),
            ],

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::ShopMismatch { .. } => ErrorCategory::UserError,
            Self::TenantNotInitialized { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation
                | CoreCategory::Rule
                | CoreCategory::Tenant
                | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        out.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!("\n  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        out
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing at a severity matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbiere_core::application::ApplicationError;
    use barbiere_core::domain::RuleViolation;

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "bad date".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::TenantNotInitialized {
                path: PathBuf::from("/tmp/none.json")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn rule_violations_are_user_errors() {
        let err = CliError::Core(RuleViolation::SlotTaken.into());
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("slots")));
    }

    #[test]
    fn slot_conflicts_suggest_retrying() {
        let err = CliError::Core(
            ApplicationError::SlotConflict {
                barber_id: "b-1".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("another time")));
    }

    #[test]
    fn format_plain_contains_suggestions() {
        let err = CliError::TenantNotInitialized {
            path: PathBuf::from("/tmp/none.json"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("barbiere init"));
    }
}
