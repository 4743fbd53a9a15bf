//! Conversion errors
//!
//! Errors never crash the caller. Every variant is recoverable: the display
//! layer shows a message and waits for the next input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const INVALID_NUMBER_FORMAT: &str = "INVALID_NUMBER_FORMAT";
    pub const INCOMPATIBLE_CATEGORIES: &str = "INCOMPATIBLE_CATEGORIES";
    pub const RESULT_OUT_OF_RANGE: &str = "RESULT_OUT_OF_RANGE";
}

/// Error raised while turning user input into a converted value.
///
/// `EmptyInput` and `InvalidNumberFormat` are raised by the caller before the
/// engine runs; `IncompatibleCategories` is the only engine-side failure.
/// `ResultOutOfRange` is raised by the caller when a finite input converts to
/// a value `f64` cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("Cannot convert {from} to {to}: incompatible categories")]
    IncompatibleCategories { from: String, to: String },

    #[error("Result of converting {from} to {to} is out of range")]
    ResultOutOfRange { from: String, to: String },
}

impl ConversionError {
    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IncompatibleCategories {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => codes::EMPTY_INPUT,
            Self::InvalidNumberFormat(_) => codes::INVALID_NUMBER_FORMAT,
            Self::IncompatibleCategories { .. } => codes::INCOMPATIBLE_CATEGORIES,
            Self::ResultOutOfRange { .. } => codes::RESULT_OUT_OF_RANGE,
        }
    }

    /// Message shown in the result label
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter a value.",
            Self::InvalidNumberFormat(_) => {
                "Invalid number format. Please enter a valid numeric value."
            }
            Self::IncompatibleCategories { .. } => "Cannot convert between different categories.",
            Self::ResultOutOfRange { .. } => "Result is too large to display.",
        }
    }

    /// Hint for fixing the request
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidNumberFormat(_) => Some("Use a plain decimal such as 12.5 or -3".to_string()),
            Self::IncompatibleCategories { from, .. } => Some(format!(
                "Pick a destination unit from the same category as '{}'",
                from
            )),
            Self::ResultOutOfRange { to, .. } => Some(format!(
                "Enter a smaller value or pick a larger destination unit than '{}'",
                to
            )),
        }
    }
}

/// Structured error for machine consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConversionError> for ErrorReport {
    fn from(err: &ConversionError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl From<ConversionError> for ErrorReport {
    fn from(err: ConversionError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
