//! Error types for jobmap analysis runs.
//!
//! Every failure aborts the run before any report is produced. The two
//! domain categories are:
//!
//! - `Schema`: the component inventory is not usable (missing column,
//!   empty file name, non-tabular input)
//! - `Parameter`: an effort parameter is not strictly positive
//!
//! `DivisionByZero` only surfaces when the estimator is called directly
//! with parameters that bypassed validation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jobmap operations
#[derive(Debug, Error)]
pub enum JobmapError {
    /// Required input column absent or a row is malformed
    #[error("{message}")]
    Schema { message: String },

    /// One or more effort parameters are out of range
    #[error("invalid value for {parameter}: {message}")]
    Parameter { parameter: String, message: String },

    /// A roll-up divisor was zero
    #[error("cannot compute {quantity}: divisor is zero")]
    DivisionByZero { quantity: &'static str },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", path.display())]
    Config { message: String, path: PathBuf },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV reading/writing errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl JobmapError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Category name shown to the user ahead of the description.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema { .. } => "SchemaError",
            Self::Parameter { .. } => "ParameterError",
            Self::DivisionByZero { .. } => "DivisionByZero",
            Self::Config { .. } => "ConfigError",
            Self::Io(_) => "IoError",
            // A malformed CSV body means the input is not tabular
            Self::Csv(_) => "SchemaError",
            Self::Json(_) => "SerializationError",
        }
    }

    pub fn is_schema_error(&self) -> bool {
        self.kind() == "SchemaError"
    }

    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::Parameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, JobmapError>;
