//! Error types and exit codes for wayfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, malformed graph file)
//!
//! The adjacency store itself never returns these errors; its queries answer
//! with `Option`/`bool`. Errors come from the explorers (invalid endpoints) and
//! from the file and configuration layers.

mod macros;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::graph::types::VertexId;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfinder operations
#[derive(Error, Debug)]
pub enum WayfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found: {id}")]
    VertexNotFound { id: VertexId },

    #[error("invalid graph file {path:?}: {reason}")]
    GraphFile { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WayfinderError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph file that cannot be turned into a graph
    pub fn graph_file(path: &Path, reason: impl std::fmt::Display) -> Self {
        WayfinderError::GraphFile {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfinderError::UnknownFormat(_)
            | WayfinderError::UsageError(_)
            | WayfinderError::InvalidValue { .. } => ExitCode::Usage,

            WayfinderError::VertexNotFound { .. }
            | WayfinderError::GraphFile { .. }
            | WayfinderError::NotFound { .. } => ExitCode::Data,

            WayfinderError::Io(_)
            | WayfinderError::Json(_)
            | WayfinderError::Toml(_)
            | WayfinderError::TomlSerialize(_)
            | WayfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfinderError::UnknownFormat(_) => "unknown_format",
            WayfinderError::UsageError(_) => "usage_error",
            WayfinderError::InvalidValue { .. } => "invalid_value",
            WayfinderError::VertexNotFound { .. } => "vertex_not_found",
            WayfinderError::GraphFile { .. } => "invalid_graph_file",
            WayfinderError::NotFound { .. } => "not_found",
            WayfinderError::Io(_) => "io_error",
            WayfinderError::Json(_) => "json_error",
            WayfinderError::Toml(_) => "toml_error",
            WayfinderError::TomlSerialize(_) => "toml_serialize_error",
            WayfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, WayfinderError>;
