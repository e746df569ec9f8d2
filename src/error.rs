//! Error types for workflow operations.
//!
//! This module defines [`WorkflowError`], the error type shared by the engine,
//! the tool server and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing files map to the `*NotFound` variants
//! - Invalid JSON maps to the `*ParseError` variants
//! - Any other filesystem failure is wrapped in `Io`
//! - The tool server turns every error into an `Error: <message>` text reply

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Workflow configuration file not found.
    #[error("Workflow config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a workflow configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Requested step number is outside the workflow.
    #[error("Step {step} not found in workflow {workflow}")]
    StepNotFound { workflow: String, step: u64 },

    /// No saved output exists for a step.
    #[error("No output saved for step '{step}' in workflow {workflow}")]
    OutputNotFound { workflow: String, step: String },

    /// A saved step output is not valid JSON.
    #[error("Failed to parse output at {path}: {message}")]
    OutputParseError { path: PathBuf, message: String },

    /// Identifier cannot be used as a path component.
    #[error("Invalid {kind} identifier: '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// Malformed tool arguments or unserializable payloads.
    #[error("{message}")]
    Protocol { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkflowError {
    /// Whether this error means something the caller asked for does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::StepNotFound { .. } | Self::OutputNotFound { .. }
        )
    }
}

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
