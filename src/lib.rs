//! workflow-mcp - Step-by-step workflows served to AI assistants.
//!
//! A workflow is a directory holding a `config.json` and one instruction
//! file per step. The engine renders a step's instructions with variables,
//! shared includes and earlier steps' outputs injected, records each step's
//! output as JSON, and derives progress from which outputs exist. The same
//! engine is exposed as tools over JSON-RPC on stdio and as CLI commands.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Workflow configuration loading and project layout
//! - [`engine`] - The workflow operations
//! - [`error`] - Error types and result aliases
//! - [`server`] - Tool server over JSON-RPC on stdio
//! - [`state`] - Saved step outputs and derived progress
//! - [`template`] - Placeholder injection for step instructions
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use std::path::Path;
//! use workflow_mcp::template::{inject, InjectionContext, OutputSource};
//!
//! struct NoOutputs;
//! impl OutputSource for NoOutputs {
//!     fn load_output(&self, step_id: &str) -> workflow_mcp::Result<serde_json::Value> {
//!         Err(workflow_mcp::WorkflowError::OutputNotFound {
//!             workflow: "demo".into(),
//!             step: step_id.into(),
//!         })
//!     }
//! }
//!
//! let mut variables = BTreeMap::new();
//! variables.insert("lang".to_string(), "Rust".to_string());
//! let ctx = InjectionContext {
//!     variables,
//!     include_root: Path::new("/nonexistent"),
//!     outputs: &NoOutputs,
//! };
//! assert_eq!(inject("Write {{variable: lang}}", &ctx), "Write Rust");
//! ```
//!
//! For end-to-end use against a workflows directory, see the integration tests.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod server;
pub mod state;
pub mod template;
pub mod ui;

pub use error::{Result, WorkflowError};
