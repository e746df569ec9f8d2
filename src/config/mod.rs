//! Workflow manifests and engine configuration.
//!
//! - Manifest schema in [`schema`]
//! - Manifest loading in [`loader`]
//! - Project layout and identifier checks in [`paths`]
//!
//! # Example
//!
//! ```
//! use workflow_mcp::config::{load_workflow_config, EngineConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config = EngineConfig::new(temp.path());
//! let dir = config.workflow_dir("demo").unwrap();
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.json"),
//!     r#"{"name":"Demo","version":"1.0.0","steps":[]}"#,
//! ).unwrap();
//!
//! let manifest = load_workflow_config(&config.config_path("demo").unwrap()).unwrap();
//! assert_eq!(manifest.name, "Demo");
//! ```

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{load_workflow_config, parse_config};
pub use paths::{
    default_working_directory, join_under, validate_identifier, EngineConfig, CONFIG_FILE,
    SHARED_DIR,
};
pub use schema::{StepMeta, WorkflowConfig};
