//! Workflow manifest loading.
//!
//! Manifests are read from disk on every call; nothing is cached.

use crate::config::schema::WorkflowConfig;
use crate::error::{Result, WorkflowError};
use std::fs;
use std::path::Path;

/// Load and parse a workflow `config.json`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_workflow_config(path: &Path) -> Result<WorkflowConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WorkflowError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WorkflowError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into a [`WorkflowConfig`].
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<WorkflowConfig> {
    serde_json::from_str(content).map_err(|e| WorkflowError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_valid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"name":"Demo","version":"1.0.0","variables":{"lang":"rust"},"steps":[]}"#,
        )
        .unwrap();

        let config = load_workflow_config(&path).unwrap();
        assert_eq!(config.name, "Demo");
        assert_eq!(config.variables["lang"], "rust");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let err = load_workflow_config(&path).unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_workflow_config(&path).unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn parse_config_reports_source_path() {
        let err = parse_config("[]", Path::new("/x/config.json")).unwrap_err();
        match err {
            WorkflowError::ConfigParseError { path, .. } => {
                assert_eq!(path, Path::new("/x/config.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
