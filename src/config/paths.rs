//! Engine configuration and on-disk layout.
//!
//! All paths are derived from an explicit project root:
//!
//! ```text
//! <root>/workflows/<workflow>/config.json
//! <root>/workflows/<workflow>/<step.file>
//! <root>/workflows/shared/...            (reserved)
//! <root>/state/<workflow>/<step>-output.json
//! ```

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, WorkflowError};

/// Directory name under the workflows root that is never listed as a workflow.
pub const SHARED_DIR: &str = "shared";

/// Manifest file name inside each workflow directory.
pub const CONFIG_FILE: &str = "config.json";

/// Configuration for a [`WorkflowEngine`](crate::engine::WorkflowEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Project root everything else is resolved against.
    pub project_root: PathBuf,

    /// Directory holding one subdirectory per workflow.
    pub workflows_dir: PathBuf,

    /// Directory holding one subdirectory of step outputs per workflow.
    pub state_dir: PathBuf,

    /// Value exposed to templates as `userWorkingDirectory`.
    pub working_directory: PathBuf,
}

impl EngineConfig {
    /// Standard layout under `project_root`.
    ///
    /// The working directory defaults to `$PWD`, then the process cwd.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            workflows_dir: project_root.join("workflows"),
            state_dir: project_root.join("state"),
            working_directory: default_working_directory(),
            project_root,
        }
    }

    /// Override the working directory exposed to templates.
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// Directory for a workflow's definition.
    pub fn workflow_dir(&self, workflow_id: &str) -> Result<PathBuf> {
        validate_identifier("workflow", workflow_id)?;
        Ok(self.workflows_dir.join(workflow_id))
    }

    /// Path to a workflow's `config.json`.
    pub fn config_path(&self, workflow_id: &str) -> Result<PathBuf> {
        Ok(self.workflow_dir(workflow_id)?.join(CONFIG_FILE))
    }

    /// Directory holding a workflow's saved step outputs.
    pub fn workflow_state_dir(&self, workflow_id: &str) -> Result<PathBuf> {
        validate_identifier("workflow", workflow_id)?;
        Ok(self.state_dir.join(workflow_id))
    }
}

/// The caller's working directory: `$PWD` if set, else the process cwd.
pub fn default_working_directory() -> PathBuf {
    std::env::var_os("PWD")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

/// Join `relative` under `root`, dropping any root or drive prefix it carries.
///
/// `/notes.md` resolves to `<root>/notes.md`, never to the filesystem root.
pub fn join_under(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let mut path = root.to_path_buf();
    for component in relative.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => path.push(other),
        }
    }
    path
}

/// Reject identifiers that are not a single normal path component.
pub fn validate_identifier(kind: &'static str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    let is_single_normal =
        matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none();

    if value.is_empty() || !is_single_normal || value.contains(['/', '\\']) {
        return Err(WorkflowError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}
