//! Workflow progress.
//!
//! Progress is derived, never stored: steps are walked in order and each one
//! with a saved output counts as completed. The first step without output is
//! the next step and the walk stops there, so a later step that was completed
//! out of order is not reported.

use serde::{Deserialize, Serialize};

use crate::config::{StepMeta, WorkflowConfig};

/// A step identified by position, id and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRef {
    /// 1-based position in the workflow.
    pub step_number: usize,
    pub step_id: String,
    pub name: String,
}

/// Completion status of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    pub workflow_id: String,
    pub name: String,
    pub total_steps: usize,
    /// Leading run of completed steps, in order.
    pub completed_steps: Vec<StepRef>,
    /// First step without output; `None` once every step is done.
    pub next_step: Option<StepRef>,
}

impl StepRef {
    fn new(index: usize, step: &StepMeta) -> Self {
        Self {
            step_number: index + 1,
            step_id: step.id.clone(),
            name: step.name.clone(),
        }
    }
}

impl WorkflowStatus {
    /// Walk the steps in order until the first one `is_completed` rejects.
    pub fn derive<F>(workflow_id: &str, config: &WorkflowConfig, mut is_completed: F) -> Self
    where
        F: FnMut(&StepMeta) -> bool,
    {
        let mut completed_steps = Vec::new();
        let mut next_step = None;

        for (index, step) in config.steps.iter().enumerate() {
            if is_completed(step) {
                completed_steps.push(StepRef::new(index, step));
            } else {
                next_step = Some(StepRef::new(index, step));
                break;
            }
        }

        Self {
            workflow_id: workflow_id.to_string(),
            name: config.name.clone(),
            total_steps: config.step_count(),
            completed_steps,
            next_step,
        }
    }

    /// Whether every step has an output.
    pub fn is_complete(&self) -> bool {
        self.next_step.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn config(ids: &[&str]) -> WorkflowConfig {
        WorkflowConfig {
            name: "Demo".into(),
            version: "1.0.0".into(),
            variables: Map::new(),
            steps: ids
                .iter()
                .map(|id| StepMeta::new(*id, id.to_uppercase(), format!("{}.md", id)))
                .collect(),
        }
    }

    #[test]
    fn partial_progress_stops_at_first_gap() {
        let config = config(&["a", "b", "c"]);
        let status = WorkflowStatus::derive("demo", &config, |s| s.id != "c");

        let completed: Vec<_> = status
            .completed_steps
            .iter()
            .map(|s| (s.step_number, s.step_id.as_str()))
            .collect();
        assert_eq!(completed, vec![(1, "a"), (2, "b")]);

        let next = status.next_step.unwrap();
        assert_eq!((next.step_number, next.step_id.as_str()), (3, "c"));
    }

    #[test]
    fn later_steps_after_a_gap_are_not_counted() {
        let config = config(&["a", "b", "c"]);
        let status = WorkflowStatus::derive("demo", &config, |s| s.id != "b");

        assert_eq!(status.completed_steps.len(), 1);
        assert_eq!(status.next_step.unwrap().step_id, "b");
    }

    #[test]
    fn walk_does_not_check_past_the_gap() {
        let config = config(&["a", "b", "c", "d"]);
        let mut checked = Vec::new();
        WorkflowStatus::derive("demo", &config, |s| {
            checked.push(s.id.clone());
            s.id == "a"
        });
        assert_eq!(checked, vec!["a", "b"]);
    }

    #[test]
    fn all_completed_has_no_next_step() {
        let config = config(&["a", "b"]);
        let status = WorkflowStatus::derive("demo", &config, |_| true);
        assert!(status.is_complete());
        assert_eq!(status.completed_steps.len(), 2);
        assert_eq!(status.total_steps, 2);
    }

    #[test]
    fn serializes_with_camel_case_and_null_next_step() {
        let config = config(&["a"]);
        let status = WorkflowStatus::derive("demo", &config, |_| true);
        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["workflowId"], "demo");
        assert_eq!(value["totalSteps"], 1);
        assert_eq!(value["completedSteps"][0]["stepId"], "a");
        assert_eq!(value["completedSteps"][0]["stepNumber"], 1);
        assert!(value["nextStep"].is_null());
    }
}
