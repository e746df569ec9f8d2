//! Shared display formatting for commands.

use serde::Serialize;

use crate::error::{Result, WorkflowError};
use crate::state::StepRef;
use crate::ui::{should_use_colors, WorkflowTheme};

/// Theme matching the current terminal.
pub fn theme() -> WorkflowTheme {
    if should_use_colors() {
        WorkflowTheme::new()
    } else {
        WorkflowTheme::plain()
    }
}

/// `[n/total]` counter.
pub fn counter(current: usize, total: usize) -> String {
    theme().format_counter(current, total)
}

/// One line describing a step: `[n/total] id - name`.
pub fn step_line(step: &StepRef, total: usize) -> String {
    let theme = theme();
    format!(
        "{} {} {}",
        theme.format_counter(step.step_number, total),
        theme.highlight.apply_to(&step.step_id),
        theme.dim.apply_to(format!("- {}", step.name))
    )
}

/// Pretty JSON for `--json` output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| WorkflowError::Protocol {
        message: format!("Failed to serialize output: {}", e),
    })
}
