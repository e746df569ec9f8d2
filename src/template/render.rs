//! Placeholder resolution passes.
//!
//! Injection runs three passes over one buffer, in order:
//!
//! 1. `{{variable: name}}`
//! 2. `{{include: path}}`
//! 3. `{{previousOutput: step[.property]}}`
//!
//! Each pass tokenizes the buffer produced by the previous one, so text pulled
//! in by an include is seen by the previous-output pass but never by the
//! variable pass or by the include pass itself.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::join_under;
use crate::error::{Result, WorkflowError};

use super::token::{tokenize, PlaceholderKind, Token};

/// Source of previously saved step outputs.
pub trait OutputSource {
    /// Load the saved output for a step.
    fn load_output(&self, step_id: &str) -> Result<Value>;
}

/// Everything the passes need to resolve placeholders for one step.
pub struct InjectionContext<'a> {
    /// Variables available to `{{variable: ...}}`.
    pub variables: BTreeMap<String, String>,
    /// Directory `{{include: ...}}` paths are resolved against.
    pub include_root: &'a Path,
    /// Where `{{previousOutput: ...}}` values come from.
    pub outputs: &'a dyn OutputSource,
}

/// Run all three passes over `content`.
pub fn inject(content: &str, ctx: &InjectionContext<'_>) -> String {
    let text = substitute_variables(content, &ctx.variables);
    let text = resolve_includes(&text, ctx.include_root);
    resolve_previous_outputs(&text, ctx.outputs)
}

/// Replace placeholders of one kind, leaving everything else as written.
///
/// When `resolve` returns `None` the placeholder text is kept.
pub fn replace_kind<F>(text: &str, kind: PlaceholderKind, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());

    for token in tokenize(text) {
        match token {
            Token::Placeholder {
                kind: found,
                payload,
                raw,
            } if found == kind => match resolve(payload) {
                Some(value) => result.push_str(&value),
                None => result.push_str(raw),
            },
            other => result.push_str(other.as_source()),
        }
    }

    result
}

/// Pass 1: substitute known variables; unknown names stay unreplaced.
pub fn substitute_variables(text: &str, variables: &BTreeMap<String, String>) -> String {
    replace_kind(text, PlaceholderKind::Variable, |name| {
        variables.get(name).cloned()
    })
}

/// Pass 2: inline files relative to `root`. Absolute paths are taken as
/// relative to `root` as well.
pub fn resolve_includes(text: &str, root: &Path) -> String {
    replace_kind(text, PlaceholderKind::Include, |relative| {
        match fs::read_to_string(join_under(root, relative)) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Could not include {}: {}", relative, e);
                Some(format!("<!-- Could not include {} -->", relative))
            }
        }
    })
}

/// Pass 3: inline saved outputs of earlier steps.
pub fn resolve_previous_outputs(text: &str, outputs: &dyn OutputSource) -> String {
    replace_kind(text, PlaceholderKind::PreviousOutput, |reference| {
        let (step_id, property) = match reference.split_once('.') {
            Some((step, prop)) => (step, Some(prop)),
            None => (reference, None),
        };

        let rendered = outputs.load_output(step_id).and_then(|output| match property {
            Some(path) => Ok(lookup_property(&output, path)
                .map(render_value)
                .unwrap_or_default()),
            None => serde_json::to_string_pretty(&output)
                .map_err(|e| WorkflowError::Other(e.into())),
        });

        match rendered {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Previous output {} not available: {}", reference, e);
                Some(format!("<!-- Previous output {} not available -->", reference))
            }
        }
    })
}

/// Walk a dotted property path through nested objects.
fn lookup_property<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

/// Render a JSON value for inline text.
///
/// Strings are inserted raw and `null` as nothing; other scalars use their
/// JSON form, arrays and objects are pretty-printed.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}
