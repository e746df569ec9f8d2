//! Template injection for step instructions.
//!
//! Step instruction files may embed placeholders of the form
//! `{{kind: payload}}`:
//!
//! - `{{variable: name}}` - replaced with a workflow variable
//! - `{{include: path}}` - replaced with a file relative to the workflow directory
//! - `{{previousOutput: step}}` / `{{previousOutput: step.property}}` - replaced
//!   with an earlier step's saved output
//!
//! Text is split into tokens by [`tokenize`] and resolved one kind at a time by
//! the passes in [`render`]. Placeholders that do not parse are kept verbatim.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use workflow_mcp::template::substitute_variables;
//!
//! let mut vars = BTreeMap::new();
//! vars.insert("lang".to_string(), "Rust".to_string());
//! let text = substitute_variables("Write it in {{variable: lang}}.", &vars);
//! assert_eq!(text, "Write it in Rust.");
//! ```

pub mod render;
pub mod token;

pub use render::{
    inject, render_value, replace_kind, resolve_includes, resolve_previous_outputs,
    substitute_variables, InjectionContext, OutputSource,
};
pub use token::{tokenize, PlaceholderKind, Token, Tokens};
