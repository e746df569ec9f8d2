//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`workflow-mcp serve`, `workflow-mcp status`)
//! - The same engine behind the tool server and the terminal commands
//! - Consistent global flag handling

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod instructions;
pub mod list;
pub mod save;
pub mod serve;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
