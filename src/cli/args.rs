//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// workflow-mcp - Serve step-by-step workflows to agents over stdio.
#[derive(Debug, Parser)]
#[command(name = "workflow-mcp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing `workflows/` and `state/` (defaults to the current directory)
    #[arg(short, long, global = true, env = "WORKFLOW_MCP_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory exposed to templates as `userWorkingDirectory` (defaults to $PWD)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve workflow tools over stdio (default if no command specified)
    Serve(ServeArgs),

    /// Print the rendered instructions for a step
    Instructions(InstructionsArgs),

    /// Save the output of a completed step
    Save(SaveArgs),

    /// Print saved outputs of the steps before a given step
    Context(ContextArgs),

    /// List available workflows
    List(ListArgs),

    /// Show which steps of a workflow are complete
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `serve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {}

/// Arguments for the `instructions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstructionsArgs {
    /// Workflow ID
    pub workflow: String,

    /// Step number (1-based)
    pub step: u64,

    /// Output the full response as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `save` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SaveArgs {
    /// Workflow ID
    pub workflow: String,

    /// Step ID
    pub step_id: String,

    /// Output as a JSON string
    #[arg(short, long, conflicts_with = "file")]
    pub output: Option<String>,

    /// Read output JSON from a file (reads stdin when neither is given)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `context` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ContextArgs {
    /// Workflow ID
    pub workflow: String,

    /// Current step number; outputs of all earlier steps are shown
    pub current_step: u64,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Workflow ID
    pub workflow: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
