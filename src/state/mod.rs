//! Step output persistence and workflow progress.
//!
//! Outputs are stored one JSON file per step; progress is reconstructed from
//! which of those files exist.

pub mod status;
pub mod store;

pub use status::{StepRef, WorkflowStatus};
pub use store::OutputStore;
