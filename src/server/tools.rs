//! Tool catalog and argument types.
//!
//! Input schemas are derived from the argument structs so the advertised
//! schema and the deserialized arguments cannot drift apart.

use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::protocol::ToolDefinition;

pub const GET_STEP_INSTRUCTIONS: &str = "get_step_instructions";
pub const SAVE_STEP_OUTPUT: &str = "save_step_output";
pub const GET_PREVIOUS_CONTEXT: &str = "get_previous_context";
pub const LIST_WORKFLOWS: &str = "list_workflows";
pub const GET_WORKFLOW_STATUS: &str = "get_workflow_status";

/// Arguments of `get_step_instructions`.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStepInstructionsArgs {
    /// ID of the workflow
    pub workflow_id: String,
    /// Step number (1-based)
    pub step_number: u64,
}

/// Arguments of `save_step_output`.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveStepOutputArgs {
    /// ID of the workflow
    pub workflow_id: String,
    /// ID of the step
    pub step_id: String,
    /// Step output data
    pub output: Map<String, Value>,
}

/// Arguments of `get_previous_context`.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPreviousContextArgs {
    /// ID of the workflow
    pub workflow_id: String,
    /// Current step number
    pub current_step: u64,
}

/// Arguments of `list_workflows`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, JsonSchema)]
pub struct ListWorkflowsArgs {}

/// Arguments of `get_workflow_status`.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkflowStatusArgs {
    /// ID of the workflow
    pub workflow_id: String,
}

/// Every tool the server exposes, in `tools/list` order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_STEP_INSTRUCTIONS,
            description: "Get instructions for a specific workflow step",
            input_schema: schema_for!(GetStepInstructionsArgs).to_value(),
        },
        ToolDefinition {
            name: SAVE_STEP_OUTPUT,
            description: "Save output from a completed workflow step",
            input_schema: schema_for!(SaveStepOutputArgs).to_value(),
        },
        ToolDefinition {
            name: GET_PREVIOUS_CONTEXT,
            description: "Get context from previous steps in the workflow",
            input_schema: schema_for!(GetPreviousContextArgs).to_value(),
        },
        ToolDefinition {
            name: LIST_WORKFLOWS,
            description: "List all available workflows",
            input_schema: schema_for!(ListWorkflowsArgs).to_value(),
        },
        ToolDefinition {
            name: GET_WORKFLOW_STATUS,
            description: "Get the current status of a workflow execution",
            input_schema: schema_for!(GetWorkflowStatusArgs).to_value(),
        },
    ]
}
