//! Request routing.
//!
//! [`ToolHandler`] turns JSON-RPC requests into engine calls. Tool failures
//! never surface as protocol errors: they come back as a normal tool result
//! whose text is `Error: <message>`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::engine::WorkflowEngine;
use crate::error::{Result, WorkflowError};

use super::protocol::{
    error_codes, CallToolParams, JsonRpcRequest, JsonRpcResponse, ToolResult,
    DEFAULT_PROTOCOL_VERSION,
};
use super::tools::{
    tool_definitions, GetPreviousContextArgs, GetStepInstructionsArgs, GetWorkflowStatusArgs,
    ListWorkflowsArgs, SaveStepOutputArgs, GET_PREVIOUS_CONTEXT, GET_STEP_INSTRUCTIONS,
    GET_WORKFLOW_STATUS, LIST_WORKFLOWS, SAVE_STEP_OUTPUT,
};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "workflow-mcp";

/// Dispatches protocol requests to a [`WorkflowEngine`].
#[derive(Debug, Clone)]
pub struct ToolHandler {
    engine: WorkflowEngine,
}

impl ToolHandler {
    /// Create a handler around an engine.
    pub fn new(engine: WorkflowEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &WorkflowEngine {
        &self.engine
    }

    /// Handle one request. Returns `None` for notifications.
    pub fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!("Received {}", request.method);

        if request.is_notification() {
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result(&params)),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tool_definitions() })),
            "tools/call" => match serde_json::from_value::<CallToolParams>(params) {
                Ok(call) => {
                    let result = self.call_tool(&call.name, call.arguments);
                    match serde_json::to_value(result) {
                        Ok(value) => JsonRpcResponse::success(id, value),
                        Err(e) => JsonRpcResponse::failure(
                            id,
                            error_codes::INVALID_PARAMS,
                            e.to_string(),
                        ),
                    }
                }
                Err(e) => JsonRpcResponse::failure(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call params: {}", e),
                ),
            },
            other => JsonRpcResponse::failure(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };

        Some(response)
    }

    /// Run a tool, converting any failure into an `Error: ...` text result.
    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match self.try_call_tool(name, arguments.unwrap_or_else(|| Value::Object(Map::new()))) {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                tracing::warn!("Tool {} failed: {}", name, e);
                ToolResult::text(format!("Error: {}", e))
            }
        }
    }

    fn try_call_tool(&self, name: &str, arguments: Value) -> Result<String> {
        match name {
            GET_STEP_INSTRUCTIONS => {
                let args: GetStepInstructionsArgs = parse_args(name, arguments)?;
                let step = self
                    .engine
                    .get_step_instructions(&args.workflow_id, args.step_number)?;
                to_pretty(&step)
            }
            SAVE_STEP_OUTPUT => {
                let args: SaveStepOutputArgs = parse_args(name, arguments)?;
                self.engine.save_step_output(
                    &args.workflow_id,
                    &args.step_id,
                    &Value::Object(args.output),
                )?;
                Ok(format!(
                    "Step output saved successfully for {}/{}",
                    args.workflow_id, args.step_id
                ))
            }
            GET_PREVIOUS_CONTEXT => {
                let args: GetPreviousContextArgs = parse_args(name, arguments)?;
                let context = self
                    .engine
                    .get_previous_context(&args.workflow_id, args.current_step)?;
                to_pretty(&context)
            }
            LIST_WORKFLOWS => {
                let _: ListWorkflowsArgs = parse_args(name, arguments)?;
                to_pretty(&self.engine.list_workflows()?)
            }
            GET_WORKFLOW_STATUS => {
                let args: GetWorkflowStatusArgs = parse_args(name, arguments)?;
                to_pretty(&self.engine.get_workflow_status(&args.workflow_id)?)
            }
            unknown => Err(WorkflowError::Protocol {
                message: format!("Unknown tool: {}", unknown),
            }),
        }
    }
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    json!({
        "protocolVersion": protocol_version,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| WorkflowError::Protocol {
        message: format!("Invalid arguments for {}: {}", tool, e),
    })
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| WorkflowError::Protocol {
        message: format!("Failed to serialize response: {}", e),
    })
}
