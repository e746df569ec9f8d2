//! Tool server speaking JSON-RPC over stdio.
//!
//! - [`protocol`] - message types
//! - [`tools`] - tool catalog and argument schemas
//! - [`handler`] - routing requests to the engine
//! - [`stdio`] - the line-delimited read/answer loop
//!
//! # Example
//!
//! ```
//! use workflow_mcp::config::EngineConfig;
//! use workflow_mcp::engine::WorkflowEngine;
//! use workflow_mcp::server::{serve, ToolHandler};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let handler = ToolHandler::new(WorkflowEngine::new(EngineConfig::new(temp.path())));
//!
//! let input = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
//! let mut output = Vec::new();
//! serve(&handler, input.as_bytes(), &mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("get_step_instructions"));
//! ```

pub mod handler;
pub mod protocol;
pub mod stdio;
pub mod tools;

pub use handler::{ToolHandler, SERVER_NAME};
pub use protocol::{
    CallToolParams, Content, JsonRpcRequest, JsonRpcResponse, RpcError, ToolDefinition,
    ToolResult,
};
pub use stdio::{handle_line, serve};
pub use tools::tool_definitions;
