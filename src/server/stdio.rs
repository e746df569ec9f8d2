//! Line-delimited stdio transport.
//!
//! Each line on the input is one JSON-RPC message; each response is written
//! as one line on the output. Requests are handled strictly one at a time.

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::error::Result;

use super::handler::ToolHandler;
use super::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse};

/// Serve requests from `reader` until end of input.
pub fn serve<R, W>(handler: &ToolHandler, reader: R, mut writer: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(response) = handle_line(handler, line) {
            let encoded = serde_json::to_string(&response).map_err(anyhow::Error::from)?;
            writeln!(writer, "{}", encoded)?;
            writer.flush()?;
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

/// Decode and handle one message.
pub fn handle_line(handler: &ToolHandler, line: &str) -> Option<JsonRpcResponse> {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Discarding unparseable message: {}", e);
            return Some(JsonRpcResponse::failure(
                Value::Null,
                error_codes::PARSE_ERROR,
                format!("Parse error: {}", e),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) => handler.handle(request),
        Err(e) => Some(JsonRpcResponse::failure(
            id,
            error_codes::INVALID_REQUEST,
            format!("Invalid request: {}", e),
        )),
    }
}
