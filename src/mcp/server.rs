//! JSON-RPC method routing.

use serde_json::{json, Map, Value};
use tracing::debug;

use super::protocol::{error_response, success_response, RpcError};
use super::tools::{self, ToolDefinition};

pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "wcag-contrast-server";

/// The request handler. Holds nothing but the tool registration table;
/// every call is an independent pure computation.
pub struct McpServer {
    tools: Vec<ToolDefinition>,
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl McpServer {
    pub fn new() -> Self {
        Self {
            tools: tools::tool_definitions(),
        }
    }

    /// Handle one incoming frame. Returns `None` for notifications and
    /// for response frames (this server issues no outbound requests).
    pub fn handle_message(&self, message: Value) -> Option<Value> {
        let Some(frame) = message.as_object() else {
            return Some(error_response(
                Value::Null,
                RpcError::invalid_request("request must be a JSON object"),
            ));
        };

        if frame.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            let id = frame.get("id").cloned().unwrap_or(Value::Null);
            return Some(error_response(
                id,
                RpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let Some(method) = frame.get("method").and_then(Value::as_str) else {
            return None;
        };
        let params = frame.get("params").cloned().unwrap_or(Value::Null);

        match frame.get("id") {
            Some(id) => {
                let id = id.clone();
                Some(match self.handle_request(method, params) {
                    Ok(result) => success_response(id, result),
                    Err(err) => error_response(id, err),
                })
            }
            None => {
                self.handle_notification(method);
                None
            }
        }
    }

    fn handle_request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(self.initialize_payload()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.tools_list_payload()),
            "tools/call" => self.handle_tools_call(params),
            _ => Err(RpcError::method_not_found(method)),
        }
    }

    fn handle_notification(&self, method: &str) {
        if !matches!(
            method,
            "notifications/initialized" | "notifications/cancelled"
        ) {
            debug!(method, "ignoring notification");
        }
    }

    fn initialize_payload(&self) -> Value {
        json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn tools_list_payload(&self) -> Value {
        let tools: Vec<Value> = self
            .tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema,
                })
            })
            .collect();
        json!({ "tools": tools })
    }

    fn handle_tools_call(&self, params: Value) -> Result<Value, RpcError> {
        let params = params
            .as_object()
            .ok_or_else(|| RpcError::invalid_params("tools/call params must be an object"))?;

        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_params("tools/call requires string field 'name'"))?;

        let arguments = match params.get("arguments") {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::Null) | None => Map::new(),
            Some(_) => {
                return Err(RpcError::invalid_params(
                    "tools/call 'arguments' must be an object",
                ));
            }
        };

        debug!(tool = name, "tools/call");
        tools::call_tool(name, &arguments)
    }
}
