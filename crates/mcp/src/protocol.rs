// MCP protocol types and definitions (JSON-RPC 2.0 over stdio)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tuesday_core::ToolDescriptor;

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC 2.0 Request
///
/// A request without an `id` is a notification and gets no response. An
/// explicit `"id": null` is still a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(
        default,
        deserialize_with = "present_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

// Only called when the key is present, so `null` stays `Some(Value::Null)`
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: impl Into<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: impl Into<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.into(),
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self::custom(PARSE_ERROR, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::custom(INVALID_REQUEST, "Invalid Request")
    }

    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::custom(METHOD_NOT_FOUND, message)
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::custom(INVALID_PARAMS, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::custom(INTERNAL_ERROR, message)
    }

    pub fn custom(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

// MCP-specific protocol messages

/// Tool definition for MCP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl From<&ToolDescriptor> for ToolSchema {
    fn from(descriptor: &ToolDescriptor) -> Self {
        Self {
            name: descriptor.name.to_string(),
            description: descriptor.description.to_string(),
            input_schema: descriptor.input_schema.clone(),
        }
    }
}

/// List tools response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolSchema>,
}

/// Call tool request params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Call tool response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Initialize request params
///
/// Everything is optional; the server answers with its own protocol version
/// whatever the client asks for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion", default)]
    pub protocol_version: Option<String>,
    #[serde(default)]
    pub capabilities: Value,
    #[serde(rename = "clientInfo", default)]
    pub client_info: Option<ClientInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// Initialize response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_id_is_notification() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(request.is_notification());

        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})).unwrap();
        assert!(!request.is_notification());
        assert_eq!(request.id, Some(json!(1)));
    }

    #[test]
    fn test_null_id_is_not_notification() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": null, "method": "ping"}))
                .unwrap();
        assert!(!request.is_notification());
        assert_eq!(request.id, Some(Value::Null));
    }

    #[test]
    fn test_initialize_params() {
        let params: InitializeParams = serde_json::from_value(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "inspector", "version": "0.9"}
        }))
        .unwrap();
        assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
        assert_eq!(params.client_info.unwrap().name, "inspector");

        let params: InitializeParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.protocol_version.is_none());
        assert!(params.client_info.is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let response = JsonRpcResponse::error(7, JsonRpcError::method_not_found("Unknown tool: nope"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["error"]["message"], "Unknown tool: nope");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_call_tool_result_wire_format() {
        let value = serde_json::to_value(CallToolResult::text("hello")).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "hello"}]}));
    }

    #[test]
    fn test_call_tool_params_default_arguments() {
        let params: CallToolParams =
            serde_json::from_value(json!({"name": "check_api_key"})).unwrap();
        assert!(params.arguments.is_null());
    }

    #[test]
    fn test_tool_schema_from_descriptor() {
        let descriptor = &tuesday_core::list_tools()[0];
        let schema = ToolSchema::from(descriptor);

        assert_eq!(schema.name, descriptor.name);
        assert_eq!(schema.input_schema["type"], "object");
    }

    #[test]
    fn test_server_info_default() {
        let info = ServerInfo::default();
        assert_eq!(info.name, "tuesday-mcp");
    }
}
