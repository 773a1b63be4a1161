// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::Dispatcher;
use anyhow::{Context, Result};
use futures::{FutureExt, StreamExt};
use serde::Serialize;
use serde_json::{json, Value};
use std::io;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_util::bytes::{Bytes, BytesMut};
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, FramedRead};
use tracing::{debug, error, info, warn};

/// Longest request line accepted. Longer lines are discarded and answered
/// with a parse error.
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// MCP server answering one client over a byte stream pair.
///
/// Every request line is handled on its own task, so a slow tool call does
/// not hold up `ping` or other calls. Responses are written as they complete.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Arc<Dispatcher>,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher, info: ServerInfo) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            info,
        }
    }

    /// Serve on the process's stdin and stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve on an arbitrary reader/writer pair until the reader hits EOF.
    ///
    /// Returns once every in-flight request has been answered.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut frames = FramedRead::new(reader, RequestCodec::new(MAX_LINE_BYTES));
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        info!("Tuesday MCP server started successfully");

        let read_loop = async move {
            while let Some(frame) = frames.next().await {
                let frame = frame.context("Failed to read from input")?;
                let line = match frame.into_text() {
                    Ok(line) => line,
                    Err(reason) => {
                        warn!(reason, "Unreadable request line");
                        send_response(
                            &tx,
                            JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()),
                        );
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                let server = self.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = server.handle_line(&line).await {
                        send_response(&tx, response);
                    }
                });
            }
            debug!("Input closed");
            Ok::<_, anyhow::Error>(())
        };

        let write_loop = async {
            while let Some(encoded) = rx.recv().await {
                writer.write_all(encoded.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<_, anyhow::Error>(())
        };

        tokio::try_join!(read_loop, write_loop).context("MCP transport failed")?;
        info!("Tuesday MCP server stopped");
        Ok(())
    }

    /// Handle one raw input line. `None` means nothing is sent back.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(err) => {
                warn!(error = %err, "Malformed JSON-RPC message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                warn!(error = %err, "Invalid JSON-RPC request");
                Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()))
            }
        }
    }

    /// Handle a decoded request. Notifications never get a response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(ListToolsResult {
                tools: self.dispatcher.list_tools(),
            }),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(format!(
                "Method not found: {}",
                other
            ))),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(err) => JsonRpcResponse::error(id, err),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params).map_err(|err| {
                JsonRpcError::invalid_params(format!("Invalid initialize params: {}", err))
            })?,
            None => InitializeParams::default(),
        };
        let client = params.client_info.as_ref();

        info!(
            client = client.map_or("unknown", |c| c.name.as_str()),
            client_version = client.map_or("unknown", |c| c.version.as_str()),
            requested_protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
            server = %self.info.name,
            "Client initialized session"
        );
        to_result(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|err| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", err)))?;

        let outcome = AssertUnwindSafe(self.dispatcher.invoke(&params.name, &params.arguments))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(text)) => to_result(CallToolResult::text(text)),
            Ok(Err(err)) => Err(err.into_rpc_error()),
            Err(_) => {
                error!(tool = %params.name, "Tool call panicked");
                Err(JsonRpcError::internal_error("Error: tool call panicked"))
            }
        }
    }
}

fn to_result<T: Serialize>(value: T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|err| JsonRpcError::internal_error(format!("Error: {}", err)))
}

fn send_response(tx: &mpsc::UnboundedSender<String>, response: JsonRpcResponse) {
    match serde_json::to_string(&response) {
        Ok(encoded) => {
            // Receiver only goes away when the writer failed
            let _ = tx.send(encoded);
        }
        Err(err) => error!(error = %err, "Failed to encode response"),
    }
}

/// One newline-delimited chunk of input
enum Frame {
    Line(Bytes),
    Oversized,
}

impl Frame {
    fn into_text(self) -> Result<String, &'static str> {
        let bytes = match self {
            Frame::Line(bytes) => bytes,
            Frame::Oversized => return Err("line exceeds maximum length"),
        };
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| "line is not valid UTF-8")
    }
}

/// Splits input on `\n` without ever failing on content.
///
/// `FramedRead` ends the stream after the first decoder error, so an
/// over-long line comes out as `Frame::Oversized` and only I/O errors are
/// returned as errors.
struct RequestCodec {
    inner: AnyDelimiterCodec,
}

impl RequestCodec {
    fn new(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), b"\n".to_vec(), max_length),
        }
    }

    fn frame(chunk: Result<Option<Bytes>, AnyDelimiterCodecError>) -> io::Result<Option<Frame>> {
        match chunk {
            Ok(chunk) => Ok(chunk.map(Frame::Line)),
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => Ok(Some(Frame::Oversized)),
            Err(AnyDelimiterCodecError::Io(err)) => Err(err),
        }
    }
}

impl Decoder for RequestCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::frame(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::frame(self.inner.decode_eof(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
    use crate::tools::DispatcherConfig;
    use tuesday_core::ApiKey;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(base_url: &str, fallback: Option<&str>) -> McpServer {
        let dispatcher = Dispatcher::new(DispatcherConfig {
            base_url: base_url.parse().unwrap(),
            fallback_api_key: fallback.and_then(ApiKey::new),
            timeout: None,
        });
        McpServer::new(dispatcher, ServerInfo::default())
    }

    fn offline_server() -> McpServer {
        server_for("http://127.0.0.1:9/api/v1", None)
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#)
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "tuesday-mcp");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#)
            .await
            .unwrap();

        assert_eq!(response.result.unwrap()["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_initialize_with_malformed_params() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"clientInfo":5}}"#)
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_null_id_gets_response() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
            .await
            .unwrap();

        assert_eq!(response.id, Value::Null);
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#)
            .await
            .unwrap();

        assert_eq!(response.id, "p");
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .unwrap();

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 10);
        assert!(tools.iter().all(|tool| tool["inputSchema"]["type"] == "object"));
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = offline_server();

        let response = server.handle_line("{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
        assert_eq!(response.id, Value::Null);

        let response = server.handle_line(r#"{"id":4,"params":{}}"#).await.unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
        assert_eq!(response.id, 4);

        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":5,"method":"resources/list"}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);

        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"arguments":{}}}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_tool_call() {
        let server = server_for("http://127.0.0.1:9/api/v1", Some("tk_env"));

        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#)
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert_eq!(error.message, "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_missing_credential_call_is_internal_error() {
        let response = offline_server()
            .handle_line(r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"check_api_key"}}"#)
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INTERNAL_ERROR);
        assert!(error.message.starts_with("Error: API key is required"));
    }

    #[tokio::test]
    async fn test_serve_over_in_memory_io() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/lookup/phone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "9", "phone": "+15550100"}
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri(), Some("tk_env"));
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"0"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"lookup_person_by_phone","arguments":{"phone":"+15550100"}}}"#,
            "\n",
        );
        let mut output = Vec::new();

        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let responses: Vec<JsonRpcResponse> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);

        let call = responses.iter().find(|r| r.id == 2).unwrap();
        let text = call.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap();
        assert!(text.starts_with("Person found by phone:\n\n"));
        assert!(text.contains("+15550100"));
    }

    fn read_responses(output: Vec<u8>) -> Vec<JsonRpcResponse> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_serve_survives_invalid_utf8() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        input.push(b'\n');
        let mut output = Vec::new();

        offline_server().serve(&input[..], &mut output).await.unwrap();

        let responses = read_responses(output);
        assert_eq!(responses.len(), 2);

        let rejected = responses.iter().find(|r| r.id == Value::Null).unwrap();
        assert_eq!(rejected.error.as_ref().unwrap().code, PARSE_ERROR);

        let ping = responses.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(ping.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_serve_discards_oversized_line() {
        let mut input = vec![b'x'; MAX_LINE_BYTES + 16];
        input.push(b'\n');
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
        input.extend_from_slice(b"\r\n");
        let mut output = Vec::new();

        offline_server().serve(&input[..], &mut output).await.unwrap();

        let responses = read_responses(output);
        assert_eq!(responses.len(), 2);

        let rejected = responses.iter().find(|r| r.id == Value::Null).unwrap();
        assert_eq!(rejected.error.as_ref().unwrap().code, PARSE_ERROR);

        let ping = responses.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(ping.result, Some(json!({})));
    }
}
