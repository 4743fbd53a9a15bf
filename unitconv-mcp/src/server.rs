//! JSON-RPC request handling
//!
//! Tools:
//! - convert: Convert a raw input value between two named units
//! - list_units: List selectable units, optionally by category
//! - classify: Report the category of a unit name

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use unitconv::submit_conversion;
use unitconv_core::ErrorReport;
use unitconv_units::{classify, Category, UNITS};
use crate::config::ServerConfig;

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is `Some(Null)`
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

fn present_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<JsonValue>, D::Error> {
    JsonValue::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    /// Always sent; `null` when the request id could not be read
    pub id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

/// Handle one line of input. Notifications produce no response.
pub fn handle_line(config: &ServerConfig, line: &str) -> Option<McpResponse> {
    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("Error parsing request: {}", e);
            return Some(McpResponse {
                jsonrpc: "2.0".to_string(),
                id: JsonValue::Null,
                result: None,
                error: Some(McpError {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {}", e),
                    data: None,
                }),
            });
        }
    };

    debug!(method = %request.method, "processing");
    let response = handle_request(config, &request);

    if request.id.is_none() {
        debug!(method = %request.method, "notification processed (no response)");
        return None;
    }
    Some(response)
}

pub fn handle_request(config: &ServerConfig, request: &McpRequest) -> McpResponse {
    let id = request.id.clone().unwrap_or(JsonValue::Null);
    let result = match request.method.as_str() {
        "initialize" => handle_initialize(config, &request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),
        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(config: &ServerConfig, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version when it sends one
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(config.protocol_version);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": config.name,
            "version": config.version,
            "description": "Unit conversion for length, weight and temperature"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'convert' with unit names exactly as listed by 'list_units'. Only units of the same category convert."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let names = UNITS.names();
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Result is shown with 4 decimals.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "source": {
                            "type": "string",
                            "description": "Source unit",
                            "enum": names.clone()
                        },
                        "destination": {
                            "type": "string",
                            "description": "Destination unit",
                            "enum": names
                        },
                        "value": {
                            "type": ["string", "number"],
                            "description": "Value to convert, as typed by the user"
                        }
                    },
                    "required": ["source", "destination", "value"]
                }
            },
            {
                "name": "list_units",
                "description": "List selectable units in display order, optionally by category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "enum": ["length", "weight", "temperature"]
                        }
                    }
                }
            },
            {
                "name": "classify",
                "description": "Report the category of a unit name.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "unit": { "type": "string" }
                    },
                    "required": ["unit"]
                }
            }
        ]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(&args),
        "list_units" => tool_list_units(&args),
        "classify" => tool_classify(&args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn tool_convert(args: &JsonValue) -> Result<JsonValue, McpError> {
    let source = required_str(args, "source")?;
    let destination = required_str(args, "destination")?;

    // Numbers are accepted too, and go through the same text parsing
    let raw = match args.get("value") {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    match submit_conversion(source, destination, &raw) {
        Ok(conversion) => Ok(json!({
            "content": [{
                "type": "text",
                "text": format!("{} {} = {} {}", raw.trim(), source, conversion.display, destination)
            }],
            "data": conversion,
            "isError": false
        })),
        Err(e) => {
            debug!(source, destination, code = e.code(), "conversion failed");
            Ok(json!({
                "content": [{ "type": "text", "text": e.user_message() }],
                "error": ErrorReport::from(&e),
                "isError": true
            }))
        }
    }
}

fn tool_list_units(args: &JsonValue) -> Result<JsonValue, McpError> {
    let units = match args.get("category").and_then(|v| v.as_str()) {
        Some(name) => {
            let category = Category::from_name(name)
                .ok_or_else(|| McpError::invalid_params(format!("Unknown category: {}", name)))?;
            UNITS.by_category(category)
        }
        None => UNITS.all().to_vec(),
    };

    let data: Vec<JsonValue> = units.iter().map(|u| json!({
        "name": u.name(),
        "symbol": u.symbol(),
        "category": u.category(),
        "hub": u.is_hub()
    })).collect();

    let names: Vec<&str> = units.iter().map(|u| u.name()).collect();
    Ok(json!({
        "content": [{ "type": "text", "text": names.join(", ") }],
        "data": data
    }))
}

fn tool_classify(args: &JsonValue) -> Result<JsonValue, McpError> {
    let unit = required_str(args, "unit")?;
    let category = classify(unit);

    Ok(json!({
        "content": [{ "type": "text", "text": format!("{}: {}", unit, category) }],
        "unit": unit,
        "category": category,
        "hub": category.hub()
    }))
}
