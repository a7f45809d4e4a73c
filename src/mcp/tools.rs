//! Tool registry, argument validation, and dispatch into the engine.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::protocol::RpcError;
use crate::engine;
use crate::error::InvalidColorError;
use crate::types::{ColorPairInput, TextSize, WcagLevel};

/// Batch size bounds, enforced here so the engine never sees an
/// out-of-range batch.
const BATCH_MIN_PAIRS: usize = 1;
const BATCH_MAX_PAIRS: usize = 50;

/// One tool as advertised through `tools/list`.
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// The four contrast tools this server registers.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "analyze_contrast",
            description: "Analyze WCAG color contrast ratio between foreground and background \
                          colors. Supports multiple color formats (hex, rgb, hsl, named colors).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "foreground": {
                        "type": "string",
                        "description": "Foreground color as hex (#ff0000), rgb(255,0,0), hsl(0,100%,50%), or named color (red)"
                    },
                    "background": {
                        "type": "string",
                        "description": "Background color as hex (#ffffff), rgb(255,255,255), hsl(0,0%,100%), or named color (white)"
                    }
                },
                "required": ["foreground", "background"]
            }),
        },
        ToolDefinition {
            name: "get_color_luminance",
            description: "Get color luminance value and format conversions.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "color": {
                        "type": "string",
                        "description": "Color as hex (#ff0000), rgb(255,0,0), hsl(0,100%,50%), or named color (red)"
                    }
                },
                "required": ["color"]
            }),
        },
        ToolDefinition {
            name: "check_wcag_compliance",
            description: "Check if color combination meets WCAG compliance requirements for \
                          specified level (AA/AAA) and text size (normal/large).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "foreground": {
                        "type": "string",
                        "description": "Foreground color as hex, rgb, hsl, or named color"
                    },
                    "background": {
                        "type": "string",
                        "description": "Background color as hex, rgb, hsl, or named color"
                    },
                    "level": {
                        "type": "string",
                        "enum": ["AA", "AAA"],
                        "description": "WCAG compliance level to check against",
                        "default": "AA"
                    },
                    "textSize": {
                        "type": "string",
                        "enum": ["normal", "large"],
                        "description": "Text size category (normal: <18pt or <14pt bold, large: ≥18pt or ≥14pt bold)",
                        "default": "normal"
                    }
                },
                "required": ["foreground", "background"]
            }),
        },
        ToolDefinition {
            name: "batch_contrast_analysis",
            description: "Analyze WCAG contrast ratios for multiple color pairs at once. Useful \
                          for checking entire color palettes or design systems.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "colorPairs": {
                        "type": "array",
                        "minItems": BATCH_MIN_PAIRS,
                        "maxItems": BATCH_MAX_PAIRS,
                        "items": {
                            "type": "object",
                            "properties": {
                                "foreground": { "type": "string", "description": "Foreground color" },
                                "background": { "type": "string", "description": "Background color" },
                                "label": { "type": "string", "description": "Optional label to identify this color pair" }
                            },
                            "required": ["foreground", "background"]
                        }
                    }
                },
                "required": ["colorPairs"]
            }),
        },
    ]
}

/// Route a `tools/call` to its handler.
///
/// Arguments arrive as the raw JSON object; structural validation happens
/// here and the engine sees only typed values.
pub fn call_tool(name: &str, args: &Map<String, Value>) -> Result<Value, RpcError> {
    match name {
        "analyze_contrast" => {
            let foreground = require_str(args, "foreground")?;
            let background = require_str(args, "background")?;
            let result = engine::analyze_contrast(foreground, background).map_err(tool_failure)?;
            Ok(tool_result(&result))
        }
        "get_color_luminance" => {
            let color = require_str(args, "color")?;
            let result = engine::analyze_color_accessibility(color).map_err(tool_failure)?;
            Ok(tool_result(&result))
        }
        "check_wcag_compliance" => {
            let foreground = require_str(args, "foreground")?;
            let background = require_str(args, "background")?;
            let level = optional_enum(args, "level")?.unwrap_or(WcagLevel::Aa);
            let text_size = optional_enum(args, "textSize")?.unwrap_or(TextSize::Normal);
            let result = engine::check_compliance(foreground, background, level, text_size)
                .map_err(tool_failure)?;
            Ok(tool_result(&result))
        }
        "batch_contrast_analysis" => {
            let pairs = require_color_pairs(args)?;
            Ok(tool_result(&engine::batch_contrast(&pairs)))
        }
        _ => Err(RpcError::unknown_tool(name)),
    }
}

fn require_str<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a str, RpcError> {
    args.get(key).and_then(Value::as_str).ok_or_else(|| {
        RpcError::invalid_params(format!("missing required string argument '{key}'"))
    })
}

fn optional_enum<T: DeserializeOwned>(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, RpcError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| RpcError::invalid_params(format!("invalid value for '{key}'"))),
    }
}

fn require_color_pairs(args: &Map<String, Value>) -> Result<Vec<ColorPairInput>, RpcError> {
    let value = args
        .get("colorPairs")
        .ok_or_else(|| RpcError::invalid_params("missing required argument 'colorPairs'"))?;
    let pairs: Vec<ColorPairInput> = serde_json::from_value(value.clone()).map_err(|_| {
        RpcError::invalid_params(
            "'colorPairs' must be an array of {foreground, background, label?} objects",
        )
    })?;
    if pairs.len() < BATCH_MIN_PAIRS || pairs.len() > BATCH_MAX_PAIRS {
        return Err(RpcError::invalid_params(format!(
            "'colorPairs' must contain between {BATCH_MIN_PAIRS} and {BATCH_MAX_PAIRS} pairs"
        )));
    }
    Ok(pairs)
}

fn tool_failure(err: InvalidColorError) -> RpcError {
    RpcError::internal_error(format!("Tool execution failed: {err}"))
}

/// Wrap a result in the MCP text-content envelope.
fn tool_result<T: Serialize>(payload: &T) -> Value {
    let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string());
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}
