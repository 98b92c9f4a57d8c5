//! The `query_dual_models` tool: descriptor, argument parsing and error mapping.

use duet_application::{QueryModelsError, QueryModelsInput};
use rmcp::ErrorData;
use rmcp::model::{ErrorCode, JsonObject, Tool};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

/// Name under which the tool is advertised
pub const TOOL_NAME: &str = "query_dual_models";

const TOOL_DESCRIPTION: &str = "Send the same prompt to two different language models at once \
and return both answers side by side, labeled by model, for comparison.";

/// Errors raised while handling a tool call. Each one fails that call only.
#[derive(Error, Debug)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Dispatch(#[from] QueryModelsError),
}

impl From<ToolCallError> for ErrorData {
    fn from(err: ToolCallError) -> Self {
        let message = err.to_string();
        match err {
            ToolCallError::UnknownTool(_) => {
                ErrorData::new(ErrorCode::METHOD_NOT_FOUND, message, None)
            }
            ToolCallError::InvalidArguments(_) => ErrorData::invalid_params(message, None),
            ToolCallError::Dispatch(_) => ErrorData::internal_error(message, None),
        }
    }
}

/// JSON Schema for the tool input
pub fn input_schema() -> JsonObject {
    let schema = json!({
        "type": "object",
        "properties": {
            "prompt": {
                "type": "string",
                "description": "The prompt sent to both models"
            },
            "system_prompt": {
                "type": "string",
                "description": "Optional system instructions replacing the default for this call"
            }
        },
        "required": ["prompt"]
    });

    match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// The single tool this server advertises
pub fn descriptor() -> Tool {
    Tool::new(TOOL_NAME, TOOL_DESCRIPTION, Arc::new(input_schema()))
}

/// Validate call arguments.
///
/// `prompt` must be a string. `system_prompt` is used only when it is a
/// string; any other value is ignored.
pub fn parse_arguments(arguments: Option<&JsonObject>) -> Result<QueryModelsInput, ToolCallError> {
    let arguments = arguments.ok_or_else(|| {
        ToolCallError::InvalidArguments("missing arguments; 'prompt' is required".to_string())
    })?;

    let prompt = match arguments.get("prompt") {
        Some(Value::String(prompt)) => prompt,
        None | Some(Value::Null) => {
            return Err(ToolCallError::InvalidArguments(
                "'prompt' is required".to_string(),
            ));
        }
        Some(other) => {
            return Err(ToolCallError::InvalidArguments(format!(
                "'prompt' must be a string, got {}",
                json_type(other)
            )));
        }
    };

    let mut input = QueryModelsInput::new(prompt.as_str());
    if let Some(Value::String(system_prompt)) = arguments.get("system_prompt") {
        input = input.with_system_prompt(system_prompt.as_str());
    }

    Ok(input)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
