//! Render a request in one of the supported output formats

use core::fmt;
use core::str::FromStr;

use crate::operations::encode::{COMMAND_NAME, command_tokens, encode};
use crate::request::TransactionQueryRequest;
use anyhow::Result;
use serde::Serialize;

/// Output format for command-line representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Canonical command string, ready to hand to the CLI
    #[default]
    Shell,
    /// JSON array of arguments
    Json,
    /// JSON-RPC request body for the same query
    JsonRpc,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            "json-rpc" | "jsonrpc" => Ok(Self::JsonRpc),
            _ => Err(format!(
                "Invalid format: {s}. Use 'shell', 'json' or 'json-rpc'"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Shell => f.write_str("shell"),
            Self::Json => f.write_str("json"),
            Self::JsonRpc => f.write_str("json-rpc"),
        }
    }
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: (u64, u64, bool),
    id: u64,
}

/// Convert a request to the requested representation
///
/// # Errors
///
/// Returns an error if the request cannot be serialized to JSON
#[inline]
pub fn generate_command_line(
    request: &TransactionQueryRequest,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Shell => Ok(encode(request)),
        OutputFormat::Json => format_as_json(&command_tokens(request)),
        OutputFormat::JsonRpc => format_as_json_rpc(request),
    }
}

/// Format arguments as JSON array
fn format_as_json(args: &[String]) -> Result<String> {
    serde_json::to_string_pretty(args)
        .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}"))
}

/// Format as a JSON-RPC call; `prettify` only affects client-side display and is not sent
fn format_as_json_rpc(request: &TransactionQueryRequest) -> Result<String> {
    let body = JsonRpcRequest {
        jsonrpc: "2.0",
        method: COMMAND_NAME,
        params: (
            request.from_version(),
            request.limit(),
            request.include_events(),
        ),
        id: 1,
    };

    serde_json::to_string(&body)
        .map_err(|e| anyhow::anyhow!("Failed to serialize JSON-RPC request: {e}"))
}
