//! Shared helper functions for MCP tool implementations.

use fred_client::ClientError;
use rmcp::ErrorData as McpError;
use serde_json::json;

/// Map a client fault onto the MCP error a tool call fails with.
///
/// Input validation problems are the caller's to fix (`invalid_params`);
/// configuration, transport and decode faults are server-side (`internal_error`).
pub fn client_error_to_mcp(err: ClientError) -> McpError {
    match err {
        ClientError::InvalidInput(message) => McpError::invalid_params(message, None),
        ClientError::ApiError { status, message } => McpError::internal_error(
            format!("FRED API error: HTTP {status}"),
            Some(json!({ "status": status, "body": message })),
        ),
        other => McpError::internal_error(other.to_string(), None),
    }
}
