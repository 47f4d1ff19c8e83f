//! FRED MCP Server library.
//!
//! Provides the [`server::FredMcpServer`] MCP server handler, tool parameter types,
//! response rendering, and the static resources. Used by the `fred-mcp` binary
//! and available for integration testing.

pub mod resources;
pub mod server;
pub mod tools;

pub use server::FredMcpServer;
