//! # FRED MCP Core
//!
//! Umbrella crate for the FRED workspace. Re-exports the provider client and
//! the MCP server so downstream users and the end-to-end tests depend on a
//! single crate.
//!
//! - [`client`]: `fred-client`, the HTTP transport to the FRED API
//! - [`mcp`]: `fred-mcp`, the MCP tool façade and static resources

pub use fred_client as client;
pub use fred_mcp as mcp;

pub use fred_client::{ClientError, ClientResult, FredClient, FredSettings};
pub use fred_mcp::FredMcpServer;
