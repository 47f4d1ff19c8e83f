//! MCP tool parameter types and response rendering.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! Rendering turns provider JSON into the plain text each tool returns.

pub mod helpers;
pub mod params;
pub mod render;

pub use params::*;
