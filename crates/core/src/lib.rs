// Core types for the Tuesday MCP server: tool names, argument schemas and the tool catalog

pub mod catalog;
pub mod schema;
pub mod tool;
pub mod types;

pub use catalog::{list_tools, ToolDescriptor};
pub use schema::{validate, ValidationError, Violation};
pub use tool::{ToolArgs, ToolName, UnknownTool};
pub use types::*;
