//! Domain types shared by the bpstudio services.
//!
//! These types carry no infrastructure concerns; the HTTP adapter decides
//! how they are transported.

mod mcp;

pub use mcp::{ConnectionRequest, MOCK_TOOLS, ToolDescriptor, mock_tools};
