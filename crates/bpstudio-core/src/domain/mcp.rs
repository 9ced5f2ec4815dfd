//! MCP connection-test domain types.
//!
//! The connection test is a mock: the request is validated for shape only and
//! the tool list is fixed. No MCP session is ever opened.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request to test a connection to an MCP server.
///
/// Both fields are required strings. Their contents are not inspected.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    /// URL of the MCP server.
    #[cfg_attr(feature = "openapi", schema(example = "https://mcp.example.com"))]
    pub server_url: String,
    /// Access token for the MCP server.
    pub token: String,
}

// Manual impl so the token never ends up in logs.
impl fmt::Debug for ConnectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRequest")
            .field("server_url", &self.server_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A tool exposed by an MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

/// Name/description pairs returned by every connection test.
pub const MOCK_TOOLS: [(&str, &str); 2] = [
    ("query_supabase", "Query Supabase tables"),
    ("summarize", "Summarize text content"),
];

/// The fixed tool list reported for any connection request.
pub fn mock_tools() -> Vec<ToolDescriptor> {
    MOCK_TOOLS
        .iter()
        .map(|(name, description)| ToolDescriptor {
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}
