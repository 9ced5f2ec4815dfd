//! Locations of the shared schema documents.

use std::path::{Path, PathBuf};

/// Schema directory, relative to the resource root.
pub const SCHEMAS_DIR_RELATIVE: &str = "packages/shared/schemas";

/// File name of the intents schema.
pub const INTENTS_SCHEMA_FILE: &str = "intents.schema.json";

/// File name of the agent configuration schema.
pub const AGENT_CONFIG_SCHEMA_FILE: &str = "agent_config.schema.json";

/// Resolved paths of both schema documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPaths {
    pub intents: PathBuf,
    pub agent_config: PathBuf,
}

impl SchemaPaths {
    /// Paths of the schema files under `resource_root`.
    pub fn under(resource_root: &Path) -> Self {
        let dir = resource_root.join(SCHEMAS_DIR_RELATIVE);
        Self {
            intents: dir.join(INTENTS_SCHEMA_FILE),
            agent_config: dir.join(AGENT_CONFIG_SCHEMA_FILE),
        }
    }
}
