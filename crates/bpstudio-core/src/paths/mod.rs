//! Path utilities for locating bpstudio resources on disk.
//!
//! This module provides the canonical resolution of:
//! - The resource root (the directory bundled assets are looked up under)
//! - The shared schema files served by the API
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No I/O beyond reading the environment; callers decide what to do with the paths

mod error;
mod platform;
mod schemas;

pub use error::PathError;
pub use platform::{RESOURCE_DIR_ENV, build_repo_root, resource_root};
pub use schemas::{
    AGENT_CONFIG_SCHEMA_FILE, INTENTS_SCHEMA_FILE, SCHEMAS_DIR_RELATIVE, SchemaPaths,
};
