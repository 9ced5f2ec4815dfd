//! Core domain types and path resolution for bpstudio.
//!
//! This crate has no HTTP or runtime dependencies. The axum adapter and the
//! voice worker build on top of it.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod schemas;

pub use domain::{ConnectionRequest, MOCK_TOOLS, ToolDescriptor, mock_tools};
pub use paths::{PathError, SchemaPaths, resource_root};
pub use schemas::{SchemaBundle, SchemaLoad, load_schema};
