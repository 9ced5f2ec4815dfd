//! Schema bundle loading.
//!
//! Schema documents are read from disk on every call. A missing, unreadable
//! or malformed file degrades to an empty JSON object; the reason is only
//! visible in the logs.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::paths::SchemaPaths;

/// Outcome of reading one schema document.
#[derive(Debug)]
pub enum SchemaLoad {
    /// File parsed as JSON.
    Loaded(Value),
    /// File does not exist.
    Missing,
    /// File exists but could not be read.
    Unreadable(io::Error),
    /// File exists but is not valid JSON.
    Malformed(serde_json::Error),
}

impl SchemaLoad {
    /// Read and decode the document at `path`.
    pub fn read(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::Missing,
            Err(e) => return Self::Unreadable(e),
        };

        match serde_json::from_str(&text) {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Malformed(e),
        }
    }

    /// Collapse the outcome into the served value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Loaded(value) => value,
            Self::Missing | Self::Unreadable(_) | Self::Malformed(_) => empty_object(),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Load one schema document, substituting `{}` on any failure.
pub fn load_schema(path: &Path) -> Value {
    let outcome = SchemaLoad::read(path);
    match &outcome {
        SchemaLoad::Loaded(_) => {
            tracing::debug!(target: "bpstudio.schemas", path = %path.display(), "Loaded schema");
        }
        SchemaLoad::Missing => {
            tracing::debug!(target: "bpstudio.schemas", path = %path.display(), "Schema file missing, serving empty object");
        }
        SchemaLoad::Unreadable(e) => {
            tracing::warn!(target: "bpstudio.schemas", path = %path.display(), error = %e, "Schema file unreadable, serving empty object");
        }
        SchemaLoad::Malformed(e) => {
            tracing::warn!(target: "bpstudio.schemas", path = %path.display(), error = %e, "Schema file is not valid JSON, serving empty object");
        }
    }
    outcome.into_value()
}

/// The intents and agent-config schema documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SchemaBundle {
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub intents: Value,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub agent_config: Value,
}

impl SchemaBundle {
    /// Bundle with both documents empty.
    pub fn empty() -> Self {
        Self {
            intents: empty_object(),
            agent_config: empty_object(),
        }
    }

    /// Read both documents fresh from disk.
    pub fn load(paths: &SchemaPaths) -> Self {
        Self {
            intents: load_schema(&paths.intents),
            agent_config: load_schema(&paths.agent_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn write_schemas(root: &Path, intents: Option<&str>, agent: Option<&str>) -> SchemaPaths {
        let paths = SchemaPaths::under(root);
        fs::create_dir_all(paths.intents.parent().unwrap()).unwrap();
        if let Some(body) = intents {
            fs::write(&paths.intents, body).unwrap();
        }
        if let Some(body) = agent {
            fs::write(&paths.agent_config, body).unwrap();
        }
        paths
    }

    #[test]
    fn test_missing_file_is_missing() {
        let temp = tempdir().unwrap();
        let outcome = SchemaLoad::read(&temp.path().join("nope.json"));
        assert!(matches!(outcome, SchemaLoad::Missing));
        assert_eq!(outcome.into_value(), json!({}));
    }

    #[test]
    fn test_malformed_file_is_malformed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let outcome = SchemaLoad::read(&path);
        assert!(matches!(outcome, SchemaLoad::Malformed(_)));
        assert_eq!(outcome.into_value(), json!({}));
    }

    #[test]
    fn test_directory_in_place_of_file_degrades() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("schema.json");
        fs::create_dir(&path).unwrap();

        assert_eq!(load_schema(&path), json!({}));
    }

    #[test]
    fn test_valid_file_served_verbatim() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ok.json");
        fs::write(&path, r#"{"type":"object","title":"Intent"}"#).unwrap();

        assert_eq!(
            load_schema(&path),
            json!({"type": "object", "title": "Intent"})
        );
    }

    #[test]
    fn test_non_object_json_kept() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert_eq!(load_schema(&path), json!([1, 2, 3]));
    }

    #[test]
    fn test_bundle_both_absent() {
        let temp = tempdir().unwrap();
        let bundle = SchemaBundle::load(&SchemaPaths::under(temp.path()));

        assert_eq!(
            serde_json::to_value(&bundle).unwrap(),
            json!({"intents": {}, "agent_config": {}})
        );
    }

    #[test]
    fn test_bundle_one_malformed() {
        let temp = tempdir().unwrap();
        let paths = write_schemas(temp.path(), Some(r#"{"title":"intents"}"#), Some("{{{"));
        let bundle = SchemaBundle::load(&paths);

        assert_eq!(bundle.intents, json!({"title": "intents"}));
        assert_eq!(bundle.agent_config, json!({}));
    }

    #[test]
    fn test_bundle_reads_fresh_each_time() {
        let temp = tempdir().unwrap();
        let paths = write_schemas(temp.path(), Some(r#"{"v":1}"#), None);
        assert_eq!(SchemaBundle::load(&paths).intents, json!({"v": 1}));

        fs::write(&paths.intents, r#"{"v":2}"#).unwrap();
        assert_eq!(SchemaBundle::load(&paths).intents, json!({"v": 2}));
    }
}
