//! Worker configuration, read from the process environment.

use std::env;
use std::path::PathBuf;

/// Variable holding the room prefix.
pub const ROOM_PREFIX_ENV: &str = "AGENT_ROOM_PREFIX";

/// Variable that, when exactly `"1"`, makes the worker exit after startup.
pub const ONE_SHOT_ENV: &str = "ONE_SHOT";

/// Room prefix used when `AGENT_ROOM_PREFIX` is unset.
pub const DEFAULT_ROOM_PREFIX: &str = "bevpro-";

/// Load the nearest `.env`, searching from the current directory upward.
///
/// Variables already present in the process environment win over the file.
/// Returns the path of the loaded file, or `None` when there is no file.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub room_prefix: String,
    pub one_shot: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            room_prefix: DEFAULT_ROOM_PREFIX.to_string(),
            one_shot: false,
        }
    }
}

impl WorkerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            room_prefix: lookup(ROOM_PREFIX_ENV).unwrap_or_else(|| DEFAULT_ROOM_PREFIX.to_string()),
            one_shot: lookup(ONE_SHOT_ENV).as_deref() == Some("1"),
        }
    }
}
