//! Resource root detection.
//!
//! The API server is deployed next to the repository checkout it was built
//! from, so the default resource root is the workspace root recorded by the
//! build script. Deployments that ship the binary elsewhere point
//! `BPSTUDIO_RESOURCE_DIR` at the directory holding `packages/`.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the resource root.
pub const RESOURCE_DIR_ENV: &str = "BPSTUDIO_RESOURCE_DIR";

/// Workspace root captured at build time.
pub fn build_repo_root() -> PathBuf {
    PathBuf::from(env!("BPSTUDIO_REPO_ROOT"))
}

/// Get the root directory for application resources (schemas, static assets).
///
/// Resolution order:
/// 1. `BPSTUDIO_RESOURCE_DIR` environment variable
/// 2. Workspace root the binary was built from
pub fn resource_root() -> Result<PathBuf, PathError> {
    resolve_resource_root(env::var(RESOURCE_DIR_ENV).ok().as_deref())
}

/// Pure resolution step, split out so tests don't have to touch the environment.
pub(super) fn resolve_resource_root(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    let Some(raw) = override_dir else {
        return Ok(build_repo_root());
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyOverride(RESOURCE_DIR_ENV));
    }

    let path = PathBuf::from(trimmed);
    if path.is_absolute() {
        Ok(path)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
