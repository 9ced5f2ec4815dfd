//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Immutable after bootstrap; handlers only read from it.
pub type AppState = Arc<AxumContext>;
