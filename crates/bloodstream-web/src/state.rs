//! Shared application state type.

use crate::bootstrap::PortalContext;
use std::sync::Arc;

/// Application state shared across all handlers.
pub type AppState = Arc<PortalContext>;
