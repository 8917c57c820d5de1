//! Axum web adapter for the BloodStream add-patient form.
//!
//! Serves the form, runs submissions through
//! [`bloodstream_core::IntakeService`], and exposes the same contract as a
//! small JSON API.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{bootstrap, start_server, PortalContext, SharedStore};
pub use config::{ConfigError, PortalConfig};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
