//! HTTP handlers.

pub mod api;
pub mod intake;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
