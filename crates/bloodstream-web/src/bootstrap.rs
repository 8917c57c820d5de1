//! Server bootstrap - the composition root.
//!
//! The only place where the store, the intake service and the HTTP listener
//! are wired together.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use bloodstream_core::{Database, IntakeService};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::PortalConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Store shared by all requests.
pub type SharedStore = Arc<Mutex<Database>>;

/// Services needed by the handlers.
pub struct PortalContext {
    pub intake: IntakeService<SharedStore>,
}

/// Open the store and build the application state.
pub fn bootstrap(config: &PortalConfig) -> Result<AppState> {
    let db = if config.database.is_in_memory() {
        Database::open_in_memory().context("Failed to open in-memory database")?
    } else {
        Database::open(&config.database.path)
            .with_context(|| format!("Failed to open database at {}", config.database.path))?
    };

    info!(
        database = %config.database.path,
        strict_blood_group = config.intake.enforce_blood_group_set,
        "Patient store ready"
    );

    Ok(Arc::new(PortalContext {
        intake: IntakeService::new(Arc::new(Mutex::new(db)), config.intake),
    }))
}

/// Bind the listener and serve until Ctrl-C.
pub async fn start_server(config: PortalConfig) -> Result<()> {
    let state = bootstrap(&config)?;
    let app = create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "BloodStream portal listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("BloodStream portal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
