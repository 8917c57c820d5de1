//! JSON API for patient intake.
//!
//! Store calls are synchronous SQLite work behind a mutex, so they run on
//! the blocking pool rather than on a runtime worker.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloodstream_core::{RawIntake, RecordId, Registration, StoredPatient};

use crate::error::HttpError;
use crate::state::AppState;

/// Validate and save a patient.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RawIntake>, JsonRejection>,
) -> Result<(StatusCode, Json<Registration>), HttpError> {
    let Json(raw) = payload?;
    let registration = tokio::task::spawn_blocking(move || state.intake.submit(&raw)).await??;
    Ok((StatusCode::CREATED, Json(registration)))
}

/// Read back a saved patient.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredPatient>, HttpError> {
    let id = RecordId::from(id);
    let lookup = id.clone();
    tokio::task::spawn_blocking(move || state.intake.find(&lookup))
        .await??
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Patient not found: {}", id)))
}
