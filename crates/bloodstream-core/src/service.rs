//! Validate-then-store handoff for add-patient submissions.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::intake::{IntakeError, IntakeRules, IntakeValidator, RawIntake};
use crate::models::{PatientIntakeRecord, RecordId, StoredPatient};
use crate::store::{PatientStore, StorageError, StorageResult};

/// Submission errors.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid submission: {0}")]
    Invalid(#[from] IntakeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A successfully registered patient.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RecordId,
    pub record: PatientIntakeRecord,
}

/// Runs the intake contract and hands valid records to a store.
///
/// The store is only called after validation succeeds, so a rejected
/// submission never creates a record.
pub struct IntakeService<S> {
    validator: IntakeValidator,
    store: S,
}

impl<S: PatientStore> IntakeService<S> {
    pub fn new(store: S, rules: IntakeRules) -> Self {
        Self {
            validator: IntakeValidator::new(rules),
            store,
        }
    }

    pub fn validator(&self) -> &IntakeValidator {
        &self.validator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a submission and save it.
    pub fn submit(&self, raw: &RawIntake) -> Result<Registration, SubmitError> {
        let record = self.validator.validate(raw).inspect_err(|e| {
            warn!(field = %e.field(), error = %e, "Rejected patient submission");
        })?;

        let id = self.store.save(&record).inspect_err(|e| {
            error!(error = %e, "Failed to save patient record");
        })?;

        info!(record_id = %id, "Registered patient");
        Ok(Registration { id, record })
    }

    /// Look up a saved registration.
    pub fn find(&self, id: &RecordId) -> StorageResult<Option<StoredPatient>> {
        self.store.find(id)
    }
}
