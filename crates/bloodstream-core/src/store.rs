//! Pluggable record storage.
//!
//! The intake contract ends at a validated [`PatientIntakeRecord`]; whatever
//! keeps it implements [`PatientStore`]. [`Database`] is the SQLite store.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::{PatientIntakeRecord, RecordId, StoredPatient};

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for StorageError {
    fn from(e: PoisonError<T>) -> Self {
        StorageError::Unavailable(format!("Lock poisoned: {}", e))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence collaborator for validated intake records.
pub trait PatientStore {
    /// Persist a record, returning its new id. Every call creates a new record.
    fn save(&self, record: &PatientIntakeRecord) -> StorageResult<RecordId>;

    /// Read a saved record back by id.
    fn find(&self, record_id: &RecordId) -> StorageResult<Option<StoredPatient>>;
}

impl PatientStore for Database {
    fn save(&self, record: &PatientIntakeRecord) -> StorageResult<RecordId> {
        Ok(self.insert_patient(record)?)
    }

    fn find(&self, record_id: &RecordId) -> StorageResult<Option<StoredPatient>> {
        Ok(self.get_patient(record_id.as_str())?)
    }
}

impl<S: PatientStore> PatientStore for Mutex<S> {
    fn save(&self, record: &PatientIntakeRecord) -> StorageResult<RecordId> {
        self.lock()?.save(record)
    }

    fn find(&self, record_id: &RecordId) -> StorageResult<Option<StoredPatient>> {
        self.lock()?.find(record_id)
    }
}

impl<S: PatientStore + ?Sized> PatientStore for Arc<S> {
    fn save(&self, record: &PatientIntakeRecord) -> StorageResult<RecordId> {
        (**self).save(record)
    }

    fn find(&self, record_id: &RecordId) -> StorageResult<Option<StoredPatient>> {
        (**self).find(record_id)
    }
}
