//! BloodStream Core Library
//!
//! Patient intake for the BloodStream registration portal.
//!
//! # Architecture
//!
//! ```text
//! Add-patient form (Pname, Bgroup, loc, Pnum, Rdate)
//!                     │
//!                     ▼
//!                 RawIntake
//!                     │
//!            validate_intake (pure)
//!                     │
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!   PatientIntakeRecord      IntakeError
//!          │              (MissingField / InvalidFormat)
//!          ▼
//!   PatientStore::save ──► RecordId
//! ```
//!
//! # Modules
//!
//! - [`intake`]: The intake contract and its validator
//! - [`models`]: Domain types (PatientIntakeRecord, RecordId, BloodGroup)
//! - [`store`]: Pluggable persistence trait
//! - [`db`]: SQLite implementation of the store
//! - [`service`]: Validate-then-save handoff

pub mod db;
pub mod intake;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use db::{Database, DbError};
pub use intake::{
    validate_intake, ExpectedFormat, IntakeError, IntakeField, IntakeRules, IntakeValidator,
    RawIntake,
};
pub use models::{BloodGroup, PatientIntakeRecord, RecordId, StoredPatient};
pub use service::{IntakeService, Registration, SubmitError};
pub use store::{PatientStore, StorageError};
