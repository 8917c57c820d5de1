//! Patient intake records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format sent by the registration form's date input.
pub const REGISTRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// One validated submission of the add-patient form.
///
/// Built from raw form input by [`crate::intake::validate_intake`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientIntakeRecord {
    /// Patient's full name
    pub name: String,
    /// ABO/Rh group, e.g. "O+"
    pub blood_group: String,
    /// Location or address
    pub location: String,
    /// Contact number, digits only
    pub mobile_number: String,
    /// Date of registration
    pub registration_date: NaiveDate,
}

impl PatientIntakeRecord {
    /// Registration date in the form's `YYYY-MM-DD` layout.
    pub fn registration_date_string(&self) -> String {
        self.registration_date
            .format(REGISTRATION_DATE_FORMAT)
            .to_string()
    }
}

/// Identifier handed out by a record store on save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random (UUID v4) id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record as read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredPatient {
    /// Store-assigned id
    pub record_id: RecordId,
    /// The saved intake record
    #[serde(flatten)]
    pub record: PatientIntakeRecord,
    /// Save timestamp (RFC 3339)
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PatientIntakeRecord {
        PatientIntakeRecord {
            name: "Asha Rao".into(),
            blood_group: "O+".into(),
            location: "Pune".into(),
            mobile_number: "9876543210".into(),
            registration_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_record_id_is_uuid() {
        let id = RecordId::generate();
        assert_eq!(id.as_str().len(), 36); // UUID format
        assert_ne!(id, RecordId::generate());
    }

    #[test]
    fn test_registration_date_string() {
        assert_eq!(sample().registration_date_string(), "2024-05-01");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["bloodGroup"], "O+");
        assert_eq!(json["mobileNumber"], "9876543210");
        assert_eq!(json["registrationDate"], "2024-05-01");
    }

    #[test]
    fn test_stored_patient_flattens_record() {
        let stored = StoredPatient {
            record_id: RecordId::from("abc".to_string()),
            record: sample(),
            created_at: "2024-05-01T10:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["recordId"], "abc");
        assert_eq!(json["name"], "Asha Rao");
    }
}
