//! Patient database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{PatientIntakeRecord, RecordId, StoredPatient, REGISTRATION_DATE_FORMAT};

/// Row as stored, before the date column is parsed.
struct PatientRow {
    record_id: String,
    name: String,
    blood_group: String,
    location: String,
    mobile_number: String,
    registration_date: String,
    created_at: String,
}

impl PatientRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            record_id: row.get(0)?,
            name: row.get(1)?,
            blood_group: row.get(2)?,
            location: row.get(3)?,
            mobile_number: row.get(4)?,
            registration_date: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_stored(self) -> DbResult<StoredPatient> {
        let registration_date =
            NaiveDate::parse_from_str(&self.registration_date, REGISTRATION_DATE_FORMAT)
                .map_err(|e| DbError::CorruptRow {
                    record_id: self.record_id.clone(),
                    reason: format!("registration_date {:?}: {}", self.registration_date, e),
                })?;

        Ok(StoredPatient {
            record_id: RecordId::from(self.record_id),
            record: PatientIntakeRecord {
                name: self.name,
                blood_group: self.blood_group,
                location: self.location,
                mobile_number: self.mobile_number,
                registration_date,
            },
            created_at: self.created_at,
        })
    }
}

impl Database {
    /// Insert a validated record under a fresh id.
    pub fn insert_patient(&self, record: &PatientIntakeRecord) -> DbResult<RecordId> {
        let record_id = RecordId::generate();
        let created_at = chrono::Utc::now().to_rfc3339();

        self.conn.execute(
            r#"
            INSERT INTO patients (
                record_id, name, blood_group, location, mobile_number,
                registration_date, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record_id.as_str(),
                record.name,
                record.blood_group,
                record.location,
                record.mobile_number,
                record.registration_date_string(),
                created_at,
            ],
        )?;
        Ok(record_id)
    }

    /// Get a patient by record ID.
    pub fn get_patient(&self, record_id: &str) -> DbResult<Option<StoredPatient>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT record_id, name, blood_group, location, mobile_number,
                       registration_date, created_at
                FROM patients
                WHERE record_id = ?
                "#,
                [record_id],
                PatientRow::from_row,
            )
            .optional()?;

        row.map(PatientRow::into_stored).transpose()
    }

    /// Number of stored patients.
    pub fn count_patients(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
