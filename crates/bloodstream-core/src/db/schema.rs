//! SQLite schema definition.

/// Complete database schema for the patient store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients (write-once: rows are inserted at registration and never updated)
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    record_id TEXT PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) > 0),
    blood_group TEXT NOT NULL CHECK (length(blood_group) > 0),
    location TEXT NOT NULL CHECK (length(location) > 0),
    mobile_number TEXT NOT NULL CHECK (length(mobile_number) > 0),
    registration_date TEXT NOT NULL,              -- YYYY-MM-DD
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_registration_date ON patients(registration_date);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_empty_name_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO patients (record_id, name, blood_group, location, mobile_number, registration_date)
             VALUES ('id-1', '', 'O+', 'Pune', '9876543210', '2024-05-01')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO patients (record_id, name, blood_group, location, mobile_number, registration_date)
             VALUES ('id-1', 'Asha Rao', 'O+', 'Pune', '9876543210', '2024-05-01')",
            [],
        );
        assert!(result.is_ok());
    }
}
