//! Patient intake contract.
//!
//! Turns the five raw values of an add-patient form submission into a
//! [`PatientIntakeRecord`]:
//!
//! - every field must be non-empty after trimming
//! - `mobileNumber` must be ASCII digits only
//! - `registrationDate` must be a real calendar date (`YYYY-MM-DD`)
//! - `bloodGroup` is free text unless [`IntakeRules::enforce_blood_group_set`] is on
//!
//! Validation is pure. Fields are checked in form order and the first
//! failure is reported; [`IntakeValidator::check_all`] returns every failure.

mod error;

pub use error::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{BloodGroup, PatientIntakeRecord, REGISTRATION_DATE_FORMAT};

/// Raw form submission, values exactly as received.
///
/// Deserializes from either the HTML form keys (`Pname`, `Bgroup`, `loc`,
/// `Pnum`, `Rdate`) or the contract names (`name`, `bloodGroup`, ...).
/// Absent keys become empty strings and fail as missing fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawIntake {
    #[serde(default, rename = "Pname", alias = "name")]
    pub name: String,
    #[serde(default, rename = "Bgroup", alias = "bloodGroup")]
    pub blood_group: String,
    #[serde(default, rename = "loc", alias = "location")]
    pub location: String,
    #[serde(default, rename = "Pnum", alias = "mobileNumber")]
    pub mobile_number: String,
    #[serde(default, rename = "Rdate", alias = "registrationDate")]
    pub registration_date: String,
}

impl RawIntake {
    /// Raw value submitted for a field.
    pub fn value(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Name => &self.name,
            IntakeField::BloodGroup => &self.blood_group,
            IntakeField::Location => &self.location,
            IntakeField::MobileNumber => &self.mobile_number,
            IntakeField::RegistrationDate => &self.registration_date,
        }
    }
}

/// Validation options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IntakeRules {
    /// Only accept the eight ABO/Rh groups, stored in canonical upper case.
    pub enforce_blood_group_set: bool,
}

impl IntakeRules {
    /// Rules that restrict blood groups to the ABO/Rh set.
    pub fn strict() -> Self {
        Self {
            enforce_blood_group_set: true,
        }
    }
}

/// Validator for add-patient submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeValidator {
    rules: IntakeRules,
}

impl IntakeValidator {
    pub fn new(rules: IntakeRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> IntakeRules {
        self.rules
    }

    /// Validate a submission, reporting the first failing field.
    pub fn validate(&self, raw: &RawIntake) -> IntakeResult<PatientIntakeRecord> {
        let name = self.check_field(IntakeField::Name, &raw.name)?;
        let blood_group = self.check_field(IntakeField::BloodGroup, &raw.blood_group)?;
        let location = self.check_field(IntakeField::Location, &raw.location)?;
        let mobile_number = self.check_field(IntakeField::MobileNumber, &raw.mobile_number)?;
        let registration_date = check_date(&raw.registration_date)?;

        Ok(PatientIntakeRecord {
            name,
            blood_group,
            location,
            mobile_number,
            registration_date,
        })
    }

    /// Every field error in the submission, in form order.
    ///
    /// Empty exactly when [`validate`](Self::validate) succeeds; otherwise its
    /// first element is the error `validate` returns.
    pub fn check_all(&self, raw: &RawIntake) -> Vec<IntakeError> {
        IntakeField::ALL
            .into_iter()
            .filter_map(|field| self.check_field(field, raw.value(field)).err())
            .collect()
    }

    /// Check one field, returning its normalized text.
    pub fn check_field(&self, field: IntakeField, value: &str) -> IntakeResult<String> {
        match field {
            IntakeField::Name | IntakeField::Location => {
                required(field, value).map(str::to_string)
            }
            IntakeField::BloodGroup => self.check_blood_group(required(field, value)?),
            IntakeField::MobileNumber => {
                let trimmed = required(field, value)?;
                if trimmed.chars().all(|c| c.is_ascii_digit()) {
                    Ok(trimmed.to_string())
                } else {
                    Err(IntakeError::InvalidFormat(field, ExpectedFormat::Digits))
                }
            }
            IntakeField::RegistrationDate => check_date(value)
                .map(|date| date.format(REGISTRATION_DATE_FORMAT).to_string()),
        }
    }

    fn check_blood_group(&self, trimmed: &str) -> IntakeResult<String> {
        if !self.rules.enforce_blood_group_set {
            return Ok(trimmed.to_string());
        }

        trimmed
            .parse::<BloodGroup>()
            .map(|group| group.as_str().to_string())
            .map_err(|_| {
                IntakeError::InvalidFormat(IntakeField::BloodGroup, ExpectedFormat::BloodGroup)
            })
    }
}

/// Validate a submission with default rules (free-text blood group).
pub fn validate_intake(raw: &RawIntake) -> IntakeResult<PatientIntakeRecord> {
    IntakeValidator::default().validate(raw)
}

fn required(field: IntakeField, value: &str) -> IntakeResult<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(IntakeError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Shape of a form date: exactly `YYYY-MM-DD`, ASCII digits only.
fn is_date_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Registration date check shared by `validate` and `check_field`.
///
/// chrono alone accepts unpadded and signed years, so the shape is checked
/// first; a valid date then formats back to exactly the trimmed input.
fn check_date(value: &str) -> IntakeResult<NaiveDate> {
    let trimmed = required(IntakeField::RegistrationDate, value)?;
    let invalid =
        || IntakeError::InvalidFormat(IntakeField::RegistrationDate, ExpectedFormat::Date);

    if !is_date_shaped(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, REGISTRATION_DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RawIntake {
        RawIntake {
            name: "Asha Rao".into(),
            blood_group: "O+".into(),
            location: "Pune".into(),
            mobile_number: "9876543210".into(),
            registration_date: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let record = validate_intake(&valid()).unwrap();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.blood_group, "O+");
        assert_eq!(record.location, "Pune");
        assert_eq!(record.mobile_number, "9876543210");
        assert_eq!(record.registration_date_string(), "2024-05-01");
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut raw = valid();
        raw.name = "  Asha Rao \t".into();
        raw.mobile_number = " 9876543210\n".into();
        raw.registration_date = " 2024-05-01 ".into();

        let record = validate_intake(&raw).unwrap();
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.mobile_number, "9876543210");
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut raw = valid();
        raw.location = "   ".into();
        assert_eq!(
            validate_intake(&raw),
            Err(IntakeError::MissingField(IntakeField::Location))
        );
    }

    #[test]
    fn test_mobile_number_must_be_digits() {
        let mut raw = valid();
        raw.mobile_number = "12a456".into();
        assert_eq!(
            validate_intake(&raw),
            Err(IntakeError::InvalidFormat(
                IntakeField::MobileNumber,
                ExpectedFormat::Digits
            ))
        );

        raw.mobile_number = "+919876543210".into();
        assert!(validate_intake(&raw).is_err());
    }

    #[test]
    fn test_impossible_date() {
        let mut raw = valid();
        raw.registration_date = "2024-02-30".into();
        assert_eq!(
            validate_intake(&raw),
            Err(IntakeError::InvalidFormat(
                IntakeField::RegistrationDate,
                ExpectedFormat::Date
            ))
        );
    }

    #[test]
    fn test_date_must_be_zero_padded() {
        let mut raw = valid();
        for date in ["2024-5-1", "2024-05-1", "+2024-05-01", "02024-05-01", "2024/05/01"] {
            raw.registration_date = date.into();
            assert_eq!(
                validate_intake(&raw),
                Err(IntakeError::InvalidFormat(
                    IntakeField::RegistrationDate,
                    ExpectedFormat::Date
                )),
                "{} should be rejected",
                date
            );
        }
    }

    #[test]
    fn test_date_check_agrees_with_validate() {
        let validator = IntakeValidator::default();
        for date in ["2024-05-01", " 2024-05-01 ", "2024-5-1", "+2024-05-01", "2024-02-30", ""] {
            let mut raw = valid();
            raw.registration_date = date.into();

            let from_field = validator.check_field(IntakeField::RegistrationDate, date);
            match validator.validate(&raw) {
                Ok(record) => {
                    assert_eq!(from_field, Ok(record.registration_date_string()));
                    assert_eq!(record.registration_date_string(), date.trim());
                }
                Err(e) => assert_eq!(from_field, Err(e)),
            }
        }
    }

    #[test]
    fn test_leap_day() {
        let mut raw = valid();
        raw.registration_date = "2024-02-29".into();
        assert!(validate_intake(&raw).is_ok());

        raw.registration_date = "2023-02-29".into();
        assert!(validate_intake(&raw).is_err());
    }

    #[test]
    fn test_first_failure_in_form_order() {
        let raw = RawIntake {
            name: "Asha Rao".into(),
            blood_group: String::new(),
            location: String::new(),
            mobile_number: "abc".into(),
            registration_date: "tomorrow".into(),
        };
        assert_eq!(
            validate_intake(&raw),
            Err(IntakeError::MissingField(IntakeField::BloodGroup))
        );
    }

    #[test]
    fn test_check_all_reports_every_field() {
        let raw = RawIntake {
            name: "Asha Rao".into(),
            blood_group: String::new(),
            location: "Pune".into(),
            mobile_number: "abc".into(),
            registration_date: "2024-13-01".into(),
        };
        let errors = IntakeValidator::default().check_all(&raw);
        assert_eq!(
            errors,
            vec![
                IntakeError::MissingField(IntakeField::BloodGroup),
                IntakeError::InvalidFormat(IntakeField::MobileNumber, ExpectedFormat::Digits),
                IntakeError::InvalidFormat(IntakeField::RegistrationDate, ExpectedFormat::Date),
            ]
        );
    }

    #[test]
    fn test_check_all_empty_for_valid() {
        assert!(IntakeValidator::default().check_all(&valid()).is_empty());
    }

    #[test]
    fn test_free_text_blood_group_by_default() {
        let mut raw = valid();
        raw.blood_group = "Bombay (hh)".into();
        let record = validate_intake(&raw).unwrap();
        assert_eq!(record.blood_group, "Bombay (hh)");
    }

    #[test]
    fn test_strict_blood_group() {
        let validator = IntakeValidator::new(IntakeRules::strict());

        let mut raw = valid();
        raw.blood_group = "ab-".into();
        assert_eq!(validator.validate(&raw).unwrap().blood_group, "AB-");

        raw.blood_group = "Z+".into();
        assert_eq!(
            validator.validate(&raw),
            Err(IntakeError::InvalidFormat(
                IntakeField::BloodGroup,
                ExpectedFormat::BloodGroup
            ))
        );
    }

    #[test]
    fn test_deserialize_form_keys() {
        let raw: RawIntake = serde_json::from_str(
            r#"{"Pname":"Asha Rao","Bgroup":"O+","loc":"Pune","Pnum":"9876543210","Rdate":"2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(raw, valid());
    }

    #[test]
    fn test_deserialize_contract_names() {
        let raw: RawIntake = serde_json::from_str(
            r#"{"name":"Asha Rao","bloodGroup":"O+","location":"Pune","mobileNumber":"9876543210","registrationDate":"2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(raw, valid());
    }

    #[test]
    fn test_absent_keys_are_missing_fields() {
        let raw: RawIntake = serde_json::from_str(r#"{"Pname":"Asha Rao"}"#).unwrap();
        assert_eq!(
            validate_intake(&raw),
            Err(IntakeError::MissingField(IntakeField::BloodGroup))
        );
    }
}
