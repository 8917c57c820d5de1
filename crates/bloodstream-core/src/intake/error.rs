//! Intake field names and validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five fields of the add-patient form, in form order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    Name,
    BloodGroup,
    Location,
    MobileNumber,
    RegistrationDate,
}

impl IntakeField {
    /// All fields in the order they are validated.
    pub const ALL: [IntakeField; 5] = [
        IntakeField::Name,
        IntakeField::BloodGroup,
        IntakeField::Location,
        IntakeField::MobileNumber,
        IntakeField::RegistrationDate,
    ];

    /// Contract name of the field (e.g. "mobileNumber").
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeField::Name => "name",
            IntakeField::BloodGroup => "bloodGroup",
            IntakeField::Location => "location",
            IntakeField::MobileNumber => "mobileNumber",
            IntakeField::RegistrationDate => "registrationDate",
        }
    }

    /// Key the HTML form posts this field under.
    pub fn form_key(&self) -> &'static str {
        match self {
            IntakeField::Name => "Pname",
            IntakeField::BloodGroup => "Bgroup",
            IntakeField::Location => "loc",
            IntakeField::MobileNumber => "Pnum",
            IntakeField::RegistrationDate => "Rdate",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            IntakeField::Name => "Patient Name",
            IntakeField::BloodGroup => "Blood Group",
            IntakeField::Location => "Location",
            IntakeField::MobileNumber => "Mobile Number",
            IntakeField::RegistrationDate => "Registration Date",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a field failed to match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedFormat {
    /// ASCII digits only
    Digits,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// One of the eight ABO/Rh groups
    BloodGroup,
}

impl fmt::Display for ExpectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedFormat::Digits => f.write_str("digits only"),
            ExpectedFormat::Date => f.write_str("a calendar date (YYYY-MM-DD)"),
            ExpectedFormat::BloodGroup => {
                f.write_str("one of A+, A-, B+, B-, AB+, AB-, O+, O-")
            }
        }
    }
}

/// Intake validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Missing field: {0}")]
    MissingField(IntakeField),

    #[error("Invalid format for {0}: expected {1}")]
    InvalidFormat(IntakeField, ExpectedFormat),
}

impl IntakeError {
    /// The field this error is about.
    pub fn field(&self) -> IntakeField {
        match self {
            IntakeError::MissingField(field) => *field,
            IntakeError::InvalidFormat(field, _) => *field,
        }
    }

    /// Expected format, for `InvalidFormat` errors.
    pub fn expected(&self) -> Option<ExpectedFormat> {
        match self {
            IntakeError::MissingField(_) => None,
            IntakeError::InvalidFormat(_, expected) => Some(*expected),
        }
    }

    /// Short message for display beside the offending input.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::MissingField(field) => format!("{} is required", field.label()),
            IntakeError::InvalidFormat(field, expected) => {
                format!("{} must be {}", field.label(), expected)
            }
        }
    }
}

pub type IntakeResult<T> = Result<T, IntakeError>;
