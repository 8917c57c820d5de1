//! HTML for the add-patient form and its outcomes.

use bloodstream_core::{IntakeError, IntakeField, RawIntake, Registration};

const TITLE: &str = "BloodStream Web Portal";

/// Shown above a blank form when the posted body could not be decoded.
pub const UNREADABLE_FORM_NOTICE: &str =
    "The submitted form could not be read. Please fill it in again.";

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{TITLE}</title>
    <meta charset="utf-8">
</head>
<body>
    <h2>BloodStream<br>{heading}</h2>
{body}
</body>
</html>
"#
    )
}

fn input_type(field: IntakeField) -> &'static str {
    match field {
        IntakeField::MobileNumber => "number",
        IntakeField::RegistrationDate => "date",
        _ => "text",
    }
}

fn placeholder(field: IntakeField) -> &'static str {
    match field {
        IntakeField::Name => "Name",
        IntakeField::BloodGroup => "Blood Type",
        IntakeField::Location => "Location",
        IntakeField::MobileNumber => "Contact No.",
        IntakeField::RegistrationDate => "Date",
    }
}

/// The add-patient form, pre-filled with `raw` and annotated with `errors`.
pub fn intake_form(raw: &RawIntake, errors: &[IntakeError]) -> String {
    intake_form_with_notice(raw, errors, None)
}

/// [`intake_form`] with an optional message above the field errors.
pub fn intake_form_with_notice(
    raw: &RawIntake,
    errors: &[IntakeError],
    notice: Option<&str>,
) -> String {
    let mut body = String::new();

    if let Some(notice) = notice {
        body.push_str(&format!(
            "    <p class=\"notice\">{}</p>\n",
            escape_html(notice)
        ));
    }

    if !errors.is_empty() {
        body.push_str("    <ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!(
                "        <li>{}</li>\n",
                escape_html(&error.user_message())
            ));
        }
        body.push_str("    </ul>\n");
    }

    body.push_str("    <form id=\"add-patient\" method=\"post\" action=\"/\">\n");
    for field in IntakeField::ALL {
        let key = field.form_key();
        body.push_str(&format!(
            "        <label for=\"{key}\"><b>{label}</b></label><br>\n        \
             <input type=\"{kind}\" name=\"{key}\" id=\"{key}\" placeholder=\"{placeholder}\" value=\"{value}\" required>\n",
            label = field.label(),
            kind = input_type(field),
            placeholder = placeholder(field),
            value = escape_html(raw.value(field)),
        ));
        if let Some(error) = errors.iter().find(|e| e.field() == field) {
            body.push_str(&format!(
                "        <span class=\"field-error\">{}</span>\n",
                escape_html(&error.user_message())
            ));
        }
        body.push_str("        <br><br>\n");
    }
    body.push_str("        <input type=\"submit\" value=\"Add Patient\">\n    </form>");

    page("Add New Patient", &body)
}

/// Confirmation shown after a successful registration.
pub fn registered(registration: &Registration) -> String {
    let record = &registration.record;
    let body = format!(
        r#"    <p>Patient registered.</p>
    <dl>
        <dt>Record ID</dt><dd>{id}</dd>
        <dt>{name_label}</dt><dd>{name}</dd>
        <dt>{group_label}</dt><dd>{blood_group}</dd>
        <dt>{location_label}</dt><dd>{location}</dd>
        <dt>{mobile_label}</dt><dd>{mobile_number}</dd>
        <dt>{date_label}</dt><dd>{registration_date}</dd>
    </dl>
    <a href="/">Add another patient</a>"#,
        id = escape_html(registration.id.as_str()),
        name_label = IntakeField::Name.label(),
        name = escape_html(&record.name),
        group_label = IntakeField::BloodGroup.label(),
        blood_group = escape_html(&record.blood_group),
        location_label = IntakeField::Location.label(),
        location = escape_html(&record.location),
        mobile_label = IntakeField::MobileNumber.label(),
        mobile_number = escape_html(&record.mobile_number),
        date_label = IntakeField::RegistrationDate.label(),
        registration_date = record.registration_date_string(),
    );

    page("Patient Added", &body)
}

/// Shown when a valid submission could not be stored.
pub fn storage_failure() -> String {
    page(
        "Add New Patient",
        "    <p>The patient could not be saved. Please try again.</p>\n    <a href=\"/\">Back to form</a>",
    )
}
