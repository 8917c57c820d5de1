//! Add-patient form handlers.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use bloodstream_core::{RawIntake, SubmitError};
use tracing::{error, warn};

use crate::pages;
use crate::state::AppState;

/// Render the empty add-patient form.
pub async fn form() -> Html<String> {
    Html(pages::intake_form(&RawIntake::default(), &[]))
}

/// Handle a form post.
///
/// Invalid submissions re-render the form with every field error and the
/// submitted values so the user can correct them. A body that cannot be
/// decoded at all gets a blank form with a notice.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Form<RawIntake>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let raw = match payload {
        Ok(Form(raw)) => raw,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable patient form");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::intake_form_with_notice(
                    &RawIntake::default(),
                    &[],
                    Some(pages::UNREADABLE_FORM_NOTICE),
                )),
            );
        }
    };

    let worker = state.clone();
    let submitted = raw.clone();
    let outcome = tokio::task::spawn_blocking(move || worker.intake.submit(&submitted)).await;

    match outcome {
        Ok(Ok(registration)) => (
            StatusCode::CREATED,
            Html(pages::registered(&registration)),
        ),
        Ok(Err(SubmitError::Invalid(_))) => {
            let errors = state.intake.validator().check_all(&raw);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::intake_form(&raw, &errors)),
            )
        }
        // Storage errors are logged by the intake service
        Ok(Err(SubmitError::Storage(_))) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::storage_failure()),
        ),
        Err(e) => {
            error!(error = %e, "Patient store task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::storage_failure()),
            )
        }
    }
}
