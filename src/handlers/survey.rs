use axum::{
    extract::{Form, Json as ExtractJson, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::common::{EmailCheckRequest, EmailCheckResponse};
use crate::models::form::SurveyField;
use crate::services::form_session::{FormError, FormSession};
use crate::services::publisher::SubmissionPublisher;
use crate::validation::{is_email_valid, live_email_error};
use crate::views::{render_form, render_success, SUBMISSION_FAILED_MESSAGE};

// AppState struct containing shared resources
pub struct AppState {
    pub publisher: Arc<dyn SubmissionPublisher>,
}

// Survey page, fresh session on every load
pub async fn show_form() -> Html<String> {
    Html(render_form(&FormSession::new()))
}

/// Replay the posted fields into a new session, in the order the browser sent them.
///
/// Unknown field names and choice values outside a question's options cannot
/// come from the rendered page; they are logged and skipped.
pub fn session_from_fields(fields: &[(String, String)]) -> FormSession {
    let mut session = FormSession::new();

    for (name, value) in fields {
        let field = match name.parse::<SurveyField>() {
            Ok(field) => field,
            Err(e) => {
                warn!("Ignoring submitted value: {}", e);
                continue;
            }
        };

        let result = if field.is_choice() {
            session.select_choice(field, value)
        } else {
            session.update_field(field, value.as_str())
        };

        if let Err(e) = result {
            warn!("Ignoring submitted value for {}: {}", field, e);
        }
    }

    session
}

// Form submission handler
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    info!("Received survey submission with {} fields", fields.len());

    let session = session_from_fields(&fields);
    let publisher = Arc::clone(&state.publisher);

    // Publishers may do blocking file I/O
    let outcome = tokio::task::spawn_blocking(move || {
        let mut session = session;
        let result = session.submit(publisher.as_ref());
        (session, result)
    })
    .await;

    match outcome {
        Ok((_, Ok(()))) => (StatusCode::OK, Html(render_success())),
        Ok((session, Err(FormError::InvalidEmail))) => {
            info!("Returning form to respondent to fix email");
            (StatusCode::UNPROCESSABLE_ENTITY, Html(render_form(&session)))
        }
        Ok((_, Err(e))) => {
            error!("Submission failed: {}", e);
            internal_error()
        }
        Err(e) => {
            error!("Submission task failed: {}", e);
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, Html<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(SUBMISSION_FAILED_MESSAGE.to_string()),
    )
}

// Live email check used while the respondent types
pub async fn validate_email(
    ExtractJson(request): ExtractJson<EmailCheckRequest>,
) -> Json<EmailCheckResponse> {
    Json(EmailCheckResponse {
        valid: is_email_valid(&request.email),
        show_error: live_email_error(&request.email),
    })
}
