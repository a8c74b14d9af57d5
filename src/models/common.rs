use serde::{Deserialize, Serialize};

/// Where a form session is in its lifecycle. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

// Request body for the live email check
#[derive(Debug, Deserialize)]
pub struct EmailCheckRequest {
    #[serde(default)]
    pub email: String,
}

// Response body for the live email check
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmailCheckResponse {
    pub valid: bool,
    pub show_error: bool,
}
