//! Community Survey Form Service
//!
//! This library implements a single survey form: a ten-field answer draft,
//! email validation, and a two-state submission flow (`Editing` →
//! `Submitted`). The same logic is exposed over HTTP as a server-rendered
//! page, built on axum.
//!
//! # Modules
//!
//! - `models`: the survey schema (`SurveyField`, `SurveyDraft`) and wire types
//! - `validation`: the live and submission-time email checks
//! - `services`: `FormSession` state machine and `SubmissionPublisher` sinks
//! - `views`: HTML for the form and the confirmation page
//! - `handlers` / `routes`: the axum surface
//!
//! # Submissions
//!
//! Accepted drafts are handed to a `SubmissionPublisher` exactly once. The
//! default publisher logs the answers; `CsvPublisher` appends them to a file.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;
pub mod views;

// Re-export the main API types for ease of use
pub use config::AppConfig;
pub use handlers::survey::AppState;
pub use models::form::{SurveyDraft, SurveyField};
pub use routes::create_router;
pub use services::form_session::{FormError, FormSession};
pub use services::publisher::{CsvPublisher, LogPublisher, SubmissionPublisher};
