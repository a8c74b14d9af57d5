use chrono::Utc;
use csv::WriterBuilder;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};

use crate::models::form::{SurveyDraft, SurveyField};

/// Receives the final draft of every successful submission.
///
/// Called exactly once per submission. The caller does not look at any
/// outcome, so implementations deal with their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionPublisher: Send + Sync {
    fn publish(&self, draft: &SurveyDraft);
}

/// Writes each submission to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

impl SubmissionPublisher for LogPublisher {
    fn publish(&self, draft: &SurveyDraft) {
        info!(
            email = %draft.email,
            watch_duration = %draft.watch_duration,
            platform = %draft.platform,
            community_need = %draft.community_need,
            profession = %draft.profession,
            marital_status = %draft.marital_status,
            gender = %draft.gender,
            location = %draft.location,
            phone = %draft.phone,
            telegram = %draft.telegram,
            "Form submitted"
        );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    #[error("Failed to open submissions file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write submissions file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush submissions file: {0}")]
    Flush(#[from] std::io::Error),
}

/// Appends submissions to a CSV file, one row each.
pub struct CsvPublisher {
    csv_path: PathBuf,
    file_mutex: Mutex<()>,
}

impl CsvPublisher {
    /// Opens the CSV file at `csv_path`. A missing or zero-length file gets a header row first.
    pub fn new(csv_path: impl AsRef<Path>) -> Result<Self, PublisherError> {
        let csv_path = csv_path.as_ref().to_path_buf();

        let needs_header = match fs::metadata(&csv_path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };

        if needs_header {
            info!("Writing header to submissions file at {}", csv_path.display());

            let file = File::create(&csv_path).map_err(|source| PublisherError::Open {
                path: csv_path.clone(),
                source,
            })?;

            let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
            writer.write_record(Self::header())?;
            writer.flush()?;
        }

        Ok(Self {
            csv_path,
            file_mutex: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.csv_path
    }

    fn header() -> Vec<&'static str> {
        let mut header = vec!["submitted_at"];
        header.extend(SurveyField::ALL.iter().map(|field| field.name()));
        header
    }

    /// Append one submission row.
    pub fn append(&self, draft: &SurveyDraft) -> Result<(), PublisherError> {
        // A poisoned lock only means another append panicked; the file itself is still usable
        let _guard = self
            .file_mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let file = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .map_err(|source| PublisherError::Open {
                path: self.csv_path.clone(),
                source,
            })?;

        let submitted_at = Utc::now().to_rfc3339();
        let mut row = vec![submitted_at.as_str()];
        row.extend(draft.values().map(|(_, value)| value));

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(&row)?;
        writer.flush()?;

        Ok(())
    }
}

impl SubmissionPublisher for CsvPublisher {
    fn publish(&self, draft: &SurveyDraft) {
        match self.append(draft) {
            Ok(()) => info!("Stored submission for {} in {}", draft.email, self.csv_path.display()),
            Err(e) => error!("Failed to store submission for {}: {}", draft.email, e),
        }
    }
}
