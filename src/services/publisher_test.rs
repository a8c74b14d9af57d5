#[cfg(test)]
mod publisher_tests {
    use csv::ReaderBuilder;
    use std::fs;
    use tempfile::tempdir;

    use crate::models::form::{SurveyDraft, SurveyField};
    use crate::services::publisher::{CsvPublisher, LogPublisher, SubmissionPublisher};

    fn create_test_draft(email: &str) -> SurveyDraft {
        SurveyDraft::default()
            .with_field(SurveyField::Email, email)
            .with_field(SurveyField::Platform, "youtube")
            .with_field(SurveyField::CommunityNeed, "Học hỏi, kết nối bạn bè")
            .with_field(SurveyField::Location, "Paris, Pháp")
    }

    #[test]
    fn test_csv_file_created_with_header() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("submissions.csv");

        let publisher = CsvPublisher::new(&csv_path).unwrap();

        assert!(csv_path.exists());
        assert_eq!(publisher.path(), csv_path.as_path());

        let content = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(
            content.trim_end(),
            "submitted_at,email,watch_duration,platform,community_need,profession,\
             marital_status,gender,location,phone,telegram"
        );
    }

    #[test]
    fn test_publish_appends_one_row_per_submission() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("submissions.csv");
        let publisher = CsvPublisher::new(&csv_path).unwrap();

        publisher.publish(&create_test_draft("first@example.com"));
        publisher.publish(&create_test_draft("second@example.com"));

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&csv_path)
            .unwrap();
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "first@example.com");
        assert_eq!(&rows[1][1], "second@example.com");
        assert_eq!(&rows[0][3], "youtube");
        // Commas inside free text survive quoting
        assert_eq!(&rows[0][4], "Học hỏi, kết nối bạn bè");
        assert_eq!(&rows[0][8], "Paris, Pháp");
        assert!(chrono::DateTime::parse_from_rfc3339(&rows[0][0]).is_ok());
    }

    #[test]
    fn test_existing_file_is_appended_not_truncated() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("submissions.csv");

        CsvPublisher::new(&csv_path)
            .unwrap()
            .publish(&create_test_draft("first@example.com"));
        CsvPublisher::new(&csv_path)
            .unwrap()
            .publish(&create_test_draft("second@example.com"));

        let content = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert_eq!(content.matches("submitted_at").count(), 1);
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("submissions.csv");
        fs::File::create(&csv_path).unwrap();

        let publisher = CsvPublisher::new(&csv_path).unwrap();
        publisher.publish(&create_test_draft("a@b.com"));

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&csv_path)
            .unwrap();
        assert_eq!(&reader.headers().unwrap()[0], "submitted_at");
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "a@b.com");
    }

    #[test]
    fn test_append_reports_missing_file() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("submissions.csv");
        let publisher = CsvPublisher::new(&csv_path).unwrap();

        fs::remove_file(&csv_path).unwrap();

        assert!(publisher.append(&create_test_draft("a@b.com")).is_err());
        // publish swallows the failure
        publisher.publish(&create_test_draft("a@b.com"));
    }

    #[test]
    fn test_new_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("missing").join("submissions.csv");

        assert!(CsvPublisher::new(&csv_path).is_err());
    }

    #[test]
    fn test_log_publisher_accepts_any_draft() {
        LogPublisher.publish(&SurveyDraft::default());
        LogPublisher.publish(&create_test_draft("a@b.com"));
    }
}
