#[cfg(test)]
mod form_session_tests {
    use mockall::predicate;

    use crate::models::common::SubmissionState;
    use crate::models::form::{SurveyDraft, SurveyField};
    use crate::services::form_session::{FormError, FormSession};
    use crate::services::publisher::MockSubmissionPublisher;

    fn publisher_expecting(times: usize) -> MockSubmissionPublisher {
        let mut publisher = MockSubmissionPublisher::new();
        publisher.expect_publish().times(times).return_const(());
        publisher
    }

    #[test]
    fn test_new_session_is_editing_with_empty_draft() {
        let session = FormSession::new();

        assert_eq!(session.state(), SubmissionState::Editing);
        assert_eq!(session.draft(), &SurveyDraft::default());
        assert!(!session.email_error());
    }

    #[test]
    fn test_update_field_sets_value() {
        let mut session = FormSession::new();

        session
            .update_field(SurveyField::Profession, "Công nghệ thông tin")
            .unwrap();
        session.update_field(SurveyField::Phone, "0912345678").unwrap();

        assert_eq!(session.draft().profession, "Công nghệ thông tin");
        assert_eq!(session.draft().phone, "0912345678");
        assert_eq!(session.draft().email, "");
    }

    #[test]
    fn test_live_email_check_follows_each_keystroke() {
        let mut session = FormSession::new();

        session.update_field(SurveyField::Email, "u").unwrap();
        assert!(session.email_error());

        session.update_field(SurveyField::Email, "user@").unwrap();
        assert!(session.email_error());

        session.update_field(SurveyField::Email, "user@example.com").unwrap();
        assert!(!session.email_error());

        // Clearing the field hides the error
        session.update_field(SurveyField::Email, "").unwrap();
        assert!(!session.email_error());
    }

    #[test]
    fn test_other_fields_do_not_touch_email_error() {
        let mut session = FormSession::new();
        session.update_field(SurveyField::Email, "bad").unwrap();

        session.update_field(SurveyField::Location, "Hà Nội").unwrap();

        assert!(session.email_error());
    }

    #[test]
    fn test_select_choice_is_single_select() {
        let mut session = FormSession::new();

        session.select_choice(SurveyField::Platform, "tiktok").unwrap();
        session.select_choice(SurveyField::Platform, "youtube").unwrap();

        assert_eq!(session.draft().platform, "youtube");
    }

    #[test]
    fn test_select_choice_rejects_unknown_value() {
        let mut session = FormSession::new();
        session.select_choice(SurveyField::Gender, "female").unwrap();

        let result = session.select_choice(SurveyField::Gender, "robot");

        assert_eq!(
            result,
            Err(FormError::UnknownChoice {
                field: SurveyField::Gender,
                value: "robot".to_string()
            })
        );
        assert_eq!(session.draft().gender, "female");
    }

    #[test]
    fn test_select_choice_on_text_field_updates_value() {
        let mut session = FormSession::new();

        session.select_choice(SurveyField::Telegram, "@nhile").unwrap();

        assert_eq!(session.draft().telegram, "@nhile");
    }

    #[test]
    fn test_submit_with_empty_email_is_rejected() {
        let mut session = FormSession::new();
        let publisher = publisher_expecting(0);

        let result = session.submit(&publisher);

        assert_eq!(result, Err(FormError::InvalidEmail));
        assert_eq!(session.state(), SubmissionState::Editing);
        assert!(session.email_error());
    }

    #[test]
    fn test_submit_with_blank_or_at_less_email_is_rejected() {
        for email in ["   ", "not-an-email"] {
            let mut session = FormSession::new();
            session.update_field(SurveyField::Email, email).unwrap();

            assert_eq!(
                session.submit(&publisher_expecting(0)),
                Err(FormError::InvalidEmail)
            );
            assert!(session.email_error());
            assert!(!session.is_submitted());
        }
    }

    #[test]
    fn test_submit_with_valid_email_publishes_once() {
        let mut session = FormSession::new();
        session
            .update_field(SurveyField::Email, "user@example.com")
            .unwrap();

        let expected = SurveyDraft::default().with_field(SurveyField::Email, "user@example.com");
        let mut publisher = MockSubmissionPublisher::new();
        publisher
            .expect_publish()
            .with(predicate::eq(expected))
            .times(1)
            .return_const(());

        session.submit(&publisher).unwrap();

        assert_eq!(session.state(), SubmissionState::Submitted);
        assert!(!session.email_error());
    }

    #[test]
    fn test_submit_uses_looser_check_than_live_validation() {
        let mut session = FormSession::new();
        session.update_field(SurveyField::Email, "user@localhost").unwrap();
        assert!(session.email_error());

        session.submit(&publisher_expecting(1)).unwrap();

        assert!(session.is_submitted());
        assert!(!session.email_error());
    }

    #[test]
    fn test_failed_submit_can_be_retried() {
        let mut session = FormSession::new();
        assert!(session.submit(&publisher_expecting(0)).is_err());

        session
            .update_field(SurveyField::Email, "user@example.com")
            .unwrap();

        assert!(session.submit(&publisher_expecting(1)).is_ok());
        assert!(session.is_submitted());
    }

    #[test]
    fn test_submitted_session_is_frozen() {
        let mut session = FormSession::new();
        session
            .update_field(SurveyField::Email, "user@example.com")
            .unwrap();
        session.submit(&publisher_expecting(1)).unwrap();
        let frozen = session.draft().clone();

        assert_eq!(
            session.update_field(SurveyField::Email, "other@example.com"),
            Err(FormError::AlreadySubmitted)
        );
        assert_eq!(
            session.select_choice(SurveyField::Platform, "youtube"),
            Err(FormError::AlreadySubmitted)
        );
        assert_eq!(
            session.submit(&publisher_expecting(0)),
            Err(FormError::AlreadySubmitted)
        );

        assert_eq!(session.draft(), &frozen);
        assert_eq!(session.state(), SubmissionState::Submitted);
    }
}
