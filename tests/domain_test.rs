use mediscribe::domain::{AudioLocation, AudioLocationError, ConsultationStatus};

#[test]
fn given_full_storage_url_when_parsing_then_takes_last_two_segments() {
    let location = AudioLocation::parse(
        "https://storage.example.com/object/public/consultation-audio/rec-123.webm",
    )
    .unwrap();

    assert_eq!(location.bucket(), "consultation-audio");
    assert_eq!(location.object_path(), "rec-123.webm");
    assert_eq!(location.as_key(), "consultation-audio/rec-123.webm");
}

#[test]
fn given_bare_bucket_and_path_when_parsing_then_succeeds() {
    let location = AudioLocation::parse("consultation-audio/rec-123.webm").unwrap();

    assert_eq!(location.bucket(), "consultation-audio");
    assert_eq!(location.object_path(), "rec-123.webm");
}

#[test]
fn given_single_segment_when_parsing_then_returns_error() {
    let result = AudioLocation::parse("rec-123.webm");

    assert!(matches!(result, Err(AudioLocationError::TooFewSegments(_))));
}

#[test]
fn given_empty_url_when_parsing_then_returns_error() {
    let result = AudioLocation::parse("");

    assert!(matches!(result, Err(AudioLocationError::TooFewSegments(_))));
}

#[test]
fn given_url_with_trailing_slash_when_parsing_then_ignores_empty_segments() {
    let location = AudioLocation::parse("bucket/recording.webm/").unwrap();

    assert_eq!(location.bucket(), "bucket");
    assert_eq!(location.object_path(), "recording.webm");
}

#[test]
fn given_status_string_when_parsing_then_round_trips() {
    for status in [
        ConsultationStatus::Pending,
        ConsultationStatus::Processing,
        ConsultationStatus::Completed,
        ConsultationStatus::Failed,
    ] {
        assert_eq!(status.as_str().parse::<ConsultationStatus>(), Ok(status));
    }
}

#[test]
fn given_unknown_status_string_when_parsing_then_returns_error() {
    assert!("finalised".parse::<ConsultationStatus>().is_err());
}

#[test]
fn given_statuses_when_checking_terminal_then_only_completed_and_failed_are_terminal() {
    assert!(!ConsultationStatus::Pending.is_terminal());
    assert!(!ConsultationStatus::Processing.is_terminal());
    assert!(ConsultationStatus::Completed.is_terminal());
    assert!(ConsultationStatus::Failed.is_terminal());
}
