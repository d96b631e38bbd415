use super::*;

#[test]
fn pending_and_processing_share_the_pending_style() {
    assert_eq!(status_class(SubmissionStatus::Pending), "status-pending");
    assert_eq!(status_class(SubmissionStatus::Processing), "status-pending");
}

#[test]
fn terminal_statuses_have_their_own_styles() {
    assert_eq!(status_class(SubmissionStatus::Passed), "status-passed");
    assert_eq!(status_class(SubmissionStatus::Failed), "status-failed");
}

#[test]
fn short_id_truncates_to_eight_characters() {
    assert_eq!(short_id("7f9c3ad2-1d44-4a3e"), "7f9c3ad2...");
}

#[test]
fn short_id_keeps_ids_already_shorter_than_the_prefix() {
    assert_eq!(short_id("s-1"), "s-1...");
}
