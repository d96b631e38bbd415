use super::*;
use crate::net::types::SubmissionStatus;

fn submission(id: &str) -> Submission {
    Submission {
        id: id.to_owned(),
        content: format!("content for {id}"),
        status: SubmissionStatus::Pending,
        created_at: "2026-08-07T10:00:00".to_owned(),
        processed_at: None,
    }
}

fn state_with(ids: &[&str]) -> SubmissionsState {
    SubmissionsState {
        items: ids.iter().map(|id| submission(id)).collect(),
        ..SubmissionsState::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_on_page_one() {
    let state = SubmissionsState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.current_page, 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Pagination math
// =============================================================

#[test]
fn total_pages_is_ceiling_of_len_over_page_size() {
    assert_eq!(state_with(&[]).total_pages(), 0);
    assert_eq!(state_with(&["a"]).total_pages(), 1);
    assert_eq!(state_with(&["a", "b"]).total_pages(), 1);
    assert_eq!(state_with(&["a", "b", "c"]).total_pages(), 2);
    assert_eq!(state_with(&["a", "b", "c", "d"]).total_pages(), 2);
    assert_eq!(state_with(&["a", "b", "c", "d", "e"]).total_pages(), 3);
}

#[test]
fn visible_returns_page_sized_window() {
    let mut state = state_with(&["a", "b", "c", "d", "e"]);
    let ids: Vec<&str> = state.visible().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);

    assert!(state.set_page(3));
    let ids: Vec<&str> = state.visible().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["e"]);
}

#[test]
fn visible_is_empty_for_empty_list() {
    let state = SubmissionsState::default();
    assert!(state.visible().is_empty());
}

#[test]
fn visible_is_empty_when_cursor_is_past_the_end() {
    // A page cursor left beyond the shrunken list must not slice out of bounds.
    let mut state = state_with(&["a", "b", "c"]);
    assert!(state.set_page(2));
    state.items.truncate(1);
    assert!(state.visible().is_empty());
}

// =============================================================
// List operations
// =============================================================

#[test]
fn replace_all_resets_page_and_clears_error() {
    let mut state = state_with(&["a", "b", "c"]);
    state.error = Some("Failed to load submissions".to_owned());
    assert!(state.set_page(2));

    state.replace_all(vec![submission("x"), submission("y"), submission("z")]);
    assert_eq!(state.current_page, 1);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 3);
}

#[test]
fn prepend_puts_new_submission_first_and_resets_page() {
    let mut state = state_with(&["a", "b", "c"]);
    assert!(state.set_page(2));

    state.prepend(submission("new"));
    assert_eq!(state.current_page, 1);
    assert_eq!(state.items[0].id, "new");
    assert_eq!(state.items.len(), 4);
    // The new submission is visible on the first page.
    assert_eq!(state.visible()[0].id, "new");
}

#[test]
fn apply_update_replaces_only_the_matching_entry() {
    let mut state = state_with(&["a", "b", "c"]);
    let mut update = submission("b");
    update.status = SubmissionStatus::Passed;
    update.processed_at = Some("2026-08-07T10:00:05".to_owned());

    state.apply_update(update);
    assert_eq!(state.items[0].status, SubmissionStatus::Pending);
    assert_eq!(state.items[1].status, SubmissionStatus::Passed);
    assert!(state.items[1].processed_at.is_some());
    assert_eq!(state.items[2].status, SubmissionStatus::Pending);
}

#[test]
fn apply_update_for_unknown_id_is_dropped() {
    let mut state = state_with(&["a"]);
    state.apply_update(submission("ghost"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "a");
}

// =============================================================
// Page navigation
// =============================================================

#[test]
fn set_page_rejects_out_of_range_targets() {
    let mut state = state_with(&["a", "b", "c"]);
    assert!(!state.set_page(0));
    assert!(!state.set_page(3));
    assert_eq!(state.current_page, 1);
}

#[test]
fn set_page_reports_no_move_for_current_page() {
    let mut state = state_with(&["a", "b", "c"]);
    assert!(!state.set_page(1));
    assert!(state.set_page(2));
    assert!(!state.set_page(2));
}
