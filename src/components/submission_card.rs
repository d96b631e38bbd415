//! Card component rendering one submission record.

#[cfg(test)]
#[path = "submission_card_test.rs"]
mod submission_card_test;

use leptos::prelude::*;

use crate::net::types::{Submission, SubmissionStatus};
use crate::util::format::format_timestamp;

/// A history card showing a submission's status badge, truncated ID, content,
/// and timestamps.
#[component]
pub fn SubmissionCard(submission: Submission) -> impl IntoView {
    let Submission {
        id,
        content,
        status,
        created_at,
        processed_at,
    } = submission;

    let card_class = format!("submission-card {}", status_class(status));
    let submitted = format_timestamp(&created_at);
    let processed = processed_at.as_deref().map(format_timestamp);

    view! {
        <div class=card_class>
            <div class="card-header">
                <div class="status-badge">
                    <span class="status-text">{status.as_str()}</span>
                </div>
                <code class="submission-id">{short_id(&id)}</code>
            </div>

            <div class="card-content">
                <div class="content-block">
                    <strong>"Content:"</strong>
                    <p>{content}</p>
                </div>

                <div class="timestamps">
                    <div class="timestamp">
                        <span class="label">"Submitted:"</span>
                        <span class="value">{submitted}</span>
                    </div>
                    {processed
                        .map(|ts| {
                            view! {
                                <div class="timestamp">
                                    <span class="label">"Processed:"</span>
                                    <span class="value">{ts}</span>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

/// CSS modifier class for a status. Pending and processing share one style
/// since both mean "verdict not in yet".
fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Pending | SubmissionStatus::Processing => "status-pending",
        SubmissionStatus::Passed => "status-passed",
        SubmissionStatus::Failed => "status-failed",
    }
}

/// Abbreviate an opaque submission ID to its first 8 characters for display.
fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{prefix}...")
}
