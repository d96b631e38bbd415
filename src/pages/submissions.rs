//! Submission page: form, paginated history, and per-submission status polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route of the app. It owns all list/pagination state and
//! coordinates the submit -> prepend -> poll flow for new submissions.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::submission_card::SubmissionCard;
use crate::components::submission_form::SubmissionForm;
use crate::net::types::Submission;
use crate::state::submissions::SubmissionsState;

/// Cadence of the per-submission status poll.
#[cfg(any(test, feature = "hydrate"))]
const POLL_INTERVAL_MS: u64 = 1_000;
/// Wall-clock budget after which a submission's poll gives up.
#[cfg(any(test, feature = "hydrate"))]
const POLL_TIMEOUT_MS: u64 = 15_000;
/// Poll attempts that fit in the wall-clock budget.
#[cfg(any(test, feature = "hydrate"))]
const MAX_POLL_ATTEMPTS: u64 = POLL_TIMEOUT_MS / POLL_INTERVAL_MS;

/// Shown in the history section when a load/refresh fails.
#[cfg(any(test, feature = "hydrate"))]
const LOAD_ERROR_MESSAGE: &str = "Failed to load submissions";

/// Submission page: form on top, paginated history below.
#[component]
pub fn SubmissionsPage() -> impl IntoView {
    let submissions = expect_context::<RwSignal<SubmissionsState>>();

    // Initial history load, once per mount. Effects only run in the browser.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        load_submissions(submissions);
    });

    // Poll loops check this flag each tick so page teardown stops them.
    #[cfg(feature = "hydrate")]
    let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = poll_alive.clone();
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_created = Callback::new(move |submission: Submission| {
        let submission_id = submission.id.clone();
        submissions.update(|s| s.prepend(submission));
        #[cfg(feature = "hydrate")]
        poll_submission(submissions, submission_id, poll_alive.clone());
        #[cfg(not(feature = "hydrate"))]
        let _ = submission_id;
    });

    let on_page_change = Callback::new(move |page: usize| {
        let mut moved = false;
        submissions.update(|s| moved = s.set_page(page));
        if moved {
            scroll_to_top();
        }
    });

    let history = move || {
        let state = submissions.get();
        if state.loading && state.items.is_empty() {
            view! { <p class="loading-state">"Loading submissions..."</p> }.into_any()
        } else if state.items.is_empty() {
            view! { <p class="empty-state">"No submissions yet. Submit content to get started!"</p> }
                .into_any()
        } else {
            let cards = state
                .visible()
                .iter()
                .cloned()
                .map(|submission| view! { <SubmissionCard submission=submission/> })
                .collect::<Vec<_>>();
            let pagination =
                (state.total_pages() > 1).then(|| view! { <Pagination on_change=on_page_change/> });
            view! {
                <div class="submissions-list">{cards}</div>
                {pagination}
            }
            .into_any()
        }
    };

    view! {
        <div class="container">
            <header class="header">
                <h1>"Content Processor"</h1>
                <p>"Submit content and track its processing status in real-time"</p>
            </header>

            <main class="main">
                <section class="form-section">
                    <SubmissionForm on_created=on_created/>
                </section>

                <section class="results-section">
                    <div class="results-header">
                        <h2>"Submissions History"</h2>
                        <button
                            class="refresh-btn"
                            on:click=move |_| load_submissions(submissions)
                            disabled=move || submissions.get().loading
                        >
                            {move || if submissions.get().loading { "Loading..." } else { "Refresh" }}
                        </button>
                    </div>

                    <Show
                        when=move || submissions.get().error.is_none()
                        fallback=move || {
                            view! {
                                <div class="error-message">
                                    {move || submissions.get().error.unwrap_or_default()}
                                </div>
                            }
                        }
                    >
                        {history}
                    </Show>
                </section>
            </main>
        </div>
    }
}

/// Kick off a history load/refresh.
///
/// Flips `loading`, clears the error flag, and on success replaces the list
/// and jumps back to page 1. On failure the previous list is kept and the
/// page-level error message is set.
fn load_submissions(submissions: RwSignal<SubmissionsState>) {
    #[cfg(feature = "hydrate")]
    {
        submissions.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::list_submissions().await {
                Ok(items) => {
                    submissions.update(|s| {
                        s.loading = false;
                        s.replace_all(items);
                    });
                }
                Err(e) => {
                    log::error!("failed to load submissions: {e}");
                    submissions.update(|s| {
                        s.loading = false;
                        s.error = Some(LOAD_ERROR_MESSAGE.to_owned());
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submissions;
    }
}

/// Poll one submission's status until it reaches a terminal state, a fetch
/// fails, the wall-clock budget runs out, or the page is torn down.
///
/// Updates are keyed by submission ID, so polls for different submissions
/// cannot clobber each other's list entries.
#[cfg(feature = "hydrate")]
fn poll_submission(
    submissions: RwSignal<SubmissionsState>,
    submission_id: String,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        for _ in 0..MAX_POLL_ATTEMPTS {
            gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            let updated = match crate::net::api::get_submission_status(&submission_id).await {
                Ok(updated) => updated,
                Err(e) => {
                    // Poll errors are silent in the UI; the card just stops updating.
                    log::error!("status poll for {submission_id} failed: {e}");
                    break;
                }
            };
            let terminal = updated.status.is_terminal();
            submissions.update(|s| s.apply_update(updated));
            if terminal {
                break;
            }
        }
    });
}

/// Smooth-scroll the window back to the top after a page change.
fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
