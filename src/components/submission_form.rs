//! Form component collecting content and creating submissions.

#[cfg(test)]
#[path = "submission_form_test.rs"]
mod submission_form_test;

use leptos::prelude::*;

use crate::net::types::Submission;

/// Shown as a blocking alert when submission fails.
#[cfg(any(test, feature = "hydrate"))]
const SUBMIT_ERROR_MESSAGE: &str = "Error submitting content. Please try again.";

/// Content submission form.
///
/// Owns the input value and the in-flight flag; calls the processing API on
/// submit and hands the created record to the page via `on_created`. The
/// content field only clears on success so a failed attempt can be retried.
#[component]
pub fn SubmissionForm(on_created: Callback<Submission>) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let value = content.get();
        if !content_is_submittable(&value) {
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_content(&value).await {
                Ok(submission) => {
                    content.set(String::new());
                    on_created.run(submission);
                }
                Err(e) => {
                    log::error!("failed to submit content: {e}");
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(SUBMIT_ERROR_MESSAGE);
                    }
                }
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, on_created);
            submitting.set(false);
        }
    };

    view! {
        <form class="submission-form" on:submit=on_submit>
            <h2>"Submit Content"</h2>
            <div class="form-group">
                <label for="content">"Content to Process:"</label>
                <input
                    id="content"
                    type="text"
                    placeholder="Enter content to be processed (min 10 characters, must contain a digit)..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit" }}
            </button>
        </form>
    }
}

/// Whether the form value is worth sending. Only blank input is rejected
/// locally; the server owns the real content rules (length, digit).
fn content_is_submittable(raw: &str) -> bool {
    !raw.trim().is_empty()
}
