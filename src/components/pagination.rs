//! Pagination controls for the submission history list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::submissions::SubmissionsState;

/// Previous/next controls with a "Page X of Y (N total)" indicator.
///
/// Reads the shared submission state reactively; page changes are routed
/// through `on_change` so the page can clamp and scroll.
#[component]
pub fn Pagination(on_change: Callback<usize>) -> impl IntoView {
    let submissions = expect_context::<RwSignal<SubmissionsState>>();

    let current = move || submissions.get().current_page;
    let total_pages = move || submissions.get().total_pages();
    let total_items = move || submissions.get().items.len();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(current().saturating_sub(1))
                disabled=move || current() <= 1
            >
                "← Previous"
            </button>

            <div class="pagination-info">
                "Page " <span class="current-page">{current}</span> " of "
                <span class="total-pages">{total_pages}</span>
                <span class="total-count">{move || total_count_label(total_items())}</span>
            </div>

            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(current() + 1)
                disabled=move || current() >= total_pages()
            >
                "Next →"
            </button>
        </div>
    }
}

/// Trailing " (N total)" fragment of the page indicator.
fn total_count_label(total_items: usize) -> String {
    format!(" ({total_items} total)")
}
