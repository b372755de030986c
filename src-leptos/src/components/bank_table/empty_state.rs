use super::model::{EMPTY_TEXT, EMPTY_TITLE};
use crate::components::icons::LayersIcon;
use leptos::prelude::*;

/// Placeholder shown instead of the table when there are no banks.
#[component]
pub(crate) fn EmptyState() -> impl IntoView {
    view! {
        <div class="bank-table-empty">
            <div class="empty-icon">
                <LayersIcon size=32 />
            </div>
            <h3 class="empty-title">{EMPTY_TITLE}</h3>
            <p class="empty-text">{EMPTY_TEXT}</p>
        </div>
    }
}
