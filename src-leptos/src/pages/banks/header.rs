use super::actions::Notice;
use crate::app::AppState;
use crate::components::Switch;
use crate::formatters::format_catalog_stats;
use leptos::prelude::*;
use mortgage_types::{CatalogStats, Theme};

/// Page header with catalog summary and screen settings.
#[component]
pub(crate) fn Header(state: AppState) -> impl IntoView {
    let banks = state.banks;
    let config = state.config;
    let stats = Memo::new(move |_| banks.with(|banks| CatalogStats::from_banks(banks)));

    view! {
        <header class="page-header">
            <div class="header-left">
                <h1>"Банки"</h1>
                <p class="subtitle">{move || format_catalog_stats(&stats.get())}</p>
            </div>
            <div class="header-actions">
                <Switch
                    checked=Signal::derive(move || config.with(|c| c.confirm_delete))
                    on_change=Callback::new(move |value: bool| {
                        config.update(|c| c.confirm_delete = value)
                    })
                    label="Подтверждать удаление"
                />
                <Switch
                    checked=Signal::derive(move || config.with(|c| c.theme == Theme::Dark))
                    on_change=Callback::new(move |dark: bool| {
                        config.update(|c| c.theme = if dark { Theme::Dark } else { Theme::Light })
                    })
                    label="Тёмная тема"
                />
            </div>
        </header>
    }
}

/// Message banner for success/error notifications.
#[component]
pub(crate) fn MessageBanner(message: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            {move || {
                let Some(notice) = message.get() else {
                    return view! { <div></div> }.into_any();
                };
                let class = if notice.is_error { "alert alert--error" } else { "alert alert--success" };
                view! {
                    <div class=class>
                        <span>{notice.text}</span>
                    </div>
                }.into_any()
            }}
        </Show>
    }
}
