//! Main App component

use crate::pages::Banks;
use crate::storage;
use leptos::prelude::*;
use mortgage_types::models::validate_catalog;
use mortgage_types::{AdminConfig, Bank};

/// Bank list bundled with the frontend until a data source is wired in.
const SEED_BANKS: &str = include_str!("../data/banks.json");

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub banks: RwSignal<Vec<Bank>>,
    pub config: RwSignal<AdminConfig>,
}

impl AppState {
    pub fn new(banks: Vec<Bank>, config: AdminConfig) -> Self {
        Self { banks: RwSignal::new(banks), config: RwSignal::new(config) }
    }
}

/// Parse a bank list, logging problems. Invalid JSON yields an empty list;
/// records that fail validation are kept and only reported.
pub fn load_banks(json: &str) -> Vec<Bank> {
    let banks: Vec<Bank> = match serde_json::from_str(json) {
        Ok(banks) => banks,
        Err(e) => {
            log::error!("Failed to parse bank list: {}", e);
            return Vec::new();
        }
    };
    for error in validate_catalog(&banks) {
        log::warn!("Bank list: {}", error);
    }
    log::info!("Loaded {} banks", banks.len());
    banks
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(load_banks(SEED_BANKS), storage::load_config());
    provide_context(state.clone());

    let config = state.config;
    Effect::new(move |_| {
        let config = config.get();
        if let Err(e) = storage::save_config(&config) {
            log::error!("Failed to save admin config: {}", e);
        }
    });

    view! {
        <div class=move || format!("app-container theme-{}", config.with(|c| c.theme))>
            <main class="main-content">
                <Banks />
            </main>
        </div>
    }
}
