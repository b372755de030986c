//! Mortgage Admin - Leptos Frontend
//!
//! Client-side rendered bank administration screen.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use mortgage_types as _;
use serde_json as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use mortgage_admin_leptos::app::App;

const VERSION: &str = env!("APP_VERSION");

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Mortgage Admin {} starting...", VERSION);

    mount_to_body(App);
}
