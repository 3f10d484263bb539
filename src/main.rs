//! Hooks Gallery Entry Point

mod app;
mod components;
mod config;
mod error;
mod fetch_status;
mod hooks;
mod http;
mod list;
mod models;
mod reducer;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_document();
    let level = loaded.as_ref().map(|c| c.log_level()).unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("[APP] {}, using defaults", e);
        AppConfig::default()
    });
    log::info!("[APP] starting, pokemon endpoint {}", config.pokemon_endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
