//! Item Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod manager;
mod models;
mod session;
mod store;

use std::sync::Arc;

use api::{HttpItemStore, ItemStoreApi};
use app::App;
use components::StartupError;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("ItemManager", log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    let config = ApiConfig::from_env();
    let origin = config::page_origin();
    let api = match HttpItemStore::from_config(&config, origin.as_deref()) {
        Ok(api) => api,
        Err(e) => {
            log::error!("[APP] {}", e);
            let message = e.user_message();
            mount_to_body(move || view! { <StartupError message=message /> });
            return;
        }
    };
    log::info!("[APP] Item store at {}", api.base_url());

    let api: Arc<dyn ItemStoreApi> = Arc::new(api);
    mount_to_body(move || view! { <App api=api /> });
}
