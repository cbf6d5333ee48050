#![allow(warnings)]
//! Item Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logging;
mod models;
mod queue;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = AppConfig::load();
    logging::init(config.log_level_filter());
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    log::info!("starting with {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
