pub mod app;
pub mod domain;
pub mod shared;

use crate::app::App;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();

    if let Some(err) = config_error {
        log::warn!("Falling back to default configuration: {:#}", err);
    }
    log::info!("API base: {}", config.api.base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
