mod app;
mod components;
mod config;
mod error;
mod hooks;
mod models;
mod services;
mod state;
mod stores;
mod utils;
mod views;

use app::App;
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Auth Template starting ({})", config.environment);

    yew::Renderer::<App>::new().render();
}
