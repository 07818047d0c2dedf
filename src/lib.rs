/// Job Scout - Chrome Extension for job hunting
/// Built with Rust + WASM + Yew

pub mod actions;
pub mod api;
pub mod background;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod models;
pub mod page;
pub mod present;
pub mod relay;
pub mod view_model;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook and console logging in every extension context
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(config::logger_config());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// The content script and the service worker call `relay::relay_message` and
// `background::handle_install` from listeners they register before this module loads.
