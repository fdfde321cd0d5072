pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // Resolves the API base URL in the background; requests await it.
    wasm_bindgen_futures::spawn_local(config::init());
    router::mount_app();
}
