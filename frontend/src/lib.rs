//! Browser entry point for the catalog shell.

use app::{App, ShellConfig};
use wasm_bindgen::prelude::wasm_bindgen;

/// Installs the panic hook and console logger, then mounts the shell.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = ShellConfig::embedded()
        .log_level()
        .unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);
    log::info!("mounting catalog shell v{}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(App);
}
