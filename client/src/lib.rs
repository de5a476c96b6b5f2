pub mod dom;
pub mod loader;

use roster_core::RosterConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "browser_log") {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);

    #[cfg(feature = "autostart")]
    let _ = loader::schedule(RosterConfig::default());
}

/// Render the roster with a page-supplied config.
///
/// A page gets one pass: a second call, or a call after the `autostart`
/// build already scheduled one, is rejected. Accepts a partial object such as `{ containerId: "roster" }`; anything
/// left out keeps its default. `undefined` or `null` means all defaults.
#[wasm_bindgen]
pub fn mount(config_js: JsValue) -> Result<(), String> {
    let config: RosterConfig = if config_js.is_undefined() || config_js.is_null() {
        RosterConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| format!("Failed to parse roster config: {:?}", e))?
    };
    log::debug!("mount: {:?}", config);
    if !loader::schedule(config) {
        return Err("roster already mounted".to_string());
    }
    Ok(())
}
