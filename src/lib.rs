#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod error;
mod registry;
mod toggle;

pub use error::ToggleError;
pub use registry::Registry;
pub use toggle::{toggle, CodeView, Display, Label, ToggleConfig, Transition};

fn run(config: &ToggleConfig) -> Result<Transition, ToggleError> {
    let mut view = dom::DomView::current()?;
    toggle(&mut view, config)
}

fn to_js(e: ToggleError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn wire_toggle_button() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = ToggleConfig::default();
    let control_id = config.control_id.clone();
    let wired = dom::add_click_listener(&document, &control_id, move || {
        if let Err(e) = run(&config) {
            log::error!("toggle error: {}", e);
        }
    });
    if !wired {
        anyhow::bail!("missing #{}", control_id);
    }
    log::info!("[toggle] click listener on #{}", control_id);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("code-toggle loaded");
    Ok(())
}

/// Show or hide every `.language-python` block and flip `#toggleCodeButton`.
///
/// Drop-in for `onclick="toggleCodeDisplay()"`. Throws if the button is missing.
#[wasm_bindgen(js_name = toggleCodeDisplay)]
pub fn toggle_code_display() -> Result<(), JsValue> {
    run(&ToggleConfig::default()).map(|_| ()).map_err(to_js)
}

/// Same as `toggleCodeDisplay` with a custom button id and code-block class.
#[wasm_bindgen(js_name = toggleCodeDisplayFor)]
pub fn toggle_code_display_for(control_id: &str, code_class: &str) -> Result<(), JsValue> {
    run(&ToggleConfig::new(control_id, code_class))
        .map(|_| ())
        .map_err(to_js)
}

/// Attach the toggle to `#toggleCodeButton` clicks, for pages without an
/// inline `onclick`.
#[wasm_bindgen(js_name = wireToggleButton)]
pub fn wire_toggle_button_js() -> Result<(), JsValue> {
    wire_toggle_button().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
