use crate::config::Bootstrap;
use crate::dto::{Alert, AppState};
use crate::store::{self, Action};
use js_sys::Reflect;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

const BOOTSTRAP_KEY: &str = "__PURPLE__";

fn bootstrap_value() -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    Reflect::get(&window, &JsValue::from_str(BOOTSTRAP_KEY))
        .map_err(|_| format!("failed to access {BOOTSTRAP_KEY}"))
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Reads the bootstrap object left by the host page. A page that sets none
/// gets the defaults.
pub fn read_bootstrap() -> Result<Bootstrap, String> {
    let value = bootstrap_value()?;
    if value.is_undefined() || value.is_null() {
        return Ok(Bootstrap::default());
    }
    decode(value).map_err(|e| format!("{BOOTSTRAP_KEY}: {e}"))
}

/// Replaces the whole store snapshot. Called by the host page whenever its
/// view of alerts and symbols changes.
#[wasm_bindgen(js_name = purplePushState)]
pub fn push_state(value: JsValue) -> Result<(), JsValue> {
    let state: AppState = decode(value).map_err(|e| {
        log::warn!("rejected pushed state: {e}");
        JsValue::from_str(&e)
    })?;
    store::global().dispatch(Action::ReplaceState(state));
    Ok(())
}

#[wasm_bindgen(js_name = purplePushAlert)]
pub fn push_alert(value: JsValue) -> Result<(), JsValue> {
    let alert: Alert = decode(value).map_err(|e| {
        log::warn!("rejected pushed alert: {e}");
        JsValue::from_str(&e)
    })?;
    store::global().dispatch(Action::AddAlert(alert));
    Ok(())
}
