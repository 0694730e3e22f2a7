// Console logging and localStorage helpers shared by the components.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg; // no console outside the browser
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn store_item(key: &str, value: &str) {
    if let Some(store) = storage() {
        if store.set_item(key, value).is_err() {
            clog(&format!("localStorage write failed key={}", key));
        }
    }
}

/// Percent label for a coverage ratio, e.g. `0.4 -> "40%"`.
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio.clamp(0.0, 1.0) * 100.0).round() as u32)
}
