use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the optional global the host page can set to override defaults.
pub const CONFIG_GLOBAL: &str = "KANBAN_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Pointer travel, in CSS pixels, before a press turns into a drag.
    pub activation_distance: f64,
    pub column_title_prefix: String,
    pub task_content_prefix: String,
    pub log_drag_events: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activation_distance: 3.0,
            column_title_prefix: "列".to_string(),
            task_content_prefix: "Task".to_string(),
            log_drag_events: true,
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: BoardConfig = serde_json::from_str(raw)
            .map_err(|e| format!("Failed to parse board config JSON: {}", e))?;
        config.validated()
    }

    /// Accepts either a JSON string or a plain JS object.
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if let Some(raw) = value.as_string() {
            return Self::from_json(&raw);
        }
        let config: BoardConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| format!("Failed to decode board config object: {}", e))?;
        config.validated()
    }

    /// Reads `window.KANBAN_CONFIG`, falling back to defaults when it is
    /// missing or malformed.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match Self::from_js(value) {
            Ok(config) => {
                web_sys::console::log_1(&format!("[Config] loaded {:?}", config).into());
                config
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Config] {}; using defaults", e).into());
                Self::default()
            }
        }
    }

    fn validated(self) -> Result<Self, String> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(format!(
                "activationDistance must be a non-negative number, got {}",
                self.activation_distance
            ));
        }
        Ok(self)
    }
}
