use gloo::console::warn;
use serde::Deserialize;
use web_sys::window;

use crate::error::ConfigError;

/// Element the host page may use to embed a JSON config block:
/// `<script id="signup-config" type="application/json">{ ... }</script>`
const CONFIG_ELEMENT_ID: &str = "signup-config";

pub const DEFAULT_BANNER_HIDE_MS: u32 = 5_000;
pub const DEFAULT_VISIBLE_PARTICIPANTS: usize = 5;

fn default_api_base() -> String {
    // Same origin unless the build overrides it.
    option_env!("ACTIVITIES_API_BASE").unwrap_or("").to_string()
}

fn default_banner_hide_ms() -> u32 {
    DEFAULT_BANNER_HIDE_MS
}

fn default_visible_participants() -> usize {
    DEFAULT_VISIBLE_PARTICIPANTS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_banner_hide_ms")]
    pub banner_hide_ms: u32,
    #[serde(default = "default_visible_participants")]
    pub visible_participants: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            banner_hide_ms: DEFAULT_BANNER_HIDE_MS,
            visible_participants: DEFAULT_VISIBLE_PARTICIPANTS,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded config block, falling back to defaults when it is
    /// absent or unreadable.
    pub fn load() -> Self {
        let Some(json) = embedded_config_json() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Ignoring signup config:", e.to_string());
                Self::default()
            }
        }
    }
}

fn embedded_config_json() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}
