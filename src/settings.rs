// App settings: built-in defaults, optionally overridden by JSON in localStorage.
use serde::{Deserialize, Serialize};

use crate::scratch::ScratchConfig;
use crate::util::{clog, load_item, store_item};

pub const SETTINGS_KEY: &str = "gq_settings";
pub const WELCOME_SEEN_KEY: &str = "gq_welcome_seen";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scratch: ScratchConfig,
    pub confetti_count: u32,
    /// Coverage above which floating emoji start drifting over the card.
    pub floating_emoji_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scratch: ScratchConfig::default(),
            confetti_count: 100,
            floating_emoji_threshold: 0.10,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Stored settings, or defaults when absent or unreadable.
    pub fn load() -> Self {
        Self::parse_or_default(load_item(SETTINGS_KEY).as_deref())
    }

    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(s) => s,
            Err(e) => {
                clog(&format!("ignoring stored settings: {}", e));
                Self::default()
            }
        }
    }
}

pub fn welcome_seen() -> bool {
    load_item(WELCOME_SEEN_KEY).is_some()
}

pub fn mark_welcome_seen() {
    store_item(WELCOME_SEEN_KEY, "1");
}
