//! Presentation settings shared between the SSR shell and the hydrated client.
//!
//! The shell serializes a `ViewConfig` into a JSON `<script>` element and the
//! client reads it back on hydrate, so both sides render the same markup.
//! Validation rules and the fallback avatar endpoint are fixed constants and
//! are not configurable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// DOM id of the embedded JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "chatroom-views-config";

pub const DEFAULT_SUCCESS_TOAST_MS: u32 = 2000;
pub const DEFAULT_ERROR_TOAST_MS: u32 = 4000;
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;
pub const DEFAULT_USERNAME_INPUT_MAX_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid view config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How recent message times are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `02:30 PM`
    #[default]
    TwelveHour,
    /// `14:30`
    TwentyFourHour,
}

impl ClockStyle {
    pub fn time_format(self) -> &'static str {
        match self {
            Self::TwelveHour => "%I:%M %p",
            Self::TwentyFourHour => "%H:%M",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub clock_style: ClockStyle,
    pub success_toast_ms: u32,
    pub error_toast_ms: u32,
    pub max_visible_toasts: usize,
    /// Browser `maxlength` on the username input. Not a validation rule.
    pub username_input_max_len: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            clock_style: ClockStyle::default(),
            success_toast_ms: DEFAULT_SUCCESS_TOAST_MS,
            error_toast_ms: DEFAULT_ERROR_TOAST_MS,
            max_visible_toasts: DEFAULT_MAX_VISIBLE_TOASTS,
            username_input_max_len: DEFAULT_USERNAME_INPUT_MAX_LEN,
        }
    }
}

impl ViewConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// JSON form embedded by the SSR shell.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Read the config embedded in the current document.
    ///
    /// Falls back to defaults when the element is absent or malformed, and
    /// always outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
