//! Runtime configuration for the page scripts.
//!
//! Pages may embed a JSON document in
//! `<script type="application/json" id="dormdesk-config">`. Every field is
//! optional; anything missing keeps its default. A page without the element,
//! or with malformed JSON, runs on defaults.

use serde::Deserialize;

use crate::components::statistics::DormStatistics;
use crate::consts::{AVAILABILITY_PERIOD_MS, MOBILE_BREAKPOINT_PX, NOTIFICATION_DISMISS_MS, SEARCH_DEBOUNCE_MS};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub search_debounce_ms: u32,
    pub notification_dismiss_ms: u32,
    pub availability_period_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub log_level: String,
    pub statistics: DormStatistics,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            notification_dismiss_ms: NOTIFICATION_DISMISS_MS,
            availability_period_ms: AVAILABILITY_PERIOD_MS,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            log_level: "info".to_owned(),
            statistics: DormStatistics::default(),
        }
    }
}

impl UiConfig {
    /// Parse a config document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse a config document, falling back to defaults when it is invalid.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring invalid page config: {err}");
                Self::default()
            }
        }
    }

    /// Log level named by the config; unknown names mean `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the config embedded in the current page.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let Ok(document) = crate::dom::document() else {
            return Self::default();
        };
        let Some(script) = document.get_element_by_id(crate::consts::CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        match script.text_content() {
            Some(raw) if !raw.trim().is_empty() => Self::from_json_or_default(&raw),
            _ => Self::default(),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn load() -> Self {
        Self::default()
    }
}
