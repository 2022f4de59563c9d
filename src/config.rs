//! Page configuration: the DOM contract plus animation timings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup is an external collaborator. Every id, selector, and delay the
//! bindings depend on lives here so a page can override any of them through
//! an inline `<script type="application/json" id="portfolio-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::state::theme::Theme;

/// Id of the optional inline JSON block holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub default_theme: Theme,

    pub theme_icon_id: String,
    pub theme_toggle_id: String,

    pub modal_id: String,
    pub modal_open_id: String,
    pub modal_close_id: String,

    pub section_selector: String,
    pub progress_selector: String,
    pub stagger_selector: String,
    pub anchor_selector: String,
    pub nav_link_selector: String,
    pub menu_button_selector: String,
    pub menu_selector: String,

    pub reveal_threshold: f64,
    pub progress_delay_ms: u32,
    pub scrollbar_delay_ms: u32,
    pub scrollbar_settle_ms: u32,
    pub stagger_step_s: f64,
    pub scroll_spy_offset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            default_theme: Theme::Dark,
            theme_icon_id: "theme-icon".to_owned(),
            theme_toggle_id: "theme-toggle".to_owned(),
            modal_id: "sample-code-modal".to_owned(),
            modal_open_id: "sample-code-btn".to_owned(),
            modal_close_id: "close-modal".to_owned(),
            section_selector: "section".to_owned(),
            progress_selector: ".skill-progress".to_owned(),
            stagger_selector: ".stagger > *".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            nav_link_selector: "nav a".to_owned(),
            menu_button_selector: "button.md\\:hidden".to_owned(),
            menu_selector: "div.hidden.md\\:flex".to_owned(),
            reveal_threshold: 0.1,
            progress_delay_ms: 200,
            scrollbar_delay_ms: 200,
            scrollbar_settle_ms: 100,
            stagger_step_s: 0.2,
            scroll_spy_offset: 60.0,
        }
    }
}

impl PageConfig {
    /// Parse overrides; fields missing from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse overrides when present, falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page config overrides: {err}");
                Self::default()
            }
        }
    }

    /// Selector matching every `pre` block inside the modal.
    #[must_use]
    pub fn modal_code_selector(&self) -> String {
        format!("#{} pre", self.modal_id)
    }
}
