use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TermreelError, TermreelResult};

/// The classic up-up-down-down sequence, by physical key code.
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Class names, thresholds, timings and messages used by the page features.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub active_class: String,
    pub copied_class: String,
    pub visible_class: String,

    /// Visible ratio at which a card is revealed.
    pub reveal_threshold: f64,
    /// Pixels trimmed from the bottom of the viewport when observing cards.
    pub reveal_bottom_margin_px: f64,

    pub hero_threshold: f64,
    /// Initial downward offset of the hero screenshot.
    pub hero_offset_px: f64,
    pub hero_transition: String,

    /// Gap left between the navbar and a scrolled-to anchor target.
    pub scroll_margin_px: f64,
    /// Scroll offset past which the navbar gets its shadow.
    pub shadow_threshold_px: f64,
    pub shadow: String,

    pub copy_feedback_ms: u64,

    pub konami_code: Vec<String>,
    pub easter_egg_message: String,
    pub overlay_enter_ms: u64,
    pub overlay_visible_ms: u64,
    pub overlay_exit_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_owned(),
            copied_class: "copied".to_owned(),
            visible_class: "visible".to_owned(),
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
            hero_threshold: 0.3,
            hero_offset_px: 20.0,
            hero_transition: "opacity 0.6s ease, transform 0.6s ease".to_owned(),
            scroll_margin_px: 20.0,
            shadow_threshold_px: 100.0,
            shadow: "0 1px 3px rgba(0, 0, 0, 0.3)".to_owned(),
            copy_feedback_ms: 2000,
            konami_code: KONAMI_CODE.iter().map(|&k| k.to_owned()).collect(),
            easter_egg_message: "You found the secret! Happy spreadsheeting!".to_owned(),
            overlay_enter_ms: 300,
            overlay_visible_ms: 3000,
            overlay_exit_ms: 300,
        }
    }
}

impl PageConfig {
    /// Parse a configuration from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> TermreelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TermreelError::serde(format!("parse page config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> TermreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TermreelError::validation(format!("open page config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> TermreelResult<()> {
        for (name, v) in [
            ("reveal_threshold", self.reveal_threshold),
            ("hero_threshold", self.hero_threshold),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(TermreelError::validation(format!(
                    "{name} must be in [0, 1], got {v}"
                )));
            }
        }
        for (name, v) in [
            ("reveal_bottom_margin_px", self.reveal_bottom_margin_px),
            ("hero_offset_px", self.hero_offset_px),
            ("scroll_margin_px", self.scroll_margin_px),
            ("shadow_threshold_px", self.shadow_threshold_px),
        ] {
            if !v.is_finite() {
                return Err(TermreelError::validation(format!("{name} must be finite")));
            }
        }
        if self.active_class.is_empty()
            || self.copied_class.is_empty()
            || self.visible_class.is_empty()
        {
            return Err(TermreelError::validation("class names must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
