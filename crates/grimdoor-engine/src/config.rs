use serde::Deserialize;

use crate::systems::attention::DEFAULT_ATTENTION_TITLE;
use crate::systems::terminal::TerminalTiming;

/// Site tuning constants. The host page can override any subset with a JSON
/// blob at init; unspecified fields keep the shipped feel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Artificial loading-screen delay after the page loads.
    pub loader_delay_ms: f32,
    /// Scroll position past which the navbar gets its `scrolled` styling.
    pub scroll_threshold_px: f32,
    /// Scramble animation tick interval.
    pub scramble_tick_ms: f32,
    /// Ticks per resolved character (3 = one third of a character per tick).
    pub scramble_resolve_ticks: u32,
    /// Intersection ratio that counts as "visible".
    pub reveal_threshold: f32,
    /// Root margin for the observer; shrinks the bottom edge so elements
    /// reveal slightly after entering.
    pub reveal_root_margin: String,
    /// Title shown while the tab is hidden.
    pub attention_title: String,
    /// Contact terminal sequence timing.
    pub terminal_upload_at_ms: f32,
    pub terminal_complete_at_ms: f32,
    pub terminal_reset_after_ms: f32,
    /// Parallax divisor (larger = subtler drift).
    pub parallax_strength: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: 2500.0,
            scroll_threshold_px: 20.0,
            scramble_tick_ms: 30.0,
            scramble_resolve_ticks: 3,
            reveal_threshold: 0.2,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            attention_title: DEFAULT_ATTENTION_TITLE.to_owned(),
            terminal_upload_at_ms: 1000.0,
            terminal_complete_at_ms: 2500.0,
            terminal_reset_after_ms: 3000.0,
            parallax_strength: 100.0,
        }
    }
}

impl SiteConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Terminal timing view of the config.
    pub fn terminal_timing(&self) -> TerminalTiming {
        TerminalTiming {
            upload_at_ms: self.terminal_upload_at_ms,
            complete_at_ms: self.terminal_complete_at_ms,
            reset_after_ms: self.terminal_reset_after_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "loader_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.loader_delay_ms, 500.0);
        assert_eq!(config.scramble_tick_ms, 30.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "loader_delay_ms": 100,
            "scroll_threshold_px": 40,
            "scramble_tick_ms": 15,
            "scramble_resolve_ticks": 2,
            "reveal_threshold": 0.5,
            "reveal_root_margin": "0px",
            "attention_title": "COME BACK",
            "terminal_upload_at_ms": 200,
            "terminal_complete_at_ms": 400,
            "terminal_reset_after_ms": 600,
            "parallax_strength": 50
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.scramble_resolve_ticks, 2);
        assert_eq!(config.attention_title, "COME BACK");
        assert_eq!(config.terminal_timing().complete_at_ms, 400.0);
    }

    #[test]
    fn empty_object_is_the_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config.loader_delay_ms, 2500.0);
        assert_eq!(config.scramble_resolve_ticks, 3);
    }
}
