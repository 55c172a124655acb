//! Wheel settings
//!
//! Read once at startup from JSON. Never written back.

use serde::{Deserialize, Serialize};

use crate::consts::LABEL_MAX_CHARS;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sounds
    pub muted: bool,

    // === Visual effects ===
    /// Friction sparks at the pointer
    pub sparks: bool,
    /// Confetti shower on a win
    pub confetti: bool,
    /// Labels longer than this are cut on the wheel
    pub label_max_chars: usize,

    /// Fixed RNG seed (clock-derived when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            sparks: true,
            confetti: true,
            label_max_chars: LABEL_MAX_CHARS,

            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable holding settings JSON for the native runner
    pub const ENV_VAR: &'static str = "DECISION_WHEEL_SETTINGS";
    /// Element id of the JSON settings block in the page
    pub const ELEMENT_ID: &'static str = "wheel-settings";

    /// Parse settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::sanitized)
    }

    /// Parse settings, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.label_max_chars = self.label_max_chars.max(1);
        self
    }

    /// Volume actually applied to sounds
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
