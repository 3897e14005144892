//! Drag Configuration
//!
//! Tunables for gesture discrimination and drag feedback. Every field has a
//! default so partial JSON overrides deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Configuration for drag gesture detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Touch hold time before a drag starts (default: 200)
    pub long_press_ms: u32,
    /// Movement on either axis that turns a pending touch press into a scroll (default: 5.0)
    pub touch_slop_px: f64,
    /// Vibration length when a touch drag starts; 0 disables it (default: 10)
    pub haptic_pulse_ms: u32,
    /// Opacity of the floating ghost (default: 0.85)
    pub ghost_opacity: f64,
    /// Whether pressing Escape cancels an active drag (default: true)
    pub cancel_on_escape: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 200,
            touch_slop_px: 5.0,
            haptic_pulse_ms: 10,
            ghost_opacity: 0.85,
            cancel_on_escape: true,
        }
    }
}

impl DragConfig {
    #[must_use]
    pub fn with_long_press(mut self, ms: u32) -> Self {
        self.long_press_ms = ms;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, px: f64) -> Self {
        self.touch_slop_px = px;
        self
    }

    #[must_use]
    pub fn without_haptics(mut self) -> Self {
        self.haptic_pulse_ms = 0;
        self
    }

    #[must_use]
    pub fn no_escape_cancel(mut self) -> Self {
        self.cancel_on_escape = false;
        self
    }

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
