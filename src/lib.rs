//! Decision Wheel - spin a wheel of choices and let fate decide
//!
//! Core modules:
//! - `sim`: Choice parsing, wheel geometry, spin engine and outcome resolution
//! - `renderer`: Draw-command generation and drawing surfaces
//! - `effects`: Feedback bus, particles and sound descriptions
//! - `app`: Frame driver tying the pieces together
//! - `settings`: Runtime configuration

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod effects;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{FrameReport, WheelApp};
pub use settings::Settings;

use std::f64::consts::TAU;

/// Wheel configuration constants
pub mod consts {
    /// Initial spin velocity range (radians per tick)
    pub const SPIN_VELOCITY_MIN: f64 = 0.3;
    pub const SPIN_VELOCITY_MAX: f64 = 0.6;

    /// Per-tick friction multiplier range
    pub const SPIN_DECAY_MIN: f64 = 0.990;
    pub const SPIN_DECAY_MAX: f64 = 0.995;

    /// Velocity below which the wheel is considered stopped
    pub const STOP_THRESHOLD: f64 = 0.002;

    /// Gap between wheel rim and viewport edge (CSS pixels)
    pub const WHEEL_MARGIN: f32 = 20.0;
    /// Distance from rim to the right edge of each label
    pub const LABEL_INSET: f32 = 30.0;
    /// Labels longer than this are cut for display
    pub const LABEL_MAX_CHARS: usize = 20;

    /// Hub dimensions
    pub const HUB_OUTER_RADIUS: f32 = 35.0;
    pub const HUB_INNER_RADIUS: f32 = 28.0;

    /// Pointer tip offset from the right edge of the viewport (spark origin)
    pub const POINTER_TIP_INSET: f32 = 25.0;

    /// Confetti burst length in milliseconds
    pub const CONFETTI_DURATION_MS: f64 = 3000.0;
    pub const CONFETTI_COUNT: usize = 100;
    pub const SPARKS_PER_BURST: usize = 3;
}

/// Normalize an angle to [0, 2π)
///
/// Uses the truncating remainder twice so negative inputs land in range.
/// A result of exactly 2π is possible only through rounding; callers that
/// bucket the value must still clamp.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(normalize_angle(TAU), 0.0);
    }
}
