//! Spin state and engine
//!
//! `SpinEngine` is the single owner of the wheel's rotation. It is mutated
//! only by `start` and `tick`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    /// Wheel at rest, ready to spin
    #[default]
    Idle,
    /// Wheel in motion
    Spinning,
    /// Motion just ended; the winner is resolved and the engine returns to Idle
    Stopped,
}

/// Angular position and motion of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    /// Accumulated rotation in radians (never reset between spins)
    pub angle: f64,
    /// Radians advanced per tick
    pub velocity: f64,
    /// Per-tick velocity multiplier in (0, 1)
    pub decay: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            decay: SPIN_DECAY_MIN,
        }
    }
}

/// Bookkeeping that lives only while the wheel spins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpinSession {
    /// Slice last seen under the pointer (`None` until the first tick)
    pub last_active_slice: Option<usize>,
    /// Ticks elapsed in this spin
    pub ticks: u64,
}

/// Events produced while advancing the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// A different slice moved under the pointer
    SliceCrossed { index: usize },
    /// The wheel came to rest on `winner`
    Stopped { winner: usize },
}

/// Owns rotation state and the spin random source
#[derive(Debug, Clone)]
pub struct SpinEngine {
    pub(crate) rotation: RotationState,
    pub(crate) phase: SpinPhase,
    pub(crate) session: Option<SpinSession>,
    rng: Pcg32,
}

impl SpinEngine {
    /// Create an idle engine with a seeded random source
    pub fn new(seed: u64) -> Self {
        Self::with_rotation(seed, RotationState::default())
    }

    /// Create an idle engine resting at a given rotation
    pub fn with_rotation(seed: u64, rotation: RotationState) -> Self {
        Self {
            rotation,
            phase: SpinPhase::Idle,
            session: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn angle(&self) -> f64 {
        self.rotation.angle
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Begin a spin with fresh random velocity and friction.
    ///
    /// Returns false and changes nothing if a spin is already running.
    pub fn start(&mut self) -> bool {
        if self.is_spinning() {
            log::debug!("Spin requested while spinning - ignored");
            return false;
        }

        self.rotation.velocity = self.rng.random_range(SPIN_VELOCITY_MIN..=SPIN_VELOCITY_MAX);
        self.rotation.decay = self.rng.random_range(SPIN_DECAY_MIN..=SPIN_DECAY_MAX);
        self.session = Some(SpinSession::default());
        self.phase = SpinPhase::Spinning;

        log::info!(
            "Spin started: velocity={:.4} decay={:.5}",
            self.rotation.velocity,
            self.rotation.decay
        );
        true
    }
}
