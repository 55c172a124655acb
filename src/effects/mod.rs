//! Feedback effects
//!
//! Fire-and-forget cues triggered by spin state changes: sounds through a
//! `SoundDevice`, particles into the renderer's `EffectLayer`.

pub mod particles;
pub mod sound;

pub use particles::{ConfettiBurst, EffectLayer, Particle, spark_burst};
pub use sound::{SilentAudio, SoundDevice, SoundEffect, Tone, Waveform};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Settings;

/// Feedback kinds the bus can fire
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    /// Slice crossed the pointer
    Tick,
    /// Wheel stopped on a winner
    Win,
    /// Friction sparks at the pointer tip
    Spark { origin: Vec2 },
    /// Celebration shower over a viewport of `size`
    Confetti { size: Vec2, now_ms: f64 },
}

/// Dispatches feedback to the sound device and the effect layer
pub struct EffectsBus<S: SoundDevice> {
    sound: S,
    rng: Pcg32,
    volume: f32,
    sparks_enabled: bool,
    confetti_enabled: bool,
    /// Device resumed since the current spin began
    resumed: bool,
}

impl<S: SoundDevice> EffectsBus<S> {
    pub fn new(sound: S, seed: u64, settings: &Settings) -> Self {
        Self {
            sound,
            rng: Pcg32::seed_from_u64(seed),
            volume: settings.effective_volume(),
            sparks_enabled: settings.sparks,
            confetti_enabled: settings.confetti,
            resumed: false,
        }
    }

    /// Re-read volume and toggles
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
        self.sparks_enabled = settings.sparks;
        self.confetti_enabled = settings.confetti;
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Mark the start of a spin; the device is resumed before the next sound
    pub fn begin_spin(&mut self) {
        self.resumed = false;
        self.ensure_resumed();
    }

    fn ensure_resumed(&mut self) {
        if !self.resumed {
            self.sound.resume();
            self.resumed = true;
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        self.ensure_resumed();
        self.sound.play(effect, self.volume);
    }

    /// Fire one feedback cue
    pub fn fire(&mut self, feedback: Feedback, layer: &mut EffectLayer) {
        match feedback {
            Feedback::Tick => self.play(SoundEffect::Tick),
            Feedback::Win => self.play(SoundEffect::Win),
            Feedback::Spark { origin } => {
                if self.sparks_enabled {
                    layer.add_sparks(spark_burst(&mut self.rng, origin));
                }
            }
            Feedback::Confetti { size, now_ms } => {
                if self.confetti_enabled {
                    log::debug!("Confetti burst over {}x{}", size.x, size.y);
                    layer.confetti = Some(ConfettiBurst::new(&mut self.rng, size, now_ms));
                }
            }
        }
    }
}
