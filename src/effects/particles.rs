//! Spark and confetti particles
//!
//! Each frame builds the next generation from the current one and replaces
//! it, so particles are never removed from a list while it is iterated.

use glam::Vec2;
use rand::Rng;

use crate::consts::{CONFETTI_COUNT, CONFETTI_DURATION_MS, SPARKS_PER_BURST};
use crate::renderer::color::{CONFETTI_PALETTE, Rgba};

/// Spark color; alpha follows remaining life
pub const SPARK_COLOR: Rgba = Rgba::rgb(255, 200, 50);
/// Life lost per frame by a spark
pub const SPARK_LIFE_DECAY: f32 = 0.05;
/// Confetti rotation per frame (2 degrees)
pub const CONFETTI_SPIN: f32 = 2.0 * std::f32::consts::PI / 180.0;

/// A short-lived visual particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Remaining life, 1.0 at spawn
    pub life: f32,
    /// Life lost per frame (0 = immortal until its owner ends)
    pub life_decay: f32,
    pub size: f32,
    pub color: Rgba,
    /// Rotation in radians
    pub angle: f32,
    /// Radians per frame
    pub spin: f32,
}

impl Particle {
    /// The particle one frame later, or `None` once its life runs out
    pub fn advanced(&self) -> Option<Particle> {
        let life = self.life - self.life_decay;
        if life <= 0.0 {
            return None;
        }
        Some(Particle {
            pos: self.pos + self.vel,
            life,
            angle: self.angle + self.spin,
            ..self.clone()
        })
    }
}

/// Spawn a burst of sparks at `origin`
pub fn spark_burst(rng: &mut impl Rng, origin: Vec2) -> Vec<Particle> {
    (0..SPARKS_PER_BURST)
        .map(|_| Particle {
            pos: origin,
            vel: Vec2::new(rng.random_range(-2.5..2.5), rng.random_range(-2.5..2.5)),
            life: 1.0,
            life_decay: SPARK_LIFE_DECAY,
            size: rng.random_range(0.0..3.0),
            color: SPARK_COLOR,
            angle: 0.0,
            spin: 0.0,
        })
        .collect()
}

/// A timed confetti shower over the whole viewport
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pub pieces: Vec<Particle>,
    pub started_ms: f64,
    pub duration_ms: f64,
    /// Viewport height the pieces fall through
    pub floor: f32,
}

impl ConfettiBurst {
    /// Scatter pieces across the viewport, starting up to one screen above it
    pub fn new(rng: &mut impl Rng, size: Vec2, now_ms: f64) -> Self {
        let pieces = (0..CONFETTI_COUNT)
            .map(|_| {
                let color = CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())];
                Particle {
                    pos: Vec2::new(
                        rng.random_range(0.0..1.0) * size.x,
                        rng.random_range(0.0..1.0) * size.y - size.y,
                    ),
                    vel: Vec2::new(0.0, rng.random_range(2.0..7.0)),
                    life: 1.0,
                    life_decay: 0.0,
                    size: rng.random_range(5.0..15.0),
                    color,
                    angle: rng.random_range(0.0..360.0f32).to_radians(),
                    spin: CONFETTI_SPIN,
                }
            })
            .collect();

        Self {
            pieces,
            started_ms: now_ms,
            duration_ms: CONFETTI_DURATION_MS,
            floor: size.y,
        }
    }

    /// Any piece still above the bottom edge
    pub fn has_visible_pieces(&self) -> bool {
        self.pieces.iter().any(|p| p.pos.y < self.floor)
    }

    /// Advance one frame. Returns false once the duration has passed and
    /// every piece has fallen out of view.
    pub fn step(&mut self, now_ms: f64) -> bool {
        self.pieces = self.pieces.iter().filter_map(Particle::advanced).collect();
        now_ms < self.started_ms + self.duration_ms || self.has_visible_pieces()
    }
}

/// Ephemeral effects drawn on top of the wheel
#[derive(Debug, Clone, Default)]
pub struct EffectLayer {
    pub sparks: Vec<Particle>,
    pub confetti: Option<ConfettiBurst>,
}

impl EffectLayer {
    pub fn add_sparks(&mut self, sparks: impl IntoIterator<Item = Particle>) {
        self.sparks.extend(sparks);
    }

    /// Age sparks by one frame and drop the dead ones
    pub fn step_sparks(&mut self) {
        self.sparks = self.sparks.iter().filter_map(Particle::advanced).collect();
    }

    /// Advance confetti; returns true while a burst is running
    pub fn step_confetti(&mut self, now_ms: f64) -> bool {
        let running = match self.confetti.as_mut() {
            Some(burst) => burst.step(now_ms),
            None => return false,
        };
        if !running {
            log::debug!("Confetti finished");
            self.confetti = None;
        }
        running
    }

    pub fn has_sparks(&self) -> bool {
        !self.sparks.is_empty()
    }

    pub fn has_confetti(&self) -> bool {
        self.confetti.is_some()
    }
}
