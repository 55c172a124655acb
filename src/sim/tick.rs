//! Per-frame spin advance
//!
//! One call per animation frame. Friction is a plain multiplicative decay.

use super::geometry::active_slice_at;
use super::outcome::resolve;
use super::state::{SpinEngine, SpinEvent, SpinPhase};
use crate::consts::STOP_THRESHOLD;

/// Result of advancing the engine by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No spin in progress; nothing moved
    Idle,
    /// Still spinning; `crossed` is set when a new slice reached the pointer
    Continuing { crossed: Option<usize> },
    /// Velocity fell below the stop threshold on this tick
    JustStopped { crossed: Option<usize>, winner: usize },
}

impl TickOutcome {
    /// Events carried by this outcome, crossing first
    pub fn events(&self) -> impl Iterator<Item = SpinEvent> {
        let (crossed, winner) = match *self {
            TickOutcome::Idle => (None, None),
            TickOutcome::Continuing { crossed } => (crossed, None),
            TickOutcome::JustStopped { crossed, winner } => (crossed, Some(winner)),
        };
        crossed
            .map(|index| SpinEvent::SliceCrossed { index })
            .into_iter()
            .chain(winner.map(|winner| SpinEvent::Stopped { winner }))
    }

    pub fn crossed(&self) -> Option<usize> {
        match *self {
            TickOutcome::Idle => None,
            TickOutcome::Continuing { crossed } | TickOutcome::JustStopped { crossed, .. } => crossed,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match *self {
            TickOutcome::JustStopped { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

impl SpinEngine {
    /// Advance the wheel by one frame for a wheel of `slice_count` slices.
    ///
    /// Crossing detection also runs on the final tick so the last slice
    /// reported as crossed is always the winner.
    pub fn tick(&mut self, slice_count: usize) -> TickOutcome {
        if self.phase != SpinPhase::Spinning {
            return TickOutcome::Idle;
        }

        let rotation = &mut self.rotation;
        rotation.angle += rotation.velocity;
        rotation.velocity *= rotation.decay;
        let angle = rotation.angle;
        let stopped = rotation.velocity < STOP_THRESHOLD;

        let session = self.session.get_or_insert_with(Default::default);
        session.ticks += 1;

        let active = active_slice_at(angle, slice_count);
        let crossed = if session.last_active_slice != Some(active) {
            session.last_active_slice = Some(active);
            Some(active)
        } else {
            None
        };

        if !stopped {
            return TickOutcome::Continuing { crossed };
        }

        self.phase = SpinPhase::Stopped;
        let ticks = session.ticks;
        let winner = resolve(angle, slice_count);

        // Stopped is transient: the session ends and the engine is ready again
        self.session = None;
        self.rotation.velocity = 0.0;
        self.phase = SpinPhase::Idle;

        log::info!("Spin finished after {} ticks at angle {:.4}: slice {}", ticks, angle, winner);
        TickOutcome::JustStopped { crossed, winner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RotationState;

    /// Drive a started engine to completion, collecting every outcome
    fn run_to_stop(engine: &mut SpinEngine, count: usize) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = engine.tick(count);
            outcomes.push(outcome);
            if !matches!(outcome, TickOutcome::Continuing { .. }) {
                break;
            }
            assert!(outcomes.len() < 100_000, "spin never stopped");
        }
        outcomes
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut engine = SpinEngine::new(5);
        assert_eq!(engine.tick(4), TickOutcome::Idle);
        assert_eq!(engine.angle(), 0.0);
    }

    #[test]
    fn test_first_tick_always_crosses() {
        let mut engine = SpinEngine::new(5);
        engine.start();
        let outcome = engine.tick(6);
        assert!(outcome.crossed().is_some());
    }

    #[test]
    fn test_velocity_strictly_decreases_until_stop() {
        let mut engine = SpinEngine::new(11);
        engine.start();
        let mut last_velocity = engine.rotation().velocity;
        let mut last_angle = engine.angle();

        loop {
            let outcome = engine.tick(8);
            let rot = engine.rotation();
            assert!(rot.angle > last_angle, "angle must keep advancing");
            last_angle = rot.angle;

            match outcome {
                TickOutcome::Continuing { .. } => {
                    assert!(rot.velocity < last_velocity);
                    assert!(rot.velocity >= STOP_THRESHOLD);
                    last_velocity = rot.velocity;
                }
                TickOutcome::JustStopped { .. } => break,
                TickOutcome::Idle => panic!("went idle without stopping"),
            }
        }
    }

    #[test]
    fn test_exactly_one_stop_then_idle() {
        let mut engine = SpinEngine::new(99);
        engine.start();
        let outcomes = run_to_stop(&mut engine, 5);
        let stops = outcomes.iter().filter(|o| o.winner().is_some()).count();
        assert_eq!(stops, 1);
        assert!(matches!(outcomes.last(), Some(TickOutcome::JustStopped { .. })));

        let angle = engine.angle();
        for _ in 0..10 {
            assert_eq!(engine.tick(5), TickOutcome::Idle);
        }
        assert_eq!(engine.angle(), angle);
        assert_eq!(engine.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_last_crossed_slice_is_winner() {
        for seed in 0..50 {
            let mut engine = SpinEngine::new(seed);
            engine.start();
            let outcomes = run_to_stop(&mut engine, 7);
            let last_crossed = outcomes.iter().filter_map(|o| o.crossed()).last();
            let winner = outcomes.last().and_then(|o| o.winner());
            assert_eq!(last_crossed, winner, "seed {seed}");
            assert_eq!(winner, Some(resolve(engine.angle(), 7)));
        }
    }

    #[test]
    fn test_no_snapping_on_stop() {
        let rotation = RotationState {
            angle: 1.0,
            velocity: 0.0,
            decay: 0.99,
        };
        let mut engine = SpinEngine::with_rotation(1, rotation);
        engine.start();
        engine.rotation.velocity = 0.00201;
        engine.rotation.decay = 0.99;

        let outcome = engine.tick(4);
        assert!(matches!(outcome, TickOutcome::JustStopped { .. }));
        assert!((engine.angle() - 1.00201).abs() < 1e-12);
    }

    #[test]
    fn test_angle_persists_across_spins() {
        let mut engine = SpinEngine::new(21);
        engine.start();
        run_to_stop(&mut engine, 3);
        let first_stop = engine.angle();

        assert!(engine.start());
        engine.tick(3);
        assert!(engine.angle() > first_stop);
    }

    #[test]
    fn test_events_order() {
        let outcome = TickOutcome::JustStopped {
            crossed: Some(2),
            winner: 2,
        };
        let events: Vec<SpinEvent> = outcome.events().collect();
        assert_eq!(
            events,
            vec![SpinEvent::SliceCrossed { index: 2 }, SpinEvent::Stopped { winner: 2 }]
        );
        assert_eq!(TickOutcome::Idle.events().count(), 0);
    }
}
