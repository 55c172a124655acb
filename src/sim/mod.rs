//! Wheel simulation module
//!
//! Pure, single-threaded spin logic:
//! - Seeded RNG only
//! - One `tick` per animation frame
//! - No rendering or platform dependencies

pub mod choices;
pub mod geometry;
pub mod outcome;
pub mod state;
pub mod tick;

pub use choices::{ChoiceSet, DEFAULT_CHOICES, display_label, set_choices};
pub use geometry::{active_slice_at, bounds_of, mid_angle_of, slice_angle};
pub use outcome::{Outcome, resolve};
pub use state::{RotationState, SpinEngine, SpinEvent, SpinPhase, SpinSession};
pub use tick::TickOutcome;
