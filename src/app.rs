//! Frame driver
//!
//! `WheelApp` owns every piece of wheel state and is advanced once per
//! animation frame by the platform loop. It never schedules frames itself.

use crate::effects::{EffectLayer, EffectsBus, Feedback, SoundDevice};
use crate::renderer::{DrawCommand, Viewport, WheelLayout, render_confetti, render_wheel};
use crate::settings::Settings;
use crate::sim::{ChoiceSet, Outcome, SpinEngine, TickOutcome};

/// What happened during one frame
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub outcome: TickOutcome,
    /// Set on the frame the wheel stops
    pub winner: Option<Outcome>,
    /// Wheel frame to draw
    pub commands: Vec<DrawCommand>,
}

impl FrameReport {
    pub fn crossed(&self) -> Option<usize> {
        self.outcome.crossed()
    }
}

/// Decision wheel state and per-frame logic
pub struct WheelApp<S: SoundDevice> {
    choices: ChoiceSet,
    engine: SpinEngine,
    bus: EffectsBus<S>,
    effects: EffectLayer,
    viewport: Viewport,
    layout: WheelLayout,
    settings: Settings,
    last_outcome: Option<Outcome>,
    /// Area covered by the confetti overlay
    confetti_area: Viewport,
}

impl<S: SoundDevice> WheelApp<S> {
    pub fn new(sound: S, settings: Settings, seed: u64) -> Self {
        let viewport = Viewport::default();
        Self {
            choices: ChoiceSet::default(),
            engine: SpinEngine::new(seed),
            // Separate stream so particle draws don't shift spin draws
            bus: EffectsBus::new(sound, seed.wrapping_add(0x9e37_79b9_7f4a_7c15), &settings),
            effects: EffectLayer::default(),
            layout: WheelLayout::from_viewport(&viewport),
            viewport,
            settings,
            last_outcome: None,
            confetti_area: viewport,
        }
    }

    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    pub fn engine(&self) -> &SpinEngine {
        &self.engine
    }

    pub fn effects(&self) -> &EffectLayer {
        &self.effects
    }

    pub fn effects_bus(&self) -> &EffectsBus<S> {
        &self.bus
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    /// Replace the choices from raw text (one per line)
    pub fn update_choices(&mut self, raw: &str) -> &ChoiceSet {
        self.choices = ChoiceSet::parse(raw);
        log::info!("Choices updated: {} slices", self.choices.len());
        &self.choices
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.bus.apply_settings(&settings);
        self.settings = settings;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = WheelLayout::from_viewport(&viewport);
    }

    /// Start a spin. Returns false if one is already running.
    pub fn spin(&mut self) -> bool {
        if !self.engine.start() {
            return false;
        }
        self.bus.begin_spin();
        true
    }

    /// Whether another frame is needed (spinning or sparks still alive)
    pub fn needs_frame(&self) -> bool {
        self.engine.is_spinning() || self.effects.has_sparks()
    }

    /// Advance one animation frame and produce the wheel drawing
    pub fn frame(&mut self) -> FrameReport {
        let outcome = self.engine.tick(self.choices.len());

        if let Some(index) = outcome.crossed() {
            log::debug!("Slice {} under pointer", index);
            self.bus.fire(Feedback::Tick, &mut self.effects);
            self.bus.fire(
                Feedback::Spark {
                    origin: self.layout.pointer_tip,
                },
                &mut self.effects,
            );
        }

        let winner = outcome
            .winner()
            .map(|index| Outcome::from_index(index, &self.choices));
        if let Some(winner) = &winner {
            log::info!("Winner: {:?} (slice {})", winner.label, winner.index);
            self.bus.fire(Feedback::Win, &mut self.effects);
            self.last_outcome = Some(winner.clone());
        }

        self.effects.step_sparks();

        FrameReport {
            outcome,
            winner,
            commands: self.draw(),
        }
    }

    /// Draw the wheel as it is now, without advancing anything
    pub fn draw(&self) -> Vec<DrawCommand> {
        render_wheel(
            &self.choices,
            self.engine.angle(),
            &self.layout,
            &self.effects,
            self.settings.label_max_chars,
        )
    }

    /// Launch the confetti shower for a shown result over `area`
    pub fn celebrate(&mut self, area: Viewport, now_ms: f64) {
        self.confetti_area = area;
        self.bus.fire(
            Feedback::Confetti {
                size: area.size(),
                now_ms,
            },
            &mut self.effects,
        );
    }

    /// Advance confetti one frame. `None` once the shower is over.
    pub fn confetti_frame(&mut self, now_ms: f64) -> Option<Vec<DrawCommand>> {
        if !self.effects.step_confetti(now_ms) {
            return None;
        }
        let burst = self.effects.confetti.as_ref()?;
        Some(render_confetti(burst, self.confetti_area.size()))
    }
}
