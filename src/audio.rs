//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::effects::sound::{SoundDevice, SoundEffect, Tone, Waveform};

/// Web Audio backed sound device
pub struct AudioManager {
    ctx: Option<AudioContext>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx }
    }

    pub fn is_available(&self) -> bool {
        self.ctx.is_some()
    }

    /// Create an oscillator routed through a gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        waveform: Waveform,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(oscillator_type(waveform));
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Schedule one tone relative to the context clock
    fn play_tone(&self, ctx: &AudioContext, tone: &Tone, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, tone.freq_start, tone.waveform) else {
            return;
        };
        let t = ctx.current_time() + tone.delay;
        let end = t + tone.duration;

        gain.gain().set_value_at_time(tone.gain_start * vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(tone.gain_end * vol, end)
            .ok();

        osc.frequency().set_value_at_time(tone.freq_start, t).ok();
        if tone.freq_end != tone.freq_start {
            osc.frequency()
                .exponential_ramp_to_value_at_time(tone.freq_end, end)
                .ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(end).ok();
    }
}

impl SoundDevice for AudioManager {
    /// Resume audio context (required after user gesture)
    fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    fn play(&self, effect: SoundEffect, volume: f32) {
        if volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        for tone in effect.tones() {
            self.play_tone(ctx, &tone, volume);
        }
    }
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Triangle => OscillatorType::Triangle,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}
