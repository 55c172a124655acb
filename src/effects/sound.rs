//! Procedural sound descriptions
//!
//! Sounds are described as oscillator tones so any backend can voice them.
//! The browser backend lives in `crate::audio`.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Slice passed the pointer - short falling blip
    Tick,
    /// Wheel stopped - rising four-note chime
    Win,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

/// One oscillator voice with exponential pitch and gain envelopes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    /// Seconds after the effect is triggered
    pub delay: f64,
    pub duration: f64,
    pub freq_start: f32,
    pub freq_end: f32,
    pub gain_start: f32,
    pub gain_end: f32,
}

/// C major arpeggio for the win chime
pub const WIN_NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
/// Gap between chime notes (seconds)
pub const WIN_NOTE_SPACING: f64 = 0.1;

impl SoundEffect {
    /// Voices making up this effect
    pub fn tones(&self) -> Vec<Tone> {
        match self {
            SoundEffect::Tick => vec![Tone {
                waveform: Waveform::Triangle,
                delay: 0.0,
                duration: 0.1,
                freq_start: 800.0,
                freq_end: 100.0,
                gain_start: 0.1,
                gain_end: 0.01,
            }],
            SoundEffect::Win => WIN_NOTES
                .iter()
                .enumerate()
                .map(|(i, &freq)| Tone {
                    waveform: Waveform::Sine,
                    delay: i as f64 * WIN_NOTE_SPACING,
                    duration: 0.5,
                    freq_start: freq,
                    freq_end: freq,
                    gain_start: 0.2,
                    gain_end: 0.01,
                })
                .collect(),
        }
    }
}

/// Something that can voice sound effects.
///
/// Implementations swallow their own failures; a missing or broken audio
/// device must never interrupt a spin.
pub trait SoundDevice {
    /// Wake the device (browsers start audio suspended until a user gesture)
    fn resume(&self);

    /// Play an effect at the given volume (0.0 - 1.0)
    fn play(&self, effect: SoundEffect, volume: f32);
}

/// Device that plays nothing; used natively and when audio is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl SoundDevice for SilentAudio {
    fn resume(&self) {}

    fn play(&self, effect: SoundEffect, volume: f32) {
        log::trace!("(silent) {:?} at volume {:.2}", effect, volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_single_falling_blip() {
        let tones = SoundEffect::Tick.tones();
        assert_eq!(tones.len(), 1);
        let t = tones[0];
        assert_eq!(t.waveform, Waveform::Triangle);
        assert!(t.freq_end < t.freq_start);
        assert!(t.gain_end < t.gain_start);
    }

    #[test]
    fn test_win_is_rising_four_note_chime() {
        let tones = SoundEffect::Win.tones();
        assert_eq!(tones.len(), 4);
        for pair in tones.windows(2) {
            assert!(pair[1].freq_start > pair[0].freq_start);
            assert!((pair[1].delay - pair[0].delay - WIN_NOTE_SPACING).abs() < 1e-9);
        }
        assert_eq!(tones[0].delay, 0.0);
    }
}
