//! Synthesis of the four feedback cues as mono `f32` sample buffers.
//!
//! Each cue is one oscillator with a frequency curve and a gain envelope.
//! Exponential ramps hold their start value before the ramp and their end
//! value after it.

use std::f32::consts::TAU;

use quiz_core::SoundCue;

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
}

impl Waveform {
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Saw => 2.0 * (phase / TAU) - 1.0,
        }
    }
}

fn length_secs(cue: SoundCue) -> f32 {
    match cue {
        SoundCue::Correct => 0.2,
        SoundCue::Wrong | SoundCue::Timeout => 0.3,
        SoundCue::Click => 0.05,
    }
}

/// Renders `cue` at [`SAMPLE_RATE`].
#[must_use]
pub fn synthesize(cue: SoundCue) -> Vec<f32> {
    let secs = length_secs(cue);
    match cue {
        SoundCue::Correct => render(
            Waveform::Sine,
            secs,
            |t| exp_ramp(t, 0.0, 0.1, 800.0, 1200.0),
            |t| exp_ramp(t, 0.0, 0.2, 0.3, 0.01),
        ),
        SoundCue::Wrong => render(
            Waveform::Saw,
            secs,
            |_| 200.0,
            |t| exp_ramp(t, 0.0, 0.3, 0.2, 0.01),
        ),
        SoundCue::Timeout => render(Waveform::Sine, secs, |_| 400.0, timeout_gain),
        SoundCue::Click => render(
            Waveform::Sine,
            secs,
            |_| 1000.0,
            |t| exp_ramp(t, 0.0, 0.05, 0.1, 0.01),
        ),
    }
}

/// Full level, a 50 ms gap, then a decay.
fn timeout_gain(t: f32) -> f32 {
    if t < 0.1 {
        0.3
    } else if t < 0.15 {
        0.0
    } else {
        exp_ramp(t, 0.15, 0.3, 0.3, 0.01)
    }
}

fn exp_ramp(t: f32, start: f32, end: f32, from: f32, to: f32) -> f32 {
    if t <= start {
        from
    } else if t >= end {
        to
    } else {
        from * (to / from).powf((t - start) / (end - start))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn render(
    waveform: Waveform,
    secs: f32,
    freq: impl Fn(f32) -> f32,
    gain: impl Fn(f32) -> f32,
) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    let len = (secs * rate).round() as usize;
    let mut phase = 0.0_f32;
    (0..len)
        .map(|i| {
            let t = i as f32 / rate;
            let sample = waveform.sample(phase) * gain(t);
            phase = (phase + TAU * freq(t) / rate) % TAU;
            sample
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()))
    }

    #[test]
    fn buffer_lengths_follow_cue_durations() {
        assert_eq!(synthesize(SoundCue::Correct).len(), 8_820);
        assert_eq!(synthesize(SoundCue::Wrong).len(), 13_230);
        assert_eq!(synthesize(SoundCue::Timeout).len(), 13_230);
        assert_eq!(synthesize(SoundCue::Click).len(), 2_205);
    }

    #[test]
    fn peaks_stay_within_start_gain() {
        assert!(peak(&synthesize(SoundCue::Correct)) <= 0.3 + f32::EPSILON);
        assert!(peak(&synthesize(SoundCue::Wrong)) <= 0.2 + f32::EPSILON);
        assert!(peak(&synthesize(SoundCue::Timeout)) <= 0.3 + f32::EPSILON);
        assert!(peak(&synthesize(SoundCue::Click)) <= 0.1 + f32::EPSILON);
        assert!(peak(&synthesize(SoundCue::Click)) > 0.01);
    }

    #[test]
    fn timeout_has_silent_gap() {
        let samples = synthesize(SoundCue::Timeout);
        let gap = &samples[4_500..6_600];
        assert!(gap.iter().all(|s| *s == 0.0));
        assert!(peak(&samples[..4_410]) > 0.2);
        assert!(peak(&samples[6_700..]) > 0.0);
    }

    #[test]
    fn ramps_hold_outside_their_window() {
        assert!((exp_ramp(0.0, 0.0, 0.1, 800.0, 1200.0) - 800.0).abs() < 1e-3);
        assert!((exp_ramp(0.5, 0.0, 0.1, 800.0, 1200.0) - 1200.0).abs() < 1e-3);
        let mid = exp_ramp(0.05, 0.0, 0.1, 800.0, 1200.0);
        assert!(mid > 800.0 && mid < 1200.0);
    }
}
