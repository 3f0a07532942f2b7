//! Raw PCM frame helpers
//!
//! Frames are 20 ms of interleaved 16-bit stereo PCM at 48 kHz.

use std::f64::consts::FRAC_PI_2;
use tracing::{trace, warn};

/// Sample rate of every frame, in Hz
pub const SAMPLE_RATE: u32 = 48_000;
/// Interleaved channel count (left, right)
pub const CHANNELS: u32 = 2;
/// 1 second worth of frames
pub const MAX_AUDIO_BUFFER: usize = 50;
/// Samples in one frame
pub const RAW_AUDIO_SIZE: usize = 960;

/// 20 ms of 16-bit PCM
pub type RawAudio = [i16; RAW_AUDIO_SIZE];

/// Muffling applied to a source directly behind the listener
const MAX_BEHIND_MUFFLING_PERCENT: f64 = 0.25;

/// A silent frame
pub fn silence() -> RawAudio {
    [0; RAW_AUDIO_SIZE]
}

/// Mix several frames into one by summing samples, saturating at the `i16` range
pub fn combine_audio_parts(parts: Vec<RawAudio>) -> RawAudio {
    if parts.is_empty() {
        return silence();
    }
    trace!(parts = parts.len(), "combining audio parts");

    let mut mixed = silence();
    for (i, out) in mixed.iter_mut().enumerate() {
        let sample: i32 = parts.iter().map(|part| i32::from(part[i])).sum();
        *out = saturate(sample as f64);
    }
    mixed
}

/// Scale every sample by `volume`, which should be between 0 and 1
pub fn adjust_volume(audio: &mut RawAudio, volume: f64) {
    if !volume.is_finite() {
        warn!(volume, "Ignoring non-finite volume");
        return;
    }
    for sample in audio.iter_mut() {
        *sample = saturate((f64::from(*sample) * volume).round());
    }
}

/// Pan the frame into stereo according to a relative angle in radians.
///
/// Sources behind the listener (|panning| > π/2) are muffled, reaching
/// `MAX_BEHIND_MUFFLING_PERCENT` directly behind.
pub fn adjust_panning(audio: &mut RawAudio, panning: f64) {
    let normalized_panning = panning.sin();
    let behind_muffle = if panning.abs() > FRAC_PI_2 {
        let percent_behind = (panning.abs() - FRAC_PI_2) / FRAC_PI_2;
        MAX_BEHIND_MUFFLING_PERCENT + (1.0 - MAX_BEHIND_MUFFLING_PERCENT) * (1.0 - percent_behind)
    } else {
        1.0
    };

    let left_multiplier = (1.0 - normalized_panning) * behind_muffle;
    let right_multiplier = (1.0 + normalized_panning) * behind_muffle;

    for pair in audio.chunks_exact_mut(CHANNELS as usize) {
        pair[0] = saturate(f64::from(pair[0]) * left_multiplier);
        pair[1] = saturate(f64::from(pair[1]) * right_multiplier);
    }
}

fn saturate(sample: f64) -> i16 {
    sample.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn frame(value: i16) -> RawAudio {
        [value; RAW_AUDIO_SIZE]
    }

    #[test]
    fn test_combine_empty_is_silence() {
        assert_eq!(combine_audio_parts(Vec::new()), silence());
    }

    #[test]
    fn test_combine_sums() {
        let mixed = combine_audio_parts(vec![frame(100), frame(-30), frame(5)]);
        assert!(mixed.iter().all(|&s| s == 75));
    }

    #[test]
    fn test_combine_saturates() {
        let loud = combine_audio_parts(vec![frame(i16::MAX), frame(1000)]);
        assert!(loud.iter().all(|&s| s == i16::MAX));

        let quiet = combine_audio_parts(vec![frame(i16::MIN), frame(-1000)]);
        assert!(quiet.iter().all(|&s| s == i16::MIN));
    }

    #[test]
    fn test_adjust_volume() {
        let mut audio = frame(1000);
        adjust_volume(&mut audio, 0.5);
        assert!(audio.iter().all(|&s| s == 500));

        let mut audio = frame(3);
        adjust_volume(&mut audio, 0.5);
        assert!(audio.iter().all(|&s| s == 2));
    }

    #[test]
    fn test_adjust_volume_saturates() {
        let mut audio = frame(20_000);
        adjust_volume(&mut audio, 2.0);
        assert!(audio.iter().all(|&s| s == i16::MAX));
    }

    #[test]
    fn test_adjust_volume_ignores_nan() {
        let mut audio = frame(1234);
        adjust_volume(&mut audio, f64::NAN);
        assert_eq!(audio, frame(1234));
    }

    #[test]
    fn test_centered_panning_is_identity() {
        let mut audio = frame(1000);
        adjust_panning(&mut audio, 0.0);
        assert_eq!(audio, frame(1000));
    }

    #[test]
    fn test_right_panning_favors_right_channel() {
        let mut audio = frame(1000);
        adjust_panning(&mut audio, PI / 2.0);
        assert_eq!(audio[0], 0);
        assert_eq!(audio[1], 2000);
    }

    #[test]
    fn test_left_panning_favors_left_channel() {
        let mut audio = frame(1000);
        adjust_panning(&mut audio, -PI / 2.0);
        assert_eq!(audio[0], 2000);
        assert_eq!(audio[1], 0);
    }

    #[test]
    fn test_behind_is_muffled() {
        let mut audio = frame(1000);
        adjust_panning(&mut audio, PI);
        // sin(π) is ~0, so both channels get only the muffle factor
        assert!((249..=250).contains(&audio[0]));
        assert!((249..=250).contains(&audio[1]));
    }
}
