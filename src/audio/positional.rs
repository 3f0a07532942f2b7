//! Per-listener attenuation and panning for a positional channel

use super::pcm::{adjust_panning, adjust_volume, RawAudio};
use crate::spatial::{clamp, distance, relative_angle, Point3};

/// Volume and stereo panning of one source as heard by one listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionalMix {
    /// Linear volume in `[0, 1]`
    pub volume: f64,
    /// Relative angle in `(-π, π]`, negative to the left
    pub panning: f64,
}

impl PositionalMix {
    /// Compute the mix for a source at `source` heard by a listener at
    /// `listener` facing `facing` radians.
    ///
    /// Volume falls off linearly and reaches zero at `max_distance`.
    pub fn between(listener: Point3, facing: f64, source: Point3, max_distance: f64) -> Self {
        let volume = if max_distance > 0.0 {
            1.0 - clamp(distance(listener, source) / max_distance, 0.0, 1.0)
        } else {
            0.0
        };
        Self {
            volume,
            panning: relative_angle(facing, listener, source),
        }
    }

    /// Whether the source is too far away to be heard at all
    pub fn is_silent(&self) -> bool {
        self.volume <= 0.0
    }

    /// Apply volume then panning to a frame in place
    pub fn apply(&self, audio: &mut RawAudio) {
        adjust_volume(audio, self.volume);
        adjust_panning(audio, self.panning);
    }
}
