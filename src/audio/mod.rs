//! Audio mixing for positional voice channels
//!
//! Frame-level helpers plus the glue that turns listener/source geometry into
//! a volume and a stereo pan.

mod pcm;
mod positional;

pub use pcm::{
    adjust_panning, adjust_volume, combine_audio_parts, silence, RawAudio, CHANNELS,
    MAX_AUDIO_BUFFER, RAW_AUDIO_SIZE, SAMPLE_RATE,
};
pub use positional::PositionalMix;
