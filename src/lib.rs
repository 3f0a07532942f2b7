//! Spatial audio and rich chat support for a voice-chat bridge hosted by a
//! game server.
//!
//! - [`spatial`]: distance and facing-relative angles between positions
//! - [`audio`]: PCM mixing, volume and stereo panning driven by that geometry
//! - [`text`]: conversion of rich-text components into the host's native text
//! - [`platform`]: what the host server has to provide

pub mod audio;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod spatial;
pub mod test_utils;
pub mod text;

pub use config::ShimConfig;
pub use error::{ConfigError, ConvertError};
pub use platform::{LogSink, Platform, TracingSink};
pub use spatial::Point3;
pub use text::{to_native, Component, NativeText};
