//! Host platform boundary
//!
//! Everything the bridge needs from the game server: resolving command
//! senders, permission checks, entity lookups in the live world, and sending
//! chat. Each server loader provides its own implementation.

mod sink;

pub use sink::{LogSink, TracingSink};

use crate::audio::PositionalMix;
use crate::spatial::Point3;
use crate::text::{Component, Converter, NativeText};
use std::path::PathBuf;
use uuid::Uuid;

/// Permission level granted to server operators
pub const OPERATOR_PERMISSION_LEVEL: u8 = 2;

/// Server mod loader the bridge is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    Fabric,
    Paper,
}

impl Loader {
    pub fn name(self) -> &'static str {
        match self {
            Loader::Fabric => "fabric",
            Loader::Paper => "paper",
        }
    }

    /// Where this loader keeps the bridge's config file
    pub fn config_path(self) -> PathBuf {
        match self {
            Loader::Fabric => PathBuf::from("config/voicechat-discord.toml"),
            Loader::Paper => PathBuf::from("plugins/voicechat-discord/config.toml"),
        }
    }
}

/// Services provided by the host server
pub trait Platform: LogSink {
    /// Whoever issued a command: a player, the console, a command block
    type Sender;
    type Player;
    /// A loaded world
    type Level;

    fn is_valid_player(&self, sender: &Self::Sender) -> bool;

    fn sender_to_player(&self, sender: &Self::Sender) -> Option<Self::Player>;

    /// Current position of an entity, if it is loaded in `level`
    fn entity_position(&self, level: &Self::Level, uuid: Uuid) -> Option<Point3>;

    /// Facing of an entity in radians, `0.0` when it is not loaded
    fn entity_facing(&self, level: &Self::Level, uuid: Uuid) -> f64;

    fn is_operator(&self, sender: &Self::Sender) -> bool;

    fn has_permission(&self, sender: &Self::Sender, permission: &str) -> bool;

    fn send_native(&self, sender: &Self::Sender, text: NativeText);

    fn send_native_to_player(&self, player: &Self::Player, text: NativeText);

    fn name(&self, player: &Self::Player) -> String;

    fn loader(&self) -> Loader;

    fn config_path(&self) -> PathBuf {
        self.loader().config_path()
    }

    /// Convert and deliver a rich message to a command sender
    fn send_message(&self, sender: &Self::Sender, message: &Component)
    where
        Self: Sized,
    {
        let text = Converter::new(self).convert(message);
        self.send_native(sender, text);
    }

    /// Convert and deliver a rich message to a player
    fn send_player_message(&self, player: &Self::Player, message: &Component)
    where
        Self: Sized,
    {
        let text = Converter::new(self).convert(message);
        self.send_native_to_player(player, text);
    }

    /// Whether the sender may run a command guarded by `permission`.
    /// Operators always may.
    fn can_use(&self, sender: &Self::Sender, permission: &str) -> bool {
        self.is_operator(sender) || self.has_permission(sender, permission)
    }
}

/// Mix of `source` as heard by `listener`, or `None` if either entity is not
/// loaded in `level`
pub fn positional_mix<P: Platform>(
    platform: &P,
    level: &P::Level,
    listener: Uuid,
    source: Uuid,
    max_distance: f64,
) -> Option<PositionalMix> {
    let listener_position = platform.entity_position(level, listener)?;
    let source_position = platform.entity_position(level, source)?;
    let facing = platform.entity_facing(level, listener);
    Some(PositionalMix::between(
        listener_position,
        facing,
        source_position,
        max_distance,
    ))
}
