//! Test doubles for the platform boundary

use crate::platform::{LogSink, Loader, Platform, OPERATOR_PERMISSION_LEVEL};
use crate::spatial::Point3;
use crate::text::NativeText;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Sink that keeps every line it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(LogLevel::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(LogLevel::Error)
    }

    fn at(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: LogLevel, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }

    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }
}

/// Command sender for [`FakePlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSender {
    pub name: String,
    pub is_player: bool,
    pub permission_level: u8,
    pub permissions: HashSet<String>,
}

impl FakeSender {
    pub fn player(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_player: true,
            permission_level: 0,
            permissions: HashSet::new(),
        }
    }

    pub fn operator(name: &str) -> Self {
        Self {
            permission_level: OPERATOR_PERMISSION_LEVEL,
            ..Self::player(name)
        }
    }

    pub fn console() -> Self {
        Self {
            is_player: false,
            permission_level: 4,
            ..Self::player("console")
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }
}

/// In-memory platform with a single world
#[derive(Debug)]
pub struct FakePlatform {
    pub sink: RecordingSink,
    entities: HashMap<Uuid, (Point3, f64)>,
    sent: Mutex<Vec<(String, NativeText)>>,
    loader: Loader,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            sink: RecordingSink::new(),
            entities: HashMap::new(),
            sent: Mutex::new(Vec::new()),
            loader: Loader::Fabric,
        }
    }

    /// Put an entity into the world
    pub fn place(&mut self, uuid: Uuid, position: Point3, facing: f64) {
        self.entities.insert(uuid, (position, facing));
    }

    /// Messages delivered so far, keyed by recipient name
    pub fn sent(&self) -> Vec<(String, NativeText)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn deliver(&self, recipient: &str, text: NativeText) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((recipient.to_string(), text));
        }
    }
}

impl LogSink for FakePlatform {
    fn info(&self, message: &str) {
        self.sink.info(message);
    }

    fn warn(&self, message: &str) {
        self.sink.warn(message);
    }

    fn error(&self, message: &str) {
        self.sink.error(message);
    }

    fn debug(&self, message: &str) {
        self.sink.debug(message);
    }
}

impl Platform for FakePlatform {
    type Sender = FakeSender;
    type Player = String;
    type Level = ();

    fn is_valid_player(&self, sender: &FakeSender) -> bool {
        sender.is_player
    }

    fn sender_to_player(&self, sender: &FakeSender) -> Option<String> {
        sender.is_player.then(|| sender.name.clone())
    }

    fn entity_position(&self, _level: &(), uuid: Uuid) -> Option<Point3> {
        self.entities.get(&uuid).map(|(position, _)| *position)
    }

    fn entity_facing(&self, _level: &(), uuid: Uuid) -> f64 {
        self.entities.get(&uuid).map_or(0.0, |(_, facing)| *facing)
    }

    fn is_operator(&self, sender: &FakeSender) -> bool {
        sender.permission_level >= OPERATOR_PERMISSION_LEVEL
    }

    fn has_permission(&self, sender: &FakeSender, permission: &str) -> bool {
        sender.permissions.contains(permission)
    }

    fn send_native(&self, sender: &FakeSender, text: NativeText) {
        self.deliver(&sender.name, text);
    }

    fn send_native_to_player(&self, player: &String, text: NativeText) {
        self.deliver(player, text);
    }

    fn name(&self, player: &String) -> String {
        player.clone()
    }

    fn loader(&self) -> Loader {
        self.loader
    }
}
