//! Rich-text components and their conversion to host-native chat text

pub mod component;
pub mod convert;
pub mod legacy;
pub mod native;

pub use component::{
    ClickAction, ClickEvent, Component, Content, Decoration, Decorations, HoverEvent,
    OpaqueContent, TextColor, TriState,
};
pub use convert::{parse_hex_color, to_native, Converter, DEFAULT_MAX_DEPTH};
pub use legacy::{LegacySerializer, AMPERSAND_CHAR, SECTION_CHAR};
pub use native::{NativeClickAction, NativeClickEvent, NativeStyle, NativeText};
