//! Source rich-text components
//!
//! A `Component` is a tree of styled spans as produced by the chat formatting
//! layer. Style is declared per node; children do not inherit their parent's
//! style in this model.

use std::fmt;

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextColor(u32);

impl TextColor {
    /// Create a color from a packed `0xRRGGBB` value; higher bits are dropped
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0xFF_FFFF)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#rrggbb` form
    pub fn as_hex_string(self) -> String {
        format!("#{:06x}", self.0)
    }
}

/// Tri-state flag: a decoration can be set, unset, or left to inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    True,
    False,
    #[default]
    NotSet,
}

/// Decorations the native text model can express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Decoration state of a single component.
///
/// Known kinds live in a fixed table. Kinds the native side has no flag for
/// are kept by name so they can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decorations {
    known: [TriState; 5],
    unknown: Vec<(String, TriState)>,
}

impl Decorations {
    pub fn get(&self, decoration: Decoration) -> TriState {
        self.known[decoration.index()]
    }

    pub fn set(&mut self, decoration: Decoration, state: TriState) {
        self.known[decoration.index()] = state;
    }

    pub fn set_unknown(&mut self, kind: impl Into<String>, state: TriState) {
        let kind = kind.into();
        match self.unknown.iter_mut().find(|(name, _)| *name == kind) {
            Some(entry) => entry.1 = state,
            None => self.unknown.push((kind, state)),
        }
    }

    /// Known decorations in table order, paired with their state
    pub fn known(&self) -> impl Iterator<Item = (Decoration, TriState)> + '_ {
        Decoration::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    pub fn unknown(&self) -> &[(String, TriState)] {
        &self.unknown
    }
}

/// What a click on the text does
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
    /// An action the native side does not know about
    Other(String),
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
            ClickAction::Other(name) => name,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    ShowText(Box<Component>),
    ShowItem(String),
    ShowEntity(String),
}

/// Content the native side cannot hold, such as translatable or keybind text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueContent {
    /// Content kind, e.g. `translatable`
    pub kind: String,
    /// Plain text used when the component is flattened
    pub plain: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Literal(String),
    Unrepresentable(OpaqueContent),
}

/// A node of the source text tree
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub content: Content,
    pub color: Option<TextColor>,
    pub decorations: Decorations,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
    pub insertion: Option<String>,
    pub font: Option<String>,
    pub children: Vec<Component>,
}

impl Component {
    /// Create an unstyled literal component
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_content(Content::Literal(content.into()))
    }

    /// Create a component whose content has no native equivalent
    pub fn opaque(kind: impl Into<String>, plain: impl Into<String>) -> Self {
        Self::with_content(Content::Unrepresentable(OpaqueContent {
            kind: kind.into(),
            plain: plain.into(),
        }))
    }

    fn with_content(content: Content) -> Self {
        Self {
            content,
            color: None,
            decorations: Decorations::default(),
            click_event: None,
            hover_event: None,
            insertion: None,
            font: None,
            children: Vec::new(),
        }
    }

    pub fn color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn decoration(mut self, decoration: Decoration, state: TriState) -> Self {
        self.decorations.set(decoration, state);
        self
    }

    pub fn bold(self) -> Self {
        self.decoration(Decoration::Bold, TriState::True)
    }

    pub fn italic(self) -> Self {
        self.decoration(Decoration::Italic, TriState::True)
    }

    pub fn underlined(self) -> Self {
        self.decoration(Decoration::Underlined, TriState::True)
    }

    pub fn strikethrough(self) -> Self {
        self.decoration(Decoration::Strikethrough, TriState::True)
    }

    pub fn obfuscated(self) -> Self {
        self.decoration(Decoration::Obfuscated, TriState::True)
    }

    /// Set a decoration the native model has no flag for
    pub fn unknown_decoration(mut self, kind: impl Into<String>, state: TriState) -> Self {
        self.decorations.set_unknown(kind, state);
        self
    }

    pub fn click_event(mut self, event: ClickEvent) -> Self {
        self.click_event = Some(event);
        self
    }

    pub fn hover_event(mut self, event: HoverEvent) -> Self {
        self.hover_event = Some(event);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = Component>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }
}
