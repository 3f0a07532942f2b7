//! Host-native text tree
//!
//! Mirrors the server's own chat text: literal content, a flat style, and
//! sibling nodes appended in order.

/// Click actions understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

/// A click event; `action` is `None` when the source action had no native
/// counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeClickEvent {
    pub action: Option<NativeClickAction>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeStyle {
    /// Packed `0xRRGGBB`
    pub color: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
    pub click_event: Option<NativeClickEvent>,
}

impl NativeStyle {
    pub const EMPTY: Self = Self {
        color: None,
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
        obfuscated: false,
        click_event: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeText {
    pub literal: String,
    pub style: NativeStyle,
    pub siblings: Vec<NativeText>,
}

impl NativeText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            literal: text.into(),
            style: NativeStyle::EMPTY,
            siblings: Vec::new(),
        }
    }

    pub fn set_style(&mut self, style: NativeStyle) {
        self.style = style;
    }

    pub fn append(&mut self, sibling: NativeText) {
        self.siblings.push(sibling);
    }

    /// Concatenated literal text of this node and all siblings, unstyled
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push_str(&node.literal);
            stack.extend(node.siblings.iter().rev());
        }
        out
    }
}
