//! Legacy formatting-code serializer
//!
//! Flattens a component tree into a single string with inline `§x` (or `&x`)
//! codes. Colors are downsampled to the 16 named chat colors. This is the
//! lossy representation used whenever a component cannot be converted.

use super::component::{Component, Content, Decoration, TextColor, TriState};

pub const SECTION_CHAR: char = '§';
pub const AMPERSAND_CHAR: char = '&';

const RESET: char = 'r';

/// Named chat colors and their legacy codes, in code order
const NAMED_COLORS: [(char, u32); 16] = [
    ('0', 0x000000),
    ('1', 0x0000AA),
    ('2', 0x00AA00),
    ('3', 0x00AAAA),
    ('4', 0xAA0000),
    ('5', 0xAA00AA),
    ('6', 0xFFAA00),
    ('7', 0xAAAAAA),
    ('8', 0x555555),
    ('9', 0x5555FF),
    ('a', 0x55FF55),
    ('b', 0x55FFFF),
    ('c', 0xFF5555),
    ('d', 0xFF55FF),
    ('e', 0xFFFF55),
    ('f', 0xFFFFFF),
];

fn decoration_code(decoration: Decoration) -> char {
    match decoration {
        Decoration::Obfuscated => 'k',
        Decoration::Bold => 'l',
        Decoration::Strikethrough => 'm',
        Decoration::Underlined => 'n',
        Decoration::Italic => 'o',
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacySerializer {
    character: char,
}

impl Default for LegacySerializer {
    fn default() -> Self {
        Self::section()
    }
}

impl LegacySerializer {
    pub fn new(character: char) -> Self {
        Self { character }
    }

    /// Serializer using the `§` section sign
    pub fn section() -> Self {
        Self::new(SECTION_CHAR)
    }

    /// Serializer using `&`, as typed by players
    pub fn ampersand() -> Self {
        Self::new(AMPERSAND_CHAR)
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// Flatten `component` and all its descendants. Never fails; depth is
    /// bounded only by memory.
    pub fn serialize(&self, component: &Component) -> String {
        let mut out = String::new();
        let mut formatted = false;
        let mut stack = vec![component];

        while let Some(node) = stack.pop() {
            let text = match &node.content {
                Content::Literal(text) => text.as_str(),
                Content::Unrepresentable(opaque) => opaque.plain.as_str(),
            };

            if !text.is_empty() {
                formatted = self.write_style(&mut out, node, formatted);
                out.push_str(text);
            }

            stack.extend(node.children.iter().rev());
        }

        out
    }

    /// Emit the codes for `node`'s own style. Returns whether any formatting
    /// is active afterwards.
    fn write_style(&self, out: &mut String, node: &Component, formatted: bool) -> bool {
        let decorations: Vec<char> = node
            .decorations
            .known()
            .filter(|(_, state)| *state == TriState::True)
            .map(|(decoration, _)| decoration_code(decoration))
            .collect();

        match node.color {
            // A color code also clears decorations
            Some(color) => self.push_code(out, nearest_named(color)),
            None if formatted => self.push_code(out, RESET),
            None => {}
        }
        for code in &decorations {
            self.push_code(out, *code);
        }

        node.color.is_some() || !decorations.is_empty()
    }

    fn push_code(&self, out: &mut String, code: char) {
        out.push(self.character);
        out.push(code);
    }
}

/// Legacy code of the named color closest to `color`.
///
/// Distance is measured in HSV with hue weighted most heavily, so saturated
/// colors keep their hue instead of collapsing to grey.
pub fn nearest_named(color: TextColor) -> char {
    if let Some(&(code, _)) = NAMED_COLORS.iter().find(|(_, rgb)| *rgb == color.value()) {
        return code;
    }

    let target = Hsv::from(color);
    let mut best = NAMED_COLORS[0].0;
    let mut best_distance = f32::MAX;
    for &(code, rgb) in &NAMED_COLORS {
        let distance = target.distance(&Hsv::from(TextColor::from_rgb(rgb)));
        if distance < best_distance {
            best = code;
            best_distance = distance;
        }
    }
    best
}

#[derive(Debug, Clone, Copy)]
struct Hsv {
    h: f32,
    s: f32,
    v: f32,
}

impl Hsv {
    fn distance(&self, other: &Hsv) -> f32 {
        let hue_gap = (self.h - other.h).abs();
        let hue = 3.0 * hue_gap.min(1.0 - hue_gap);
        let saturation = self.s - other.s;
        let value = self.v - other.v;
        hue * hue + saturation * saturation + value * value
    }
}

impl From<TextColor> for Hsv {
    fn from(color: TextColor) -> Self {
        let r = f32::from(color.red()) / 255.0;
        let g = f32::from(color.green()) / 255.0;
        let b = f32::from(color.blue()) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Hsv { h, s, v: max }
    }
}
