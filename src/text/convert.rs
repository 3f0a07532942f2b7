//! Component to native text conversion
//!
//! Walks a [`Component`] tree pre-order and builds the equivalent
//! [`NativeText`] tree. Features the native side lacks are reported through
//! the [`LogSink`] and dropped. Content with no native equivalent is flattened
//! to legacy formatting for its own subtree. Any other failure flattens the
//! whole input. Conversion never fails from the caller's point of view.

use super::component::{ClickAction, ClickEvent, Component, Content, Decoration, TriState};
use super::legacy::LegacySerializer;
use super::native::{NativeClickAction, NativeClickEvent, NativeStyle, NativeText};
use crate::config::TextConfig;
use crate::error::ConvertError;
use crate::platform::LogSink;

/// Nesting depth at which conversion gives up and flattens the input
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Convert with default options
pub fn to_native(component: &Component, sink: &dyn LogSink) -> NativeText {
    Converter::new(sink).convert(component)
}

/// Parse a `#RRGGBB` string into a packed `0xRRGGBB` value
pub fn parse_hex_color(hex: &str) -> Result<u32, ConvertError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ConvertError::InvalidColor(hex.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| ConvertError::InvalidColor(hex.to_string()))
}

/// Component converter bound to a log sink
pub struct Converter<'a> {
    sink: &'a dyn LogSink,
    legacy: LegacySerializer,
    max_depth: usize,
}

impl<'a> Converter<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self {
            sink,
            legacy: LegacySerializer::section(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn from_config(sink: &'a dyn LogSink, config: &TextConfig) -> Self {
        Self::new(sink)
            .with_max_depth(config.max_depth)
            .with_legacy(LegacySerializer::new(config.legacy_char))
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_legacy(mut self, legacy: LegacySerializer) -> Self {
        self.legacy = legacy;
        self
    }

    /// Convert `component`, falling back to a single legacy-formatted literal
    /// if anything goes wrong
    pub fn convert(&self, component: &Component) -> NativeText {
        match self.convert_node(component, 0) {
            Ok(text) => text,
            Err(e) => {
                self.sink
                    .warn(&format!("Error when converting component to native: {}", e));
                self.sink.debug(&format!("{:?}", e));
                self.flatten(component)
            }
        }
    }

    fn convert_node(&self, component: &Component, depth: usize) -> Result<NativeText, ConvertError> {
        if depth > self.max_depth {
            return Err(ConvertError::TooDeep {
                limit: self.max_depth,
            });
        }

        let mut text = match &component.content {
            Content::Literal(literal) => NativeText::literal(literal.as_str()),
            Content::Unrepresentable(opaque) => {
                self.sink
                    .warn(&format!("Unimplemented component type: {}", opaque.kind));
                return Ok(self.flatten(component));
            }
        };

        text.set_style(self.convert_style(component)?);

        for child in &component.children {
            text.append(self.convert_node(child, depth + 1)?);
        }

        Ok(text)
    }

    fn convert_style(&self, component: &Component) -> Result<NativeStyle, ConvertError> {
        let mut style = NativeStyle::EMPTY;

        if component.font.is_some() {
            self.sink.warn("Fonts are not implemented");
        }

        if let Some(color) = component.color {
            style.color = Some(parse_hex_color(&color.as_hex_string())?);
        }

        for (decoration, state) in component.decorations.known() {
            if state != TriState::True {
                continue;
            }
            match decoration {
                Decoration::Obfuscated => style.obfuscated = true,
                Decoration::Bold => style.bold = true,
                Decoration::Strikethrough => style.strikethrough = true,
                Decoration::Underlined => style.underline = true,
                Decoration::Italic => style.italic = true,
            }
        }
        for (kind, state) in component.decorations.unknown() {
            if *state == TriState::True {
                self.sink.warn(&format!("Unknown decoration: {}", kind));
            }
        }

        if let Some(event) = &component.click_event {
            style.click_event = Some(self.convert_click_event(event));
        }

        if component.hover_event.is_some() {
            self.sink.warn("Hover events are not implemented");
        }

        if component.insertion.is_some() {
            self.sink.warn("Insertions are not implemented");
        }

        Ok(style)
    }

    fn convert_click_event(&self, event: &ClickEvent) -> NativeClickEvent {
        let action = match &event.action {
            ClickAction::OpenUrl => Some(NativeClickAction::OpenUrl),
            ClickAction::OpenFile => Some(NativeClickAction::OpenFile),
            ClickAction::RunCommand => Some(NativeClickAction::RunCommand),
            ClickAction::SuggestCommand => Some(NativeClickAction::SuggestCommand),
            ClickAction::ChangePage => Some(NativeClickAction::ChangePage),
            ClickAction::CopyToClipboard => Some(NativeClickAction::CopyToClipboard),
            other @ ClickAction::Other(_) => {
                self.sink
                    .warn(&format!("Unknown click event action: {}", other));
                None
            }
        };
        NativeClickEvent {
            action,
            value: event.value.clone(),
        }
    }

    fn flatten(&self, component: &Component) -> NativeText {
        NativeText::literal(self.legacy.serialize(component))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSink;
    use crate::text::component::{HoverEvent, TextColor};

    fn red() -> TextColor {
        TextColor::from_rgb(0xFF0000)
    }

    #[test]
    fn test_hello_red_bold() {
        let sink = RecordingSink::new();
        let component = Component::text("Hello").color(red()).bold();

        let text = to_native(&component, &sink);

        assert_eq!(text.literal, "Hello");
        assert_eq!(text.style.color, Some(0xFF0000));
        assert!(text.style.bold);
        assert!(!text.style.underline);
        assert!(text.siblings.is_empty());
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_all_decorations() {
        let sink = RecordingSink::new();
        let component = Component::text("x")
            .obfuscated()
            .bold()
            .strikethrough()
            .underlined()
            .italic();

        let style = to_native(&component, &sink).style;

        assert!(style.obfuscated);
        assert!(style.bold);
        assert!(style.strikethrough);
        assert!(style.underline);
        assert!(style.italic);
    }

    #[test]
    fn test_off_and_not_set_decorations_are_skipped() {
        let sink = RecordingSink::new();
        let component = Component::text("x")
            .decoration(Decoration::Bold, TriState::False)
            .decoration(Decoration::Italic, TriState::NotSet);

        let style = to_native(&component, &sink).style;

        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_unknown_decoration_warns_and_keeps_others() {
        let sink = RecordingSink::new();
        let component = Component::text("x")
            .color(red())
            .italic()
            .unknown_decoration("shadow", TriState::True)
            .unknown_decoration("outline", TriState::False);

        let text = to_native(&component, &sink);

        assert_eq!(text.literal, "x");
        assert_eq!(text.style.color, Some(0xFF0000));
        assert!(text.style.italic);
        assert_eq!(sink.warnings(), vec!["Unknown decoration: shadow"]);
    }

    #[test]
    fn test_click_event_mapping() {
        let cases = [
            (ClickAction::OpenUrl, NativeClickAction::OpenUrl),
            (ClickAction::OpenFile, NativeClickAction::OpenFile),
            (ClickAction::RunCommand, NativeClickAction::RunCommand),
            (ClickAction::SuggestCommand, NativeClickAction::SuggestCommand),
            (ClickAction::ChangePage, NativeClickAction::ChangePage),
            (ClickAction::CopyToClipboard, NativeClickAction::CopyToClipboard),
        ];
        let sink = RecordingSink::new();

        for (action, expected) in cases {
            let component = Component::text("click").click_event(ClickEvent::new(action, "/dvc start"));
            let event = to_native(&component, &sink).style.click_event;
            assert_eq!(
                event,
                Some(NativeClickEvent {
                    action: Some(expected),
                    value: "/dvc start".to_string(),
                })
            );
        }
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_unknown_click_action_keeps_event_without_action() {
        let sink = RecordingSink::new();
        let component = Component::text("click")
            .click_event(ClickEvent::new(ClickAction::Other("show_dialog".into()), "abc"));

        let event = to_native(&component, &sink).style.click_event;

        assert_eq!(
            event,
            Some(NativeClickEvent {
                action: None,
                value: "abc".to_string(),
            })
        );
        assert_eq!(sink.warnings(), vec!["Unknown click event action: show_dialog"]);
    }

    #[test]
    fn test_unsupported_features_warn_once_each() {
        let sink = RecordingSink::new();
        let component = Component::text("x")
            .font("minecraft:uniform")
            .hover_event(HoverEvent::ShowText(Box::new(Component::text("tip"))))
            .insertion("inserted")
            .append(Component::text("y").font("minecraft:alt"));

        let text = to_native(&component, &sink);

        assert!(text.style.is_empty());
        assert_eq!(
            sink.warnings(),
            vec![
                "Fonts are not implemented",
                "Hover events are not implemented",
                "Insertions are not implemented",
                "Fonts are not implemented",
            ]
        );
    }

    #[test]
    fn test_unrepresentable_root_is_flattened() {
        let sink = RecordingSink::new();
        let component = Component::opaque("translatable", "chat.type.text")
            .append(Component::text(" tail").bold());

        let text = to_native(&component, &sink);

        let expected = LegacySerializer::section().serialize(&component);
        assert_eq!(text, NativeText::literal(expected));
        assert_eq!(sink.warnings(), vec!["Unimplemented component type: translatable"]);
    }

    #[test]
    fn test_unrepresentable_child_is_flattened_locally() {
        let sink = RecordingSink::new();
        let opaque = Component::opaque("keybind", "key.jump")
            .color(TextColor::from_rgb(0xFFFF55))
            .append(Component::text("!"));
        let component = Component::text("Press ")
            .append(opaque.clone())
            .append(Component::text(" now").italic());

        let text = to_native(&component, &sink);

        assert_eq!(text.literal, "Press ");
        assert_eq!(text.siblings.len(), 2);
        assert_eq!(text.siblings[0], NativeText::literal("§ekey.jump§r!"));
        assert_eq!(
            text.siblings[0].literal,
            LegacySerializer::section().serialize(&opaque)
        );
        assert_eq!(text.siblings[1].literal, " now");
        assert!(text.siblings[1].style.italic);
    }

    #[test]
    fn test_siblings_keep_their_own_color() {
        let sink = RecordingSink::new();
        let component = Component::text("")
            .append(Component::text("a").color(TextColor::from_rgb(0x112233)))
            .append(Component::text("b").color(TextColor::from_rgb(0x445566)));

        let text = to_native(&component, &sink);

        assert_eq!(text.siblings.len(), 2);
        assert_eq!(text.siblings[0].literal, "a");
        assert_eq!(text.siblings[0].style.color, Some(0x112233));
        assert_eq!(text.siblings[1].literal, "b");
        assert_eq!(text.siblings[1].style.color, Some(0x445566));
        assert_eq!(text.style.color, None);
    }

    #[test]
    fn test_no_implicit_inheritance() {
        let sink = RecordingSink::new();
        let component = Component::text("parent")
            .bold()
            .append(Component::text("child").italic().append(Component::text("grandchild").underlined()));

        let text = to_native(&component, &sink);

        let child = &text.siblings[0];
        let grandchild = &child.siblings[0];
        assert!(text.style.bold && !text.style.italic && !text.style.underline);
        assert!(child.style.italic && !child.style.bold && !child.style.underline);
        assert_eq!(grandchild.literal, "grandchild");
        assert!(grandchild.style.underline);
        assert!(!grandchild.style.bold);
        assert!(!grandchild.style.italic);
    }

    #[test]
    fn test_too_deep_falls_back_to_legacy() {
        let sink = RecordingSink::new();
        let mut component = Component::text("c");
        for _ in 0..4 {
            component = Component::text("p").bold().append(component);
        }

        let text = Converter::new(&sink).with_max_depth(2).convert(&component);

        assert_eq!(text, NativeText::literal(LegacySerializer::section().serialize(&component)));
        assert_eq!(
            sink.warnings(),
            vec!["Error when converting component to native: Component nesting exceeds 2 levels"]
        );
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let sink = RecordingSink::new();
        let component = Component::text("a").append(Component::text("b").append(Component::text("c")));

        let text = Converter::new(&sink).with_max_depth(2).convert(&component);

        assert_eq!(text.plain_text(), "abc");
        assert_eq!(text.siblings[0].siblings[0].literal, "c");
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_from_config_uses_legacy_char() {
        let sink = RecordingSink::new();
        let config = TextConfig {
            max_depth: 8,
            legacy_char: '&',
        };
        let component = Component::opaque("score", "42").bold();

        let text = Converter::from_config(&sink, &config).convert(&component);

        assert_eq!(text.literal, "&l42");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000").unwrap(), 0xFF0000);
        assert_eq!(parse_hex_color("#00ab12").unwrap(), 0x00AB12);
        assert_eq!(parse_hex_color("123456").unwrap(), 0x123456);
        assert!(matches!(
            parse_hex_color("#12345"),
            Err(ConvertError::InvalidColor(_))
        ));
        assert!(matches!(
            parse_hex_color("#GG0000"),
            Err(ConvertError::InvalidColor(_))
        ));
    }
}
