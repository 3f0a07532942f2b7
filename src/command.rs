//! Parsed command arguments

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Arguments of one command invocation, by name
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    arguments: HashMap<String, Value>,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}

/// Typed lookup of argument `name`, or `or` if it is absent or has another type
pub fn get_argument_or<V: DeserializeOwned>(
    context: &CommandContext,
    name: &str,
    or: Option<V>,
) -> Option<V> {
    context
        .raw(name)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .or(or)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_argument() {
        let context = CommandContext::new().with_argument("bot", 2);
        assert_eq!(get_argument_or(&context, "bot", Some(0u32)), Some(2));
    }

    #[test]
    fn test_missing_argument_uses_default() {
        let context = CommandContext::new();
        assert_eq!(get_argument_or::<u32>(&context, "bot", Some(7)), Some(7));
        assert_eq!(get_argument_or::<u32>(&context, "bot", None), None);
    }

    #[test]
    fn test_wrong_type_uses_default() {
        let context = CommandContext::new().with_argument("bot", "first");
        assert_eq!(get_argument_or(&context, "bot", Some(1u32)), Some(1));
        assert_eq!(
            get_argument_or(&context, "bot", Some(String::new())),
            Some("first".to_string())
        );
    }
}
