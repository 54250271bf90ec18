use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Class name used for synthesized text widgets when the alias table has no
/// entry for `"text"`.
const DEFAULT_TEXT_CLASS: &str = "Text";

/// Options consumed by [`compile`](crate::compile()).
///
/// Deserializes from the project's camelCase JSON options file; loading and
/// watching that file is the build orchestrator's job, not this crate's.
/// Every field is defaulted so a partial file parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileConfig {
    /// Source tag name → replacement tag name, applied before a tag's name is
    /// turned into a widget class. The `"text"` entry doubles as the class
    /// used for widgets synthesized from raw text content.
    pub tag_aliases: HashMap<String, String>,
    /// Fold interpolation-free text widgets into compile-time constants.
    pub auto_const_text: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        let mut tag_aliases = HashMap::new();
        tag_aliases.insert("text".to_string(), DEFAULT_TEXT_CLASS.to_string());
        Self { tag_aliases, auto_const_text: false }
    }
}

impl CompileConfig {
    /// Apply tag aliasing; names without an alias pass through unchanged.
    pub(crate) fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.tag_aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Class name for widgets synthesized from text content.
    pub(crate) fn text_widget_class(&self) -> &str {
        self.tag_aliases
            .get("text")
            .map(String::as_str)
            .unwrap_or(DEFAULT_TEXT_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CompileConfig::default();
        assert!(!config.auto_const_text);
        assert_eq!(config.tag_aliases.get("text").map(String::as_str), Some("Text"));
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "tagAliases": { "div": "Container", "text": "PlainText" },
            "autoConstText": true
        }"#;
        let config: CompileConfig = serde_json::from_str(json).unwrap();
        assert!(config.auto_const_text);
        assert_eq!(config.resolve_alias("div"), "Container");
        assert_eq!(config.text_widget_class(), "PlainText");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let json = r#"{ "autoConstText": true }"#;
        let config: CompileConfig = serde_json::from_str(json).unwrap();
        assert!(config.auto_const_text);
        assert_eq!(config.text_widget_class(), "Text");
    }

    #[test]
    fn unaliased_name_passes_through() {
        let config = CompileConfig::default();
        assert_eq!(config.resolve_alias("raised-button"), "raised-button");
    }

    #[test]
    fn text_class_falls_back_when_unconfigured() {
        let mut config = CompileConfig::default();
        config.tag_aliases.clear();
        assert_eq!(config.text_widget_class(), "Text");
    }

    #[test]
    fn serialization_uses_camel_case_names() {
        let json = serde_json::to_string(&CompileConfig::default()).unwrap();
        assert!(json.contains("tagAliases"));
        assert!(json.contains("autoConstText"));
    }
}
