// ── Attribute ─────────────────────────────────────────────────────────────

/// A single attribute on a [`Tag`].
///
/// The pug pipeline renders bare attributes with the value equal to the key
/// (`disabled="disabled"`), but other producers may omit the value entirely,
/// so it stays optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    /// `None` when the source declared the attribute without any value.
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()) }
    }

    /// An attribute declared without a value.
    pub fn bare(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None }
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// One node of the markup tree: either a tag or a run of raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Tag(Tag),
    Text(Text),
}

impl Element {
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Element::Tag(tag) => Some(tag),
            Element::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Tag(_) => None,
            Element::Text(text) => Some(text),
        }
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::Tag(tag)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

// ── Tag ───────────────────────────────────────────────────────────────────

/// A markup tag with its attributes and child elements.
///
/// `attrs` keeps source declaration order. Downstream consumers derive their
/// own output ordering from it, so producers must append attributes in the
/// order they appear in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Append an attribute with a value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    /// Append an attribute declared without a value.
    pub fn with_bare_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push(Attribute::bare(name));
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Look up an attribute by exact name.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// Look up an attribute's value by exact name.
    ///
    /// Returns `None` both when the attribute is missing and when it was
    /// declared without a value; use [`Tag::has_attr`] to tell those apart.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(|a| a.value.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

// ── Text ──────────────────────────────────────────────────────────────────

/// Raw text content between tags.
///
/// May span multiple lines and may contain `$` interpolation markers and
/// HTML entities; consumers decide how to segment and decode it.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── attribute lookup ──────────────────────────────────────────────────

    #[test]
    fn attr_finds_by_exact_name() {
        let tag = Tag::new("button").with_attr("color", "red");
        assert_eq!(tag.attr_value("color"), Some("red"));
        assert_eq!(tag.attr_value("Color"), None);
    }

    #[test]
    fn attr_value_none_for_bare_attribute() {
        let tag = Tag::new("input").with_bare_attr("disabled");
        assert!(tag.has_attr("disabled"));
        assert_eq!(tag.attr_value("disabled"), None);
    }

    #[test]
    fn attr_missing() {
        let tag = Tag::new("div");
        assert!(!tag.has_attr("id"));
        assert!(tag.attr("id").is_none());
    }

    #[test]
    fn attrs_keep_declaration_order() {
        let tag = Tag::new("div")
            .with_attr("b", "2")
            .with_attr("a", "1")
            .with_attr("c", "3");
        let names: Vec<&str> = tag.attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_attr_lookup_returns_first() {
        let tag = Tag::new("div").with_attr("x", "1").with_attr("x", "2");
        assert_eq!(tag.attr_value("x"), Some("1"));
    }

    // ── element variants ──────────────────────────────────────────────────

    #[test]
    fn element_conversions() {
        let el: Element = Tag::new("div").into();
        assert_eq!(el.as_tag().map(|t| t.name.as_str()), Some("div"));
        assert!(el.as_text().is_none());

        let el: Element = Text::new("hello").into();
        assert_eq!(el.as_text().map(|t| t.content.as_str()), Some("hello"));
        assert!(el.as_tag().is_none());
    }

    #[test]
    fn children_keep_document_order() {
        let tag = Tag::new("column")
            .with_child(Tag::new("row"))
            .with_child(Text::new("middle"))
            .with_child(Tag::new("row"));
        assert_eq!(tag.children.len(), 3);
        assert!(tag.children[0].as_tag().is_some());
        assert!(tag.children[1].as_text().is_some());
    }
}
