// ── ParamKind ─────────────────────────────────────────────────────────────

/// How a parameter's value is meant to be emitted.
///
/// The compiler itself only produces `Literal`, `Expression`, `Closure` and
/// `Widgets`; `Widget` and `Array` are part of the shared descriptor contract
/// for downstream emission passes that rewrite parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain value, emitted as a string or boolean literal.
    Literal,
    /// Target-language expression, emitted verbatim.
    Expression,
    /// Event handler body, emitted wrapped in a closure.
    Closure,
    /// A single nested widget.
    Widget,
    /// An ordered list of nested widgets.
    Widgets,
    /// An ordered list of plain values.
    Array,
}

// ── ParamValue ────────────────────────────────────────────────────────────

/// The payload carried by a [`Param`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Boolean literal; bare markup attributes compile to `Bool(true)`.
    Bool(bool),
    Str(String),
    Widget(Box<Widget>),
    Widgets(Vec<Widget>),
    Strings(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_widgets(&self) -> Option<&[Widget]> {
        match self {
            ParamValue::Widgets(widgets) => Some(widgets),
            _ => None,
        }
    }
}

// ── Param ─────────────────────────────────────────────────────────────────

/// A typed, named-or-positional argument attached to a [`Widget`].
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub kind: ParamKind,
    /// `None` marks the widget's positional/default parameter.
    pub name: Option<String>,
    pub value: ParamValue,
    /// `true` when the value needs no further name simplification or binding
    /// before emission.
    pub resolved: bool,
}

// ── Widget ────────────────────────────────────────────────────────────────

/// One UI component instance in the compiled descriptor tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Resolved class-like identifier, e.g. `RaisedButton`.
    pub name: String,
    /// Tag name as received from the markup, kept for diagnostics and
    /// source mapping.
    pub original_name: String,
    /// Eligible for compile-time constant folding by the emitter.
    pub constant: bool,
    /// Generic type arguments, in declaration order. Empty means none.
    pub generics: Vec<String>,
    /// Attribute-derived parameters in source order; when the widget has
    /// children, a trailing `children` parameter holds them.
    pub params: Vec<Param>,
    /// 1-based source line, when the markup carried position metadata.
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Widget {
    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name.as_deref() == Some(name))
    }

    /// The compiled child widgets, or an empty slice for a leaf.
    pub fn children(&self) -> &[Widget] {
        self.param("children")
            .and_then(|p| p.value.as_widgets())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Widget {
        Widget {
            name: name.to_string(),
            original_name: name.to_lowercase(),
            constant: false,
            generics: Vec::new(),
            params: Vec::new(),
            line: None,
            column: None,
        }
    }

    #[test]
    fn param_lookup_by_name() {
        let mut widget = leaf("Button");
        widget.params.push(Param {
            kind: ParamKind::Literal,
            name: Some("color".to_string()),
            value: ParamValue::Str("red".to_string()),
            resolved: false,
        });
        assert_eq!(widget.param("color").unwrap().value.as_str(), Some("red"));
        assert!(widget.param("missing").is_none());
    }

    #[test]
    fn positional_param_not_found_by_name() {
        let mut widget = leaf("Text");
        widget.params.push(Param {
            kind: ParamKind::Literal,
            name: None,
            value: ParamValue::Str("hello".to_string()),
            resolved: true,
        });
        assert!(widget.param("value").is_none());
    }

    #[test]
    fn children_accessor() {
        let mut parent = leaf("Column");
        assert!(parent.children().is_empty());

        parent.params.push(Param {
            kind: ParamKind::Widgets,
            name: Some("children".to_string()),
            value: ParamValue::Widgets(vec![leaf("Text"), leaf("Button")]),
            resolved: true,
        });
        let names: Vec<&str> = parent.children().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Text", "Button"]);
    }

    #[test]
    fn value_accessors_reject_other_variants() {
        assert_eq!(ParamValue::Bool(true).as_str(), None);
        assert_eq!(ParamValue::Str("x".to_string()).as_widgets(), None);
    }
}
