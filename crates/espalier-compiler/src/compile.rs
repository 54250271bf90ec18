//! The two compiler passes: import extraction over the document root and the
//! recursive tag-to-widget walk.
//!
//! Both passes are pure tree computations. Nothing here touches the
//! filesystem; parsing markup into [`Element`]s and emitting code from the
//! returned [`Widget`]s belong to the surrounding toolchain.

use espalier_html::{Attribute, Element, Tag, Text};

use crate::config::CompileConfig;
use crate::diagnostics::Diagnostic;
use crate::text::{camel_case, decode_entities, pascal_case};
use crate::widget::{Param, ParamKind, ParamValue, Widget};

// ── Import extraction ─────────────────────────────────────────────────────

/// Split `import` directives out of a root element sequence.
///
/// Every top-level tag named exactly `import` is removed from the sequence;
/// its `package` attribute becomes a `package:`-prefixed specifier and its
/// `file` attribute a plain one. All package specifiers come before all file
/// specifiers, each group in source order, duplicates kept. The pass does
/// not recurse, so an import nested inside another tag stays where it is.
pub fn extract_imports(elements: Vec<Element>) -> (Vec<Element>, Vec<String>) {
    let mut remaining = Vec::with_capacity(elements.len());
    let mut packages = Vec::new();
    let mut files = Vec::new();

    for element in elements {
        match element {
            Element::Tag(tag) if tag.name == "import" => {
                if let Some(package) = tag.attr_value("package") {
                    if !package.is_empty() {
                        packages.push(format!("package:{package}"));
                    }
                }
                if let Some(file) = tag.attr_value("file") {
                    if !file.is_empty() {
                        files.push(file.to_string());
                    }
                }
            }
            other => remaining.push(other),
        }
    }

    log::debug!("extracted {} package and {} file imports", packages.len(), files.len());
    packages.extend(files);
    (remaining, packages)
}

// ── Compilation ───────────────────────────────────────────────────────────

/// Everything one compilation produces: the widget tree plus any non-fatal
/// anomalies recorded along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompileResult {
    /// One widget per root tag, in document order.
    pub widgets: Vec<Widget>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Record a recoverable anomaly: logged immediately, handed to the caller on
/// the result afterwards.
fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

/// Compile parsed markup into widget descriptors, one per root tag.
///
/// The walk never fails outright: malformed metadata degrades the affected
/// field to its unset default and records a [`Diagnostic`] instead of
/// unwinding, so one bad node cannot block the rest of the document. Root
/// text has no widget to attach to and is dropped, with a diagnostic when it
/// carries anything other than whitespace.
pub fn compile(elements: &[Element], config: &CompileConfig) -> CompileResult {
    let mut result = CompileResult::default();
    for element in elements {
        match element {
            Element::Tag(tag) => {
                let widget = compile_tag(tag, config, &mut result.diagnostics);
                result.widgets.push(widget);
            }
            Element::Text(text) => {
                if !text.content.trim().is_empty() {
                    report(
                        &mut result.diagnostics,
                        Diagnostic::new("#text", "text outside of any tag is dropped"),
                    );
                }
            }
        }
    }
    log::debug!(
        "compiled {} root widgets, {} diagnostics",
        result.widgets.len(),
        result.diagnostics.len()
    );
    result
}

/// Compile one tag and its subtree into a widget descriptor.
fn compile_tag(tag: &Tag, config: &CompileConfig, diagnostics: &mut Vec<Diagnostic>) -> Widget {
    let class = pascal_case(config.resolve_alias(&tag.name));

    // one pass in declaration order; reserved names match the raw attribute
    // text, prefixes included, so `:type` still classifies as a param
    let mut params = Vec::new();
    let mut position_attr = None;
    let mut type_attr = None;
    for attr in &tag.attrs {
        match attr.name.as_str() {
            "pug-line" => position_attr = Some(attr.value.as_deref()),
            "type" => type_attr = Some(attr.value.as_deref()),
            _ => params.push(classify_attribute(attr)),
        }
    }

    let (line, column) = match position_attr {
        Some(raw) => parse_position(&tag.name, raw, diagnostics),
        None => (None, None),
    };
    let generics = match type_attr {
        Some(raw) => parse_generics(&tag.name, raw, (line, column), diagnostics),
        None => Vec::new(),
    };

    // `const` both flags the widget and, through the loop above, stays in
    // `params`; emitters read the flag, the param is kept for compatibility
    let constant = tag.has_attr("const");

    let mut children = Vec::new();
    for child in &tag.children {
        match child {
            Element::Tag(child_tag) => children.push(compile_tag(child_tag, config, diagnostics)),
            Element::Text(text) => compile_text(text, config, &mut children),
        }
    }
    if !children.is_empty() {
        params.push(Param {
            kind: ParamKind::Widgets,
            name: Some("children".to_string()),
            value: ParamValue::Widgets(children),
            resolved: true,
        });
    }

    Widget {
        name: class,
        original_name: tag.name.clone(),
        constant,
        generics,
        params,
        line,
        column,
    }
}

/// Segment a text node into literal text widgets, one per surviving line.
///
/// Lines are trimmed; blank lines and `//` comment lines vanish. The widget
/// class comes from the alias table's `"text"` entry so a project can swap
/// in its own text component.
fn compile_text(text: &Text, config: &CompileConfig, out: &mut Vec<Widget>) {
    for line in text.content.split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let decoded = decode_entities(line);
        let constant = config.auto_const_text && !decoded.contains('$');
        out.push(Widget {
            name: config.text_widget_class().to_string(),
            original_name: "text".to_string(),
            constant,
            generics: Vec::new(),
            params: vec![Param {
                kind: ParamKind::Literal,
                name: None,
                value: ParamValue::Str(decoded),
                resolved: true,
            }],
            line: None,
            column: None,
        });
    }
}

// ── Attribute classification ──────────────────────────────────────────────

/// Turn one non-reserved attribute into a typed parameter.
fn classify_attribute(attr: &Attribute) -> Param {
    let (mut kind, name) = if let Some(rest) = attr.name.strip_prefix(':') {
        (ParamKind::Expression, rest)
    } else if let Some(rest) = attr.name.strip_prefix('@') {
        (ParamKind::Closure, rest)
    } else {
        (ParamKind::Literal, attr.name.as_str())
    };

    // a value-side marker wins over whatever the name prefix said
    let mut value = attr.value.as_deref();
    if let Some(stripped) = value.and_then(|v| v.strip_prefix(':')) {
        kind = ParamKind::Expression;
        value = Some(stripped);
    }

    let resolved = name.starts_with('^');
    let name = if let Some(simplified) = name.strip_prefix('^') {
        Some(simplified.to_string())
    } else {
        let camel = camel_case(name);
        (camel != "value").then_some(camel)
    };

    // pug renders a bare attribute with its value equal to the key, so key
    // == value means no explicit value was written
    let value = match value {
        Some(v) if v != attr.name => ParamValue::Str(decode_entities(v)),
        Some(_) | None => ParamValue::Bool(true),
    };

    Param { kind, name, value, resolved }
}

/// Parse a raw `pug-line` value of the form `"line,column"`.
fn parse_position(
    tag_name: &str,
    raw: Option<&str>,
    diagnostics: &mut Vec<Diagnostic>,
) -> (Option<usize>, Option<usize>) {
    let raw = raw.unwrap_or("");
    let mut parts = raw.split(',');
    let line = parts.next().and_then(|p| p.trim().parse().ok());
    let column = parts.next().and_then(|p| p.trim().parse().ok());
    if line.is_none() || column.is_none() {
        report(
            diagnostics,
            Diagnostic::new(tag_name, format!("unparseable pug-line value {raw:?}"))
                .with_position(line, column),
        );
    }
    (line, column)
}

/// Parse a `type` attribute value into generic type arguments.
fn parse_generics(
    tag_name: &str,
    raw: Option<&str>,
    position: (Option<usize>, Option<usize>),
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let value = raw.map(|v| v.strip_prefix(':').unwrap_or(v)).unwrap_or("");
    if value.trim().is_empty() {
        report(
            diagnostics,
            Diagnostic::new(tag_name, "type attribute has no generic type list")
                .with_position(position.0, position.1),
        );
        return Vec::new();
    }
    value.split(',').map(|t| t.trim().to_string()).collect()
}
