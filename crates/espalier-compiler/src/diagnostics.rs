use std::fmt;

/// A non-fatal anomaly observed while compiling one element.
///
/// One malformed node never blocks the rest of the document: the compiler
/// records a diagnostic, degrades the affected field to its unset default,
/// and keeps walking. Diagnostics ride along on
/// [`CompileResult`](crate::CompileResult) instead of unwinding.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Tag name (as written in the source) of the element the message refers
    /// to; `#text` for raw text nodes.
    pub element: String,
    pub message: String,
    /// 1-based source position, when position metadata was available.
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Diagnostic {
    pub(crate) fn new(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub(crate) fn with_position(mut self, line: Option<usize>, column: Option<usize>) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "{} at {line}:{column}: {}", self.element, self.message)
            }
            (Some(line), None) => write!(f, "{} at {line}: {}", self.element, self.message),
            _ => write!(f, "{}: {}", self.element, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_position() {
        let d = Diagnostic::new("card", "type attribute has no generic type list");
        assert_eq!(d.to_string(), "card: type attribute has no generic type list");
    }

    #[test]
    fn display_with_position() {
        let d = Diagnostic::new("card", "something odd").with_position(Some(3), Some(7));
        assert_eq!(d.to_string(), "card at 3:7: something odd");
    }

    #[test]
    fn display_with_line_only() {
        let d = Diagnostic::new("card", "something odd").with_position(Some(3), None);
        assert_eq!(d.to_string(), "card at 3: something odd");
    }
}
