//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Sections of the driver program are described as fragments and only
//! turned into text by [`CodeBuilder`](super::CodeBuilder).

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Verbatim text, written without indentation.
    Raw(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a block fragment closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, Some("}".to_string()))
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Verbatim splice of user text, terminated by a newline.
    ///
    /// Blank text produces no fragment at all.
    pub fn verbatim(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        let mut text = text.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Some(Self::raw(text))
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(
            CodeFragment::raw("raw"),
            CodeFragment::Raw("raw".to_string())
        );
    }

    #[test]
    fn test_braced_closes_with_brace() {
        match CodeFragment::braced("if err != nil {", vec![CodeFragment::line("return")]) {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "if err != nil {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }

    #[test]
    fn test_verbatim() {
        assert_eq!(CodeFragment::verbatim(""), None);
        assert_eq!(CodeFragment::verbatim("  \n\t"), None);
        assert_eq!(
            CodeFragment::verbatim("\t\"time\""),
            Some(CodeFragment::Raw("\t\"time\"\n".to_string()))
        );
        assert_eq!(
            CodeFragment::verbatim("x := 1\n"),
            Some(CodeFragment::Raw("x := 1\n".to_string()))
        );
    }
}
