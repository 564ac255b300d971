//! Code builder utility for generating properly indented Go code.

use super::{CodeFragment, Renderable};

/// One indentation level, as gofmt writes it.
const INDENT: &str = "\t";

/// Fluent API for building code with proper indentation.
///
/// Consuming methods (returning `Self`) start a file; `emit` and the `push_`
/// methods (returning `&mut Self`) append to it.
///
/// # Example
///
/// ```
/// use tscriptify_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
///
/// struct Main;
///
/// impl Renderable for Main {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::braced(
///             "func main() {",
///             vec![CodeFragment::line("println(\"hi\")")],
///         )]
///     }
/// }
///
/// let mut builder = CodeBuilder::go().line("package main").blank();
/// builder.emit(&Main);
///
/// assert_eq!(
///     builder.build(),
///     "package main\n\nfunc main() {\n\tprintln(\"hi\")\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder with tab indentation.
    pub fn go() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            // spliced text keeps its own indentation
            CodeFragment::Raw(s) => self.buffer.push_str(&s),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level = self.indent_level.saturating_sub(1);
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::go().line("x := 1").blank().build();
        assert_eq!(code, "x := 1\n\n");
    }

    #[test]
    fn test_raw_fragment_is_not_indented() {
        struct Spliced;
        impl Renderable for Spliced {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "func main() {",
                    vec![
                        CodeFragment::line("a()"),
                        CodeFragment::raw("b()\n"),
                        CodeFragment::line("c()"),
                    ],
                )]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Spliced);
        assert_eq!(builder.build(), "func main() {\n\ta()\nb()\n\tc()\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "func main() {",
                    vec![CodeFragment::braced(
                        "if err != nil {",
                        vec![CodeFragment::line("panic(err)")],
                    )],
                )]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Nested).push_blank();
        assert_eq!(
            builder.build(),
            "func main() {\n\tif err != nil {\n\t\tpanic(err)\n\t}\n}\n\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        struct Open;
        impl Renderable for Open {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "import (",
                    vec![CodeFragment::line("\"fmt\"")],
                    None,
                )]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Open);
        assert_eq!(builder.build(), "import (\n\t\"fmt\"\n");
    }
}
