//! Node classification and syntax-error location for the Go grammar.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use tree_sitter::{Language, Node, Parser, Tree};
use tscriptify_core::Error;

/// How a syntax node affects the pending struct-name candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeClass {
    /// Identifier-like node; may become the candidate.
    Identifier,
    /// A `struct { ... }` type expression.
    StructType,
    /// Comments and anonymous tokens leave the candidate untouched.
    Transparent,
    /// Anything else clears the candidate.
    Other,
}

impl NodeClass {
    pub(crate) fn of(node: Node<'_>) -> Self {
        if !node.is_named() || node.is_extra() {
            return Self::Transparent;
        }
        match node.kind() {
            "identifier" | "type_identifier" | "field_identifier" | "package_identifier" => {
                Self::Identifier
            }
            "struct_type" => Self::StructType,
            _ => Self::Other,
        }
    }
}

/// Node kinds allowed directly under `source_file` after the package clause.
const TOP_LEVEL_KINDS: &[&str] = &[
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "const_declaration",
    "var_declaration",
    "type_declaration",
];

fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source, failing if the tree contains any syntax error or the
/// file is not a well-formed Go source file.
pub(crate) fn parse(path: &Path, source: &str) -> tscriptify_core::Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| parse_error(path, source, None, format!("unsupported grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| parse_error(path, source, None, "parser produced no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let (span, message) = match first_error(root) {
            Some(node) => (Some(span_of(node)), describe(node, source)),
            None => (None, "syntax error".to_string()),
        };
        return Err(parse_error(path, source, span, message));
    }
    check_top_level(path, source, root)?;

    Ok(tree)
}

/// The grammar tolerates statements at file level and a missing package
/// clause; the Go compiler does not.
fn check_top_level(path: &Path, source: &str, root: Node<'_>) -> tscriptify_core::Result<()> {
    let mut cursor = root.walk();
    let mut children = root.named_children(&mut cursor).filter(|n| !n.is_extra());

    match children.next() {
        Some(node) if node.kind() == "package_clause" => {}
        Some(node) => {
            let message = format!("expected `package` clause {}", position(node));
            return Err(parse_error(path, source, Some(span_of(node)), message));
        }
        None => {
            let message = "expected `package` clause, found end of file";
            return Err(parse_error(path, source, None, message));
        }
    }

    if let Some(node) = children.find(|n| !TOP_LEVEL_KINDS.contains(&n.kind())) {
        let message = format!(
            "non-declaration statement outside function body {}",
            position(node)
        );
        return Err(parse_error(path, source, Some(span_of(node)), message));
    }
    Ok(())
}

fn parse_error(
    path: &Path,
    source: &str,
    span: Option<SourceSpan>,
    message: impl Into<String>,
) -> Box<Error> {
    Box::new(Error::Parse {
        path: path.to_path_buf(),
        src: NamedSource::new(path.display().to_string(), source.to_string()),
        span,
        message: message.into(),
    })
}

/// First `ERROR` or `MISSING` node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn span_of(node: Node<'_>) -> SourceSpan {
    let start = node.start_byte();
    SourceSpan::from((start, node.end_byte().saturating_sub(start)))
}

fn position(node: Node<'_>) -> String {
    let pos = node.start_position();
    format!("at line {}, column {}", pos.row + 1, pos.column + 1)
}

fn describe(node: Node<'_>, source: &str) -> String {
    let at = position(node);
    if node.is_missing() {
        return format!("missing `{}` {at}", node.kind());
    }
    let text = node
        .utf8_text(source.as_bytes())
        .unwrap_or_default()
        .lines()
        .next()
        .unwrap_or_default()
        .trim();
    if text.is_empty() {
        format!("syntax error {at}")
    } else {
        format!("unexpected `{text}` {at}")
    }
}
