use std::path::Path;

use tree_sitter::Node;
use tscriptify_core::{Error, Result, is_exported};

use crate::syntax::{self, NodeClass};

/// Read and scan one Go file.
///
/// Returns the exported struct names in the order they appear in the file.
pub fn scan_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
    scan_source(path, &source)
}

/// Scan Go source text; `path` is only used for error reporting.
pub fn scan_source(path: impl AsRef<Path>, source: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let tree = syntax::parse(path, source)?;
    let structs = collect_structs(tree.root_node(), source.as_bytes());

    tracing::debug!(path = %path.display(), count = structs.len(), "scanned Go file");
    Ok(structs)
}

/// Pre-order walk threading one pending name candidate through the tree.
fn collect_structs(root: Node<'_>, source: &[u8]) -> Vec<String> {
    let mut structs = Vec::new();
    let mut pending: Option<String> = None;
    let mut cursor = root.walk();

    loop {
        pending = visit(cursor.node(), source, pending, &mut structs);

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return structs;
            }
        }
    }
}

/// Apply one node to the candidate and return the new candidate.
fn visit(
    node: Node<'_>,
    source: &[u8],
    pending: Option<String>,
    structs: &mut Vec<String>,
) -> Option<String> {
    match NodeClass::of(node) {
        NodeClass::Transparent => pending,
        NodeClass::Identifier => node
            .utf8_text(source)
            .ok()
            .filter(|name| is_exported(name))
            .map(str::to_string),
        NodeClass::StructType => {
            structs.extend(pending);
            None
        }
        NodeClass::Other => None,
    }
}
