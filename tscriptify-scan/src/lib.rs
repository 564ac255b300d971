//! Discovery of exported Go struct declarations.
//!
//! The scan is purely syntactic: each file is parsed with the tree-sitter Go
//! grammar and walked once, attributing every `struct` type to the exported
//! identifier seen immediately before it. No types are resolved and no other
//! file is consulted.

mod scanner;
mod syntax;

pub use scanner::{scan_file, scan_source};
