//! Classification of positional inputs.

use std::path::{Path, PathBuf};

/// Suffix that marks an input as a Go source file.
pub const GO_SOURCE_SUFFIX: &str = ".go";

/// One positional input: either a bare type name or a Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// A type name the caller asserts already resolves in the driver's scope.
    TypeName(String),
    /// A Go source file whose exported structs should be registered.
    SourceFile(PathBuf),
}

impl InputSpec {
    /// Classify a raw argument by its suffix.
    pub fn classify(arg: &str) -> Self {
        if arg.ends_with(GO_SOURCE_SUFFIX) {
            Self::SourceFile(PathBuf::from(arg))
        } else {
            Self::TypeName(arg.to_string())
        }
    }

    /// Get the source path, if this is a file input.
    pub fn source_file(&self) -> Option<&Path> {
        match self {
            Self::SourceFile(path) => Some(path),
            Self::TypeName(_) => None,
        }
    }
}

/// Classify every argument, preserving order.
pub fn classify_inputs<I, S>(args: I) -> Vec<InputSpec>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| InputSpec::classify(arg.as_ref()))
        .collect()
}
