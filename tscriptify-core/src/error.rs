use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tscriptify operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{message}")]
    #[diagnostic(
        code(tscriptify::validation),
        help("pass --package and --target, or set them in the settings file")
    )]
    Validation { message: String },

    #[error("error loading/parsing Go file '{path}': {message}")]
    #[diagnostic(code(tscriptify::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid settings file '{path}': {message}")]
    #[diagnostic(code(tscriptify::settings))]
    Settings {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to {action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch '{program}'")]
    #[diagnostic(
        code(tscriptify::toolchain),
        help("make sure the Go toolchain is installed, or point --go at it")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generated driver '{driver}' failed: {status}")]
    #[diagnostic(
        code(tscriptify::execution),
        help("rerun with --verbose to inspect the generated program")
    )]
    Execution {
        driver: PathBuf,
        status: String,
        code: Option<i32>,
    },
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Validation {
            message: message.into(),
        })
    }

    /// Create an I/O error for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.into(),
            source,
        })
    }

    /// Process exit status for this error.
    ///
    /// A failed driver keeps the child's own status when it has one.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Execution {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
