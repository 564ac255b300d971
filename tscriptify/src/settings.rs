//! Optional TOML settings file.
//!
//! Every key mirrors a command-line flag; flags given on the command line
//! take precedence over the file.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tscriptify_core::{Error, Result};

/// Contents of a settings file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Go import path of the models package.
    pub package: Option<String>,
    /// Target TypeScript file.
    pub target: Option<String>,
    pub extra_imports: Option<PathBuf>,
    pub extra_commands: Option<PathBuf>,
    /// Backup directory handed to typescriptify.
    pub backup: Option<String>,
    #[serde(default)]
    pub interface: bool,
    /// TypeScript imports for custom types.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Go toolchain binary.
    pub go: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl FromStr for Settings {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "tscriptify.toml")
    }
}

impl Settings {
    /// Parse a settings file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e: toml::de::Error| {
            Box::new(Error::Settings {
                path: PathBuf::from(filename),
                src: NamedSource::new(filename, content.to_string()),
                span: e.span().map(SourceSpan::from),
                message: e.message().to_string(),
            })
        })
    }
}
