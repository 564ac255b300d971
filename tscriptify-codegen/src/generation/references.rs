//! Struct references registered with the driver program.

use std::{fmt, path::Path};

use tscriptify_core::{InputSpec, Result, is_exported};

use super::{PackageAlias, PackageAliasResolver};

/// A type passed to `t.Add(...)` in the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructReference {
    alias: Option<PackageAlias>,
    name: String,
}

impl StructReference {
    /// A struct found in a scanned file, qualified with its package alias.
    pub fn qualified(alias: PackageAlias, name: impl Into<String>) -> Self {
        Self {
            alias: Some(alias),
            name: name.into(),
        }
    }

    /// A type name passed by the caller, used as written.
    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into().trim().to_string(),
        }
    }

    /// Package alias, if the reference came from a scanned file.
    pub fn alias(&self) -> Option<&PackageAlias> {
        self.alias.as_ref()
    }

    /// Type name without the alias.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Go expression naming the type (`m0.User` or the direct name).
    pub fn expression(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{alias}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Whether the reference may be emitted.
    ///
    /// The final dot-separated segment must be exported, and the name must
    /// neither start with `.` nor contain a path separator.
    pub fn is_valid(&self) -> bool {
        let name = self.name.as_str();
        if name.is_empty() || name.starts_with('.') || name.contains(std::path::is_separator) {
            return false;
        }
        name.rsplit('.').next().is_some_and(is_exported)
    }
}

impl fmt::Display for StructReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{alias}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Merges direct type names and scanned files into ordered references.
///
/// Output follows input order; within one file, declarations keep their file
/// order. Invalid references are dropped, duplicates are kept.
pub struct StructReferenceBuilder<'r> {
    resolver: &'r mut PackageAliasResolver,
}

impl<'r> StructReferenceBuilder<'r> {
    pub fn new(resolver: &'r mut PackageAliasResolver) -> Self {
        Self { resolver }
    }

    /// Build references, scanning source files from disk.
    pub fn build(self, inputs: &[InputSpec]) -> Result<Vec<StructReference>> {
        self.build_with(inputs, |path| tscriptify_scan::scan_file(path))
    }

    /// Build references using `scan` to list the structs of each source file.
    pub fn build_with<F>(self, inputs: &[InputSpec], mut scan: F) -> Result<Vec<StructReference>>
    where
        F: FnMut(&Path) -> Result<Vec<String>>,
    {
        let mut references = Vec::new();

        for input in inputs {
            let candidates = match input {
                InputSpec::TypeName(name) => vec![StructReference::direct(name.as_str())],
                InputSpec::SourceFile(path) => {
                    let names = scan(path)?;
                    if names.is_empty() {
                        tracing::debug!(path = %path.display(), "no exported structs found");
                        continue;
                    }
                    let alias = self.resolver.resolve(path);
                    names
                        .into_iter()
                        .map(|name| StructReference::qualified(alias.clone(), name))
                        .collect()
                }
            };

            for reference in candidates {
                if reference.is_valid() {
                    references.push(reference);
                } else {
                    tracing::debug!(reference = %reference, "dropping struct reference");
                }
            }
        }

        Ok(references)
    }
}
