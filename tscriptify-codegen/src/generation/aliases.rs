//! Import alias allocation.

use std::{fmt, path::Path};

use indexmap::IndexMap;
use tscriptify_core::join_import_path;

/// An import root referenced from the driver as `m<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageAlias {
    index: usize,
    import_path: String,
}

impl PackageAlias {
    /// Sequential index, allocated in first-seen order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Go import path the alias stands for.
    pub fn import_path(&self) -> &str {
        &self.import_path
    }
}

impl fmt::Display for PackageAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.index)
    }
}

/// Maps the directories of scanned files to stable aliases.
///
/// One resolver lives for one invocation; every directory gets exactly one
/// alias no matter how many files it contributes.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use tscriptify_codegen::PackageAliasResolver;
///
/// let mut resolver = PackageAliasResolver::new("github.com/acme/shop");
/// let a = resolver.resolve(Path::new("models/user.go"));
/// let b = resolver.resolve(Path::new("api/dto.go"));
/// let c = resolver.resolve(Path::new("models/order.go"));
///
/// assert_eq!(a.to_string(), "m0");
/// assert_eq!(b.to_string(), "m1");
/// assert_eq!(a, c);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageAliasResolver {
    root: String,
    /// Import path -> alias, in allocation order
    aliases: IndexMap<String, PackageAlias>,
}

impl PackageAliasResolver {
    /// Create a resolver for files living under the `root` import path.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            aliases: IndexMap::new(),
        }
    }

    /// Alias for the directory containing `file`.
    pub fn resolve(&mut self, file: &Path) -> PackageAlias {
        let import_path = join_import_path(&self.root, file);
        self.resolve_import_path(import_path)
    }

    /// Alias for an already resolved import path.
    pub fn resolve_import_path(&mut self, import_path: impl Into<String>) -> PackageAlias {
        let import_path = import_path.into();
        let next = self.aliases.len();
        self.aliases
            .entry(import_path)
            .or_insert_with_key(|path| {
                tracing::debug!(alias = next, import_path = %path, "allocated package alias");
                PackageAlias {
                    index: next,
                    import_path: path.clone(),
                }
            })
            .clone()
    }

    /// Consume the resolver, returning aliases in allocation order.
    pub fn into_aliases(self) -> Vec<PackageAlias> {
        self.aliases.into_values().collect()
    }
}
