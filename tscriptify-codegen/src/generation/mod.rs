//! Package aliases and struct references.
//!
//! - [`PackageAliasResolver`] - Directory to `m<index>` alias mapping
//! - [`StructReference`] - A (possibly qualified) type registered with the driver
//! - [`StructReferenceBuilder`] - Merges direct names and scanned files into references

mod aliases;
mod references;

pub use aliases::{PackageAlias, PackageAliasResolver};
pub use references::{StructReference, StructReferenceBuilder};
