//! Driver program synthesis for tscriptify.
//!
//! This crate turns classified inputs into a short Go program that registers
//! every discovered struct with typescriptify and writes the TypeScript file.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Package aliases and struct references
//! - [`driver`] - Driver configuration and rendering

pub mod builder;
pub mod driver;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use driver::{
    DriverConfig, DriverConfigBuilder, DriverSynthesizer, SynthesizedProgram, TYPESCRIPTIFY_IMPORT,
};
pub use generation::{PackageAlias, PackageAliasResolver, StructReference, StructReferenceBuilder};
