//! Core operations.
//!
//! This module contains the conversion pipeline, separated from CLI argument
//! parsing and output rendering.

pub mod convert;
pub mod toolchain;

pub use convert::{ConvertOptions, convert};
pub use toolchain::GoToolchain;
