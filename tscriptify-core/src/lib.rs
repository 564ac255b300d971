//! Core utilities and types for tscriptify.
//!
//! This crate provides the error taxonomy, input classification, Go
//! literal helpers and the persistence of synthesized driver programs.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod input;
mod utils;

pub use error::{Error, Result};
pub use file::{DRIVER_PREFIX, DRIVER_SUFFIX, DriverFile};
pub use input::{GO_SOURCE_SUFFIX, InputSpec, classify_inputs};
pub use utils::{go_string_literal, is_exported, join_import_path};
