//! Driver program configuration and rendering.
//!
//! - [`DriverConfig`] - Everything the driver needs, fixed once built
//! - [`DriverSynthesizer`] - Renders a [`DriverConfig`] to Go source

mod config;
mod render;

pub use config::{DriverConfig, DriverConfigBuilder};
pub use render::{DriverSynthesizer, SynthesizedProgram, TYPESCRIPTIFY_IMPORT};
