use std::collections::BTreeMap;

use indexmap::IndexSet;
use tscriptify_core::go_string_literal;

use crate::generation::{PackageAlias, StructReference};

/// Input of the driver synthesizer.
///
/// Built once per invocation through [`DriverConfigBuilder`] and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    target_file: String,
    create_interface: bool,
    /// Option name -> Go literal, emitted sorted by name
    init_params: BTreeMap<String, String>,
    custom_imports: IndexSet<String>,
    packages: Vec<PackageAlias>,
    structs: Vec<StructReference>,
    extra_imports: String,
    extra_commands: String,
}

impl DriverConfig {
    pub fn builder(target_file: impl Into<String>) -> DriverConfigBuilder {
        DriverConfigBuilder::new(target_file)
    }

    /// TypeScript file the driver writes.
    pub fn target_file(&self) -> &str {
        &self.target_file
    }

    /// Whether interfaces rather than classes are emitted.
    pub fn create_interface(&self) -> bool {
        self.create_interface
    }

    /// Scalar options as `(field, Go literal)` pairs, sorted by field.
    pub fn init_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.init_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// TypeScript import statements, in first-added order.
    pub fn custom_imports(&self) -> impl Iterator<Item = &str> {
        self.custom_imports.iter().map(String::as_str)
    }

    /// Package aliases to import.
    pub fn packages(&self) -> &[PackageAlias] {
        &self.packages
    }

    /// Types to register, in order.
    pub fn structs(&self) -> &[StructReference] {
        &self.structs
    }

    /// Raw text spliced into the import block.
    pub fn extra_imports(&self) -> &str {
        &self.extra_imports
    }

    /// Raw text spliced before the conversion call.
    pub fn extra_commands(&self) -> &str {
        &self.extra_commands
    }
}

/// Builder for [`DriverConfig`].
///
/// # Example
///
/// ```
/// use tscriptify_codegen::{DriverConfig, StructReference};
///
/// let config = DriverConfig::builder("web/models.ts")
///     .create_interface(true)
///     .backup_dir("backups")
///     .custom_import("import { Decimal } from 'decimal.js'")
///     .structs([StructReference::direct("Money")])
///     .build();
///
/// assert_eq!(config.init_params().next(), Some(("BackupDir", "\"backups\"")));
/// ```
#[derive(Debug, Clone)]
pub struct DriverConfigBuilder {
    config: DriverConfig,
}

impl DriverConfigBuilder {
    pub fn new(target_file: impl Into<String>) -> Self {
        Self {
            config: DriverConfig {
                target_file: target_file.into(),
                ..DriverConfig::default()
            },
        }
    }

    /// Emit interfaces instead of classes.
    pub fn create_interface(mut self, value: bool) -> Self {
        self.config.create_interface = value;
        self
    }

    /// Set a scalar option to a Go literal, replacing any earlier value.
    pub fn init_param(mut self, field: impl Into<String>, literal: impl Into<String>) -> Self {
        self.config.init_params.insert(field.into(), literal.into());
        self
    }

    /// Set `BackupDir` to a string literal.
    pub fn backup_dir(self, dir: &str) -> Self {
        self.init_param("BackupDir", go_string_literal(dir))
    }

    /// Add one TypeScript import; repeats are ignored.
    pub fn custom_import(mut self, import: impl Into<String>) -> Self {
        self.config.custom_imports.insert(import.into());
        self
    }

    /// Add several TypeScript imports.
    pub fn custom_imports<I, S>(self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        imports.into_iter().fold(self, Self::custom_import)
    }

    /// Package aliases to import.
    pub fn packages(mut self, packages: impl IntoIterator<Item = PackageAlias>) -> Self {
        self.config.packages.extend(packages);
        self
    }

    /// Types to register, appended in order.
    pub fn structs(mut self, structs: impl IntoIterator<Item = StructReference>) -> Self {
        self.config.structs.extend(structs);
        self
    }

    /// Raw text for the import block.
    pub fn extra_imports(mut self, text: impl Into<String>) -> Self {
        self.config.extra_imports = text.into();
        self
    }

    /// Raw text placed before the conversion call.
    pub fn extra_commands(mut self, text: impl Into<String>) -> Self {
        self.config.extra_commands = text.into();
        self
    }

    pub fn build(self) -> DriverConfig {
        self.config
    }
}
