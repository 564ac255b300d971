//! Convert operation - Go structs to a TypeScript file via a generated driver.
//!
//! Stages run strictly in order and the first failure aborts the run:
//! scan and resolve inputs, build references, render the driver, persist it,
//! optionally dump it, execute it, report.

use std::path::{Path, PathBuf};

use tscriptify_codegen::{
    DriverConfig, DriverSynthesizer, PackageAliasResolver, StructReferenceBuilder,
};
use tscriptify_core::{DriverFile, Error, InputSpec, Result};

use super::GoToolchain;
use crate::reports::{ConvertReport, ConvertResult, DriverDump, ExecutionFailure, Output, Report};

/// Options for the convert operation.
#[derive(Debug)]
pub struct ConvertOptions {
    /// Go import path the input files live under.
    pub package: String,
    /// TypeScript file the driver writes.
    pub target: String,
    /// Positional inputs, in command-line order.
    pub inputs: Vec<InputSpec>,
    /// File spliced into the driver's import block.
    pub extra_imports: Option<PathBuf>,
    /// File spliced before the conversion call.
    pub extra_commands: Option<PathBuf>,
    pub backup: String,
    pub interface: bool,
    pub imports: Vec<String>,
    /// Dump the persisted driver before running it.
    pub verbose: bool,
    /// Render only; nothing is persisted or executed.
    pub dry_run: bool,
    pub toolchain: GoToolchain,
}

/// Execute the convert operation.
///
/// Diagnostics that must appear before the run ends (the verbose dump and
/// the output of a failed driver) are rendered to `out` as they happen.
pub fn convert(opts: &ConvertOptions, out: &mut dyn Output) -> Result<ConvertReport> {
    let config = driver_config(opts)?;
    let program = DriverSynthesizer::new(&config).render();

    let struct_count = config.structs().len();
    let package_count = config.packages().len();
    let report = |result| ConvertReport {
        target: opts.target.clone(),
        struct_count,
        package_count,
        result,
    };

    if opts.dry_run {
        return Ok(report(ConvertResult::Preview {
            source: program.into_source(),
        }));
    }

    let driver = DriverFile::persist(program.source())?;

    if opts.verbose {
        DriverDump {
            path: driver.to_path_buf(),
            source: driver.read_back()?,
        }
        .render(out);
    }

    let run = opts.toolchain.run(driver.path())?;
    if !run.status.success() {
        ExecutionFailure { output: run.output }.render(out);
        return Err(Box::new(Error::Execution {
            driver: driver.to_path_buf(),
            status: run.status.to_string(),
            code: run.status.code(),
        }));
    }

    tracing::info!(target_file = %opts.target, structs = struct_count, "driver finished");
    let output = Some(run.output).filter(|o| opts.verbose && !o.trim().is_empty());
    Ok(report(ConvertResult::Written { output }))
}

/// Scan inputs, resolve packages and assemble the driver configuration.
fn driver_config(opts: &ConvertOptions) -> Result<DriverConfig> {
    let mut resolver = PackageAliasResolver::new(opts.package.as_str());
    let structs = StructReferenceBuilder::new(&mut resolver).build(&opts.inputs)?;
    let packages = resolver.into_aliases();
    tracing::debug!(
        structs = structs.len(),
        packages = packages.len(),
        "resolved struct references"
    );

    Ok(DriverConfig::builder(opts.target.as_str())
        .create_interface(opts.interface)
        .backup_dir(&opts.backup)
        .custom_imports(opts.imports.iter().cloned())
        .packages(packages)
        .structs(structs)
        .extra_imports(read_snippet(opts.extra_imports.as_deref())?)
        .extra_commands(read_snippet(opts.extra_commands.as_deref())?)
        .build())
}

fn read_snippet(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::io("read", path, e)),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tscriptify_core::classify_inputs;

    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    fn options(temp: &TempDir, inputs: &[&str]) -> ConvertOptions {
        ConvertOptions {
            package: "github.com/acme/shop".to_string(),
            target: temp.path().join("models.ts").display().to_string(),
            inputs: classify_inputs(inputs),
            extra_imports: None,
            extra_commands: None,
            backup: String::new(),
            interface: false,
            imports: Vec::new(),
            verbose: false,
            dry_run: true,
            toolchain: GoToolchain::new("go"),
        }
    }

    fn preview_source(report: ConvertReport) -> String {
        match report.result {
            ConvertResult::Preview { source } => source,
            other => panic!("expected preview, got {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_renders_without_running() {
        let temp = TempDir::new().unwrap();
        let model = temp.path().join("user.go");
        fs::write(&model, "package models\n\ntype User struct{}\n").unwrap();

        let mut opts = options(&temp, &["Money"]);
        opts.inputs.push(InputSpec::SourceFile(model));
        opts.toolchain = GoToolchain::new(temp.path().join("missing-go").display().to_string());

        let mut out = RecordingOutput::default();
        let report = convert(&opts, &mut out).unwrap();

        assert_eq!(report.struct_count, 2);
        assert_eq!(report.package_count, 1);
        assert!(out.lines.is_empty());
        let source = preview_source(report);
        assert!(source.contains("\tt.Add(Money{})\n\tt.Add(m0.User{})\n"));
        assert!(source.contains("\tt.BackupDir = \"\"\n"));
    }

    #[test]
    fn test_snippets_are_read_from_files() {
        let temp = TempDir::new().unwrap();
        let imports = temp.path().join("imports.txt");
        let commands = temp.path().join("commands.txt");
        fs::write(&imports, "\t\"time\"\n").unwrap();
        fs::write(&commands, "\tt.Add(time.Time{})\n").unwrap();

        let mut opts = options(&temp, &[]);
        opts.extra_imports = Some(imports);
        opts.extra_commands = Some(commands);

        let source = preview_source(convert(&opts, &mut RecordingOutput::default()).unwrap());
        assert!(source.contains("typescriptify\"\n\t\"time\"\n)"));
        assert!(source.contains("\tt.Add(time.Time{})\n\terr := t.ConvertToFile("));
    }

    #[test]
    fn test_missing_snippet_is_io_error() {
        let temp = TempDir::new().unwrap();
        let mut opts = options(&temp, &[]);
        opts.extra_commands = Some(temp.path().join("missing.txt"));

        let err = convert(&opts, &mut RecordingOutput::default()).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_error_aborts_before_rendering() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.go");
        fs::write(&broken, "package models\n\ntype Broken struct {\n").unwrap();

        let mut opts = options(&temp, &[]);
        opts.inputs.push(InputSpec::SourceFile(broken));

        let err = convert(&opts, &mut RecordingOutput::default()).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[cfg(unix)]
    mod execution {
        use std::os::unix::fs::PermissionsExt;

        use super::*;

        fn fake_go(temp: &TempDir, body: &str) -> GoToolchain {
            let path = temp.path().join("fake-go");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            GoToolchain::new(path.display().to_string())
        }

        #[test]
        fn test_failed_driver_output_is_rendered_before_error() {
            let temp = TempDir::new().unwrap();
            let mut opts = options(&temp, &["Money"]);
            opts.dry_run = false;
            opts.toolchain = fake_go(&temp, "echo 'undefined: Money'\nexit 2");

            let mut out = RecordingOutput::default();
            let err = convert(&opts, &mut out).unwrap_err();

            assert_eq!(out.lines, vec!["undefined: Money\n".to_string()]);
            assert!(matches!(*err, Error::Execution { code: Some(2), .. }));
            assert_eq!(err.exit_code(), 2);
        }

        #[test]
        fn test_verbose_dumps_persisted_driver() {
            let temp = TempDir::new().unwrap();
            let copy = temp.path().join("seen.go");
            let mut opts = options(&temp, &["Money"]);
            opts.dry_run = false;
            opts.verbose = true;
            opts.toolchain = fake_go(&temp, &format!("cp \"$2\" '{}'", copy.display()));

            let mut out = RecordingOutput::default();
            let report = convert(&opts, &mut out).unwrap();

            assert!(out.lines[1].starts_with("Compiling generated code ("));
            let seen = fs::read_to_string(&copy).unwrap();
            assert_eq!(out.lines[2], seen);
            assert!(seen.contains("\tt.Add(Money{})\n"));
            assert!(matches!(report.result, ConvertResult::Written { output: None }));
        }
    }
}
