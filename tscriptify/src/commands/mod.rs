use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tscriptify_core::{Error, classify_inputs};

use crate::{
    logging,
    ops::{self, ConvertOptions, GoToolchain, toolchain::DEFAULT_GO},
    reports::{Report, TerminalOutput},
    settings::Settings,
};

/// Extension trait for exiting on pipeline errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tscriptify_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let code = e.exit_code();
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(code);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tscriptify")]
#[command(version)]
#[command(about = "Generate TypeScript definitions from exported Go structs")]
pub(crate) struct Cli {
    /// Path of the package with models
    #[arg(short, long)]
    pub package: Option<String>,

    /// Target TypeScript file
    #[arg(short, long)]
    pub target: Option<String>,

    /// File containing extra imports to include in the generated program
    #[arg(long)]
    pub extra_imports: Option<PathBuf>,

    /// File containing extra commands to include in the generated program
    #[arg(long)]
    pub extra_commands: Option<PathBuf>,

    /// Directory where backup files are saved
    #[arg(long)]
    pub backup: Option<String>,

    /// Create interfaces (not classes)
    #[arg(long)]
    pub interface: bool,

    /// TypeScript import for a custom type; repeat for each import needed
    #[arg(long = "import", value_name = "IMPORT")]
    pub imports: Vec<String>,

    /// Print the generated program before running it
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file with defaults for any of the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Go toolchain binary used to run the generated program
    #[arg(long)]
    pub go: Option<String>,

    /// Print the generated program without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Go source files (*.go) and type names to convert
    #[arg(value_name = "STRUCT_OR_FILE")]
    pub inputs: Vec<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let settings = match &self.config {
            Some(path) => Settings::from_file(path).unwrap_or_exit(),
            None => Settings::default(),
        };
        logging::init(self.verbose || settings.verbose);

        let opts = self.options(settings).unwrap_or_exit();

        let mut out = TerminalOutput::new();
        let report = ops::convert(&opts, &mut out).unwrap_or_exit();
        report.render(&mut out);

        Ok(())
    }

    /// Merge flags over settings and validate the required values.
    fn options(&self, settings: Settings) -> tscriptify_core::Result<ConvertOptions> {
        let package = non_empty(self.package.clone(), settings.package)
            .ok_or_else(|| Error::validation("No package given"))?;
        let target = non_empty(self.target.clone(), settings.target)
            .ok_or_else(|| Error::validation("No target file"))?;

        let mut imports = settings.imports;
        imports.extend(self.imports.iter().cloned());

        Ok(ConvertOptions {
            package,
            target,
            inputs: classify_inputs(&self.inputs),
            extra_imports: self.extra_imports.clone().or(settings.extra_imports),
            extra_commands: self.extra_commands.clone().or(settings.extra_commands),
            backup: self.backup.clone().or(settings.backup).unwrap_or_default(),
            interface: self.interface || settings.interface,
            imports,
            verbose: self.verbose || settings.verbose,
            dry_run: self.dry_run,
            toolchain: GoToolchain::new(
                self.go
                    .clone()
                    .or(settings.go)
                    .unwrap_or_else(|| DEFAULT_GO.to_string()),
            ),
        })
    }
}

/// First non-empty value, preferring the command line.
fn non_empty(flag: Option<String>, setting: Option<String>) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .or(setting.filter(|v| !v.is_empty()))
}
