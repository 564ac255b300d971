//! Convert command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// The driver program as persisted, shown before it runs in verbose mode.
#[derive(Debug)]
pub struct DriverDump {
    /// Where the driver was written.
    pub path: PathBuf,
    /// Program text read back from `path`.
    pub source: String,
}

impl Report for DriverDump {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.preformatted(&format!(
            "Compiling generated code ({}):",
            self.path.display()
        ));
        out.preformatted(&self.source);
        out.rule();
    }
}

/// Combined output of a driver that exited unsuccessfully.
#[derive(Debug)]
pub struct ExecutionFailure {
    pub output: String,
}

impl Report for ExecutionFailure {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.output);
    }
}

/// Report data from one conversion.
#[derive(Debug)]
pub struct ConvertReport {
    /// Target TypeScript file.
    pub target: String,
    /// Number of registered types.
    pub struct_count: usize,
    /// Number of imported model packages.
    pub package_count: usize,
    pub result: ConvertResult,
}

/// Outcome of a conversion.
#[derive(Debug)]
pub enum ConvertResult {
    /// The driver ran; `output` is what it printed, if anything.
    Written { output: Option<String> },
    /// Dry-run: the driver was rendered but not executed.
    Preview { source: String },
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        if self.struct_count == 0 {
            out.warning("no exported structs to register");
        }

        match &self.result {
            ConvertResult::Written { output } => {
                if let Some(output) = output {
                    out.preformatted(output);
                }
                out.key_value(
                    "Generated",
                    &format!(
                        "{} ({} types from {} packages)",
                        self.target, self.struct_count, self.package_count
                    ),
                );
            }
            ConvertResult::Preview { source } => {
                out.divider("driver.go");
                out.preformatted(source);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} types from {} packages would be written to {}",
                    self.struct_count, self.package_count, self.target
                ));
            }
        }
    }
}
