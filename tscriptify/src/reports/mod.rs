//! Report data structures for the convert command.
//!
//! Operations build reports, then render them to an Output target.

mod convert;
pub(crate) mod output;

pub use convert::{ConvertReport, ConvertResult, DriverDump, ExecutionFailure};
pub use output::{Output, Report, TerminalOutput};
