//! Invocation of the Go toolchain on a persisted driver.

use std::{
    io::Read,
    path::Path,
    process::{Command, ExitStatus},
};

use tscriptify_core::{Error, Result};

/// Default toolchain binary.
pub const DEFAULT_GO: &str = "go";

/// Result of `go run` on a driver.
#[derive(Debug)]
pub struct RunOutput {
    pub status: ExitStatus,
    /// Standard output and standard error, interleaved as written.
    pub output: String,
}

/// Runs driver programs with `<program> run <file>`.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: String,
}

impl GoToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Compile and run `driver`, blocking until it exits.
    ///
    /// Both output streams of the child share one pipe, so the captured text
    /// keeps the order in which it was written.
    pub fn run(&self, driver: &Path) -> Result<RunOutput> {
        let spawn_error = |source: std::io::Error| {
            Box::new(Error::Spawn {
                program: self.program.clone(),
                source,
            })
        };

        let (mut reader, writer) = std::io::pipe().map_err(spawn_error)?;
        let mut child = {
            let mut cmd = Command::new(&self.program);
            cmd.arg("run")
                .arg(driver)
                .stdout(writer.try_clone().map_err(spawn_error)?)
                .stderr(writer);
            tracing::debug!(program = %self.program, driver = %driver.display(), "running driver");
            cmd.spawn().map_err(spawn_error)?
            // `cmd` drops here, closing our copies of the write end
        };

        let mut bytes = Vec::new();
        let read = reader.read_to_end(&mut bytes);
        let status = child.wait().map_err(spawn_error)?;
        read.map_err(spawn_error)?;

        tracing::debug!(%status, bytes = bytes.len(), "driver exited");
        Ok(RunOutput {
            status,
            output: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new(DEFAULT_GO)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{fs, os::unix::fs::PermissionsExt};

    use tempfile::TempDir;

    use super::*;

    fn fake_go(dir: &Path, body: &str) -> String {
        let path = dir.join("fake-go");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_run_passes_driver_path() {
        let temp = TempDir::new().unwrap();
        let go = fake_go(temp.path(), "echo \"$1 $2\"");

        let run = GoToolchain::new(go)
            .run(Path::new("/tmp/typescriptify_1.go"))
            .unwrap();

        assert!(run.status.success());
        assert_eq!(run.output, "run /tmp/typescriptify_1.go\n");
    }

    #[test]
    fn test_run_combines_streams_in_order() {
        let temp = TempDir::new().unwrap();
        let go = fake_go(temp.path(), "echo out1\necho err1 >&2\necho out2\nexit 4");

        let run = GoToolchain::new(go).run(Path::new("driver.go")).unwrap();

        assert!(!run.status.success());
        assert_eq!(run.status.code(), Some(4));
        assert_eq!(run.output, "out1\nerr1\nout2\n");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-go").display().to_string();

        let err = GoToolchain::new(missing)
            .run(Path::new("driver.go"))
            .unwrap_err();

        assert!(matches!(*err, Error::Spawn { .. }));
    }

    #[test]
    fn test_default_program_is_go() {
        assert_eq!(GoToolchain::default().program(), "go");
    }
}
