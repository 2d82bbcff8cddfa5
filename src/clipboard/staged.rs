// SPDX-License-Identifier: MPL-2.0
//! Legacy copy command fed from a staging file.
//!
//! The payload is written to a temporary file in a scratch directory, the
//! file is handed to the command as a read-only stdin, and the file is
//! removed once the command has finished, whether it succeeded or not.

use super::{ClipboardError, CopyStrategy};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const STAGING_PREFIX: &str = "simvla-copy-";

/// Runs an external copy command such as `pbcopy` or `xclip`.
#[derive(Debug, Clone)]
pub struct StagedCommand {
    command: Vec<String>,
    scratch_dir: PathBuf,
}

impl StagedCommand {
    /// `command` is the program followed by its arguments.
    #[must_use]
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// The usual clipboard command for the current platform.
    #[must_use]
    pub fn platform_default() -> Self {
        Self::new(default_command())
    }

    /// Stages payloads in `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    fn stage(&self, text: &str) -> Result<tempfile::NamedTempFile, ClipboardError> {
        let mut staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempfile_in(&self.scratch_dir)
            .map_err(|e| ClipboardError::Staging(e.to_string()))?;
        staging
            .write_all(text.as_bytes())
            .and_then(|()| staging.flush())
            .map_err(|e| ClipboardError::Staging(e.to_string()))?;
        Ok(staging)
    }

    fn run(&self, program: &str, staged: &Path) -> Result<(), ClipboardError> {
        let stdin = File::open(staged).map_err(|e| ClipboardError::Staging(e.to_string()))?;
        let status = Command::new(program)
            .args(&self.command[1..])
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ClipboardError::Command(format!("{program}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Command(format!("{program}: {status}")))
        }
    }
}

impl CopyStrategy for StagedCommand {
    fn name(&self) -> &'static str {
        "staged-command"
    }

    fn is_available(&self) -> bool {
        self.program().is_some_and(program_exists)
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let program = self.program().ok_or(ClipboardError::Unavailable)?;
        let staging = self.stage(text)?;

        let result = self.run(program, staging.path());

        if let Err(err) = staging.close() {
            tracing::warn!(%err, "failed to remove clipboard staging file");
        }
        result
    }
}

#[cfg(target_os = "macos")]
fn default_command() -> Vec<String> {
    vec!["pbcopy".to_string()]
}

#[cfg(target_os = "windows")]
fn default_command() -> Vec<String> {
    vec!["clip".to_string()]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_command() -> Vec<String> {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec!["wl-copy".to_string()]
    } else {
        vec![
            "xclip".to_string(),
            "-selection".to_string(),
            "clipboard".to_string(),
        ]
    }
}

/// Looks the program up the way the shell would: paths are checked as-is,
/// bare names against every `PATH` entry.
fn program_exists(program: &str) -> bool {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file();
    }
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| {
        let full = dir.join(program);
        full.is_file() || (cfg!(windows) && full.with_extension("exe").is_file())
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).expect("read scratch dir").count()
    }

    #[test]
    fn successful_command_receives_payload_and_staging_is_removed() {
        let scratch = tempdir().expect("scratch");
        let sink = tempdir().expect("sink");
        let out = sink.path().join("clipboard.txt");
        let strategy = StagedCommand::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat > \"$0\"".to_string(),
            out.display().to_string(),
        ])
        .with_scratch_dir(scratch.path());

        assert!(strategy.is_available());
        strategy.write("hello").expect("copy succeeds");

        assert_eq!(fs::read_to_string(&out).expect("sink"), "hello");
        assert_eq!(entries(scratch.path()), 0);
    }

    #[test]
    fn non_zero_exit_is_failure_and_staging_is_removed() {
        let scratch = tempdir().expect("scratch");
        let strategy = StagedCommand::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "exit 3".to_string(),
        ])
        .with_scratch_dir(scratch.path());

        let err = strategy.write("hello").expect_err("command fails");
        assert!(matches!(err, ClipboardError::Command(_)));
        assert_eq!(entries(scratch.path()), 0);
    }

    #[test]
    fn missing_program_is_unavailable_and_fails_cleanly() {
        let scratch = tempdir().expect("scratch");
        let strategy = StagedCommand::new(vec!["simvla-no-such-copy-tool".to_string()])
            .with_scratch_dir(scratch.path());

        assert!(!strategy.is_available());
        assert!(matches!(
            strategy.write("hello"),
            Err(ClipboardError::Command(_))
        ));
        assert_eq!(entries(scratch.path()), 0);
    }

    #[test]
    fn empty_command_is_unavailable() {
        let strategy = StagedCommand::new(Vec::new());
        assert!(!strategy.is_available());
        assert_eq!(strategy.write("x"), Err(ClipboardError::Unavailable));
    }

    #[test]
    fn unwritable_scratch_dir_is_a_staging_error() {
        let scratch = tempdir().expect("scratch");
        let strategy = StagedCommand::new(vec!["sh".to_string()])
            .with_scratch_dir(scratch.path().join("missing"));

        assert!(matches!(
            strategy.write("x"),
            Err(ClipboardError::Staging(_))
        ));
    }
}
