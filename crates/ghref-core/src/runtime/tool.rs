//! Locating and running the wrapped scaffolding tool
//!
//! The tool inherits stdin/stdout/stderr and its exit code becomes ours.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::profile::ToolProfile;
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::process::Command as TokioCommand;

static CHILD_RUNNING: AtomicBool = AtomicBool::new(false);

/// Whether the wrapped tool is currently running (Ctrl+C belongs to it then)
pub fn child_running() -> bool {
    CHILD_RUNNING.load(Ordering::SeqCst)
}

/// The external program data files are forwarded to
#[derive(Debug, Clone)]
pub struct ScaffoldTool {
    program: String,
    display_name: String,
    install_hint: String,
}

impl ScaffoldTool {
    pub fn new(program: impl Into<String>, install_hint: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            display_name: program.clone(),
            program,
            install_hint: install_hint.into(),
        }
    }

    pub fn from_profile<P: ToolProfile>(profile: &P, settings: &Settings) -> Self {
        Self {
            display_name: profile.display_name().to_string(),
            ..Self::new(settings.program.clone(), profile.install_hint())
        }
    }

    fn not_found(&self) -> Error {
        Error::ToolNotFound {
            tool: self.program.clone(),
            hint: self.install_hint.clone(),
        }
    }

    /// Resolve the program on PATH
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|_| self.not_found())
    }

    /// Run the tool to completion and return its exit code
    pub async fn run(&self, args: &[OsString]) -> Result<i32> {
        let program = self.locate()?;
        println!(
            "{} {} {}",
            format!("Running {}:", self.display_name).dimmed(),
            self.program.yellow(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        CHILD_RUNNING.store(true, Ordering::SeqCst);
        let status = TokioCommand::new(&program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;
        CHILD_RUNNING.store(false, Ordering::SeqCst);

        match status {
            Ok(status) => Ok(exit_code(status)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(self.not_found()),
            Err(e) => Err(Error::Other(
                anyhow::Error::new(e).context(format!("Error running {}", self.display_name)),
            )),
        }
    }
}

/// Exit code of the child; termination by signal counts as failure
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_locate_existing_program() {
        let tool = ScaffoldTool::new("sh", "");
        assert!(tool.locate().is_ok());
    }

    #[test]
    fn test_locate_missing_program() {
        let tool = ScaffoldTool::new("ghref-no-such-tool-4821", "pip install it");
        match tool.locate().unwrap_err() {
            Error::ToolNotFound { tool, hint } => {
                assert_eq!(tool, "ghref-no-such-tool-4821");
                assert_eq!(hint, "pip install it");
            }
            other => panic!("expected ToolNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_propagates_exit_code() {
        let tool = ScaffoldTool::new("sh", "");
        assert_eq!(tool.run(&args(&["-c", "exit 0"])).await.unwrap(), 0);
        assert_eq!(tool.run(&args(&["-c", "exit 3"])).await.unwrap(), 3);
        assert!(!child_running());
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let tool = ScaffoldTool::new("ghref-no-such-tool-4821", "");
        assert!(matches!(
            tool.run(&[]).await,
            Err(Error::ToolNotFound { .. })
        ));
    }
}
