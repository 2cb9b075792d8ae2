use async_trait::async_trait;
use tokio::process::Command;

use crate::ports::{CommandRunner, SourceResult, SourceUnavailable};

/// Runs host utilities as child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> SourceResult<String> {
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| SourceUnavailable::new("command", format!("{}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceUnavailable::new(
                "command",
                format!("{} exited with {}: {}", program, output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout() {
        let out = ProcessRunner::new().run("echo", &["hello", "world"]).await.unwrap();
        assert_eq!(out, "hello world\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_unavailable() {
        let err = ProcessRunner::new().run("false", &[]).await.unwrap_err();
        assert_eq!(err.origin, "command");
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let result = ProcessRunner::new()
            .run("/nonexistent/bin/definitely-not-here", &[])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let out = ProcessRunner::new()
            .run("sh", &["-c", "printf 'ok line\\n\\377\\376 bad bytes\\n'"])
            .await
            .unwrap();
        assert_eq!(out, "ok line\n\u{fffd}\u{fffd} bad bytes\n");
    }
}
