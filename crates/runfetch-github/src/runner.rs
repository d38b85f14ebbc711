use crate::error::{Error, Result};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Environment overrides applied to every spawn so the tool emits plain,
/// parseable text.
const DEFAULT_ENV_OVERRIDES: [(&str, &str); 2] = [("NO_COLOR", "true"), ("CLICOLOR_FORCE", "0")];

#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    env_overrides: Vec<(String, String)>,
}

impl CommandRunner {
    pub fn new(program: String) -> Self {
        Self {
            program,
            env_overrides: DEFAULT_ENV_OVERRIDES
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn with_env_overrides(mut self, env_overrides: Vec<(String, String)>) -> Self {
        self.env_overrides = env_overrides;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program to completion and return captured stdout.
    pub async fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<String> {
        debug!("Running command: {} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(args);
        for (key, value) in &self.env_overrides {
            command.env(key, value);
        }
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                command: self.command_line(args),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // gh emits a UTF-8 BOM on some platforms; strip it before parsing.
        Ok(stdout.trim_start_matches('\u{feff}').to_string())
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh() -> CommandRunner {
        CommandRunner::new("sh".to_string())
    }

    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let out = sh().run(&script("printf 'hello world'"), None).await.unwrap();
        assert_eq!(out, "hello world");
    }

    #[tokio::test]
    async fn test_run_strips_utf8_bom() {
        let out = sh()
            .run(&script("printf '\\357\\273\\277[]'"), None)
            .await
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[tokio::test]
    async fn test_nonzero_exit_reports_code_command_and_stderr() {
        let err = sh()
            .run(&script("echo 'rate limited' >&2; exit 4"), None)
            .await
            .unwrap_err();

        match &err {
            Error::CommandFailed {
                code,
                command,
                stderr,
            } => {
                assert_eq!(*code, 4);
                assert!(command.starts_with("sh -c"));
                assert!(stderr.contains("rate limited"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let message = err.to_string();
        assert!(message.contains("4"));
        assert!(message.contains("rate limited"));
    }

    #[tokio::test]
    async fn test_env_overrides_reach_the_child() {
        let out = sh()
            .run(&script("printf '%s:%s' \"$NO_COLOR\" \"$CLICOLOR_FORCE\""), None)
            .await
            .unwrap();
        assert_eq!(out, "true:0");
    }

    #[tokio::test]
    async fn test_custom_env_overrides() {
        let runner = sh().with_env_overrides(vec![("GREETING".to_string(), "hi".to_string())]);
        let out = runner
            .run(&script("printf '%s' \"$GREETING\""), None)
            .await
            .unwrap();
        assert_eq!(out, "hi");
    }

    #[tokio::test]
    async fn test_cwd_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "from cwd").unwrap();

        let out = sh()
            .run(&script("cat marker.txt"), Some(dir.path()))
            .await
            .unwrap();
        assert_eq!(out, "from cwd");
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let runner = CommandRunner::new("definitely-not-installed-anywhere".to_string());
        let err = runner.run(&[], None).await.unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-installed-anywhere"));
    }
}
