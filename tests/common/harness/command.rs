//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `chrisnotes` binary.
///
/// The config file defaults to a path that does not exist and the API token
/// variable is cleared, so the developer's own setup never leaks in.
pub struct NotesCommand {
    args: Vec<String>,
    config: PathBuf,
    token: Option<String>,
    stdin: Option<String>,
}

impl NotesCommand {
    /// Creates a new command for the `chrisnotes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: PathBuf::from("/nonexistent/chrisnotes/config.toml"),
            token: None,
            stdin: None,
        }
    }

    /// Sets the `--data-dir` option.
    pub fn data_dir(mut self, path: &Path) -> Self {
        self.args.push("--data-dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `CHRISNOTES_CONFIG` at the given file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = path.to_path_buf();
        self
    }

    /// Sets `CHRISNOTES_API_TOKEN`.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Feeds text on stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("chrisnotes").expect("Failed to find chrisnotes binary");
        cmd.args(&self.args)
            .env("CHRISNOTES_CONFIG", &self.config)
            .env_remove("CHRISNOTES_API_TOKEN")
            .env_remove("RUST_LOG");
        if let Some(token) = &self.token {
            cmd.env("CHRISNOTES_API_TOKEN", token);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `new` command with content.
    pub fn new_note(self, content: &str) -> Self {
        self.args(["new", content])
    }

    /// Configures for the `show` command.
    pub fn show(self, note: &str) -> Self {
        self.args(["show", note])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Configures for the `toggle` command.
    pub fn toggle(self, note: &str, tag: &str) -> Self {
        self.args(["toggle", note, tag])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_data_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = NotesCommand::new().data_dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--data-dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotesCommand::new().ls().format_json();
        assert_eq!(cmd.get_args(), ["ls", "--format", "json"]);
    }
}
