//! Common test utilities for Roster CLI tests.
//!
//! `TestEnv` owns an isolated working directory, home directory and data
//! directory, and runs the `roster` binary against them.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a Roster CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct TestEnv {
    root: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    pub fn write_data(&self, name: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).unwrap();
        fs::write(self.data_file(name), content).unwrap();
    }

    pub fn read_json(&self, name: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.data_file(name)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn command(&self) -> Command {
        let home = self.root.path().join("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
        cmd.current_dir(self.root.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("ROSTER_DATA_DIR")
            .env_remove("ROSTER_COLOR")
            .env_remove("ROSTER_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Run one command line given as separate words.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }

    /// Run the interactive prompt with `script` on stdin.
    pub fn session(&self, script: &str) -> TestResult {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(script.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap().into()
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Id from a `CREATED: <id> ...` line.
#[allow(dead_code)]
pub fn created_id(stdout: &str) -> String {
    stdout
        .trim()
        .strip_prefix("CREATED: ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| panic!("not a creation line: {stdout:?}"))
        .to_string()
}
