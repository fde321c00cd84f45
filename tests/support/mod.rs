//! Test support utilities for stackform integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory plus private config and
/// data directories. No process-global state is mutated — child
/// processes use `.current_dir()` and env overrides so tests can
/// safely run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Temporary home for config and data directories
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a stackform command with isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stackform").expect("failed to find stackform binary");
        cmd.env("STACKFORM_CONFIG_DIR", self.home.path().join("config"));
        cmd.env("STACKFORM_DATA_DIR", self.home.path().join("data"));
        cmd.env_remove("STACKFORM_SERVER");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `stackform keys`.
    pub fn keys(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("keys")
            .args(args)
            .output()
            .expect("failed to run stackform keys")
    }

    /// Shortcut for `stackform lang`.
    pub fn lang(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("lang")
            .args(args)
            .output()
            .expect("failed to run stackform lang")
    }

    /// Shortcut for `stackform generate` pointed at an unreachable server.
    ///
    /// The port is closed, so any test using this helper exercises
    /// only paths that must not issue a network request.
    pub fn generate_offline(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["generate", "--server", "http://127.0.0.1:9", "--out", "out"])
            .args(args)
            .output()
            .expect("failed to run stackform generate")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        stderr(output)
    );
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, stdout: {}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(
        out.contains(needle),
        "stdout missing {:?}:\n{}",
        needle,
        out
    );
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let err = stderr(output);
    assert!(
        err.contains(needle),
        "stderr missing {:?}:\n{}",
        needle,
        err
    );
}
