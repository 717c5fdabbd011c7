//! Shared testing harness for `dayspace` integration tests.

use assert_cmd::Command;
use chrono::{Local, NaiveDate, TimeDelta};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Root of the temporary sandbox.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory used as the current directory for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dayspace` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `dayspace` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("dayspace").expect("Failed to locate dayspace binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Today's workspace name according to the local clock.
    pub(crate) fn today() -> String {
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    /// Workspace name for the local date `days` before today.
    pub(crate) fn days_ago(days: i64) -> String {
        let date: NaiveDate = Local::now().date_naive() - TimeDelta::days(days);
        date.format("%Y-%m-%d").to_string()
    }

    /// Create a directory under the work directory.
    pub(crate) fn make_dir(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a regular file under the work directory.
    pub(crate) fn make_file(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, "fixture").expect("Failed to write file");
        path
    }

    /// Assert that a directory exists under the work directory.
    pub(crate) fn assert_dir_exists(&self, name: &str) {
        let path = self.work_dir.join(name);
        assert!(path.is_dir(), "{} should exist", path.display());
    }

    /// Assert that nothing exists at `name` under the work directory.
    pub(crate) fn assert_not_exists(&self, name: &str) {
        let path = self.work_dir.join(name);
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
