// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running phpcheck against temporary projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Variables a CI runner may set that would leak into the specs.
const AMBIENT_ENV: &[&str] = &[
    "GITHUB_ACTIONS",
    "PHPCHECK_CONFIG",
    "PHPCHECK_LOG",
    "NO_COLOR",
    "COLOR",
    "INPUT_DIRECTORY",
    "INPUT_INCLUDE",
    "INPUT_EXCLUDE",
    "INPUT_FAIL-ON-WARNINGS",
    "INPUT_SUPPORT-DUPLICATED-NAMES",
    "INPUT_DEBUG",
    "INPUT_PHP",
    "INPUT_TIMEOUT",
];

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command running the phpcheck binary with a clean environment
pub fn phpcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("phpcheck"));
    for name in AMBIENT_ENV {
        cmd.env_remove(name);
    }
    cmd
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The fake interpreter script
pub fn fake_php() -> PathBuf {
    fixture("bin/php")
}

/// Create a check builder running phpcheck inside `project`
pub fn check(project: &Project) -> CheckBuilder {
    CheckBuilder::new(project.path())
}

/// Fluent builder around one phpcheck run against the fake interpreter
pub struct CheckBuilder {
    dir: PathBuf,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    version_id: String,
}

#[allow(dead_code)]
impl CheckBuilder {
    fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            args: Vec::new(),
            envs: Vec::new(),
            version_id: "80301".to_string(),
        }
    }

    /// Make the fake interpreter report another `PHP_VERSION_ID`
    pub fn php_version_id(mut self, id: &str) -> Self {
        self.version_id = id.to_string();
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    fn command(self) -> Command {
        let mut cmd = phpcheck_cmd();
        cmd.arg("--php").arg(fake_php());
        cmd.args(&self.args);
        cmd.current_dir(&self.dir);
        cmd.env("FAKE_PHP_VERSION_ID", &self.version_id);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout matches predicate.
    ///
    /// ```ignore
    /// .stdout_has("ERRORS FOUND!")  // contains
    /// .stdout_has(predicates::str::is_match(r"processed: \d+").unwrap())
    /// ```
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary PHP project directory.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.file("src/a.php", "<?php echo 1;");
/// check(&temp).passes().stdout_has("No errors found.");
/// ```
pub struct Project {
    dir: tempfile::TempDir,
    aux: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            aux: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with two valid files
    pub fn clean() -> Self {
        let temp = Self::empty();
        temp.file("index.php", "<?php echo 'hello';\n");
        temp.file("src/Model.php", "<?php class Model {}\n");
        temp
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write phpcheck.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("phpcheck.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// A file outside the checked tree, for logs and explicit configs
    pub fn sidecar(&self, name: &str) -> PathBuf {
        self.aux.path().join(name)
    }

    /// Lines the fake interpreter logged to `sidecar(name)`
    pub fn logged(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.sidecar(name))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
