// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for phpcheck.toml and option precedence.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_file_sets_options() {
    let temp = Project::clean();
    temp.file("vendor/Broken.php", "<?php SYNTAX_ERROR\n");
    temp.config("[check]\nexclude = [\"vendor\"]\ndebug = true\n");

    check(&temp)
        .passes()
        .stdout_has("Input options:")
        .stdout_has("Number of items skipped: 1");
}

#[test]
fn command_line_overrides_config_file() {
    let temp = Project::clean();
    temp.file("legacy.php", "<?php DEPRECATED\n");
    temp.config("[check]\nfail_on_warnings = true\n");

    check(&temp)
        .args(&["--fail-on-warnings", "no"])
        .passes()
        .stdout_has("WARNINGS FOUND.");
}

#[test]
fn config_file_is_found_from_parent_directory() {
    let temp = Project::empty();
    temp.file(".git/HEAD", "ref: refs/heads/main\n");
    temp.file("app/index.php", "<?php DEPRECATED\n");
    temp.config("[check]\nfail_on_warnings = true\n");

    check(&temp).args(&["--directory", "app"]).fails();
}

#[test]
fn explicit_config_path() {
    let temp = Project::clean();
    temp.file("legacy.php", "<?php DEPRECATED\n");
    let path = temp.sidecar("ci.toml");
    std::fs::write(&path, "version = 1\n[check]\nfail_on_warnings = true\n").unwrap();

    check(&temp)
        .env("PHPCHECK_CONFIG", path.to_str().unwrap())
        .fails();
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = Project::clean();

    check(&temp)
        .args(&["-C", "missing.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unknown_config_key_warns() {
    let temp = Project::clean();
    temp.config("[check]\nparallel = 4\n");

    check(&temp)
        .passes()
        .stderr_has("unrecognized field `check.parallel`");
}

#[test]
fn unsupported_config_version_fails() {
    let temp = Project::clean();
    temp.config("version = 2\n");

    check(&temp)
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn config_timeout_applies() {
    let temp = Project::empty();
    temp.file("slow.php", "<?php SLEEP\n");
    temp.config("[check]\ntimeout = \"200ms\"\n");

    check(&temp).fails().stderr_has("Command timed out after 200ms");
}
