// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for checking a tree with `php -l`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// VERDICTS
// =============================================================================

#[test]
fn clean_tree_passes() {
    let temp = Project::clean();

    check(&temp).passes().stdout_eq(
        "Checking files with PHP 8.3.1\n\
         \n\
         Number of files processed: 2\n\
         Number of items skipped: 0\n\
         No errors found.\n",
    );
}

#[test]
fn syntax_error_fails() {
    let temp = Project::clean();
    temp.file("src/Broken.php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .fails()
        .stdout_has("Number of files processed: 3")
        .stdout_has("ERRORS FOUND!")
        .stderr_has("PHP Parse error:");
}

#[test]
fn warnings_pass_by_default() {
    let temp = Project::clean();
    temp.file("legacy.php", "<?php DEPRECATED\n");

    check(&temp)
        .passes()
        .stdout_has("WARNINGS FOUND.")
        .stderr_has("PHP Deprecated:");
}

#[test]
fn fail_on_warnings_flag_fails_run() {
    let temp = Project::clean();
    temp.file("legacy.php", "<?php DEPRECATED\n");

    check(&temp)
        .args(&["--fail-on-warnings"])
        .fails()
        .stdout_has("WARNINGS FOUND.");
}

#[test]
fn fail_on_warnings_action_input_fails_run() {
    let temp = Project::clean();
    temp.file("legacy.php", "<?php DEPRECATED\n");

    check(&temp)
        .env("INPUT_FAIL-ON-WARNINGS", "yes")
        .fails();
}

#[test]
fn errors_win_over_warnings() {
    let temp = Project::empty();
    temp.file("a.php", "<?php DEPRECATED\n");
    temp.file("b.php", "<?php SYNTAX_ERROR\n");

    check(&temp).fails().stdout_has("ERRORS FOUND!");
}

#[test]
fn empty_tree_passes_without_running_php() {
    let temp = Project::empty();
    temp.file("README.md", "# nothing to lint\n");
    let log = temp.sidecar("php.log");

    check(&temp)
        .env("FAKE_PHP_LOG", log.to_str().unwrap())
        .passes()
        .stdout_has("Number of files processed: 0")
        .stdout_has("No errors found.");

    // Only the version probe ran.
    assert_eq!(temp.logged("php.log").len(), 1);
}

// =============================================================================
// FILE SELECTION
// =============================================================================

#[test]
fn excluded_directories_are_skipped_and_counted() {
    let temp = Project::clean();
    temp.file("vendor/lib/Broken.php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .args(&["--exclude", "vendor/"])
        .passes()
        .stdout_has("Number of files processed: 2")
        .stdout_has("Number of items skipped: 1");
}

#[test]
fn newline_separated_excludes_from_action_input() {
    let temp = Project::clean();
    temp.file("vendor/Broken.php", "<?php SYNTAX_ERROR\n");
    temp.file("cache/Broken.php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .env("INPUT_EXCLUDE", "vendor\r\n\ncache\n")
        .passes()
        .stdout_has("Number of items skipped: 2");
}

#[test]
fn included_files_are_checked_whatever_their_name() {
    let temp = Project::clean();
    temp.file("bin/console", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .args(&["--include", "bin/console"])
        .fails()
        .stdout_has("Number of files processed: 3");
}

#[test]
fn hidden_and_ignored_files_are_checked() {
    let temp = Project::empty();
    temp.file(".gitignore", "generated/\n");
    temp.file("generated/Proxy.php", "<?php SYNTAX_ERROR\n");
    temp.file(".hidden/Tool.php", "<?php\n");

    check(&temp)
        .fails()
        .stdout_has("Number of files processed: 2");
}

#[test]
fn directory_option_changes_the_root() {
    let temp = Project::empty();
    temp.file("app/index.php", "<?php\n");
    temp.file("other/Broken.php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .args(&["--directory", "app"])
        .passes()
        .stdout_has("Number of files processed: 1");
}

#[test]
fn relative_interpreter_path_survives_directory_option() {
    let temp = Project::empty();
    temp.file("app/index.php", "<?php\n");
    std::fs::create_dir_all(temp.path().join("tools")).unwrap();
    std::os::unix::fs::symlink(fake_php(), temp.path().join("tools/php")).unwrap();

    let output = phpcheck_cmd()
        .args(["--php", "./tools/php", "--directory", "app"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("Number of files processed: 1"), "{stdout}");
    assert!(stdout.contains("No errors found."), "{stdout}");
}

#[test]
fn flag_like_file_names_are_linted_as_files() {
    let temp = Project::empty();
    temp.file("-v.php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .env("FAKE_PHP_LOG", temp.sidecar("php.log").to_str().unwrap())
        .fails()
        .stdout_has("ERRORS FOUND!");

    let log = temp.logged("php.log");
    assert!(log.iter().any(|l| l.ends_with(" -l ./-v.php")), "{log:?}");
}

#[test]
fn unreadable_directory_fails_the_run() {
    let temp = Project::clean();
    temp.file("locked/Hidden.php", "<?php\n");
    let locked = temp.path().join("locked");
    let mut perms = std::fs::metadata(&locked).unwrap().permissions();
    std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o000);
    std::fs::set_permissions(&locked, perms).unwrap();
    // root reads every directory regardless of its mode
    let readable = std::fs::read_dir(&locked).is_ok();

    let output = phpcheck_cmd()
        .arg("--php")
        .arg(fake_php())
        .current_dir(temp.path())
        .output()
        .unwrap();

    let mut perms = std::fs::metadata(&locked).unwrap().permissions();
    std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o755);
    std::fs::set_permissions(&locked, perms).unwrap();

    if readable {
        return;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "{stdout}");
    assert!(stdout.contains("ERRORS FOUND!"), "{stdout}");
    assert!(stderr.contains("phpcheck: cannot read"), "{stderr}");
}

#[test]
fn uppercase_extension_is_checked() {
    let temp = Project::empty();
    temp.file("LEGACY.PHP", "<?php SYNTAX_ERROR\n");
    temp.file(".php", "<?php SYNTAX_ERROR\n");

    check(&temp)
        .fails()
        .stdout_has("Number of files processed: 1");
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

#[test]
fn debug_prints_options_limits_and_commands() {
    let temp = Project::clean();

    check(&temp)
        .args(&["--debug"])
        .passes()
        .stdout_has("Input options:")
        .stdout_has("- support-duplicated-names: false")
        .stdout_has("Maximum length of command lines: ")
        .stdout_has("Using php -l to check the files (many at once)")
        .stdout_has("Executing: ");
}

#[test]
fn quiet_without_debug() {
    let temp = Project::clean();

    check(&temp)
        .passes()
        .stdout_lacks("Input options:")
        .stdout_lacks("Executing: ");
}

#[test]
fn no_color_output_has_no_escape_codes() {
    let temp = Project::clean();

    check(&temp)
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

#[test]
fn color_forces_escape_codes() {
    let temp = Project::clean();

    check(&temp).env("COLOR", "1").passes().stdout_has("\x1b[");
}

#[test]
fn log_env_enables_tracing() {
    let temp = Project::clean();

    check(&temp)
        .env("PHPCHECK_LOG", "debug")
        .passes()
        .stderr_has("DEBUG");
}

#[test]
fn timeout_kills_hanging_interpreter() {
    let temp = Project::empty();
    temp.file("slow.php", "<?php SLEEP\n");

    check(&temp)
        .args(&["--timeout", "300ms"])
        .fails()
        .stdout_has("ERRORS FOUND!")
        .stderr_has("Command timed out after 300ms");
}
