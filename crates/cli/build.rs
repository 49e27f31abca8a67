// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// A failing build script has nothing to recover from.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: disables color output (`1`).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (`1`).
pub const COLOR: &str = "COLOR";
/// Environment variable: set to `true` by GitHub Actions runners.
pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";
/// Environment variable: configures tracing log filter.
pub const PHPCHECK_LOG: &str = "PHPCHECK_LOG";
/// Environment variable: explicit config file path.
pub const PHPCHECK_CONFIG: &str = "PHPCHECK_CONFIG";
/// Environment variable: action input for the root directory.
pub const INPUT_DIRECTORY: &str = "INPUT_DIRECTORY";
/// Environment variable: action input for files checked before the walk.
pub const INPUT_INCLUDE: &str = "INPUT_INCLUDE";
/// Environment variable: action input for skipped paths.
pub const INPUT_EXCLUDE: &str = "INPUT_EXCLUDE";
/// Environment variable: action input for failing on warnings.
pub const INPUT_FAIL_ON_WARNINGS: &str = "INPUT_FAIL-ON-WARNINGS";
/// Environment variable: action input for duplicated class/function names.
pub const INPUT_SUPPORT_DUPLICATED_NAMES: &str = "INPUT_SUPPORT-DUPLICATED-NAMES";
/// Environment variable: action input for debug output.
pub const INPUT_DEBUG: &str = "INPUT_DEBUG";
/// Environment variable: action input for the interpreter executable.
pub const INPUT_PHP: &str = "INPUT_PHP";
/// Environment variable: action input for the per-invocation timeout.
pub const INPUT_TIMEOUT: &str = "INPUT_TIMEOUT";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
