// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by phpcheck.
//!
//! The constants are generated by `build.rs` so clap attributes, the logger
//! and the color detection all agree on the spelling.

include!(concat!(env!("OUT_DIR"), "/env_names.rs"));

/// Whether the process runs inside a GitHub Actions job.
pub fn github_actions() -> bool {
    std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
