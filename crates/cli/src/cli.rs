// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Every option can also come from a GitHub Actions input (`INPUT_*`), so the
//! binary runs unchanged as an action step.

use std::path::PathBuf;

use clap::Parser;

use crate::env;

/// Syntax-check a tree of PHP files with the interpreter's own linter
#[derive(Debug, Parser)]
#[command(name = "phpcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = env::PHPCHECK_CONFIG)]
    pub config: Option<PathBuf>,

    /// Root directory to check (default: current directory)
    #[arg(short, long, env = env::INPUT_DIRECTORY, value_name = "DIR")]
    pub directory: Option<String>,

    /// File to check before the directory walk (repeatable, newline separated in env)
    #[arg(long, env = env::INPUT_INCLUDE, value_name = "PATH", value_delimiter = '\n')]
    pub include: Vec<String>,

    /// File or directory to skip (repeatable, newline separated in env)
    #[arg(long, env = env::INPUT_EXCLUDE, value_name = "PATH", value_delimiter = '\n')]
    pub exclude: Vec<String>,

    /// Fail when the interpreter reports warnings
    #[arg(long, env = env::INPUT_FAIL_ON_WARNINGS, value_name = "BOOL",
          num_args = 0..=1, default_missing_value = "true")]
    pub fail_on_warnings: Option<String>,

    /// The checked files may declare the same class or function more than once
    #[arg(long, env = env::INPUT_SUPPORT_DUPLICATED_NAMES, value_name = "BOOL",
          num_args = 0..=1, default_missing_value = "true")]
    pub support_duplicated_names: Option<String>,

    /// Print options, limits and every executed command
    #[arg(long, env = env::INPUT_DEBUG, value_name = "BOOL",
          num_args = 0..=1, default_missing_value = "true")]
    pub debug: Option<String>,

    /// PHP interpreter executable
    #[arg(long, env = env::INPUT_PHP, value_name = "PROGRAM")]
    pub php: Option<String>,

    /// Kill an interpreter invocation after this long (e.g. 30s, 2m)
    #[arg(long, env = env::INPUT_TIMEOUT, value_name = "DURATION")]
    pub timeout: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
