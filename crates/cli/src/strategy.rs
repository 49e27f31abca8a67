// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checking strategy selection.
//!
//! | Interpreter      | duplicated names | Strategy       |
//! |------------------|------------------|----------------|
//! | PHP >= 8.3       | any              | `php -l` packed |
//! | PHP <  8.3       | supported        | `php -l` per file |
//! | PHP <  8.3       | not supported    | OPcache helper |
//!
//! Before 8.3 `php -l` only checks its first argument, and compiling many
//! files in one process fails as soon as two of them declare the same class.

use std::path::{Path, PathBuf};

use crate::batch::Batching;
use crate::escape::escape_argument;
use crate::options::Options;
use crate::version::PhpVersion;

/// First release where `php -l` accepts several files.
pub const MULTI_FILE_LINT: PhpVersion = PhpVersion::new(8, 3, 0);

/// First release bundling OPcache.
pub const OPCACHE_BUNDLED: PhpVersion = PhpVersion::new(5, 5, 0);

/// First release with the OPcache JIT.
pub const OPCACHE_JIT: PhpVersion = PhpVersion::new(8, 0, 0);

/// How the files of a run get checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// `php -l` over command lines packed up to the length ceiling.
    LintPacked,
    /// `php -l` with one file per invocation.
    LintPerFile,
    /// One run of the helper script, which walks and compiles everything.
    Aggregate {
        include: Vec<PathBuf>,
        exclude: Vec<PathBuf>,
    },
}

impl Strategy {
    /// Pick the strategy for an interpreter version and the run options.
    pub fn select(version: PhpVersion, options: &Options) -> Self {
        if version >= MULTI_FILE_LINT {
            Strategy::LintPacked
        } else if options.support_duplicated_names {
            Strategy::LintPerFile
        } else {
            Strategy::Aggregate {
                include: options.include.clone(),
                exclude: options.exclude.clone(),
            }
        }
    }

    /// Batching for the lint strategies; `None` for the helper.
    pub fn batching(&self, ceiling: impl FnOnce() -> usize) -> Option<Batching> {
        match self {
            Strategy::LintPacked => {
                let ceiling = i64::try_from(ceiling()).unwrap_or(i64::MAX);
                Some(Batching::from_ceiling(ceiling))
            }
            Strategy::LintPerFile => Some(Batching::PerFile),
            Strategy::Aggregate { .. } => None,
        }
    }
}

/// Fixed part of every `php -l` command line.
pub fn lint_prefix(php: &str, version: PhpVersion) -> String {
    let mut prefix = format!(
        "{} -n -d display_errors=stderr -d error_reporting=-1",
        escape_argument(php)
    );
    if version >= OPCACHE_BUNDLED {
        prefix.push_str(" -d opcache.enable_cli=0");
    }
    prefix.push_str(" -l");
    prefix
}

/// Arguments for the helper run: flags, script, then `+include` and
/// `-exclude` entries.
pub fn aggregate_args(
    version: PhpVersion,
    helper: &Path,
    include: &[PathBuf],
    exclude: &[PathBuf],
) -> Vec<String> {
    let mut args = vec!["-d".to_string(), "opcache.enable_cli=1".to_string()];
    if version >= OPCACHE_JIT {
        args.push("-d".to_string());
        args.push("opcache.jit=disable".to_string());
    }
    args.push(helper.to_string_lossy().into_owned());
    args.extend(include.iter().map(|f| format!("+{}", f.display())));
    args.extend(exclude.iter().map(|f| format!("-{}", f.display())));
    args
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
