// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The OPcache checker script shipped inside the binary.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Source of the aggregate checker script.
pub const CHECKER_SCRIPT: &str = include_str!("../assets/checker.php");

/// Helper exit code: OPcache extension not loaded.
pub const EXIT_OPCACHE_MISSING: i32 = 2;

/// Helper exit code: OPcache loaded but disabled for the CLI.
pub const EXIT_OPCACHE_DISABLED: i32 = 3;

/// Helper exit code: malformed `+`/`-` argument.
pub const EXIT_INVALID_ARGUMENT: i32 = 4;

/// The script written to a temporary file, removed on drop.
pub struct HelperScript {
    file: NamedTempFile,
}

impl HelperScript {
    /// Write the script to a fresh `.php` file.
    pub fn materialize() -> Result<Self> {
        let io_error = |source| Error::Io {
            path: std::env::temp_dir(),
            source,
        };
        let mut file = tempfile::Builder::new()
            .prefix("phpcheck-")
            .suffix(".php")
            .tempfile()
            .map_err(io_error)?;
        file.write_all(CHECKER_SCRIPT.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Explain a helper exit code, when it is one of the reserved ones.
pub fn describe_exit(code: Option<i32>) -> Option<&'static str> {
    match code? {
        EXIT_OPCACHE_MISSING => Some("the OPcache extension is not installed"),
        EXIT_OPCACHE_DISABLED => Some("OPcache is disabled for the command line"),
        EXIT_INVALID_ARGUMENT => Some("the checker rejected an include or exclude path"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "helper_tests.rs"]
mod tests;
