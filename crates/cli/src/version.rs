// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter version detection.

use std::fmt;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// `PHP_VERSION_ID` layout: major, then two digits each for minor and patch.
#[allow(clippy::expect_used)]
static VERSION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<major>[1-9][0-9]*)(?<minor>[0-9]{2})(?<patch>[0-9]{2})$").expect("valid regex")
});

/// Detected interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhpVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PhpVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the output of `echo PHP_VERSION_ID;` (e.g. `80312` → 8.3.12).
    pub fn parse_version_id(output: &str) -> Result<Self> {
        let trimmed = output.trim();
        let parse_error = || Error::VersionParse {
            output: output.to_string(),
        };
        let caps = VERSION_ID.captures(trimmed).ok_or_else(parse_error)?;
        let group = |name: &str| -> Result<u32> {
            caps.name(name)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(parse_error)
        };
        Ok(Self::new(group("major")?, group("minor")?, group("patch")?))
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Ask the interpreter for its version, without loading any php.ini.
pub fn probe(php: &str) -> Result<PhpVersion> {
    tracing::debug!("probing version of {}", php);
    let output = Command::new(php)
        .args(["-n", "-r", "echo PHP_VERSION_ID;"])
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Error::Spawn {
            program: php.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    PhpVersion::parse_version_id(&stdout).map_err(|err| {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            err
        } else {
            Error::VersionParse {
                output: format!("{}\n{}", stdout.trim(), stderr),
            }
        }
    })
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
