// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles phpcheck.toml parsing with version validation and unknown key
//! warnings. Every `[check]` entry is optional; command-line flags and
//! action inputs take precedence over it.

pub mod duration;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "phpcheck.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Check settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// `[check]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CheckConfig {
    /// Files checked before the directory walk.
    #[serde(default)]
    pub include: Vec<String>,

    /// Paths (files or directory prefixes) skipped by the walk.
    #[serde(default)]
    pub exclude: Vec<String>,

    pub fail_on_warnings: Option<bool>,

    pub support_duplicated_names: Option<bool>,

    pub debug: Option<bool>,

    /// Interpreter executable.
    pub php: Option<String>,

    /// Per-invocation timeout (e.g. "30s").
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,
}

/// Config shape that captures unknown keys at both levels.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    check: Option<FlexibleCheck>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleCheck {
    #[serde(flatten)]
    known: CheckConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Known keys of the `[check]` table.
const KNOWN_CHECK_KEYS: &[&str] = &[
    "include",
    "exclude",
    "fail_on_warnings",
    "support_duplicated_names",
    "debug",
    "php",
    "timeout",
];

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (config, unknown) = parse(&content, path)?;
    for key in &unknown {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config content, returning it along with unrecognized keys.
pub fn parse(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown: Vec<String> = flexible.unknown.into_keys().collect();
    let check = match flexible.check {
        Some(check) => {
            unknown.extend(
                check
                    .unknown
                    .into_keys()
                    .filter(|k| !KNOWN_CHECK_KEYS.contains(&k.as_str()))
                    .map(|k| format!("check.{k}")),
            );
            check.known
        }
        None => CheckConfig::default(),
    };

    Ok((Config { version, check }, unknown))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "phpcheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
