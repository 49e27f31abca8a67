// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved run options.
//!
//! Merges command-line flags and action inputs with the optional
//! phpcheck.toml, validating everything before any subprocess runs.

use std::path::{Component, MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::cli::Cli;
use crate::config::{self, CheckConfig, duration::parse_duration};
use crate::debug::DebugLog;
use crate::discovery;
use crate::error::{Error, Result};

/// Default interpreter executable.
pub const DEFAULT_PHP: &str = "php";

/// Everything a run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Absolute root directory; every path below is relative to it.
    pub directory: PathBuf,
    pub include: Vec<PathBuf>,
    pub exclude: Vec<PathBuf>,
    pub fail_on_warnings: bool,
    pub support_duplicated_names: bool,
    pub debug: bool,
    pub php: String,
    pub timeout: Option<Duration>,
}

impl Options {
    /// Options rooted at `directory` with every setting at its default.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            include: Vec::new(),
            exclude: Vec::new(),
            fail_on_warnings: false,
            support_duplicated_names: false,
            debug: false,
            php: DEFAULT_PHP.to_string(),
            timeout: None,
        }
    }

    /// Resolve options from parsed arguments, relative to `cwd`.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self> {
        let directory = resolve_directory(cli.directory.as_deref(), cwd)?;

        let config_path = discovery::resolve_config(cli.config.as_deref(), &directory)?;
        let file = match &config_path {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                config::load(path)?.check
            }
            None => {
                tracing::debug!("no config found, using defaults");
                CheckConfig::default()
            }
        };

        let include = if cli.include.is_empty() {
            &file.include
        } else {
            &cli.include
        };
        let exclude = if cli.exclude.is_empty() {
            &file.exclude
        } else {
            &cli.exclude
        };

        let timeout = match cli.timeout.as_deref().map(str::trim) {
            Some("") | None => file.timeout,
            Some(raw) => Some(parse_duration(raw).map_err(|e| {
                Error::Argument(format!("Invalid timeout option: {e}"))
            })?),
        };

        let php = cli
            .php
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .or(file.php)
            .map_or_else(|| DEFAULT_PHP.to_string(), |p| interpreter(&p, cwd));

        Ok(Self {
            directory,
            include: relative_paths("include", include)?,
            exclude: relative_paths("exclude", exclude)?,
            fail_on_warnings: boolean(
                "fail-on-warnings",
                cli.fail_on_warnings.as_deref(),
                file.fail_on_warnings,
            )?,
            support_duplicated_names: boolean(
                "support-duplicated-names",
                cli.support_duplicated_names.as_deref(),
                file.support_duplicated_names,
            )?,
            debug: boolean("debug", cli.debug.as_deref(), file.debug)?,
            php,
            timeout,
        })
    }

    /// Print the resolved options when debugging.
    pub fn log(&self, debug: &DebugLog) {
        debug.log_with(|| {
            let mut lines = vec!["Input options:".to_string()];
            lines.push(format!("- directory: {}", json(&self.directory)));
            lines.push(format!("- include: {}", json(&self.include)));
            lines.push(format!("- exclude: {}", json(&self.exclude)));
            lines.push(format!("- fail-on-warnings: {}", self.fail_on_warnings));
            lines.push(format!(
                "- support-duplicated-names: {}",
                self.support_duplicated_names
            ));
            lines.push(format!("- php: {}", json(&self.php)));
            if let Some(timeout) = self.timeout {
                lines.push(format!("- timeout: {:?}", timeout));
            }
            lines
        });
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Parse a boolean-like option value.
///
/// An absent value falls back to `fallback`, then `false`.
pub fn boolean(name: &str, raw: Option<&str>, fallback: Option<bool>) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(fallback.unwrap_or(false));
    };
    let value = raw.trim().to_lowercase();
    match value.as_str() {
        "1" | "yes" | "y" | "true" | "t" | "on" => Ok(true),
        "0" | "no" | "n" | "false" | "f" | "off" | "" => Ok(false),
        _ => Err(Error::Argument(format!(
            "Invalid {name} option: \"{value}\" is not a boolean-like value"
        ))),
    }
}

/// Normalize a list of relative paths.
///
/// Entries may hold several newline separated paths. Blank lines are dropped,
/// `/` becomes the host separator and trailing separators are removed. A
/// leading separator is rejected.
pub fn relative_paths(name: &str, values: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in values.iter().flat_map(|v| v.lines()) {
        let line = line.trim().replace('/', MAIN_SEPARATOR_STR);
        if line.is_empty() {
            continue;
        }
        if line.starts_with(MAIN_SEPARATOR) || Path::new(&line).is_absolute() {
            return Err(Error::Argument(format!(
                "Invalid {name} option: \"{line}\" is an absolute path"
            )));
        }
        let line = line.trim_end_matches(MAIN_SEPARATOR);
        if !line.is_empty() {
            paths.push(PathBuf::from(line));
        }
    }
    Ok(paths)
}

/// Resolve and validate the root directory.
pub fn resolve_directory(raw: Option<&str>, cwd: &Path) -> Result<PathBuf> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty());
    let Some(raw) = raw else {
        return Ok(cwd.to_path_buf());
    };
    let normalized = raw.replace('/', MAIN_SEPARATOR_STR);
    let path = Path::new(&normalized);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let metadata = std::fs::metadata(&absolute).map_err(|_| {
        Error::Argument(format!(
            "Invalid directory option: \"{raw}\" does not exist"
        ))
    })?;
    if !metadata.is_dir() {
        return Err(Error::Argument(format!(
            "Invalid directory option: \"{raw}\" is not a directory"
        )));
    }
    Ok(without_cur_dir(&absolute))
}

/// Anchor a relative interpreter path to `cwd`.
///
/// Commands run from the root directory, so `./tools/php` must not depend on
/// it. Bare names like `php8.1` are left for `PATH` lookup.
pub fn interpreter(raw: &str, cwd: &Path) -> String {
    let has_separator = raw.contains('/') || raw.contains(MAIN_SEPARATOR);
    let path = Path::new(raw);
    if !has_separator || path.is_absolute() {
        return raw.to_string();
    }
    without_cur_dir(&cwd.join(path))
        .to_string_lossy()
        .into_owned()
}

/// Drop `.` components so paths print the way users typed them.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
