// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Maximum command line length estimation.
//!
//! Computed once per run, and only when several files may share one
//! invocation. On POSIX hosts the kernel `ARG_MAX` is reduced by the size of
//! the environment block the child inherits:
//!
//! ```text
//! ceiling = ARG_MAX - env bytes - env vars * 4 - 2048
//! ```
//!
//! See <https://www.in-ulm.de/~mascheck/various/argmax/>.

use std::fmt;
use std::process::{Command, Stdio};

use crate::debug::DebugLog;
use crate::platform::Platform;

/// `cmd.exe` command line limit.
pub const WINDOWS_MAX_COMMAND_LINE: usize = 8191;

/// Smallest `ARG_MAX` POSIX allows; used whenever probing fails.
pub const POSIX_MIN_ARG_MAX: usize = 4096;

/// Upper bound for a probed ceiling.
///
/// The command line is passed to `sh -c` as a single argument, and Linux caps
/// a single argument at `MAX_ARG_STRLEN` (32 pages).
pub const MAX_SINGLE_ARGUMENT: usize = 128 * 1024;

/// Bookkeeping bytes per environment variable (pointer + terminator).
const ENV_VAR_OVERHEAD: usize = 4;

/// Headroom kept below the computed limit.
const SAFETY_MARGIN: usize = 2048;

/// Size of the environment block inherited by child processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvFootprint {
    /// Bytes of the environment serialized as `KEY=value` lines.
    pub bytes: usize,
    /// Number of variables.
    pub vars: usize,
}

impl EnvFootprint {
    /// Footprint of the current process environment.
    pub fn current() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    /// Footprint of an arbitrary set of variables.
    ///
    /// Matches the byte length of `env` output: one `KEY=value` per line,
    /// without a trailing newline.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<std::ffi::OsStr>,
        V: AsRef<std::ffi::OsStr>,
    {
        let mut footprint = Self::default();
        for (key, value) in vars {
            footprint.bytes += key.as_ref().len() + 1 + value.as_ref().len();
            footprint.vars += 1;
        }
        footprint.bytes += footprint.vars.saturating_sub(1);
        footprint
    }
}

/// How a ceiling was obtained, for debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Fixed `cmd.exe` limit.
    Windows,
    /// `ARG_MAX` minus the environment footprint.
    Probed {
        arg_max: usize,
        env: EnvFootprint,
        clamped: bool,
    },
    /// Probing failed; POSIX minimum.
    Fallback { reason: String },
}

/// Maximum length a constructed command line may reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ceiling {
    pub value: usize,
    pub derivation: Derivation,
}

impl Ceiling {
    fn fallback(reason: impl Into<String>) -> Self {
        Self {
            value: POSIX_MIN_ARG_MAX,
            derivation: Derivation::Fallback {
                reason: reason.into(),
            },
        }
    }
}

impl fmt::Display for Ceiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.derivation {
            Derivation::Windows => write!(f, "{} (fixed for Windows)", self.value),
            Derivation::Probed {
                arg_max,
                env,
                clamped,
            } => {
                write!(
                    f,
                    "{} ({} - {} - {} * {} - {})",
                    self.value, arg_max, env.bytes, env.vars, ENV_VAR_OVERHEAD, SAFETY_MARGIN
                )?;
                if *clamped {
                    write!(f, ", clamped to {}", MAX_SINGLE_ARGUMENT)?;
                }
                Ok(())
            }
            Derivation::Fallback { .. } => {
                write!(f, "{} (minimum as per POSIX specs)", self.value)
            }
        }
    }
}

/// Derive the POSIX ceiling from a probed `ARG_MAX` and the environment.
///
/// Any probe failure, or a non-positive result, yields [`POSIX_MIN_ARG_MAX`].
pub fn derive(arg_max: Result<i64, String>, env: EnvFootprint) -> Ceiling {
    let arg_max = match arg_max {
        Ok(value) if value >= 1 => value,
        Ok(value) => {
            return Ceiling::fallback(format!(
                "Failed to parse the output of getconf ARG_MAX ({value})"
            ));
        }
        Err(reason) => return Ceiling::fallback(reason),
    };

    let reserved = env
        .bytes
        .saturating_add(env.vars.saturating_mul(ENV_VAR_OVERHEAD))
        .saturating_add(SAFETY_MARGIN);
    let reserved = i64::try_from(reserved).unwrap_or(i64::MAX);
    let remaining = arg_max.saturating_sub(reserved);
    if remaining < 1 {
        return Ceiling::fallback("ARG_MAX seems too low");
    }

    let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
    let clamped = remaining > MAX_SINGLE_ARGUMENT;
    Ceiling {
        value: remaining.min(MAX_SINGLE_ARGUMENT),
        derivation: Derivation::Probed {
            arg_max: usize::try_from(arg_max).unwrap_or(usize::MAX),
            env,
            clamped,
        },
    }
}

/// Run `<getconf> ARG_MAX` and parse its output.
pub fn query_arg_max(getconf: &str) -> Result<i64, String> {
    let output = Command::new(getconf)
        .arg("ARG_MAX")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| format!("failed to run {getconf} ARG_MAX: {e}"))?;
    if !output.status.success() {
        return Err(format!(
            "{getconf} ARG_MAX exited with {}",
            output.status.code().unwrap_or(-1)
        ));
    }
    let raw = String::from_utf8_lossy(&output.stdout);
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| format!("Failed to parse the output of getconf ARG_MAX ({raw})"))
}

/// Command line length estimator.
pub struct Estimator {
    platform: Platform,
    getconf: String,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Platform::host())
    }
}

impl Estimator {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            getconf: "getconf".to_string(),
        }
    }

    /// Use a different `getconf` executable.
    pub fn with_getconf(mut self, getconf: impl Into<String>) -> Self {
        self.getconf = getconf.into();
        self
    }

    /// Compute the ceiling. Never fails; see [`derive`].
    pub fn estimate(&self, debug: &DebugLog) -> Ceiling {
        let ceiling = match self.platform {
            Platform::Windows => Ceiling {
                value: WINDOWS_MAX_COMMAND_LINE,
                derivation: Derivation::Windows,
            },
            Platform::Posix => derive(query_arg_max(&self.getconf), EnvFootprint::current()),
        };

        if let Derivation::Fallback { reason } = &ceiling.derivation {
            tracing::warn!("command line length probe failed: {}", reason);
            debug.log(&format!(
                "Failed to detect the maximum length of command lines: {}",
                reason
            ));
        }
        tracing::debug!("command line ceiling: {}", ceiling);
        debug.log(&format!("Maximum length of command lines: {}", ceiling));
        ceiling
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;
