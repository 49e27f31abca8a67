// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing debug output.
//!
//! Enabled with `--debug` or the `debug` action input. Lines go to stdout so
//! they interleave with the run summary, while interpreter diagnostics keep
//! stderr to themselves.

/// Debug output logger. All output is conditional on debug mode.
#[derive(Debug, Clone, Copy)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a debug line to stdout.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            println!("{}", msg);
        }
    }

    /// Print a block of lines built lazily, only when enabled.
    pub fn log_with<F: FnOnce() -> Vec<String>>(&self, build: F) {
        if self.enabled {
            for line in build() {
                println!("{}", line);
            }
        }
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
