// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host platform family, used where command lines are built or sized.

/// Shell family the command lines are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `sh -c`, `getconf ARG_MAX`, single-quote escaping.
    Posix,
    /// `cmd /C`, fixed 8191 character limit, double-quote escaping.
    Windows,
}

impl Platform {
    /// Platform of the running binary.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Program and leading arguments that run a full command line string.
    pub fn shell(self) -> (&'static str, &'static str) {
        match self {
            Platform::Posix => ("sh", "-c"),
            Platform::Windows => ("cmd", "/C"),
        }
    }
}
