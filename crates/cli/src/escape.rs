// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell escaping for file paths embedded in command lines.

use std::borrow::Cow;

use crate::platform::Platform;

/// Escape `arg` for the host shell.
pub fn escape_argument(arg: &str) -> Cow<'_, str> {
    escape_for(arg, Platform::host())
}

/// Escape `arg` for the given platform's shell.
///
/// Tokens made only of `[a-zA-Z0-9_/.-]` come back unchanged. On Windows the
/// backslash separator counts as `/` for that test.
pub fn escape_for(arg: &str, platform: Platform) -> Cow<'_, str> {
    if is_shell_safe(arg, platform) {
        return Cow::Borrowed(arg);
    }
    match platform {
        Platform::Posix => shell_words::quote(arg),
        Platform::Windows => Cow::Owned(format!("\"{}\"", arg.replace('"', "\"\""))),
    }
}

/// Whether `arg` can be placed on a command line as-is.
pub fn is_shell_safe(arg: &str, platform: Platform) -> bool {
    !arg.is_empty()
        && arg.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(b, b'_' | b'/' | b'.' | b'-')
                || (b == b'\\' && platform == Platform::Windows)
        })
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
