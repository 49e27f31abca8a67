// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run header and summary printed on stdout.
//!
//! ```text
//! Checking files with PHP 8.3.1
//!
//! Number of files processed: 12
//! Number of items skipped: 1
//! No errors found.
//! ```

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::verdict::RunVerdict;
use crate::version::PhpVersion;

/// Writes the user-facing report.
pub struct Reporter<W> {
    out: W,
}

impl Reporter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self, version: PhpVersion) -> io::Result<()> {
        writeln!(self.out, "Checking files with PHP {}", version)?;
        self.out.flush()
    }

    /// Counters are omitted when the helper already printed its own.
    pub fn summary(&mut self, verdict: &RunVerdict, with_counts: bool) -> io::Result<()> {
        if with_counts {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Number of files processed: {}",
                verdict.files_processed
            )?;
            writeln!(self.out, "Number of items skipped: {}", verdict.items_skipped)?;
        }
        self.out.set_color(&scheme::outcome(verdict.severity))?;
        write!(self.out, "{}", verdict.headline())?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
