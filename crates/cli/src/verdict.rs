// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation outcomes and their reduction into a run verdict.

use serde::Serialize;

use crate::error::ExitCode;
use crate::launcher::Completion;

/// Classification of one interpreter invocation, ordered by severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Ok,
    Warnings,
    Errors,
}

impl Outcome {
    /// Non-zero exit is an error; a clean exit with diagnostics is a warning.
    pub fn classify(completion: &Completion) -> Self {
        if !completion.success() {
            Outcome::Errors
        } else if completion.stderr_bytes > 0 {
            Outcome::Warnings
        } else {
            Outcome::Ok
        }
    }
}

/// Fold outcomes into the most severe one; empty input is `Ok`.
pub fn reduce<I: IntoIterator<Item = Outcome>>(outcomes: I) -> Outcome {
    outcomes.into_iter().fold(Outcome::Ok, Outcome::max)
}

/// Run-wide accumulator.
///
/// Severity only increases and counters only grow; the value is threaded
/// through the run and finalized when the file sequence is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunVerdict {
    pub severity: Outcome,
    pub files_processed: usize,
    pub items_skipped: usize,
    pub invocations: usize,
}

impl RunVerdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one invocation outcome in.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        Self {
            severity: self.severity.max(outcome),
            invocations: self.invocations + 1,
            ..self
        }
    }

    /// Add enumerator counters.
    #[must_use]
    pub fn with_counts(self, files_processed: usize, items_skipped: usize) -> Self {
        Self {
            files_processed: self.files_processed + files_processed,
            items_skipped: self.items_skipped + items_skipped,
            ..self
        }
    }

    /// Map the final severity to the process exit code.
    pub fn exit_code(&self, fail_on_warnings: bool) -> ExitCode {
        match self.severity {
            Outcome::Ok => ExitCode::Success,
            Outcome::Warnings if fail_on_warnings => ExitCode::CheckFailed,
            Outcome::Warnings => ExitCode::Success,
            Outcome::Errors => ExitCode::CheckFailed,
        }
    }

    /// Summary line for the final severity.
    pub fn headline(&self) -> &'static str {
        match self.severity {
            Outcome::Ok => "No errors found.",
            Outcome::Warnings => "WARNINGS FOUND.",
            Outcome::Errors => "ERRORS FOUND!",
        }
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
