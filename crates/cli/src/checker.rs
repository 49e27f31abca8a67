// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the selected strategy and folds every invocation into a verdict.

use std::path::PathBuf;

use crate::batch::{Batching, CommandLines};
use crate::debug::DebugLog;
use crate::error::Result;
use crate::files::PhpFiles;
use crate::helper::{self, HelperScript};
use crate::launcher::{Invocation, Launcher, StdoutMode};
use crate::options::Options;
use crate::strategy::{self, Strategy};
use crate::verdict::{Outcome, RunVerdict};
use crate::version::PhpVersion;

/// Drives one check run over a [`Launcher`].
pub struct Checker<'a, L> {
    options: &'a Options,
    launcher: L,
    debug: DebugLog,
}

impl<'a, L: Launcher> Checker<'a, L> {
    pub fn new(options: &'a Options, launcher: L) -> Self {
        Self {
            options,
            launcher,
            debug: DebugLog::new(options.debug),
        }
    }

    /// Check every file with `strategy`.
    ///
    /// `ceiling` is only called for packed lint runs. A failing invocation
    /// does not stop the run; only launcher errors do.
    pub fn run(
        &mut self,
        strategy: &Strategy,
        version: PhpVersion,
        ceiling: impl FnOnce() -> usize,
    ) -> Result<RunVerdict> {
        match strategy {
            Strategy::Aggregate { include, exclude } => {
                self.debug.log("Using opcache to check the files");
                self.aggregate(version, include, exclude)
            }
            Strategy::LintPacked => {
                self.debug
                    .log("Using php -l to check the files (many at once)");
                let batching = strategy.batching(ceiling).unwrap_or(Batching::PerFile);
                self.lint(version, batching)
            }
            Strategy::LintPerFile => {
                self.debug
                    .log("Using php -l to check the files (one by one)");
                self.lint(version, Batching::PerFile)
            }
        }
    }

    pub fn into_launcher(self) -> L {
        self.launcher
    }

    fn lint(&mut self, version: PhpVersion, batching: Batching) -> Result<RunVerdict> {
        let prefix = strategy::lint_prefix(&self.options.php, version);
        let mut files = PhpFiles::new(
            &self.options.directory,
            &self.options.include,
            &self.options.exclude,
        );

        let mut verdict = RunVerdict::new();
        for line in CommandLines::new(files.by_ref(), prefix, batching) {
            tracing::debug!(files = line.files().len(), "executing: {}", line);
            self.debug.log(&format!("Executing: {}", line));
            let completion = self.launcher.launch(&Invocation::shell(&line))?;
            let outcome = Outcome::classify(&completion);
            if outcome != Outcome::Ok {
                tracing::debug!(?completion, "invocation reported {:?}", outcome);
            }
            verdict = verdict.record(outcome);
        }

        let stats = files.stats();
        if stats.walk_errors > 0 {
            tracing::debug!(walk_errors = stats.walk_errors, "parts of the tree were not read");
            verdict = verdict.record(Outcome::Errors);
        }
        Ok(verdict.with_counts(stats.files_provided, stats.items_skipped))
    }

    fn aggregate(
        &mut self,
        version: PhpVersion,
        include: &[PathBuf],
        exclude: &[PathBuf],
    ) -> Result<RunVerdict> {
        let script = HelperScript::materialize()?;
        let args = strategy::aggregate_args(version, script.path(), include, exclude);
        let invocation = Invocation::direct(self.options.php.clone(), args, StdoutMode::Inherit);
        self.debug.log(&format!(
            "Executing: {} {}",
            invocation.program,
            invocation.args.join(" ")
        ));
        tracing::debug!("executing helper: {:?}", invocation);

        let completion = self.launcher.launch(&invocation)?;
        if let Some(reason) = helper::describe_exit(completion.exit_code) {
            tracing::warn!("opcache checker failed: {}", reason);
            self.debug.log(&format!("The opcache checker failed: {}", reason));
        }
        Ok(RunVerdict::new().record(Outcome::classify(&completion)))
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
