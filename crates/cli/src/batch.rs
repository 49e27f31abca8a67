// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greedy packing of file paths into command lines.
//!
//! Files are consumed lazily and in order. Each command line is the prefix
//! followed by as many escaped paths as fit strictly under the ceiling. A
//! line always carries at least one file, even when that file alone exceeds
//! the ceiling.

use std::fmt;
use std::path::PathBuf;

use crate::escape::escape_argument;

/// How many files one command line may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batching {
    /// One file per command line.
    PerFile,
    /// As many files as fit strictly under `ceiling` bytes.
    Packed { ceiling: usize },
}

impl Batching {
    /// Non-positive ceilings mean one file per command line.
    pub fn from_ceiling(ceiling: i64) -> Self {
        match usize::try_from(ceiling) {
            Ok(0) | Err(_) => Batching::PerFile,
            Ok(ceiling) => Batching::Packed { ceiling },
        }
    }

    fn fits(self, len: usize) -> bool {
        match self {
            Batching::PerFile => false,
            Batching::Packed { ceiling } => len < ceiling,
        }
    }
}

/// A ready-to-run command line and the files it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
    files: Vec<PathBuf>,
}

impl CommandLine {
    fn start(prefix: &str, token: &str, file: PathBuf) -> Self {
        let mut text = String::with_capacity(prefix.len() + 1 + token.len());
        text.push_str(prefix);
        text.push(' ');
        text.push_str(token);
        Self {
            text,
            files: vec![file],
        }
    }

    fn push(&mut self, token: &str, file: PathBuf) {
        self.text.push(' ');
        self.text.push_str(token);
        self.files.push(file);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Files covered, in input order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazy iterator of command lines over a file sequence.
pub struct CommandLines<I> {
    files: I,
    prefix: String,
    batching: Batching,
    pending: Option<CommandLine>,
}

impl<I> CommandLines<I>
where
    I: Iterator<Item = PathBuf>,
{
    pub fn new(files: I, prefix: impl Into<String>, batching: Batching) -> Self {
        Self {
            files,
            prefix: prefix.into(),
            batching,
            pending: None,
        }
    }
}

impl<I> Iterator for CommandLines<I>
where
    I: Iterator<Item = PathBuf>,
{
    type Item = CommandLine;

    fn next(&mut self) -> Option<CommandLine> {
        for file in self.files.by_ref() {
            let token = escape_argument(&file.to_string_lossy()).into_owned();
            match self.pending.take() {
                None => {
                    self.pending = Some(CommandLine::start(&self.prefix, &token, file));
                }
                Some(mut line) if self.batching.fits(line.len() + 1 + token.len()) => {
                    line.push(&token, file);
                    self.pending = Some(line);
                }
                Some(line) => {
                    self.pending = Some(CommandLine::start(&self.prefix, &token, file));
                    return Some(line);
                }
            }
        }
        self.pending.take()
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
