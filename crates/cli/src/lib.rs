// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! phpcheck: syntax-check every PHP file of a project with the least number
//! of interpreter processes.

pub mod batch;
pub mod checker;
pub mod cli;
pub mod color;
pub mod config;
pub mod debug;
pub mod discovery;
pub mod env;
pub mod error;
pub mod escape;
pub mod files;
pub mod helper;
pub mod launcher;
pub mod limits;
pub mod options;
pub mod platform;
pub mod report;
pub mod strategy;
pub mod verdict;
pub mod version;

pub use batch::{Batching, CommandLine, CommandLines};
pub use checker::Checker;
pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use launcher::{Completion, Invocation, Launcher, ProcessLauncher};
pub use options::Options;
pub use strategy::Strategy;
pub use verdict::{Outcome, RunVerdict};
pub use version::PhpVersion;
