// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! phpcheck CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use phpcheck::color::resolve_color;
use phpcheck::debug::DebugLog;
use phpcheck::env;
use phpcheck::error::ExitCode;
use phpcheck::limits::Estimator;
use phpcheck::report::Reporter;
use phpcheck::{Checker, Cli, Options, ProcessLauncher, Strategy, version};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(env::PHPCHECK_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if env::github_actions() {
                println!("::error::{}", e);
            } else {
                eprintln!("phpcheck: {}", e);
            }
            match e.downcast_ref::<phpcheck::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let options = Options::resolve(&cli, &cwd)?;
    let debug = DebugLog::new(options.debug);
    options.log(&debug);

    let version = version::probe(&options.php)?;
    let mut reporter = Reporter::stdout(resolve_color());
    reporter.header(version)?;

    let strategy = Strategy::select(version, &options);
    tracing::debug!("strategy: {:?}", strategy);
    let launcher = ProcessLauncher::new(&options.directory, options.timeout);
    let mut checker = Checker::new(&options, launcher);
    let verdict = checker.run(&strategy, version, || {
        Estimator::default().estimate(&debug).value
    })?;

    let with_counts = !matches!(strategy, Strategy::Aggregate { .. });
    reporter.summary(&verdict, with_counts)?;
    Ok(verdict.exit_code(options.fail_on_warnings))
}
