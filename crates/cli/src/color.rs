// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `NO_COLOR` set (any value) → no color
//! 2. `COLOR` set → color
//! 3. otherwise color only when stdout is a terminal

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env;

/// Resolve the color choice for stdout from the environment.
pub fn resolve_color() -> ColorChoice {
    choose(
        std::env::var_os(env::NO_COLOR).is_some(),
        std::env::var_os(env::COLOR).is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn choose(no_color: bool, color: bool, terminal: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if color {
        return ColorChoice::Always;
    }
    if !terminal {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Colors for the verdict line.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::verdict::Outcome;

    /// Green, yellow or red by severity.
    pub fn outcome(outcome: Outcome) -> ColorSpec {
        let color = match outcome {
            Outcome::Ok => Color::Green,
            Outcome::Warnings => Color::Yellow,
            Outcome::Errors => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
