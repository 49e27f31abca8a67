// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for the per-invocation timeout: `500ms`, `30s`, `1.5s`,
//! `2m`.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Unit suffixes and their length in nanoseconds; `ms` must precede `m` and `s`.
const UNITS: &[(&str, f64)] = &[("ms", 1e6), ("s", 1e9), ("m", 60e9)];

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (amount, scale) = UNITS
        .iter()
        .find_map(|(suffix, scale)| s.strip_suffix(suffix).map(|n| (n.trim(), *scale)))
        .ok_or_else(|| format!("invalid duration format: {s} (use 500ms, 30s or 2m)"))?;

    let amount: f64 = amount
        .parse()
        .map_err(|_| format!("invalid duration: {s}"))?;
    let nanos = (amount * scale).round();
    if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
        return Err(format!("invalid duration: {s}"));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

/// Deserialize an optional duration string.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_duration(&s))
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
