// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHP file enumeration.
//!
//! Yields the explicit include list first, then every `*.php` file found by
//! a depth-first walk of the root. Each directory lists its files before its
//! subdirectories, both by name. Excluded entries are counted and never
//! descended into. Paths are relative to the root; a path starting with `-`
//! or `+` is yielded as `./-x.php` so the interpreter never reads it as a
//! flag.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ignore::{Walk, WalkBuilder};

/// Counters available once iteration is done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Paths yielded, includes included.
    pub files_provided: usize,
    /// Walked entries matched by an exclude path.
    pub items_skipped: usize,
    /// Directories or entries the walk could not read.
    pub walk_errors: usize,
}

/// Lazy, single-pass sequence of files to check.
pub struct PhpFiles {
    root: PathBuf,
    include: std::vec::IntoIter<PathBuf>,
    walk: Walk,
    provided: usize,
    skipped: Arc<AtomicUsize>,
    walk_errors: usize,
}

impl PhpFiles {
    pub fn new(root: &Path, include: &[PathBuf], exclude: &[PathBuf]) -> Self {
        let skipped = Arc::new(AtomicUsize::new(0));
        let walk = {
            let root = root.to_path_buf();
            let exclude = exclude.to_vec();
            let skipped = Arc::clone(&skipped);
            WalkBuilder::new(&root)
                .standard_filters(false)
                .follow_links(false)
                .sort_by_file_path(|a, b| {
                    (is_directory(a), a.file_name()).cmp(&(is_directory(b), b.file_name()))
                })
                .filter_entry(move |entry| {
                    let Ok(relative) = entry.path().strip_prefix(&root) else {
                        return true;
                    };
                    if relative.as_os_str().is_empty() || !is_excluded(relative, &exclude) {
                        return true;
                    }
                    skipped.fetch_add(1, Ordering::Relaxed);
                    false
                })
                .build()
        };

        Self {
            root: root.to_path_buf(),
            include: include.to_vec().into_iter(),
            walk,
            provided: 0,
            skipped,
            walk_errors: 0,
        }
    }

    pub fn stats(&self) -> FileStats {
        FileStats {
            files_provided: self.provided,
            items_skipped: self.skipped.load(Ordering::Relaxed),
            walk_errors: self.walk_errors,
        }
    }

    fn next_walked(&mut self) -> Option<PathBuf> {
        for result in self.walk.by_ref() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    // Files below an unreadable entry are never checked.
                    tracing::warn!("walk error: {}", err);
                    eprintln!("phpcheck: cannot read {}", err);
                    self.walk_errors += 1;
                    continue;
                }
            };
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                continue;
            }
            if !is_php_file_name(entry.file_name().to_string_lossy().as_ref()) {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                return Some(relative.to_path_buf());
            }
        }
        None
    }
}

impl Iterator for PhpFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let next = self.include.next().or_else(|| self.next_walked())?;
        self.provided += 1;
        Some(not_a_flag(next))
    }
}

/// Directories sort after files; symlinks are not followed.
fn is_directory(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

/// Prefix `./` to a path the interpreter would parse as an option.
pub fn not_a_flag(path: PathBuf) -> PathBuf {
    let bytes = path.as_os_str().as_encoded_bytes();
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        Path::new(".").join(path)
    } else {
        path
    }
}

/// An entry is excluded when it equals an exclude path or lies below one.
pub fn is_excluded(relative: &Path, exclude: &[PathBuf]) -> bool {
    exclude.iter().any(|e| relative.starts_with(e))
}

/// `x.php`, `X.PHP`; a bare `.php` does not count.
pub fn is_php_file_name(name: &str) -> bool {
    name.len() > 4
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".php"))
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
