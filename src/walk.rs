//! Parallel recursive directory traversal for `rubig`.
//!
//! This module handles:
//! - Depth-first recursion with parallel fan-out over sibling subdirectories
//!   using `rayon`
//! - One enumeration pass per directory, split into subdirectories and plain
//!   files (symlinks and special files are skipped, never followed)
//! - Tolerating enumeration failures: an unreadable level degrades to empty
//!   and is reported through the [`WarningSink`], never aborting the scan
//! - Cooperative cancellation via [`CancelFlag`], checked at the start of
//!   every recursive call
//!
//! The walker is generic over the aggregate type and the per-directory visit
//! function; it never computes sizes and never touches the tracker. That
//! policy lives entirely in the caller-supplied `visit` (see
//! [`crate::scan`]), which keeps the walker reusable and testable on its
//! own.
//!
//! Fan-out spawns one rayon task per subdirectory at every level. Logical
//! tasks are unbounded, but the rayon pool caps OS threads, and blocked
//! parents lend their thread to the pool via work stealing, so pathological
//! trees cost memory proportional to depth times fan-out, not threads.

use crate::cancel::CancelFlag;
use crate::sink::WarningSink;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively walks `dir`, aggregating bottom-up through `visit`.
///
/// For every reachable directory, `visit` is called exactly once with the
/// directory's path, the aggregates of its immediate subdirectories (in
/// enumeration order; `None` marks a child whose subtree was cancelled or
/// absent, and callers must treat that as zero contribution, not an error),
/// and the paths of the plain files directly inside it. All child recursions
/// complete before `visit` runs; that join is the per-directory barrier.
///
/// # Arguments
/// * `dir` - Directory to walk; if it cannot be enumerated it is treated as
///   having zero entries
/// * `visit` - Per-directory aggregation function supplied by the caller
/// * `cancel` - Shared cancellation signal; once triggered, no new
///   enumeration begins and the recursion unwinds with `None`
/// * `warnings` - Collaborator receiving tolerated failure messages
///
/// # Returns
/// * `Option<A>` - `Some(aggregate)` from `visit`, or `None` if this call
///   observed the cancellation signal before doing any work
pub fn walk_tree<A, F>(
    dir: &Path,
    visit: &F,
    cancel: &CancelFlag,
    warnings: &dyn WarningSink,
) -> Option<A>
where
    A: Send,
    F: Fn(&Path, Vec<Option<A>>, Vec<PathBuf>) -> A + Sync,
{
    if cancel.is_triggered() {
        return None;
    }

    let (subdirs, files) = enumerate_level(dir, warnings);

    // One rayon task per subdirectory; the indexed collect is the join
    // barrier, and preserves enumeration order in the child aggregates.
    let child_aggregates: Vec<Option<A>> = subdirs
        .par_iter()
        .map(|subdir| walk_tree(subdir, visit, cancel, warnings))
        .collect();

    Some(visit(dir, child_aggregates, files))
}

/// Enumerates the immediate children of one directory, non-recursively.
///
/// Inaccessible entries are skipped and reported; a failure to read the
/// directory itself degrades to an empty level. Entries that are neither
/// directories nor plain files (symlinks, sockets, devices) are ignored.
fn enumerate_level(dir: &Path, warnings: &dyn WarningSink) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warnings.warn(&format!(
                "failed to enumerate {}: {}",
                dir.display(),
                err
            ));
            return (subdirs, files);
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warnings.warn(&format!(
                    "failed to read an entry in {}: {}",
                    dir.display(),
                    err
                ));
                continue;
            }
        };

        // DirEntry::file_type does not follow symlinks.
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => subdirs.push(entry.path()),
            Ok(file_type) if file_type.is_file() => files.push(entry.path()),
            Ok(_) => {}
            Err(err) => {
                warnings.warn(&format!(
                    "failed to stat {}: {}",
                    entry.path().display(),
                    err
                ));
            }
        }
    }

    (subdirs, files)
}
