//! CLI interface definitions for the `rubig` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//!
//! The `Args` struct is used in `main.rs` to control the scan root, the
//! size filter, the ranked-list capacity and the thread pool size.
//!
//! # Example
//!
//! ```bash
//! rubig /var --filter 52428800 --top 20
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::data::RankOrder;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `rubig` big-directory finder.
///
/// Defaults mirror the classic interactive setup: a 10 MiB filter and a
/// top-10 list of the largest directories under the current directory.
#[derive(Parser, Debug)]
#[command(name = "rubig", author = "Sam Green", version, about)]
pub struct Args {
    /// Path to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only report directories strictly larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = 10 * 1024 * 1024)]
    pub filter: u64,

    /// How many directories to track (the K in top-K)
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Rank the largest or the smallest qualifying directories
    #[arg(long, value_enum, default_value_t = RankOrder::Largest)]
    pub order: RankOrder,

    /// Limit the number of CPU threads used (default: use all available)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress the live snapshot stream; print only the final list
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
