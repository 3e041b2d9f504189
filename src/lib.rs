//! Library crate for rubig
//!
//! This exposes the concurrent scan engine for testing and library usage.
//!
//! # Features
//!
//! - **Parallel aggregation**: recursive directory-size computation with
//!   rayon fan-out over sibling subtrees
//! - **Live top-K tracking**: a bounded, lock-serialized ranked list that
//!   publishes a snapshot to a result sink on every change
//! - **Disjoint reporting**: a reported subtree contributes zero to its
//!   ancestors, so the listed directories never double-count bytes
//! - **Cooperative cancellation**: a shared level-triggered flag unwinds
//!   the scan cleanly, leaving the last snapshot as a valid partial result
//!
//! # Modules
//!
//! - [`data`]: Core types (`DirRecord`, `RankOrder`)
//! - [`cli`]: Command-line interface definitions
//! - [`format`]: Fixed-width size formatting
//! - [`tracker`]: The shared top-K tracker
//! - [`walk`]: The generic parallel tree walker
//! - [`scan`]: Scan orchestration and aggregation policy
//! - [`sink`]: Result/warning collaborator traits
//! - [`output`]: Stock sink implementations (terminal, memory)

pub mod cancel;
pub mod cli;
pub mod data;
pub mod format;
pub mod output;
pub mod scan;
pub mod sink;
pub mod tracker;
pub mod walk;

pub use cancel::CancelFlag;
pub use cli::Args;
pub use data::{DirRecord, RankOrder};
pub use scan::{ScanConfig, find_big_directories};
pub use sink::{ResultSink, WarningSink};
pub use tracker::TopTracker;
