//! Pluggable sink implementations for the `rubig` scan engine.
//!
//! The engine only knows the [`crate::sink::ResultSink`] and
//! [`crate::sink::WarningSink`] traits; this module provides the stock
//! implementations:
//!
//! - **Terminal**: live snapshot blocks and warnings for interactive use,
//!   spinner-aware via `indicatif`
//! - **Memory**: records everything published, for tests and embedders

pub mod memory;
pub mod terminal;

pub use memory::MemorySink;
pub use terminal::TerminalSink;
