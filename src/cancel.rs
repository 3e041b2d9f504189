//! Cooperative cancellation signal shared across scan tasks.
//!
//! A [`CancelFlag`] is a cheaply cloneable handle over a shared atomic flag.
//! Cancellation is level-triggered: once raised it stays raised, checking it
//! is idempotent, and every task observes the same shared signal rather than
//! one task propagating it to others.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation handle for one scan.
///
/// The walker checks this at the start of every recursive call; in-flight
/// I/O is never interrupted, it finishes and unwinds with a neutral result.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    triggered: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Safe to call from any thread, any number of times.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }
}
