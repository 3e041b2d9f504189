//! Terminal sink for interactive scans.
//!
//! Prints each published snapshot as a full replacement block (the previous
//! block simply scrolls away) and warnings to stderr. When a spinner is
//! attached, all output is routed through `ProgressBar::println` so the
//! spinner line is suspended and redrawn instead of being overwritten
//! mid-tick.

use crate::data::DirRecord;
use crate::sink::{ResultSink, WarningSink};
use indicatif::ProgressBar;

/// Streams snapshots and warnings to the terminal.
#[derive(Debug, Default)]
pub struct TerminalSink {
    progress: Option<ProgressBar>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that prints through the given spinner/progress bar.
    pub fn with_progress(progress: ProgressBar) -> Self {
        TerminalSink {
            progress: Some(progress),
        }
    }

    fn println(&self, line: &str) {
        match &self.progress {
            Some(progress) => progress.println(line),
            None => println!("{}", line),
        }
    }
}

impl ResultSink for TerminalSink {
    fn publish(&self, ranked: &[DirRecord]) {
        self.println(&format!("---- top {} so far ----", ranked.len()));
        for record in ranked {
            self.println(&record.to_string());
        }
    }
}

impl WarningSink for TerminalSink {
    fn warn(&self, message: &str) {
        match &self.progress {
            Some(progress) => progress.println(format!("Warning: {}", message)),
            None => eprintln!("Warning: {}", message),
        }
    }
}
