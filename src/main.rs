//! Main entry point for the `rubig` CLI application.
//!
//! `rubig` scans a directory tree and continuously reports the K largest
//! directories above a size threshold while the scan runs. It is built for
//! long, interruptible scans over large filesystems: results stream in as
//! they are found, Ctrl-C cancels cleanly, and the last printed list is a
//! valid partial answer.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Configures the rayon thread pool from `--threads`
//! - Maps SIGINT onto the scan's [`CancelFlag`]
//! - Delegates the actual work to [`rubig::find_big_directories`]
//! - Prints the final ranked summary
//!
//! # Flags of Interest
//! - `--filter BYTES`: Only report directories strictly larger than this
//! - `--top N`: How many directories to track
//! - `--order largest|smallest`: Which end of the ranking to keep
//! - `--quiet`: Suppress the live stream, print only the final list

use anyhow::{Context, Result};
use clap::Parser;
use humansize::{DECIMAL, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use rubig::output::TerminalSink;
use rubig::sink::NullSink;
use rubig::{Args, CancelFlag, ResultSink, ScanConfig, find_big_directories};
use std::sync::Arc;
use std::time::Duration;

/// Sets up the thread pool configuration based on CLI arguments.
fn setup_thread_pool(args: &Args) -> Result<()> {
    if let Some(n_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build_global()
            .context("Failed to configure thread pool")?;
        println!("🔧 Using {} CPU thread(s)", n_threads);
    } else {
        println!("🔧 Using all {} available CPU threads", num_cpus::get());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Print banner
    println!(
        r#"
------------------------------------------------------------------
        .______       __    __  .______    __    _______
        |   _  \     |  |  |  | |   _  \  |  |  /  _____|
        |  |_)  |    |  |  |  | |  |_)  | |  | |  |  __
        |      /     |  |  |  | |   _  <  |  | |  | |_ |
        |  |\  \----.|  `--'  | |  |_)  | |  | |  |__| |
        | _| `._____| \______/  |______/  |__|  \______|
                 Rust-based big-directory finder
------------------------------------------------------------------
                    "#
    );

    setup_thread_pool(&args)?;
    println!(
        "🔍 Scanning {} for directories over {}",
        args.path.display(),
        format_size(args.filter, DECIMAL)
    );

    // Ctrl-C raises the shared cancellation flag; the scan unwinds on its
    // own and the last published snapshot stays valid.
    let cancel = CancelFlag::new();
    let cancel_handle = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupt received, cancelling scan...");
        cancel_handle.trigger();
    })
    .context("Failed to set signal handler")?;

    // Spinner to indicate scanning progress in the terminal
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Scanning directories... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let terminal = TerminalSink::with_progress(pb.clone());
    let sink: Arc<dyn ResultSink> = if args.quiet {
        Arc::new(NullSink)
    } else {
        Arc::new(TerminalSink::with_progress(pb.clone()))
    };

    let config = ScanConfig {
        filter: args.filter,
        top: args.top,
        order: args.order,
    };
    let ranked = find_big_directories(&args.path, &config, sink, &terminal, &cancel)?;

    if cancel.is_triggered() {
        pb.finish_with_message("Scan cancelled, showing partial results");
    } else {
        pb.finish_with_message("Scan complete ✅");
    }

    if ranked.is_empty() {
        println!(
            "No directories over {} found.",
            format_size(args.filter, DECIMAL)
        );
    } else {
        println!("\n==== final top {} ====", ranked.len());
        for record in &ranked {
            println!("{}", record);
        }
    }

    Ok(())
}
