// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This is the binary under test, which is tested by `tests/test_tracing_bin_stdio.rs`.
//!
//! It takes 1 argument: "stdout" or "stderr". Depending on the argument, it will
//! display the logs to stdout or stderr.

use stutter_log::{DisplayPreference, TracingConfig, WriterConfig};
use tracing_core::LevelFilter;

fn main() -> miette::Result<()> {
    // Get the argument passed to the binary.
    let arg = std::env::args().nth(1).unwrap_or_default();
    let display_preference = match arg.as_str() {
        "stderr" => DisplayPreference::Stderr,
        _ => DisplayPreference::Stdout,
    };

    let default_guard = TracingConfig {
        writer_config: WriterConfig::Display(display_preference),
        level_filter: LevelFilter::DEBUG,
    }
    .install_thread_local()?;

    tracing::error!("error");
    tracing::warn!("warn");
    tracing::info!("info");
    tracing::debug!("debug");
    tracing::trace!("trace");

    drop(default_guard);

    Ok(())
}
