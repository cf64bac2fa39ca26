// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `stutter_log`
//!
//! Thin layer over [`tracing_subscriber`] so that apps can turn on logging with one
//! call. Logging is **disabled** by default, see [`try_initialize_logging_global`].
//!
//! Since the highlighted document itself is written to `stdout`, apps in this workspace
//! log to a file (the default, [`tracing_config_options::DEFAULT_LOG_FILE_NAME`]) or to
//! `stderr`.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod log_support;

// Re-export.
pub use log_support::*;
