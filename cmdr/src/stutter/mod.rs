// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod exit_code;
pub mod launcher;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use clap_config::*;
pub use exit_code::*;
pub use launcher::*;
pub use miette_setup_global_report_handler::*;
