// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::ExitCode;

use clap::Parser;
use stutter_cmdr::{CLIArg, exit_code_for_clap_error, launch,
                   setup_default_miette_global_report_handler};
use stutter_log::try_initialize_logging_global;

const ERROR_REPORT_FOOTER: &str =
    "Run again with --enable-logging, and check log.txt for more details.";

fn main() -> ExitCode {
    // If no args are passed, help is printed to stderr thanks to
    // `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = match CLIArg::try_parse() {
        Ok(it) => it,
        Err(error) => {
            error.print().ok();
            return exit_code_for_clap_error(&error);
        }
    };

    setup_default_miette_global_report_handler(ERROR_REPORT_FOOTER);

    let maybe_tracing_config = cli_arg.global_options.tracing_config();
    let enable_logging = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        try_initialize_logging_global(tracing_config).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let exit_code = launch(&cli_arg);

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    exit_code
}
