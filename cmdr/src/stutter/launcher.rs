// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{BufWriter, Write},
          process::ExitCode};

use stutter_core::{CommonResult, Document, HighlightConfig, RandomColorGenerator, ScanSummary,
                   highlight, ok, render};

use crate::{CLIArg, exit_code_for_report};

/// Load the file named in `cli_arg`, highlight it, and write the result to `writer`.
///
/// # Errors
///
/// - [`stutter_core::DocumentLoadError`] if the file can't be loaded.
/// - Any error from writing to `writer`.
#[tracing::instrument(skip_all, fields(file = %cli_arg.file.display()))]
pub fn run_app(cli_arg: &CLIArg, writer: &mut impl Write) -> CommonResult<ScanSummary> {
    let document = Document::try_load(&cli_arg.file)?;

    let config = HighlightConfig::from(cli_arg);
    let mut color_generator = RandomColorGenerator::from_config(&config);
    let (mark_table, summary) = highlight(&document, &config, &mut color_generator);

    let render_style = cli_arg.render_style();
    // % is Display, ? is Debug.
    tracing::debug!(message = "Rendering", render_style = %render_style);
    render(&document, &mark_table, render_style, writer)?;

    ok!(summary)
}

/// Run the app against `stdout`, and report any failure on `stderr`.
#[must_use]
pub fn launch(cli_arg: &CLIArg) -> ExitCode {
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match run_app(cli_arg, &mut writer) {
        Ok(summary) => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Done", summary = ?summary);
            ExitCode::SUCCESS
        }
        Err(report) => {
            let exit_code = exit_code_for_report(&report);
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run stutter due to the following problem",
                error = ?report,
                exit_code = %exit_code
            );
            // Drop the writer first, so whatever was rendered comes out before the error.
            drop(writer);
            eprintln!("{report:?}");
            ExitCode::from(exit_code)
        }
    }
}
