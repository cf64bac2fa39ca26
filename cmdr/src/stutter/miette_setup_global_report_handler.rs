// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customize how [`miette::Report`]s are printed to `stderr`.
//!
//! The hook is lazy, it only runs when a report is actually displayed. So the terminal
//! width and color support are looked up just before the output is generated, and never
//! if the app doesn't fail.

use miette::MietteHandlerOpts;
use stutter_ansi_color::{ColorSupport, Stream, examine_env_vars_to_determine_color_support};

const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Columns of the controlling terminal, or [`DEFAULT_TERMINAL_WIDTH`] when there isn't
/// one (output piped, running under CI).
#[must_use]
pub fn terminal_width() -> usize {
    let columns = crossterm::terminal::size()
        .map(|(columns, _rows)| columns)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH);
    if columns == 0 { DEFAULT_TERMINAL_WIDTH.into() } else { columns.into() }
}

pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = terminal_width();
        let color_support = examine_env_vars_to_determine_color_support(Stream::Stderr);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "miette::set_hook",
            terminal_width = %terminal_width,
            color_support = %color_support
        );

        let opts = MietteHandlerOpts::new()
            .width(terminal_width)
            .wrap_lines(true)
            .unicode(true)
            .context_lines(3)
            .tab_width(4)
            .break_words(true)
            .with_cause_chain()
            .footer(footer.to_string());

        Box::new(match color_support {
            ColorSupport::NoColor => opts.color(false).build(),
            ColorSupport::Ansi256 => opts.rgb_colors(miette::RgbColors::Never).build(),
            ColorSupport::Truecolor => opts.rgb_colors(miette::RgbColors::Always).build(),
        })
    }))
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_width_is_never_zero() {
        let width = terminal_width();
        assert!(width > 0);
        if crossterm::terminal::size().is_err() {
            assert_eq!(width, usize::from(DEFAULT_TERMINAL_WIDTH));
        }
    }
}
