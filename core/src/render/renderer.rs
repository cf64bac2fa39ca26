// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;
use stutter_ansi_color::{ASTColor, AnsiStyledText, ColorDepth, dumb_highlight, fg_color};

use crate::{CommonResult, Document, MarkTable, RenderStyle, throws};

/// Write `document` to `writer`. Unmarked characters are written verbatim. Each marked
/// character is wrapped in its own start / reset escape sequence pair, styled according
/// to `render_style`.
///
/// `writer` is flushed at the end. Wrap unbuffered writers (like [`std::io::stdout`]) in
/// a [`std::io::BufWriter`].
///
/// # Errors
///
/// Returns an error if writing to `writer` fails (eg: a closed pipe).
pub fn render(
    document: &Document,
    mark_table: &MarkTable,
    render_style: RenderStyle,
    writer: &mut impl Write,
) -> CommonResult<()> {
    throws!({
        let mut char_buffer = [0_u8; 4];
        for (index, character) in document.as_slice().iter().enumerate() {
            let text: &str = character.encode_utf8(&mut char_buffer);
            match mark_table.get(index) {
                Some(mark) if mark.marked => {
                    let styled = style_marked_text(text, mark.color.into(), render_style);
                    writer
                        .write_all(styled.to_small_str().as_bytes())
                        .into_diagnostic()?;
                }
                _ => writer.write_all(text.as_bytes()).into_diagnostic()?,
            }
        }
        writer.flush().into_diagnostic()?;
    });
}

/// Same as [`render`], but collects the output into a [`String`].
///
/// # Errors
///
/// Never fails in practice, since writing into memory can't fail.
pub fn render_to_string(
    document: &Document,
    mark_table: &MarkTable,
    render_style: RenderStyle,
) -> CommonResult<String> {
    let mut acc = Vec::with_capacity(document.len());
    render(document, mark_table, render_style, &mut acc)?;
    String::from_utf8(acc).into_diagnostic()
}

fn style_marked_text(text: &str, color: ASTColor, render_style: RenderStyle) -> AnsiStyledText<'_> {
    match render_style {
        RenderStyle::Truecolor => fg_color(color.for_depth(ColorDepth::Truecolor), text),
        RenderStyle::Ansi256 => fg_color(color.for_depth(ColorDepth::Ansi256), text),
        RenderStyle::Dumb => dumb_highlight(text),
    }
}
