// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorGenerator, Document, HighlightConfig, MarkTable, assign_colors,
            scan_with_stats};

/// What a [`highlight`] run found. Logged at `DEBUG` level after every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub char_count: usize,
    pub group_count: usize,
    pub span_count: usize,
    pub marked_char_count: usize,
    pub colors_drawn: usize,
    pub candidates_compared: usize,
    pub candidates_not_a_word: usize,
}

/// Scan `document` for repeats and color them. This is the whole pipeline minus
/// rendering:
///
/// 1. [`crate::scan`] finds every [`crate::MatchGroup`].
/// 2. A [`MarkTable`] sized to the document is created, all unmarked.
/// 3. [`assign_colors`] writes each group's color into it, drawing fresh colors from
///    `color_generator` according to [`HighlightConfig::grouping_policy`].
///
/// For a fixed document, config and color sequence the returned [`MarkTable`] is always
/// the same.
#[tracing::instrument(skip_all, fields(char_count = document.len(), config = ?config))]
pub fn highlight(
    document: &Document,
    config: &HighlightConfig,
    color_generator: &mut impl ColorGenerator,
) -> (MarkTable, ScanSummary) {
    let (groups, stats) =
        scan_with_stats(document.as_slice(), config.window_size, config.scan_area_size);

    let mut mark_table = MarkTable::new(document.len());
    let colors_drawn = assign_colors(
        &groups,
        config.grouping_policy,
        &mut mark_table,
        color_generator,
    );

    let summary = ScanSummary {
        char_count: document.len(),
        group_count: groups.len(),
        span_count: groups.iter().map(crate::MatchGroup::span_count).sum(),
        marked_char_count: mark_table.marked_count(),
        colors_drawn,
        candidates_compared: stats.candidates_compared,
        candidates_not_a_word: stats.candidates_not_a_word,
    };

    // % is Display, ? is Debug.
    tracing::debug!(message = "Highlight complete", summary = ?summary);

    (mark_table, summary)
}
