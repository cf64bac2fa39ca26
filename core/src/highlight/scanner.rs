// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The repeat scanner. For every anchor position `beginning`, the window
//! `[beginning, beginning + window_size)` is checked, and if it is made up entirely of
//! word characters, every candidate window `scan_offset` characters ahead is compared to
//! it, case-insensitively.
//!
//! Both loops use strict bounds:
//! - `beginning + window_size < char_count`
//! - `scan_offset + window_size < scan_area_size`
//! - `beginning + scan_offset + window_size < char_count`
//!
//! Matching never depends on what has already been marked, so the scan produces the
//! complete list of [`MatchGroup`]s before any color is assigned.

use crate::{Document, MatchGroup, Span, chars_eq_ignore_case, is_word_char};

/// Outcome of comparing a candidate window against an anchor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum CandidateVerdict {
    Match,
    Mismatch,
    /// The candidate contains a non word character. This rejects the candidate before
    /// any comparison, so that a match can't run into the next word.
    NotAWord,
}

/// Counters collected while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    pub windows_checked: usize,
    pub valid_windows: usize,
    pub candidates_compared: usize,
    pub candidates_not_a_word: usize,
}

/// Find every group of nearby case-insensitive repeats in `document`. Groups are
/// returned in increasing anchor order, and only anchors with at least one repeat
/// produce a group.
///
/// Degenerate configurations (`window_size` of `0`, `scan_area_size <= window_size`, a
/// document that isn't longer than `window_size`) return no groups.
#[must_use]
pub fn scan(document: &Document, window_size: usize, scan_area_size: usize) -> Vec<MatchGroup> {
    scan_with_stats(document.as_slice(), window_size, scan_area_size).0
}

#[tracing::instrument(skip(chars), fields(char_count = chars.len()))]
#[must_use]
pub fn scan_with_stats(
    chars: &[char],
    window_size: usize,
    scan_area_size: usize,
) -> (Vec<MatchGroup>, ScanStats) {
    let mut groups = vec![];
    let mut stats = ScanStats::default();

    if window_size == 0 || scan_area_size <= window_size {
        tracing::debug!(message = "No room to scan, skipping");
        return (groups, stats);
    }

    let char_count = chars.len();
    let lookahead_limit = scan_area_size - window_size;

    for beginning in 0..char_count.saturating_sub(window_size) {
        stats.windows_checked += 1;
        let anchor = Span::new(beginning, window_size);

        if !is_valid_window(chars, anchor) {
            continue;
        }
        stats.valid_windows += 1;

        let mut group = MatchGroup::new(anchor);
        let max_offset = lookahead_limit.min(char_count - window_size - beginning);

        for scan_offset in 1..max_offset {
            let candidate = Span::new(beginning + scan_offset, window_size);
            stats.candidates_compared += 1;
            match compare_candidate(chars, anchor, candidate) {
                CandidateVerdict::Match => group.repeats.push(candidate),
                CandidateVerdict::NotAWord => stats.candidates_not_a_word += 1,
                CandidateVerdict::Mismatch => {}
            }
        }

        if !group.repeats.is_empty() {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "Found repeats",
                anchor = ?group.anchor,
                repeat_count = %group.repeats.len()
            );
            groups.push(group);
        }
    }

    (groups, stats)
}

/// `true` if `span` lies inside `chars` and every character in it is a word character.
#[must_use]
pub fn is_valid_window(chars: &[char], span: Span) -> bool {
    chars
        .get(span.range())
        .is_some_and(|window| window.iter().copied().all(is_word_char))
}

/// Compare the `candidate` window against the `anchor` window. Both spans are expected
/// to have the same length. A candidate that is out of bounds, or that contains a non
/// word character, is [`CandidateVerdict::NotAWord`].
#[must_use]
pub fn compare_candidate(chars: &[char], anchor: Span, candidate: Span) -> CandidateVerdict {
    if !is_valid_window(chars, candidate) {
        return CandidateVerdict::NotAWord;
    }

    let (Some(lhs), Some(rhs)) = (chars.get(anchor.range()), chars.get(candidate.range()))
    else {
        return CandidateVerdict::Mismatch;
    };

    if lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(&lhs, &rhs)| chars_eq_ignore_case(lhs, rhs))
    {
        CandidateVerdict::Match
    } else {
        CandidateVerdict::Mismatch
    }
}
