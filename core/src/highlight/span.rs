// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use smallvec::SmallVec;

/// A `(start, len)` view over a [`crate::Document`]. It does not own or copy any
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self { Self { start, len } }

    /// Exclusive end index.
    #[must_use]
    pub const fn end(&self) -> usize { self.start + self.len }

    #[must_use]
    pub const fn range(&self) -> Range<usize> { self.start..self.end() }
}

pub mod sizing {
    use super::{SmallVec, Span};

    /// Most repeats show up once or twice in a scan area.
    pub const DEFAULT_REPEATS_PER_GROUP: usize = 4;
    pub type InlineVecSpans = SmallVec<[Span; DEFAULT_REPEATS_PER_GROUP]>;
}

/// All the spans that were found to match the window starting at `anchor.start`. The
/// `repeats` are in the order they were discovered, which is increasing offset from the
/// anchor.
///
/// Every span in a group has the same length, and their characters are pairwise equal
/// (case-insensitively) position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub anchor: Span,
    pub repeats: sizing::InlineVecSpans,
}

impl MatchGroup {
    #[must_use]
    pub fn new(anchor: Span) -> Self {
        Self {
            anchor,
            repeats: sizing::InlineVecSpans::new(),
        }
    }

    /// The anchor first, followed by the repeats.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        std::iter::once(self.anchor).chain(self.repeats.iter().copied())
    }

    /// Number of spans in this group, including the anchor.
    #[must_use]
    pub fn span_count(&self) -> usize { 1 + self.repeats.len() }
}
