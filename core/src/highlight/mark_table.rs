// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Index;

use stutter_ansi_color::RgbValue;

use crate::Span;

/// Highlight state of one character of a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mark {
    pub marked: bool,
    pub color: RgbValue,
}

/// One [`Mark`] per character of a [`crate::Document`], all unmarked when created.
///
/// Marking is additive and first writer wins: once a character is marked, neither its
/// flag nor its color ever change again. This makes re-applying the same group a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkTable {
    marks: Vec<Mark>,
}

impl MarkTable {
    #[must_use]
    pub fn new(char_count: usize) -> Self {
        Self {
            marks: vec![Mark::default(); char_count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.marks.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.marks.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Mark> { self.marks.get(index) }

    #[must_use]
    pub fn is_marked(&self, index: usize) -> bool {
        self.get(index).is_some_and(|it| it.marked)
    }

    /// The color of the character at `index`, if it is marked.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<RgbValue> {
        self.get(index).filter(|it| it.marked).map(|it| it.color)
    }

    /// Mark the character at `index` w/ `color`, unless it is already marked. Returns
    /// `true` if the character was newly marked. Out of range indices are ignored.
    pub fn mark(&mut self, index: usize, color: RgbValue) -> bool {
        match self.marks.get_mut(index) {
            Some(it) if !it.marked => {
                *it = Mark {
                    marked: true,
                    color,
                };
                true
            }
            _ => false,
        }
    }

    /// Mark every character in `span`, see [`Self::mark`]. Returns the number of newly
    /// marked characters.
    pub fn mark_span(&mut self, span: Span, color: RgbValue) -> usize {
        span.range()
            .filter(|&index| self.mark(index, color))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> { self.marks.iter() }

    #[must_use]
    pub fn marked_count(&self) -> usize { self.marks.iter().filter(|it| it.marked).count() }
}

impl Index<usize> for MarkTable {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output { &self.marks[index] }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RED: RgbValue = RgbValue::from_u8(255, 0, 0);
    const BLUE: RgbValue = RgbValue::from_u8(0, 0, 255);

    #[test]
    fn test_new_table_is_unmarked() {
        let table = MarkTable::new(5);
        assert_eq!(table.len(), 5);
        assert_eq!(table.marked_count(), 0);
        assert!(table.iter().all(|it| *it == Mark::default()));
        assert!(MarkTable::new(0).is_empty());
    }

    #[test]
    fn test_first_writer_wins() {
        let mut table = MarkTable::new(4);

        assert!(table.mark(1, RED));
        assert!(!table.mark(1, BLUE));

        assert_eq!(table.color_at(1), Some(RED));
        assert_eq!(table.color_at(0), None);
        assert!(table[1].marked);
    }

    #[test]
    fn test_mark_span_only_fills_unmarked() {
        let mut table = MarkTable::new(6);
        table.mark(2, RED);

        let newly_marked = table.mark_span(Span::new(1, 3), BLUE);

        assert_eq!(newly_marked, 2);
        assert_eq!(table.color_at(1), Some(BLUE));
        assert_eq!(table.color_at(2), Some(RED));
        assert_eq!(table.color_at(3), Some(BLUE));
        assert_eq!(table.marked_count(), 3);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut table = MarkTable::new(2);
        assert!(!table.mark(2, RED));
        assert_eq!(table.mark_span(Span::new(1, 3), RED), 1);
        assert!(!table.is_marked(5));
        assert_eq!(table.color_at(5), None);
    }
}
