// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the [`MatchGroup`]s found by the scanner into colored [`MarkTable`] entries.
//! Every span of a group is written with that group's color, but an already marked
//! character keeps the color it has.

use std::collections::HashMap;

use stutter_ansi_color::RgbValue;

use crate::{ColorGenerator, DisjointSet, GroupingPolicy, MarkTable, MatchGroup};

/// Color for the group anchored at `beginning`. If that character is already marked,
/// its color is reused, otherwise a fresh color is drawn from `color_generator`.
pub fn color_for(
    beginning: usize,
    mark_table: &MarkTable,
    color_generator: &mut impl ColorGenerator,
) -> RgbValue {
    match mark_table.color_at(beginning) {
        Some(inherited_color) => inherited_color,
        None => color_generator.next_color(),
    }
}

/// Write `color` into every span of `group`. Returns the number of newly marked
/// characters. Applying the same group a second time changes nothing.
pub fn apply_group(group: &MatchGroup, color: RgbValue, mark_table: &mut MarkTable) -> usize {
    group
        .spans()
        .map(|span| mark_table.mark_span(span, color))
        .sum()
}

/// Assign colors to `groups` (in order) using `grouping_policy`. Returns the number of
/// colors drawn from `color_generator`.
pub fn assign_colors(
    groups: &[MatchGroup],
    grouping_policy: GroupingPolicy,
    mark_table: &mut MarkTable,
    color_generator: &mut impl ColorGenerator,
) -> usize {
    match grouping_policy {
        GroupingPolicy::Inherit => assign_inherit(groups, mark_table, color_generator),
        GroupingPolicy::Transitive => assign_transitive(groups, mark_table, color_generator),
    }
}

fn assign_inherit(
    groups: &[MatchGroup],
    mark_table: &mut MarkTable,
    color_generator: &mut impl ColorGenerator,
) -> usize {
    let mut colors_drawn = 0;

    for group in groups {
        if !mark_table.is_marked(group.anchor.start) {
            colors_drawn += 1;
        }
        let color = color_for(group.anchor.start, mark_table, color_generator);
        apply_group(group, color, mark_table);
    }

    colors_drawn
}

fn assign_transitive(
    groups: &[MatchGroup],
    mark_table: &mut MarkTable,
    color_generator: &mut impl ColorGenerator,
) -> usize {
    let mut disjoint_set = DisjointSet::new();
    for group in groups {
        let anchor_node = disjoint_set.insert(group.anchor.start);
        for repeat in &group.repeats {
            let repeat_node = disjoint_set.insert(repeat.start);
            disjoint_set.union(anchor_node, repeat_node);
        }
    }

    // Nodes are in discovery order, so sets get their colors in discovery order too.
    let mut set_colors = HashMap::<usize, RgbValue>::new();
    for node in 0..disjoint_set.len() {
        let root = disjoint_set.find(node);
        set_colors
            .entry(root)
            .or_insert_with(|| color_generator.next_color());
    }

    for group in groups {
        for span in group.spans() {
            if let Some(&color) = disjoint_set
                .find_key(span.start)
                .and_then(|root| set_colors.get(&root))
            {
                mark_table.mark_span(span, color);
            }
        }
    }

    set_colors.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{Document, highlight::test_fixtures::CountingColorGenerator, scan};

    fn colors(mark_table: &MarkTable) -> Vec<Option<u8>> {
        (0..mark_table.len())
            .map(|index| mark_table.color_at(index).map(|it| it.red))
            .collect()
    }

    #[test]
    fn test_color_for_draws_when_unmarked() {
        let mark_table = MarkTable::new(3);
        let mut generator = CountingColorGenerator::default();

        assert_eq!(color_for(0, &mark_table, &mut generator), CountingColorGenerator::nth_color(1));
        assert_eq!(color_for(0, &mark_table, &mut generator), CountingColorGenerator::nth_color(2));
    }

    #[test]
    fn test_color_for_inherits_when_marked() {
        let mut mark_table = MarkTable::new(3);
        let inherited = RgbValue::from_u8(9, 9, 9);
        mark_table.mark(1, inherited);
        let mut generator = CountingColorGenerator::default();

        assert_eq!(color_for(1, &mark_table, &mut generator), inherited);
        assert_eq!(generator.draw_count, 0);
    }

    #[test]
    fn test_apply_group_is_idempotent() {
        let groups = scan(&Document::from("abc abc xyz"), 3, 20);
        let mut mark_table = MarkTable::new(11);

        assert_eq!(apply_group(&groups[0], RgbValue::from_u8(1, 2, 3), &mut mark_table), 6);
        let snapshot = mark_table.clone();

        assert_eq!(apply_group(&groups[0], RgbValue::from_u8(4, 5, 6), &mut mark_table), 0);
        assert_eq!(mark_table, snapshot);
    }

    #[test]
    fn test_inherit_reuses_anchor_color_for_third_occurrence() {
        // Scan area 8: the 1st "cat" only reaches the 2nd, the 2nd reaches the 3rd.
        let document = Document::from("cat cat cat.");
        let groups = scan(&document, 3, 8);
        assert_eq!(groups.len(), 2);

        let mut mark_table = MarkTable::new(document.len());
        let mut generator = CountingColorGenerator::default();
        let drawn = assign_colors(&groups, GroupingPolicy::Inherit, &mut mark_table, &mut generator);

        assert_eq!(drawn, 1);
        assert_eq!(generator.draw_count, 1);
        let c = Some(1);
        assert_eq!(
            colors(&mark_table),
            vec![c, c, c, None, c, c, c, None, c, c, c, None]
        );
    }

    #[test]
    fn test_inherit_vs_transitive_on_overlapping_groups() {
        // "aa" at 0 and 4, "ab" at 1 and 5. The "ab" group is anchored on a character
        // that the "aa" group already marked.
        let document = Document::from("aab aab.");
        let groups = scan(&document, 2, 100);
        assert_eq!(groups.len(), 2);

        let mut inherit_table = MarkTable::new(document.len());
        let mut generator = CountingColorGenerator::default();
        let drawn = assign_colors(&groups, GroupingPolicy::Inherit, &mut inherit_table, &mut generator);
        assert_eq!(drawn, 1);
        let c = Some(1);
        assert_eq!(colors(&inherit_table), vec![c, c, c, None, c, c, c, None]);

        let mut transitive_table = MarkTable::new(document.len());
        let mut generator = CountingColorGenerator::default();
        let drawn =
            assign_colors(&groups, GroupingPolicy::Transitive, &mut transitive_table, &mut generator);
        assert_eq!(drawn, 2);
        let (c1, c2) = (Some(1), Some(2));
        assert_eq!(colors(&transitive_table), vec![c1, c1, c2, None, c1, c1, c2, None]);
    }

    #[test]
    fn test_transitive_merges_groups_sharing_spans() {
        // Groups {0: [3, 6]} and {3: [6]} form one set.
        let document = Document::from("ab ab ab. xy xy.");
        let groups = scan(&document, 2, 100);

        let mut mark_table = MarkTable::new(document.len());
        let mut generator = CountingColorGenerator::default();
        let drawn =
            assign_colors(&groups, GroupingPolicy::Transitive, &mut mark_table, &mut generator);

        assert_eq!(drawn, 2);
        let (c1, c2) = (Some(1), Some(2));
        assert_eq!(
            colors(&mark_table),
            vec![
                c1, c1, None, c1, c1, None, c1, c1, None, None, //
                c2, c2, None, c2, c2, None,
            ]
        );
    }

    #[test]
    fn test_every_policy_marks_the_same_characters() {
        let document = Document::from("the cat and the hat and THE bat, the end.\n");
        let groups = scan(&document, 3, 30);

        let marked: Vec<Vec<bool>> = GroupingPolicy::iter()
            .map(|grouping_policy| {
                let mut mark_table = MarkTable::new(document.len());
                let mut generator = CountingColorGenerator::default();
                assign_colors(&groups, grouping_policy, &mut mark_table, &mut generator);
                mark_table.iter().map(|it| it.marked).collect()
            })
            .collect();

        assert_eq!(marked[0], marked[1]);
        assert!(marked[0].iter().any(|&it| it));
    }
}
