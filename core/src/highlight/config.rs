// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_WINDOW_SIZE: usize = 3;
pub const DEFAULT_SCAN_AREA_SIZE: usize = 100;
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Everything the highlighter needs to know about a run. Built by the app from its
/// command line arguments.
///
/// - `window_size`: number of characters compared at a time. `0` produces no matches.
/// - `scan_area_size`: how far ahead of an anchor to look for a repeat. When this is not
///   larger than `window_size` there is no room to look, and nothing is matched.
/// - `palette_mode`: see [`PaletteMode`].
/// - `grouping_policy`: see [`GroupingPolicy`].
/// - `seed`: seed for the pseudo random color sequence. The same document, config and
///   seed always produce the same colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightConfig {
    pub window_size: usize,
    pub scan_area_size: usize,
    pub palette_mode: PaletteMode,
    pub grouping_policy: GroupingPolicy,
    pub seed: u64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            scan_area_size: DEFAULT_SCAN_AREA_SIZE,
            palette_mode: PaletteMode::default(),
            grouping_policy: GroupingPolicy::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// How fresh group colors are drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum PaletteMode {
    /// Two channels are a complementary `0x00` / `0xFF` pair, and the third one is
    /// random. Produces vivid colors, never gray or muddy ones.
    Pure,
    /// All three channels are random.
    #[default]
    Free,
}

/// How colors are shared between match groups that have spans in common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum GroupingPolicy {
    /// A group whose anchor character is already marked reuses that character's color,
    /// otherwise it gets a fresh one. This is not a transitive closure, two groups that
    /// share a span can end up with different colors.
    #[default]
    Inherit,
    /// Groups that share a span are merged (union-find keyed by span start), and each
    /// merged set gets exactly one color.
    Transitive,
}
