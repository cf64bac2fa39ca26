// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, SeedableRng, rngs::StdRng};
use stutter_ansi_color::RgbValue;

use crate::{HighlightConfig, PaletteMode};

/// Source of fresh colors for match groups. The highlighter owns no random state of its
/// own, so tests can plug in a generator that returns a known sequence.
pub trait ColorGenerator {
    fn next_color(&mut self) -> RgbValue;
}

/// [`ColorGenerator`] backed by any [`Rng`]. Use [`RandomColorGenerator::seeded`] to get
/// a reproducible sequence.
#[derive(Debug, Clone)]
pub struct RandomColorGenerator<R: Rng = StdRng> {
    rng: R,
    palette_mode: PaletteMode,
}

impl RandomColorGenerator<StdRng> {
    #[must_use]
    pub fn seeded(palette_mode: PaletteMode, seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), palette_mode)
    }

    #[must_use]
    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::seeded(config.palette_mode, config.seed)
    }
}

impl<R: Rng> RandomColorGenerator<R> {
    pub fn new(rng: R, palette_mode: PaletteMode) -> Self { Self { rng, palette_mode } }

    pub fn palette_mode(&self) -> PaletteMode { self.palette_mode }
}

impl<R: Rng> ColorGenerator for RandomColorGenerator<R> {
    fn next_color(&mut self) -> RgbValue {
        match self.palette_mode {
            PaletteMode::Pure => random_pure_color(&mut self.rng),
            PaletteMode::Free => random_free_color(&mut self.rng),
        }
    }
}

/// Pick one channel to be free (uniformly), then set the other two to a random
/// complementary `0x00` / `0xFF` pair, and the free channel to a random `u8`.
pub fn random_pure_color(rng: &mut impl Rng) -> RgbValue {
    let free_channel = rng.random_range(0..3_usize);
    let saturated: u8 = if rng.random::<bool>() { 0xFF } else { 0x00 };
    let free_value: u8 = rng.random();

    let mut channels = [0_u8; 3];
    channels[free_channel] = free_value;
    channels[(free_channel + 1) % 3] = saturated;
    channels[(free_channel + 2) % 3] = 0xFF - saturated;

    let [red, green, blue] = channels;
    RgbValue::from_u8(red, green, blue)
}

pub fn random_free_color(rng: &mut impl Rng) -> RgbValue {
    RgbValue::from_u8(rng.random(), rng.random(), rng.random())
}

/// `true` if two of the three channels of `color` are `0x00` and `0xFF`.
#[must_use]
pub fn is_pure_color(color: RgbValue) -> bool {
    let channels = color.channels();
    (0..3).any(|free_channel| {
        let lhs = channels[(free_channel + 1) % 3];
        let rhs = channels[(free_channel + 2) % 3];
        matches!((lhs, rhs), (0x00, 0xFF) | (0xFF, 0x00))
    })
}
