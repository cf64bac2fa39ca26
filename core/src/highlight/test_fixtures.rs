// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use stutter_ansi_color::RgbValue;

use crate::ColorGenerator;

/// Hands out `(1, 0, 0)`, `(2, 0, 0)`, `(3, 0, 0)`, ... so tests can tell exactly which
/// draw a color came from.
#[derive(Debug, Default)]
pub struct CountingColorGenerator {
    pub draw_count: u8,
}

impl CountingColorGenerator {
    pub const fn nth_color(nth: u8) -> RgbValue { RgbValue::from_u8(nth, 0, 0) }
}

impl ColorGenerator for CountingColorGenerator {
    fn next_color(&mut self) -> RgbValue {
        self.draw_count += 1;
        Self::nth_color(self.draw_count)
    }
}
