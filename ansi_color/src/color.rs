// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and conversions between them.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use crate::convert::{ansi_constants::ANSI_COLOR_PALETTE, convert_rgb_into_ansi256};

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi(&self) -> AnsiValue;
}

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u32) -> Self {
        let red = ((value >> 16) & 0xFF) as u8;
        let green = ((value >> 8) & 0xFF) as u8;
        let blue = (value & 0xFF) as u8;
        Self { red, green, blue }
    }
}

impl From<AnsiValue> for RgbValue {
    fn from(ansi: AnsiValue) -> Self { ansi.as_rgb() }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    #[must_use]
    pub const fn channels(&self) -> [u8; 3] { [self.red, self.green, self.blue] }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }
}

/// Represents a color in the ANSI 256-color palette format. Each index (0-255) maps to
/// a specific color in [`ANSI_COLOR_PALETTE`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<RgbValue> for AnsiValue {
    fn from(rgb: RgbValue) -> Self { rgb.as_ansi() }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { ANSI_COLOR_PALETTE[self.index as usize].into() }

    fn as_ansi(&self) -> AnsiValue { *self }
}

/// The color of an [`crate::AnsiStyledText`]. Whether it is emitted as a truecolor or a
/// 256 color escape sequence is decided by the variant, not by the terminal, so callers
/// that want to degrade gracefully convert up front (see [`ASTColor::for_depth`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ASTColor {
    Rgb(u8, u8, u8),
    Ansi256(u8),
}

impl From<RgbValue> for ASTColor {
    fn from(rgb: RgbValue) -> Self { ASTColor::Rgb(rgb.red, rgb.green, rgb.blue) }
}

impl From<AnsiValue> for ASTColor {
    fn from(ansi: AnsiValue) -> Self { ASTColor::Ansi256(ansi.index) }
}

impl TransformColor for ASTColor {
    fn as_rgb(&self) -> RgbValue {
        match *self {
            ASTColor::Rgb(red, green, blue) => RgbValue { red, green, blue },
            ASTColor::Ansi256(index) => AnsiValue { index }.as_rgb(),
        }
    }

    fn as_ansi(&self) -> AnsiValue {
        match *self {
            ASTColor::Rgb(red, green, blue) => {
                convert_rgb_into_ansi256(RgbValue { red, green, blue })
            }
            ASTColor::Ansi256(index) => AnsiValue { index },
        }
    }
}

/// How many colors the output can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ColorDepth {
    Truecolor,
    Ansi256,
}

impl ASTColor {
    /// Convert `self` so it can be displayed at the given [`ColorDepth`].
    #[must_use]
    pub fn for_depth(self, depth: ColorDepth) -> Self {
        match depth {
            ColorDepth::Truecolor => self.as_rgb().into(),
            ColorDepth::Ansi256 => self.as_ansi().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_color_depth_display() {
        assert_eq!(ColorDepth::Truecolor.to_string(), "Truecolor");
        assert_eq!(ColorDepth::Ansi256.to_string(), "Ansi256");
    }

    #[test_case(0, 0, 0)]
    #[test_case(255, 125, 0)]
    #[test_case(255, 255, 255)]
    fn test_ast_color_as_rgb(red: u8, green: u8, blue: u8) {
        let color = ASTColor::Rgb(red, green, blue);
        assert_eq!(color.as_rgb(), RgbValue { red, green, blue });
    }

    #[test_case(ASTColor::Rgb(255, 255, 255), 231)]
    #[test_case(ASTColor::Rgb(255, 128, 0), 208)]
    fn test_ast_color_as_ansi256(color: ASTColor, index: u8) {
        assert_eq!(color.as_ansi(), AnsiValue { index });
    }

    #[test_case(RgbValue{red: 0, green: 0, blue: 0}, 16)]
    #[test_case(RgbValue{red: 0, green: 128, blue: 255}, 33)]
    fn test_rgb_color_as_ansi256(rgb_color: RgbValue, index: u8) {
        assert_eq!(rgb_color.as_ansi(), AnsiValue { index });
    }

    #[test_case(AnsiValue{index: 42}, RgbValue{red: 0, green: 215, blue: 135})]
    fn test_ansi256_color_as_rgb(ansi_color: AnsiValue, rgb_color: RgbValue) {
        assert_eq!(ansi_color.as_rgb(), rgb_color);
    }

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    /// ANSI: 57 `BlueViolet`
    /// RGB: #5f00ff rgb(95,0,255)
    #[test]
    fn test_rgb_to_ansi_and_back() {
        let rgb = RgbValue::from_u8(95, 0, 255);
        let ansi = AnsiValue::from(rgb);
        assert_eq!(ansi, AnsiValue::new(57));
        assert_eq!(RgbValue::from(ansi), rgb);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(RgbValue::from(0x00FF_8000), RgbValue::from_u8(255, 128, 0));
    }

    #[test]
    fn test_for_depth() {
        let color = ASTColor::Rgb(255, 128, 0);
        assert_eq!(color.for_depth(ColorDepth::Truecolor), color);
        assert_eq!(color.for_depth(ColorDepth::Ansi256), ASTColor::Ansi256(208));
        assert_eq!(
            ASTColor::Ansi256(57).for_depth(ColorDepth::Truecolor),
            ASTColor::Rgb(95, 0, 255)
        );
    }
}
