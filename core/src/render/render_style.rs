// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use stutter_ansi_color::{ColorDepth, ColorSupport};

/// How marked characters are styled on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum RenderStyle {
    /// 24 bit foreground color: `ESC[38;2;R;G;Bm`.
    Truecolor,
    /// Nearest xterm 256 color palette entry: `ESC[38;5;Nm`.
    Ansi256,
    /// One fixed bold red style for every group: `ESC[01;31m`.
    Dumb,
}

impl RenderStyle {
    /// Pick the richest style that the terminal supports. Terminals without color get
    /// [`RenderStyle::Dumb`].
    #[must_use]
    pub fn from_color_support(color_support: ColorSupport) -> Self {
        match color_support.depth() {
            Some(ColorDepth::Truecolor) => RenderStyle::Truecolor,
            Some(ColorDepth::Ansi256) => RenderStyle::Ansi256,
            None => RenderStyle::Dumb,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(ColorSupport::Truecolor, RenderStyle::Truecolor)]
    #[test_case(ColorSupport::Ansi256, RenderStyle::Ansi256)]
    #[test_case(ColorSupport::NoColor, RenderStyle::Dumb)]
    fn test_from_color_support(color_support: ColorSupport, expected: RenderStyle) {
        assert_eq!(RenderStyle::from_color_support(color_support), expected);
    }
}
