// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};

use crate::{ASTColor, SgrCode};

/// A piece of text plus the styles that are applied to it. When displayed, the styles
/// are emitted first, then the text, then [`SgrCode::Reset`]. So every styled text is
/// wrapped in a start / reset pair, and never leaks its style into what follows.
///
/// # Example usage:
///
/// ```rust
/// use stutter_ansi_color::*;
///
/// let text = fg_color(ASTColor::Ansi256(196), "red");
/// assert_eq!(text.to_string(), "\x1b[38;5;196mred\x1b[0m");
///
/// let text = dumb_highlight("loud");
/// assert_eq!(text.to_string(), "\x1b[01;31mloud\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub style: sizing::InlineVecASTStyles,
}

pub mod sizing {
    use super::{ASTStyle, SmallVec};

    /// A highlight never needs more than a couple of attributes.
    pub const MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE: usize = 4;
    pub type InlineVecASTStyles =
        SmallVec<[ASTStyle; MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE]>;

    /// Enough for one styled character: a truecolor sequence, up to 4 bytes of UTF-8
    /// and the reset sequence.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ASTStyle {
    Foreground(ASTColor),
    /// The fixed bold red highlight, see [`SgrCode::BoldRed`].
    DumbHighlight,
}

mod ansi_styled_text_impl {
    use super::{AnsiStyledText, SmallString, sizing};

    impl AnsiStyledText<'_> {
        /// This is different than the [`std::fmt::Display`] trait implementation,
        /// because it doesn't allocate a new [String], but instead allocates an inline
        /// buffer on the stack. If this buffer gets larger than
        /// [`sizing::DEFAULT_STRING_STORAGE_SIZE`], it will spill to the heap.
        #[must_use]
        pub fn to_small_str(&self) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            use std::fmt::Write as _;
            let mut acc = SmallString::new();
            _ = write!(acc, "{self}");
            acc
        }
    }
}

pub fn fg_color(color: impl Into<ASTColor>, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec![ASTStyle::Foreground(color.into())],
    }
}

pub fn dumb_highlight(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec![ASTStyle::DumbHighlight],
    }
}

mod style_impl {
    use super::{ASTColor, ASTStyle, Display, Formatter, Result, SgrCode};

    impl Display for ASTStyle {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                ASTStyle::Foreground(ASTColor::Rgb(r, g, b)) => write!(f, "{}", SgrCode::ForegroundRGB(r, g, b)),
                ASTStyle::Foreground(ASTColor::Ansi256(i))   => write!(f, "{}", SgrCode::ForegroundAnsi256(i)),
                ASTStyle::DumbHighlight                      => write!(f, "{}", SgrCode::BoldRed),
            }
        }
    }
}

mod display_trait_impl {
    use super::{AnsiStyledText, Display, Formatter, Result, SgrCode};

    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for style_item in &self.style {
                write!(f, "{style_item}")?;
            }
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn test_fg_rgb_color() {
        let it = fg_color(ASTColor::Rgb(1, 2, 3), "abc");
        assert_eq!(it.to_string(), "\x1b[38;2;1;2;3mabc\x1b[0m");
    }

    #[test]
    fn test_ansi256_fg_color() {
        let it = fg_color(ASTColor::Ansi256(33), "Hello");
        assert_eq!(it.to_string(), "\x1b[38;5;33mHello\x1b[0m");
    }

    #[test]
    fn test_dumb_highlight() {
        let it = dumb_highlight("x");
        assert_eq!(it.to_string(), "\x1b[01;31mx\x1b[0m");
    }

    #[test]
    fn test_unstyled_text_still_resets() {
        let it = AnsiStyledText {
            text: "plain",
            style: smallvec![],
        };
        assert_eq!(it.to_string(), "plain\x1b[0m");
    }

    #[test]
    fn test_to_small_str_matches_display() {
        let it = fg_color(ASTColor::Rgb(255, 255, 255), "é");
        assert_eq!(it.to_small_str().as_str(), it.to_string());
        assert!(!it.to_small_str().spilled());
    }
}
