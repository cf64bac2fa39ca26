// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `stutter_ansi_color`
//!
//! Small, dependency light crate that turns a highlight color into the escape sequences
//! that a terminal understands. It knows about:
//! 1. 24-bit truecolor foreground colors ([`RgbValue`]).
//! 2. The xterm 256 color palette ([`AnsiValue`]), used when the terminal can't do
//!    truecolor.
//! 3. A single fixed "dumb terminal" highlight (bold red) that works everywhere.
//!
//! It also detects what the current terminal supports, see [`global_color_support`].
//!
//! ```rust
//! use stutter_ansi_color::{ASTColor, ASTStyle, AnsiStyledText};
//!
//! let styled = AnsiStyledText {
//!     text: "echo",
//!     style: smallvec::smallvec![ASTStyle::Foreground(ASTColor::Rgb(255, 0, 128))],
//! };
//! assert_eq!(styled.to_string(), "\x1b[38;2;255;0;128mecho\x1b[0m");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod color;
pub mod convert;
pub mod detect_color_support;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use color::*;
pub use convert::*;
pub use detect_color_support::*;
