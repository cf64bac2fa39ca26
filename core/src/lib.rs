// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `stutter_core`
//!
//! Highlight repeated alphanumeric substrings in a decoded text document. The engine
//! slides a window of `window_size` characters over the document, and for every window
//! that is made up entirely of alphanumeric characters, it looks ahead (at most
//! `scan_area_size` characters) for another window that matches it case-insensitively.
//! Both copies are marked, and every member of a match group shares one color.
//!
//! The pipeline is:
//!
//! ```text
//! Document ─▶ scan() ─▶ Vec<MatchGroup> ─▶ assign colors ─▶ MarkTable ─▶ render()
//!                ▲                              ▲
//!           classifier                   ColorGenerator
//! ```
//!
//! # Example
//!
//! ```rust
//! use stutter_core::{Document, HighlightConfig, RandomColorGenerator, highlight};
//!
//! let document = Document::from("abc abc xyz");
//! let config = HighlightConfig { scan_area_size: 20, ..Default::default() };
//! let mut color_generator = RandomColorGenerator::from_config(&config);
//!
//! let (mark_table, summary) = highlight(&document, &config, &mut color_generator);
//!
//! assert_eq!(summary.group_count, 1);
//! assert!(mark_table.is_marked(0) && mark_table.is_marked(4));
//! assert!(!mark_table.is_marked(8));
//! assert_eq!(mark_table.color_at(0), mark_table.color_at(6));
//! ```
//!
//! Rendering the result to a terminal is done with [`render`], which supports truecolor,
//! 256 color, and a "dumb terminal" fixed highlight, see [`RenderStyle`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod document;
pub mod highlight;
pub mod render;

// Re-export.
pub use common::*;
pub use document::*;
pub use highlight::*;
pub use render::*;
