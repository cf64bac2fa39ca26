// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `stutter`
//!
//! A command line tool that prints a text file with its nearby repeats highlighted.
//! Stutters ("the the"), copy-paste echoes, and rhymes all show up in color, and every
//! occurrence of the same repeat shares one color.
//!
//! ```text
//! stutter --file essay.txt                  # 3 character windows, look 100 ahead
//! stutter -f essay.txt -w 5 -s 300 -p       # longer windows, pure colors
//! stutter -f essay.txt --dumb               # bold red, for dumb terminals
//! stutter -f essay.txt -l                   # log debug output to log.txt
//! ```
//!
//! Exit codes:
//!
//! | Code  | Meaning                                   |
//! |-------|-------------------------------------------|
//! | `0`   | Success (including `--help`, `--version`) |
//! | `1`   | Output could not be written               |
//! | `253` | Out of memory while loading the file      |
//! | `254` | The file could not be found or read       |
//! | `255` | Invalid command line arguments            |

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod stutter;

// Re-export.
pub use stutter::*;
