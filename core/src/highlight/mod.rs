// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod classifier;
pub mod color_assigner;
pub mod color_generator;
pub mod config;
pub mod disjoint_set;
pub mod highlighter;
pub mod mark_table;
pub mod scanner;
pub mod span;

// Re-export.
pub use classifier::*;
pub use color_assigner::*;
pub use color_generator::*;
pub use config::*;
pub use disjoint_set::*;
pub use highlighter::*;
pub use mark_table::*;
pub use scanner::*;
pub use span::*;

// Test fixtures.
#[cfg(test)]
pub(crate) mod test_fixtures;
