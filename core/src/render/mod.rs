// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod render_style;
pub mod renderer;

// Re-export.
pub use render_style::*;
pub use renderer::*;
