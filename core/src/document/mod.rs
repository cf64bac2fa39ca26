// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod document_impl;
pub mod document_load_error;

// Re-export.
pub use document_impl::*;
pub use document_load_error::*;
