// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Any error type that implements
/// [`miette::Diagnostic`], like [`crate::DocumentLoadError`], converts into it with `?`.
///
/// # Example
///
/// ```
/// use stutter_core::{CommonResult, Document, ok};
///
/// fn count_chars(path: &str) -> CommonResult<usize> {
///     let document = Document::try_load(path)?;
///     ok!(document.len())
/// }
///
/// assert!(count_chars("/this/path/does/not/exist").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
