// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::{IntoDiagnostic, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create a file appender that never rotates, so the log always lands in exactly
/// `path_str`. The file is appended to if it already exists.
///
/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of that: `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if the parent folder or the file name of `path_str` can't be
/// determined, or if the file can't be opened for writing.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_stem = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_stem.to_string_lossy())
        .build(parent)
        .into_diagnostic()
        .wrap_err_with(|| format!("Can't open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_makes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("stutter.log");
        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }
}
