// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can go wrong while turning a file on disk into a
/// [`crate::Document`]. The highlighter itself can't fail, so this is the only error
/// taxonomy in this crate.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum DocumentLoadError {
    #[error("📄 Could not find file: '{path}'")]
    #[diagnostic(
        code(stutter::document::not_found),
        help("Check the path that was passed to --file")
    )]
    NotFound { path: String },

    #[error("📑 Could not read file: '{path}'")]
    #[diagnostic(
        code(stutter::document::read_failure),
        help("The file must be readable and contain UTF-8 encoded text")
    )]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("💾 Could not allocate room for {requested} characters of file: '{path}'")]
    #[diagnostic(code(stutter::document::allocation_failure))]
    AllocationFailure { path: String, requested: usize },
}
