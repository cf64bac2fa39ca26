// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File,
          io::{self, Read},
          path::Path,
          str};

use crate::DocumentLoadError;

/// An immutable, 0-indexed sequence of decoded characters. This is what the
/// highlighter scans, and what the renderer prints.
///
/// Characters are Unicode scalar values ([`char`]), not bytes, so a window of 3
/// characters over `"héllo"` is `['h', 'é', 'l']`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    chars: Vec<char>,
}

impl Document {
    /// Read the file at `path` and decode it as UTF-8.
    ///
    /// The byte count comes from the file's metadata, before anything is read. Both the
    /// byte buffer and the character buffer are reserved up front using that count, which
    /// is an upper bound on the number of characters in the file. The reservations are
    /// fallible, so a huge file produces [`DocumentLoadError::AllocationFailure`] instead
    /// of an abort. The character buffer is trimmed to the real count once decoded.
    ///
    /// # Errors
    ///
    /// - [`DocumentLoadError::NotFound`] if there is no file at `path`.
    /// - [`DocumentLoadError::ReadFailure`] if the file can't be read, or isn't valid
    ///   UTF-8.
    /// - [`DocumentLoadError::AllocationFailure`] if either buffer can't be allocated.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, DocumentLoadError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let read_failure = |source: io::Error| DocumentLoadError::ReadFailure {
            path: path_str.clone(),
            source,
        };

        let mut file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DocumentLoadError::NotFound {
                path: path_str.clone(),
            },
            _ => read_failure(source),
        })?;

        let metadata_len = file.metadata().map_err(read_failure)?.len();
        let byte_count = usize::try_from(metadata_len).unwrap_or(usize::MAX);

        let mut bytes: Vec<u8> = try_reserve_buffer(byte_count, &path_str)?;
        file.read_to_end(&mut bytes).map_err(read_failure)?;

        let text = str::from_utf8(&bytes).map_err(|err| {
            read_failure(io::Error::new(io::ErrorKind::InvalidData, err))
        })?;

        let mut chars: Vec<char> = try_reserve_buffer(bytes.len(), &path_str)?;
        chars.extend(text.chars());
        chars.shrink_to_fit();

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Loaded document",
            path = %path_str,
            byte_count = %bytes.len(),
            char_count = %chars.len()
        );

        Ok(Self { chars })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }
}

/// An empty buffer with room for exactly `capacity` items, or
/// [`DocumentLoadError::AllocationFailure`] if that much memory isn't available.
fn try_reserve_buffer<T>(capacity: usize, path: &str) -> Result<Vec<T>, DocumentLoadError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| DocumentLoadError::AllocationFailure {
            path: path.to_string(),
            requested: capacity,
        })?;
    Ok(buffer)
}

mod convert {
    use super::Document;

    impl From<&str> for Document {
        fn from(text: &str) -> Self {
            Self {
                chars: text.chars().collect(),
            }
        }
    }

    impl From<String> for Document {
        fn from(text: String) -> Self { Self::from(text.as_str()) }
    }

    impl From<Vec<char>> for Document {
        fn from(chars: Vec<char>) -> Self { Self { chars } }
    }
}
