// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character level predicates used by the scanner. These are total over [`char`] and
//! have no side effects.

/// A "word" character is any alphanumeric code point, in any script. So `'é'`, `'ß'`,
/// `'Ж'` and `'٣'` are word characters, while whitespace, punctuation and symbols are
/// not.
#[must_use]
pub fn is_word_char(character: char) -> bool { character.is_alphanumeric() }

/// Canonical case-insensitive form of `character`.
///
/// Uses the simple lowercase mapping. When lowercasing expands into more than one
/// character (eg: `'İ'`), the character is returned unchanged, so that one character
/// always folds to exactly one character. Final sigma `'ς'` folds to `'σ'`, which is
/// where `'Σ'` lands too.
#[must_use]
pub fn fold_case(character: char) -> char {
    if character == 'ς' {
        return 'σ';
    }
    let mut lower = character.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(it), None) => it,
        _ => character,
    }
}

#[must_use]
pub fn chars_eq_ignore_case(lhs: char, rhs: char) -> bool {
    lhs == rhs || fold_case(lhs) == fold_case(rhs)
}
