//! Component name normalization
//!
//! Names typed into tables, shown on cards and carried between screens can
//! drift in case, accents and quote style ("Módulo" vs "Modulo", `24”` vs
//! `24"`). Comparisons go through [`normalize_name`] so those variants match.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produce the comparison key for a component name.
///
/// Lowercases, trims, collapses inner whitespace runs, maps curly quotes to
/// straight ones and strips diacritics. Idempotent.
pub fn normalize_name(name: &str) -> String {
    // Lowercase first: some uppercase letters lowercase into a base letter
    // plus a combining mark, which the decomposition pass then drops.
    let stripped: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(straighten_quote)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn straighten_quote(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
        other => other,
    }
}
