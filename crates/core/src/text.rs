//! Text normalization for fuzzy matching.
//!
//! Voice slots arrive with inconsistent casing and accents ("Plátano",
//! "platano", "PLATANO"); every comparison goes through [`normalize`] first
//! so those variants collapse to the same form.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lower-case, strip diacritical marks (NFD decomposition, combining marks
/// dropped), and trim surrounding whitespace.
///
/// Total function: any input produces a (possibly empty) normalized string.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
