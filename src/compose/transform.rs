//! Apply a [`Style`] across a string, one Unicode scalar value at a time.

use super::style::Style;

/// Transform `text` into the given style.
///
/// Iterates by code point (never by UTF-16 unit), so surrogate pairs and
/// already-styled glyphs cannot be split or corrupted. Code points with no
/// styled counterpart pass through verbatim. No Unicode normalization is
/// performed; input is taken as already normalized.
pub fn transform(text: &str, style: Style) -> String {
    text.chars().map(|ch| style.map(ch)).collect()
}
