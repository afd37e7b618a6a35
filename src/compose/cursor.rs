//! Caret-aware buffer edits.
//!
//! All offsets here are code-point offsets into the buffer they were
//! computed from. The functions are pure: they take explicit offsets and
//! return new values, leaving focus/caret restoration to the owning
//! surface. Out-of-range offsets are clamped rather than rejected so every
//! function stays total.

/// Byte offset of the `cp_idx`-th code point in `s` (clamped to the end).
fn byte_at(s: &str, cp_idx: usize) -> usize {
    s.char_indices()
        .nth(cp_idx)
        .map_or(s.len(), |(byte, _)| byte)
}

/// Replace the half-open code-point range `[start, end)` with `text`.
///
/// Returns the new buffer and the new caret position, which sits
/// immediately after the inserted text. With `start == end` this is a pure
/// insertion at the caret.
pub fn insert(buffer: &str, text: &str, start: usize, end: usize) -> (String, usize) {
    let len = buffer.chars().count();
    let start = start.min(len);
    let end = end.clamp(start, len);

    let start_byte = byte_at(buffer, start);
    let end_byte = byte_at(buffer, end);

    let mut out = String::with_capacity(buffer.len() + text.len());
    out.push_str(&buffer[..start_byte]);
    out.push_str(text);
    out.push_str(&buffer[end_byte..]);

    (out, start + text.chars().count())
}

/// Replace the selection `[start, end)` with `formatted` text, returning
/// the new buffer and a selection spanning the replacement so the
/// just-transformed span stays highlighted.
///
/// A degenerate selection (`start == end`) is a defined no-op: the buffer
/// and selection come back unchanged, because formatting nothing is not a
/// valid operation and must fail silently rather than touch the buffer.
pub fn replace_selection(
    buffer: &str,
    formatted: &str,
    start: usize,
    end: usize,
) -> (String, (usize, usize)) {
    if start == end {
        return (buffer.to_string(), (start, end));
    }
    let (out, _) = insert(buffer, formatted, start, end);
    (out, (start, start + formatted.chars().count()))
}

/// Map a code-point caret offset to a (line, column) pair, both zero-based
/// and in code points. Offsets past the end land on the final position.
pub fn line_col(text: &str, caret: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for (idx, ch) in text.chars().enumerate() {
        if idx == caret {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Map a (line, column) pair back to a code-point caret offset, clamping
/// the column to the line's length and the line to the buffer.
pub fn caret_at(text: &str, line: usize, col: usize) -> usize {
    let mut caret = 0;
    for (idx, seg) in text.split('\n').enumerate() {
        let seg_len = seg.chars().count();
        if idx == line {
            return caret + col.min(seg_len);
        }
        caret += seg_len + 1; // +1 for the newline
    }
    // Line past the end: clamp to the buffer end.
    text.chars().count()
}
