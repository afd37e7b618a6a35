//! Text statistics for the status bar.

/// Average reading speed used for the read-time estimate (words per minute).
pub const WORDS_PER_MINUTE: usize = 225;

/// An immutable snapshot of buffer statistics.
///
/// Recomputed wholesale from the buffer on every change, so all four fields
/// always describe the same input, never a partially updated mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Code-point count of the text.
    pub chars: usize,
    /// Count of maximal whitespace-delimited tokens.
    pub words: usize,
    /// Newline-delimited segment count (an empty text still has one line).
    pub lines: usize,
    /// Estimated read time in seconds at [`WORDS_PER_MINUTE`].
    pub read_time_secs: usize,
}

/// Compute statistics for `text`.
pub fn stats(text: &str) -> Stats {
    let chars = text.chars().count();
    let words = text.split_whitespace().count();
    let lines = text.split('\n').count();
    // ceil(words / wpm * 60) without going through floats.
    let read_time_secs = (words * 60).div_ceil(WORDS_PER_MINUTE);

    Stats {
        chars,
        words,
        lines,
        read_time_secs,
    }
}
