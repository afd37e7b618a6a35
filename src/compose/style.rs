//! Unicode style variants and the per-code-point mapping behind them.
//!
//! Styling works by substituting characters from the Mathematical
//! Alphanumeric Symbols block (bold/italic/serif-bold) or the IPA and
//! phonetic extension blocks (small caps), so styled text survives being
//! pasted anywhere plain Unicode does. Characters outside the mapped
//! ranges pass through unchanged; there is simply no styled glyph for
//! them.

/// One of the four visual text variants.
///
/// A closed set dispatched through [`Style::map`]; callers never inject
/// mapping functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Sans-serif bold (letters and digits).
    Bold,
    /// Sans-serif italic (letters only; the block has no italic digits).
    Italic,
    /// Serif bold, often read as "bigger" / headline text.
    SerifBold,
    /// Small capitals via IPA/phonetic glyphs.
    SmallCaps,
}

// Mathematical Alphanumeric Symbols base offsets. These constants are the
// correctness contract: a wrong base silently produces the wrong alphabet.
const BOLD_UPPER: u32 = 0x1D5D4; // 𝗔
const BOLD_LOWER: u32 = 0x1D5EE; // 𝗮
const BOLD_DIGIT: u32 = 0x1D7EC; // 𝟬
const ITALIC_UPPER: u32 = 0x1D608; // 𝘈
const ITALIC_LOWER: u32 = 0x1D622; // 𝘢
const SERIF_BOLD_UPPER: u32 = 0x1D400; // 𝐀
const SERIF_BOLD_LOWER: u32 = 0x1D41A; // 𝐚
const SERIF_BOLD_DIGIT: u32 = 0x1D7CE; // 𝟎

impl Style {
    /// Map a single code point into this style, or return it unchanged
    /// when no styled glyph exists.
    pub fn map(self, ch: char) -> char {
        match self {
            Self::Bold => offset_map(ch, BOLD_UPPER, BOLD_LOWER, Some(BOLD_DIGIT)),
            Self::Italic => offset_map(ch, ITALIC_UPPER, ITALIC_LOWER, None),
            Self::SerifBold => offset_map(
                ch,
                SERIF_BOLD_UPPER,
                SERIF_BOLD_LOWER,
                Some(SERIF_BOLD_DIGIT),
            ),
            Self::SmallCaps => small_caps(ch),
        }
    }
}

/// Shift `ch` into a contiguous styled range when it falls in A-Z, a-z, or
/// (when the style defines one) 0-9.
fn offset_map(ch: char, upper_base: u32, lower_base: u32, digit_base: Option<u32>) -> char {
    let code = u32::from(ch);
    let mapped = match ch {
        'A'..='Z' => Some(upper_base + (code - u32::from('A'))),
        'a'..='z' => Some(lower_base + (code - u32::from('a'))),
        '0'..='9' => digit_base.map(|base| base + (code - u32::from('0'))),
        _ => None,
    };
    // The target blocks are fully assigned, so the conversion cannot fail
    // for in-range input; fall back to identity anyway to stay total.
    mapped.and_then(char::from_u32).unwrap_or(ch)
}

/// Small-caps glyphs are scattered across the IPA and Phonetic Extensions
/// blocks, so a direct table replaces the offset arithmetic. Both cases of
/// each letter map to the same glyph. 's' and 'x' have no distinct
/// small-capital form in these blocks and keep their lowercase shape.
fn small_caps(ch: char) -> char {
    match ch.to_ascii_lowercase() {
        'a' => '\u{1D00}', // ᴀ
        'b' => '\u{0299}', // ʙ
        'c' => '\u{1D04}', // ᴄ
        'd' => '\u{1D05}', // ᴅ
        'e' => '\u{1D07}', // ᴇ
        'f' => '\u{0493}', // ғ
        'g' => '\u{0262}', // ɢ
        'h' => '\u{029C}', // ʜ
        'i' => '\u{026A}', // ɪ
        'j' => '\u{1D0A}', // ᴊ
        'k' => '\u{1D0B}', // ᴋ
        'l' => '\u{029F}', // ʟ
        'm' => '\u{1D0D}', // ᴍ
        'n' => '\u{0274}', // ɴ
        'o' => '\u{1D0F}', // ᴏ
        'p' => '\u{1D18}', // ᴘ
        'q' => '\u{01EB}', // ǫ
        'r' => '\u{0280}', // ʀ
        's' => 's',
        't' => '\u{1D1B}', // ᴛ
        'u' => '\u{1D1C}', // ᴜ
        'v' => '\u{1D20}', // ᴠ
        'w' => '\u{1D21}', // ᴡ
        'x' => 'x',
        'y' => '\u{028F}', // ʏ
        'z' => '\u{1D22}', // ᴢ
        _ => ch,
    }
}
