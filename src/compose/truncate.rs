//! Truncation decision for the phone-style preview pane.
//!
//! The preview mimics how feeds fold long posts: past a character budget or
//! a handful of line breaks, the post is cut and a "see more" control is
//! offered. The decision is pure; the caller owns the expanded flag and
//! renders the affordance.

/// The control the caller should render next to the preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Content fits; render nothing.
    None,
    /// Content is cut; offer a "see more" control.
    Expand,
    /// Content is shown in full despite exceeding limits; offer "see less".
    Collapse,
}

/// Result of a truncation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Whether the displayed text was cut.
    pub truncated: bool,
    /// The text to display (trailing whitespace trimmed when cut).
    pub display: String,
    /// Code-point offset of the cut into the input text (input length when
    /// nothing was cut). Valid only for the exact text it was computed
    /// from.
    pub cut: usize,
    /// Which expand/collapse control to render.
    pub affordance: Affordance,
}

/// Decide whether `text` must be folded in the preview.
///
/// `char_limit` is a code-point budget; `newline_limit` caps how many line
/// breaks may appear. When both limits would cut, the earlier position
/// wins, so a collapsed preview never shows more than `newline_limit - 1`
/// breaks regardless of the character budget.
pub fn decide(text: &str, expanded: bool, char_limit: usize, newline_limit: usize) -> Preview {
    let char_count = text.chars().count();
    if char_count == 0 {
        // Placeholder state; the caller renders its own empty-post hint.
        return Preview {
            truncated: false,
            display: String::new(),
            cut: 0,
            affordance: Affordance::None,
        };
    }

    let newline_count = text.chars().filter(|&ch| ch == '\n').count();
    let needs_truncation = char_count > char_limit || newline_count >= newline_limit;

    if !needs_truncation {
        return Preview {
            truncated: false,
            display: text.to_string(),
            cut: char_count,
            affordance: Affordance::None,
        };
    }

    if expanded {
        return Preview {
            truncated: false,
            display: text.to_string(),
            cut: char_count,
            affordance: Affordance::Collapse,
        };
    }

    let mut cut = char_count.min(char_limit);
    // Newline-based truncation takes precedence when it occurs earlier:
    // cut at the position where the running break count reaches the limit.
    let mut newlines_seen = 0;
    for (idx, ch) in text.chars().enumerate() {
        if ch == '\n' {
            newlines_seen += 1;
            if newlines_seen >= newline_limit {
                cut = cut.min(idx);
                break;
            }
        }
    }

    let display: String = text.chars().take(cut).collect();
    Preview {
        truncated: true,
        display: display.trim_end().to_string(),
        cut,
        affordance: Affordance::Expand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAR_LIMIT: usize = 210;
    const NEWLINE_LIMIT: usize = 5;

    #[test]
    fn test_empty_text_is_untruncated_placeholder() {
        let p = decide("", false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(!p.truncated);
        assert_eq!(p.display, "");
        assert_eq!(p.affordance, Affordance::None);
    }

    #[test]
    fn test_short_text_passes_through() {
        let p = decide("short post", false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(!p.truncated);
        assert_eq!(p.display, "short post");
        assert_eq!(p.affordance, Affordance::None);
    }

    #[test]
    fn test_long_text_is_cut_at_char_limit() {
        let text = "x".repeat(250);
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(p.truncated);
        assert!(p.display.chars().count() <= CHAR_LIMIT);
        assert_eq!(p.cut, CHAR_LIMIT);
        assert_eq!(p.affordance, Affordance::Expand);
    }

    #[test]
    fn test_expanded_shows_full_text_with_collapse() {
        let text = "x".repeat(250);
        let p = decide(&text, true, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(!p.truncated);
        assert_eq!(p.display, text);
        assert_eq!(p.affordance, Affordance::Collapse);
    }

    #[test]
    fn test_newline_cut_wins_when_earlier() {
        // Six breaks inside the first 100 characters: the cut must land on
        // the fifth break, not at the character budget.
        let text = format!("{}\na\nb\nc\nd\ne\nf{}", "y".repeat(60), "z".repeat(300));
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(p.truncated);
        // Position of the 5th newline: 60 + "\na\nb\nc\nd".chars = 60 + 8.
        assert_eq!(p.cut, 68);
        assert_eq!(p.display.chars().filter(|&c| c == '\n').count(), 4);
    }

    #[test]
    fn test_char_cut_wins_when_earlier_than_newline_cut() {
        let text = format!("{}\n\n\n\n\n\nend", "y".repeat(300));
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert_eq!(p.cut, CHAR_LIMIT);
    }

    #[test]
    fn test_exactly_at_char_limit_is_not_truncated() {
        let text = "x".repeat(CHAR_LIMIT);
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(!p.truncated);
    }

    #[test]
    fn test_newline_count_alone_triggers_truncation() {
        let text = "a\nb\nc\nd\ne\nf"; // 5 breaks, 11 chars
        let p = decide(text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(p.truncated);
        assert_eq!(p.display, "a\nb\nc\nd\ne");
    }

    #[test]
    fn test_cut_display_has_no_trailing_whitespace() {
        let text = format!("{}   \n{}", "x".repeat(207), "y".repeat(100));
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert!(p.truncated);
        assert_eq!(p.display, "x".repeat(207));
    }

    #[test]
    fn test_cut_respects_code_points() {
        let text = "🚀".repeat(250);
        let p = decide(&text, false, CHAR_LIMIT, NEWLINE_LIMIT);
        assert_eq!(p.display.chars().count(), CHAR_LIMIT);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn collapsed_display_never_exceeds_limits(
                s in "\\PC{0,400}",
                char_limit in 1..300usize,
                newline_limit in 1..10usize,
            ) {
                let p = decide(&s, false, char_limit, newline_limit);
                if p.truncated {
                    prop_assert!(p.display.chars().count() <= char_limit);
                    prop_assert!(
                        p.display.chars().filter(|&c| c == '\n').count() < newline_limit
                    );
                }
            }

            #[test]
            fn decide_is_deterministic(
                s in "\\PC{0,200}",
                expanded in proptest::bool::ANY,
            ) {
                let a = decide(&s, expanded, 210, 5);
                let b = decide(&s, expanded, 210, 5);
                prop_assert_eq!(a, b);
            }

            #[test]
            fn untruncated_display_equals_input(s in "[a-z ]{1,100}") {
                // No newlines and under the budget: always shown whole.
                let p = decide(&s, false, 210, 5);
                prop_assert!(!p.truncated);
                prop_assert_eq!(p.display, s);
            }
        }
    }
}
