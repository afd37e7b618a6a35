//! Paragraph cleanup for mobile readability.

/// Trim every line and collapse runs of blank lines down to one.
///
/// Lines are split on `\n`, trimmed of leading and trailing whitespace,
/// and any run of two or more now-empty lines is reduced to a single empty
/// line. Non-empty line content is untouched beyond the trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut empty_run = 0;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            empty_run += 1;
            if empty_run <= 1 {
                out.push(line);
            }
        } else {
            empty_run = 0;
            out.push(line);
        }
    }

    out.join("\n")
}
