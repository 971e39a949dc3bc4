// Whitespace handling for extracted text.
//
// Backend output is normalized once so that callers always see the same
// shape: no trailing spaces, no carriage returns, no runs of blank lines.

/// Normalize extracted text.
///
/// Drops carriage returns, turns tabs into spaces, strips trailing whitespace
/// from every line, collapses blank-line runs to a single blank line and
/// trims the result.
pub fn normalize_whitespace(text: &str) -> String {
    let cleaned = text.replace('\r', "").replace('\t', " ");
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;
    for line in cleaned.lines() {
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(line);
        previous_blank = blank;
    }
    lines.join("\n").trim().to_string()
}

/// Number of non-whitespace characters, used to decide whether a text node is readable.
pub(crate) fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
