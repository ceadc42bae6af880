/// Upper bound on returned text, counted in characters.
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Collapse every whitespace run to a single space, trim both ends and cap the
/// result at `MAX_TEXT_CHARS` characters.
///
/// Applying it twice yields the same string.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len().min(MAX_TEXT_CHARS * 4));
    let mut chars = 0usize;

    for word in raw.split_whitespace() {
        if chars > 0 {
            if chars + 1 > MAX_TEXT_CHARS {
                break;
            }
            out.push(' ');
            chars += 1;
        }
        for c in word.chars() {
            if chars == MAX_TEXT_CHARS {
                break;
            }
            out.push(c);
            chars += 1;
        }
        if chars == MAX_TEXT_CHARS {
            break;
        }
    }

    // A cut right after a separator leaves a trailing space
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out
}
