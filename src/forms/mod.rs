pub mod categories;
pub mod products;
pub mod tags;

/// Maximum allowed length for category, product and tag names.
pub(crate) const NAME_MAX_LEN: u64 = 255;

/// Collapse runs of whitespace to single spaces, drop control characters and trim.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
