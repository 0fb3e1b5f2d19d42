//! Content normalization
//!
//! Normalization erases presentation so that formatting-only edits map to
//! the same fingerprint: case is folded, markdown markup characters are
//! stripped, and whitespace runs collapse to single spaces.

/// Characters that only carry markdown presentation, not content.
const MARKUP: [char; 7] = ['#', '*', '_', '`', '>', '|', '~'];

/// Normalize content for fingerprinting and similarity comparison.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if MARKUP.contains(&ch) {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

/// Split normalized text into comparison tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}
