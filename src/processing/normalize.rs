use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw OCR text into the form every downstream stage consumes:
/// NFKC-composed, uppercase, restricted to `[A-Z0-9 ]`, single-spaced,
/// trimmed. Pure and total; empty input yields an empty string, and the
/// function is idempotent.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfkc().collect();

    let mut out = String::with_capacity(composed.len());
    let mut pending_space = false;
    for ch in composed.chars().flat_map(|c| c.to_uppercase()) {
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Every other character becomes at most one separating space.
            pending_space = true;
        }
    }
    out
}
