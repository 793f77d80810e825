//! Whitespace canonicalization.

/// Collapses every whitespace run to a single space and trims both ends.
///
/// No case folding or punctuation stripping: offsets found in normalized
/// text must stay meaningful in the whitespace-collapsed OCR text.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
