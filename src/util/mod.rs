//! Formatting helpers

/// Render `n` with unicode superscript digits (`425` → `⁴²⁵`).
pub(crate) fn superscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .chars()
        .map(|c| DIGITS[(c as usize) - ('0' as usize)])
        .collect()
}
