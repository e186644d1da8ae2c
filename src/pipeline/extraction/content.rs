//! Boilerplate removal for cable bodies.

use std::sync::LazyLock;

use regex::Regex;

/// Removal patterns, applied in order.
static BOILERPLATE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Paragraph classification: 1. (C), 2.(SBU), 3 (S/NF)
        r"(?i)[0-9]+\s*\.?\s*\(?[SBU/NTSC]+\)[ ]*",
        // Section delimiters
        r"-{3,}|={3,}|_{3,}|/{3,}|#{3,}|\*{3,}|\.{4,}",
        // Section footers: SECTION 01 OF 02, ROME 0001 003.2 OF 004
        r"\s*[A-Z]+\s+[0-9 .]+OF\s+[0-9]+",
        // Paragraph numbers without classification
        r"(?m)^[0-9]+\s*\.\s*",
        r"(?:\bEND\s+)?\bSUMMAR?Y(?:\s+AND\s+COMMENT)?(?:\s+AND\s+ACTION\s+REQUEST)?\b\s*\.?:?[ ]*",
        r"(?:\bEND\s+)?\bCOMMENT\b\s*\.?:?[ ]*",
        r"\bSIPDIS\b\s*",
        // Redactions
        r"(?i)x{4,}|\bxx+\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("Invalid boilerplate pattern"))
    .collect()
});

/// Strip paragraph markers, delimiters, section footers, summary/comment
/// markers, `SIPDIS` and redaction runs from `content`.
///
/// Repeats until nothing changes, so the result is stable under another
/// call.
pub fn clean_content(content: &str) -> String {
    let mut current = content.to_string();
    loop {
        let mut next = current.clone();
        for pattern in BOILERPLATE.iter() {
            next = pattern.replace_all(&next, "").into_owned();
        }
        let next = next.trim().to_string();
        if next == current {
            return next;
        }
        current = next;
    }
}
