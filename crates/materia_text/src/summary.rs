use std::sync::LazyLock;

use materia_logging::materia_trace;
use regex::Regex;

/// `(More info ...)` / `[More info ...]` navigation hints. Delimiters need not pair up.
static MORE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[(\[][\s\x{FEFF}]*More info.*?[)\]]").expect("valid more-info regex")
});

/// Citations `[1]`, notes `[Note: ...]` and internal codes. No nesting.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid bracketed regex"));

/// First `G:`, `B:` or `R:` at the start or after whitespace, through end of text.
/// Whitespace here and below includes U+FEFF.
static BASIS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[\s\x{FEFF}]+|^)[GBR]:[\s\S]*").expect("valid basis marker regex")
});

static EDGE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{FEFF}.,;:\-]+|[\s\x{FEFF}.,;:\-]+$").expect("valid edge punctuation regex")
});

/// Short, citation-free summary: the text preceding the first basis marker.
pub fn summarize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let clean = MORE_INFO.replace_all(text, "");
    let clean = BRACKETED.replace_all(&clean, "");
    let clean = BASIS_MARKER.replacen(&clean, 1, "");
    let clean = EDGE_PUNCTUATION.replace_all(&clean, "");
    let summary = clean.trim().to_string();

    materia_trace!("summarized {} chars to {}", text.len(), summary.len());
    summary
}
