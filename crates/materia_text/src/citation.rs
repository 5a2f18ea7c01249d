use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const PMC_ARTICLE_BASE: &str = "https://www.ncbi.nlm.nih.gov/pmc/articles/";
pub const PUBMED_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// An abbreviated `<abbreviation>, p. <N>` book citation and its full attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookExpansion {
    pub abbreviation: &'static str,
    pub attribution: &'static str,
}

pub const BOOK_EXPANSIONS: [BookExpansion; 2] = [
    BookExpansion {
        abbreviation: "Lad",
        attribution: "The Complete Book of Ayurvedic Home Remedies, Vasant Lad",
    },
    BookExpansion {
        abbreviation: "CCRAS",
        attribution: "CCRA, Ministry of Health",
    },
];

static BOOK_PATTERNS: LazyLock<Vec<(BookExpansion, Regex)>> = LazyLock::new(|| {
    BOOK_EXPANSIONS
        .iter()
        .map(|book| {
            let pattern = format!(r"(?i){},\s*p\.\s*(\d+)", regex::escape(book.abbreviation));
            let regex = Regex::new(&pattern).expect("valid book citation regex");
            (*book, regex)
        })
        .collect()
});

// Pin and microscope, plus the Windows-1252 mojibake the same bytes turn into
// when UTF-8 source is read back as cp1252.
const MARKERS: &str = "\u{1F4CC}|\u{1F52C}|\u{F0}\u{178}\u{201C}\u{152}|\u{F0}\u{178}\u{201D}\u{AC}";

static RESEARCH_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"(?i)\[(?:{MARKERS})\s*(?:"[^"]*"\s*)?"?(?:[^"]*?)?((?:PMCID:\s*PMC\d+)|(?:PMID:\s*\d+))"?.?\]"#
    );
    Regex::new(&pattern).expect("valid research citation regex")
});

static MARKER_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[(?:{MARKERS})\s*")).expect("valid citation opener regex")
});

static PMCID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(PMCID:\s*)(PMC\d+)").expect("valid PMCID regex"));

static PMID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(PMID:\s*)(\d+)").expect("valid PMID regex"));

/// `Lad, p. 42` -> `The Complete Book of Ayurvedic Home Remedies, Vasant Lad (Page 42)`.
pub(crate) fn expand_books(text: &str) -> String {
    let mut content = text.to_string();
    for (book, regex) in BOOK_PATTERNS.iter() {
        content = regex
            .replace_all(&content, |caps: &Captures| {
                format!("{} (Page {})", book.attribution, &caps[1])
            })
            .into_owned();
    }
    content
}

/// Keeps only the identifier of an emoji-wrapped research citation, then drops
/// leftover openers and every remaining `]`.
pub(crate) fn unwrap_research_citations(text: &str) -> String {
    let unwrapped = RESEARCH_CITATION.replace_all(text, "${1}");
    let unwrapped = MARKER_OPENER.replace_all(&unwrapped, "");
    unwrapped.replace(']', "")
}

pub(crate) fn linkify_identifiers(text: &str, anchor_attrs: &str) -> String {
    let linked = PMCID.replace_all(text, |caps: &Captures| {
        format!(
            r#"<a href="{PMC_ARTICLE_BASE}{id}/"{anchor_attrs}>{label}{id}</a>"#,
            id = &caps[2],
            label = &caps[1],
        )
    });
    PMID.replace_all(&linked, |caps: &Captures| {
        format!(
            r#"<a href="{PUBMED_BASE}{id}/"{anchor_attrs}>{label}{id}</a>"#,
            id = &caps[2],
            label = &caps[1],
        )
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn books_expand_with_page_numbers() {
        assert_eq!(
            expand_books("Lad, p. 42 and ccras,p.7"),
            "The Complete Book of Ayurvedic Home Remedies, Vasant Lad (Page 42) and CCRA, Ministry of Health (Page 7)"
        );
    }

    #[test]
    fn book_without_page_is_left_alone() {
        assert_eq!(expand_books("Lad, chapter 3"), "Lad, chapter 3");
    }

    #[test]
    fn pin_and_microscope_citations_unwrap_to_identifier() {
        assert_eq!(
            unwrap_research_citations("Shown [\u{1F4CC} \"Trial of herb\" PMID: 123456\"] here"),
            "Shown PMID: 123456 here"
        );
        assert_eq!(
            unwrap_research_citations("[\u{1F52C} PMCID: PMC98765]"),
            "PMCID: PMC98765"
        );
    }

    #[test]
    fn mojibake_markers_unwrap_too() {
        assert_eq!(
            unwrap_research_citations("[\u{F0}\u{178}\u{201D}\u{AC} \"Study\" PMID: 55]"),
            "PMID: 55"
        );
    }

    #[test]
    fn quoted_title_before_identifier_is_dropped() {
        assert_eq!(
            unwrap_research_citations("[\u{1F4CC} \"x\" PMCID:PMC12\"]"),
            "PMCID:PMC12"
        );
        assert_eq!(
            unwrap_research_citations("[\u{1F52C} \"Title PMID: 1\"]"),
            "PMID: 1"
        );
    }

    #[test]
    fn malformed_citations_are_cleaned_up() {
        assert_eq!(
            unwrap_research_citations("[\u{1F4CC} no identifier] and [plain] text"),
            "no identifier and [plain text"
        );
    }

    #[test]
    fn pmcid_is_not_linked_twice_as_pmid() {
        let out = linkify_identifiers("PMCID: PMC1 and PMID: 2", "");
        assert_eq!(
            out,
            r#"<a href="https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1/">PMCID: PMC1</a> and <a href="https://pubmed.ncbi.nlm.nih.gov/2/">PMID: 2</a>"#
        );
    }
}
