use materia_logging::materia_trace;

use crate::citation::{expand_books, linkify_identifiers, unwrap_research_citations};
use crate::rating::expand_ratings;
use crate::MarkupSettings;

/// Detail markup with the default rendering; `expand_books` toggles book expansion.
pub fn annotate(text: &str, expand_books: bool) -> String {
    let settings = MarkupSettings {
        expand_books,
        ..MarkupSettings::default()
    };
    annotate_with(text, &settings)
}

/// Turns a raw reference entry into HTML-bearing detail markup.
///
/// Steps run in a fixed order, each on the previous output:
/// book citations, research-citation unwrapping, rating codes,
/// identifier links, then line breaks.
pub fn annotate_with(text: &str, settings: &MarkupSettings) -> String {
    if text.is_empty() {
        return String::new();
    }

    let content = if settings.expand_books {
        expand_books(text)
    } else {
        text.to_string()
    };
    let content = unwrap_research_citations(&content);
    let content = expand_ratings(&content, &settings.value_class);
    let content = linkify_identifiers(&content, &settings.anchor_attrs());
    let markup = content.replace('\n', "<br />");

    materia_trace!("annotated {} chars into {} chars of markup", text.len(), markup.len());
    markup
}
