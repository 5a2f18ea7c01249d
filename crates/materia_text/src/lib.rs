//! Materia text: normalisation of medicinal-reference entries for display.
mod annotate;
mod citation;
mod entry;
mod plain;
mod rating;
mod settings;
mod summary;

pub use annotate::{annotate, annotate_with};
pub use citation::{BookExpansion, BOOK_EXPANSIONS, PMC_ARTICLE_BASE, PUBMED_BASE};
pub use entry::NormalizedEntry;
pub use plain::{strip_to_plain_text, strip_with, FragmentTextRenderer, PlainTextRenderer};
pub use rating::{RatingCode, RatingScheme, RATING_CODES};
pub use settings::{MarkupSettings, DEFAULT_LINK_CLASS, DEFAULT_VALUE_CLASS};
pub use summary::summarize;
