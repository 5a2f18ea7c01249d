use serde::Serialize;

use crate::{annotate_with, strip_to_plain_text, summarize, MarkupSettings};

/// All display forms of one raw reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEntry {
    pub plain: String,
    pub summary: String,
    pub markup: String,
}

impl NormalizedEntry {
    pub fn from_raw(raw: &str, settings: &MarkupSettings) -> Self {
        let plain = strip_to_plain_text(raw);
        let summary = summarize(&plain);
        Self {
            plain,
            summary,
            markup: annotate_with(raw, settings),
        }
    }
}
