use serde::{Deserialize, Serialize};

pub const DEFAULT_LINK_CLASS: &str = "text-indigo-600 hover:underline";
pub const DEFAULT_VALUE_CLASS: &str = "font-bold italic";

/// Knobs for detail markup. The defaults reproduce the reference rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSettings {
    /// Expand `Lad, p. N` and `CCRAS, p. N` into full attributions.
    pub expand_books: bool,
    /// Emit `target="_blank"` on identifier links.
    pub open_links_in_new_tab: bool,
    /// CSS class of identifier links; omitted when empty.
    pub link_class: String,
    /// CSS class of the rating value span.
    pub value_class: String,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            expand_books: true,
            open_links_in_new_tab: true,
            link_class: DEFAULT_LINK_CLASS.to_string(),
            value_class: DEFAULT_VALUE_CLASS.to_string(),
        }
    }
}

impl MarkupSettings {
    pub(crate) fn anchor_attrs(&self) -> String {
        let mut attrs = String::new();
        if self.open_links_in_new_tab {
            attrs.push_str(r#" target="_blank""#);
        }
        if !self.link_class.is_empty() {
            attrs.push_str(&format!(r#" class="{}""#, self.link_class));
        }
        attrs
    }
}
