use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// A context able to render markup and read back its text content.
pub trait PlainTextRenderer: Send + Sync {
    fn text_content(&self, markup: &str) -> String;
}

/// Parses the input as an HTML body fragment and concatenates every text node
/// in document order. Tags are dropped and entities decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FragmentTextRenderer;

impl PlainTextRenderer for FragmentTextRenderer {
    fn text_content(&self, markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        let mut text = String::with_capacity(markup.len());
        collect_text(fragment.tree.root(), &mut text);
        text
    }
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(chunk) => out.push_str(chunk),
        Node::Comment(_) | Node::ProcessingInstruction(_) | Node::Doctype(_) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Strips markup with the given renderer; without one the input is returned as is.
pub fn strip_with(markup: &str, renderer: Option<&dyn PlainTextRenderer>) -> String {
    match renderer {
        Some(renderer) => renderer.text_content(markup),
        None => markup.to_string(),
    }
}

pub fn strip_to_plain_text(markup: &str) -> String {
    strip_with(markup, Some(&FragmentTextRenderer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_dropped_and_entities_decoded() {
        assert_eq!(
            strip_to_plain_text("<p>Hello <b>world</b> &amp; co</p>"),
            "Hello world & co"
        );
        assert_eq!(strip_to_plain_text("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn plain_input_passes_through() {
        assert_eq!(strip_to_plain_text("just text\nacross lines"), "just text\nacross lines");
    }

    #[test]
    fn comments_and_empty_markup_yield_empty_text() {
        assert_eq!(strip_to_plain_text(""), "");
        assert_eq!(strip_to_plain_text("<!-- note --><br />"), "");
    }

    #[test]
    fn missing_renderer_returns_input_unchanged() {
        let markup = "<strong>Ayurvedic:</strong> Good";
        assert_eq!(strip_with(markup, None), markup);
    }
}
