//! Paragraph text extraction from HTML.
//!
//! Parsing is permissive: malformed markup never fails, it just produces a
//! best-effort tree. Extraction is deliberately shallow — every `<p>` element
//! in document order, nothing else.

use scraper::{Html, Selector};

/// Extract the text of every `<p>` element, joined by single spaces.
///
/// Each paragraph contributes the concatenation of its descendant text nodes,
/// with no trimming or whitespace collapsing. A document with no paragraph
/// elements (or input that is not markup at all) yields an empty string.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Ok(sel) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&sel)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
