// src/portal/html.rs
// Turns a saved result page into the text a browser would show for <body>.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{node::Node, ElementRef, Html, Selector};

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("body").expect("Failed to compile BODY_SELECTOR")
});

// Any whitespace run inside a text node renders as one space
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RE")
});

// Never rendered
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

// Rendered on their own line
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "thead", "tfoot", "tr", "ul",
];

// Separated from their neighbours by a tab, like table cells in inner text
const CELL_TAGS: &[&str] = &["td", "th"];

/// Visible text of the page body: one line per block element, inline
/// whitespace collapsed, blank lines removed.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::with_capacity(html.len() / 2);
    walk(root, &mut raw);

    raw.lines()
        .map(|line| line.trim_matches(|c: char| c == ' ' || c == '\t'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn walk(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIPPED_TAGS.contains(&name) {
        return;
    }

    let is_block = BLOCK_TAGS.contains(&name);
    let is_cell = CELL_TAGS.contains(&name);
    if is_block {
        out.push('\n');
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            walk(child_element, out);
        } else if let Node::Text(text_node) = child.value() {
            out.push_str(&WHITESPACE_RE.replace_all(&text_node.text, " "));
        }
    }

    if is_block {
        out.push('\n');
    } else if is_cell {
        out.push('\t');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_lines() {
        let html = r#"
            <html><head><title>EVN</title><style>p { color: red }</style></head>
            <body>
              <h3>THÔNG BÁO LỊCH CẮT ĐIỆN</h3>
              <div><b>KHÁCH HÀNG:</b>
                   Nguyen   Van A</div>
              <p>ĐỊA CHỈ: 123 Main St<br>MÃ LỊCH: ABC123</p>
              <script>var x = "MÃ LỊCH: FAKE";</script>
            </body></html>
        "#;
        let text = html_to_text(html);
        assert_eq!(
            text,
            "THÔNG BÁO LỊCH CẮT ĐIỆN\nKHÁCH HÀNG: Nguyen Van A\nĐỊA CHỈ: 123 Main St\nMÃ LỊCH: ABC123"
        );
    }

    #[test]
    fn test_table_cells_share_a_line() {
        let html = "<body><table><tr><td>THỜI GIAN:</td><td>08:00-10:00</td></tr></table></body>";
        assert_eq!(html_to_text(html), "THỜI GIAN:\t08:00-10:00");
    }
}
