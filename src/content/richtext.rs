// src/content/richtext.rs

use serde::Deserialize;

// Lexical text format bits.
const FORMAT_BOLD: u32 = 1;
const FORMAT_ITALIC: u32 = 1 << 1;
const FORMAT_STRIKETHROUGH: u32 = 1 << 2;
const FORMAT_UNDERLINE: u32 = 1 << 3;
const FORMAT_CODE: u32 = 1 << 4;

/// A rich-text field as it arrives from the store: either markup that was
/// saved as a plain string, or an editor tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Html(String),
    Document(RichTextDocument),
}

impl RichText {
    /// Flat HTML for display. Stored strings are returned untouched.
    pub fn to_html(&self) -> String {
        match self {
            RichText::Html(html) => html.clone(),
            RichText::Document(doc) => doc.to_html(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichTextDocument {
    #[serde(default)]
    pub root: RootNode,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RootNode {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl RichTextDocument {
    pub fn to_html(&self) -> String {
        flatten(&self.root.children)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        format: u32,
    },
    Link {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        fields: Option<LinkFields>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        #[serde(default)]
        tag: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(rename = "listType", default)]
        list_type: ListKind,
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    Quote {
        #[serde(default)]
        children: Vec<Node>,
    },
    LineBreak,
    #[serde(other)]
    Unknown,
}

/// Newer editor versions keep the link target under `fields.url`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkFields {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Bullet,
    Number,
    #[serde(other)]
    Other,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Number => "ol",
            ListKind::Bullet | ListKind::Other => "ul",
        }
    }
}

/// Parses `"h1"`..`"h6"` into a heading level.
fn heading_level(tag: &str) -> Option<u8> {
    let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Depth-first conversion of a node list into flat markup.
pub fn flatten(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_node(&mut out, node);
    }
    out
}

fn push_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text, format } => push_text(out, text, *format),
        Node::Link {
            url,
            fields,
            children,
        } => {
            let href = url
                .as_deref()
                .or_else(|| fields.as_ref().and_then(|f| f.url.as_deref()))
                .unwrap_or("");
            out.push_str("<a href=\"");
            out.push_str(&escape_html(href));
            out.push_str("\">");
            push_children(out, children);
            out.push_str("</a>");
        }
        Node::Paragraph { children } => wrap(out, "p", children),
        Node::Heading { tag, children } => match heading_level(tag) {
            Some(level) => wrap(out, &format!("h{level}"), children),
            None => wrap(out, "p", children),
        },
        Node::List {
            list_type,
            children,
        } => wrap(out, list_type.tag(), children),
        Node::ListItem { children } => wrap(out, "li", children),
        Node::Quote { children } => wrap(out, "blockquote", children),
        Node::LineBreak => out.push_str("<br>"),
        Node::Unknown => {}
    }
}

fn push_children(out: &mut String, children: &[Node]) {
    for child in children {
        push_node(out, child);
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Node]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_children(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_text(out: &mut String, text: &str, format: u32) {
    let tags: Vec<&str> = [
        (FORMAT_BOLD, "strong"),
        (FORMAT_ITALIC, "em"),
        (FORMAT_STRIKETHROUGH, "s"),
        (FORMAT_UNDERLINE, "u"),
        (FORMAT_CODE, "code"),
    ]
    .iter()
    .filter(|(bit, _)| format & bit != 0)
    .map(|(_, tag)| *tag)
    .collect();

    for tag in &tags {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }
    out.push_str(&escape_html(text));
    for tag in tags.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        serde_json::from_value::<RichText>(value).unwrap().to_html()
    }

    #[test]
    fn paragraph_text_is_escaped() {
        let html = render(json!({
            "root": { "children": [
                { "type": "paragraph", "children": [ { "type": "text", "text": "A & B" } ] }
            ]}
        }));
        assert_eq!(html, "<p>A &amp; B</p>");
    }

    #[test]
    fn headings_lists_and_links() {
        let html = render(json!({
            "root": { "children": [
                { "type": "heading", "tag": "h2", "children": [ { "type": "text", "text": "Why buy?" } ] },
                { "type": "list", "listType": "number", "children": [
                    { "type": "listitem", "children": [ { "type": "text", "text": "Equity" } ] },
                    { "type": "listitem", "children": [
                        { "type": "link", "url": "https://example.com/?a=1&b=2", "children": [
                            { "type": "text", "text": "Rates" }
                        ]}
                    ]}
                ]},
                { "type": "list", "listType": "bullet", "children": [
                    { "type": "listitem", "children": [ { "type": "text", "text": "<none>" } ] }
                ]}
            ]}
        }));
        assert_eq!(
            html,
            "<h2>Why buy?</h2>\
             <ol><li>Equity</li><li><a href=\"https://example.com/?a=1&amp;b=2\">Rates</a></li></ol>\
             <ul><li>&lt;none&gt;</li></ul>"
        );
    }

    #[test]
    fn nested_paragraph_inside_list_item_is_walked() {
        let html = render(json!({
            "root": { "children": [
                { "type": "list", "listType": "bullet", "children": [
                    { "type": "listitem", "children": [
                        { "type": "paragraph", "children": [ { "type": "text", "text": "Deep" } ] }
                    ]}
                ]}
            ]}
        }));
        assert_eq!(html, "<ul><li><p>Deep</p></li></ul>");
    }

    #[test]
    fn unknown_nodes_are_skipped() {
        let html = render(json!({
            "root": { "children": [
                { "type": "upload", "value": { "id": "img-1" } },
                { "type": "paragraph", "children": [
                    { "type": "horizontalrule" },
                    { "type": "text", "text": "kept" }
                ]}
            ]}
        }));
        assert_eq!(html, "<p>kept</p>");
    }

    #[test]
    fn link_url_can_live_under_fields() {
        let html = render(json!({
            "root": { "children": [
                { "type": "paragraph", "children": [
                    { "type": "link", "fields": { "url": "/contact" }, "children": [
                        { "type": "text", "text": "Call us" }
                    ]}
                ]}
            ]}
        }));
        assert_eq!(html, "<p><a href=\"/contact\">Call us</a></p>");
    }

    #[test]
    fn text_formats_wrap_in_order() {
        let html = render(json!({
            "root": { "children": [
                { "type": "paragraph", "children": [
                    { "type": "text", "text": "bold", "format": 1 },
                    { "type": "text", "text": " and ", "format": 0 },
                    { "type": "text", "text": "both", "format": 3 }
                ]}
            ]}
        }));
        assert_eq!(
            html,
            "<p><strong>bold</strong> and <strong><em>both</em></strong></p>"
        );
    }

    #[test]
    fn invalid_heading_tag_falls_back_to_paragraph() {
        let html = render(json!({
            "root": { "children": [
                { "type": "heading", "tag": "h9", "children": [ { "type": "text", "text": "x" } ] }
            ]}
        }));
        assert_eq!(html, "<p>x</p>");
    }

    #[test]
    fn stored_html_passes_through_unescaped() {
        let stored = "<p>Already &amp; flat</p>";
        assert_eq!(render(json!(stored)), stored);
        // Flattening the same input twice gives the same answer.
        assert_eq!(render(json!(stored)), render(json!(stored)));
    }

    #[test]
    fn escape_covers_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
    }
}
