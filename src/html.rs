//! Projects a [`Document`] tree to an HTML string.
//!
//! The walk is a single recursive pass in document order: embed nodes render
//! in place, interleaved with ordinary blocks exactly where the author put
//! them. Projection is pure and synchronous — no shared state, no I/O — so
//! concurrent calls on independent documents need no coordination.

use crate::document::Document;
use crate::embeds;
use crate::error::{RenderError, RenderResult};
use crate::nodes::{Node, TextFormat, TextNode};
use serde_json::Value;

/// Trees deeper than this degrade to plain-text fallback instead of recursing.
/// Hand-authored content never gets close; this guards pathological input.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Inline wrappers in their fixed nesting order, outermost first. A text run
/// with {bold, italic} always emits `<strong><em>…</em></strong>` regardless
/// of how the flag set was produced.
const INLINE_WRAPPERS: [(u32, &str, &str); 5] = [
    (TextFormat::BOLD, "<strong>", "</strong>"),
    (TextFormat::ITALIC, "<em>", "</em>"),
    (TextFormat::UNDERLINE, "<u>", "</u>"),
    (TextFormat::STRIKETHROUGH, "<s>", "</s>"),
    (TextFormat::CODE, "<code>", "</code>"),
];

/// Project a document to HTML. Never fails: on an internal error the document
/// degrades to its concatenated text content in a single `<p>`, and to the
/// empty string when there is no text at all.
pub fn project(doc: &Document) -> String {
    match try_project(doc) {
        Ok(html) => html,
        Err(_) => {
            let text = plain_text(doc.root());
            if text.trim().is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", escape_html(&text))
            }
        }
    }
}

/// Fallible projection. The only failure today is the nesting-depth cap.
pub fn try_project(doc: &Document) -> RenderResult<String> {
    let mut out = String::new();
    for child in doc.root().children() {
        node_to_html(child, &mut out, 0)?;
    }
    Ok(out)
}

fn node_to_html(node: &Node, out: &mut String, depth: usize) -> RenderResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(RenderError::MaxNestingDepthExceeded {
            max_depth: MAX_NESTING_DEPTH,
        });
    }
    match node {
        // A nested root is tolerated and renders as its children.
        Node::Root(n) => children_to_html(&n.children, out, depth)?,
        Node::Paragraph(n) => {
            out.push_str("<p>");
            children_to_html(&n.children, out, depth)?;
            out.push_str("</p>");
        }
        Node::Heading(n) => {
            let tag = n.tag.as_str();
            out.push_str(&format!("<{}>", tag));
            children_to_html(&n.children, out, depth)?;
            out.push_str(&format!("</{}>", tag));
        }
        Node::Quote(n) => {
            out.push_str("<blockquote>");
            children_to_html(&n.children, out, depth)?;
            out.push_str("</blockquote>");
        }
        Node::List(n) => {
            let tag = if n.list_type.is_ordered() { "ol" } else { "ul" };
            out.push_str(&format!("<{}>", tag));
            children_to_html(&n.children, out, depth)?;
            out.push_str(&format!("</{}>", tag));
        }
        Node::ListItem(n) => {
            out.push_str("<li>");
            children_to_html(&n.children, out, depth)?;
            out.push_str("</li>");
        }
        Node::Link(n) => {
            // href passes through unescaped: structural attribute, trusted
            // authors (see crate docs for the trust model).
            out.push_str(&format!("<a href=\"{}\">", n.url));
            children_to_html(&n.children, out, depth)?;
            out.push_str("</a>");
        }
        Node::Text(t) => text_to_html(t, out),
        Node::Linebreak => out.push_str("<br>"),
        Node::Image(n) => embeds::image_to_html(n, out),
        Node::Card(n) => embeds::card_to_html(n, out),
        Node::Video(n) => embeds::video_to_html(n, out),
        Node::Thumbnail(n) => embeds::thumbnail_to_html(n, out),
        Node::Callout(n) => embeds::callout_to_html(n, out),
        Node::Unknown => {}
    }
    Ok(())
}

fn children_to_html(children: &[Node], out: &mut String, depth: usize) -> RenderResult<()> {
    for child in children {
        node_to_html(child, out, depth + 1)?;
    }
    Ok(())
}

/// Escape before wrapping: the text value is entity-encoded first, then the
/// inline tags go around it in INLINE_WRAPPERS order.
fn text_to_html(t: &TextNode, out: &mut String) {
    for (flag, open, _) in INLINE_WRAPPERS.iter() {
        if t.format.has(*flag) {
            out.push_str(open);
        }
    }
    out.push_str(&escape_html(&t.text));
    for (flag, _, close) in INLINE_WRAPPERS.iter().rev() {
        if t.format.has(*flag) {
            out.push_str(close);
        }
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Concatenated text content of a subtree, ignoring formatting and embeds.
/// Iterative so it stays total even on trees the projector refuses.
pub fn plain_text(node: &Node) -> String {
    let mut out = String::new();
    let mut stack: Vec<&Node> = vec![node];
    while let Some(n) = stack.pop() {
        if let Node::Text(t) = n {
            out.push_str(&t.text);
        }
        for child in n.children().iter().rev() {
            stack.push(child);
        }
    }
    out
}

/// Text mining over a raw JSON value that failed tree deserialization:
/// collects every string under a `text` key, in document order.
pub(crate) fn plain_text_of_value(value: &Value) -> String {
    let mut out = String::new();
    let mut stack: Vec<&Value> = vec![value];
    while let Some(v) = stack.pop() {
        match v {
            Value::Object(map) => {
                if let Some(Value::String(s)) = map.get("text") {
                    out.push_str(s);
                }
                if let Some(Value::Array(children)) = map.get("children") {
                    for child in children.iter().rev() {
                        stack.push(child);
                    }
                }
            }
            Value::Array(items) => {
                for item in items.iter().rev() {
                    stack.push(item);
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{ParagraphNode, RootNode};

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;"
        );
    }

    #[test]
    fn format_nesting_is_deterministic() {
        let t = TextNode {
            text: "hi".into(),
            format: TextFormat(TextFormat::BOLD | TextFormat::ITALIC | TextFormat::CODE),
        };
        let mut out = String::new();
        text_to_html(&t, &mut out);
        assert_eq!(out, "<strong><em><code>hi</code></em></strong>");
    }

    #[test]
    fn deep_tree_hits_the_depth_cap() {
        let mut node = Node::Paragraph(ParagraphNode {
            children: vec![Node::Text(TextNode {
                text: "deep".into(),
                format: TextFormat::default(),
            })],
        });
        for _ in 0..MAX_NESTING_DEPTH + 4 {
            node = Node::Quote(crate::nodes::QuoteNode {
                children: vec![node],
            });
        }
        let doc = Document::new(Node::Root(RootNode {
            children: vec![node],
        }))
        .unwrap();
        assert!(matches!(
            try_project(&doc),
            Err(RenderError::MaxNestingDepthExceeded { .. })
        ));
        // The infallible path falls back to text-only output.
        assert_eq!(project(&doc), "<p>deep</p>");
    }

    #[test]
    fn plain_text_preserves_reading_order() {
        let doc: Document = serde_json::from_str(
            r#"{"root":{"type":"root","children":[
                {"type":"paragraph","children":[
                    {"type":"text","text":"one "},
                    {"type":"text","text":"two "}
                ]},
                {"type":"paragraph","children":[{"type":"text","text":"three"}]}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(plain_text(doc.root()), "one two three");
    }
}
