//! Renderers for pre-editor storage formats.
//!
//! Early content rows stored either a flat `{ "blocks": [...] }` array or a
//! bare `{ "text": "..." }` object. These render through fixed per-type
//! templates, not tree projection — the shapes predate the node model and are
//! too loose to round-trip through it. Blocks with an unrecognized or missing
//! `type` are skipped.

use crate::html::escape_html;
use serde_json::Value;

/// Render a legacy block array to HTML, preserving block order.
pub fn render_blocks(blocks: &[Value]) -> String {
    let mut out = String::new();
    for block in blocks {
        let Some(kind) = block.get("type").and_then(Value::as_str) else {
            continue;
        };
        let text = block.get("text").and_then(Value::as_str).unwrap_or("");
        match kind {
            "heading" => {
                let level = block
                    .get("level")
                    .and_then(Value::as_u64)
                    .unwrap_or(2)
                    .clamp(1, 3);
                out.push_str(&format!("<h{0}>{1}</h{0}>", level, escape_html(text)));
            }
            "paragraph" => {
                out.push_str(&format!("<p>{}</p>", escape_html(text)));
            }
            "list" => {
                out.push_str("<ul>");
                if let Some(items) = block.get("items").and_then(Value::as_array) {
                    for item in items {
                        if let Some(s) = item.as_str() {
                            out.push_str(&format!("<li>{}</li>", escape_html(s)));
                        }
                    }
                }
                out.push_str("</ul>");
            }
            _ => {}
        }
    }
    out
}

/// Render a bare text payload as a single preformatted block.
pub fn render_plain_text(text: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        format!("<pre class=\"rt-plain\">{}</pre>", escape_html(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn blocks_render_in_order() {
        let blocks = vec![
            json!({"type": "heading", "text": "Title"}),
            json!({"type": "paragraph", "text": "Body"}),
            json!({"type": "list", "items": ["a", "b"]}),
        ];
        assert_eq!(
            render_blocks(&blocks),
            "<h2>Title</h2><p>Body</p><ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn unknown_block_types_are_skipped() {
        let blocks = vec![
            json!({"type": "widget", "text": "nope"}),
            json!({"text": "typeless"}),
            json!({"type": "paragraph", "text": "kept"}),
        ];
        assert_eq!(render_blocks(&blocks), "<p>kept</p>");
    }

    #[test]
    fn heading_level_is_clamped() {
        let blocks = vec![json!({"type": "heading", "level": 9, "text": "Deep"})];
        assert_eq!(render_blocks(&blocks), "<h3>Deep</h3>");
    }

    #[test]
    fn plain_text_is_escaped_and_preformatted() {
        assert_eq!(
            render_plain_text("a < b"),
            "<pre class=\"rt-plain\">a &lt; b</pre>"
        );
        assert_eq!(render_plain_text("   "), "");
    }
}
