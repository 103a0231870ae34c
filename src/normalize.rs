//! Resolves a stored content value of unknown shape into something renderable.
//!
//! Document-bearing rows have been written by several generations of the
//! editor, so one column may hold a full document-state envelope, a bare root
//! node, a `{ "html": ... }` wrapper, a legacy block array, a bare text
//! payload, or a raw HTML string. The resolver sniffs the shape in a fixed
//! order and never fails: malformed JSON degrades to raw-HTML treatment, and
//! anything unrecognizable resolves to no content.

use crate::document::Document;
use crate::html::{escape_html, plain_text_of_value};
use crate::legacy;
use serde_json::Value;

/// Outcome of shape resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A canonical document, ready for tree projection.
    Document(Document),
    /// Raw HTML to sanitize and use directly, bypassing projection.
    Html(String),
    /// Nothing renderable.
    Empty,
}

/// Resolve a stored JSON value.
pub fn resolve(value: &Value) -> Resolved {
    match value {
        Value::String(raw) => resolve_str(raw),
        Value::Object(_) => resolve_parsed(value),
        _ => Resolved::Empty,
    }
}

/// Resolve a raw stored string: parsed as strict JSON first, and treated as
/// an HTML fragment when parsing fails.
pub fn resolve_str(raw: &str) -> Resolved {
    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => resolve_parsed(&parsed),
        Err(_) => html_or_empty(raw.to_string()),
    }
}

fn resolve_parsed(parsed: &Value) -> Resolved {
    let Some(obj) = parsed.as_object() else {
        return Resolved::Empty;
    };

    // richText wrapper: pre-rendered HTML stored alongside the document
    if let Some(html) = obj.get("html").and_then(Value::as_str) {
        return html_or_empty(html.to_string());
    }

    // Full document-state envelope
    if let Some(root) = obj.get("root") {
        if root.is_object() {
            return document_or_fallback(root);
        }
    }

    // Root-only export: the root node without its envelope
    if obj.get("type").and_then(Value::as_str) == Some("root")
        && obj.get("children").is_some_and(Value::is_array)
    {
        return document_or_fallback(parsed);
    }

    // Legacy simple-block format
    if let Some(blocks) = obj.get("blocks").and_then(Value::as_array) {
        return html_or_empty(legacy::render_blocks(blocks));
    }

    // Bare text payload
    if let Some(text) = obj.get("text").and_then(Value::as_str) {
        return html_or_empty(legacy::render_plain_text(text));
    }

    Resolved::Empty
}

/// Wrap a recognized root value. A tree that fails deserialization degrades to
/// its mined text content in a single paragraph rather than erroring out.
fn document_or_fallback(root: &Value) -> Resolved {
    match Document::from_root_value(root) {
        Ok(doc) => Resolved::Document(doc),
        Err(_) => {
            let text = plain_text_of_value(root);
            if text.trim().is_empty() {
                Resolved::Empty
            } else {
                Resolved::Html(format!("<p>{}</p>", escape_html(&text)))
            }
        }
    }
}

fn html_or_empty(html: String) -> Resolved {
    if html.trim().is_empty() {
        Resolved::Empty
    } else {
        Resolved::Html(html)
    }
}
