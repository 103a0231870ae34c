//! # richdoc — rich-text document rendering
//!
//! Renders the CMS rich-text content model to sanitized HTML: a JSON document
//! tree (the editor's schema plus five custom embed kinds — image, card,
//! video, thumbnail, callout) is normalized from any of its historical stored
//! shapes and projected deterministically to an HTML string.
//!
//! ## Features
//! - Type-safe node model with exhaustive dispatch over a closed kind set
//! - Shape-sniffing normalizer for every stored format generation
//! - Pure, stateless tree-to-HTML projection with in-place embed rendering
//! - Document-level tag stripping for fragment-safe injection
//! - Total failure semantics: every input resolves to a display string
//!
//! ## Example — stored value to HTML
//! ```
//! use serde_json::json;
//!
//! let stored = json!({"root": {"type": "root", "children": [
//!     {"type": "paragraph", "children": [{"type": "text", "text": "Hi"}]}
//! ]}});
//!
//! assert_eq!(richdoc::render_stored(&stored), "<p>Hi</p>");
//! ```
//!
//! ## Example — raw column contents
//! ```
//! // Rows that never went through the editor hold plain HTML.
//! let html = richdoc::render_stored_str("<p>Hello</p>");
//! assert_eq!(html, "<p>Hello</p>");
//! ```
//!
//! ## Trust model
//!
//! Documents are authored by trusted, authenticated users. User-visible text
//! is always entity-escaped, but `src`/`href` attributes pass through as
//! stored and raw-HTML content paths are not filtered for scripts. This crate
//! is not a security boundary against hostile input.

pub mod document;
pub mod embeds;
pub mod error;
pub mod html;
pub mod legacy;
pub mod nodes;
pub mod normalize;
pub mod sanitize;

// --- Core types ---
pub use document::Document;
pub use error::{RenderError, RenderResult};
pub use nodes::{
    CalloutNode, CalloutVariant, CardImage, CardLink, CardNode, HeadingTag, ImageNode, ListType,
    Node, TextFormat, TextNode, ThumbnailAlign, ThumbnailNode, VideoNode,
};
pub use normalize::{resolve, resolve_str, Resolved};
pub use sanitize::sanitize_fragment;

use serde_json::Value;

/// What the rendering surface shows when a value resolves to no content.
pub const NO_CONTENT: &str = "No content available";

/// Render a stored content value to sanitized HTML. Returns an empty string
/// when the value holds nothing renderable; never panics or errors.
pub fn render_stored(value: &Value) -> String {
    finish(resolve(value))
}

/// Render a raw stored string (JSON or HTML) to sanitized HTML.
pub fn render_stored_str(raw: &str) -> String {
    finish(resolve_str(raw))
}

/// Like [`render_stored`], but substitutes the [`NO_CONTENT`] fallback text
/// for empty output. This is the contract the page-rendering surface expects.
pub fn render_stored_or_fallback(value: &Value) -> String {
    let html = render_stored(value);
    if html.is_empty() {
        NO_CONTENT.to_string()
    } else {
        html
    }
}

/// Project an already-normalized document, sanitized.
pub fn render_document(doc: &Document) -> String {
    sanitize_fragment(&html::project(doc))
}

/// Concatenated text content of a document, for previews and excerpts.
pub fn plain_text(doc: &Document) -> String {
    html::plain_text(doc.root())
}

fn finish(resolved: Resolved) -> String {
    match resolved {
        Resolved::Document(doc) => sanitize_fragment(&html::project(&doc)),
        Resolved::Html(raw) => sanitize_fragment(&raw),
        Resolved::Empty => String::new(),
    }
}
