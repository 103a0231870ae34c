//! Strips document-level tags from HTML destined for fragment injection.
//!
//! Stored HTML occasionally arrives as a complete page (`<html>`, `<head>`,
//! `<body>`), usually pasted from an export. Injecting that into an existing
//! page corrupts its structure, so the wrappers are removed: `html`/`body`
//! tags go but keep their contents, the `head` element goes entirely.
//!
//! This is NOT an XSS defense. Content is authored by trusted, authenticated
//! users; script tags, event handlers, and `javascript:` URLs pass through
//! untouched. Any defense against hostile markup belongs outside this crate.

use regex::Regex;
use std::sync::OnceLock;

fn head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<head\b[^>]*>.*?</head\s*>").unwrap())
}

fn html_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?html\b[^>]*>").unwrap())
}

fn body_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?body\b[^>]*>").unwrap())
}

/// Remove document-level tags and trim surrounding whitespace. Idempotent:
/// sanitizing already-sanitized output is a no-op.
pub fn sanitize_fragment(html: &str) -> String {
    let html = head_re().replace_all(html, "");
    let html = html_re().replace_all(&html, "");
    let html = body_re().replace_all(&html, "");
    html.trim().to_string()
}
