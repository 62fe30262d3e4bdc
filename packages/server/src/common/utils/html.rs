//! HTML output helpers for server-rendered pages.

use pulldown_cmark::{escape::escape_html, html, Event, Options, Parser};

/// Escape text for use in HTML element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail
    let _ = escape_html(&mut out, text);
    out
}

/// Render user-supplied markdown, neutralising any raw HTML it contains
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
