//! Markdown rendering for note bodies
//!
//! pulldown-cmark with tables, strikethrough and task lists. Raw HTML in
//! the source is shown as text, never injected.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render a note body to HTML.
pub fn render(text: &str) -> String {
    let events = Parser::new_ext(text, options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut html = String::new();
    push_html(&mut html, events);
    html
}

/// Drop `javascript:` targets.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if url.trim_start().to_ascii_lowercase().starts_with("javascript:") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Plain-text preview: the first non-blank line without leading markup,
/// cut at `max_chars`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let line = text
        .lines()
        .map(|l| l.trim_start_matches(['#', '>', '-', '*', ' ']).trim())
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    if line.chars().count() <= max_chars {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}
