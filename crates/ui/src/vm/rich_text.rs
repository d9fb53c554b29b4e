//! Rendering of authored rich text.
//!
//! Trust boundary: curriculum text is written at build time (or supplied by
//! whoever launches the app) and is injected into the page as raw HTML. It is
//! never sanitized, so learner-provided text must not be routed through here.

/// HTML produced from trusted curriculum content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Markdown with inline HTML to block-level HTML.
#[must_use]
pub fn render_rich_text(source: &str) -> TrustedHtml {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(source, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    TrustedHtml(html)
}

/// Like [`render_rich_text`] but unwraps a lone paragraph, for list items and
/// inline slots.
#[must_use]
pub fn render_inline(source: &str) -> TrustedHtml {
    let TrustedHtml(html) = render_rich_text(source);
    let trimmed = html.trim();
    let unwrapped = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .filter(|inner| !inner.contains("<p>"));
    match unwrapped {
        Some(inner) => TrustedHtml(inner.to_owned()),
        None => TrustedHtml(html),
    }
}

/// Tag-free rendering of `source`, used for short previews.
#[must_use]
pub fn excerpt(source: &str) -> TrustedHtml {
    let TrustedHtml(html) = render_rich_text(source);
    let text = ammonia::Builder::empty().clean(&html).to_string();
    TrustedHtml(text.trim().to_owned())
}
