//! Shared page shell
//!
//! Every page gets the same document skeleton: theme class on `<html>`,
//! top bar, gradient title and the bottom navigation with the theme toggle.

use gbr_common::theme::ThemeIndicator;
use gbr_common::Theme;

/// Escape text for HTML body and attribute contexts
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Page-specific parts of the shell
pub struct Page<'a> {
    /// `<title>` and top bar caption
    pub caption: &'a str,
    /// Small uppercase line above the heading (genre name on track pages)
    pub eyebrow: Option<&'a str>,
    pub heading: &'a str,
    /// Link target for the back arrow; `None` renders it inert
    pub back_href: Option<&'a str>,
    /// Pre-rendered, already escaped body markup
    pub body: String,
}

/// Render a full HTML document
pub fn render_page(page: &Page<'_>, theme: Theme, indicator: ThemeIndicator) -> String {
    let back = match page.back_href {
        Some(href) => format!(
            r#"<a class="icon-button" href="{}" aria-label="Back">&larr;</a>"#,
            escape_html(href)
        ),
        None => r#"<span class="icon-button" aria-hidden="true">&larr;</span>"#.to_string(),
    };

    let eyebrow = page
        .eyebrow
        .map(|text| format!(r#"<div class="eyebrow">{}</div>"#, escape_html(text)))
        .unwrap_or_default();

    let html_class = match theme {
        Theme::Dark => "dark",
        Theme::Light => "",
    };

    // Sun while dark (switches to light), moon while light
    let toggle_icon = match theme {
        Theme::Dark => r#"<svg aria-hidden="true" viewBox="0 0 24 24" class="theme-icon"><circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41"/></svg>"#,
        Theme::Light => r#"<svg aria-hidden="true" viewBox="0 0 24 24" class="theme-icon"><path d="M21 12.79A9 9 0 1 1 11.21 3a7 7 0 0 0 9.79 9.79Z"/></svg>"#,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{html_class}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{caption}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
<main class="page">
    <div class="top-bar">
        {back}
        <div class="caption">{caption}</div>
        <span class="icon-button" aria-hidden="true">&#128269;</span>
    </div>
    <div class="title-block">
        {eyebrow}
        <h1 class="gradient-title">{heading}</h1>
    </div>
    {body}
</main>
<nav class="bottom-nav">
    <a class="nav-item" href="/" aria-label="Browse">&#9835;</a>
    <span class="nav-item" aria-label="Favorites">&#127908;</span>
    <span class="nav-item now-playing" aria-label="Now Playing">&#9654;</span>
    <form method="post" action="/theme" class="theme-form">
        <button type="submit" class="nav-item theme-toggle" aria-pressed="{pressed}" aria-label="{label}">{toggle_icon}</button>
    </form>
    <span class="nav-item" aria-label="Profile">&#9881;</span>
</nav>
</body>
</html>
"#,
        html_class = html_class,
        caption = escape_html(page.caption),
        back = back,
        eyebrow = eyebrow,
        heading = escape_html(page.heading),
        body = page.body,
        pressed = indicator.pressed,
        label = indicator.label,
        toggle_icon = toggle_icon,
    )
}
