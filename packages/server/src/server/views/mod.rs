//! Server-rendered HTML pages.
//!
//! Pages are plain strings; every user-supplied value goes through
//! [`escape`] (or [`render_markdown`] for offer descriptions).

pub mod auth;
pub mod messages;
pub mod offers;

use crate::common::utils::escape;

/// Common page chrome: navigation, flash messages, body
pub fn layout(title: &str, email: Option<&str>, flashes: &[String], body: &str) -> String {
    let account = match email {
        Some(email) => format!(
            r#"<span class="account">{}</span> <a href="/logout">Log out</a>"#,
            escape(email)
        ),
        None => r#"<a href="/login">Log in</a> <a href="/register">Register</a>"#.to_string(),
    };

    let flashes: String = flashes
        .iter()
        .map(|m| format!(r#"<li class="flash">{}</li>"#, escape(m)))
        .collect();
    let flashes = if flashes.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="messages">{}</ul>"#, flashes)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Volunteer offers</title>
</head>
<body>
<nav><a href="/offers">Offers</a> <a href="/offers/archived">Archive</a> <a href="/offers/create">Add offer</a> {account}</nav>
{flashes}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Inline message shown above a re-rendered form
pub(crate) fn notice(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<p class="notice">{}</p>"#, escape(m)))
        .unwrap_or_default()
}

pub(crate) fn field_error(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#" <span class="error">{}</span>"#, escape(e)))
        .unwrap_or_default()
}

pub(crate) fn text_input(name: &str, label: &str, value: &str, error: Option<&str>) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label> <input type="text" id="{name}" name="{name}" value="{value}">{error}</p>"#,
        value = escape(value),
        error = field_error(error),
    )
}

pub(crate) fn text_area(name: &str, label: &str, value: &str, error: Option<&str>) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label> <textarea id="{name}" name="{name}">{value}</textarea>{error}</p>"#,
        value = escape(value),
        error = field_error(error),
    )
}

/// `<select>` over `(value, label)` pairs with `selected` preselected
pub(crate) fn select(
    name: &str,
    label: &str,
    options: &[(String, String)],
    selected: &str,
    error: Option<&str>,
) -> String {
    let options: String = options
        .iter()
        .map(|(value, text)| {
            let mark = if value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(value),
                mark,
                escape(text)
            )
        })
        .collect();
    format!(
        r#"<p><label for="{name}">{label}</label> <select id="{name}" name="{name}"><option value="">---------</option>{options}</select>{error}</p>"#,
        error = field_error(error),
    )
}
