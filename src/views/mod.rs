//! Server-rendered HTML. Every page is a pure function from already-fetched
//! data to [maud](https://maud.lambda.xyz/) markup; handlers turn the result
//! into a response with `Html(markup.into_string())`. Templates are
//! compile-time checked and escape interpolated text automatically.

pub mod admin;
pub mod site;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use maud::{DOCTYPE, Markup, html};

use crate::session::Notice;

const SITE_NAME: &str = "Sample Cafe";

/// Public navigation as (label, href), in display order.
const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Access", "/access"),
    ("Reservations", "/reservations"),
    ("Gallery", "/gallery"),
    ("Story", "/about"),
    ("Highlights", "/highlights"),
];

/// Admin navigation as (label, href), in display order.
const ADMIN_LINKS: [(&str, &str); 5] = [
    ("Dashboard", "/admin"),
    ("Gallery", "/admin/gallery"),
    ("Highlights", "/admin/features"),
    ("Announcements", "/admin/announcements"),
    ("View site", "/"),
];

const STYLE: &str = r#"
:root { --ink: #2b211c; --cream: #faf6f1; --card: #ffffff; --accent: #a9714b; --line: #e4d9cd; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; background: var(--cream); color: var(--ink); line-height: 1.6; }
a { color: var(--accent); }
.site-header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; border-bottom: 1px solid var(--line); }
.brand { font-size: 1.3rem; font-weight: bold; text-decoration: none; color: var(--ink); letter-spacing: 0.05em; }
.main-nav ul { display: flex; gap: 1.2rem; list-style: none; margin: 0; padding: 0; }
.main-nav a { text-decoration: none; }
.main-nav li.current a { border-bottom: 2px solid var(--accent); }
.nav-toggle { display: none; background: none; border: 1px solid var(--line); font-size: 1.1rem; padding: 0.2rem 0.6rem; }
main { max-width: 960px; margin: 0 auto; padding: 1.5rem 2rem 3rem; }
.notices { margin: 1rem 0; }
.notice { padding: 0.6rem 1rem; border-left: 4px solid var(--line); background: var(--card); margin: 0.4rem 0; }
.notice-success { border-color: #3d7a46; }
.notice-info { border-color: #356b8c; }
.notice-warning { border-color: #b8860b; }
.notice-danger { border-color: #a33a3a; }
.hero { text-align: center; padding: 2rem 0; }
.hero img { max-width: 100%; border-radius: 6px; }
.hero .highlight { font-style: italic; color: var(--accent); }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(230px, 1fr)); gap: 1.2rem; padding: 0; list-style: none; }
.card { background: var(--card); border: 1px solid var(--line); border-radius: 6px; padding: 1.2rem; }
.card h3 { margin-top: 0; }
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; padding: 0; list-style: none; }
.gallery-grid img { width: 100%; border-radius: 4px; }
.gallery-grid figcaption { font-size: 0.9rem; color: #6b5d52; }
dl.details { display: grid; grid-template-columns: max-content 1fr; gap: 0.3rem 1.2rem; }
dl.details dt { font-weight: bold; text-transform: capitalize; }
dl.details dd { margin: 0; }
.button { display: inline-block; background: var(--accent); color: #fff; padding: 0.5rem 1.4rem; border-radius: 4px; text-decoration: none; border: none; font-size: 1rem; cursor: pointer; }
.announcement { border-bottom: 1px solid var(--line); padding: 0.8rem 0; }
.announcement time { color: #6b5d52; font-size: 0.85rem; }
form.stacked label { display: block; margin: 0.8rem 0 0.2rem; font-weight: bold; }
form.stacked input[type=text], form.stacked input[type=password], form.stacked textarea { width: 100%; padding: 0.5rem; border: 1px solid var(--line); border-radius: 4px; font: inherit; }
form.stacked textarea { min-height: 7rem; }
form.stacked button { margin-top: 1rem; }
table.admin-table { width: 100%; border-collapse: collapse; background: var(--card); }
table.admin-table th, table.admin-table td { text-align: left; padding: 0.5rem 0.8rem; border-bottom: 1px solid var(--line); }
.stat-row { display: flex; gap: 1.2rem; flex-wrap: wrap; padding: 0; list-style: none; }
.stat-row .card { flex: 1; text-align: center; min-width: 140px; }
.stat-row .card strong { display: block; font-size: 2rem; }
.inline-form { display: inline; }
.site-footer { text-align: center; padding: 1.5rem; border-top: 1px solid var(--line); color: #6b5d52; font-size: 0.9rem; }
.error-page { text-align: center; padding: 4rem 1rem; }
@media (max-width: 640px) {
  .main-nav ul { display: none; flex-direction: column; }
  .main-nav.open ul { display: flex; }
  .nav-toggle { display: block; }
}
"#;

// ============================================================================
// Shared chrome
// ============================================================================

/// Renders the full HTML document around `content`.
fn base_document(title: &str, nav: Markup, notices: &[Notice], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (STYLE) }
            }
            body {
                header.site-header {
                    a.brand href="/" { (SITE_NAME) }
                    button.nav-toggle type="button" aria-label="Toggle navigation" { "☰" }
                    (nav)
                }
                main {
                    (notice_banner(notices))
                    (content)
                }
                footer.site-footer {
                    "© " (Utc::now().year()) " " (SITE_NAME) ". Demo content for showcase purposes."
                }
                script src="/static/js/site.js" {}
            }
        }
    }
}

/// Renders the public navigation, marking `current` by href.
fn site_nav(current: &str) -> Markup {
    html! {
        nav.main-nav {
            ul {
                @for (label, href) in NAV_LINKS {
                    li class=[(current == href).then_some("current")] {
                        a href=(href) { (label) }
                    }
                }
            }
        }
    }
}

/// Renders the admin navigation with a sign-out control.
fn admin_nav(current: &str) -> Markup {
    html! {
        nav.main-nav {
            ul {
                @for (label, href) in ADMIN_LINKS {
                    li class=[(current == href).then_some("current")] {
                        a href=(href) { (label) }
                    }
                }
                li { a href="/admin/logout" { "Sign out" } }
            }
        }
    }
}

/// Renders queued notices as dismissable-looking banners. Empty input
/// renders nothing at all.
fn notice_banner(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div.notices {
                @for notice in notices {
                    p class={ "notice notice-" (notice.level.as_str()) } { (notice.message) }
                }
            }
        }
    }
}

/// Parse an `extra_info` blob into (key, value) pairs. Entries are split on
/// newlines and `|`, each entry at its first `=`; pieces without `=` are
/// skipped.
fn extra_info_entries(raw: &str) -> Vec<(&str, &str)> {
    raw.split(['\n', '|'])
        .filter_map(|piece| piece.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// Renders extra info. A `cta` + `link` pair becomes a call-to-action
/// button; everything else becomes definition rows.
fn extra_info_block(raw: &str) -> Markup {
    let entries = extra_info_entries(raw);
    let cta = entries.iter().find(|(k, _)| *k == "cta").map(|(_, v)| *v);
    let link = entries.iter().find(|(k, _)| *k == "link").map(|(_, v)| *v);
    let rest: Vec<_> = entries
        .iter()
        .filter(|(k, _)| *k != "cta" && *k != "link")
        .collect();

    html! {
        @if let (Some(cta), Some(link)) = (cta, link) {
            p { a.button href=(link) { (cta) } }
        }
        @if !rest.is_empty() {
            dl.details {
                @for (key, value) in rest {
                    dt { (key) }
                    dd { (value) }
                }
            }
        }
    }
}

/// Renders the standalone error page used by the error responder.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let content = html! {
        div.error-page {
            h1 { (title) }
            p { (message) }
            p { a href="/" { "Back to the home page" } }
        }
    };
    base_document(&title, site_nav(""), &[], content)
}

// ============================================================================
// Tests
// ============================================================================
