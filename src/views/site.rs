//! Public-facing pages. Each renders one route from fetched rows; missing
//! section rows degrade to an empty page body rather than an error.

use maud::{Markup, html};

use crate::db::models::{Announcement, Feature, GalleryImage, SiteContent};
use crate::session::Notice;

use super::{base_document, extra_info_block, site_nav};

fn page_title<'a>(content: Option<&'a SiteContent>, fallback: &'a str) -> &'a str {
    content.and_then(|c| c.title.as_deref()).unwrap_or(fallback)
}

// ============================================================================
// Partials
// ============================================================================

/// Renders the banner block shared by every content-driven page.
fn hero(content: &SiteContent) -> Markup {
    html! {
        section.hero {
            @if let Some(image) = &content.image {
                img src=(image) alt=(content.title.as_deref().unwrap_or(""));
            }
            @if let Some(title) = &content.title { h1 { (title) } }
            @if let Some(subtitle) = &content.subtitle { p.subtitle { (subtitle) } }
            @if let Some(highlight) = &content.highlight { p.highlight { (highlight) } }
            @if let Some(body) = &content.body { p { (body) } }
        }
    }
}

fn feature_cards(features: &[Feature]) -> Markup {
    html! {
        ul.card-grid {
            @for feature in features {
                li.card {
                    i class={ "fas " (feature.icon) } aria-hidden="true" {}
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

fn announcement_list(announcements: &[Announcement]) -> Markup {
    html! {
        @for announcement in announcements {
            article.announcement {
                time datetime=(announcement.published_at.to_rfc3339()) {
                    (announcement.published_at.format("%Y-%m-%d"))
                }
                h3 { (announcement.title) }
                p { (announcement.content) }
            }
        }
    }
}

fn gallery_grid(images: &[GalleryImage]) -> Markup {
    html! {
        ul.gallery-grid {
            @for image in images {
                li {
                    figure {
                        img src=(image.file_path)
                            alt=(image.caption.as_deref().unwrap_or("Gallery image"));
                        @if let Some(caption) = &image.caption {
                            figcaption { (caption) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Renders the landing page: hero, highlight cards, announcements, and a
/// gallery preview.
pub fn home(
    content: Option<&SiteContent>,
    features: &[Feature],
    announcements: &[Announcement],
    gallery: &[GalleryImage],
    notices: &[Notice],
) -> Markup {
    let body = html! {
        @if let Some(content) = content {
            (hero(content))
            (extra_info_block(content.extra_info.as_deref().unwrap_or_default()))
        }
        @if !features.is_empty() {
            section {
                h2 { "Highlights" }
                (feature_cards(features))
            }
        }
        @if !announcements.is_empty() {
            section {
                h2 { "Announcements" }
                (announcement_list(announcements))
            }
        }
        @if !gallery.is_empty() {
            section {
                h2 { "Gallery" }
                (gallery_grid(gallery))
                p { a href="/gallery" { "View the full gallery" } }
            }
        }
    };
    base_document(page_title(content, "Home"), site_nav("/"), notices, body)
}

/// Renders the access page: hours in the hero, address details below.
pub fn access(content: Option<&SiteContent>, notices: &[Notice]) -> Markup {
    let body = html! {
        @if let Some(content) = content {
            (hero(content))
            (extra_info_block(content.extra_info.as_deref().unwrap_or_default()))
        }
    };
    base_document(
        page_title(content, "Access"),
        site_nav("/access"),
        notices,
        body,
    )
}

/// Renders the reservations page with its call-to-action button.
pub fn reservations(content: Option<&SiteContent>, notices: &[Notice]) -> Markup {
    let body = html! {
        @if let Some(content) = content {
            (hero(content))
            (extra_info_block(content.extra_info.as_deref().unwrap_or_default()))
        }
    };
    base_document(
        page_title(content, "Reservations"),
        site_nav("/reservations"),
        notices,
        body,
    )
}

/// Renders the full gallery.
pub fn gallery(images: &[GalleryImage], notices: &[Notice]) -> Markup {
    let body = html! {
        h1 { "Gallery" }
        @if images.is_empty() {
            p { "No images yet. Check back soon." }
        } @else {
            (gallery_grid(images))
        }
    };
    base_document("Gallery", site_nav("/gallery"), notices, body)
}

/// Renders the story page together with recent announcements.
pub fn about(
    content: Option<&SiteContent>,
    announcements: &[Announcement],
    notices: &[Notice],
) -> Markup {
    let body = html! {
        @if let Some(content) = content {
            (hero(content))
            (extra_info_block(content.extra_info.as_deref().unwrap_or_default()))
        }
        @if !announcements.is_empty() {
            section {
                h2 { "News & Notes" }
                (announcement_list(announcements))
            }
        }
    };
    base_document(page_title(content, "Story"), site_nav("/about"), notices, body)
}

/// Renders the highlights page: section copy plus every feature card.
pub fn highlights(
    content: Option<&SiteContent>,
    features: &[Feature],
    notices: &[Notice],
) -> Markup {
    let body = html! {
        @if let Some(content) = content {
            (hero(content))
        }
        @if features.is_empty() {
            p { "Nothing featured right now." }
        } @else {
            (feature_cards(features))
        }
    };
    base_document(
        page_title(content, "Highlights"),
        site_nav("/highlights"),
        notices,
        body,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_content() -> SiteContent {
        SiteContent {
            id: 1,
            section: "top".into(),
            title: Some("Sample Cafe Experience".into()),
            subtitle: Some("Crafted moments in every cup.".into()),
            body: Some("Welcome.".into()),
            highlight: Some("Sip. Savor. Share.".into()),
            image: Some("/static/images/hero.svg".into()),
            extra_info: Some("signature=Beans & desserts".into()),
        }
    }

    fn sample_feature() -> Feature {
        Feature {
            id: 1,
            title: "Seasonal Pairings".into(),
            description: "Rotating desserts.".into(),
            icon: "fa-leaf".into(),
        }
    }

    fn sample_announcement() -> Announcement {
        Announcement {
            id: 1,
            title: "Now Brewing".into(),
            content: "A featured bean.".into(),
            published_at: Utc::now(),
        }
    }

    fn sample_image() -> GalleryImage {
        GalleryImage {
            id: 1,
            file_path: "/static/images/gallery1.svg".into(),
            caption: Some("Signature espresso moment".into()),
            display_order: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn home_composes_all_sections() {
        let content = sample_content();
        let page = home(
            Some(&content),
            &[sample_feature()],
            &[sample_announcement()],
            &[sample_image()],
            &[],
        )
        .into_string();

        assert!(page.contains("Sample Cafe Experience"));
        assert!(page.contains("Sip. Savor. Share."));
        assert!(page.contains("Seasonal Pairings"));
        assert!(page.contains("Now Brewing"));
        assert!(page.contains("Signature espresso moment"));
        assert!(page.contains(r#"href="/gallery""#));
    }

    #[test]
    fn home_with_missing_section_still_renders() {
        let page = home(None, &[], &[], &[], &[]).into_string();
        assert!(page.contains("<title>Home | Sample Cafe</title>"));
        assert!(!page.contains("Announcements"));
    }

    #[test]
    fn reservations_renders_cta_button() {
        let mut content = sample_content();
        content.extra_info = Some("cta=Book Now|link=#".into());
        let page = reservations(Some(&content), &[]).into_string();
        assert!(page.contains("Book Now"));
        assert!(page.contains(r#"class="button""#));
    }

    #[test]
    fn access_renders_detail_rows() {
        let mut content = sample_content();
        content.extra_info = Some("address=123 Demo Street\nphone=000-0000-0000".into());
        let page = access(Some(&content), &[]).into_string();
        assert!(page.contains("123 Demo Street"));
        assert!(page.contains("<dt>phone</dt>"));
    }

    #[test]
    fn gallery_shows_empty_state() {
        let page = gallery(&[], &[]).into_string();
        assert!(page.contains("No images yet."));
    }

    #[test]
    fn highlights_renders_icon_classes() {
        let page = highlights(None, &[sample_feature()], &[]).into_string();
        assert!(page.contains("fas fa-leaf"));
    }

    #[test]
    fn feature_text_is_escaped() {
        let mut feature = sample_feature();
        feature.title = "<b>bold</b>".into();
        let page = highlights(None, &[feature], &[]).into_string();
        assert!(!page.contains("<b>bold</b>"));
        assert!(page.contains("&lt;b&gt;"));
    }
}
