//! Admin panel pages: sign-in, the dashboard, and the management forms.
//! All mutations are plain HTML forms posting back to their own route.

use maud::{Markup, html};

use crate::db::models::{Announcement, Feature, GalleryImage, SiteContent};
use crate::db::seed::DEFAULT_FEATURE_ICON;
use crate::session::Notice;

use super::{admin_nav, base_document, site_nav};

/// Renders the sign-in form.
pub fn login(notices: &[Notice]) -> Markup {
    let body = html! {
        h1 { "Admin sign-in" }
        form.stacked method="post" action="/admin/login" {
            label for="username" { "Username" }
            input id="username" type="text" name="username" autofocus;
            label for="password" { "Password" }
            input id="password" type="password" name="password";
            button.button type="submit" { "Sign in" }
        }
    };
    base_document("Sign in", site_nav(""), notices, body)
}

/// Renders the dashboard: row counts and an edit link per page section.
pub fn dashboard(
    username: &str,
    contents: &[SiteContent],
    gallery_count: i64,
    feature_count: i64,
    announcement_count: i64,
    notices: &[Notice],
) -> Markup {
    let body = html! {
        h1 { "Dashboard" }
        p { "Signed in as " strong { (username) } "." }
        ul.stat-row {
            li.card { strong { (gallery_count) } "Gallery images" }
            li.card { strong { (feature_count) } "Highlight cards" }
            li.card { strong { (announcement_count) } "Announcements" }
        }
        h2 { "Page content" }
        table.admin-table {
            thead {
                tr { th { "Section" } th { "Title" } th {} }
            }
            tbody {
                @for content in contents {
                    tr {
                        td { code { (content.section) } }
                        td { (content.title.as_deref().unwrap_or("")) }
                        td {
                            a href={ "/admin/content/" (content.section) } { "Edit" }
                        }
                    }
                }
            }
        }
    };
    base_document("Dashboard", admin_nav("/admin"), notices, body)
}

/// Renders the content editing form for one section, prefilled with the
/// current values.
pub fn edit_content(content: &SiteContent, notices: &[Notice]) -> Markup {
    let action = format!("/admin/content/{}", content.section);
    let body = html! {
        h1 { "Edit “" (content.section) "”" }
        form.stacked method="post" action=(action) {
            label for="title" { "Title" }
            input id="title" type="text" name="title"
                value=(content.title.as_deref().unwrap_or(""));
            label for="subtitle" { "Subtitle" }
            input id="subtitle" type="text" name="subtitle"
                value=(content.subtitle.as_deref().unwrap_or(""));
            label for="body" { "Body" }
            textarea id="body" name="body" { (content.body.as_deref().unwrap_or("")) }
            label for="highlight" { "Highlight" }
            input id="highlight" type="text" name="highlight"
                value=(content.highlight.as_deref().unwrap_or(""));
            label for="image" { "Image path" }
            input id="image" type="text" name="image"
                value=(content.image.as_deref().unwrap_or(""));
            label for="extra_info" { "Extra info (key=value per line)" }
            textarea id="extra_info" name="extra_info" {
                (content.extra_info.as_deref().unwrap_or(""))
            }
            button.button type="submit" { "Save changes" }
        }
    };
    base_document("Edit content", admin_nav("/admin"), notices, body)
}

/// Renders the gallery manager: an upload form above the current images,
/// each with its own delete form.
pub fn manage_gallery(images: &[GalleryImage], notices: &[Notice]) -> Markup {
    let body = html! {
        h1 { "Gallery" }
        form.stacked method="post" action="/admin/gallery" enctype="multipart/form-data" {
            label for="image" { "Image file" }
            input id="image" type="file" name="image" accept="image/*";
            label for="caption" { "Caption" }
            input id="caption" type="text" name="caption";
            button.button type="submit" { "Upload" }
        }
        h2 { "Current images" }
        table.admin-table {
            thead {
                tr { th { "Preview" } th { "Path" } th { "Caption" } th { "Order" } th {} }
            }
            tbody {
                @for image in images {
                    tr {
                        td { img src=(image.file_path) alt="" width="80"; }
                        td { code { (image.file_path) } }
                        td { (image.caption.as_deref().unwrap_or("")) }
                        td { (image.display_order) }
                        td {
                            form.inline-form method="post" action="/admin/gallery" {
                                input type="hidden" name="action" value="delete";
                                input type="hidden" name="image_id" value=(image.id);
                                button.button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document("Gallery", admin_nav("/admin/gallery"), notices, body)
}

/// Renders the highlight-card manager.
pub fn manage_features(features: &[Feature], notices: &[Notice]) -> Markup {
    let body = html! {
        h1 { "Highlight cards" }
        form.stacked method="post" action="/admin/features" {
            input type="hidden" name="action" value="add";
            label for="title" { "Title" }
            input id="title" type="text" name="title";
            label for="description" { "Description" }
            textarea id="description" name="description" {}
            label for="icon" { "Icon class" }
            input id="icon" type="text" name="icon" placeholder=(DEFAULT_FEATURE_ICON);
            button.button type="submit" { "Add card" }
        }
        h2 { "Current cards" }
        table.admin-table {
            thead {
                tr { th { "Icon" } th { "Title" } th { "Description" } th {} }
            }
            tbody {
                @for feature in features {
                    tr {
                        td { code { (feature.icon) } }
                        td { (feature.title) }
                        td { (feature.description) }
                        td {
                            form.inline-form method="post" action="/admin/features" {
                                input type="hidden" name="action" value="delete";
                                input type="hidden" name="feature_id" value=(feature.id);
                                button.button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document("Highlights", admin_nav("/admin/features"), notices, body)
}

/// Renders the announcement manager.
pub fn manage_announcements(announcements: &[Announcement], notices: &[Notice]) -> Markup {
    let body = html! {
        h1 { "Announcements" }
        form.stacked method="post" action="/admin/announcements" {
            input type="hidden" name="action" value="add";
            label for="title" { "Title" }
            input id="title" type="text" name="title";
            label for="content" { "Content" }
            textarea id="content" name="content" {}
            button.button type="submit" { "Publish" }
        }
        h2 { "Published" }
        @for announcement in announcements {
            article.announcement {
                time datetime=(announcement.published_at.to_rfc3339()) {
                    (announcement.published_at.format("%Y-%m-%d"))
                }
                h3 { (announcement.title) }
                p { (announcement.content) }
                form.inline-form method="post" action="/admin/announcements" {
                    input type="hidden" name="action" value="delete";
                    input type="hidden" name="announcement_id" value=(announcement.id);
                    button.button type="submit" { "Delete" }
                }
            }
        }
    };
    base_document(
        "Announcements",
        admin_nav("/admin/announcements"),
        notices,
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn login_form_posts_to_login_route() {
        let page = login(&[]).into_string();
        assert!(page.contains(r#"action="/admin/login""#));
        assert!(page.contains(r#"type="password""#));
    }

    #[test]
    fn dashboard_links_every_section() {
        let contents = vec![
            SiteContent {
                id: 1,
                section: "top".into(),
                title: Some("Sample Cafe Experience".into()),
                subtitle: None,
                body: None,
                highlight: None,
                image: None,
                extra_info: None,
            },
            SiteContent {
                id: 2,
                section: "access".into(),
                title: Some("Access & Hours".into()),
                subtitle: None,
                body: None,
                highlight: None,
                image: None,
                extra_info: None,
            },
        ];
        let page = dashboard("admin", &contents, 3, 3, 1, &[]).into_string();
        assert!(page.contains(r#"href="/admin/content/top""#));
        assert!(page.contains(r#"href="/admin/content/access""#));
        assert!(page.contains("Signed in as <strong>admin</strong>"));
    }

    #[test]
    fn edit_form_prefills_current_values() {
        let content = SiteContent {
            id: 1,
            section: "access".into(),
            title: Some("Access & Hours".into()),
            subtitle: Some("Find your way.".into()),
            body: Some("Directions here.".into()),
            highlight: None,
            image: Some("/static/images/interior.svg".into()),
            extra_info: Some("phone=000".into()),
        };
        let page = edit_content(&content, &[]).into_string();
        assert!(page.contains(r#"action="/admin/content/access""#));
        assert!(page.contains(r#"value="Access &amp; Hours""#));
        assert!(page.contains("Directions here."));
        assert!(page.contains("phone=000"));
    }

    #[test]
    fn gallery_form_is_multipart_with_delete_rows() {
        let images = vec![GalleryImage {
            id: 7,
            file_path: "/static/uploads/shot.png".into(),
            caption: Some("A shot".into()),
            display_order: 0,
            created_at: Utc::now(),
        }];
        let page = manage_gallery(&images, &[]).into_string();
        assert!(page.contains(r#"enctype="multipart/form-data""#));
        assert!(page.contains(r#"name="image_id" value="7""#));
        assert!(page.contains("/static/uploads/shot.png"));
    }

    #[test]
    fn feature_form_suggests_default_icon() {
        let page = manage_features(&[], &[]).into_string();
        assert!(page.contains(r#"placeholder="fa-mug-hot""#));
        assert!(page.contains(r#"name="action" value="add""#));
    }

    #[test]
    fn announcement_rows_carry_delete_forms() {
        let announcements = vec![Announcement {
            id: 3,
            title: "Now Brewing".into(),
            content: "Beans.".into(),
            published_at: Utc::now(),
        }];
        let page = manage_announcements(&announcements, &[]).into_string();
        assert!(page.contains(r#"name="announcement_id" value="3""#));
        assert!(page.contains("Now Brewing"));
    }
}
