use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Admin account row. Only the salted hash is ever stored.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// One editable page-content slot, addressed by its fixed `section` key.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SiteContent {
    pub id: i64,
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub highlight: Option<String>,
    pub image: Option<String>,
    pub extra_info: Option<String>,
}

/// The editable fields of a [`SiteContent`] row, as submitted by the admin
/// edit form. `section` and `id` are never writable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFields {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub highlight: Option<String>,
    pub image: Option<String>,
    pub extra_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GalleryImage {
    pub id: i64,
    pub file_path: String,
    pub caption: Option<String>,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Feature {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}
