//! SQL DDL for initializing the site database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema for the five site tables:
/// - `users`: admin accounts, `username` UNIQUE, hash only (never plaintext)
/// - `site_content`: one row per fixed page section, `section` UNIQUE
/// - `gallery_images`: uploaded/seeded images plus display metadata
/// - `features`: promotional cards with an icon reference
/// - `announcements`: timestamped public notices
///
/// Every statement is `IF NOT EXISTS` so initialization is safe to run on
/// each process start.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS site_content (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section TEXT UNIQUE NOT NULL,
    title TEXT,
    subtitle TEXT,
    body TEXT,
    highlight TEXT,
    image TEXT,
    extra_info TEXT
);

CREATE TABLE IF NOT EXISTS gallery_images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_path TEXT NOT NULL,
    caption TEXT,
    display_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS features (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    icon TEXT NOT NULL DEFAULT 'fa-mug-hot'
);

CREATE TABLE IF NOT EXISTS announcements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    published_at TEXT NOT NULL
);
"#;
