pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{Announcement, ContentFields, Feature, GalleryImage, SiteContent, User};
pub use sqlite::{SiteStorage, SqlitePool};
