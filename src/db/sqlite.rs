use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{info, warn};

use crate::auth::password::hash_password;
use crate::db::models::{Announcement, ContentFields, Feature, GalleryImage, SiteContent, User};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_ANNOUNCEMENT, DEFAULT_CONTENT,
    DEFAULT_FEATURES, DEFAULT_GALLERY,
};
use crate::error::SiteError;

pub type SqlitePool = Pool<Sqlite>;

/// All reads and writes against the site database. The only place SQL
/// appears; each call acquires a pooled connection for exactly the span of
/// its statements.
#[derive(Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and pool the database at `url`.
    pub async fn connect(url: &str) -> Result<Self, SiteError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SiteError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Install the default rows, skipping any table (or section row) that
    /// already has data. Runs in one transaction; safe on every start.
    pub async fn seed_defaults(&self) -> Result<(), SiteError> {
        let mut tx = self.pool.begin().await?;

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;
        if users == 0 {
            let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD)?;
            sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)")
                .bind(DEFAULT_ADMIN_USERNAME)
                .bind(&password_hash)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
            warn!(
                username = DEFAULT_ADMIN_USERNAME,
                password = DEFAULT_ADMIN_PASSWORD,
                "created default admin account with a public default password; change it"
            );
        }

        let mut seeded_sections = 0usize;
        for content in &DEFAULT_CONTENT {
            let existing: Option<i64> =
                sqlx::query_scalar("SELECT id FROM site_content WHERE section = ?")
                    .bind(content.section)
                    .fetch_optional(&mut *tx)
                    .await?;
            if existing.is_none() {
                sqlx::query(
                    r#"
                    INSERT INTO site_content (section, title, subtitle, body, highlight, image, extra_info)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(content.section)
                .bind(content.title)
                .bind(content.subtitle)
                .bind(content.body)
                .bind(content.highlight)
                .bind(content.image)
                .bind(content.extra_info)
                .execute(&mut *tx)
                .await?;
                seeded_sections += 1;
            }
        }

        let gallery: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_images")
            .fetch_one(&mut *tx)
            .await?;
        if gallery == 0 {
            for (order, (path, caption)) in DEFAULT_GALLERY.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO gallery_images (file_path, caption, display_order, created_at) \
                     VALUES (?, ?, ?, ?)",
                )
                .bind(path)
                .bind(caption)
                .bind(order as i64 + 1)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
            }
        }

        let features: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM features")
            .fetch_one(&mut *tx)
            .await?;
        if features == 0 {
            for (title, description, icon) in &DEFAULT_FEATURES {
                sqlx::query("INSERT INTO features (title, description, icon) VALUES (?, ?, ?)")
                    .bind(title)
                    .bind(description)
                    .bind(icon)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        let announcements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM announcements")
            .fetch_one(&mut *tx)
            .await?;
        if announcements == 0 {
            let (title, content) = DEFAULT_ANNOUNCEMENT;
            sqlx::query(
                "INSERT INTO announcements (title, content, published_at) VALUES (?, ?, ?)",
            )
            .bind(title)
            .bind(content)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        if seeded_sections > 0 {
            info!(sections = seeded_sections, "seeded default site content");
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // site_content
    // ------------------------------------------------------------------

    pub async fn content_by_section(
        &self,
        section: &str,
    ) -> Result<Option<SiteContent>, SiteError> {
        let row = sqlx::query_as::<_, SiteContent>(
            "SELECT id, section, title, subtitle, body, highlight, image, extra_info \
             FROM site_content WHERE section = ?",
        )
        .bind(section)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_all_content(&self) -> Result<Vec<SiteContent>, SiteError> {
        let rows = sqlx::query_as::<_, SiteContent>(
            "SELECT id, section, title, subtitle, body, highlight, image, extra_info \
             FROM site_content ORDER BY section",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Overwrite every editable field of the row matching `section`.
    /// Returns the number of rows touched; zero means the section does not
    /// exist and nothing was written.
    pub async fn update_content(
        &self,
        section: &str,
        fields: &ContentFields,
    ) -> Result<u64, SiteError> {
        let result = sqlx::query(
            r#"
            UPDATE site_content
            SET title = ?, subtitle = ?, body = ?, highlight = ?, image = ?, extra_info = ?
            WHERE section = ?
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.subtitle)
        .bind(&fields.body)
        .bind(&fields.highlight)
        .bind(&fields.image)
        .bind(&fields.extra_info)
        .bind(section)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    // ------------------------------------------------------------------
    // gallery_images
    // ------------------------------------------------------------------

    pub async fn list_gallery_images(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<GalleryImage>, SiteError> {
        let base = "SELECT id, file_path, caption, display_order, created_at \
                    FROM gallery_images \
                    ORDER BY display_order, datetime(created_at) DESC, id DESC";
        let rows = if let Some(limit) = limit {
            sqlx::query_as::<_, GalleryImage>(&format!("{base} LIMIT ?"))
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            sqlx::query_as::<_, GalleryImage>(base)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    pub async fn add_gallery_image(
        &self,
        file_path: &str,
        caption: Option<&str>,
    ) -> Result<(), SiteError> {
        sqlx::query("INSERT INTO gallery_images (file_path, caption, created_at) VALUES (?, ?, ?)")
            .bind(file_path)
            .bind(caption)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Hard delete; an unknown id affects zero rows and is not an error.
    /// The file on disk is left alone (orphans are accepted).
    pub async fn delete_gallery_image(&self, id: i64) -> Result<(), SiteError> {
        sqlx::query("DELETE FROM gallery_images WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_gallery_images(&self) -> Result<i64, SiteError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM gallery_images")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // features
    // ------------------------------------------------------------------

    pub async fn list_features(&self) -> Result<Vec<Feature>, SiteError> {
        let rows = sqlx::query_as::<_, Feature>(
            "SELECT id, title, description, icon FROM features ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a feature card. A blank title or description makes this a
    /// silent no-op: no insert, no error.
    pub async fn add_feature(
        &self,
        title: &str,
        description: &str,
        icon: &str,
    ) -> Result<(), SiteError> {
        if title.trim().is_empty() || description.trim().is_empty() {
            return Ok(());
        }
        sqlx::query("INSERT INTO features (title, description, icon) VALUES (?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(icon)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_feature(&self, id: i64) -> Result<(), SiteError> {
        sqlx::query("DELETE FROM features WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_features(&self) -> Result<i64, SiteError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM features")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // announcements
    // ------------------------------------------------------------------

    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, SiteError> {
        let rows = sqlx::query_as::<_, Announcement>(
            "SELECT id, title, content, published_at FROM announcements \
             ORDER BY datetime(published_at) DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Same silent-reject policy as [`SiteStorage::add_feature`].
    pub async fn add_announcement(&self, title: &str, content: &str) -> Result<(), SiteError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Ok(());
        }
        sqlx::query("INSERT INTO announcements (title, content, published_at) VALUES (?, ?, ?)")
            .bind(title)
            .bind(content)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_announcement(&self, id: i64) -> Result<(), SiteError> {
        sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_announcements(&self) -> Result<i64, SiteError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM announcements")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // users
    // ------------------------------------------------------------------

    pub async fn user_by_username(&self, username: &str) -> Result<Option<User>, SiteError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
