use std::path::PathBuf;

use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRef};
use axum::middleware;
use axum::routing::get;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, MAX_UPLOAD_BYTES};
use crate::db::SiteStorage;
use crate::handlers::{admin, public};
use crate::middleware::session::attach_session;
use crate::session::SessionStore;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct SiteState {
    pub storage: SiteStorage,
    pub sessions: SessionStore,
    pub insecure_cookie: bool,
    static_dir: PathBuf,
    cookie_key: Key,
}

impl SiteState {
    pub fn new(storage: SiteStorage, config: &Config) -> Self {
        Self {
            storage,
            sessions: SessionStore::new(),
            insecure_cookie: config.insecure_cookie,
            static_dir: config.static_dir.clone(),
            cookie_key: derive_cookie_key(&config.secret_key),
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join("uploads")
    }
}

// The private cookie jar and the session extractor pull their pieces out of
// the state by type.
impl FromRef<SiteState> for Key {
    fn from_ref(state: &SiteState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<SiteState> for SessionStore {
    fn from_ref(state: &SiteState) -> Self {
        state.sessions.clone()
    }
}

/// Cookie keys require 64 bytes of material. Hashing the configured secret
/// accepts any length and derives the same key for the same secret across
/// restarts.
fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Build the complete application: public pages, the admin panel, and the
/// static file tree, wrapped in session handling, the upload body cap, and
/// request tracing.
pub fn site_router(state: SiteState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        .route("/", get(public::home_handler))
        .route("/access", get(public::access_handler))
        .route("/reservations", get(public::reservations_handler))
        .route("/gallery", get(public::gallery_handler))
        .route("/about", get(public::about_handler))
        .route("/highlights", get(public::highlights_handler))
        .route("/admin", get(admin::dashboard_handler))
        .route(
            "/admin/login",
            get(admin::login_form_handler).post(admin::login_submit_handler),
        )
        .route("/admin/logout", get(admin::logout_handler))
        .route(
            "/admin/content/{section}",
            get(admin::edit_content_form_handler).post(admin::edit_content_submit_handler),
        )
        .route(
            "/admin/gallery",
            get(admin::manage_gallery_handler).post(admin::gallery_submit_handler),
        )
        .route(
            "/admin/features",
            get(admin::manage_features_handler).post(admin::features_submit_handler),
        )
        .route(
            "/admin/announcements",
            get(admin::manage_announcements_handler).post(admin::announcements_submit_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn_with_state(state.clone(), attach_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
