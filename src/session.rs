use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Severity of a queued notice; doubles as the banner CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
        }
    }
}

/// A one-shot message queued for the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything the server remembers about one browser session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub notices: Vec<Notice>,
}

/// In-memory session storage keyed by the opaque cookie token. Entries are
/// created on first write, so anonymous page views cost nothing here.
/// Sessions live until sign-out or process restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, token: &str) -> SessionState {
        self.inner.read().await.get(token).cloned().unwrap_or_default()
    }

    pub async fn set(&self, token: &str, state: SessionState) {
        self.inner.write().await.insert(token.to_owned(), state);
    }

    pub async fn clear(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

/// Mint a fresh unguessable session token.
pub fn mint_token() -> String {
    Uuid::new_v4().to_string()
}

/// Request extension carrying the token the session middleware settled on.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Per-request handle pairing the store with this request's token. Extracted
/// in handlers; every method takes the store lock for just one operation.
#[derive(Clone)]
pub struct Session {
    store: SessionStore,
    token: String,
}

impl Session {
    pub async fn state(&self) -> SessionState {
        self.store.get(&self.token).await
    }

    pub async fn user_id(&self) -> Option<i64> {
        self.store.get(&self.token).await.user_id
    }

    /// Mark this session as signed in. Notices already queued (for example
    /// the sign-in confirmation) are kept.
    pub async fn login(&self, user_id: i64, username: &str) {
        let mut map = self.store.inner.write().await;
        let state = map.entry(self.token.clone()).or_default();
        state.user_id = Some(user_id);
        state.username = Some(username.to_owned());
    }

    /// Drop the server-side state entirely.
    pub async fn logout(&self) {
        self.store.clear(&self.token).await;
    }

    pub async fn push_notice(&self, level: NoticeLevel, message: impl Into<String>) {
        let mut map = self.store.inner.write().await;
        map.entry(self.token.clone()).or_default().notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Drain queued notices in insertion order. Leaves untouched sessions
    /// unmaterialized; draining never creates an entry.
    pub async fn take_notices(&self) -> Vec<Notice> {
        let mut map = self.store.inner.write().await;
        match map.get_mut(&self.token) {
            Some(state) => std::mem::take(&mut state.notices),
            None => Vec::new(),
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(SessionToken(token)) = parts.extensions.get::<SessionToken>().cloned() else {
            return Err(
                (StatusCode::INTERNAL_SERVER_ERROR, "session middleware not installed")
                    .into_response(),
            );
        };
        Ok(Session {
            store: SessionStore::from_ref(state),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(store: &SessionStore) -> Session {
        Session {
            store: store.clone(),
            token: mint_token(),
        }
    }

    #[tokio::test]
    async fn login_preserves_queued_notices() {
        let store = SessionStore::new();
        let session = session(&store);

        session.push_notice(NoticeLevel::Success, "Signed in.").await;
        session.login(1, "admin").await;

        let state = session.state().await;
        assert_eq!(state.user_id, Some(1));
        assert_eq!(state.username.as_deref(), Some("admin"));
        assert_eq!(state.notices.len(), 1);
    }

    #[tokio::test]
    async fn take_notices_drains_in_order() {
        let store = SessionStore::new();
        let session = session(&store);

        session.push_notice(NoticeLevel::Warning, "first").await;
        session.push_notice(NoticeLevel::Info, "second").await;

        let drained = session.take_notices().await;
        assert_eq!(
            drained,
            vec![
                Notice {
                    level: NoticeLevel::Warning,
                    message: "first".into()
                },
                Notice {
                    level: NoticeLevel::Info,
                    message: "second".into()
                },
            ]
        );
        assert!(session.take_notices().await.is_empty());
    }

    #[tokio::test]
    async fn logout_discards_all_state() {
        let store = SessionStore::new();
        let session = session(&store);

        session.login(1, "admin").await;
        session.logout().await;

        let state = session.state().await;
        assert_eq!(state.user_id, None);
        assert!(state.notices.is_empty());
    }

    #[tokio::test]
    async fn anonymous_reads_do_not_materialize_entries() {
        let store = SessionStore::new();
        let session = session(&store);

        let _ = session.state().await;
        let _ = session.take_notices().await;

        assert_eq!(store.inner.read().await.len(), 0);
    }
}
