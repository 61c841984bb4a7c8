use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::{NoticeLevel, Session, SessionStore};

/// Proof that the request belongs to a signed-in administrator.
/// Extracting this on a route is the whole auth guard: anonymous requests
/// get a notice queued and a redirect to the sign-in page instead of the
/// handler ever running.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: i64,
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminUser
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        let current = session.state().await;
        match (current.user_id, current.username) {
            (Some(user_id), Some(username)) => Ok(AdminUser { user_id, username }),
            _ => {
                session
                    .push_notice(NoticeLevel::Warning, "Please sign in to continue.")
                    .await;
                Err(Redirect::to("/admin/login").into_response())
            }
        }
    }
}
