use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum SiteError {
    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("multipart form error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("unknown content section: {0}")]
    SectionNotFound(String),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            SiteError::SectionNotFound(section) => (
                StatusCode::NOT_FOUND,
                format!("No content section named \"{section}\"."),
            ),
            SiteError::Multipart(e) => {
                (e.status(), "The submitted form could not be read.".to_string())
            }
            // Storage and filesystem faults stay generic toward the caller;
            // the cause only goes to the server log.
            SiteError::Database(_) | SiteError::Io(_) | SiteError::PasswordHash(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A server error occurred. Please try again later.".to_string(),
                )
            }
        };
        let page = views::error_page(status, &message);
        (status, Html(page.into_string())).into_response()
    }
}
