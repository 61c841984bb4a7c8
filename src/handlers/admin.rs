use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::password::verify_password;
use crate::db::models::ContentFields;
use crate::db::seed::DEFAULT_FEATURE_ICON;
use crate::error::SiteError;
use crate::middleware::auth::AdminUser;
use crate::router::SiteState;
use crate::session::{NoticeLevel, Session};
use crate::upload::{allowed_file, store_upload};
use crate::views;

/// Browsers submit blank inputs as empty strings; store those as NULL.
fn clean(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

// ============================================================================
// Sign-in / sign-out
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_form_handler(session: Session) -> Html<String> {
    let notices = session.take_notices().await;
    Html(views::admin::login(&notices).into_string())
}

/// Verify credentials and promote the session. Unknown usernames and wrong
/// passwords get the same notice.
pub async fn login_submit_handler(
    State(state): State<SiteState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, SiteError> {
    let username = form.username.trim();
    if let Some(user) = state.storage.user_by_username(username).await?
        && verify_password(&form.password, &user.password_hash)?
    {
        session.login(user.id, &user.username).await;
        session.push_notice(NoticeLevel::Success, "Signed in.").await;
        return Ok(Redirect::to("/admin"));
    }

    session
        .push_notice(
            NoticeLevel::Danger,
            "Login failed. Check your username and password.",
        )
        .await;
    Ok(Redirect::to("/admin/login"))
}

pub async fn logout_handler(_admin: AdminUser, session: Session) -> Redirect {
    session.logout().await;
    session.push_notice(NoticeLevel::Info, "Signed out.").await;
    Redirect::to("/admin/login")
}

// ============================================================================
// Dashboard
// ============================================================================

pub async fn dashboard_handler(
    State(state): State<SiteState>,
    admin: AdminUser,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let contents = state.storage.list_all_content().await?;
    let gallery_count = state.storage.count_gallery_images().await?;
    let feature_count = state.storage.count_features().await?;
    let announcement_count = state.storage.count_announcements().await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::admin::dashboard(
            &admin.username,
            &contents,
            gallery_count,
            feature_count,
            announcement_count,
            &notices,
        )
        .into_string(),
    ))
}

// ============================================================================
// Section content
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ContentForm {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub highlight: Option<String>,
    pub image: Option<String>,
    pub extra_info: Option<String>,
}

pub async fn edit_content_form_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
    Path(section): Path<String>,
) -> Result<Response, SiteError> {
    let Some(content) = state.storage.content_by_section(&section).await? else {
        session
            .push_notice(NoticeLevel::Warning, "Section not found.")
            .await;
        return Ok(Redirect::to("/admin").into_response());
    };
    let notices = session.take_notices().await;
    Ok(Html(views::admin::edit_content(&content, &notices).into_string()).into_response())
}

/// Overwrite all six fields of the section. When the section row does not
/// exist, nothing is written and the admin lands back on the dashboard.
pub async fn edit_content_submit_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
    Path(section): Path<String>,
    Form(form): Form<ContentForm>,
) -> Result<Redirect, SiteError> {
    let fields = ContentFields {
        title: clean(form.title),
        subtitle: clean(form.subtitle),
        body: clean(form.body),
        highlight: clean(form.highlight),
        image: clean(form.image),
        extra_info: clean(form.extra_info),
    };

    let updated = state.storage.update_content(&section, &fields).await?;
    if updated == 0 {
        session
            .push_notice(NoticeLevel::Warning, "Section not found.")
            .await;
        return Ok(Redirect::to("/admin"));
    }

    session
        .push_notice(NoticeLevel::Success, "Content updated.")
        .await;
    Ok(Redirect::to(&format!("/admin/content/{section}")))
}

// ============================================================================
// Gallery
// ============================================================================

#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Bytes,
}

/// What a gallery POST asks for. The manage page submits two different
/// forms to one route: a multipart upload and a urlencoded delete.
pub enum GalleryAction {
    Upload {
        image: Option<UploadedImage>,
        caption: Option<String>,
    },
    Delete {
        image_id: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct GalleryDeleteForm {
    action: Option<String>,
    image_id: Option<String>,
    caption: Option<String>,
}

impl<S> FromRequest<S> for GalleryAction
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = match Form::<GalleryDeleteForm>::from_request(req, &()).await {
                Ok(form) => form,
                Err(rejection) => return Err(rejection.into_response()),
            };
            if form.action.as_deref() == Some("delete") {
                return Ok(GalleryAction::Delete {
                    image_id: form.image_id,
                });
            }
            // Urlencoded but not a delete: treat as an upload without a file.
            return Ok(GalleryAction::Upload {
                image: None,
                caption: form.caption,
            });
        }

        let mut multipart = match Multipart::from_request(req, &()).await {
            Ok(multipart) => multipart,
            Err(rejection) => return Err(rejection.into_response()),
        };

        let mut image = None;
        let mut caption = None;
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => return Err(SiteError::from(e).into_response()),
            };
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("image") => {
                    let filename = field.file_name().map(str::to_owned);
                    let bytes = match field.bytes().await {
                        Ok(bytes) => bytes,
                        Err(e) => return Err(SiteError::from(e).into_response()),
                    };
                    // A file input left empty still arrives as a part, with
                    // an empty filename.
                    if let Some(filename) = filename.filter(|f| !f.is_empty()) {
                        image = Some(UploadedImage { filename, bytes });
                    }
                }
                Some("caption") => {
                    let text = match field.text().await {
                        Ok(text) => text,
                        Err(e) => return Err(SiteError::from(e).into_response()),
                    };
                    caption = clean(Some(text));
                }
                _ => {}
            }
        }

        Ok(GalleryAction::Upload { image, caption })
    }
}

pub async fn manage_gallery_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let images = state.storage.list_gallery_images(None).await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::admin::manage_gallery(&images, &notices).into_string(),
    ))
}

pub async fn gallery_submit_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
    action: GalleryAction,
) -> Result<Redirect, SiteError> {
    match action {
        GalleryAction::Delete { image_id } => {
            if let Some(id) = image_id.as_deref().and_then(|v| v.parse::<i64>().ok()) {
                state.storage.delete_gallery_image(id).await?;
            }
            session.push_notice(NoticeLevel::Info, "Image removed.").await;
        }
        GalleryAction::Upload { image, caption } => match image {
            Some(image) if allowed_file(&image.filename) => {
                let stored =
                    store_upload(&state.upload_dir(), &image.filename, &image.bytes).await?;
                let public_path = format!("/static/uploads/{stored}");
                state
                    .storage
                    .add_gallery_image(&public_path, caption.as_deref())
                    .await?;
                session
                    .push_notice(NoticeLevel::Success, "Gallery updated.")
                    .await;
            }
            _ => {
                session
                    .push_notice(
                        NoticeLevel::Warning,
                        "Please choose an image file (png, jpg, jpeg, gif, webp).",
                    )
                    .await;
            }
        },
    }
    Ok(Redirect::to("/admin/gallery"))
}

// ============================================================================
// Highlight cards
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FeatureForm {
    pub action: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub feature_id: Option<String>,
}

pub async fn manage_features_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let features = state.storage.list_features().await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::admin::manage_features(&features, &notices).into_string(),
    ))
}

pub async fn features_submit_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
    Form(form): Form<FeatureForm>,
) -> Result<Redirect, SiteError> {
    match form.action.as_deref() {
        Some("add") => {
            let title = form.title.unwrap_or_default();
            let description = form.description.unwrap_or_default();
            if title.trim().is_empty() || description.trim().is_empty() {
                session
                    .push_notice(NoticeLevel::Warning, "Title and description are required.")
                    .await;
            } else {
                let icon = form
                    .icon
                    .filter(|icon| !icon.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FEATURE_ICON.to_owned());
                state.storage.add_feature(&title, &description, &icon).await?;
                session
                    .push_notice(NoticeLevel::Success, "Feature card added.")
                    .await;
            }
        }
        Some("delete") => {
            if let Some(id) = form.feature_id.as_deref().and_then(|v| v.parse::<i64>().ok()) {
                state.storage.delete_feature(id).await?;
            }
            session
                .push_notice(NoticeLevel::Info, "Feature card removed.")
                .await;
        }
        _ => {}
    }
    Ok(Redirect::to("/admin/features"))
}

// ============================================================================
// Announcements
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnnouncementForm {
    pub action: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub announcement_id: Option<String>,
}

pub async fn manage_announcements_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let announcements = state.storage.list_announcements().await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::admin::manage_announcements(&announcements, &notices).into_string(),
    ))
}

pub async fn announcements_submit_handler(
    State(state): State<SiteState>,
    _admin: AdminUser,
    session: Session,
    Form(form): Form<AnnouncementForm>,
) -> Result<Redirect, SiteError> {
    match form.action.as_deref() {
        Some("add") => {
            let title = form.title.unwrap_or_default();
            let content = form.content.unwrap_or_default();
            if title.trim().is_empty() || content.trim().is_empty() {
                session
                    .push_notice(NoticeLevel::Warning, "Title and content are required.")
                    .await;
            } else {
                state.storage.add_announcement(&title, &content).await?;
                session
                    .push_notice(NoticeLevel::Success, "Announcement published.")
                    .await;
            }
        }
        Some("delete") => {
            if let Some(id) = form
                .announcement_id
                .as_deref()
                .and_then(|v| v.parse::<i64>().ok())
            {
                state.storage.delete_announcement(id).await?;
            }
            session
                .push_notice(NoticeLevel::Info, "Announcement removed.")
                .await;
        }
        _ => {}
    }
    Ok(Redirect::to("/admin/announcements"))
}
