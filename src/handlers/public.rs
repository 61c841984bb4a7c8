use axum::extract::State;
use axum::response::Html;

use crate::error::SiteError;
use crate::router::SiteState;
use crate::session::Session;
use crate::views;

/// Landing page: hero section plus feature cards, announcements, and the
/// four newest gallery images.
pub async fn home_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let content = state.storage.content_by_section("top").await?;
    let features = state.storage.list_features().await?;
    let announcements = state.storage.list_announcements().await?;
    let gallery = state.storage.list_gallery_images(Some(4)).await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::site::home(content.as_ref(), &features, &announcements, &gallery, &notices)
            .into_string(),
    ))
}

pub async fn access_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let content = state.storage.content_by_section("access").await?;
    let notices = session.take_notices().await;
    Ok(Html(views::site::access(content.as_ref(), &notices).into_string()))
}

pub async fn reservations_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let content = state.storage.content_by_section("reservations").await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::site::reservations(content.as_ref(), &notices).into_string(),
    ))
}

pub async fn gallery_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let images = state.storage.list_gallery_images(None).await?;
    let notices = session.take_notices().await;
    Ok(Html(views::site::gallery(&images, &notices).into_string()))
}

pub async fn about_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let content = state.storage.content_by_section("about").await?;
    let announcements = state.storage.list_announcements().await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::site::about(content.as_ref(), &announcements, &notices).into_string(),
    ))
}

pub async fn highlights_handler(
    State(state): State<SiteState>,
    session: Session,
) -> Result<Html<String>, SiteError> {
    let content = state.storage.content_by_section("features").await?;
    let features = state.storage.list_features().await?;
    let notices = session.take_notices().await;
    Ok(Html(
        views::site::highlights(content.as_ref(), &features, &notices).into_string(),
    ))
}
