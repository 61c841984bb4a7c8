use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};

use crate::router::SiteState;
use crate::session::{SessionToken, mint_token};

/// Name of the encrypted cookie holding the session token.
pub const SESSION_COOKIE: &str = "session";

/// Runs on every request: reuse the token from the private cookie jar or
/// mint a new one, stash it as a request extension, and make sure the
/// cookie rides back on the response. Handlers never touch cookies.
pub async fn attach_session(
    State(state): State<SiteState>,
    jar: PrivateCookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let (jar, token) = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let token = cookie.value().to_owned();
            (jar, token)
        }
        None => {
            let token = mint_token();
            // Browser-session cookie: no Max-Age, so it dies with the browser.
            let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(!state.insecure_cookie)
                .build();
            (jar.add(cookie), token)
        }
    };

    request.extensions_mut().insert(SessionToken(token));
    (jar, next.run(request).await).into_response()
}
