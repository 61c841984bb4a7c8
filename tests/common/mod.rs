//! Shared harness for the route tests: a fully seeded application over a
//! throwaway SQLite file and static directory, driven through
//! `tower::ServiceExt::oneshot`.

// Each test binary compiles this module separately and uses its own subset.
#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tempfile::TempDir;
use tower::ServiceExt;

use demitasse::{Config, SiteState, SiteStorage, site_router};

pub const MULTIPART_BOUNDARY: &str = "demitasse-test-boundary";

pub struct TestSite {
    pub app: Router,
    pub storage: SiteStorage,
    pub upload_dir: PathBuf,
    _dir: TempDir,
}

/// Build a seeded site backed by temp storage. Cookies are allowed over
/// plain HTTP so the test client can replay them.
pub async fn test_site() -> TestSite {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("site.db");
    let static_dir = dir.path().join("static");
    tokio::fs::create_dir_all(static_dir.join("uploads"))
        .await
        .expect("create uploads dir");
    tokio::fs::create_dir_all(static_dir.join("images"))
        .await
        .expect("create images dir");
    // Stand-in for the seeded artwork so the static tree has something to
    // serve.
    tokio::fs::write(
        static_dir.join("images").join("hero.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360"></svg>"#,
    )
    .await
    .expect("write placeholder image");

    let cfg = Config {
        database_url: format!("sqlite:{}", db_path.display()),
        static_dir: static_dir.clone(),
        insecure_cookie: true,
        ..Config::default()
    };

    let storage = SiteStorage::connect(&cfg.database_url)
        .await
        .expect("open database");
    storage.init_schema().await.expect("apply schema");
    storage.seed_defaults().await.expect("seed defaults");

    let state = SiteState::new(storage.clone(), &cfg);
    let app = site_router(state);

    TestSite {
        app,
        storage,
        upload_dir: cfg.upload_dir(),
        _dir: dir,
    }
}

pub async fn send(site: &TestSite, request: Request<Body>) -> Response<Body> {
    site.app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed")
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("build request")
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_owned()))
        .expect("build request")
}

pub fn multipart_request(uri: &str, body: Vec<u8>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).expect("build request")
}

/// Encode an upload form: one `image` file part and one `caption` text part.
pub fn multipart_image_body(filename: &str, bytes: &[u8], caption: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(
        format!(
            "\r\n--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
             {caption}\r\n\
             --{MULTIPART_BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    body
}

/// Sign in as the seeded admin and hand back the session cookie to replay
/// on later requests.
pub async fn login(site: &TestSite) -> String {
    let resp = send(
        site,
        form_request("/admin/login", "username=admin&password=admin1234", None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");
    session_cookie(&resp)
}

/// The `session=...` pair from the response's Set-Cookie header.
pub fn session_cookie<B>(resp: &Response<B>) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("response carries a session cookie")
        .to_owned()
}

pub fn location<B>(resp: &Response<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("response carries a Location header")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
