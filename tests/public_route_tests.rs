mod common;

use axum::http::{StatusCode, header};
use common::{body_string, get_request, send, test_site};

#[tokio::test]
async fn public_pages_render_seeded_content() {
    let site = test_site().await;
    let cases = [
        ("/", "Sample Cafe Experience"),
        ("/access", "Access &amp; Hours"),
        ("/reservations", "Book Now"),
        ("/gallery", "Signature espresso moment"),
        ("/about", "Story &amp; Philosophy"),
        ("/highlights", "Seasonal Pairings"),
    ];

    for (uri, marker) in cases {
        let resp = send(&site, get_request(uri, None)).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        let body = body_string(resp).await;
        assert!(body.contains(marker), "GET {uri} missing {marker:?}");
    }
}

#[tokio::test]
async fn home_composes_every_block() {
    let site = test_site().await;
    let body = body_string(send(&site, get_request("/", None)).await).await;

    assert!(body.contains("Sip. Savor. Share."));
    assert!(body.contains("Seasonal Pairings"));
    assert!(body.contains("Now Brewing: Demo Origin"));
    assert!(body.contains("/static/images/gallery1.svg"));
    assert!(body.contains(r#"href="/gallery""#));
}

#[tokio::test]
async fn home_previews_at_most_four_gallery_images() {
    let site = test_site().await;
    site.storage
        .add_gallery_image("/static/uploads/extra1.png", None)
        .await
        .expect("insert extra image");
    site.storage
        .add_gallery_image("/static/uploads/extra2.png", None)
        .await
        .expect("insert extra image");

    let body = body_string(send(&site, get_request("/", None)).await).await;

    // The extras sort first (display_order 0), pushing the last seeded
    // image out of the four-image preview.
    assert!(body.contains("extra1.png"));
    assert!(body.contains("extra2.png"));
    assert!(!body.contains("gallery3.svg"));
}

#[tokio::test]
async fn static_tree_is_served() {
    let site = test_site().await;
    let resp = send(&site, get_request("/static/images/hero.svg", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let site = test_site().await;
    let resp = send(&site, get_request("/espresso-machine", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn first_visit_sets_a_session_cookie() {
    let site = test_site().await;
    let resp = send(&site, get_request("/", None)).await;

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("first visit sets a cookie");

    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    // The harness runs with insecure_cookie enabled.
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn returning_visitor_keeps_their_cookie() {
    let site = test_site().await;
    let first = send(&site, get_request("/", None)).await;
    let cookie = common::session_cookie(&first);

    let second = send(&site, get_request("/", Some(&cookie))).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert!(second.headers().get(header::SET_COOKIE).is_none());
}
