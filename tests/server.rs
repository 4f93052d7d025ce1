//! Router-level tests for the web service.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pagesnap::fetch::PageFetcher;
use pagesnap::server::{router, AppState};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app() -> axum::Router {
    router(AppState {
        fetcher: PageFetcher::new().unwrap(),
    })
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_renders_form_without_snapshot() {
    let resp = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("<form action=\"/fetch\""));
    assert!(!body.contains("Snapshot of"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("ok"));
}

#[tokio::test]
async fn fetch_renders_extracted_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<p>Hello</p><p>World</p>"),
        )
        .mount(&server)
        .await;

    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("url={}/page", server.uri())))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Hello World"));
    assert!(body.contains("Snapshot of"));
}

#[tokio::test]
async fn fetch_without_url_field_is_rejected() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("not_url=x"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Missing required field: rejected before the handler runs,
    // no snapshot rendered.
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn failed_fetch_renders_error_banner() {
    // Nothing listens on port 1.
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url=http://127.0.0.1:1/"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("Could not fetch"));
    assert!(!body.contains("Snapshot of"));
}

#[tokio::test]
async fn snapshot_text_is_escaped_in_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sneaky"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"),
        )
        .mount(&server)
        .await;

    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("url={}/sneaky", server.uri())))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(resp).await;
    // The paragraph text decodes to a script tag; it must be re-escaped
    // when rendered.
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
