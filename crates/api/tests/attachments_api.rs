//! HTTP-level integration tests for the attachment upload endpoint.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use common::{body_json, signup_and_token};
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "studynotes-test-boundary";

/// Send an authenticated multipart POST built from raw body text.
async fn post_multipart_auth(app: Router, uri: &str, body: String, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Multipart body with a single named file part.
fn file_part(filename: &str, contents: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    )
}

/// A file upload returns 201 with the public URL and the stored key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_returns_key_and_url(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let app = common::build_test_app(pool);
    let response = post_multipart_auth(
        app,
        "/api/v1/attachments",
        file_part("report.pdf", "pdf bytes"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["filename"], "report.pdf");

    // Key shape: default folder, millisecond prefix, original filename.
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("attachments/"));
    assert!(path.ends_with("_report.pdf"));

    let url = json["data"]["url"].as_str().unwrap();
    assert!(url.ends_with(path));
}

/// An explicit folder field overrides the default.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_honors_folder_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"folder\"\r\n\r\n\
         avatars\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"me.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         png bytes\r\n\
         --{BOUNDARY}--\r\n"
    );

    let app = common::build_test_app(pool);
    let response = post_multipart_auth(app, "/api/v1/attachments", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("avatars/"));
    assert!(path.ends_with("_me.png"));
}

/// A form without a file part is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_without_file_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"folder\"\r\n\r\n\
         avatars\r\n\
         --{BOUNDARY}--\r\n"
    );

    let app = common::build_test_app(pool);
    let response = post_multipart_auth(app, "/api/v1/attachments", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

/// A traversal-shaped filename stays confined to a safe key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_sanitizes_filename(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let app = common::build_test_app(pool);
    let response = post_multipart_auth(
        app,
        "/api/v1/attachments",
        file_part("../../escape.txt", "nope"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("attachments/"));
    assert!(path.ends_with("_escape.txt"));
    assert!(!path.contains(".."));
}

/// Uploads require authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/attachments")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(file_part("report.pdf", "pdf bytes")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
