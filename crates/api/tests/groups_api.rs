//! HTTP-level integration tests for the study group endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, signup_and_token};
use sqlx::PgPool;

/// Create a group via the API and return its JSON.
async fn create_group(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/groups",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// The creator's email is automatically the first member.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_creator_is_first_member(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let group = create_group(&pool, &token, "Licenta 2026").await;
    assert_eq!(group["members"], serde_json::json!(["ana@stud.ase.ro"]));
    assert_eq!(group["created_by"], "ana@stud.ase.ro");
}

/// The listing is filtered by the caller's membership.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_filters_by_membership(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let ana = signup_and_token(app, "ana@stud.ase.ro").await;
    let app = common::build_test_app(pool.clone());
    let dan = signup_and_token(app, "dan@stud.ase.ro").await;

    create_group(&pool, &ana, "Ana only").await;
    let shared = create_group(&pool, &ana, "Both").await;

    let app = common::build_test_app(pool.clone());
    let group_id = shared["id"].as_i64().unwrap();
    let response = post_json_auth(
        app,
        &format!("/api/v1/groups/{group_id}/members"),
        serde_json::json!({ "email": "dan@stud.ase.ro" }),
        &ana,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/groups", &dan).await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Both"]);
}

/// Adding a member twice is idempotent.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_member_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let group = create_group(&pool, &token, "Seminar").await;
    let group_id = group["id"].as_i64().unwrap();

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &format!("/api/v1/groups/{group_id}/members"),
            serde_json::json!({ "email": "dan@stud.ase.ro" }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["data"]["members"],
            serde_json::json!(["ana@stud.ase.ro", "dan@stud.ase.ro"])
        );
    }
}

/// Removing a member twice is idempotent; an absent member is a no-op.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_member_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let group = create_group(&pool, &token, "Seminar").await;
    let group_id = group["id"].as_i64().unwrap();

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = delete_auth(
            app,
            &format!("/api/v1/groups/{group_id}/members/dan@stud.ase.ro"),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["members"], serde_json::json!(["ana@stud.ase.ro"]));
    }
}

/// Membership changes on a missing group return 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_membership_on_missing_group(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/groups/9999/members",
        serde_json::json!({ "email": "dan@stud.ase.ro" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A blank group name is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_name_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = signup_and_token(app, "ana@stud.ase.ro").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/groups",
        serde_json::json!({ "name": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
