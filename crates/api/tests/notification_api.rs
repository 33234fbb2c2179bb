//! HTTP-level integration tests for notifications and broadcasts.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, login_user, post_json_auth};
use roomdesk_core::roles::Role;
use roomdesk_core::types::DbId;
use roomdesk_db::repositories::NotificationRepo;
use sqlx::PgPool;

/// Insert a notification row directly.
async fn push(pool: &PgPool, user_id: DbId, message: &str) {
    NotificationRepo::create(pool, user_id, message)
        .await
        .expect("notification insert should succeed");
}

/// The inbox lists a user's notifications newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_newest_first(pool: PgPool) {
    let user = create_test_user(&pool, "inbox", Role::Customer).await;
    push(&pool, user.id, "first").await;
    push(&pool, user.id, "second").await;

    let token = login_user(common::build_test_app(pool.clone()), "inbox").await;
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/notifications",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let messages: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["second", "first"]);
}

/// Unread count drops to zero after mark-read; repeating is harmless and
/// other users' rows are untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_read(pool: PgPool) {
    let reader = create_test_user(&pool, "reader", Role::Customer).await;
    let other = create_test_user(&pool, "bystander", Role::Customer).await;
    push(&pool, reader.id, "one").await;
    push(&pool, reader.id, "two").await;
    push(&pool, other.id, "theirs").await;

    let token = login_user(common::build_test_app(pool.clone()), "reader").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 2);

    for _ in 0..2 {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/notifications/mark-read",
            serde_json::json!({}),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);

    let other_token = login_user(common::build_test_app(pool.clone()), "bystander").await;
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/notifications/unread-count",
        &other_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);
}

/// Broadcast fans a message out to every member of the chosen cohort.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_broadcast_cohorts(pool: PgPool) {
    create_test_user(&pool, "bcadmin", Role::Admin).await;
    create_test_user(&pool, "bcstaff1", Role::Staff).await;
    create_test_user(&pool, "bcstaff2", Role::Staff).await;
    create_test_user(&pool, "bccust", Role::Customer).await;

    let admin_token = login_user(common::build_test_app(pool.clone()), "bcadmin").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/broadcast",
        serde_json::json!({ "message": "Shift change at 6", "target": "staff" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["delivered"], 2);

    let staff_token = login_user(common::build_test_app(pool.clone()), "bcstaff1").await;
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications",
        &staff_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["message"], "Shift change at 6");

    // Customers were not part of the staff cohort.
    let cust_token = login_user(common::build_test_app(pool.clone()), "bccust").await;
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &cust_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/broadcast",
        serde_json::json!({ "message": "Holiday rates apply", "target": "users" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["delivered"], 1);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/notifications/unread-count",
        &cust_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);
}

/// Broadcast rejects empty messages and unknown targets, and is
/// admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_broadcast_guards(pool: PgPool) {
    create_test_user(&pool, "bgadmin", Role::Admin).await;
    create_test_user(&pool, "bgstaff", Role::Staff).await;

    let admin_token = login_user(common::build_test_app(pool.clone()), "bgadmin").await;
    let staff_token = login_user(common::build_test_app(pool.clone()), "bgstaff").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/broadcast",
        serde_json::json!({ "message": "", "target": "staff" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/broadcast",
        serde_json::json!({ "message": "hello", "target": "everyone" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/broadcast",
        serde_json::json!({ "message": "hello", "target": "staff" }),
        &staff_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
