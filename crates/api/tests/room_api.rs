//! HTTP-level integration tests for rooms and facilities.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get, get_auth, login_user, post_json_auth,
    put_json_auth,
};
use roomdesk_core::roles::Role;
use sqlx::PgPool;

/// Create an admin fixture and return their bearer token.
async fn admin_token(pool: &PgPool, username: &str) -> String {
    create_test_user(pool, username, Role::Admin).await;
    login_user(common::build_test_app(pool.clone()), username).await
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

/// Admins create facilities; the catalog is publicly listable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_facility_create_and_list(pool: PgPool) {
    let token = admin_token(&pool, "facadmin").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/facilities",
        serde_json::json!({ "name": "Wifi" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/facilities",
        serde_json::json!({ "name": "Parking" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // No auth required to browse.
    let response = get(common::build_test_app(pool), "/api/v1/facilities").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Parking", "Wifi"]);
}

/// Facility creation is admin-only and rejects empty names.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_facility_create_guards(pool: PgPool) {
    let token = admin_token(&pool, "facadmin2").await;
    create_test_user(&pool, "faccust", Role::Customer).await;
    let customer_token = login_user(common::build_test_app(pool.clone()), "faccust").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/facilities",
        serde_json::json!({ "name": "Pool" }),
        &customer_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/facilities",
        serde_json::json!({ "name": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Room creation embeds the attached facilities and ordered gallery.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_create_with_embeds(pool: PgPool) {
    let token = admin_token(&pool, "rmadmin").await;

    let mut facility_ids = Vec::new();
    for name in ["Wifi", "Minibar"] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/facilities",
            serde_json::json!({ "name": name }),
            &token,
        )
        .await;
        let json = body_json(response).await;
        facility_ids.push(json["data"]["id"].as_i64().unwrap());
    }

    let body = serde_json::json!({
        "name": "Deluxe 101",
        "room_number": "101",
        "room_type": "double",
        "category": "ac",
        "price": 150,
        "facility_ids": facility_ids,
        "images": ["a.jpg", "b.jpg", "c.jpg"]
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    // Status defaults to available when omitted.
    assert_eq!(json["data"]["status"], "available");
    assert_eq!(json["data"]["facilities"].as_array().unwrap().len(), 2);

    // The gallery preserves submitted order.
    let room_id = json["data"]["id"].as_i64().unwrap();
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/rooms/{room_id}"),
    )
    .await;
    let json = body_json(response).await;
    let images: Vec<&str> = json["data"]["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["image"].as_str().unwrap())
        .collect();
    assert_eq!(images, vec!["a.jpg", "b.jpg", "c.jpg"]);
}

/// Duplicate room numbers violate the unique constraint.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_duplicate_number(pool: PgPool) {
    let token = admin_token(&pool, "dupadmin").await;

    let body = serde_json::json!({ "name": "First", "room_number": "777" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = serde_json::json!({ "name": "Second", "room_number": "777" });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Unknown enum values for status, type, or category are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_enum_validation(pool: PgPool) {
    let token = admin_token(&pool, "enumadmin").await;

    for (field, value) in [
        ("status", "occupied"),
        ("room_type", "penthouse"),
        ("category", "fan"),
    ] {
        let mut body = serde_json::json!({ "name": "Bad", "room_number": "808" });
        body[field] = serde_json::json!(value);
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/rooms",
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {field}");
    }
}

/// Partial updates change only the supplied fields; facilities can be
/// replaced in the same call.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_partial_update(pool: PgPool) {
    let token = admin_token(&pool, "updadmin").await;

    let body = serde_json::json!({
        "name": "Standard",
        "room_number": "202",
        "price": 80
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    let json = body_json(response).await;
    let room_id = json["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/rooms/{room_id}"),
        serde_json::json!({ "status": "maintenance" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "maintenance");
    // Untouched fields survive.
    assert_eq!(json["data"]["name"], "Standard");
    assert_eq!(json["data"]["price"], 80);

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/rooms/424242",
        serde_json::json!({ "status": "available" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deletion is admin-only and idempotence is a 404 on the second call.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_delete(pool: PgPool) {
    let token = admin_token(&pool, "deladmin").await;

    let body = serde_json::json!({ "name": "Doomed", "room_number": "303" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    let json = body_json(response).await;
    let room_id = json["data"]["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/rooms/{room_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/rooms/{room_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The available listing requires auth and filters by status.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rooms_available(pool: PgPool) {
    let token = admin_token(&pool, "avladmin").await;

    for (number, status) in [("601", "available"), ("602", "maintenance")] {
        let body = serde_json::json!({
            "name": format!("Room {number}"),
            "room_number": number,
            "status": status
        });
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/rooms",
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(common::build_test_app(pool.clone()), "/api/v1/rooms/available").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/rooms/available",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rooms = json["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["room_number"], "601");
}

/// Booked dates show approved stays only and 404 for unknown rooms.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_booked_dates(pool: PgPool) {
    let token = admin_token(&pool, "bdadmin").await;
    create_test_user(&pool, "bdguest", Role::Customer).await;
    let guest_token = login_user(common::build_test_app(pool.clone()), "bdguest").await;

    let body = serde_json::json!({ "name": "Calendar", "room_number": "404", "price": 50 });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    let json = body_json(response).await;
    let room_id = json["data"]["id"].as_i64().unwrap();

    // One approved stay, one left pending.
    for (check_in, check_out) in [("2024-06-01", "2024-06-03"), ("2024-06-10", "2024-06-12")] {
        let body = serde_json::json!({
            "room_id": room_id,
            "check_in": check_in,
            "check_out": check_out
        });
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/bookings",
            body,
            &guest_token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let first_id: i64 =
        sqlx::query_scalar("SELECT id FROM bookings WHERE check_in = '2024-06-01' LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/bookings/{first_id}/action"),
        serde_json::json!({ "action": "approve" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/rooms/{room_id}/booked-dates"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ranges = json["data"].as_array().unwrap();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0]["check_in"], "2024-06-01");
    assert_eq!(ranges[0]["check_out"], "2024-06-03");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/rooms/424242/booked-dates",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Room creation is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_create_requires_admin(pool: PgPool) {
    create_test_user(&pool, "rmcust", Role::Customer).await;
    let token = login_user(common::build_test_app(pool.clone()), "rmcust").await;

    let body = serde_json::json!({ "name": "Nope", "room_number": "505" });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/rooms",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
