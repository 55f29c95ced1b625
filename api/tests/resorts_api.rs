mod support;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use resort_api::domain::users::role::Role;
use support::TestApp;

fn suite_payload() -> serde_json::Value {
    json!({
        "name": "Deluxe Suite",
        "description": "Sea-facing suite",
        "base_price_cents": 25_000,
        "size_sqft": 450,
        "bed_configuration": {"king": 1},
        "amenities": ["wifi", "minibar"]
    })
}

#[tokio::test]
async fn customers_cannot_create_resorts() {
    let app = TestApp::new();
    let guest = app.seed_user("Guest", Role::Customer);
    let (status, _) = app
        .post(
            "/api/resorts",
            Some(&guest.token),
            json!({"name": "Nope", "location": "Nowhere", "contact_email": "a@b.co"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn resort_lifecycle_is_owner_scoped() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let rival = app.seed_user("Rival", Role::ResortOwner);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;

    let (status, body) = app.get(&format!("/api/resorts/{resort_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Palm Cove");
    assert_eq!(body["owner_id"], owner.user.id.to_string());

    let (status, body) = app
        .put(
            &format!("/api/resorts/{resort_id}"),
            Some(&rival.token),
            json!({"name": "Hijacked"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized to update this resort");

    let (status, body) = app
        .put(
            &format!("/api/resorts/{resort_id}"),
            Some(&owner.token),
            json!({"description": "Quiet beach", "contact_phone": "555-0100"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["name"], "Palm Cove");
    assert_eq!(body["description"], "Quiet beach");

    let (status, body) = app
        .put(
            &format!("/api/resorts/{resort_id}"),
            Some(&owner.token),
            json!({"contact_phone": null}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["contact_phone"].is_null());
    assert_eq!(body["description"], "Quiet beach");

    let (status, _) = app
        .delete(&format!("/api/resorts/{resort_id}"), Some(&rival.token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .delete(&format!("/api/resorts/{resort_id}"), Some(&owner.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = app.get(&format!("/api/resorts/{resort_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_merged_update_is_rejected() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;
    let (status, _) = app
        .put(
            &format!("/api/resorts/{resort_id}"),
            Some(&owner.token),
            json!({"contact_email": "broken"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_and_unknown_ids_are_not_found() {
    let app = TestApp::new();
    let (status, _) = app.get("/api/resorts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = app
        .get(&format!("/api/resorts/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resort not found");
}

#[tokio::test]
async fn room_types_are_listed_with_their_resort() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let rival = app.seed_user("Rival", Role::ResortAdmin);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;

    let (status, _) = app
        .post(
            &format!("/api/resorts/{resort_id}/room-types"),
            Some(&rival.token),
            suite_payload(),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, rt) = app
        .post(
            &format!("/api/resorts/{resort_id}/room-types"),
            Some(&owner.token),
            suite_payload(),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{rt}");
    assert_eq!(rt["capacity"]["adults"], 2);
    assert_eq!(rt["policies"]["check_in_time"], "14:00");
    assert_eq!(rt["is_active"], true);

    let (status, list) = app.get("/api/resorts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["room_types"][0]["name"], "Deluxe Suite");

    let rt_id = rt["id"].as_str().unwrap();
    let (status, updated) = app
        .put(
            &format!("/api/room-types/{rt_id}"),
            Some(&owner.token),
            json!({"base_price_cents": 30_000}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["base_price_cents"], 30_000);
    assert_eq!(updated["name"], "Deluxe Suite");

    let (status, _) = app
        .put(
            &format!("/api/room-types/{rt_id}"),
            Some(&owner.token),
            json!({"base_price_cents": 50}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .delete(&format!("/api/room-types/{rt_id}"), Some(&rival.token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .delete(&format!("/api/room-types/{rt_id}"), Some(&owner.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/api/room-types/{rt_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_type_without_beds_is_rejected() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;
    let mut payload = suite_payload();
    payload["bed_configuration"] = json!({});
    let (status, body) = app
        .post(
            &format!("/api/resorts/{resort_id}/room-types"),
            Some(&owner.token),
            payload,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "At least one bed must be provided in the configuration"
    );
}

#[tokio::test]
async fn room_numbers_are_unique_per_resort() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let resort_a = app.create_resort(&owner, "Palm Cove").await;
    let resort_b = app.create_resort(&owner, "Hill Top").await;
    app.create_room(&owner, &resort_a, "101").await;
    app.create_room(&owner, &resort_b, "101").await;

    let (status, _) = app
        .post(
            &format!("/api/resorts/{resort_a}/rooms"),
            Some(&owner.token),
            json!({"name": "Dup", "room_number": "101", "price_per_night_cents": 1, "capacity": 2}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, rooms) = app.get(&format!("/api/resorts/{resort_a}/rooms"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["size"], "Standard");
    assert_eq!(rooms[0]["status"], "Available");
}

#[tokio::test]
async fn concurrent_rooms_with_one_number_create_one_room() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let router = app.router.clone();
        let req = Request::builder()
            .method(Method::POST)
            .uri(format!("/api/resorts/{resort_id}/rooms"))
            .header(header::AUTHORIZATION, format!("Bearer {}", owner.token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"name": "Corner", "room_number": "305", "price_per_night_cents": 9_000, "capacity": 2})
                    .to_string(),
            ))
            .unwrap();
        handles.push(tokio::spawn(async move {
            router.oneshot(req).await.unwrap().status()
        }));
    }
    let mut created = 0;
    for h in handles {
        match h.await.unwrap() {
            StatusCode::CREATED => created += 1,
            other => assert_eq!(other, StatusCode::BAD_REQUEST),
        }
    }
    assert_eq!(created, 1);

    let (_, rooms) = app
        .get(&format!("/api/resorts/{resort_id}/rooms"), None)
        .await;
    assert_eq!(rooms.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn room_type_must_belong_to_the_same_resort() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let resort_a = app.create_resort(&owner, "Palm Cove").await;
    let resort_b = app.create_resort(&owner, "Hill Top").await;
    let (_, rt) = app
        .post(
            &format!("/api/resorts/{resort_b}/room-types"),
            Some(&owner.token),
            suite_payload(),
        )
        .await;

    let (status, _) = app
        .post(
            &format!("/api/resorts/{resort_a}/rooms"),
            Some(&owner.token),
            json!({
                "room_type_id": rt["id"],
                "name": "Mismatch",
                "room_number": "1",
                "price_per_night_cents": 100,
                "capacity": 2
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rooms_are_updated_and_deleted_by_owner() {
    let app = TestApp::new();
    let owner = app.seed_user("Owner", Role::ResortOwner);
    let stranger = app.seed_user("Stranger", Role::Customer);
    let resort_id = app.create_resort(&owner, "Palm Cove").await;
    let room_id = app.create_room(&owner, &resort_id, "201").await;

    let (status, _) = app
        .put(
            &format!("/api/rooms/{room_id}"),
            Some(&stranger.token),
            json!({"status": "Maintenance"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, room) = app
        .put(
            &format!("/api/rooms/{room_id}"),
            Some(&owner.token),
            json!({"status": "Maintenance", "capacity": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{room}");
    assert_eq!(room["status"], "Maintenance");
    assert_eq!(room["room_number"], "201");

    let (status, _) = app
        .put(
            &format!("/api/rooms/{room_id}"),
            Some(&owner.token),
            json!({"capacity": 21}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .delete(&format!("/api/rooms/{room_id}"), Some(&owner.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get(&format!("/api/rooms/{room_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Room not found");
}
