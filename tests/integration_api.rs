//! API Integration Tests

use axum::http::StatusCode;
use serde_json::json;
use showtime_ledger::api::routes::{BookSeatsResponse, CancelBookingResponse};
use showtime_ledger::{SeatCategory, ShowId};
use tower::util::ServiceExt;

mod common;

#[tokio::test]
async fn test_health() {
    let (app, _) = common::seeded_app();

    let response = app.oneshot(common::get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_and_get_shows() {
    let (app, _) = common::seeded_app();

    let response = app.clone().oneshot(common::get("/api/v1/shows")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::json_body(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["s001", "s002", "s003", "s004"]);

    let response = app.clone().oneshot(common::get("/api/v1/shows/s002")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::json_body(response).await;
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["available_seats"]["regular"], 80);
    assert_eq!(json["available_seats"]["premium"], 40);

    let response = app.oneshot(common::get("/api/v1/shows/s999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::json_body(response).await;
    assert_eq!(json["error_code"], "show_not_found");
}

#[tokio::test]
async fn test_booking_scenario_e2e() {
    let (app, ledger) = common::seeded_app();

    // 1. Book 5 regular seats for s001
    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/v1/bookings",
            &json!({"show_id": "s001", "category": "regular", "seats": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "Booking failed");
    let booked: BookSeatsResponse =
        serde_json::from_value(common::json_body(response).await).unwrap();
    assert_eq!(booked.available_seats.get(SeatCategory::Regular), 95);
    assert_eq!(booked.booking.seats().value(), 5);
    assert_eq!(booked.message, "Booked 5 regular ticket(s) for The Martian.");

    // 2. Premium request larger than the pool is rejected
    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/v1/bookings",
            &json!({"show_id": "s001", "category": "premium", "seats": 60}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = common::json_body(response).await;
    assert_eq!(json["error_code"], "insufficient_seats");
    assert_eq!(json["details"], "Not enough premium seats available.");
    let show = ledger.get_show(&ShowId::new("s001")).unwrap();
    assert_eq!(show.available(SeatCategory::Premium), 50);
    assert_eq!(show.available(SeatCategory::Regular), 95);

    // 3. Exactly one booking recorded
    let response = app.clone().oneshot(common::get("/api/v1/bookings")).await.unwrap();
    let json = common::json_body(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["seats"], 5);
    assert_eq!(json[0]["category"], "regular");

    // 4. Cancel restores the pool and empties the list
    let uri = format!("/api/v1/bookings/{}", booked.booking.id());
    let response = app.clone().oneshot(common::delete(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let canceled: CancelBookingResponse =
        serde_json::from_value(common::json_body(response).await).unwrap();
    assert_eq!(canceled.show.available(SeatCategory::Regular), 100);
    assert_eq!(
        canceled.message,
        format!("Canceled booking ID: {}.", booked.booking.id())
    );
    assert!(ledger.list_bookings().is_empty());

    // 5. Second cancel of the same id is a 404
    let response = app.oneshot(common::delete(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::json_body(response).await;
    assert_eq!(json["error_code"], "booking_not_found");
}

#[tokio::test]
async fn test_invalid_booking_input() {
    let (app, ledger) = common::seeded_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/v1/bookings",
            &json!({"show_id": "s001", "category": "regular", "seats": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::json_body(response).await;
    assert_eq!(json["error_code"], "invalid_seat_count");

    let response = app
        .oneshot(common::post_json(
            "/api/v1/bookings",
            &json!({"show_id": "s001", "category": "balcony", "seats": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::json_body(response).await;
    assert_eq!(json["error_code"], "unknown_category");

    assert!(ledger.list_bookings().is_empty());
}

#[tokio::test]
async fn test_booking_history_prices() {
    let (app, _) = common::seeded_app();

    for body in [
        json!({"show_id": "s003", "category": "premium", "seats": 2}),
        json!({"show_id": "s004", "category": "regular", "seats": 4}),
    ] {
        let response = app
            .clone()
            .oneshot(common::post_json("/api/v1/bookings", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(common::get("/api/v1/bookings/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::json_body(response).await;

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "Hello Brother");
    assert_eq!(entries[0]["total_price"], "50");
    assert_eq!(entries[1]["title"], "Avatar");
    assert_eq!(entries[1]["total_price"], "60");
    assert_eq!(json["total_price"], "110");
}

#[tokio::test]
async fn test_correlation_id_is_echoed() {
    let (app, _) = common::seeded_app();
    let correlation_id = uuid::Uuid::new_v4().to_string();

    let request = axum::http::Request::builder()
        .uri("/api/v1/shows")
        .header("x-correlation-id", &correlation_id)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("x-correlation-id").unwrap(),
        correlation_id.as_str()
    );
}
