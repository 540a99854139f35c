//! HTTP-level integration tests for the event booking endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::{attendee_token, body_json, get, get_anonymous, organizer_token};
use confera_core::types::{DbId, Timestamp};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

async fn seed_event(pool: &PgPool, start_dt: Timestamp, end_dt: Timestamp) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO events (title, start_dt, end_dt, timezone)
         VALUES ('Test Event', $1, $2, 'UTC') RETURNING id",
    )
    .bind(start_dt)
    .bind(end_dt)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

async fn seed_contribution(
    pool: &PgPool,
    event_id: DbId,
    friendly_id: i32,
    title: &str,
    start_dt: Timestamp,
    end_dt: Timestamp,
) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO contributions (event_id, friendly_id, title)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(event_id)
    .bind(friendly_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO timetable_entries (event_id, contribution_id, start_dt, end_dt)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(event_id)
    .bind(row.0)
    .bind(start_dt)
    .bind(end_dt)
    .execute(pool)
    .await
    .unwrap();

    row.0
}

async fn seed_session_block(
    pool: &PgPool,
    event_id: DbId,
    session_friendly_id: i32,
    session_title: &str,
    block_title: &str,
    start_dt: Timestamp,
    end_dt: Timestamp,
) -> DbId {
    let session: (DbId,) = sqlx::query_as(
        "INSERT INTO sessions (event_id, friendly_id, title)
         VALUES ($1, $2, $3)
         ON CONFLICT (event_id, friendly_id) DO UPDATE SET title = EXCLUDED.title
         RETURNING id",
    )
    .bind(event_id)
    .bind(session_friendly_id)
    .bind(session_title)
    .fetch_one(pool)
    .await
    .unwrap();

    let block: (DbId,) =
        sqlx::query_as("INSERT INTO session_blocks (session_id, title) VALUES ($1, $2) RETURNING id")
            .bind(session.0)
            .bind(block_title)
            .fetch_one(pool)
            .await
            .unwrap();

    sqlx::query(
        "INSERT INTO timetable_entries (event_id, session_block_id, start_dt, end_dt)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(event_id)
    .bind(block.0)
    .bind(start_dt)
    .bind(end_dt)
    .execute(pool)
    .await
    .unwrap();

    block.0
}

async fn seed_linked_reservation(
    pool: &PgPool,
    event_id: DbId,
    state: &str,
    start_dt: Timestamp,
    end_dt: Timestamp,
) -> DbId {
    let room: (DbId,) = sqlx::query_as(
        "INSERT INTO rooms (name, full_name) VALUES ('Main Hall', 'B28/1-012 - Main Hall')
         ON CONFLICT (full_name) DO UPDATE SET name = EXCLUDED.name
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let link: (DbId,) = sqlx::query_as(
        "INSERT INTO reservation_links (event_id, link_type) VALUES ($1, 'event') RETURNING id",
    )
    .bind(event_id)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO reservations (room_id, link_id, start_dt, end_dt, state, booked_for_name, reason)
         VALUES ($1, $2, $3, $4, $5, 'Ada Lovelace', 'Setup')",
    )
    .bind(room.0)
    .bind(link.0)
    .bind(start_dt)
    .bind(end_dt)
    .bind(state)
    .execute(pool)
    .await
    .unwrap();

    link.0
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_anonymous(app, "/api/v1/events/1/bookings").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_requires_event_management_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/events/1/bookings", &attendee_token()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_unknown_event_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/events/999999/bookings", &organizer_token()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn disabling_room_booking_blocks_overview_but_not_pickers(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 20, 18, 0)).await;

    let mut config = common::test_config();
    config.room_booking_enabled = false;

    let app = common::build_test_app_with(pool.clone(), config.clone());
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The picker endpoints only require event management.
    let app = common::build_test_app_with(pool, config);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings/linkable/contributions"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Booking overview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_payload_for_single_day_event(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 20, 18, 0)).await;

    let future_contrib = seed_contribution(
        &pool,
        event_id,
        1,
        "Keynote",
        ts(2030, 5, 20, 9, 0),
        ts(2030, 5, 20, 10, 0),
    )
    .await;
    // Slot already over: excluded from flags, maps, and pickers.
    seed_contribution(
        &pool,
        event_id,
        2,
        "Old talk",
        ts(2020, 5, 20, 9, 0),
        ts(2020, 5, 20, 10, 0),
    )
    .await;

    seed_linked_reservation(
        &pool,
        event_id,
        "accepted",
        ts(2030, 5, 20, 7, 0),
        ts(2030, 5, 20, 19, 0),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["has_contributions"], true);
    assert_eq!(data["has_session_blocks"], false);
    assert_eq!(data["is_past_event"], false);

    // Timing map keyed by contribution id; past items never appear.
    let contribs_data = data["contributions_data"].as_object().unwrap();
    assert_eq!(contribs_data.len(), 1);
    assert!(contribs_data.contains_key(&future_contrib.to_string()));
    assert_eq!(
        contribs_data[&future_contrib.to_string()]["start_dt"],
        "2030-05-20T09:00:00Z"
    );

    let defaults = &data["booking_defaults"];
    assert_eq!(defaults["link_type"], "event");
    assert_eq!(defaults["link_id"], event_id);
    assert_eq!(defaults["recurrence"], "single");
    assert_eq!(defaults["start_date"], "2030-05-20");
    assert_eq!(defaults["end_date"], serde_json::Value::Null);
    assert_eq!(defaults["start_time"], "08:00");
    assert_eq!(defaults["end_time"], "18:00");

    let links = data["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["link_type"], "event");
    assert_eq!(links[0]["reservation"]["state"], "accepted");
    assert_eq!(links[0]["reservation"]["booked_for_name"], "Ada Lovelace");
    assert_eq!(links[0]["reservation"]["room"]["name"], "Main Hall");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_multi_day_event_gets_daily_recurrence(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 22, 18, 0)).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let defaults = &json["data"]["booking_defaults"];
    assert_eq!(defaults["recurrence"], "daily");
    assert_eq!(defaults["end_date"], "2030-05-22");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_excludes_cancelled_reservations(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 20, 18, 0)).await;

    seed_linked_reservation(
        &pool,
        event_id,
        "cancelled",
        ts(2030, 5, 20, 7, 0),
        ts(2030, 5, 20, 19, 0),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings"),
        &organizer_token(),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["links"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_flags_past_event(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2020, 5, 20, 8, 0), ts(2020, 5, 20, 18, 0)).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings"),
        &organizer_token(),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_past_event"], true);
}

// ---------------------------------------------------------------------------
// Linkable contributions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn linkable_contributions_future_only_and_ordered(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 20, 18, 0)).await;

    seed_contribution(
        &pool,
        event_id,
        3,
        "Closing",
        ts(2030, 5, 20, 16, 0),
        ts(2030, 5, 20, 17, 0),
    )
    .await;
    seed_contribution(
        &pool,
        event_id,
        1,
        "Keynote",
        ts(2030, 5, 20, 9, 0),
        ts(2030, 5, 20, 10, 0),
    )
    .await;
    seed_contribution(
        &pool,
        event_id,
        2,
        "Old talk",
        ts(2020, 5, 20, 9, 0),
        ts(2020, 5, 20, 10, 0),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings/linkable/contributions"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["friendly_id"], 1);
    assert_eq!(entries[0]["title"], "Keynote");
    assert_eq!(entries[0]["full_title"], "#1: Keynote");
    assert_eq!(entries[1]["friendly_id"], 3);
    assert_eq!(entries[1]["full_title"], "#3: Closing");
}

// ---------------------------------------------------------------------------
// Linkable session blocks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn linkable_session_blocks_carry_composed_labels(pool: PgPool) {
    let event_id = seed_event(&pool, ts(2030, 5, 20, 8, 0), ts(2030, 5, 20, 18, 0)).await;

    seed_session_block(
        &pool,
        event_id,
        2,
        "Plenary",
        "Morning",
        ts(2030, 5, 20, 9, 30),
        ts(2030, 5, 20, 11, 0),
    )
    .await;
    // Untitled block: the label falls back to the session title alone.
    seed_session_block(
        &pool,
        event_id,
        1,
        "Workshops",
        "",
        ts(2030, 5, 20, 14, 0),
        ts(2030, 5, 20, 16, 0),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/events/{event_id}/bookings/linkable/session-blocks"),
        &organizer_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    // Ordered by session friendly id.
    assert_eq!(entries[0]["friendly_id"], 1);
    assert_eq!(entries[0]["title"], "Workshops");
    assert_eq!(entries[0]["full_title"], "#1: Workshops (20 May 2030 14:00)");
    assert_eq!(entries[1]["friendly_id"], 2);
    assert_eq!(entries[1]["title"], "Plenary: Morning");
    assert_eq!(
        entries[1]["full_title"],
        "#2: Plenary: Morning (20 May 2030 09:30)"
    );
}
