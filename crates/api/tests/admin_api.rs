//! HTTP-level tests for owner-only endpoints and engagement notifications.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, delete_auth, get, get_auth, post_auth, post_json,
    post_json_auth, put_auth, put_json_auth, seeded_app, test_config, visitor_token,
};
use serde_json::json;
use folio_api::notifications::NotificationRouter;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::test]
async fn dashboard_requires_admin() {
    let response = get(seeded_app(), "/api/v1/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(seeded_app(), "/api/v1/admin/dashboard", &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[tokio::test]
async fn dashboard_summarises_content() {
    let response = get_auth(seeded_app(), "/api/v1/admin/dashboard", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total_projects"], 4);
    assert_eq!(json["data"]["published_projects"], 4);
    assert_eq!(json["data"]["recent_projects"][0]["id"], 4);
    assert!(json["data"]["recent_comments"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["unread_notifications"], 0);
}

#[tokio::test]
async fn notifications_are_admin_only() {
    let response = get_auth(seeded_app(), "/api/v1/notifications", &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_auth(seeded_app(), "/api/v1/notifications/1/read", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_writes_require_admin() {
    let body = json!({ "title": "Sneaky", "description": "Not mine" });

    let response = post_json(seeded_app(), "/api/v1/projects", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response =
        post_json_auth(seeded_app(), "/api/v1/projects", body.clone(), &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(seeded_app(), "/api/v1/projects/1", body, &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(seeded_app(), "/api/v1/projects/1", &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        seeded_app(),
        "/api/v1/categories",
        json!({ "name": "Games" }),
        &visitor_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn created_project_shows_on_dashboard_and_after_publishing() {
    let app = build_test_app(folio_db::seeded_pool());

    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects",
        json!({
            "title": "Folio",
            "description": "This portfolio",
            "technologies": ["Rust", "axum"],
            "category_id": 1
        }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["id"], 5);
    assert_eq!(created["data"]["is_published"], false);
    assert_eq!(created["data"]["category"]["name"], "Web Development");

    let dashboard =
        body_json(get_auth(app.clone(), "/api/v1/admin/dashboard", &admin_token()).await).await;
    assert_eq!(dashboard["data"]["total_projects"], 5);
    assert_eq!(dashboard["data"]["published_projects"], 4);
    assert_eq!(dashboard["data"]["recent_projects"][0]["id"], 5);

    let response = get(app.clone(), "/api/v1/projects/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/projects/5",
        json!({ "is_published": true, "is_featured": true }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["title"], "Folio");
    assert_eq!(updated["data"]["is_featured"], true);

    let listed = body_json(get(app.clone(), "/api/v1/projects?featured=true").await).await;
    assert_eq!(listed["data"]["items"][0]["id"], 5);
}

#[tokio::test]
async fn invalid_project_input_is_rejected() {
    let response = post_json_auth(
        seeded_app(),
        "/api/v1/projects",
        json!({ "title": "   ", "description": "x" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        seeded_app(),
        "/api/v1/projects",
        json!({ "title": "Orphan", "description": "x", "category_id": 99 }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        seeded_app(),
        "/api/v1/projects/42",
        json!({ "title": "Ghost" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_project_is_gone() {
    let app = seeded_app();

    let response = delete_auth(app.clone(), "/api/v1/projects/1", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), "/api/v1/projects/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let stats = body_json(get(app.clone(), "/api/v1/stats").await).await;
    assert_eq!(stats["data"]["total_projects"], 3);

    let response = delete_auth(app, "/api/v1/projects/1", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_and_achievements_can_be_created() {
    let app = seeded_app();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "Embedded", "color": "#123abc" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["id"], 5);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "embedded" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "Teal", "color": "teal" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let categories = body_json(get(app.clone(), "/api/v1/categories").await).await;
    assert_eq!(categories["data"].as_array().unwrap().len(), 5);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/achievements",
        json!({
            "title": "Firmware Award",
            "description": "Best bootloader",
            "date_achieved": "2024-10-01",
            "is_published": true,
            "category_id": 5
        }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = body_json(get(app, "/api/v1/achievements").await).await;
    assert_eq!(listed["data"]["items"][0]["title"], "Firmware Award");
    assert_eq!(listed["data"]["items"][0]["category"]["name"], "Embedded");
}

#[tokio::test]
async fn visitor_like_reaches_owner_notifications() {
    let config = test_config();
    let pool = folio_db::seeded_pool();
    let event_bus = Arc::new(folio_events::EventBus::default());
    let router_handle =
        tokio::spawn(NotificationRouter::new(pool.clone()).run(event_bus.subscribe()));

    let app = build_app_router(
        AppState {
            pool,
            config: Arc::new(config.clone()),
            event_bus: Arc::clone(&event_bus),
        },
        &config,
    );

    let response = post_auth(app.clone(), "/api/v1/projects/2/like", &visitor_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The router stores notifications asynchronously.
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let json = body_json(
                get_auth(app.clone(), "/api/v1/notifications", &admin_token()).await,
            )
            .await;
            if !json["data"].as_array().unwrap().is_empty() {
                assert_eq!(json["data"][0]["kind"], "like");
                assert_eq!(
                    json["data"][0]["message"],
                    "Ada liked the project \"Task Management App\""
                );
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("notification should be stored");

    let id = {
        let json = body_json(
            get_auth(app.clone(), "/api/v1/notifications", &admin_token()).await,
        )
        .await;
        json["data"][0]["id"].as_i64().unwrap()
    };
    let response = put_auth(
        app.clone(),
        &format!("/api/v1/notifications/{id}/read"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let read = body_json(response).await;
    assert_eq!(read["data"]["id"], id);
    assert_eq!(read["data"]["is_read"], true);

    let unread = body_json(
        get_auth(app.clone(), "/api/v1/notifications?unread_only=true", &admin_token()).await,
    )
    .await;
    assert!(unread["data"].as_array().unwrap().is_empty());

    drop(app);
    drop(event_bus);
    tokio::time::timeout(Duration::from_secs(5), router_handle)
        .await
        .expect("router should stop once the bus is gone")
        .unwrap();
}
