//! Wizard API router — mounts all endpoints under /api/v1/wizard.

use crate::handlers::{self, ApiState};
use crate::sessions::WizardSessions;
use adbuilder_core::config::WizardConfig;
use adbuilder_wizard::CampaignCatalog;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the wizard router with all endpoints.
pub fn wizard_router(wizard_config: WizardConfig) -> Router {
    let state = ApiState {
        sessions: Arc::new(WizardSessions::new()),
        catalog: Arc::new(CampaignCatalog::new()),
        wizard_config,
    };
    wizard_router_with_state(state)
}

/// Router over caller-supplied state (tests inject an empty catalog).
pub fn wizard_router_with_state(state: ApiState) -> Router {
    Router::new()
        // Sessions
        .route("/api/v1/wizard/sessions", post(handlers::create_session))
        .route("/api/v1/wizard/sessions/{id}", get(handlers::get_session))
        // Field actions
        .route("/api/v1/wizard/sessions/{id}/photos/toggle", post(handlers::toggle_photo))
        .route("/api/v1/wizard/sessions/{id}/photos/cover", post(handlers::set_cover_photo))
        .route("/api/v1/wizard/sessions/{id}/presenter/toggle", post(handlers::toggle_presenter))
        .route("/api/v1/wizard/sessions/{id}/ad-copy", post(handlers::set_ad_copy))
        .route("/api/v1/wizard/sessions/{id}/call-to-action", post(handlers::set_call_to_action))
        .route("/api/v1/wizard/sessions/{id}/open-houses", post(handlers::set_open_houses))
        .route("/api/v1/wizard/sessions/{id}/script", post(handlers::set_script))
        .route("/api/v1/wizard/sessions/{id}/script-reviewed", post(handlers::set_script_reviewed))
        .route("/api/v1/wizard/sessions/{id}/music", post(handlers::set_music))
        .route("/api/v1/wizard/sessions/{id}/step", post(handlers::set_active_step))
        // Listings
        .route("/api/v1/wizard/sessions/{id}/listings", post(handlers::save_listing))
        .route("/api/v1/wizard/sessions/{id}/listings/{listing_id}", axum::routing::delete(handlers::delete_listing))
        .route("/api/v1/wizard/sessions/{id}/listings/classify", post(handlers::classify_session_listings))
        // Exits
        .route("/api/v1/wizard/sessions/{id}/commit", post(handlers::commit_session))
        .route("/api/v1/wizard/sessions/{id}/discard", post(handlers::discard_session))
        // Catalog
        .route("/api/v1/wizard/campaigns", get(handlers::list_campaigns))
        // Operational
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn test_router() -> Router {
        wizard_router(WizardConfig::default())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_session(app: &Router) -> Uuid {
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/wizard/sessions", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        body["session_id"].as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_session_returns_complete_fresh_draft() {
        let app = test_router();
        let response = app
            .oneshot(post_json("/api/v1/wizard/sessions", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["mode"], "create");
        assert_eq!(body["progress"]["completed_steps"], 4);
        assert_eq!(body["draft"]["cover_photo_index"], 0);
    }

    #[tokio::test]
    async fn test_edit_session_with_unknown_campaign_is_404() {
        let app = test_router();
        let response = app
            .oneshot(post_json(
                "/api/v1/wizard/sessions",
                json!({ "campaign_id": Uuid::new_v4() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "campaign_not_found");
    }

    #[tokio::test]
    async fn test_toggle_photo_round_trip() {
        let app = test_router();
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/wizard/sessions/{}/photos/toggle", session),
                json!({ "index": 3 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["draft"]["selected_photo_indices"], json!([0, 3]));
    }

    #[tokio::test]
    async fn test_clearing_music_drops_progress() {
        let app = test_router();
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/wizard/sessions/{}/music", session),
                json!({ "music_id": null }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["progress"]["completed_steps"], 3);
        assert_eq!(body["progress"]["percentage"], 75.0);
    }

    #[tokio::test]
    async fn test_mutations_drive_the_autosave_indicator() {
        let app = test_router();
        let session = create_session(&app).await;

        // Nothing has been edited yet.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/wizard/sessions/{}", session))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["autosave"]["state"], "idle");
        assert_eq!(body["autosave"]["seconds_since_saved"], Value::Null);

        // Any field action flips the indicator to saving.
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/wizard/sessions/{}/ad-copy", session),
                json!({ "text": "Sunlit corner lot with a wraparound porch" }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["autosave"]["state"], "saving");
    }

    #[tokio::test]
    async fn test_commit_consumes_the_session() {
        let app = test_router();
        let session = create_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/wizard/sessions/{}/commit", session),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["navigation"]["target"], "campaign_welcome");
        assert_eq!(body["notification"]["title"], "Campaign created");

        let gone = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/wizard/sessions/{}", session))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_classify_includes_catalog_feed() {
        let app = test_router();
        let session = create_session(&app).await;

        let response = app
            .oneshot(post_json(
                &format!("/api/v1/wizard/sessions/{}/listings/classify", session),
                json!({ "sold_ids": [], "hidden_ids": [] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let total = body["sold"].as_array().unwrap().len()
            + body["active"].as_array().unwrap().len()
            + body["off_market"].as_array().unwrap().len();
        // Five seeded catalog campaigns, none hidden.
        assert_eq!(total, 5);
    }
}
