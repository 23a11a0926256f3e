//! Axum REST handlers for the wizard API.

use crate::models::*;
use crate::sessions::{WizardSession, WizardSessions};
use adbuilder_core::classify::classify_listings;
use adbuilder_core::config::WizardConfig;
use adbuilder_core::types::{CampaignRecord, Listing};
use adbuilder_wizard::{CampaignCatalog, WizardController, WizardMode};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Shared wizard API state.
#[derive(Clone)]
pub struct ApiState {
    pub sessions: Arc<WizardSessions>,
    pub catalog: Arc<CampaignCatalog>,
    pub wizard_config: WizardConfig,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn session_not_found(id: Uuid) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: format!("No wizard session with id {}", id),
        }),
    )
}

fn session_view(session_id: Uuid, session: &WizardSession) -> SessionView {
    let (mode, campaign_id) = match session.controller.mode() {
        WizardMode::Create => (SessionMode::Create, None),
        WizardMode::Edit(id) => (SessionMode::Edit, Some(id)),
    };
    SessionView {
        session_id,
        mode,
        campaign_id,
        draft: session.controller.draft().clone(),
        progress: session.controller.progress(),
        autosave: AutosaveStatus {
            state: session.autosave.state(),
            seconds_since_saved: session.autosave.seconds_since_saved(),
        },
    }
}

// ─── Sessions ──────────────────────────────────────────────────────────────

pub async fn create_session(
    State(state): State<ApiState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let mut controller = WizardController::new_create(
        state.catalog.clone(),
        &state.wizard_config.default_music_track,
    );

    if let Some(campaign_id) = req.campaign_id {
        if controller.load_for_edit(campaign_id).await.is_err() {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "campaign_not_found".to_string(),
                    message: format!("No campaign with id {}", campaign_id),
                }),
            ));
        }
    }

    let settle = Duration::from_millis(state.wizard_config.autosave_settle_ms);
    let session_id = state.sessions.insert(controller, settle);
    metrics::counter!("wizard.sessions.created").increment(1);
    info!(session_id = %session_id, edit = req.campaign_id.is_some(), "Wizard session created");

    let view = state
        .sessions
        .with_session(session_id, |s| session_view(session_id, s))
        .ok_or_else(|| session_not_found(session_id))?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .sessions
        .with_session(id, |s| session_view(id, s))
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

// ─── Field actions ─────────────────────────────────────────────────────────

/// Run a draft mutation, feed the autosave indicator, and return the
/// refreshed snapshot.
fn apply(
    state: &ApiState,
    id: Uuid,
    action: impl FnOnce(&mut WizardController),
) -> Result<Json<SessionView>, ApiError> {
    state
        .sessions
        .with_session(id, |s| {
            action(&mut s.controller);
            s.autosave.touch();
            session_view(id, s)
        })
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

pub async fn toggle_photo(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PhotoIndexRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.toggle_photo(req.index))
}

pub async fn set_cover_photo(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PhotoIndexRequest>,
) -> Result<Json<SessionView>, ApiError> {
    // Setting the cover to an unselected photo is a silent no-op.
    apply(&state, id, |c| {
        c.set_cover_photo(req.index);
    })
}

pub async fn toggle_presenter(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PresenterIndexRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.toggle_presenter(req.index))
}

pub async fn set_ad_copy(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdCopyRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_ad_copy(req.text))
}

pub async fn set_call_to_action(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CallToActionRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_call_to_action(req.value))
}

pub async fn set_open_houses(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<OpenHousesRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_open_houses(req.events))
}

pub async fn set_script(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ScriptRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_script(req.text))
}

pub async fn set_script_reviewed(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ScriptReviewedRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_script_reviewed(req.reviewed))
}

pub async fn set_music(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MusicRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_music(req.music_id))
}

pub async fn set_active_step(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActiveStepRequest>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.set_active_step(req.step))
}

// ─── Listings ──────────────────────────────────────────────────────────────

pub async fn save_listing(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(listing): Json<Listing>,
) -> Result<Json<SaveListingResponse>, ApiError> {
    state
        .sessions
        .with_session(id, |s| {
            let notification = s.controller.save_listing(listing);
            s.autosave.touch();
            SaveListingResponse {
                notification,
                session: session_view(id, s),
            }
        })
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

pub async fn delete_listing(
    State(state): State<ApiState>,
    Path((id, listing_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionView>, ApiError> {
    apply(&state, id, |c| c.delete_listing(listing_id))
}

pub async fn classify_session_listings(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let sold_ids: HashSet<Uuid> = req.sold_ids.into_iter().collect();
    let hidden_ids: HashSet<Uuid> = req.hidden_ids.into_iter().collect();

    state
        .sessions
        .with_session(id, |s| {
            // Session-created listings plus the normalized catalog feed.
            let mut combined: Vec<Listing> = s.controller.draft().listings.clone();
            combined.extend(state.catalog.list().iter().map(CampaignRecord::to_listing));

            let buckets = classify_listings(&combined, &sold_ids, &hidden_ids);
            ClassifyResponse {
                sold: buckets.sold,
                active: buckets.active,
                off_market: buckets.off_market,
            }
        })
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

// ─── Exits ─────────────────────────────────────────────────────────────────

pub async fn commit_session(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommitResponse>, ApiError> {
    let session = state.sessions.remove(id).ok_or_else(|| session_not_found(id))?;
    let (navigation, notification) = session.controller.commit();
    metrics::counter!("wizard.sessions.committed").increment(1);
    Ok(Json(CommitResponse {
        navigation,
        notification,
    }))
}

pub async fn discard_session(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiscardResponse>, ApiError> {
    let session = state.sessions.remove(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(DiscardResponse {
        navigation: session.controller.discard(),
    }))
}

// ─── Catalog / ops ─────────────────────────────────────────────────────────

pub async fn list_campaigns(State(state): State<ApiState>) -> Json<Vec<CampaignRecord>> {
    Json(state.catalog.list())
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
