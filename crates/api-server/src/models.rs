//! Request/response models for the wizard REST API.

use adbuilder_core::types::{Listing, OpenHouseEvent};
use adbuilder_wizard::{
    AutosaveState, CampaignDraft, Navigation, Notification, Progress, WizardStep,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Create a wizard session; supplying `campaign_id` requests edit mode.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub campaign_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Create,
    Edit,
}

/// The "Saving… / Saved Xs ago" display state.
#[derive(Debug, Serialize)]
pub struct AutosaveStatus {
    pub state: AutosaveState,
    pub seconds_since_saved: Option<u64>,
}

/// Snapshot of a session returned by every state-changing endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub mode: SessionMode,
    pub campaign_id: Option<Uuid>,
    pub draft: CampaignDraft,
    pub progress: Progress,
    pub autosave: AutosaveStatus,
}

#[derive(Debug, Deserialize)]
pub struct PhotoIndexRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct PresenterIndexRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdCopyRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CallToActionRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenHousesRequest {
    pub events: Vec<OpenHouseEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ScriptReviewedRequest {
    pub reviewed: bool,
}

#[derive(Debug, Deserialize)]
pub struct MusicRequest {
    pub music_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActiveStepRequest {
    pub step: WizardStep,
}

#[derive(Debug, Serialize)]
pub struct SaveListingResponse {
    pub notification: Notification,
    pub session: SessionView,
}

/// Overlay sets for the listing-manager classification view.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub sold_ids: Vec<Uuid>,
    #[serde(default)]
    pub hidden_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub sold: Vec<Listing>,
    pub active: Vec<Listing>,
    pub off_market: Vec<Listing>,
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub navigation: Navigation,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct DiscardResponse {
    pub navigation: Navigation,
}
