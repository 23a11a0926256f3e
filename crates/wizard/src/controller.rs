//! The wizard controller — single owner of one session's `CampaignDraft`.
//!
//! One action per mutable field, plus the create/edit initialization
//! split, listing upsert/delete, and the commit/discard exits. The view
//! layer holds a reference to a controller and re-derives progress
//! after each action.

use crate::catalog::CampaignCatalog;
use crate::draft::{CampaignDraft, WizardStep};
use crate::progress::{derive_progress, Progress};
use crate::signals::{Navigation, Notification};
use adbuilder_core::error::{BuilderError, BuilderResult};
use adbuilder_core::types::{CampaignRecord, Listing, OpenHouseEvent};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// How many leading photos edit mode preselects from the record.
const EDIT_PRESELECTED_PHOTOS: usize = 3;

/// Initialization mode of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    /// Editing the existing campaign with this id.
    Edit(Uuid),
}

pub struct WizardController {
    mode: WizardMode,
    draft: CampaignDraft,
    catalog: Arc<CampaignCatalog>,
    default_music_id: String,
}

impl WizardController {
    /// Start a create-mode session with fresh-draft defaults.
    pub fn new_create(catalog: Arc<CampaignCatalog>, default_music_id: &str) -> Self {
        Self {
            mode: WizardMode::Create,
            draft: CampaignDraft::new(default_music_id),
            catalog,
            default_music_id: default_music_id.to_string(),
        }
    }

    /// Switch this session into edit mode by loading an existing
    /// campaign. On a lookup miss the draft is left untouched and the
    /// caller is expected to navigate away.
    pub async fn load_for_edit(&mut self, id: Uuid) -> BuilderResult<()> {
        let record = match self.catalog.lookup(id).await {
            Some(record) => record,
            None => {
                warn!(campaign_id = %id, "Edit-mode lookup missed");
                return Err(BuilderError::CampaignNotFound(id));
            }
        };

        info!(campaign_id = %id, property = %record.property_name, "Loaded campaign for editing");
        self.draft = Self::draft_from_record(&record, &self.default_music_id);
        self.mode = WizardMode::Edit(id);
        Ok(())
    }

    /// Synthesize a draft from an existing campaign record.
    fn draft_from_record(record: &CampaignRecord, default_music_id: &str) -> CampaignDraft {
        let preselected = record.photo_urls.len().min(EDIT_PRESELECTED_PHOTOS);
        CampaignDraft {
            selected_photo_indices: (0..preselected).collect(),
            cover_photo_index: if preselected > 0 { Some(0) } else { None },
            ad_copy_text: format!(
                "Welcome home to {}. This {}-bed, {}-bath gem won't last — book your showing now.",
                record.property_name, record.bedrooms, record.bathrooms
            ),
            call_to_action: "book-showing".to_string(),
            open_house_events: Vec::new(),
            selected_presenter: Some(0),
            script_text: format!(
                "Hi, I'm thrilled to walk you through {}. Let me show you what makes it special.",
                record.property_name
            ),
            script_reviewed: true,
            selected_music_id: Some(default_music_id.to_string()),
            active_step: WizardStep::AdCopy,
            listings: Vec::new(),
        }
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    pub fn progress(&self) -> Progress {
        derive_progress(&self.draft)
    }

    // ─── Field actions ─────────────────────────────────────────────────

    pub fn toggle_photo(&mut self, index: usize) {
        self.draft.toggle_photo(index);
    }

    /// Returns `false` when `index` is not a selected photo.
    pub fn set_cover_photo(&mut self, index: usize) -> bool {
        self.draft.set_cover_photo(index)
    }

    pub fn toggle_presenter(&mut self, index: usize) {
        self.draft.toggle_presenter(index);
    }

    pub fn set_ad_copy(&mut self, text: String) {
        self.draft.ad_copy_text = text;
    }

    pub fn set_call_to_action(&mut self, value: String) {
        self.draft.call_to_action = value;
    }

    pub fn set_open_houses(&mut self, events: Vec<OpenHouseEvent>) {
        self.draft.open_house_events = events;
    }

    pub fn set_script(&mut self, text: String) {
        self.draft.script_text = text;
    }

    pub fn set_script_reviewed(&mut self, reviewed: bool) {
        self.draft.script_reviewed = reviewed;
    }

    pub fn set_music(&mut self, id: Option<String>) {
        self.draft.selected_music_id = id;
    }

    pub fn set_active_step(&mut self, step: WizardStep) {
        self.draft.active_step = step;
    }

    // ─── Listings ──────────────────────────────────────────────────────

    /// Upsert a listing by id. An existing entry is replaced in place,
    /// preserving its position; a new one is appended.
    pub fn save_listing(&mut self, listing: Listing) -> Notification {
        let notification = if listing.is_draft {
            Notification::success("Draft saved", "Your listing draft has been saved.")
        } else {
            Notification::success("Listing saved", "Your listing has been saved.")
        };

        match self.draft.listings.iter().position(|l| l.id == listing.id) {
            Some(pos) => self.draft.listings[pos] = listing,
            None => self.draft.listings.push(listing),
        }
        notification
    }

    /// Remove a listing if present; silent when absent.
    pub fn delete_listing(&mut self, id: Uuid) {
        self.draft.listings.retain(|l| l.id != id);
    }

    // ─── Exits ─────────────────────────────────────────────────────────

    /// The "Create Campaign" / "Save" action. Nothing is persisted;
    /// this only decides where the user lands and what toast they see.
    pub fn commit(&self) -> (Navigation, Notification) {
        match self.mode {
            WizardMode::Edit(id) => (
                Navigation::CampaignDetail { id },
                Notification::success("Campaign saved", "Your changes have been saved."),
            ),
            WizardMode::Create => {
                let id = Uuid::new_v4();
                info!(campaign_id = %id, "Campaign created");
                (
                    Navigation::CampaignWelcome { id },
                    Notification::success("Campaign created", "Your ad campaign is ready."),
                )
            }
        }
    }

    /// The "Cancel" action; pending changes are dropped.
    pub fn discard(&self) -> Navigation {
        match self.mode {
            WizardMode::Edit(id) => Navigation::CampaignDetail { id },
            WizardMode::Create => Navigation::CampaignList,
        }
    }
}
