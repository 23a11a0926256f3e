//! The in-progress configuration of one ad campaign.
//!
//! `CampaignDraft` is the single mutable unit of work for a wizard
//! session. Mutations that carry invariants (photo cap, cover
//! membership, single presenter) live here; everything else is plain
//! field replacement on the controller.

use adbuilder_core::types::{Listing, OpenHouseEvent};
use serde::{Deserialize, Serialize};

/// Upper bound on selected photos per campaign (ad-platform carousel limit).
pub const MAX_SELECTED_PHOTOS: usize = 9;

/// The four wizard steps; exactly one accordion panel is expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    AdCopy,
    Photos,
    Presenter,
    Music,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::AdCopy,
        WizardStep::Photos,
        WizardStep::Presenter,
        WizardStep::Music,
    ];

    /// Return the next step, or `None` if this is the last step.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::AdCopy => Some(Self::Photos),
            Self::Photos => Some(Self::Presenter),
            Self::Presenter => Some(Self::Music),
            Self::Music => None,
        }
    }

    /// Return the previous step, or `None` if this is the first step.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::AdCopy => None,
            Self::Photos => Some(Self::AdCopy),
            Self::Presenter => Some(Self::Photos),
            Self::Music => Some(Self::Presenter),
        }
    }
}

/// In-memory state of one campaign being assembled by the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDraft {
    /// Indices into the external photo list. No duplicates; insertion
    /// order retained so "first remaining" is well defined.
    pub selected_photo_indices: Vec<usize>,
    /// `Some(i)` only while `i` is selected; `None` iff no photos are selected.
    pub cover_photo_index: Option<usize>,
    pub ad_copy_text: String,
    pub call_to_action: String,
    pub open_house_events: Vec<OpenHouseEvent>,
    /// At most one presenter can front the video.
    pub selected_presenter: Option<usize>,
    pub script_text: String,
    pub script_reviewed: bool,
    pub selected_music_id: Option<String>,
    pub active_step: WizardStep,
    /// Listings created or edited within this session.
    pub listings: Vec<Listing>,
}

impl CampaignDraft {
    /// Fresh-draft defaults: first photo preselected and marked cover,
    /// first presenter preselected, placeholder copy and script, the
    /// given music track, first step expanded.
    pub fn new(default_music_id: &str) -> Self {
        Self {
            selected_photo_indices: vec![0],
            cover_photo_index: Some(0),
            ad_copy_text: "Your dream home is waiting. Schedule a private showing today."
                .to_string(),
            call_to_action: String::new(),
            open_house_events: Vec::new(),
            selected_presenter: Some(0),
            script_text: "Hi, I'm excited to show you this beautiful property. \
                          Let's take a look inside."
                .to_string(),
            script_reviewed: false,
            selected_music_id: Some(default_music_id.to_string()),
            active_step: WizardStep::AdCopy,
            listings: Vec::new(),
        }
    }

    /// Toggle a photo's selection.
    ///
    /// Deselecting the current cover reassigns the cover to the first
    /// remaining selected index, or clears it when none remain.
    /// Selecting is a no-op once the cap is reached; the first selected
    /// photo claims the cover if none is set.
    pub fn toggle_photo(&mut self, index: usize) {
        if let Some(pos) = self.selected_photo_indices.iter().position(|&i| i == index) {
            self.selected_photo_indices.remove(pos);
            if self.cover_photo_index == Some(index) {
                self.cover_photo_index = self.selected_photo_indices.first().copied();
            }
        } else {
            if self.selected_photo_indices.len() >= MAX_SELECTED_PHOTOS {
                return;
            }
            self.selected_photo_indices.push(index);
            if self.cover_photo_index.is_none() {
                self.cover_photo_index = Some(index);
            }
        }
    }

    /// Set the cover photo. Rejected (returns `false`) when `index` is
    /// not currently selected, keeping the cover-membership invariant.
    pub fn set_cover_photo(&mut self, index: usize) -> bool {
        if !self.selected_photo_indices.contains(&index) {
            return false;
        }
        self.cover_photo_index = Some(index);
        true
    }

    /// Toggle the presenter: the selected index toggles off, any other
    /// index replaces the selection.
    pub fn toggle_presenter(&mut self, index: usize) {
        if self.selected_presenter == Some(index) {
            self.selected_presenter = None;
        } else {
            self.selected_presenter = Some(index);
        }
    }
}
