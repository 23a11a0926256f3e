//! Pure completion/progress derivation over a campaign draft.

use crate::draft::{CampaignDraft, WizardStep};
use serde::{Deserialize, Serialize};

/// Rough editing time per incomplete step, in minutes.
const MINUTES_PER_STEP: f64 = 2.5;

/// Snapshot of wizard completion, re-derived after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    pub completed_steps: u32,
    pub total_steps: u32,
    pub percentage: f64,
    pub estimated_minutes_remaining: f64,
}

impl Progress {
    /// Minutes remaining rounded up to a whole minute for display.
    pub fn display_minutes(&self) -> u64 {
        self.estimated_minutes_remaining.ceil() as u64
    }
}

/// Whether a single step counts as complete for the given draft.
pub fn step_complete(draft: &CampaignDraft, step: WizardStep) -> bool {
    match step {
        WizardStep::AdCopy => !draft.ad_copy_text.is_empty(),
        WizardStep::Photos => !draft.selected_photo_indices.is_empty(),
        WizardStep::Presenter => draft.selected_presenter.is_some(),
        WizardStep::Music => draft.selected_music_id.is_some(),
    }
}

/// Derive completion from a draft. Deterministic, no side effects.
pub fn derive_progress(draft: &CampaignDraft) -> Progress {
    let total_steps = WizardStep::ALL.len() as u32;
    let completed_steps = WizardStep::ALL
        .iter()
        .filter(|&&step| step_complete(draft, step))
        .count() as u32;

    let remaining = (total_steps - completed_steps) as f64 * MINUTES_PER_STEP;

    Progress {
        completed_steps,
        total_steps,
        percentage: completed_steps as f64 / total_steps as f64 * 100.0,
        estimated_minutes_remaining: remaining.max(1.0),
    }
}
