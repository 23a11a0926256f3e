//! Campaign builder wizard — draft state, progress derivation,
//! controller actions, catalog lookup, and the autosave indicator.
//!
//! Draft data lives in process memory for the duration of one wizard
//! session; nothing here writes to a durable store.

pub mod autosave;
pub mod catalog;
pub mod controller;
pub mod draft;
pub mod progress;
pub mod signals;

pub use autosave::{AutosaveIndicator, AutosaveState};
pub use catalog::CampaignCatalog;
pub use controller::{WizardController, WizardMode};
pub use draft::{CampaignDraft, WizardStep, MAX_SELECTED_PHOTOS};
pub use progress::Progress;
pub use signals::{Navigation, Notification};
