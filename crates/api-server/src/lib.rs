//! Wizard REST API — session-scoped endpoints for the campaign builder UI.
//!
//! Sessions live in a DashMap (development); each session owns one
//! `WizardController`.

pub mod handlers;
pub mod models;
pub mod router;
pub mod server;
pub mod sessions;

pub use handlers::ApiState;
pub use router::wizard_router;
pub use server::ApiServer;
pub use sessions::{WizardSession, WizardSessions};
