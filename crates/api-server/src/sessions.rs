//! In-memory wizard session registry backed by DashMap.

use adbuilder_wizard::{AutosaveIndicator, WizardController};
use dashmap::DashMap;
use std::time::Duration;
use uuid::Uuid;

/// One active wizard session: the controller that owns the draft, plus
/// the autosave indicator fed by its mutations.
pub struct WizardSession {
    pub controller: WizardController,
    pub autosave: AutosaveIndicator,
}

/// Sessions are discarded on commit/discard or when the process exits;
/// nothing is persisted. Dropping a session aborts its pending
/// autosave timer.
pub struct WizardSessions {
    sessions: DashMap<Uuid, WizardSession>,
}

impl WizardSessions {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a controller and return its session id.
    pub fn insert(&self, controller: WizardController, autosave_settle: Duration) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            WizardSession {
                controller,
                autosave: AutosaveIndicator::new(autosave_settle),
            },
        );
        id
    }

    /// Run `f` with exclusive access to a session.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut WizardSession) -> R) -> Option<R> {
        self.sessions.get_mut(&id).map(|mut entry| f(entry.value_mut()))
    }

    /// Remove a session, returning it for the exit paths.
    pub fn remove(&self, id: Uuid) -> Option<WizardSession> {
        self.sessions.remove(&id).map(|(_, session)| session)
    }
}

impl Default for WizardSessions {
    fn default() -> Self {
        Self::new()
    }
}
