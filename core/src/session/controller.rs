use crate::error::CoreResult;
use crate::session::identity::{Identity, Role};
use crate::store::{keys, SharedStore};

/// Owns the active identity and the `currentUser` record.
///
/// Single session, single identity: a new login silently replaces any prior
/// identity. Rejecting an empty name is the caller's job; the controller
/// accepts any well-formed identity.
pub struct SessionController {
    store: SharedStore,
    active: Option<Identity>,
}

impl SessionController {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            active: None,
        }
    }

    /// Reads `currentUser` back after a restart. A missing or malformed
    /// record leaves the session unauthenticated.
    pub fn restore(&mut self) -> Option<&Identity> {
        let raw = self.store.borrow().get(keys::CURRENT_USER)?;
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                self.active = Some(identity);
                self.active.as_ref()
            }
            Err(err) => {
                log::warn!("stored identity is malformed, starting unauthenticated: {err}");
                None
            }
        }
    }

    pub fn login(&mut self, role: Role, name: impl Into<String>) -> CoreResult<&Identity> {
        let identity = Identity {
            role,
            name: name.into(),
        };
        let raw = serde_json::to_string(&identity)?;
        self.store.borrow_mut().set(keys::CURRENT_USER, &raw)?;
        Ok(self.active.insert(identity))
    }

    pub fn logout(&mut self) {
        self.active = None;
        self.store.borrow_mut().remove(keys::CURRENT_USER);
    }

    pub fn active(&self) -> Option<&Identity> {
        self.active.as_ref()
    }
}
