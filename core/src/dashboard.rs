use crate::error::CoreResult;
use crate::session::controller::SessionController;
use crate::session::identity::{Identity, Role};
use crate::state::container::StateContainer;
use crate::store::SharedStore;

/// Composition root: wires the session controller and the shared state
/// container over one injected store, restoring prior session and
/// collections on open.
pub struct Dashboard {
    session: SessionController,
    state: StateContainer,
}

impl Dashboard {
    pub fn open(store: SharedStore) -> Self {
        let mut session = SessionController::new(store.clone());
        session.restore();
        let mut state = StateContainer::new(store);
        state.load_all();
        Self { session, state }
    }

    pub fn login(&mut self, role: Role, name: impl Into<String>) -> CoreResult<&Identity> {
        self.session.login(role, name)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.session.active()
    }

    /// Header badge count.
    pub fn alert_count(&self) -> usize {
        self.state.alerts().len()
    }

    pub fn state(&self) -> &StateContainer {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StateContainer {
        &mut self.state
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }
}
