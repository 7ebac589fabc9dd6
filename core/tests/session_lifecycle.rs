use shiftboard_core::session::controller::SessionController;
use shiftboard_core::session::identity::Role;
use shiftboard_core::store::file::FileStore;
use shiftboard_core::store::memory::MemoryStore;
use shiftboard_core::store::{keys, shared, KeyValueStore};

#[test]
fn login_persists_current_user_verbatim() {
    let store = shared(Box::new(MemoryStore::new()));
    let mut session = SessionController::new(store.clone());

    let identity = session.login(Role::Operator, "Alex").unwrap();
    assert_eq!(identity.name, "Alex");

    let raw = store.borrow().get(keys::CURRENT_USER).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"role": "operator", "name": "Alex"})
    );
}

#[test]
fn restore_after_restart_yields_the_same_identity() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = shared(Box::new(FileStore::open(dir.path()).unwrap()));
        let mut session = SessionController::new(store);
        session.login(Role::Qa, "Quinn").unwrap();
    }
    let store = shared(Box::new(FileStore::open(dir.path()).unwrap()));
    let mut session = SessionController::new(store);
    let restored = session.restore().unwrap();
    assert_eq!(restored.role, Role::Qa);
    assert_eq!(restored.name, "Quinn");
    assert!(session.active().is_some());
}

#[test]
fn a_new_login_replaces_the_prior_identity() {
    let store = shared(Box::new(MemoryStore::new()));
    let mut session = SessionController::new(store);
    session.login(Role::Operator, "Alex").unwrap();
    session.login(Role::Manager, "Morgan").unwrap();
    let active = session.active().unwrap();
    assert_eq!(active.role, Role::Manager);
    assert_eq!(active.name, "Morgan");
}

#[test]
fn logout_removes_the_record_and_restore_finds_nothing() {
    let store = shared(Box::new(MemoryStore::new()));
    let mut session = SessionController::new(store.clone());
    session.login(Role::Supervisor, "Sam").unwrap();
    session.logout();

    assert!(session.active().is_none());
    assert_eq!(store.borrow().get(keys::CURRENT_USER), None);

    let mut fresh = SessionController::new(store);
    assert!(fresh.restore().is_none());
}

#[test]
fn malformed_stored_identity_starts_unauthenticated() {
    let store = shared(Box::new(MemoryStore::new()));
    store
        .borrow_mut()
        .set(keys::CURRENT_USER, "{not json")
        .unwrap();
    let mut session = SessionController::new(store);
    assert!(session.restore().is_none());
    assert!(session.active().is_none());
}
