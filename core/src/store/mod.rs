pub mod file;
pub mod memory;

use crate::error::CoreResult;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Store keys, matching the records the application has always written.
pub mod keys {
    pub const CURRENT_USER: &str = "currentUser";
    pub const ALERTS: &str = "alerts";
    pub const AUDIT_LOG: &str = "auditLog";
}

/// Durable key-value substrate holding the session's three records.
///
/// Reads are fail-soft: a missing key, an unreadable backing file, or any
/// other read failure all resolve to `None`. Writes report failure through
/// the result so callers can surface it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&mut self, key: &str);
}

/// One logical store shared by the session controller and the state
/// container. The execution model is single-threaded and event-driven, so
/// `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`.
pub type SharedStore = Rc<RefCell<Box<dyn KeyValueStore>>>;

pub fn shared(store: Box<dyn KeyValueStore>) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// Opens a file-backed store, degrading to in-memory-only operation for
/// the rest of the session when the backing directory is unavailable.
pub fn open_or_memory(root: impl AsRef<Path>) -> SharedStore {
    match file::FileStore::open(root.as_ref()) {
        Ok(backing) => shared(Box::new(backing)),
        Err(err) => {
            log::warn!(
                "store root {} unavailable, continuing in-memory: {err}",
                root.as_ref().display()
            );
            shared(Box::new(memory::MemoryStore::new()))
        }
    }
}
