use crate::clock::{now_rfc3339_utc, now_unix_millis};
use crate::error::CoreResult;
use crate::state::model::{Alert, AlertInput, AuditEntry, AuditInput};
use crate::store::{keys, SharedStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Canonical owner of the in-memory `alerts` and `auditLog` mirrors, and
/// the only writer of those two store keys.
///
/// Every mutation is write-through: the in-memory collection changes first
/// and the full collection is re-serialized to the store in the same call.
/// A persistence failure surfaces as `Err`; the in-memory change is kept.
pub struct StateContainer {
    store: SharedStore,
    alerts: Vec<Alert>,
    audit_log: Vec<AuditEntry>,
    last_alert_id: u64,
}

impl StateContainer {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            alerts: Vec::new(),
            audit_log: Vec::new(),
            last_alert_id: 0,
        }
    }

    /// Loads prior collections. Missing or corrupt records resolve to
    /// empty collections, never an error.
    pub fn load_all(&mut self) {
        self.alerts = self.read_collection(keys::ALERTS);
        self.audit_log = self.read_collection(keys::AUDIT_LOG);
        self.last_alert_id = self.alerts.iter().map(|a| a.id).max().unwrap_or(0);
    }

    /// Alerts, newest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Audit entries, newest first.
    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit_log
    }

    pub fn append_alert(&mut self, input: AlertInput) -> CoreResult<Alert> {
        let alert = Alert {
            id: self.next_alert_id(),
            kind: input.kind,
            severity: input.severity,
            message: input.message,
            details: input.details,
            resolved: false,
            created_at: now_rfc3339_utc(),
        };
        self.alerts.insert(0, alert.clone());
        self.write_collection(keys::ALERTS, &self.alerts)?;
        Ok(alert)
    }

    /// Flips `resolved` on the matching alert. `Ok(false)` when the id is
    /// unknown.
    pub fn toggle_resolved(&mut self, id: u64) -> CoreResult<bool> {
        let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        alert.resolved = !alert.resolved;
        self.write_collection(keys::ALERTS, &self.alerts)?;
        Ok(true)
    }

    /// Removes the matching alert. `Ok(false)` when the id is unknown.
    pub fn delete_alert(&mut self, id: u64) -> CoreResult<bool> {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        if self.alerts.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::ALERTS, &self.alerts)?;
        Ok(true)
    }

    /// Appends to the audit log. Append-only: no update or delete exists
    /// once an entry is written.
    pub fn append_audit(&mut self, input: AuditInput, acting_user: &str) -> CoreResult<AuditEntry> {
        let entry = AuditEntry {
            action: input.action,
            details: input.details,
            category: input.category,
            timestamp: now_rfc3339_utc(),
            user: acting_user.to_string(),
        };
        self.audit_log.insert(0, entry.clone());
        self.write_collection(keys::AUDIT_LOG, &self.audit_log)?;
        Ok(entry)
    }

    // Millisecond-derived with a monotonic bump, so two alerts created in
    // the same clock tick never share an id.
    fn next_alert_id(&mut self) -> u64 {
        self.last_alert_id = now_unix_millis().max(self.last_alert_id + 1);
        self.last_alert_id
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.borrow().get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("stored {key} is malformed, starting empty: {err}");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> CoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.borrow_mut().set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::StateContainer;
    use crate::store::{memory::MemoryStore, shared};

    #[test]
    fn alert_ids_never_repeat_within_a_tick() {
        let mut container = StateContainer::new(shared(Box::new(MemoryStore::new())));
        let a = container.next_alert_id();
        let b = container.next_alert_id();
        let c = container.next_alert_id();
        assert!(a < b && b < c);
    }
}
