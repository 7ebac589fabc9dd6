use crate::state::model::{Alert, AuditEntry};

/// Read-only roll-up for the manager screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerSummary {
    pub total_alerts: usize,
    pub active_alerts: usize,
    pub resolved_alerts: usize,
    pub audit_entries: usize,
}

pub fn summary(alerts: &[Alert], audit_log: &[AuditEntry]) -> ManagerSummary {
    let resolved = alerts.iter().filter(|a| a.resolved).count();
    ManagerSummary {
        total_alerts: alerts.len(),
        active_alerts: alerts.len() - resolved,
        resolved_alerts: resolved,
        audit_entries: audit_log.len(),
    }
}
