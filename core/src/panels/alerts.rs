use crate::error::CoreResult;
use crate::state::container::StateContainer;
use crate::state::model::Alert;

/// Splits alerts into (active, resolved) subsets. Computed per call, never
/// stored.
pub fn partition(alerts: &[Alert]) -> (Vec<&Alert>, Vec<&Alert>) {
    alerts.iter().partition(|a| !a.resolved)
}

/// Panel action: mark the alert resolved (or active again). Writes through
/// the container.
pub fn resolve(state: &mut StateContainer, id: u64) -> CoreResult<bool> {
    state.toggle_resolved(id)
}

/// Panel action: drop the alert entirely. Writes through the container.
pub fn delete(state: &mut StateContainer, id: u64) -> CoreResult<bool> {
    state.delete_alert(id)
}
