use crate::state::model::Alert;

/// Headline numbers for the supervisor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisorOverview {
    pub active_issues: usize,
}

/// Alerts still requiring attention, newest first. Read-only: the
/// supervisor has no write path.
pub fn active_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    alerts.iter().filter(|a| !a.resolved).collect()
}

pub fn overview(alerts: &[Alert]) -> SupervisorOverview {
    SupervisorOverview {
        active_issues: active_alerts(alerts).len(),
    }
}
