use crate::error::CoreResult;
use crate::state::container::StateContainer;
use crate::state::model::{Alert, AlertInput, AuditCategory, AuditEntry, AuditInput, Severity};

const UNSPECIFIED_ISSUE: &str = "Unspecified issue";

/// Alert plus the companion audit entry produced by one issue report.
#[derive(Debug, Clone)]
pub struct IssueReport {
    pub alert: Alert,
    pub audit: AuditEntry,
}

/// Operator screen state: the draft shift note. All writes go through the
/// state container; the view performs no store I/O of its own.
#[derive(Debug, Default)]
pub struct OperatorView {
    shift_note: String,
}

impl OperatorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.shift_note = note.into();
    }

    pub fn note(&self) -> &str {
        &self.shift_note
    }

    /// The report-issue action stays disabled while the note is blank.
    pub fn can_report_issue(&self) -> bool {
        !self.shift_note.trim().is_empty()
    }

    /// Records the note as a shift-log audit entry and clears it. A blank
    /// note is a no-op, mirroring the disabled action.
    pub fn log_entry(
        &mut self,
        state: &mut StateContainer,
        acting_user: &str,
    ) -> CoreResult<Option<AuditEntry>> {
        if self.shift_note.trim().is_empty() {
            return Ok(None);
        }
        let entry = state.append_audit(
            AuditInput {
                action: "Shift Log Entry".to_string(),
                details: self.shift_note.clone(),
                category: AuditCategory::Operation,
            },
            acting_user,
        )?;
        self.shift_note.clear();
        Ok(Some(entry))
    }

    /// Raises a high-severity alert, then the companion incident audit
    /// entry, in that order, then clears the note. Sequenced, not atomic.
    pub fn report_issue(
        &mut self,
        state: &mut StateContainer,
        acting_user: &str,
    ) -> CoreResult<IssueReport> {
        let details = if self.shift_note.is_empty() {
            UNSPECIFIED_ISSUE.to_string()
        } else {
            self.shift_note.clone()
        };
        let alert = state.append_alert(AlertInput {
            kind: "issue".to_string(),
            severity: Severity::High,
            message: "Issue reported by operator".to_string(),
            details: details.clone(),
        })?;
        let audit = state.append_audit(
            AuditInput {
                action: "Issue Reported".to_string(),
                details,
                category: AuditCategory::Incident,
            },
            acting_user,
        )?;
        self.shift_note.clear();
        Ok(IssueReport { alert, audit })
    }
}
