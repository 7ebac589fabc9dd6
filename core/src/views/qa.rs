use crate::clock::now_rfc3339_utc;
use crate::error::CoreResult;
use crate::state::container::StateContainer;
use crate::state::model::{AuditCategory, AuditInput};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
        }
    }
}

/// A recorded QA check. Lives only in the view: the history resets on
/// remount while the audit trail of the recording is durable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub status: TestStatus,
    pub timestamp: String,
    pub batch_id: String,
}

/// QA screen state: the selected outcome and the session-local result
/// history, newest first.
#[derive(Debug)]
pub struct QaView {
    results: Vec<TestResult>,
    selected: TestStatus,
}

impl Default for QaView {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            selected: TestStatus::Pass,
        }
    }
}

impl QaView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, status: TestStatus) {
        self.selected = status;
    }

    pub fn selected(&self) -> TestStatus {
        self.selected
    }

    /// Synthesizes a batch id, records the result locally, and appends the
    /// durable audit entry for the recording.
    pub fn record_result(
        &mut self,
        state: &mut StateContainer,
        acting_user: &str,
    ) -> CoreResult<TestResult> {
        let result = TestResult {
            status: self.selected,
            timestamp: now_rfc3339_utc(),
            batch_id: synthesize_batch_id(),
        };
        self.results.insert(0, result.clone());
        state.append_audit(
            AuditInput {
                action: "QA Test Result".to_string(),
                details: format!("Test result recorded: {}", self.selected.as_str()),
                category: AuditCategory::Qa,
            },
            acting_user,
        )?;
        Ok(result)
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn recent(&self, n: usize) -> &[TestResult] {
        &self.results[..self.results.len().min(n)]
    }

    pub fn pass_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == TestStatus::Pass)
            .count()
    }

    pub fn fail_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == TestStatus::Fail)
            .count()
    }

    /// Percentage of passing checks; 0 when nothing is recorded yet.
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.pass_count() as f64 * 100.0 / self.results.len() as f64
    }
}

fn synthesize_batch_id() -> String {
    format!("BATCH-{}", rand::thread_rng().gen_range(0..10_000))
}
