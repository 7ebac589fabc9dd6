use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// An actionable issue record. Mutated only through the `resolved` toggle;
/// deleted explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub details: String,
    pub resolved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String, // RFC3339 UTC string
}

/// What a role view supplies when raising an alert; the container assigns
/// `id`, `resolved` and `created_at`.
#[derive(Debug, Clone)]
pub struct AlertInput {
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub details: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AuditCategory {
    Operation,
    Incident,
    Qa,
    Other,
}

/// An immutable, timestamped record of an action taken in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    pub action: String,
    pub details: String,
    pub category: AuditCategory,
    pub timestamp: String, // RFC3339 UTC string
    pub user: String,
}

/// What a role view supplies when recording an action; the container stamps
/// `timestamp` and `user`.
#[derive(Debug, Clone)]
pub struct AuditInput {
    pub action: String,
    pub details: String,
    pub category: AuditCategory,
}
