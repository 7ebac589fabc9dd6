use crate::state::model::{AuditCategory, AuditEntry};
use std::collections::BTreeMap;

/// Most recent entries; the log is kept newest-first.
pub fn recent(entries: &[AuditEntry], n: usize) -> &[AuditEntry] {
    &entries[..entries.len().min(n)]
}

/// Entry counts per category.
pub fn category_tally(entries: &[AuditEntry]) -> BTreeMap<AuditCategory, usize> {
    let mut tally = BTreeMap::new();
    for entry in entries {
        *tally.entry(entry.category).or_insert(0) += 1;
    }
    tally
}
