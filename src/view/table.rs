// src/view/table.rs
use crate::analysis::RiskLevel;
use crate::state::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub clarity: u32,
    pub next_step_guidance: u32,
    pub trust_signals: u32,
    pub accessibility: u32,
    pub issues: String,
    pub risk: RiskLevel,
    pub projected_clarity: u32,
}

pub const COLUMNS: [&str; 8] = [
    "Page / Message",
    "Clarity",
    "Next-step guidance",
    "Trust signals",
    "Accessibility-aware writing",
    "Top issues",
    "Risk",
    "Projected after fixes",
];

/// One row per submitted label, in submission order.
pub fn table_rows(store: &SessionStore) -> Vec<TableRow> {
    store
        .labels()
        .iter()
        .filter_map(|label| store.record(label))
        .map(|record| TableRow {
            label: record.label.clone(),
            clarity: record.scores.clarity,
            next_step_guidance: record.scores.next_step_guidance,
            trust_signals: record.scores.trust_signals,
            accessibility: record.scores.accessibility,
            issues: record.issue_titles(),
            risk: record.risk(),
            projected_clarity: record.projected_clarity,
        })
        .collect()
}
