// src/view/overview.rs
use std::collections::HashSet;

use crate::analysis::RiskLevel;
use crate::state::session::SessionStore;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overview {
    pub pages: usize,
    pub distinct_pages: usize,
    pub average_clarity: Option<u32>,
    pub average_projected: Option<u32>,
    pub high_risk_pages: usize,
}

impl Overview {
    /// Averages are over submitted rows, so duplicates count once per line.
    pub fn from_session(store: &SessionStore) -> Self {
        let records: Vec<_> = store
            .labels()
            .iter()
            .filter_map(|label| store.record(label))
            .collect();

        if records.is_empty() {
            return Self::default();
        }

        let count = records.len() as f64;
        let average = |total: u32| Some((f64::from(total) / count).round() as u32);

        let distinct_pages = store.labels().iter().collect::<HashSet<_>>().len();

        Self {
            pages: records.len(),
            distinct_pages,
            average_clarity: average(records.iter().map(|r| r.scores.clarity).sum()),
            average_projected: average(records.iter().map(|r| r.projected_clarity).sum()),
            high_risk_pages: records.iter().filter(|r| r.risk() == RiskLevel::High).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate;

    #[test]
    fn test_empty_session_overview() {
        let overview = Overview::from_session(&SessionStore::new());
        assert_eq!(overview, Overview::default());
        assert!(overview.average_clarity.is_none());
    }

    #[test]
    fn test_overview_counts_and_averages() {
        let mut store = SessionStore::new();
        store.submit("PageOne\nPageTwo\nPageOne");

        let one = generate("PageOne");
        let two = generate("PageTwo");
        let overview = Overview::from_session(&store);

        assert_eq!(overview.pages, 3);
        assert_eq!(overview.distinct_pages, 2);

        let total = 2 * one.scores.clarity + two.scores.clarity;
        assert_eq!(overview.average_clarity, Some((f64::from(total) / 3.0).round() as u32));

        let high = [&one, &two, &one]
            .iter()
            .filter(|r| r.risk() == RiskLevel::High)
            .count();
        assert_eq!(overview.high_risk_pages, high);
    }
}
