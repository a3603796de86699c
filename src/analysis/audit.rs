// src/analysis/audit.rs

use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use std::fmt;
use std::ops::RangeInclusive;

use super::seed::seed;

pub const TREND_POINTS: usize = 8;
pub const TREND_MIN: i32 = 40;
pub const TREND_MAX: i32 = 90;
pub const TOP_ISSUE_COUNT: usize = 2;
pub const PROJECTED_CAP: u32 = 98;

const TREND_JITTER: RangeInclusive<i32> = -8..=8;
const PROJECTED_LIFT: RangeInclusive<u32> = 8..=15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Clarity,
    NextStepGuidance,
    TrustSignals,
    AccessibilityAwareWriting,
}

impl Metric {
    /// Display and draw order.
    pub const ALL: [Metric; 4] = [
        Metric::Clarity,
        Metric::NextStepGuidance,
        Metric::TrustSignals,
        Metric::AccessibilityAwareWriting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Clarity => "Clarity",
            Metric::NextStepGuidance => "Next-step guidance",
            Metric::TrustSignals => "Trust signals",
            Metric::AccessibilityAwareWriting => "Accessibility-aware writing",
        }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Metric::Clarity => 58..=82,
            Metric::NextStepGuidance => 52..=80,
            Metric::TrustSignals => 55..=85,
            Metric::AccessibilityAwareWriting => 48..=78,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub clarity: u32,
    pub next_step_guidance: u32,
    pub trust_signals: u32,
    pub accessibility: u32,
}

impl Scores {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Clarity => self.clarity,
            Metric::NextStepGuidance => self.next_step_guidance,
            Metric::TrustSignals => self.trust_signals,
            Metric::AccessibilityAwareWriting => self.accessibility,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, u32)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }

    pub fn min(&self) -> u32 {
        self.iter().map(|(_, score)| score).min().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ISSUE_POOL: [Issue; 5] = [
    Issue {
        title: "Dense instructions",
        description: "Long paragraphs reduce scanability in critical flows.",
    },
    Issue {
        title: "Unclear next steps",
        description: "Confirmation copy doesn't specify the user's next action.",
    },
    Issue {
        title: "Weak micro trust",
        description: "Lack of brief reassurance near sensitive content.",
    },
    Issue {
        title: "Readability mismatch",
        description: "Reading level may be high for broad patient audiences.",
    },
    Issue {
        title: "Accessibility gaps",
        description: "Content structure may not support assistive scanning.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_min_score(min: u32) -> Self {
        if min < 55 {
            RiskLevel::High
        } else if min < 65 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub label: String,
    pub scores: Scores,
    pub top_issues: Vec<Issue>,
    pub trend: Vec<u32>,
    pub projected_clarity: u32,  // Projected clarity after fixes
}

impl AnalysisRecord {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_min_score(self.scores.min())
    }

    pub fn issue_titles(&self) -> String {
        self.top_issues
            .iter()
            .map(|issue| issue.title)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Builds the mock audit for one page label.
///
/// Every draw comes from a generator seeded by [`seed`] and local to this call,
/// so the same label always yields the same record. The stream is consumed in a
/// fixed order: the four scores, the issue shuffle, the eight trend offsets and
/// finally the projected lift. Reordering any of these changes every record.
pub fn generate(label: &str) -> AnalysisRecord {
    let mut rng = ChaCha12Rng::seed_from_u64(u64::from(seed(label)));

    let clarity = rng.gen_range(Metric::Clarity.range());
    let next_step_guidance = rng.gen_range(Metric::NextStepGuidance.range());
    let trust_signals = rng.gen_range(Metric::TrustSignals.range());
    let accessibility = rng.gen_range(Metric::AccessibilityAwareWriting.range());
    let scores = Scores {
        clarity,
        next_step_guidance,
        trust_signals,
        accessibility,
    };

    let mut pool = ISSUE_POOL;
    pool.shuffle(&mut rng);
    let top_issues = pool[..TOP_ISSUE_COUNT].to_vec();

    let base = clarity as i32;
    let trend = (0..TREND_POINTS)
        .map(|_| (base + rng.gen_range(TREND_JITTER)).clamp(TREND_MIN, TREND_MAX) as u32)
        .collect();

    let projected_clarity = (clarity + rng.gen_range(PROJECTED_LIFT)).min(PROJECTED_CAP);

    AnalysisRecord {
        label: label.to_string(),
        scores,
        top_issues,
        trend,
        projected_clarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    fn scores_with_min(min: u32) -> Scores {
        Scores {
            clarity: 80,
            next_step_guidance: 80,
            trust_signals: min,
            accessibility: 80,
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = generate("https://hospital-portal.com/patient-login");
        let second = generate("https://hospital-portal.com/patient-login");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_ignores_call_order() {
        let alone = generate("PageTwo");
        let _ = generate("PageOne");
        let _ = generate("Discharge summary SMS copy");
        assert_eq!(generate("PageTwo"), alone);
    }

    #[test]
    fn test_distinct_labels_differ() {
        let one = generate("PageOne");
        let two = generate("PageTwo");
        assert_ne!(
            (one.scores, one.top_issues, one.trend),
            (two.scores, two.top_issues, two.trend)
        );
    }

    #[test]
    fn test_known_label_yields_fixed_record() {
        let record = generate("PageOne");
        assert_eq!(
            record.scores,
            Scores {
                clarity: 66,
                next_step_guidance: 68,
                trust_signals: 61,
                accessibility: 69,
            }
        );
        assert_eq!(record.top_issues, vec![ISSUE_POOL[2], ISSUE_POOL[1]]);
        assert_eq!(record.issue_titles(), "Weak micro trust, Unclear next steps");
        assert_eq!(record.trend, vec![70, 70, 63, 64, 73, 62, 65, 60]);
        assert_eq!(record.projected_clarity, 76);
        assert_eq!(record.risk(), RiskLevel::Medium);
    }

    #[test]
    fn test_draw_order_is_scores_then_shuffle_then_trend() {
        let label = "Discharge summary SMS copy";
        let mut rng = ChaCha12Rng::seed_from_u64(u64::from(seed(label)));

        let clarity: u32 = rng.gen_range(58..=82);
        let next_step: u32 = rng.gen_range(52..=80);
        let trust: u32 = rng.gen_range(55..=85);
        let accessibility: u32 = rng.gen_range(48..=78);

        let mut pool = ISSUE_POOL.to_vec();
        pool.shuffle(&mut rng);

        let trend: Vec<u32> = (0..8)
            .map(|_| {
                let offset: i32 = rng.gen_range(-8..=8);
                (clarity as i32 + offset).clamp(40, 90) as u32
            })
            .collect();

        let lift: u32 = rng.gen_range(8..=15);

        let record = generate(label);
        assert_eq!(record.scores.clarity, clarity);
        assert_eq!(record.scores.next_step_guidance, next_step);
        assert_eq!(record.scores.trust_signals, trust);
        assert_eq!(record.scores.accessibility, accessibility);
        assert_eq!(record.top_issues, pool[..2].to_vec());
        assert_eq!(record.trend, trend);
        assert_eq!(record.projected_clarity, (clarity + lift).min(98));
    }

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(RiskLevel::from_min_score(48), RiskLevel::High);
        assert_eq!(RiskLevel::from_min_score(54), RiskLevel::High);
        assert_eq!(RiskLevel::from_min_score(55), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_min_score(64), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_min_score(65), RiskLevel::Low);
        assert_eq!(scores_with_min(54).min(), 54);
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn test_issue_titles_are_comma_joined() {
        let record = AnalysisRecord {
            label: "Refill page".to_string(),
            scores: scores_with_min(70),
            top_issues: vec![ISSUE_POOL[1], ISSUE_POOL[4]],
            trend: vec![70; TREND_POINTS],
            projected_clarity: 90,
        };
        assert_eq!(record.issue_titles(), "Unclear next steps, Accessibility gaps");
        assert_eq!(record.risk(), RiskLevel::Low);
    }

    proptest! {
        #[test]
        fn prop_generate_repeats(label in "\\PC{1,48}") {
            prop_assert_eq!(generate(&label), generate(&label));
        }

        #[test]
        fn prop_scores_and_trend_stay_in_range(label in "\\PC{1,48}") {
            let record = generate(&label);

            for (metric, score) in record.scores.iter() {
                prop_assert!(metric.range().contains(&score), "{} out of range: {}", metric.label(), score);
            }

            prop_assert_eq!(record.trend.len(), TREND_POINTS);
            for value in &record.trend {
                prop_assert!((40..=90).contains(value));
            }

            let clarity = record.scores.clarity;
            prop_assert!(record.projected_clarity <= PROJECTED_CAP);
            prop_assert!(record.projected_clarity >= (clarity + 8).min(PROJECTED_CAP));
            prop_assert!(record.projected_clarity <= clarity + 15);
        }

        #[test]
        fn prop_top_issues_are_two_distinct_pool_entries(label in "\\PC{1,48}") {
            let record = generate(&label);
            prop_assert_eq!(record.top_issues.len(), 2);
            prop_assert_ne!(record.top_issues[0], record.top_issues[1]);
            for issue in &record.top_issues {
                prop_assert!(ISSUE_POOL.contains(issue));
            }
        }

        #[test]
        fn prop_risk_follows_minimum_score(label in "\\PC{1,48}") {
            let record = generate(&label);
            let min = record.scores.min();
            let expected = if min < 55 {
                RiskLevel::High
            } else if min < 65 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            prop_assert_eq!(record.risk(), expected);
        }
    }
}
