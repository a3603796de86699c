// src/analysis/mod.rs
pub mod audit;
pub mod seed;

// Re-export commonly used types
pub use audit::{
    generate,
    AnalysisRecord,
    Issue,
    Metric,
    RiskLevel,
    Scores,
    ISSUE_POOL,
};
pub use seed::seed;
