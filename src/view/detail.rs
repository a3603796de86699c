// src/view/detail.rs
use crate::analysis::AnalysisRecord;

/// Static before/after content shown next to every page in the deep analysis view.
#[derive(Debug, Clone, Copy)]
pub struct DetailCopy {
    pub original: &'static str,
    pub optimized: &'static [&'static str],
    pub success_metrics: &'static [&'static str],
    pub roi_levers: &'static [&'static str],
}

pub const DETAIL_COPY: DetailCopy = DetailCopy {
    original: "To proceed, you must strictly adhere to the following complex requirements. \
               Failure to do so may result in delays or denial of service. \
               Please carefully review all sections before taking any action.",
    optimized: &[
        "To book your appointment:",
        "1. Choose a date and time.",
        "2. Confirm your contact details.",
        "3. Tap Book appointment.",
        "",
        "If you need help, call us or send a secure message from the portal.",
    ],
    success_metrics: &[
        "Clear step-by-step guidance",
        "Shorter, scannable paragraphs",
        "Plain language aligned with health literacy guidance",
    ],
    roi_levers: &[
        "Fewer calls to nurses and front-desk teams",
        "Higher completion of portal tasks without help",
        "Less time spent rewriting content before go-live",
    ],
};

/// (x, value) pairs for the trend bar chart, x counting from 1.
pub fn trend_bars(record: &AnalysisRecord) -> Vec<(f64, f64)> {
    record
        .trend
        .iter()
        .enumerate()
        .map(|(i, value)| ((i + 1) as f64, f64::from(*value)))
        .collect()
}
