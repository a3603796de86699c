// src/ui/analysis.rs
use eframe::egui::{self, RichText};
use egui_plot::{Bar, BarChart, Plot};

use crate::analysis::{AnalysisRecord, Metric};
use crate::state::{AppState, Screen};
use crate::ui::widgets::{self, ACCENT, BAD, GOOD, MUTED, SECONDARY, WARN};
use crate::view::{trend_bars, DETAIL_COPY};

pub fn show_analysis_view(ui: &mut egui::Ui, state: &mut AppState) {
    widgets::section_header(
        ui,
        "Deep analysis",
        "Per-page scores, detected issues, and how the copy could change.",
    );

    if state.session.labels().is_empty() {
        widgets::empty_prompt(ui);
        if ui.button("◀ Back to dashboard").clicked() {
            state.current_screen = Screen::Dashboard;
        }
        return;
    }

    widgets::page_selector(ui, "analysis_page_selector", &mut state.session);
    ui.add_space(8.0);

    let Some(record) = state.session.selected_record().cloned() else {
        return;
    };

    ui.columns(2, |cols| {
        draw_copy_comparison(&mut cols[0], &record);
        draw_impact(&mut cols[1], &record);
    });
}

fn draw_copy_comparison(ui: &mut egui::Ui, record: &AnalysisRecord) {
    widgets::section_header(
        ui,
        "Customer’s problematic input → Optimized content",
        "How PenTrust helps designers move from friction to clarity.",
    );

    ui.label(RichText::new("⚠ Original copy (high friction)").strong());
    widgets::content_box(ui, SECONDARY, &[DETAIL_COPY.original]);
    ui.add_space(8.0);

    ui.label(RichText::new("Detected issues").strong());
    for issue in &record.top_issues {
        ui.label(RichText::new(format!("⚠ {}", issue.title)).size(13.0).color(WARN));
        ui.label(RichText::new(issue.description).size(12.0).color(MUTED));
    }
    ui.add_space(12.0);

    ui.label(RichText::new("✔ Optimized copy (PenTrust-guided)").strong());
    widgets::content_box(ui, GOOD, DETAIL_COPY.optimized);
    ui.add_space(8.0);

    ui.label(RichText::new("Success metrics this supports").strong());
    for metric in DETAIL_COPY.success_metrics {
        ui.label(RichText::new(format!("✔ {}", metric)).size(13.0).color(GOOD));
    }
}

fn draw_impact(ui: &mut egui::Ui, record: &AnalysisRecord) {
    widgets::section_header(
        ui,
        "Impact & ROI signals",
        "How this content change moves business and safety metrics.",
    );

    widgets::metric_card(
        ui,
        "Clarity score",
        &record.scores.clarity.to_string(),
        "Before fixes",
        BAD,
    );
    ui.add_space(8.0);
    widgets::metric_card(
        ui,
        "Projected clarity after fixes",
        &record.projected_clarity.to_string(),
        "Modeled from similar content changes",
        ACCENT,
    );
    ui.add_space(12.0);

    egui::Grid::new("score_breakdown")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for metric in Metric::ALL {
                ui.label(metric.label());
                ui.label(RichText::new(record.scores.get(metric).to_string()).strong());
                ui.end_row();
            }
            let risk = record.risk();
            ui.label("Risk");
            ui.label(RichText::new(risk.as_str()).strong().color(widgets::risk_color(risk)));
            ui.end_row();
        });
    ui.add_space(12.0);

    ui.label(RichText::new("Clarity trend").strong());
    let bars: Vec<Bar> = trend_bars(record)
        .into_iter()
        .map(|(x, value)| Bar::new(x, value).width(0.6))
        .collect();

    Plot::new("clarity_trend")
        .height(180.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(ACCENT).name("Clarity"));
        });
    ui.add_space(12.0);

    ui.label(RichText::new("ROI levers this change influences").strong());
    egui::ScrollArea::vertical()
        .id_source("roi_scroll")
        .max_height(120.0)
        .show(ui, |ui| {
            for lever in DETAIL_COPY.roi_levers {
                ui.label(RichText::new(format!("📈 {}", lever)).size(13.0).color(GOOD));
            }
        });
}
