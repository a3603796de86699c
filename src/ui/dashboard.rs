// src/ui/dashboard.rs
use eframe::egui::{self, RichText};

use crate::state::session::SessionPhase;
use crate::state::{AppState, Screen};
use crate::ui::widgets::{self, ACCENT, GOOD, MUTED};
use crate::view::{table, Overview};

const INPUT_HINT: &str = "Example:\n\
    https://hospital-portal.com/patient-login\n\
    https://hospital-portal.com/medication-refill\n\
    Discharge summary SMS copy";

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            widgets::section_header(
                ui,
                "Dashboard",
                "Paste a few URLs or page labels and run a demo content audit.",
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            let today = chrono::Local::now().format("%A, %d %B %Y").to_string();
            ui.label(RichText::new(today).size(12.0).color(MUTED));
        });
    });

    ui.columns(2, |cols| {
        // Input panel
        let input = &mut cols[0];
        input.label("Pages to review");
        input.add(
            egui::TextEdit::multiline(&mut state.raw_input)
                .hint_text(INPUT_HINT)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        input.horizontal(|ui| {
            if ui.button(RichText::new("Run PenTrust demo").strong()).clicked() {
                state.run_audit();
            }
            if ui.button("Clear").clicked() {
                state.clear_audit();
            }
        });

        // Summary cards
        let overview = Overview::from_session(&state.session);
        let summary = &mut cols[1];
        widgets::metric_card(
            summary,
            "Pages in this audit",
            &overview.pages.to_string(),
            &format!("{} distinct", overview.distinct_pages),
            GOOD,
        );
        summary.add_space(8.0);
        widgets::metric_card(
            summary,
            "Avg. Clarity Score",
            &overview.average_clarity.map_or("–".to_string(), |v| v.to_string()),
            &overview.average_projected.map_or(String::new(), |v| format!("↑ {} projected after fixes", v)),
            ACCENT,
        );
        summary.add_space(8.0);
        widgets::metric_card(
            summary,
            "High-risk pages",
            &overview.high_risk_pages.to_string(),
            "Lowest score under 55",
            widgets::BAD,
        );
    });

    if state.session.phase() == SessionPhase::Empty {
        widgets::empty_prompt(ui);
        return;
    }

    ui.add_space(16.0);
    widgets::section_header(
        ui,
        "Pages in this audit",
        "Select a row to inspect issues, suggested copy, and ROI impact.",
    );
    show_audit_table(ui, state);

    ui.add_space(12.0);
    widgets::page_selector(ui, "dashboard_page_selector", &mut state.session);

    ui.add_space(8.0);
    if ui.button("Open deep analysis ▶").clicked() {
        state.current_screen = Screen::Analysis;
    }

    if let Some(last_run) = state.session.last_run() {
        ui.label(RichText::new(format!("Last run: {}", last_run)).size(12.0).color(MUTED));
    }
}

fn show_audit_table(ui: &mut egui::Ui, state: &mut AppState) {
    let rows = table::table_rows(&state.session);
    let selected = state.session.selected_label().map(str::to_string);
    let mut clicked = None;

    egui::ScrollArea::horizontal()
        .id_source("audit_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("audit_table")
                .num_columns(table::COLUMNS.len())
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for column in table::COLUMNS {
                        ui.label(RichText::new(column).strong());
                    }
                    ui.end_row();

                    for row in &rows {
                        let is_selected = selected.as_deref() == Some(row.label.as_str());
                        if ui.selectable_label(is_selected, row.label.as_str()).clicked() {
                            clicked = Some(row.label.clone());
                        }
                        ui.label(row.clarity.to_string());
                        ui.label(row.next_step_guidance.to_string());
                        ui.label(row.trust_signals.to_string());
                        ui.label(row.accessibility.to_string());
                        ui.label(row.issues.as_str());
                        ui.label(
                            RichText::new(row.risk.as_str())
                                .strong()
                                .color(widgets::risk_color(row.risk)),
                        );
                        ui.label(row.projected_clarity.to_string());
                        ui.end_row();
                    }
                });
        });

    if let Some(label) = clicked {
        state.session.select(&label);
    }
}
