// src/ui/sidebar.rs
use eframe::egui::{self, RichText};

use crate::state::{AppState, Screen};
use crate::ui::widgets::{INK, MUTED};

pub fn show_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.label(RichText::new("🩺 PenTrust").size(20.0).strong().color(INK));
    ui.label(RichText::new("Healthcare Content Clarity Analyzer").size(12.0).color(INK));
    ui.add_space(16.0);

    // Tab selection using buttons
    let tabs = [
        (Screen::Dashboard, "📊 Dashboard"),
        (Screen::Analysis, "🧪 Analysis"),
    ];

    for (screen, label) in tabs {
        let text = RichText::new(label).size(15.0).strong().color(INK);
        if ui.selectable_label(state.current_screen == screen, text).clicked() {
            state.current_screen = screen;
        }
        ui.add_space(6.0);
    }

    ui.add_space(18.0);
    ui.label(
        RichText::new("Designed for UX & content teams auditing healthcare portals, apps, and messages.")
            .size(12.0)
            .color(MUTED),
    );

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(8.0);
        let pages = state.session.labels().len();
        ui.label(RichText::new(format!("{} pages in session", pages)).size(11.0).color(MUTED));
    });
}
