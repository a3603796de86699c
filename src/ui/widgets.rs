// src/ui/widgets.rs
use eframe::egui::{self, Color32, RichText};

use crate::analysis::RiskLevel;
use crate::state::session::SessionStore;

pub const PRIMARY: Color32 = Color32::from_rgb(0xF9, 0xD3, 0x42); // yellow
pub const SECONDARY: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B); // warm orange
pub const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB); // blue

pub const INK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const MUTED: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);
pub const CARD: Color32 = Color32::WHITE;
pub const CARD_STROKE: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
pub const GOOD: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);
pub const WARN: Color32 = Color32::from_rgb(0xB4, 0x53, 0x09);
pub const BAD: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

pub fn risk_color(risk: RiskLevel) -> Color32 {
    match risk {
        RiskLevel::Low => GOOD,
        RiskLevel::Medium => SECONDARY,
        RiskLevel::High => BAD,
    }
}

pub fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).size(18.0).strong());
    ui.label(RichText::new(subtitle).size(13.0).color(MUTED));
    ui.add_space(8.0);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD)
        .rounding(16.0)
        .inner_margin(egui::Margin::same(14.0))
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
}

pub fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, note: &str, note_color: Color32) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).size(14.0).color(MUTED));
        ui.label(RichText::new(value).size(28.0).strong().color(INK));
        ui.label(RichText::new(note).size(12.0).color(note_color));
    });
}

/// Framed text block with a colored marker, used for the before/after copy.
pub fn content_box(ui: &mut egui::Ui, marker: Color32, lines: &[&str]) {
    egui::Frame::none()
        .fill(CARD)
        .rounding(14.0)
        .inner_margin(egui::Margin::same(12.0))
        .stroke(egui::Stroke::new(2.0, marker))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for line in lines {
                ui.label(RichText::new(*line).size(13.0).color(INK));
            }
        });
}

/// Combo box over the submitted labels; picking one goes through `SessionStore::select`.
pub fn page_selector(ui: &mut egui::Ui, id: &str, session: &mut SessionStore) {
    let labels = session.labels().to_vec();
    let current = session.selected_label().unwrap_or_default().to_string();
    let mut choice = None;

    ui.horizontal(|ui| {
        ui.label("Inspect details for:");
        egui::ComboBox::from_id_source(id)
            .selected_text(current.as_str())
            .width(ui.available_width().min(420.0))
            .show_ui(ui, |ui| {
                for label in &labels {
                    if ui.selectable_label(*label == current, label.as_str()).clicked() {
                        choice = Some(label.clone());
                    }
                }
            });
    });

    if let Some(label) = choice {
        session.select(&label);
    }
}

pub fn empty_prompt(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.label(
        RichText::new(
            "Paste at least one URL or page label above and click Run PenTrust demo to populate the dashboard.",
        )
        .size(13.0)
        .color(MUTED),
    );
}
