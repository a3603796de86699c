// src/app.rs
use eframe::egui;

use crate::config::Settings;
use crate::state::{AppState, Screen};
use crate::ui::widgets::PRIMARY;

pub struct PenTrustApp {
    state: AppState,
}

impl PenTrustApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let visuals = if settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        let state = AppState::new(settings);
        log::info!("opened session {}", state.session.id());

        Self { state }
    }
}

impl eframe::App for PenTrustApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(220.0)
            .frame(egui::Frame::none().fill(PRIMARY).inner_margin(egui::Margin::same(14.0)))
            .show(ctx, |ui| {
                crate::ui::sidebar::show_sidebar(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| match self.state.current_screen {
                    Screen::Dashboard => {
                        crate::ui::dashboard::show_dashboard_view(ui, &mut self.state);
                    }
                    Screen::Analysis => {
                        crate::ui::analysis::show_analysis_view(ui, &mut self.state);
                    }
                });
        });
    }
}
