use eframe::egui;

use crate::geo::BuiltinCentroids;
use crate::render::adapter;
use crate::state::AppState;
use crate::ui::{panels, widgets};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DemographApp {
    pub state: AppState,
    /// Coordinate source for the map adapter.
    pub centroids: BuiltinCentroids,
}

impl Default for DemographApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            centroids: BuiltinCentroids,
        }
    }
}

impl eframe::App for DemographApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 2×2 widget grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard(ui);
        });
    }
}

impl DemographApp {
    fn dashboard(&self, ui: &mut egui::Ui) {
        if self.state.dataset.is_none() {
            ui.centered_and_justified(|ui: &mut egui::Ui| {
                ui.heading("Open a dataset to begin  (File → Open…)");
            });
            return;
        }

        let views = &self.state.views;
        let map = adapter::map_spec(&views.map, &self.centroids);
        let scatter = adapter::scatter_spec(&views.scatter);
        let trends = adapter::line_spec(&views.trends, self.state.selection.metric);
        let bar = adapter::bar_spec(&views.bar);

        let spacing = ui.spacing().item_spacing;
        let cell = egui::vec2(
            (ui.available_width() - spacing.x) / 2.0,
            (ui.available_height() - spacing.y) / 2.0,
        );

        ui.horizontal(|ui: &mut egui::Ui| {
            ui.allocate_ui(cell, |ui: &mut egui::Ui| {
                widgets::map_widget(ui, &map);
            });
            ui.allocate_ui(cell, |ui: &mut egui::Ui| {
                widgets::chart_widget(ui, "scatter_widget", &scatter);
            });
        });
        ui.horizontal(|ui: &mut egui::Ui| {
            ui.allocate_ui(cell, |ui: &mut egui::Ui| {
                widgets::chart_widget(ui, "line_widget", &trends);
            });
            ui.allocate_ui(cell, |ui: &mut egui::Ui| {
                widgets::chart_widget(ui, "bar_widget", &bar);
            });
        });
    }
}
