use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: year, metric, and country multi-select.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the option lists so we can mutate state inside the loops.
    let years = dataset.years.clone();
    let countries = dataset.country_names.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year selector ----
            ui.strong("Year");
            let current_year = state.selection.year;
            egui::ComboBox::from_id_salt("year")
                .selected_text(current_year.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for &year in &years {
                        if ui
                            .selectable_label(current_year == year, year.to_string())
                            .clicked()
                        {
                            state.set_year(year);
                        }
                    }
                });
            ui.separator();

            // ---- Metric selector ----
            ui.strong("Metric");
            let current_metric = state.selection.metric;
            egui::ComboBox::from_id_salt("metric")
                .selected_text(current_metric.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for metric in [Metric::FertilityRate, Metric::Gdp] {
                        if ui
                            .selectable_label(current_metric == metric, metric.label())
                            .clicked()
                        {
                            state.set_metric(metric);
                        }
                    }
                });
            ui.separator();

            // ---- Country multi-select ----
            let n_selected = state.selection.countries.len();
            let header_text = format!("Countries  ({n_selected}/{})", countries.len());

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("countries")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_countries();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_countries();
                        }
                    });
                    ui.small("Scatter and trend lines follow this list; empty = all.");

                    for name in &countries {
                        let mut checked = state.selection.countries.contains(name);
                        if ui.checkbox(&mut checked, name).changed() {
                            state.toggle_country(name);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} countries, {}–{}",
                ds.len(),
                ds.country_names.len(),
                ds.years.first().copied().unwrap_or_default(),
                ds.years.last().copied().unwrap_or_default()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open indicator dataset")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
