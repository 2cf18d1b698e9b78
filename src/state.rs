use std::path::Path;

use crate::data::loader::{self, LoadError};
use crate::data::model::{Metric, WorldDataset};
use crate::data::view::{self, BarEntry, MapPoint, ScatterPoints, Selection, TrendSet};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which filter changed. Year and metric changes touch all four widgets;
/// country-set changes touch only the scatter and line views — the map
/// and bar widgets intentionally ignore the country selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Year,
    Metric,
    Countries,
}

/// The cached derivation output per widget, rebuilt on filter changes and
/// read every frame by the renderers.
#[derive(Debug, Clone, Default)]
pub struct WidgetViews {
    pub map: Vec<MapPoint>,
    pub scatter: ScatterPoints,
    pub trends: TrendSet,
    pub bar: Vec<BarEntry>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Read-only once set.
    pub dataset: Option<WorldDataset>,

    /// The three user-controlled filters.
    pub selection: Selection,

    /// Cached views for the four widgets.
    pub views: WidgetViews,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection::default(),
            views: WidgetViews::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a dataset file, surfacing failures in the status line instead
    /// of leaving the window silently blank.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows, {} countries, years {:?}",
                    dataset.len(),
                    dataset.country_names.len(),
                    dataset.years
                );
                self.set_dataset(dataset);
            }
            Err(e) => self.report_load_error(e),
        }
    }

    fn report_load_error(&mut self, e: LoadError) {
        log::error!("Failed to load dataset: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }

    /// Ingest a newly loaded dataset, seed the default selection, and
    /// derive all four views.
    pub fn set_dataset(&mut self, dataset: WorldDataset) {
        self.selection = Selection::seeded(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild(FilterChange::Year);
    }

    /// Re-derive the cached views that depend on the changed filter.
    pub fn rebuild(&mut self, change: FilterChange) {
        let Some(dataset) = &self.dataset else {
            self.views = WidgetViews::default();
            return;
        };
        let records = &dataset.records;

        match change {
            FilterChange::Year | FilterChange::Metric => {
                self.views.map = view::map_view(records, &self.selection);
                self.views.scatter = view::scatter_view(records, &self.selection);
                self.views.trends = view::line_view(records, &self.selection);
                self.views.bar = view::bar_view(records, &self.selection);
            }
            FilterChange::Countries => {
                self.views.scatter = view::scatter_view(records, &self.selection);
                self.views.trends = view::line_view(records, &self.selection);
            }
        }
    }

    // ---- Filter controller entry points -----------------------------------

    pub fn set_year(&mut self, year: i32) {
        if self.selection.year != year {
            self.selection.year = year;
            self.rebuild(FilterChange::Year);
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        if self.selection.metric != metric {
            self.selection.metric = metric;
            self.rebuild(FilterChange::Metric);
        }
    }

    /// Toggle a single country in the selection.
    pub fn toggle_country(&mut self, name: &str) {
        if !self.selection.countries.remove(name) {
            self.selection.countries.insert(name.to_string());
        }
        self.rebuild(FilterChange::Countries);
    }

    /// Select every country in the dataset.
    pub fn select_all_countries(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.countries = ds.country_names.iter().cloned().collect();
            self.rebuild(FilterChange::Countries);
        }
    }

    /// Clear the country selection. The scatter view treats an empty set
    /// as "no restriction"; the line chart drops to the global series.
    pub fn select_no_countries(&mut self) {
        self.selection.countries.clear();
        self.rebuild(FilterChange::Countries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{IndicatorRecord, GDP_SERIES};

    fn rec(name: &str, year: i32, fertility: f64, gdp: f64) -> IndicatorRecord {
        IndicatorRecord {
            country_name: name.to_string(),
            country_code: name.to_ascii_uppercase(),
            year,
            fertility_rate: Some(fertility),
            gdp: Some(gdp),
            series_label: GDP_SERIES.to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(WorldDataset::from_records(vec![
            rec("ago", 2014, 6.0, 5100.0),
            rec("bel", 2014, 1.7, 47700.0),
            rec("ago", 2015, 5.9, 4100.0),
            rec("bel", 2015, 1.7, 44800.0),
        ]));
        state
    }

    #[test]
    fn set_dataset_seeds_selection_and_views() {
        let state = loaded_state();
        assert_eq!(state.selection.year, 2014);
        assert_eq!(state.selection.metric, Metric::FertilityRate);
        assert_eq!(state.selection.countries.len(), 2);
        assert_eq!(state.views.map.len(), 2);
        assert_eq!(state.views.bar.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn country_changes_leave_map_and_bar_untouched() {
        let mut state = loaded_state();
        let map_before = state.views.map.clone();
        let bar_before = state.views.bar.clone();

        state.toggle_country("ago");

        assert_eq!(state.views.map, map_before);
        assert_eq!(state.views.bar, bar_before);
        assert_eq!(state.views.scatter.countries, vec!["bel"]);
        assert_eq!(state.views.trends.countries.len(), 1);
    }

    #[test]
    fn year_change_rebuilds_everything() {
        let mut state = loaded_state();
        state.set_year(2015);

        assert!(state.views.map.iter().all(|p| p.value != 6.0));
        assert_eq!(state.views.bar[0].value, 5.9);
        assert_eq!(state.views.scatter.gdp, vec![4100.0, 44800.0]);
    }

    #[test]
    fn metric_change_empties_the_bar_ranking() {
        let mut state = loaded_state();
        state.set_metric(Metric::Gdp);

        assert!(state.views.bar.is_empty());
        assert_eq!(state.views.map.len(), 2);
        assert_eq!(state.views.map[0].value, 5100.0);
    }

    #[test]
    fn clearing_countries_unfilters_the_scatter() {
        let mut state = loaded_state();
        state.select_no_countries();

        assert!(state.selection.countries.is_empty());
        assert_eq!(state.views.scatter.countries.len(), 2);
        assert!(state.views.trends.countries.is_empty());
    }

    #[test]
    fn load_failure_sets_a_visible_message() {
        let mut state = AppState::default();
        state.load_path(Path::new("/nonexistent/data.json"));

        assert!(state.dataset.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.starts_with("Error:"), "unexpected message: {msg}");
    }
}
