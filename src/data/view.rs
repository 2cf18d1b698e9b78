use std::collections::BTreeSet;

use super::model::{IndicatorRecord, Metric, WorldDataset, GDP_SERIES, YEAR_RANGE};

// ---------------------------------------------------------------------------
// Selection – the three user-controlled filters
// ---------------------------------------------------------------------------

/// How many countries the checklist pre-selects after a load.
pub const DEFAULT_COUNTRY_COUNT: usize = 10;

/// How many rows the top-N ranking shows.
pub const BAR_TOP_N: usize = 10;

/// The current filter selections, passed by reference into every
/// derivation. Mutated only by the filter controller in `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub metric: Metric,
    /// Selected country names. An *empty* set means "no country
    /// restriction" for the views that honour it, not "no countries".
    pub countries: BTreeSet<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            year: YEAR_RANGE.0,
            metric: Metric::FertilityRate,
            countries: BTreeSet::new(),
        }
    }
}

impl Selection {
    /// Defaults for a freshly loaded dataset: earliest year present,
    /// fertility rate, first ten distinct countries in load order.
    pub fn seeded(dataset: &WorldDataset) -> Self {
        Selection {
            year: dataset.years.first().copied().unwrap_or(YEAR_RANGE.0),
            metric: Metric::FertilityRate,
            countries: dataset
                .country_names
                .iter()
                .take(DEFAULT_COUNTRY_COUNT)
                .cloned()
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// View types – one per widget
// ---------------------------------------------------------------------------

/// One country marker for the map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub country: String,
    /// ISO-3 code, resolved to coordinates by the map adapter.
    pub code: String,
    pub value: f64,
}

/// Parallel vectors for the GDP-vs-fertility scatter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterPoints {
    pub gdp: Vec<f64>,
    pub fertility: Vec<f64>,
    pub countries: Vec<String>,
}

/// One point of a trend series. `None` is a gap, never interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub value: Option<f64>,
}

/// A named year-ordered series for the line chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

/// The line-chart view: the global average plus one series per selected
/// country.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSet {
    pub global: TrendSeries,
    pub countries: Vec<TrendSeries>,
}

/// One ranked row of the top-N bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub country: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Derivations – pure functions from (records, selection) to a view
// ---------------------------------------------------------------------------

/// Map view: rows of the selected year projected to the selected metric,
/// rows without a value excluded. Output order = filtered input order.
pub fn map_view(records: &[IndicatorRecord], sel: &Selection) -> Vec<MapPoint> {
    records
        .iter()
        .filter(|r| r.year == sel.year)
        .filter_map(|r| {
            let value = sel.metric.value_of(r)?;
            Some(MapPoint {
                country: r.country_name.clone(),
                code: r.country_code.clone(),
                value,
            })
        })
        .collect()
}

/// Scatter view: GDP-series rows of the selected year, restricted to the
/// selected countries only when that set is non-empty, projected to
/// parallel vectors for rows where both values are present.
pub fn scatter_view(records: &[IndicatorRecord], sel: &Selection) -> ScatterPoints {
    let mut out = ScatterPoints::default();
    for rec in records {
        if rec.year != sel.year || rec.series_label != GDP_SERIES {
            continue;
        }
        if !sel.countries.is_empty() && !sel.countries.contains(&rec.country_name) {
            continue;
        }
        let (Some(gdp), Some(fertility)) = (rec.gdp, rec.fertility_rate) else {
            continue;
        };
        out.gdp.push(gdp);
        out.fertility.push(fertility);
        out.countries.push(rec.country_name.clone());
    }
    out
}

/// Line view: the global per-year average of the selected metric plus one
/// per-country series for each selected country.
///
/// The global series has exactly one point per distinct year in the
/// dataset; a year where every row lacks the metric yields a gap. Country
/// series cover only the years that country has rows for, taking the
/// first non-missing value per year (rows appear once per source series).
pub fn line_view(records: &[IndicatorRecord], sel: &Selection) -> TrendSet {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();

    let global = TrendSeries {
        name: "Global Average".to_string(),
        points: years
            .iter()
            .map(|&year| TrendPoint {
                year,
                value: mean(
                    records
                        .iter()
                        .filter(|r| r.year == year)
                        .filter_map(|r| sel.metric.value_of(r)),
                ),
            })
            .collect(),
    };

    let countries = sel
        .countries
        .iter()
        .map(|name| {
            let rows: Vec<&IndicatorRecord> = records
                .iter()
                .filter(|r| &r.country_name == name)
                .collect();
            let country_years: BTreeSet<i32> = rows.iter().map(|r| r.year).collect();
            TrendSeries {
                name: name.clone(),
                points: country_years
                    .iter()
                    .map(|&year| TrendPoint {
                        year,
                        value: rows
                            .iter()
                            .filter(|r| r.year == year)
                            .find_map(|r| sel.metric.value_of(r)),
                    })
                    .collect(),
            }
        })
        .collect();

    TrendSet { global, countries }
}

/// Bar view: top-N countries of the selected year ranked by fertility
/// rate, descending, ties kept in input order.
///
/// The ranking only exists for the fertility metric; with GDP selected it
/// is deliberately empty and the widget shows its empty state.
pub fn bar_view(records: &[IndicatorRecord], sel: &Selection) -> Vec<BarEntry> {
    if sel.metric != Metric::FertilityRate {
        return Vec::new();
    }

    let mut rows: Vec<BarEntry> = records
        .iter()
        .filter(|r| r.year == sel.year)
        .filter_map(|r| {
            Some(BarEntry {
                country: r.country_name.clone(),
                value: r.fertility_rate?,
            })
        })
        .collect();

    // sort_by is stable, so equal rates keep their input order.
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows.truncate(BAR_TOP_N);
    rows
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
