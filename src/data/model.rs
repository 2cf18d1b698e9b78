use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Metric – which indicator the dashboard is currently showing
// ---------------------------------------------------------------------------

/// Series label identifying the GDP-per-capita rows in the source table.
pub const GDP_SERIES: &str = "GDP per capita (current US$)";

/// First and last year the dataset is expected to cover.
pub const YEAR_RANGE: (i32, i32) = (2014, 2024);

/// The user-selectable indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    FertilityRate,
    Gdp,
}

impl Metric {
    /// Read this metric's value off a record. `None` means the row has no
    /// usable value and must stay out of aggregates and plots.
    pub fn value_of(&self, rec: &IndicatorRecord) -> Option<f64> {
        match self {
            Metric::FertilityRate => rec.fertility_rate,
            Metric::Gdp => rec.gdp,
        }
    }

    /// Axis / legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::FertilityRate => "Fertility Rate",
            Metric::Gdp => "GDP per Capita (US$)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// IndicatorRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single country-year-series row.
///
/// The source table mixes several World-Bank series in one flat array;
/// `series_label` disambiguates which series a row belongs to. `gdp` is
/// only populated on rows labelled [`GDP_SERIES`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub country_name: String,
    /// ISO-3 alpha code.
    pub country_code: String,
    pub year: i32,
    pub fertility_rate: Option<f64>,
    pub gdp: Option<f64>,
    pub series_label: String,
}

// ---------------------------------------------------------------------------
// WorldDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
///
/// Populated once per load and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WorldDataset {
    /// All rows, in file order.
    pub records: Vec<IndicatorRecord>,
    /// Distinct country names in first-occurrence order. Seeds the default
    /// country selection and orders the filter checklist.
    pub country_names: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
}

impl WorldDataset {
    /// Build the country / year indices from the loaded rows.
    pub fn from_records(records: Vec<IndicatorRecord>) -> Self {
        let mut country_names: Vec<String> = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();

        for rec in &records {
            if seen.insert(rec.country_name.clone()) {
                country_names.push(rec.country_name.clone());
            }
            years.insert(rec.year);
        }

        WorldDataset {
            records,
            country_names,
            years: years.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, year: i32) -> IndicatorRecord {
        IndicatorRecord {
            country_name: name.to_string(),
            country_code: name.to_ascii_uppercase(),
            year,
            fertility_rate: Some(2.0),
            gdp: None,
            series_label: "Fertility rate, total (births per woman)".to_string(),
        }
    }

    #[test]
    fn country_index_keeps_first_occurrence_order() {
        let ds = WorldDataset::from_records(vec![
            rec("Zimbabwe", 2014),
            rec("Albania", 2014),
            rec("Zimbabwe", 2015),
            rec("Mexico", 2015),
        ]);
        assert_eq!(ds.country_names, vec!["Zimbabwe", "Albania", "Mexico"]);
    }

    #[test]
    fn year_index_is_distinct_and_ascending() {
        let ds = WorldDataset::from_records(vec![
            rec("A", 2016),
            rec("B", 2014),
            rec("C", 2016),
            rec("D", 2015),
        ]);
        assert_eq!(ds.years, vec![2014, 2015, 2016]);
    }
}
