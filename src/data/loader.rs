use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{IndicatorRecord, WorldDataset, YEAR_RANGE};

// ---------------------------------------------------------------------------
// LoadError – everything that can go wrong bringing the dataset in
// ---------------------------------------------------------------------------

/// Failure to load the backing dataset resource. Fatal to the load, not to
/// the application: the UI keeps its previous state and shows the message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path:?}: {source:#}")]
    Parse {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the indicator dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "Country Name": ..., "Country Code": ..., "Year": ...,
///   "Fertility Rate": ..., "GDP": ..., "Series Name_y": ... }, ...]`
///   (the shape the BigQuery export pipeline writes)
/// * `.csv`  – header row with the same column names
pub fn load_file(path: &Path) -> Result<WorldDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match ext.as_str() {
        "json" => parse_json(&text),
        "csv" => parse_csv(&text),
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    }
    .map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let out_of_range = records
        .iter()
        .filter(|r| r.year < YEAR_RANGE.0 || r.year > YEAR_RANGE.1)
        .count();
    if out_of_range > 0 {
        log::warn!(
            "{out_of_range} rows fall outside the expected {}–{} year range",
            YEAR_RANGE.0,
            YEAR_RANGE.1
        );
    }

    Ok(WorldDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row schema
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. Column names follow the
/// World-Bank export; absent numerics stay `None`, never zero.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Country Name")]
    country_name: String,
    #[serde(rename = "Country Code")]
    country_code: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Fertility Rate", default)]
    fertility_rate: Option<f64>,
    #[serde(rename = "GDP", default)]
    gdp: Option<f64>,
    #[serde(rename = "Series Name_y", default)]
    series_label: String,
}

impl From<RawRow> for IndicatorRecord {
    fn from(raw: RawRow) -> Self {
        IndicatorRecord {
            country_name: raw.country_name,
            country_code: raw.country_code,
            year: raw.year,
            fertility_rate: raw.fertility_rate,
            gdp: raw.gdp,
            series_label: raw.series_label,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

fn parse_json(text: &str) -> anyhow::Result<Vec<IndicatorRecord>> {
    let rows: Vec<JsonValue> = serde_json::from_str(text)
        .context("expected a top-level JSON array of row objects")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, raw) in rows.into_iter().enumerate() {
        let row: RawRow =
            serde_json::from_value(raw).with_context(|| format!("row {i}"))?;
        records.push(row.into());
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Same columns as the JSON shape; empty cells read as missing values.
fn parse_csv(text: &str) -> anyhow::Result<Vec<IndicatorRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = result.with_context(|| format!("row {i}"))?;
        records.push(row.into());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(ext: &str, contents: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.into_temp_path()
    }

    const SAMPLE_JSON: &str = r#"[
        {"Country Name": "Aruba", "Country Code": "ABW", "Year": 2014,
         "Fertility Rate": 1.8,
         "Series Name_y": "Fertility rate, total (births per woman)"},
        {"Country Name": "Aruba", "Country Code": "ABW", "Year": 2014,
         "Fertility Rate": 1.8, "GDP": 26893.0,
         "Series Name_y": "GDP per capita (current US$)"},
        {"Country Name": "Chad", "Country Code": "TCD", "Year": 2014,
         "Series Name_y": "GDP per capita (current US$)"}
    ]"#;

    #[test]
    fn loads_json_rows() {
        let path = write_temp("json", SAMPLE_JSON);
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.country_names, vec!["Aruba", "Chad"]);
        assert_eq!(ds.years, vec![2014]);

        let gdp_row = &ds.records[1];
        assert_eq!(gdp_row.country_code, "ABW");
        assert_eq!(gdp_row.gdp, Some(26893.0));
        assert_eq!(gdp_row.series_label, "GDP per capita (current US$)");

        // Absent numerics stay None.
        assert_eq!(ds.records[0].gdp, None);
        assert_eq!(ds.records[2].fertility_rate, None);
        assert_eq!(ds.records[2].gdp, None);
    }

    #[test]
    fn loads_csv_rows() {
        let csv = "\
Country Name,Country Code,Year,Fertility Rate,GDP,Series Name_y
Aruba,ABW,2014,1.8,,\"Fertility rate, total (births per woman)\"
Aruba,ABW,2014,1.8,26893.0,GDP per capita (current US$)
Chad,TCD,2015,,,GDP per capita (current US$)
";
        let path = write_temp("csv", csv);
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years, vec![2014, 2015]);
        assert_eq!(ds.records[0].gdp, None);
        assert_eq!(ds.records[1].gdp, Some(26893.0));
        assert_eq!(ds.records[2].fertility_rate, None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = write_temp("json", "{\"not\": \"an array\"}");
        match load_file(&path) {
            Err(LoadError::Parse { .. }) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("parquet", "");
        match load_file(&path) {
            Err(LoadError::UnsupportedFormat(ext)) => assert_eq!(ext, "parquet"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match load_file(Path::new("/nonexistent/data.json")) {
            Err(LoadError::Io { .. }) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
