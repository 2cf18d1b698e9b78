use crate::color::{threshold_color, SeriesColors};
use crate::data::model::Metric;
use crate::data::view::{BarEntry, MapPoint, ScatterPoints, TrendSeries, TrendSet};
use crate::geo::CoordLookup;
use eframe::egui::Color32;

use super::{ChartSpec, Layout, MapSpec, MarkerSpec, Trace, TraceKind, TILE_URL_TEMPLATE};

// ---------------------------------------------------------------------------
// Widget adapters – derived view → renderer input
// ---------------------------------------------------------------------------

/// Marker size in plot points.
const MARKER_RADIUS: f32 = 4.0;

/// Colour of the global-average trend line.
const GLOBAL_TREND_COLOR: Color32 = Color32::from_rgb(66, 110, 224);

/// Map adapter: one threshold-coloured marker per country with a known
/// centroid; countries the lookup does not cover are skipped.
pub fn map_spec(view: &[MapPoint], coords: &impl CoordLookup) -> MapSpec {
    let markers = view
        .iter()
        .filter_map(|point| {
            let pos = coords.coords(&point.code)?;
            Some(MarkerSpec {
                lat: pos.lat,
                lon: pos.lon,
                color: threshold_color(point.value),
                radius: MARKER_RADIUS,
                popup: format!("{}: {:.2}", point.country, point.value),
            })
        })
        .collect();

    MapSpec {
        tile_url: TILE_URL_TEMPLATE.to_string(),
        markers,
    }
}

/// Scatter adapter: a single marker trace, GDP on x, fertility on y,
/// country names as hover text.
pub fn scatter_spec(view: &ScatterPoints) -> ChartSpec {
    ChartSpec {
        traces: vec![Trace {
            name: "Countries".to_string(),
            x: view.gdp.clone(),
            y: view.fertility.iter().map(|&v| Some(v)).collect(),
            text: view.countries.clone(),
            kind: TraceKind::Markers,
            color: None,
        }],
        layout: Layout {
            title: "Fertility vs GDP".to_string(),
            x_label: "GDP per Capita (US$)".to_string(),
            y_label: "Fertility Rate".to_string(),
        },
    }
}

/// Line adapter: the global average first, then one palette-coloured line
/// per selected country.
pub fn line_spec(trends: &TrendSet, metric: Metric) -> ChartSpec {
    let colors = SeriesColors::new(trends.countries.iter().map(|s| s.name.as_str()));

    let mut traces = Vec::with_capacity(trends.countries.len() + 1);
    traces.push(trend_trace(&trends.global, GLOBAL_TREND_COLOR));
    for series in &trends.countries {
        traces.push(trend_trace(series, colors.color_for(&series.name)));
    }

    ChartSpec {
        traces,
        layout: Layout {
            title: "Trends Over Time (Global + Selected Countries)".to_string(),
            x_label: "Year".to_string(),
            y_label: metric.label().to_string(),
        },
    }
}

fn trend_trace(series: &TrendSeries, color: Color32) -> Trace {
    Trace {
        name: series.name.clone(),
        x: series.points.iter().map(|p| p.year as f64).collect(),
        y: series.points.iter().map(|p| p.value).collect(),
        text: Vec::new(),
        kind: TraceKind::Lines,
        color: Some(color),
    }
}

/// Bar adapter: ranked countries on x (by index, labelled through hover
/// text), fertility rate on y.
pub fn bar_spec(view: &[BarEntry]) -> ChartSpec {
    ChartSpec {
        traces: vec![Trace {
            name: "Top 10".to_string(),
            x: (0..view.len()).map(|i| i as f64).collect(),
            y: view.iter().map(|e| Some(e.value)).collect(),
            text: view.iter().map(|e| e.country.clone()).collect(),
            kind: TraceKind::Bars,
            color: None,
        }],
        layout: Layout {
            title: "Top 10 Countries by Fertility Rate".to_string(),
            x_label: "Country".to_string(),
            y_label: "Fertility Rate".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::view::{TrendPoint, TrendSeries};
    use crate::geo::BuiltinCentroids;

    fn point(country: &str, code: &str, value: f64) -> MapPoint {
        MapPoint {
            country: country.to_string(),
            code: code.to_string(),
            value,
        }
    }

    #[test]
    fn map_markers_are_threshold_coloured() {
        let view = vec![point("Angola", "AGO", 6.0), point("Belgium", "BEL", 1.7)];
        let spec = map_spec(&view, &BuiltinCentroids);

        assert_eq!(spec.markers.len(), 2);
        assert_ne!(spec.markers[0].color, spec.markers[1].color);
        assert_eq!(spec.markers[0].popup, "Angola: 6.00");
        assert_eq!(spec.tile_url, TILE_URL_TEMPLATE);
    }

    #[test]
    fn map_skips_unknown_codes() {
        let view = vec![point("Atlantis", "ATL", 3.0), point("Belgium", "BEL", 1.7)];
        let spec = map_spec(&view, &BuiltinCentroids);
        assert_eq!(spec.markers.len(), 1);
        assert_eq!(spec.markers[0].popup, "Belgium: 1.70");
    }

    #[test]
    fn scatter_trace_keeps_vectors_parallel() {
        let view = ScatterPoints {
            gdp: vec![1000.0, 2000.0],
            fertility: vec![2.0, 4.0],
            countries: vec!["A".to_string(), "B".to_string()],
        };
        let spec = scatter_spec(&view);
        let trace = &spec.traces[0];

        assert_eq!(trace.kind, TraceKind::Markers);
        assert_eq!(trace.x, vec![1000.0, 2000.0]);
        assert_eq!(trace.y, vec![Some(2.0), Some(4.0)]);
        assert_eq!(trace.text, vec!["A", "B"]);
        assert_eq!(spec.layout.x_label, "GDP per Capita (US$)");
    }

    #[test]
    fn line_spec_puts_global_first_with_gaps_preserved() {
        let trends = TrendSet {
            global: TrendSeries {
                name: "Global Average".to_string(),
                points: vec![
                    TrendPoint { year: 2014, value: Some(3.0) },
                    TrendPoint { year: 2015, value: Some(2.9) },
                ],
            },
            countries: vec![TrendSeries {
                name: "Belgium".to_string(),
                points: vec![
                    TrendPoint { year: 2014, value: Some(1.7) },
                    TrendPoint { year: 2015, value: None },
                ],
            }],
        };
        let spec = line_spec(&trends, Metric::FertilityRate);

        assert_eq!(spec.traces.len(), 2);
        assert_eq!(spec.traces[0].name, "Global Average");
        assert_eq!(spec.traces[1].y, vec![Some(1.7), None]);
        assert_eq!(spec.layout.y_label, "Fertility Rate");
    }

    #[test]
    fn bar_trace_ranks_by_index() {
        let view = vec![
            BarEntry { country: "B".to_string(), value: 4.0 },
            BarEntry { country: "A".to_string(), value: 2.0 },
        ];
        let spec = bar_spec(&view);
        let trace = &spec.traces[0];

        assert_eq!(trace.kind, TraceKind::Bars);
        assert_eq!(trace.x, vec![0.0, 1.0]);
        assert_eq!(trace.text, vec!["B", "A"]);
    }

    #[test]
    fn empty_views_yield_empty_specs() {
        assert!(map_spec(&[], &BuiltinCentroids).markers.is_empty());
        assert!(scatter_spec(&ScatterPoints::default()).is_empty());
        assert!(bar_spec(&[]).is_empty());
    }
}
