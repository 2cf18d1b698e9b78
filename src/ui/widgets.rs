use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::render::{ChartSpec, MapSpec, Trace, TraceKind};

// ---------------------------------------------------------------------------
// Widget renderers – consume port specs, draw with egui_plot
// ---------------------------------------------------------------------------

/// World view: one coloured dot per country marker on a lat/lon plane.
pub fn map_widget(ui: &mut Ui, spec: &MapSpec) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("World View");
        // Tile layer is attribution-only here; a tile-capable renderer
        // would fetch from this template.
        ui.small(format!("Basemap: {}", spec.tile_url));
    });
    if spec.markers.is_empty() {
        empty_state(ui);
        return;
    }

    Plot::new("map_widget")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-75.0)
        .include_y(80.0)
        .show(ui, |plot_ui| {
            for marker in &spec.markers {
                let points: PlotPoints = vec![[marker.lon, marker.lat]].into();
                plot_ui.points(
                    Points::new(points)
                        .name(&marker.popup)
                        .color(marker.color)
                        .filled(true)
                        .shape(MarkerShape::Circle)
                        .radius(marker.radius),
                );
            }
        });
}

/// Generic chart renderer: draws every trace of a [`ChartSpec`].
pub fn chart_widget(ui: &mut Ui, id: &str, spec: &ChartSpec) {
    ui.strong(&spec.layout.title);
    if spec.is_empty() {
        empty_state(ui);
        return;
    }

    let mut plot = Plot::new(id.to_string())
        .x_axis_label(&spec.layout.x_label)
        .y_axis_label(&spec.layout.y_label);
    if spec.traces.len() > 1 {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for trace in &spec.traces {
            let color = trace.color.unwrap_or(Color32::LIGHT_BLUE);
            match trace.kind {
                TraceKind::Lines => {
                    // One Line per contiguous run; same-name runs share a
                    // legend entry.
                    for segment in trace.segments() {
                        let points: PlotPoints = segment.into();
                        plot_ui.line(
                            Line::new(points)
                                .name(&trace.name)
                                .color(color)
                                .width(1.5),
                        );
                    }
                }
                TraceKind::Markers => {
                    if trace.text.is_empty() {
                        let points: PlotPoints = present_points(trace).into();
                        plot_ui.points(
                            Points::new(points)
                                .name(&trace.name)
                                .color(color)
                                .radius(3.0),
                        );
                    } else {
                        // Per-point names so hovering shows the country.
                        for ((&x, y), label) in
                            trace.x.iter().zip(&trace.y).zip(&trace.text)
                        {
                            let Some(y) = y else { continue };
                            let points: PlotPoints = vec![[x, *y]].into();
                            plot_ui.points(
                                Points::new(points)
                                    .name(label)
                                    .color(color)
                                    .radius(3.0),
                            );
                        }
                    }
                }
                TraceKind::Bars => {
                    let bars: Vec<Bar> = trace
                        .x
                        .iter()
                        .zip(&trace.y)
                        .zip(&trace.text)
                        .filter_map(|((&x, y), label)| {
                            Some(Bar::new(x, (*y)?).name(label))
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).name(&trace.name).color(color));
                }
            }
        }
    });
}

fn present_points(trace: &Trace) -> Vec<[f64; 2]> {
    trace
        .x
        .iter()
        .zip(&trace.y)
        .filter_map(|(&x, y)| Some([x, (*y)?]))
        .collect()
}

fn empty_state(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label("No data for the current selection");
    });
}
