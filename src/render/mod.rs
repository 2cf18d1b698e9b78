/// Rendering ports: the plain data exchanged between widget adapters and
/// the egui-backed renderers in `ui::widgets`.
///
/// Derivations and adapters know nothing about the plotting library;
/// swapping it out only touches the renderer side of these types.

pub mod adapter;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Map port
// ---------------------------------------------------------------------------

/// Base tile layer the map renderer is expected to draw under the markers.
/// The egui renderer only surfaces it as attribution; a tile-capable
/// renderer would fetch from it.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// One coloured marker on the world view.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub color: Color32,
    pub radius: f32,
    /// Hover / popup text, "Country: value".
    pub popup: String,
}

/// Everything the map renderer consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapSpec {
    pub tile_url: String,
    pub markers: Vec<MarkerSpec>,
}

// ---------------------------------------------------------------------------
// Chart port
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Markers,
    Lines,
    Bars,
}

/// One series of a chart. `y` entries of `None` are gaps (missing data);
/// line renderers must break the stroke there instead of interpolating.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<Option<f64>>,
    /// Per-point hover text; empty when `name` is enough.
    pub text: Vec<String>,
    pub kind: TraceKind,
    pub color: Option<Color32>,
}

impl Trace {
    /// Contiguous runs of present points, split at gaps.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for (&x, y) in self.x.iter().zip(&self.y) {
            match y {
                Some(y) => current.push([x, *y]),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Axis titles and chart title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// A full chart: trace list plus layout, redrawn wholesale on each call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSpec {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// True when there is nothing to draw and the renderer should show its
    /// empty state.
    pub fn is_empty(&self) -> bool {
        self.traces
            .iter()
            .all(|t| t.y.iter().all(|y| y.is_none()))
    }
}
