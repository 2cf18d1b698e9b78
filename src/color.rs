use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Marker threshold colors
// ---------------------------------------------------------------------------

/// Two-bucket threshold on the selected metric's value; markers above it
/// are drawn "hot", the rest "cool".
pub const MARKER_THRESHOLD: f64 = 4.0;

const MARKER_HIGH: Color32 = Color32::from_rgb(214, 69, 65);
const MARKER_LOW: Color32 = Color32::from_rgb(46, 160, 94);

/// Marker colour for a metric value.
pub fn threshold_color(value: f64) -> Color32 {
    if value > MARKER_THRESHOLD {
        MARKER_HIGH
    } else {
        MARKER_LOW
    }
}

// ---------------------------------------------------------------------------
// Series colors: country name → Color32
// ---------------------------------------------------------------------------

/// Assigns each named series a stable colour from the generated palette.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeriesColors {
    /// Build a colour assignment for the given series names.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        let palette = generate_palette(names.len());
        let mapping: BTreeMap<String, Color32> = names
            .into_iter()
            .zip(palette)
            .map(|(name, color)| (name.to_string(), color))
            .collect();

        SeriesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a series name.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_buckets_split_at_four() {
        assert_eq!(threshold_color(4.1), MARKER_HIGH);
        assert_eq!(threshold_color(4.0), MARKER_LOW);
        assert_eq!(threshold_color(1.3), MARKER_LOW);
    }

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(8);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_series_falls_back_to_gray() {
        let colors = SeriesColors::new(["Angola"]);
        assert_eq!(colors.color_for("Belgium"), Color32::GRAY);
        assert_ne!(colors.color_for("Angola"), Color32::GRAY);
    }
}
