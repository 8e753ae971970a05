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
// Curve position → Color32
// ---------------------------------------------------------------------------

/// Colours for the curves currently on the chart, by drawing position.
#[derive(Debug, Clone, Default)]
pub struct CurvePalette {
    colors: Vec<Color32>,
}

impl CurvePalette {
    /// One evenly spaced hue per curve.
    pub fn new(n_curves: usize) -> Self {
        CurvePalette {
            colors: generate_palette(n_curves),
        }
    }

    /// Colour of the `position`-th curve; wraps around past the end.
    pub fn color_for(&self, position: usize) -> Color32 {
        if self.colors.is_empty() {
            return Color32::LIGHT_BLUE;
        }
        self.colors[position % self.colors.len()]
    }
}
