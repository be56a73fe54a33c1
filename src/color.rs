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
            let hsl = Hsl::new(hue, 0.65, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Tint for a salary figure: high salaries red, mid amber, the rest green.
pub fn salary_color(salary: f64) -> Color32 {
    if salary >= 150_000.0 {
        Color32::from_rgb(214, 69, 69)
    } else if salary >= 130_000.0 {
        Color32::from_rgb(212, 146, 44)
    } else {
        Color32::from_rgb(62, 152, 81)
    }
}

// ---------------------------------------------------------------------------
// Campus colour mapping
// ---------------------------------------------------------------------------

/// Maps campus names to distinct colours for badges and chart lines.
#[derive(Debug, Clone)]
pub struct CampusColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CampusColors {
    /// Build the mapping from the campus enumeration.
    pub fn new(campuses: &[String]) -> Self {
        let palette = generate_palette(campuses.len());
        let mapping: BTreeMap<String, Color32> = campuses
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        CampusColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a campus.
    pub fn color_for(&self, campus: &str) -> Color32 {
        self.mapping
            .get(campus)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_yields_distinct_colors() {
        let palette = generate_palette(9);
        assert_eq!(palette.len(), 9);
        let mut unique = palette.clone();
        unique.sort_by_key(|c| (c.r(), c.g(), c.b()));
        unique.dedup();
        assert_eq!(unique.len(), palette.len());
    }

    #[test]
    fn unknown_campus_gets_the_default() {
        let colors = CampusColors::new(&["UC Berkeley".to_string()]);
        assert_eq!(colors.color_for("Stanford"), Color32::GRAY);
        assert_ne!(colors.color_for("UC Berkeley"), Color32::GRAY);
    }

    #[test]
    fn salary_bands() {
        assert_eq!(salary_color(165_000.0), salary_color(150_000.0));
        assert_ne!(salary_color(149_999.0), salary_color(150_000.0));
        assert_ne!(salary_color(118_000.0), salary_color(135_000.0));
    }
}
