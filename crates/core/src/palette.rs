//! Palette of sRGB color stops, sampled by piecewise-linear interpolation.
//!
//! Frames are rasterized by mapping each cell value in [0, 1] through a
//! palette. Binary occupancy frames only ever hit the two end stops.

use crate::color::Srgb;
use crate::error::EngineError;

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["viridis", "monochrome", "ocean", "fire"];

/// A palette of evenly spaced sRGB color stops.
///
/// `sample(0.0)` returns the first stop, `sample(1.0)` returns the last.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a new palette from a vector of colors. Requires at least one color.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, EngineError> {
        if colors.is_empty() {
            return Err(EngineError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, EngineError> {
        let colors = hexes
            .iter()
            .map(|h| Srgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "viridis" => Self::from_hex(&["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]),
            "monochrome" => Self::from_hex(&["#000000", "#ffffff"]),
            "ocean" => Self::from_hex(&["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"]),
            "fire" => Self::from_hex(&["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"]),
            other => Err(EngineError::InvalidPalette(format!(
                "unknown palette '{other}' (expected one of: {})",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// Names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Samples the palette at parameter `t`, clamped to [0, 1]. NaN samples the first stop.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }

        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;
        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }
}

impl Default for Palette {
    /// Viridis, matching the default colormap of common plotting tools.
    fn default() -> Self {
        Self::from_name("viridis").expect("viridis palette hex values are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_with_empty_vec_returns_error() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(EngineError::InvalidPalette(_))
        ));
    }

    #[test]
    fn from_hex_propagates_color_errors() {
        assert!(matches!(
            Palette::from_hex(&["#000000", "nope"]),
            Err(EngineError::InvalidColor(_))
        ));
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Palette::list_names() {
            let palette = Palette::from_name(name).unwrap();
            assert!(palette.len() >= 2, "{name} should have at least 2 stops");
        }
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = Palette::from_name("plasma").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("plasma") && msg.contains("viridis"), "{msg}");
    }

    #[test]
    fn default_is_viridis_endpoints() {
        let palette = Palette::default();
        assert_eq!(palette.sample(0.0).to_hex(), "#440154");
        assert_eq!(palette.sample(1.0).to_hex(), "#fde725");
    }

    #[test]
    fn sample_interpolates_between_stops() {
        let palette = Palette::from_name("monochrome").unwrap();
        let mid = palette.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sample_clamps_and_handles_nan() {
        let palette = Palette::default();
        assert_eq!(palette.sample(-3.0), palette.sample(0.0));
        assert_eq!(palette.sample(7.0), palette.sample(1.0));
        assert_eq!(palette.sample(f64::NAN), palette.sample(0.0));
    }

    #[test]
    fn single_color_palette_returns_that_color() {
        let palette = Palette::from_hex(&["#21918c"]).unwrap();
        assert_eq!(palette.sample(0.3).to_hex(), "#21918c");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample_always_produces_unit_components(t in -2.0_f64..3.0) {
                for name in Palette::list_names() {
                    let c = Palette::from_name(name).unwrap().sample(t);
                    prop_assert!((0.0..=1.0).contains(&c.r));
                    prop_assert!((0.0..=1.0).contains(&c.g));
                    prop_assert!((0.0..=1.0).contains(&c.b));
                }
            }
        }
    }
}
