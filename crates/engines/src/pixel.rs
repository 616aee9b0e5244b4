//! Pure-computation pixel buffer conversion from [`Field`] + [`Palette`].
//!
//! Always available (no feature gate) so callers without the `png` feature
//! can still rasterize.

use drift_core::field::Field;
use drift_core::palette::Palette;

/// Maps field values through a palette to produce an RGBA8 pixel buffer.
///
/// Each value `t` is sampled from the palette and written as four bytes
/// (R, G, B, 255). The buffer length is `width * height * 4`.
pub fn field_to_rgba(field: &Field, palette: &Palette) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&t| palette.sample(t).to_rgba8())
        .collect()
}
