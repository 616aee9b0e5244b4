//! CPU-side PNG rendering of a [`Field`].
//!
//! Feature-gated behind `png` (default on). The pixel conversion itself
//! lives in [`crate::pixel`].

use drift_core::error::EngineError;
use drift_core::field::Field;
use drift_core::palette::Palette;
use std::path::Path;

use crate::pixel::field_to_rgba;

/// Writes a field as a PNG image, one pixel per cell, mapping values through `palette`.
///
/// Returns `EngineError::InvalidDimensions` if the field dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(field: &Field, palette: &Palette, path: &Path) -> Result<(), EngineError> {
    let rgba = field_to_rgba(field, palette);
    let w = u32::try_from(field.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))
}
