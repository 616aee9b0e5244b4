//! Two-dimensional scalar field with toroidal addressing.
//!
//! A `Field` stores `width * height` f64 values using row-major layout
//! (`index = y * width + x`). Coordinate access through [`Field::get`] and
//! [`Field::set`] is toroidal, so negative and overflowing indices are valid
//! and resolve to the opposite edge.

use crate::error::EngineError;

/// A 2D scalar field with toroidal coordinate wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Validates dimensions and returns the cell count.
fn cell_count(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Self::filled(width, height, 0.0)
    }

    /// Creates a field filled with `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, EngineError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a field by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, EngineError> {
        let len = cell_count(width, height)?;
        let data = (0..len).map(|i| f(i % width, i / width)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, EngineError> {
        let expected = cell_count(width, height)?;
        if data.len() != expected {
            return Err(EngineError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Converts signed coordinates to a flat index using toroidal wrapping.
    fn index(&self, x: isize, y: isize) -> usize {
        let xi = x.rem_euclid(self.width as isize) as usize;
        let yi = y.rem_euclid(self.height as isize) as usize;
        yi * self.width + xi
    }

    /// Gets the value at `(x, y)` with toroidal wrapping.
    pub fn get(&self, x: isize, y: isize) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Sets the value at `(x, y)` with toroidal wrapping.
    pub fn set(&mut self, x: isize, y: isize, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Returns `(min, max)` over all values.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Returns true if both fields have the same width and height.
    pub fn same_shape(&self, other: &Field) -> bool {
        self.width == other.width && self.height == other.height
    }
}
