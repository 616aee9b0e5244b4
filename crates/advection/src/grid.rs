//! Square occupancy grid with signed toroidal addressing.

use crate::cell::Cell;
use drift_core::error::EngineError;
use drift_core::field::Field;
use drift_core::prng::RandomSource;

/// Square grid of [`Cell`] tags, row-major (`index = y * bounds + x`).
///
/// Reads and writes take signed coordinates and wrap with `rem_euclid`, so a
/// coordinate of `-1` addresses the far edge.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    bounds: usize,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Creates an all-empty grid of side `bounds`.
    pub fn new(bounds: usize) -> Result<Self, EngineError> {
        if bounds == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let len = bounds
            .checked_mul(bounds)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(Self {
            bounds,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Creates a grid where each cell draws `u` in [0, 1) and is occupied when
    /// `u - bias` rounds to 1, i.e. `u - bias > 0.5`.
    ///
    /// `bias` must lie in [0, 0.5]; the expected occupied fraction is `0.5 - bias`.
    pub fn random(
        bounds: usize,
        bias: f64,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, EngineError> {
        if !(0.0..=0.5).contains(&bias) {
            return Err(EngineError::InvalidParam {
                name: "occupancy_bias".to_string(),
                reason: format!("{bias} is outside [0, 0.5]"),
            });
        }
        let mut grid = Self::new(bounds)?;
        for cell in grid.cells.iter_mut() {
            if rng.next_f64() - bias > 0.5 {
                *cell = Cell::Stable;
            }
        }
        Ok(grid)
    }

    /// Creates a grid with `Stable` particles at the given coordinates.
    pub fn with_particles(bounds: usize, particles: &[(isize, isize)]) -> Result<Self, EngineError> {
        let mut grid = Self::new(bounds)?;
        for &(x, y) in particles {
            grid.set(x, y, Cell::Stable);
        }
        Ok(grid)
    }

    /// Grid side length.
    pub fn bounds(&self) -> usize {
        self.bounds
    }

    fn index(&self, x: isize, y: isize) -> usize {
        let b = self.bounds as isize;
        y.rem_euclid(b) as usize * self.bounds + x.rem_euclid(b) as usize
    }

    /// Tag at `(x, y)`, wrapping.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Sets the tag at `(x, y)`, wrapping.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// All tags in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding a particle.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Number of cells carrying `tag`.
    pub fn count(&self, tag: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    /// Collapses `Moved`/`Looped` back to `Stable`.
    pub fn normalize(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = c.normalized());
    }

    /// Writes binary occupancy (0.0 / 1.0) into `field`.
    ///
    /// Returns `EngineError::DimensionMismatch` if `field` is not `bounds x bounds`.
    pub fn write_field(&self, field: &mut Field) -> Result<(), EngineError> {
        if field.width() != self.bounds || field.height() != self.bounds {
            return Err(EngineError::DimensionMismatch {
                lhs_w: self.bounds,
                lhs_h: self.bounds,
                rhs_w: field.width(),
                rhs_h: field.height(),
            });
        }
        field
            .data_mut()
            .iter_mut()
            .zip(&self.cells)
            .for_each(|(v, c)| *v = c.value());
        Ok(())
    }
}
