//! Per-cell occupancy tags.

/// State of one grid cell during a frame.
///
/// `Stable`, `Moved` and `Looped` all mean a particle is present. `Moved` and
/// `Looped` only exist between the start of a frame's scan and the
/// normalization that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No particle.
    #[default]
    Empty,
    /// Particle present, not yet processed this frame.
    Stable,
    /// Particle arrived here by being pushed, or sits in a chain that could not move.
    Moved,
    /// Particle arrived here by a direct top-level move; the scan skips it.
    Looped,
}

impl Cell {
    /// True for every tag except `Empty`.
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Collapses per-frame markers back to binary occupancy.
    pub fn normalized(self) -> Cell {
        if self.is_occupied() {
            Cell::Stable
        } else {
            Cell::Empty
        }
    }

    /// Whether the frame scan should attempt to move this cell.
    ///
    /// `Moved` cells are revisited; only empty and `Looped` cells are skipped.
    pub fn wants_move(self) -> bool {
        matches!(self, Cell::Stable | Cell::Moved)
    }

    /// Raster value: 1.0 when occupied, 0.0 otherwise.
    pub fn value(self) -> f64 {
        if self.is_occupied() {
            1.0
        } else {
            0.0
        }
    }
}
