//! Push-chain move resolution.
//!
//! A particle steps one cell diagonally along the force field. If the target
//! holds an unprocessed particle, that particle is pushed first, and so on
//! down the chain. The chain ends at an empty cell (every link moves) or at a
//! cell already tagged `Moved` (nothing moves, every link is left `Moved`).
//!
//! The chain is walked with an explicit stack instead of call recursion. Each
//! stacked origin is tagged `Moved` before the walk continues and a `Moved`
//! target ends the walk, so no cell is stacked twice: a chain is at most
//! `bounds * bounds` links long and the stack never grows past that.

use crate::cell::Cell;
use crate::force::{Direction, ForceField};
use crate::grid::OccupancyGrid;

/// Target of a step from `(x, y)`.
///
/// A coordinate past `bounds - 1` has `bounds` subtracted. Underflow is not
/// corrected, so stepping left from column 0 yields `-1`; the grid's signed
/// addressing then resolves that to the far edge.
pub fn destination(bounds: usize, x: isize, y: isize, dir: Direction) -> (isize, isize) {
    let last = bounds as isize - 1;
    let wrap_high = |c: isize| if c > last { c - bounds as isize } else { c };
    (wrap_high(x + dir.dx), wrap_high(y + dir.dy))
}

/// Result of resolving one move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the starting particle left its cell.
    pub moved: bool,
    /// Number of particles in the chain, including the starting one.
    pub chain_len: usize,
}

/// Attempts to move the particle at `(x, y)`, pushing any chain in its way.
///
/// `pushed` marks a move made on behalf of another particle; a successful
/// pushed move lands as `Moved`, a successful top-level move lands as `Looped`.
pub fn resolve_move(
    grid: &mut OccupancyGrid,
    forces: &ForceField,
    x: isize,
    y: isize,
    pushed: bool,
) -> MoveOutcome {
    let bounds = grid.bounds();
    // Origins waiting for the cell they target to clear, oldest first.
    let mut chain: Vec<(isize, isize)> = Vec::new();
    let (mut cx, mut cy) = (x, y);

    loop {
        let (tx, ty) = destination(bounds, cx, cy, forces.direction(cx, cy));
        match grid.get(tx, ty) {
            Cell::Moved => {
                grid.set(cx, cy, Cell::Moved);
                for &(ox, oy) in chain.iter().rev() {
                    grid.set(ox, oy, Cell::Moved);
                }
                return MoveOutcome {
                    moved: false,
                    chain_len: chain.len() + 1,
                };
            }
            Cell::Stable | Cell::Looped => {
                grid.set(cx, cy, Cell::Moved);
                chain.push((cx, cy));
                cx = tx;
                cy = ty;
            }
            Cell::Empty => {
                let landed = |link: usize| {
                    if link > 0 || pushed {
                        Cell::Moved
                    } else {
                        Cell::Looped
                    }
                };
                grid.set(cx, cy, Cell::Empty);
                grid.set(tx, ty, landed(chain.len()));

                // Each earlier link moves into the cell its successor vacated.
                let mut vacated = (cx, cy);
                for (link, &(ox, oy)) in chain.iter().enumerate().rev() {
                    grid.set(ox, oy, Cell::Empty);
                    grid.set(vacated.0, vacated.1, landed(link));
                    vacated = (ox, oy);
                }
                return MoveOutcome {
                    moved: true,
                    chain_len: chain.len() + 1,
                };
            }
        }
    }
}

/// Attempts to move the particle at `(x, y)`; returns whether it moved.
pub fn try_move(
    grid: &mut OccupancyGrid,
    forces: &ForceField,
    x: isize,
    y: isize,
    pushed: bool,
) -> bool {
    resolve_move(grid, forces, x, y, pushed).moved
}

/// Counters collected over one frame's scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Top-level move attempts made by the scan.
    pub attempts: usize,
    /// Attempts whose starting particle moved.
    pub moved: usize,
    /// Attempts that ended against a `Moved` cell.
    pub blocked: usize,
    /// Longest chain seen this frame.
    pub longest_chain: usize,
}

/// Scans the grid row-major and attempts a top-level move for every cell
/// that is neither empty nor `Looped` at the moment the scan reaches it.
///
/// Leaves no cell `Stable`. Does not normalize.
pub fn resolve_frame(grid: &mut OccupancyGrid, forces: &ForceField) -> FrameStats {
    let bounds = grid.bounds() as isize;
    let mut stats = FrameStats::default();
    for y in 0..bounds {
        for x in 0..bounds {
            if !grid.get(x, y).wants_move() {
                continue;
            }
            let outcome = resolve_move(grid, forces, x, y, false);
            stats.attempts += 1;
            if outcome.moved {
                stats.moved += 1;
            } else {
                stats.blocked += 1;
            }
            stats.longest_chain = stats.longest_chain.max(outcome.chain_len);
        }
    }
    stats
}
