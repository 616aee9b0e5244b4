#![deny(unsafe_code)]
//! Grid particle advection engine.
//!
//! Particles sit on a square occupancy grid and step one cell diagonally per
//! frame along a Gaussian-smoothed random force field. Collisions resolve
//! through push chains (see [`resolver`]). The force field is redrawn every
//! few frames so the flow slowly drifts.
//!
//! The primary output field is binary occupancy (1.0 where a particle sits),
//! which the rendering pipeline maps to pixels via a palette.

pub mod cell;
pub mod force;
pub mod grid;
pub mod resolver;

use drift_core::error::EngineError;
use drift_core::field::Field;
use drift_core::params::{param_f64, param_string, param_usize};
use drift_core::prng::Xorshift64;
use drift_core::Engine;
use log::debug;
use serde_json::{json, Value};

pub use cell::Cell;
pub use force::{Direction, ForceField, RefreshMode};
pub use grid::OccupancyGrid;
pub use resolver::{resolve_frame, try_move, FrameStats};

/// Default Gaussian smoothing radius (standard deviation, in cells).
const DEFAULT_SIGMA: f64 = 12.0;
/// Default number of frames between force-field refreshes.
const DEFAULT_REFRESH_INTERVAL: usize = 5;
/// Default occupancy bias; a cell starts occupied when `u - bias > 0.5`.
const DEFAULT_OCCUPANCY_BIAS: f64 = 0.4;

/// Tunable constants of the advection model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvectionParams {
    /// Standard deviation of the force-field blur.
    pub sigma: f64,
    /// The force field refreshes after every frame whose index is a multiple of this.
    pub refresh_interval: usize,
    /// Initial occupancy bias in [0, 0.5]; expected density is `0.5 - bias`.
    pub occupancy_bias: f64,
    /// How the force field changes on refresh.
    pub refresh_mode: RefreshMode,
}

impl Default for AdvectionParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            occupancy_bias: DEFAULT_OCCUPANCY_BIAS,
            refresh_mode: RefreshMode::default(),
        }
    }
}

impl AdvectionParams {
    /// Extracts parameters from a JSON object, falling back to defaults for missing keys.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        let mode = param_string(params, "refresh_mode", RefreshMode::default().name())?;
        let parsed = Self {
            sigma: param_f64(params, "sigma", DEFAULT_SIGMA)?,
            refresh_interval: param_usize(params, "refresh_interval", DEFAULT_REFRESH_INTERVAL)?,
            occupancy_bias: param_f64(params, "occupancy_bias", DEFAULT_OCCUPANCY_BIAS)?,
            refresh_mode: RefreshMode::from_name(&mode)?,
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Rejects a non-positive sigma, a zero refresh interval and a bias outside [0, 0.5].
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(EngineError::InvalidSigma(self.sigma));
        }
        if self.refresh_interval == 0 {
            return Err(EngineError::InvalidParam {
                name: "refresh_interval".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=0.5).contains(&self.occupancy_bias) {
            return Err(EngineError::InvalidParam {
                name: "occupancy_bias".to_string(),
                reason: format!("{} is outside [0, 0.5]", self.occupancy_bias),
            });
        }
        Ok(())
    }
}

/// Particle advection engine.
///
/// Each [`Engine::step`] is one frame: scan and resolve moves, normalize the
/// grid to binary occupancy, publish it as the output field, then refresh
/// the force field if the frame index is a multiple of the refresh interval.
pub struct Advection {
    params: AdvectionParams,
    rng: Xorshift64,
    grid: OccupancyGrid,
    forces: ForceField,
    occupancy: Field,
    frames: usize,
    last_stats: FrameStats,
}

impl Advection {
    /// Creates a `bounds x bounds` world: force field first, then initial occupancy,
    /// both drawn from one PRNG seeded with `seed`.
    pub fn new(bounds: usize, seed: u64, params: AdvectionParams) -> Result<Self, EngineError> {
        params.validate()?;
        let mut rng = Xorshift64::new(seed);
        let forces = ForceField::generate(bounds, params.sigma, &mut rng)?;
        let grid = OccupancyGrid::random(bounds, params.occupancy_bias, &mut rng)?;
        Self::from_parts(grid, forces, params, rng)
    }

    /// Creates an engine from a JSON params object.
    pub fn from_json(bounds: usize, seed: u64, json_params: &Value) -> Result<Self, EngineError> {
        Self::new(bounds, seed, AdvectionParams::from_json(json_params)?)
    }

    /// Assembles an engine around an existing grid and force field.
    pub fn from_parts(
        grid: OccupancyGrid,
        forces: ForceField,
        params: AdvectionParams,
        rng: Xorshift64,
    ) -> Result<Self, EngineError> {
        let bounds = grid.bounds();
        if forces.x().width() != bounds || forces.x().height() != bounds {
            return Err(EngineError::DimensionMismatch {
                lhs_w: bounds,
                lhs_h: bounds,
                rhs_w: forces.x().width(),
                rhs_h: forces.x().height(),
            });
        }
        let mut occupancy = Field::new(bounds, bounds)?;
        grid.write_field(&mut occupancy)?;
        Ok(Self {
            params,
            rng,
            grid,
            forces,
            occupancy,
            frames: 0,
            last_stats: FrameStats::default(),
        })
    }

    /// Current occupancy grid (normalized between frames).
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Current force field.
    pub fn forces(&self) -> &ForceField {
        &self.forces
    }

    /// Counters from the most recent frame.
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Redraws the force field according to the configured refresh mode.
    pub fn refresh_forces(&mut self) -> Result<(), EngineError> {
        self.forces.refresh(self.params.refresh_mode, &mut self.rng)
    }
}

impl Engine for Advection {
    fn step(&mut self) -> Result<(), EngineError> {
        let frame = self.frames;
        self.last_stats = resolve_frame(&mut self.grid, &self.forces);
        self.grid.normalize();
        self.grid.write_field(&mut self.occupancy)?;
        debug!(
            "frame {frame}: {} attempts, {} moved, {} blocked, longest chain {}",
            self.last_stats.attempts,
            self.last_stats.moved,
            self.last_stats.blocked,
            self.last_stats.longest_chain
        );

        if frame % self.params.refresh_interval == 0 {
            debug!(
                "frame {frame}: refreshing force field ({})",
                self.params.refresh_mode.name()
            );
            self.refresh_forces()?;
        }
        self.frames += 1;
        Ok(())
    }

    fn field(&self) -> &Field {
        &self.occupancy
    }

    fn frames_done(&self) -> usize {
        self.frames
    }

    fn params(&self) -> Value {
        json!({
            "sigma": self.params.sigma,
            "refresh_interval": self.params.refresh_interval,
            "occupancy_bias": self.params.occupancy_bias,
            "refresh_mode": self.params.refresh_mode.name(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "sigma": {
                "type": "number",
                "default": DEFAULT_SIGMA,
                "min": 0.0,
                "exclusive_min": true,
                "description": "Standard deviation of the Gaussian blur applied to the force noise"
            },
            "refresh_interval": {
                "type": "integer",
                "default": DEFAULT_REFRESH_INTERVAL,
                "min": 1,
                "description": "Refresh the force field after every frame whose index is a multiple of this"
            },
            "occupancy_bias": {
                "type": "number",
                "default": DEFAULT_OCCUPANCY_BIAS,
                "min": 0.0,
                "max": 0.5,
                "description": "Initial cell is occupied when a uniform draw minus this bias exceeds 0.5"
            },
            "refresh_mode": {
                "type": "string",
                "default": "resample",
                "enum": ["resample", "invert"],
                "description": "Draw new noise, or invert the existing noise, on refresh"
            }
        })
    }
}
