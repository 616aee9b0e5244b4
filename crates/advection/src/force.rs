//! Smoothed random force field driving particle movement.
//!
//! Each axis keeps its raw uniform noise alongside the Gaussian-blurred copy
//! the movement rule reads. The blurred copies are always recomputed from the
//! raw ones, never edited directly.

use drift_core::blur::gaussian_blur;
use drift_core::error::EngineError;
use drift_core::field::Field;
use drift_core::prng::RandomSource;

/// Force component above which an axis points in the positive direction.
pub const DIRECTION_THRESHOLD: f64 = 0.5;

/// How [`ForceField::refresh`] changes the raw noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Draw fresh uniform noise for both axes.
    #[default]
    Resample,
    /// Replace every raw value `v` with `1 - v`, reversing the flow.
    Invert,
}

impl RefreshMode {
    /// Parses `"resample"` or `"invert"`.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "resample" => Ok(RefreshMode::Resample),
            "invert" => Ok(RefreshMode::Invert),
            other => Err(EngineError::InvalidParam {
                name: "refresh_mode".to_string(),
                reason: format!("unknown mode '{other}' (expected resample or invert)"),
            }),
        }
    }

    /// Name accepted by [`RefreshMode::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            RefreshMode::Resample => "resample",
            RefreshMode::Invert => "invert",
        }
    }
}

/// Discrete movement direction, each component `-1` or `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

/// Maps a force component to a step. Exactly 0.5 steps negative.
fn axis_step(force: f64) -> isize {
    if force > DIRECTION_THRESHOLD {
        1
    } else {
        -1
    }
}

/// Two blurred noise fields, one per axis.
#[derive(Debug, Clone)]
pub struct ForceField {
    sigma: f64,
    raw_x: Field,
    raw_y: Field,
    x: Field,
    y: Field,
}

fn noise(bounds: usize, rng: &mut dyn RandomSource) -> Result<Field, EngineError> {
    Field::from_fn(bounds, bounds, |_, _| rng.next_f64())
}

impl ForceField {
    /// Draws two independent `bounds x bounds` noise fields and blurs each with `sigma`.
    pub fn generate(
        bounds: usize,
        sigma: f64,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, EngineError> {
        let raw_x = noise(bounds, rng)?;
        let raw_y = noise(bounds, rng)?;
        Self::from_raw(raw_x, raw_y, sigma)
    }

    /// Builds a force field from existing raw noise.
    pub fn from_raw(raw_x: Field, raw_y: Field, sigma: f64) -> Result<Self, EngineError> {
        if !raw_x.same_shape(&raw_y) {
            return Err(EngineError::DimensionMismatch {
                lhs_w: raw_x.width(),
                lhs_h: raw_x.height(),
                rhs_w: raw_y.width(),
                rhs_h: raw_y.height(),
            });
        }
        let x = gaussian_blur(&raw_x, sigma)?;
        let y = gaussian_blur(&raw_y, sigma)?;
        Ok(Self {
            sigma,
            raw_x,
            raw_y,
            x,
            y,
        })
    }

    /// Test fixture: use the given fields as the blurred components directly.
    #[cfg(test)]
    pub(crate) fn from_blurred(x: Field, y: Field) -> Self {
        Self {
            sigma: 1.0,
            raw_x: x.clone(),
            raw_y: y.clone(),
            x,
            y,
        }
    }

    /// Changes the raw noise according to `mode` and recomputes both blurred fields.
    pub fn refresh(
        &mut self,
        mode: RefreshMode,
        rng: &mut dyn RandomSource,
    ) -> Result<(), EngineError> {
        match mode {
            RefreshMode::Resample => {
                let w = self.raw_x.width();
                self.raw_x = noise(w, rng)?;
                self.raw_y = noise(w, rng)?;
            }
            RefreshMode::Invert => {
                for raw in [&mut self.raw_x, &mut self.raw_y] {
                    raw.data_mut().iter_mut().for_each(|v| *v = 1.0 - *v);
                }
            }
        }
        self.x = gaussian_blur(&self.raw_x, self.sigma)?;
        self.y = gaussian_blur(&self.raw_y, self.sigma)?;
        Ok(())
    }

    /// Direction at `(x, y)`; coordinates wrap like the occupancy grid.
    pub fn direction(&self, x: isize, y: isize) -> Direction {
        Direction {
            dx: axis_step(self.x.get(x, y)),
            dy: axis_step(self.y.get(x, y)),
        }
    }

    /// Blurred X component.
    pub fn x(&self) -> &Field {
        &self.x
    }

    /// Blurred Y component.
    pub fn y(&self) -> &Field {
        &self.y
    }

    /// Raw X noise.
    pub fn raw_x(&self) -> &Field {
        &self.raw_x
    }

    /// Raw Y noise.
    pub fn raw_y(&self) -> &Field {
        &self.raw_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::prng::Xorshift64;

    fn in_unit_range(f: &Field) -> bool {
        f.data().iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn exactly_half_points_negative() {
        assert_eq!(axis_step(0.5), -1);
        assert_eq!(axis_step(0.500_000_1), 1);
        assert_eq!(axis_step(0.0), -1);
        assert_eq!(axis_step(1.0), 1);
    }

    #[test]
    fn direction_reads_both_axes() {
        let x = Field::from_data(2, 2, vec![0.9, 0.5, 0.1, 0.7]).unwrap();
        let y = Field::from_data(2, 2, vec![0.5, 0.6, 0.6, 0.2]).unwrap();
        let forces = ForceField::from_blurred(x, y);
        assert_eq!(forces.direction(0, 0), Direction { dx: 1, dy: -1 });
        assert_eq!(forces.direction(1, 0), Direction { dx: -1, dy: 1 });
        assert_eq!(forces.direction(1, 1), Direction { dx: 1, dy: -1 });
        // wraps like the grid
        assert_eq!(forces.direction(-1, -1), forces.direction(1, 1));
    }

    #[test]
    fn generate_produces_square_fields_in_range() {
        let mut rng = Xorshift64::new(3);
        let forces = ForceField::generate(24, 2.0, &mut rng).unwrap();
        for f in [forces.x(), forces.y(), forces.raw_x(), forces.raw_y()] {
            assert_eq!((f.width(), f.height()), (24, 24));
            assert!(in_unit_range(f));
        }
        assert_ne!(forces.raw_x(), forces.raw_y());
    }

    #[test]
    fn generate_rejects_bad_sigma() {
        let mut rng = Xorshift64::new(3);
        assert!(matches!(
            ForceField::generate(8, 0.0, &mut rng),
            Err(EngineError::InvalidSigma(_))
        ));
    }

    #[test]
    fn blurred_is_function_of_raw() {
        let mut rng = Xorshift64::new(8);
        let forces = ForceField::generate(16, 1.5, &mut rng).unwrap();
        let again =
            ForceField::from_raw(forces.raw_x().clone(), forces.raw_y().clone(), 1.5).unwrap();
        assert_eq!(forces.x(), again.x());
        assert_eq!(forces.y(), again.y());
    }

    #[test]
    fn from_raw_rejects_mismatched_axes() {
        let a = Field::new(4, 4).unwrap();
        let b = Field::new(5, 5).unwrap();
        assert!(matches!(
            ForceField::from_raw(a, b, 1.0),
            Err(EngineError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn resample_changes_contents_and_keeps_shape() {
        let mut rng = Xorshift64::new(21);
        let mut forces = ForceField::generate(20, 2.0, &mut rng).unwrap();
        let before_x = forces.x().clone();
        let before_y = forces.y().clone();
        forces.refresh(RefreshMode::Resample, &mut rng).unwrap();
        assert_ne!(forces.x(), &before_x);
        assert_ne!(forces.y(), &before_y);
        assert!(forces.x().same_shape(&before_x));
        assert!(in_unit_range(forces.x()) && in_unit_range(forces.y()));
    }

    #[test]
    fn invert_mirrors_around_half() {
        let mut rng = Xorshift64::new(4);
        let mut forces = ForceField::generate(12, 1.0, &mut rng).unwrap();
        let before = forces.x().clone();
        forces.refresh(RefreshMode::Invert, &mut rng).unwrap();
        for (a, b) in before.data().iter().zip(forces.x().data()) {
            assert!((a + b - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn refresh_mode_names_round_trip() {
        for mode in [RefreshMode::Resample, RefreshMode::Invert] {
            assert_eq!(RefreshMode::from_name(mode.name()).unwrap(), mode);
        }
        assert!(RefreshMode::from_name("shuffle").is_err());
    }
}
