//! Separable Gaussian smoothing of a [`Field`].
//!
//! The kernel is truncated at four standard deviations and normalized to sum
//! to one, so the output is a convex combination of input values. Edges use
//! reflect boundary handling (`d c b a | a b c d | d c b a`).

use crate::error::EngineError;
use crate::field::Field;

/// Kernel half-width in standard deviations.
const TRUNCATE: f64 = 4.0;

/// Builds the normalized 1D Gaussian kernel for `sigma`, length `2 * radius + 1`.
pub fn gaussian_kernel(sigma: f64) -> Result<Vec<f64>, EngineError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(EngineError::InvalidSigma(sigma));
    }
    let radius = (TRUNCATE * sigma + 0.5) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    kernel.iter_mut().for_each(|w| *w /= sum);
    Ok(kernel)
}

/// Maps any signed index into `0..n` by mirroring at the edges.
///
/// Period is `2n`, so radii larger than the field still resolve.
fn reflect(i: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = i.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}

/// Blurs `field` with an isotropic Gaussian of standard deviation `sigma`.
///
/// Deterministic: the same input and sigma always give bit-identical output.
pub fn gaussian_blur(field: &Field, sigma: f64) -> Result<Field, EngineError> {
    let kernel = gaussian_kernel(sigma)?;
    let radius = (kernel.len() / 2) as isize;
    let w = field.width();
    let h = field.height();
    let src = field.data();

    // Horizontal pass
    let mut temp = vec![0.0; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            temp[y * w + x] = kernel
                .iter()
                .enumerate()
                .map(|(k, &wt)| wt * row[reflect(x as isize + k as isize - radius, w)])
                .sum();
        }
    }

    // Vertical pass
    let mut out = vec![0.0; w * h];
    for y in 0..h {
        for x in 0..w {
            out[y * w + x] = kernel
                .iter()
                .enumerate()
                .map(|(k, &wt)| wt * temp[reflect(y as isize + k as isize - radius, h) * w + x])
                .sum();
        }
    }

    Field::from_data(w, h, out)
}
