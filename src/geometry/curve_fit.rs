//! Cubic least-squares stroke smoothing.
//!
//! Fits `x(t)`, `y(t)` and `size(t)` with cubic polynomials against each
//! point's `t`, then resamples the fitted curve at evenly spaced `t`.

use super::path::Path;
use super::space::{Scalar, Vector, VectorSpace};

const DEGREE: usize = 3;
const TERMS: usize = DEGREE + 1;

/// Smooth `path` into `samples + 1` points along a fitted cubic.
///
/// Paths with fewer points than the cubic has terms, or whose `t` values do
/// not determine a fit, are returned unchanged.
pub fn smooth<S: VectorSpace>(path: &Path<S>, samples: usize) -> Path<S> {
    if path.len() < TERMS || samples == 0 {
        return path.clone();
    }

    let ts: Vec<f64> = path.points().iter().map(|p| p.t).collect();
    let xs: Vec<f64> = path.points().iter().map(|p| p.position.x).collect();
    let ys: Vec<f64> = path.points().iter().map(|p| p.position.y).collect();
    let ss: Vec<f64> = path.points().iter().map(|p| p.size.value).collect();

    let (Some(x), Some(y), Some(s)) = (
        cubic_fit(&ts, &xs),
        cubic_fit(&ts, &ys),
        cubic_fit(&ts, &ss),
    ) else {
        tracing::debug!(points = path.len(), "curve fit is degenerate; keeping raw stroke");
        return path.clone();
    };

    Path::from_positions((0..=samples).map(|i| {
        let t = i as f64 / samples as f64;
        (
            Vector::new(evaluate(&x, t), evaluate(&y, t)),
            Scalar::new(evaluate(&s, t).max(0.0)),
        )
    }))
}

/// Least-squares cubic coefficients (constant term first) for `ys` against `ts`.
pub fn cubic_fit(ts: &[f64], ys: &[f64]) -> Option<[f64; TERMS]> {
    if ts.len() != ys.len() || ts.len() < TERMS {
        return None;
    }

    // Normal equations: (XᵀX) c = Xᵀy with X[i][j] = t_i^j.
    let mut xtx = [[0.0; TERMS]; TERMS];
    let mut xty = [0.0; TERMS];
    for (&t, &y) in ts.iter().zip(ys) {
        let mut powers = [1.0; TERMS];
        for j in 1..TERMS {
            powers[j] = powers[j - 1] * t;
        }
        for row in 0..TERMS {
            xty[row] += powers[row] * y;
            for col in 0..TERMS {
                xtx[row][col] += powers[row] * powers[col];
            }
        }
    }

    solve(xtx, xty)
}

/// Evaluate a polynomial with coefficients in ascending order.
pub fn evaluate(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: [[f64; TERMS]; TERMS], mut b: [f64; TERMS]) -> Option<[f64; TERMS]> {
    const EPSILON: f64 = 1e-12;

    for col in 0..TERMS {
        let pivot = (col..TERMS).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..TERMS {
            let factor = a[row][col] / a[col][col];
            for k in col..TERMS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; TERMS];
    for row in (0..TERMS).rev() {
        let tail: f64 = (row + 1..TERMS).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}
