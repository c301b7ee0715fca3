// File: crates/chart-core/src/spline.rs
// Summary: Natural cubic spline (zero end curvature) fitted through XY knots and resampled on an even grid.

use crate::error::SplineError;
use crate::grid::linspace;

/// Cubic spline through a set of knots with `S''(x0) = S''(xn) = 0`.
#[derive(Clone, Debug)]
pub struct NaturalSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // second derivative at each knot
    m: Vec<f64>,
}

impl NaturalSpline {
    /// Fewest knots a natural spline is fitted through.
    pub const MIN_POINTS: usize = 3;

    /// Fit through `(xs[i], ys[i])`. `xs` must be strictly increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, SplineError> {
        if xs.len() != ys.len() {
            return Err(SplineError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        let n = xs.len();
        if n < Self::MIN_POINTS {
            return Err(SplineError::TooFewPoints { min: Self::MIN_POINTS, got: n });
        }
        if let Some(i) = (1..n).find(|&i| !(xs[i] > xs[i - 1])) {
            return Err(SplineError::NonIncreasingX { index: i });
        }

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        // Tridiagonal system for the interior second derivatives, solved with the Thomas algorithm.
        let inner = n - 2;
        let mut diag = vec![0.0; inner];
        let mut upper = vec![0.0; inner];
        let mut rhs = vec![0.0; inner];
        for k in 0..inner {
            let i = k + 1;
            diag[k] = 2.0 * (h[i - 1] + h[i]);
            upper[k] = h[i];
            rhs[k] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }
        for k in 1..inner {
            let w = h[k] / diag[k - 1]; // lower[k] == h[k]
            diag[k] -= w * upper[k - 1];
            rhs[k] -= w * rhs[k - 1];
        }
        let mut m = vec![0.0; n];
        for k in (0..inner).rev() {
            let next = if k + 1 < inner { m[k + 2] } else { 0.0 };
            m[k + 1] = (rhs[k] - upper[k] * next) / diag[k];
        }

        Ok(Self { xs: xs.to_vec(), ys: ys.to_vec(), m })
    }

    /// Fit through an ordered slice of `(x, y)` pairs.
    pub fn fit_points(points: &[(f64, f64)]) -> Result<Self, SplineError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::fit(&xs, &ys)
    }

    /// Evaluate at `x`; outside the knot range the end segments are extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let j = self.xs.partition_point(|&k| k <= x).clamp(1, n - 1) - 1;
        let h = self.xs[j + 1] - self.xs[j];
        let t = x - self.xs[j];
        let (m0, m1) = (self.m[j], self.m[j + 1]);
        let b = (self.ys[j + 1] - self.ys[j]) / h - h * (2.0 * m0 + m1) / 6.0;
        let c = m0 * 0.5;
        let d = (m1 - m0) / (6.0 * h);
        self.ys[j] + t * (b + t * (c + t * d))
    }

    /// Resample on `knot count * resolution` evenly spaced x values spanning the knots.
    pub fn interpolate(&self, resolution: usize) -> Result<Vec<(f64, f64)>, SplineError> {
        if resolution == 0 {
            return Err(SplineError::ZeroResolution);
        }
        let n = self.xs.len();
        let count = n * resolution;
        Ok(linspace(self.xs[0], self.xs[n - 1], count)
            .into_iter()
            .map(|x| (x, self.eval(x)))
            .collect())
    }
}

/// Fit and resample in one step.
pub fn natural_spline(points: &[(f64, f64)], resolution: usize) -> Result<Vec<(f64, f64)>, SplineError> {
    NaturalSpline::fit_points(points)?.interpolate(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn passes_through_knots() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.2];
        let ys = [1.0, -2.0, 0.5, 3.0, 2.0];
        let s = NaturalSpline::fit(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys) {
            assert!((s.eval(*x) - y).abs() < EPS, "S({x}) != {y}");
        }
    }

    #[test]
    fn collinear_points_stay_linear() {
        let pts: Vec<(f64, f64)> = (0..6).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        let out = natural_spline(&pts, 7).unwrap();
        for (x, y) in out {
            assert!((y - (2.0 * x + 1.0)).abs() < EPS);
        }
    }

    #[test]
    fn natural_boundary_conditions() {
        let s = NaturalSpline::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0]).unwrap();
        assert_eq!(s.m[0], 0.0);
        assert_eq!(s.m[3], 0.0);
        // symmetric data: interior curvatures are equal and opposite
        assert!((s.m[1] + s.m[2]).abs() < EPS);
        assert!((s.m[1] + 4.0).abs() < EPS);
    }

    #[test]
    fn output_length_and_span() {
        let pts = [(10.0, 1.0), (11.0, 3.0), (12.5, 2.0), (13.0, 0.0)];
        let out = natural_spline(&pts, 20).unwrap();
        assert_eq!(out.len(), pts.len() * 20);
        assert_eq!(out[0].0, 10.0);
        assert!((out[out.len() - 1].0 - 13.0).abs() < EPS);
        assert!(out.windows(2).all(|w| w[1].0 > w[0].0));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            natural_spline(&[(0.0, 0.0), (1.0, 1.0)], 20).unwrap_err(),
            SplineError::TooFewPoints { min: 3, got: 2 }
        );
        assert_eq!(
            NaturalSpline::fit(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            SplineError::NonIncreasingX { index: 2 }
        );
        assert_eq!(
            NaturalSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err(),
            SplineError::LengthMismatch { xs: 3, ys: 2 }
        );
        assert_eq!(
            natural_spline(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], 0).unwrap_err(),
            SplineError::ZeroResolution
        );
    }
}
