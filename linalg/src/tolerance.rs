//! Tolerance model shared by every stage of one symmetry search, plus the
//! fractional-coordinate wrapping helpers.

use crate::{dot, Matrix3, Vector3};

const WRAP_EPS: f64 = 1.0e-12;

/// Default Cartesian tolerance in length units.
pub const DEFAULT_SYMPREC: f64 = 1.0e-5;

/// Denominators tried when snapping refined coordinates to fractions.
pub const SNAP_DENOMINATORS: [i32; 7] = [1, 2, 3, 4, 6, 8, 12];

/// Distance tolerance (Cartesian) plus an optional angle tolerance in degrees.
///
/// A `None` angle tolerance means angles are judged through `symprec` by the
/// length deviation they induce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub symprec: f64,
    pub angle_tolerance: Option<f64>,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            symprec: DEFAULT_SYMPREC,
            angle_tolerance: None,
        }
    }
}

impl Tolerance {
    pub fn new(symprec: f64) -> Self {
        Tolerance {
            symprec,
            angle_tolerance: None,
        }
    }

    /// Negative or non-finite angle tolerances fall back to the derived rule.
    pub fn with_angle_tolerance(symprec: f64, angle_tolerance: f64) -> Self {
        let angle_tolerance = if angle_tolerance > 0.0 && angle_tolerance.is_finite() {
            Some(angle_tolerance)
        } else {
            None
        };
        Tolerance {
            symprec,
            angle_tolerance,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.symprec > 0.0 && self.symprec.is_finite()
    }

    /// Same tolerance with `symprec` multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Tolerance {
            symprec: self.symprec * factor,
            angle_tolerance: self.angle_tolerance,
        }
    }

    /// Whether two metric tensors describe the same lattice geometry.
    ///
    /// Lengths must agree within `symprec`. Each inter-axial angle must agree
    /// within the angle tolerance, or, without one, the angle change times the
    /// average lengths must stay below `symprec`.
    pub fn metrics_match(&self, lhs: &Matrix3, rhs: &Matrix3) -> bool {
        let len_l = [lhs[0][0].sqrt(), lhs[1][1].sqrt(), lhs[2][2].sqrt()];
        let len_r = [rhs[0][0].sqrt(), rhs[1][1].sqrt(), rhs[2][2].sqrt()];
        for i in 0..3 {
            if (len_l[i] - len_r[i]).abs() > self.symprec {
                return false;
            }
        }

        for &(i, j) in &[(0_usize, 1_usize), (0, 2), (1, 2)] {
            let cos_l = lhs[i][j] / (len_l[i] * len_l[j]);
            let cos_r = rhs[i][j] / (len_r[i] * len_r[j]);
            match self.angle_tolerance {
                Some(angle) => {
                    let delta = (clamp_cos(cos_l).acos() - clamp_cos(cos_r).acos()).abs();
                    if delta.to_degrees() > angle {
                        return false;
                    }
                }
                None => {
                    let sin_l = (1.0 - cos_l * cos_l).max(0.0).sqrt();
                    let sin_r = (1.0 - cos_r * cos_r).max(0.0).sqrt();
                    // sin of the angle difference
                    let sin_delta = (cos_l * sin_r - sin_l * cos_r).abs();
                    let len_ave = (len_l[i] + len_r[i]) * (len_l[j] + len_r[j]) / 4.0;
                    if sin_delta * sin_delta * len_ave > self.symprec * self.symprec {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether a fractional difference vector is shorter than `symprec`
    /// for some lattice image.
    pub fn within(&self, metric: &Matrix3, diff: Vector3) -> bool {
        min_image_distance_sq(metric, diff) <= self.symprec * self.symprec
    }
}

fn clamp_cos(c: f64) -> f64 {
    c.max(-1.0).min(1.0)
}

/// Squared Cartesian length `vᵀ G v` of a fractional vector.
pub fn cart_distance_sq(metric: &Matrix3, v: Vector3) -> f64 {
    let gv = crate::mat_vec(*metric, v);
    dot(v, gv)
}

/// Squared Cartesian length of the shortest lattice image of `diff`,
/// searched among the centred representative and its 26 neighbours.
pub fn min_image_distance_sq(metric: &Matrix3, diff: Vector3) -> f64 {
    let c = centered(diff);
    let mut best = cart_distance_sq(metric, c);
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                if i == 0 && j == 0 && k == 0 {
                    continue;
                }
                let v = [c[0] + f64::from(i), c[1] + f64::from(j), c[2] + f64::from(k)];
                best = best.min(cart_distance_sq(metric, v));
            }
        }
    }
    best
}

/// Canonical fractional representative in `[0, 1)`.
pub fn wrap_fractional(x: f64) -> f64 {
    let mut wrapped = x - x.floor();
    if wrapped >= 1.0 {
        wrapped -= 1.0;
    }
    if wrapped < 0.0 {
        wrapped += 1.0;
    }
    if wrapped.abs() < WRAP_EPS || (1.0 - wrapped).abs() < WRAP_EPS {
        0.0
    } else {
        wrapped
    }
}

/// Representative in `[-0.5, 0.5)`, used for nearest-image comparisons.
pub fn wrap_centered(x: f64) -> f64 {
    let mut wrapped = x - x.round();
    if wrapped >= 0.5 {
        wrapped -= 1.0;
    }
    if wrapped < -0.5 {
        wrapped += 1.0;
    }
    if wrapped.abs() < WRAP_EPS {
        0.0
    } else {
        wrapped
    }
}

pub fn wrapped(v: Vector3) -> Vector3 {
    [
        wrap_fractional(v[0]),
        wrap_fractional(v[1]),
        wrap_fractional(v[2]),
    ]
}

pub fn centered(v: Vector3) -> Vector3 {
    [
        wrap_centered(v[0]),
        wrap_centered(v[1]),
        wrap_centered(v[2]),
    ]
}

/// Compares vectors modulo integer lattice shifts, component-wise.
pub fn approx_eq_mod_lattice(lhs: Vector3, rhs: Vector3, tol: f64) -> bool {
    (0..3).all(|i| wrap_centered(lhs[i] - rhs[i]).abs() <= tol)
}

/// Snaps `x` to the nearest fraction `n/d` (`d` from [`SNAP_DENOMINATORS`])
/// lying within `tol`; returns `x` unchanged if none does.
pub fn snap_to_fraction(x: f64, tol: f64) -> f64 {
    for &den in SNAP_DENOMINATORS.iter() {
        let d = f64::from(den);
        let candidate = (x * d).round() / d;
        if (candidate - x).abs() <= tol {
            return candidate;
        }
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cubic_metric(a: f64) -> Matrix3 {
        [[a * a, 0.0, 0.0], [0.0, a * a, 0.0], [0.0, 0.0, a * a]]
    }

    #[test]
    fn wrapping_is_canonical() {
        assert_eq!(wrap_fractional(1.0), 0.0);
        assert_eq!(wrap_fractional(-1.0e-14), 0.0);
        assert_abs_diff_eq!(wrap_fractional(-0.25), 0.75, epsilon = 1.0e-15);
        assert_abs_diff_eq!(wrap_centered(0.75), -0.25, epsilon = 1.0e-15);
        assert_eq!(wrap_centered(0.5), -0.5);
    }

    #[test]
    fn equal_modulo_lattice() {
        assert!(approx_eq_mod_lattice([0.999_999_9, 0.5, 0.0], [0.0, 1.5, 2.0], 1.0e-6));
        assert!(!approx_eq_mod_lattice([0.1, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0e-6));
    }

    #[test]
    fn metric_comparison_respects_symprec() {
        let tol = Tolerance::new(1.0e-5);
        let a = cubic_metric(4.0);
        let b = cubic_metric(4.0 + 1.0e-7);
        let c = cubic_metric(4.1);
        assert!(tol.metrics_match(&a, &b));
        assert!(!tol.metrics_match(&a, &c));

        let mut sheared = a;
        sheared[0][1] = 0.1;
        sheared[1][0] = 0.1;
        assert!(!tol.metrics_match(&a, &sheared));
        assert!(Tolerance::with_angle_tolerance(1.0e-5, 5.0).metrics_match(&a, &sheared));
    }

    #[test]
    fn negative_angle_tolerance_means_derived() {
        let tol = Tolerance::with_angle_tolerance(1.0e-3, -1.0);
        assert_eq!(tol.angle_tolerance, None);
    }

    #[test]
    fn snapping_prefers_small_denominators() {
        assert_abs_diff_eq!(snap_to_fraction(0.333_334, 1.0e-5), 1.0 / 3.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(snap_to_fraction(0.125_000_1, 1.0e-5), 0.125, epsilon = 1.0e-15);
        assert_abs_diff_eq!(snap_to_fraction(0.1234, 1.0e-5), 0.1234, epsilon = 1.0e-15);
    }

    #[test]
    fn nearest_image_distance() {
        let tol = Tolerance::new(1.0e-3);
        let g = cubic_metric(4.0);
        assert!(tol.within(&g, [0.999_9, 0.0, 0.0]));
        assert!(!tol.within(&g, [0.01, 0.0, 0.0]));
    }
}
