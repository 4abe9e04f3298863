//! Niggli reduction (Křivý & Gruber, with the ε-comparisons of
//! Grosse-Kunstleve, Sauter & Adams).

use crate::{Lattice, LatticeError};
use linalg::{IMatrix3, Matrix3};
use log::{debug, trace};

const NIGGLI_MAX_ITERATIONS: usize = 100;

/// Reduced lattice plus the integer matrix `P` with `reduced = original · P`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedLattice {
    pub lattice: Lattice,
    pub transformation: IMatrix3,
}

#[derive(Debug, Clone, Copy)]
struct NiggliParams {
    a: f64,
    b: f64,
    c: f64,
    xi: f64,
    eta: f64,
    zeta: f64,
    l: i32,
    m: i32,
    n: i32,
}

impl NiggliParams {
    fn from_lattice(data: &Matrix3, eps: f64) -> Self {
        let g = linalg::mat_mul(linalg::transpose(*data), *data);
        let xi = 2.0 * g[1][2];
        let eta = 2.0 * g[0][2];
        let zeta = 2.0 * g[0][1];
        NiggliParams {
            a: g[0][0],
            b: g[1][1],
            c: g[2][2],
            xi,
            eta,
            zeta,
            l: sign_eps(xi, eps),
            m: sign_eps(eta, eps),
            n: sign_eps(zeta, eps),
        }
    }
}

fn apply(data: &mut Matrix3, total: &mut IMatrix3, step: IMatrix3) {
    *data = linalg::mat_mul(*data, linalg::to_real(step));
    *total = linalg::mat_mul(*total, step);
}

fn sign_eps(x: f64, eps: f64) -> i32 {
    if x < -eps {
        -1
    } else if x > eps {
        1
    } else {
        0
    }
}

/// Niggli-reduces `lattice`. `symprec` is a Cartesian length; comparisons of
/// squared lengths use `symprec · V^(1/3)`.
pub fn niggli_reduce(lattice: &Lattice, symprec: f64) -> Result<ReducedLattice, LatticeError> {
    reduce_within(lattice, symprec, NIGGLI_MAX_ITERATIONS)
}

fn reduce_within(
    lattice: &Lattice,
    symprec: f64,
    max_iterations: usize,
) -> Result<ReducedLattice, LatticeError> {
    lattice.check_degenerate(symprec)?;

    let eps = symprec * lattice.volume().abs().powf(1.0 / 3.0);
    let mut data = *lattice.as_matrix();
    let mut total: IMatrix3 = linalg::identity();

    for iteration in 0..max_iterations {
        let p = NiggliParams::from_lattice(&data, eps);
        if let Some(step) = step1(&p, eps) {
            trace!("niggli step 1");
            apply(&mut data, &mut total, step);
        }

        let p = NiggliParams::from_lattice(&data, eps);
        if let Some(step) = step2(&p, eps) {
            trace!("niggli step 2");
            apply(&mut data, &mut total, step);
            continue;
        }

        let p = NiggliParams::from_lattice(&data, eps);
        if let Some(step) = step3(&p) {
            trace!("niggli step 3");
            apply(&mut data, &mut total, step);
        }

        let p = NiggliParams::from_lattice(&data, eps);
        if let Some(step) = step4(&p) {
            trace!("niggli step 4");
            apply(&mut data, &mut total, step);
        }

        let p = NiggliParams::from_lattice(&data, eps);
        let restart = step5(&p, eps)
            .or_else(|| step6(&p, eps))
            .or_else(|| step7(&p, eps))
            .or_else(|| step8(&p, eps));
        match restart {
            Some(step) => {
                trace!("niggli steps 5-8 applied {:?}", step);
                apply(&mut data, &mut total, step);
            }
            None => {
                debug!("niggli reduction converged after {} iterations", iteration + 1);
                return Ok(ReducedLattice {
                    lattice: Lattice::from_columns(data),
                    transformation: total,
                });
            }
        }
    }

    Err(LatticeError::ReductionDidNotConverge {
        iterations: max_iterations,
    })
}

/// Checks the Niggli conditions (up to `eps` on squared lengths).
pub fn is_niggli_reduced(lattice: &Lattice, symprec: f64) -> bool {
    let eps = symprec * lattice.volume().abs().powf(1.0 / 3.0);
    let p = NiggliParams::from_lattice(lattice.as_matrix(), eps);
    step1(&p, eps).is_none()
        && step2(&p, eps).is_none()
        && step3(&p).map_or(true, |s| s == linalg::identity())
        && step4(&p).map_or(true, |s| s == linalg::identity())
        && step5(&p, eps).is_none()
        && step6(&p, eps).is_none()
        && step7(&p, eps).is_none()
        && step8(&p, eps).is_none()
}

fn step1(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    if p.a > p.b + eps || ((p.a - p.b).abs() <= eps && p.xi.abs() > p.eta.abs() + eps) {
        Some([[0, -1, 0], [-1, 0, 0], [0, 0, -1]])
    } else {
        None
    }
}

fn step2(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    if p.b > p.c + eps || ((p.b - p.c).abs() <= eps && p.eta.abs() > p.zeta.abs() + eps) {
        Some([[-1, 0, 0], [0, 0, -1], [0, -1, 0]])
    } else {
        None
    }
}

fn step3(p: &NiggliParams) -> Option<IMatrix3> {
    if p.l * p.m * p.n != 1 {
        return None;
    }
    let sign = |s: i32| if s == -1 { -1 } else { 1 };
    Some([[sign(p.l), 0, 0], [0, sign(p.m), 0], [0, 0, sign(p.n)]])
}

fn step4(p: &NiggliParams) -> Option<IMatrix3> {
    if p.l * p.m * p.n == 1 {
        return None;
    }
    if p.l == -1 && p.m == -1 && p.n == -1 {
        return None;
    }
    let mut diag = [1, 1, 1];
    let mut zero_at = None;
    for (k, &s) in [p.l, p.m, p.n].iter().enumerate() {
        if s == 1 {
            diag[k] = -1;
        } else if s == 0 {
            zero_at = Some(k);
        }
    }
    if diag[0] * diag[1] * diag[2] == -1 {
        if let Some(k) = zero_at {
            diag[k] = -1;
        }
    }
    Some([[diag[0], 0, 0], [0, diag[1], 0], [0, 0, diag[2]]])
}

fn signum(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else {
        -1
    }
}

fn step5(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    if p.xi.abs() > p.b + eps
        || ((p.b - p.xi).abs() <= eps && 2.0 * p.eta < p.zeta - eps)
        || ((p.b + p.xi).abs() <= eps && p.zeta < -eps)
    {
        Some([[1, 0, 0], [0, 1, -signum(p.xi)], [0, 0, 1]])
    } else {
        None
    }
}

fn step6(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    if p.eta.abs() > p.a + eps
        || ((p.a - p.eta).abs() <= eps && 2.0 * p.xi < p.zeta - eps)
        || ((p.a + p.eta).abs() <= eps && p.zeta < -eps)
    {
        Some([[1, 0, -signum(p.eta)], [0, 1, 0], [0, 0, 1]])
    } else {
        None
    }
}

fn step7(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    if p.zeta.abs() > p.a + eps
        || ((p.a - p.zeta).abs() <= eps && 2.0 * p.xi < p.eta - eps)
        || ((p.a + p.zeta).abs() <= eps && p.eta < -eps)
    {
        Some([[1, -signum(p.zeta), 0], [0, 1, 0], [0, 0, 1]])
    } else {
        None
    }
}

fn step8(p: &NiggliParams, eps: f64) -> Option<IMatrix3> {
    let sum = p.xi + p.eta + p.zeta + p.a + p.b;
    if sum < -eps || (sum.abs() <= eps && 2.0 * (p.a + p.eta) + p.zeta > eps) {
        Some([[1, 0, 1], [0, 1, 1], [0, 0, 1]])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SYMPREC: f64 = 1.0e-5;

    fn fcc_primitive(a: f64) -> Lattice {
        let h = 0.5 * a;
        Lattice::new([0.0, h, h], [h, 0.0, h], [h, h, 0.0])
    }

    #[test]
    fn reduction_keeps_volume_and_is_unimodular() {
        let latt = Lattice::new([4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [4.0, 4.0, 4.0]);
        let reduced = niggli_reduce(&latt, SYMPREC).unwrap();
        assert_eq!(linalg::determinant(reduced.transformation), 1);
        assert_abs_diff_eq!(reduced.lattice.volume(), latt.volume(), epsilon = 1.0e-9);
        let lengths = reduced.lattice.lengths();
        for l in lengths.iter() {
            assert_abs_diff_eq!(*l, 4.0, epsilon = 1.0e-9);
        }
        assert!(is_niggli_reduced(&reduced.lattice, SYMPREC));
    }

    #[test]
    fn transformation_reproduces_reduced_basis() {
        let latt = Lattice::new([3.0, 0.1, 0.0], [7.5, 2.9, 0.3], [-1.0, 4.0, 5.2]);
        let reduced = niggli_reduce(&latt, SYMPREC).unwrap();
        let rebuilt = latt.transformed(&linalg::to_real(reduced.transformation));
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(
                    rebuilt.as_matrix()[i][j],
                    reduced.lattice.as_matrix()[i][j],
                    epsilon = 1.0e-9
                );
            }
        }
        let l = reduced.lattice.lengths();
        assert!(l[0] <= l[1] + 1.0e-9 && l[1] <= l[2] + 1.0e-9);
    }

    #[test]
    fn fcc_primitive_is_all_obtuse_or_all_acute() {
        let reduced = niggli_reduce(&fcc_primitive(4.0), SYMPREC).unwrap();
        let angles = reduced.lattice.angles();
        let acute = angles.iter().all(|a| *a < 90.0 + 1.0e-6);
        let obtuse = angles.iter().all(|a| *a >= 90.0 - 1.0e-6);
        assert!(acute || obtuse);
        assert!(is_niggli_reduced(&reduced.lattice, SYMPREC));
    }

    #[test]
    fn reduction_is_idempotent() {
        let latt = Lattice::new([2.0, 0.0, 0.0], [1.3, 2.1, 0.0], [0.4, -0.7, 3.3]);
        let once = niggli_reduce(&latt, SYMPREC).unwrap();
        let twice = niggli_reduce(&once.lattice, SYMPREC).unwrap();
        let g1 = once.lattice.get_metric_tensor();
        let g2 = twice.lattice.get_metric_tensor();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(g1[i][j], g2[i][j], epsilon = 1.0e-9);
            }
        }
    }

    #[test]
    fn iteration_cap_is_reported() {
        // the first pass ends in a restart from step 5
        let latt = Lattice::new([4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [4.0, 4.0, 4.0]);
        assert_eq!(
            reduce_within(&latt, SYMPREC, 1),
            Err(LatticeError::ReductionDidNotConverge { iterations: 1 })
        );
        assert!(reduce_within(&latt, SYMPREC, NIGGLI_MAX_ITERATIONS).is_ok());
    }

    #[test]
    fn degenerate_input_is_rejected() {
        let latt = Lattice::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 3.0, 0.0]);
        assert!(matches!(
            niggli_reduce(&latt, SYMPREC),
            Err(LatticeError::DegenerateLattice { .. })
        ));
    }
}
