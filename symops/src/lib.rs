//! Core symmetry-operation algebra.
//!
//! - operation math (`R`, `t`, composition, inverse, change of basis),
//! - tolerance-aware equality modulo lattice translations,
//! - group checks and closure of generator sets.
//!
//! Operation search lives in `detect`, point-group classification in
//! `classify`.

use linalg::{IMatrix3, Matrix3};
use std::fmt;
use thiserror::Error;

/// Integer 3x3 rotation matrix in fractional-coordinate basis.
///
/// For crystallographic operations this should be unimodular with
/// determinant `+1` (proper) or `-1` (improper).
pub type Rotation = IMatrix3;

pub use linalg::{approx_eq_mod_lattice, Vector3};

pub mod classify;
pub mod detect;

pub use classify::*;
pub use detect::*;

/// Largest group generated by [`close_group`]: 48 rotations times the four
/// lattice points of an F-centred cell.
pub const MAX_GROUP_ORDER: usize = 192;

/// A single affine symmetry operation in fractional coordinates:
/// `x' = R * x + t (mod 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SymOp {
    rotation: Rotation,
    translation: Vector3,
}

/// Errors returned by symmetry-operation construction and group checks.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SymOpError {
    #[error("rotation determinant must be ±1, got {det}")]
    NonUnimodularRotation { det: i32 },

    #[error("symmetry group is empty")]
    EmptyGroup,

    #[error("symmetry group is missing identity")]
    MissingIdentity,

    #[error("symmetry op {index} has no inverse in group")]
    MissingInverse { index: usize },

    #[error("symmetry group is not closed: op {left} composed with op {right} is missing")]
    NotClosed { left: usize, right: usize },

    #[error("symmetry op {index} violates lattice consistency (max metric deviation = {deviation:.3e})")]
    LatticeInconsistent { index: usize, deviation: f64 },

    #[error("generated group exceeds {limit} operations")]
    GroupTooLarge { limit: usize },
}

impl SymOp {
    /// Constructs a symmetry operation and normalizes translation to `[0, 1)`.
    ///
    /// The rotation must be unimodular (`det = ±1`), otherwise the operation
    /// is not invertible over the integer lattice.
    pub fn new(rotation: Rotation, translation: Vector3) -> Result<Self, SymOpError> {
        let det = linalg::determinant(rotation);
        if det != 1 && det != -1 {
            return Err(SymOpError::NonUnimodularRotation { det });
        }

        Ok(Self {
            rotation,
            translation: linalg::wrapped(translation),
        })
    }

    /// Returns identity operation (`R = I`, `t = 0`).
    pub fn identity() -> Self {
        Self {
            rotation: linalg::identity(),
            translation: [0.0, 0.0, 0.0],
        }
    }

    /// Pure lattice translation.
    pub fn translation_only(translation: Vector3) -> Self {
        Self {
            rotation: linalg::identity(),
            translation: linalg::wrapped(translation),
        }
    }

    /// Returns the integer rotation part.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Returns normalized translation in `[0, 1)`.
    pub fn translation(&self) -> Vector3 {
        self.translation
    }

    pub fn determinant(&self) -> i32 {
        linalg::determinant(self.rotation)
    }

    pub fn is_proper(&self) -> bool {
        self.determinant() == 1
    }

    /// Same rotation, different translation.
    pub fn with_translation(&self, translation: Vector3) -> SymOp {
        SymOp {
            rotation: self.rotation,
            translation: linalg::wrapped(translation),
        }
    }

    /// Applies full affine operation and wraps result to fractional cell.
    pub fn apply_fractional(&self, vector: Vector3) -> Vector3 {
        linalg::wrapped(self.apply_unwrapped(vector))
    }

    /// Applies `R x + t` without wrapping.
    pub fn apply_unwrapped(&self, vector: Vector3) -> Vector3 {
        linalg::add(linalg::rotate(self.rotation, vector), self.translation)
    }

    /// Applies only rotation part.
    pub fn apply_rotation(&self, vector: Vector3) -> Vector3 {
        linalg::rotate(self.rotation, vector)
    }

    /// Group composition `self ∘ rhs`:
    /// `(R1, t1) * (R2, t2) = (R1*R2, R1*t2 + t1)`.
    pub fn compose(&self, rhs: &SymOp) -> SymOp {
        let rotation = linalg::mat_mul(self.rotation, rhs.rotation);
        let translation = linalg::wrapped(linalg::add(
            linalg::rotate(self.rotation, rhs.translation),
            self.translation,
        ));
        SymOp {
            rotation,
            translation,
        }
    }

    /// Computes inverse operation:
    /// `(R, t)^-1 = (R^-1, -R^-1*t)`.
    pub fn inverse(&self) -> Result<SymOp, SymOpError> {
        let inv_rotation = linalg::inverse_unimodular(self.rotation).ok_or(
            SymOpError::NonUnimodularRotation {
                det: self.determinant(),
            },
        )?;
        let inv_translation =
            linalg::wrapped(linalg::scale(linalg::rotate(inv_rotation, self.translation), -1.0));
        Ok(SymOp {
            rotation: inv_rotation,
            translation: inv_translation,
        })
    }

    /// Re-expresses the operation in the basis `L' = L·P`:
    /// `R' = P^-1 R P`, `t' = P^-1 t`.
    ///
    /// `None` when `R'` is not an integer matrix, i.e. the operation does not
    /// map the new lattice onto itself.
    pub fn change_basis(&self, p: &Matrix3, p_inv: &Matrix3) -> Option<SymOp> {
        let r = linalg::mat_mul(
            linalg::mat_mul(*p_inv, linalg::to_real(self.rotation)),
            *p,
        );
        let rotation = linalg::round_matrix(r, 1.0e-6)?;
        SymOp::new(rotation, linalg::mat_vec(*p_inv, self.translation)).ok()
    }
}

impl fmt::Display for SymOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes = ["x", "y", "z"];
        let mut rows = Vec::with_capacity(3);
        for i in 0..3 {
            let mut s = String::new();
            for (j, axis) in axes.iter().enumerate() {
                match self.rotation[i][j] {
                    0 => {}
                    1 => {
                        if !s.is_empty() {
                            s.push('+');
                        }
                        s.push_str(axis);
                    }
                    -1 => {
                        s.push('-');
                        s.push_str(axis);
                    }
                    n => {
                        if n > 0 && !s.is_empty() {
                            s.push('+');
                        }
                        s.push_str(&format!("{}{}", n, axis));
                    }
                }
            }
            let t = self.translation[i];
            if t.abs() > 1.0e-8 {
                s.push('+');
                s.push_str(&fraction_string(t));
            }
            if s.is_empty() {
                s.push('0');
            }
            rows.push(s);
        }
        write!(f, "{}", rows.join(","))
    }
}

fn fraction_string(t: f64) -> String {
    let n24 = t * 24.0;
    if (n24 - n24.round()).abs() < 1.0e-6 {
        let num = n24.round() as i64;
        let (g, _, _) = linalg::extended_gcd(num, 24);
        format!("{}/{}", num / g, 24 / g)
    } else {
        format!("{:.6}", t)
    }
}

/// Validates that `ops` behaves like a finite symmetry group under composition.
///
/// Checks:
/// - non-empty set,
/// - identity exists,
/// - each element has inverse,
/// - closure under composition.
///
/// Translation comparison uses `tol` modulo lattice vectors.
pub fn validate_group(ops: &[SymOp], tol: f64) -> Result<(), SymOpError> {
    if ops.is_empty() {
        return Err(SymOpError::EmptyGroup);
    }

    let identity = SymOp::identity();
    if !ops.iter().any(|op| sym_op_approx_eq(op, &identity, tol)) {
        return Err(SymOpError::MissingIdentity);
    }

    for (idx, op) in ops.iter().enumerate() {
        let inverse = op.inverse()?;
        if !ops.iter().any(|candidate| sym_op_approx_eq(candidate, &inverse, tol)) {
            return Err(SymOpError::MissingInverse { index: idx });
        }
    }

    for (i, left) in ops.iter().enumerate() {
        for (j, right) in ops.iter().enumerate() {
            let composed = left.compose(right);
            if !ops
                .iter()
                .any(|candidate| sym_op_approx_eq(&composed, candidate, tol))
            {
                return Err(SymOpError::NotClosed { left: i, right: j });
            }
        }
    }

    Ok(())
}

/// Closes a generator set under composition (identity included first).
pub fn close_group(generators: &[SymOp], tol: f64) -> Result<Vec<SymOp>, SymOpError> {
    let mut group = vec![SymOp::identity()];
    for g in generators.iter() {
        if !group.iter().any(|op| sym_op_approx_eq(op, g, tol)) {
            group.push(g.clone());
        }
    }

    let mut cursor = 0;
    while cursor < group.len() {
        let current = group[cursor].clone();
        for g in generators.iter() {
            let product = current.compose(g);
            if !group.iter().any(|op| sym_op_approx_eq(op, &product, tol)) {
                group.push(product);
                if group.len() > MAX_GROUP_ORDER {
                    return Err(SymOpError::GroupTooLarge {
                        limit: MAX_GROUP_ORDER,
                    });
                }
            }
        }
        cursor += 1;
    }
    Ok(group)
}

/// Validates operation lattice consistency using `R^T G R ≈ G` within `tol`.
pub fn validate_lattice_consistency(
    ops: &[SymOp],
    metric: &Matrix3,
    tol: f64,
) -> Result<(), SymOpError> {
    for (idx, op) in ops.iter().enumerate() {
        let det = op.determinant();
        if det != 1 && det != -1 {
            return Err(SymOpError::NonUnimodularRotation { det });
        }
        let deviation = rotation_metric_deviation(*op.rotation(), metric);
        if deviation > tol {
            return Err(SymOpError::LatticeInconsistent {
                index: idx,
                deviation,
            });
        }
    }
    Ok(())
}

/// Returns maximum `|R^T G R - G|` entry over all operations.
pub fn max_lattice_deviation(ops: &[SymOp], metric: &Matrix3) -> f64 {
    ops.iter()
        .map(|op| rotation_metric_deviation(*op.rotation(), metric))
        .fold(0.0, f64::max)
}

/// Approximate equality of two operations with translation compared modulo lattice.
pub fn sym_op_approx_eq(lhs: &SymOp, rhs: &SymOp, tol: f64) -> bool {
    lhs.rotation == rhs.rotation && approx_eq_mod_lattice(lhs.translation, rhs.translation, tol)
}

/// `R^T G R`.
pub fn transformed_metric(rotation: Rotation, metric: &Matrix3) -> Matrix3 {
    let r = linalg::to_real(rotation);
    linalg::mat_mul(linalg::mat_mul(linalg::transpose(r), *metric), r)
}

fn rotation_metric_deviation(rotation: Rotation, metric: &Matrix3) -> f64 {
    let transformed = transformed_metric(rotation, metric);
    let mut max_deviation = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            let delta = (transformed[i][j] - metric[i][j]).abs();
            if delta > max_deviation {
                max_deviation = delta;
            }
        }
    }
    max_deviation
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1.0e-9;

    fn c2z() -> SymOp {
        SymOp::new([[-1, 0, 0], [0, -1, 0], [0, 0, 1]], [0.0, 0.0, 0.0]).unwrap()
    }

    #[test]
    fn compose_with_inverse_is_identity() {
        let op = SymOp::new([[0, -1, 0], [1, -1, 0], [0, 0, 1]], [0.5, 0.25, 0.0]).unwrap();
        let inv = op.inverse().unwrap();
        let id = SymOp::identity();

        let left = op.compose(&inv);
        let right = inv.compose(&op);
        assert!(sym_op_approx_eq(&left, &id, TOL));
        assert!(sym_op_approx_eq(&right, &id, TOL));
    }

    #[test]
    fn rejects_non_unimodular_rotation() {
        assert_eq!(
            SymOp::new([[2, 0, 0], [0, 1, 0], [0, 0, 1]], [0.0; 3]),
            Err(SymOpError::NonUnimodularRotation { det: 2 })
        );
    }

    #[test]
    fn validate_small_group() {
        let ops = vec![SymOp::identity(), c2z()];
        assert_eq!(validate_group(&ops, TOL), Ok(()));
    }

    #[test]
    fn validate_missing_inverse() {
        let ops = vec![
            SymOp::identity(),
            SymOp::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]], [0.25, 0.0, 0.0]).unwrap(),
        ];
        assert_eq!(
            validate_group(&ops, TOL),
            Err(SymOpError::MissingInverse { index: 1 })
        );
    }

    #[test]
    fn validate_unclosed_set() {
        let c2x = SymOp::new([[1, 0, 0], [0, -1, 0], [0, 0, -1]], [0.0; 3]).unwrap();
        let ops = vec![SymOp::identity(), c2z(), c2x];
        assert_eq!(
            validate_group(&ops, TOL),
            Err(SymOpError::NotClosed { left: 1, right: 2 })
        );
    }

    #[test]
    fn closing_a_screw_axis() {
        let screw = SymOp::new([[0, -1, 0], [1, 0, 0], [0, 0, 1]], [0.0, 0.0, 0.25]).unwrap();
        let group = close_group(&[screw], TOL).unwrap();
        assert_eq!(group.len(), 4);
        assert_eq!(validate_group(&group, TOL), Ok(()));
    }

    #[test]
    fn incommensurate_translation_is_too_large() {
        let shift = SymOp::translation_only([0.001, 0.0, 0.0]);
        assert_eq!(
            close_group(&[shift], TOL),
            Err(SymOpError::GroupTooLarge {
                limit: MAX_GROUP_ORDER
            })
        );
    }

    #[test]
    fn change_basis_to_centred_cell() {
        // primitive -> conventional for a C-centred lattice
        let p = [[1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let p_inv = linalg::inverse(p).unwrap();
        let conv = c2z().change_basis(&p, &p_inv).unwrap();
        assert_eq!(*conv.rotation(), [[-1, 0, 0], [0, -1, 0], [0, 0, 1]]);

        let swap = SymOp::new([[0, 1, 0], [1, 0, 0], [0, 0, 1]], [0.0; 3]).unwrap();
        let conv = swap.change_basis(&p, &p_inv).unwrap();
        assert_eq!(*conv.rotation(), [[-1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    }

    #[test]
    fn jones_symbol() {
        let op = SymOp::new([[0, -1, 0], [1, -1, 0], [0, 0, 1]], [0.0, 0.0, 1.0 / 3.0]).unwrap();
        assert_eq!(op.to_string(), "-y,x-y,z+1/3");
        assert_eq!(SymOp::identity().to_string(), "x,y,z");
    }

    #[test]
    fn lattice_validation_rejects_non_metric_rotation() {
        let shear = SymOp::new([[1, 1, 0], [0, 1, 0], [0, 0, 1]], [0.0, 0.0, 0.0]).unwrap();
        let metric = linalg::identity();
        let err = validate_lattice_consistency(&[SymOp::identity(), shear], &metric, 1.0e-9)
            .unwrap_err();
        assert!(matches!(
            err,
            SymOpError::LatticeInconsistent {
                index: 1,
                deviation: _
            }
        ));
    }

    #[test]
    fn lattice_validation_accepts_metric_preserving_group() {
        let ops = vec![SymOp::identity(), c2z()];
        let metric = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 4.0]];
        assert_eq!(validate_lattice_consistency(&ops, &metric, 1.0e-9), Ok(()));
        assert_eq!(max_lattice_deviation(&ops, &metric), 0.0);
    }
}
