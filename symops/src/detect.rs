//! Symmetry-operation search on a primitive cell.
//!
//! Strategy:
//! 1. Niggli-reduce the lattice and enumerate integer rotations with entries
//!    in `{-1, 0, 1}` that preserve the reduced metric within tolerance.
//! 2. For each rotation, generate candidate translations by mapping one
//!    anchor atom of the rarest species onto every atom of that species.
//! 3. Verify a one-to-one species-preserving atom mapping for each `(R, t)`,
//!    keep the candidate with the smallest residual and refine `t` by the
//!    mean residual.
//! 4. Canonicalize and validate the group.
//!
//! The rotation loop runs on the rayon pool; each rotation is independent.

use std::cmp::Ordering;

use crystal::{Cell, CellError};
use lattice::{niggli_reduce, Lattice, LatticeError};
use linalg::{Matrix3, Tolerance, Vector3};
use log::{debug, trace};
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    max_lattice_deviation, sym_op_approx_eq, transformed_metric, validate_group, Rotation, SymOp,
    SymOpError,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectOptions {
    /// Cartesian position tolerance.
    pub symprec: f64,
    /// Angle tolerance in degrees for lattice comparisons; `None` derives it
    /// from `symprec`.
    pub angle_tolerance: Option<f64>,
    /// Validate the resulting set as a closed group.
    pub validate_group: bool,
    /// Search rotations on the rayon pool.
    pub parallel: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            symprec: linalg::DEFAULT_SYMPREC,
            angle_tolerance: None,
            validate_group: true,
            parallel: true,
        }
    }
}

impl DetectOptions {
    pub fn from_tolerance(tol: &Tolerance) -> Self {
        Self {
            symprec: tol.symprec,
            angle_tolerance: tol.angle_tolerance,
            ..Self::default()
        }
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            symprec: self.symprec,
            angle_tolerance: self.angle_tolerance,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DetectedSymmetry {
    /// Canonicalized operation list.
    pub operations: Vec<SymOp>,
    /// Number of lattice rotations tried before the translation search.
    pub candidate_rotations: usize,
    /// `sym_atom[iop][iat]`: index of the atom `iat` is mapped onto by `iop`.
    pub sym_atom: Vec<Vec<usize>>,
    /// Smallest atom index of each atom's orbit.
    pub equivalent_atoms: Vec<usize>,
}

impl DetectedSymmetry {
    /// Distinct rotation parts in operation order.
    pub fn rotations(&self) -> Vec<Rotation> {
        let mut out: Vec<Rotation> = Vec::new();
        for op in self.operations.iter() {
            if !out.contains(op.rotation()) {
                out.push(*op.rotation());
            }
        }
        out
    }
}

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("tolerance must be positive and finite, got {symprec}")]
    NonPositiveTolerance { symprec: f64 },

    #[error("identity does not map the structure onto itself")]
    NoOperationsDetected,

    #[error("detected operations do not form a group: {0}")]
    InconsistentOperationSet(#[source] SymOpError),

    #[error(transparent)]
    Cell(#[from] CellError),

    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

#[inline]
fn use_parallel(options: &DetectOptions, n_candidates: usize) -> bool {
    options.parallel && n_candidates > 1 && rayon::current_num_threads() > 1
}

/// Integer rotations (in the basis of `lattice`) that map the lattice onto
/// itself within tolerance: the lattice point group, at most 48 elements.
pub fn lattice_point_group(lattice: &Lattice, tol: &Tolerance) -> Result<Vec<Rotation>, LatticeError> {
    let reduced = niggli_reduce(lattice, tol.symprec)?;
    let p = reduced.transformation;
    // det P = +1, so the adjugate is the inverse
    let p_inv = linalg::adjugate(p);
    let metric = reduced.lattice.get_metric_tensor();

    let mut out: Vec<Rotation> = enumerate_rotations()
        .filter(|r| tol.metrics_match(&transformed_metric(*r, &metric), &metric))
        .map(|r| linalg::mat_mul(linalg::mat_mul(p, r), p_inv))
        .collect();
    out.sort_by(cmp_rotation);
    trace!("lattice point group has {} rotations", out.len());
    Ok(out)
}

/// All `3^9` matrices with entries in `{-1,0,1}` and determinant `±1`.
fn enumerate_rotations() -> impl Iterator<Item = Rotation> {
    (0..3_usize.pow(9)).filter_map(|code| {
        let mut x = code;
        let mut vals = [0_i32; 9];
        for v in vals.iter_mut() {
            *v = (x % 3) as i32 - 1;
            x /= 3;
        }

        let rotation = [
            [vals[0], vals[1], vals[2]],
            [vals[3], vals[4], vals[5]],
            [vals[6], vals[7], vals[8]],
        ];
        let det = linalg::determinant(rotation);
        if det == 1 || det == -1 {
            Some(rotation)
        } else {
            None
        }
    })
}

/// One verified operation with its atom permutation.
#[derive(Clone, Debug)]
pub struct AtomMapping {
    pub operation: SymOp,
    pub permutation: Vec<usize>,
    /// Largest squared Cartesian distance between a mapped atom and its image.
    pub residual: f64,
}

/// Verifies that `(rotation, translation)` maps every atom onto a distinct
/// atom with the same site label; returns the refined operation.
pub fn map_atoms(
    cell: &Cell,
    metric: &Matrix3,
    rotation: Rotation,
    translation: Vector3,
    tol: &Tolerance,
) -> Option<AtomMapping> {
    let positions = cell.get_atom_positions();
    let n = positions.len();
    let tol2 = tol.symprec * tol.symprec;
    let mut used = vec![false; n];
    let mut permutation = vec![0; n];
    let mut shift = [0.0; 3];
    let mut residual: f64 = 0.0;

    for (i, position) in positions.iter().enumerate() {
        let mapped = linalg::add(linalg::rotate(rotation, *position), translation);

        let mut found: Option<(usize, f64)> = None;
        for k in 0..n {
            if used[k] || !cell.same_site_label(i, k, tol.symprec) {
                continue;
            }
            let d2 = linalg::min_image_distance_sq(metric, linalg::sub(positions[k], mapped));
            if d2 <= tol2 && found.map_or(true, |(_, best)| d2 < best) {
                found = Some((k, d2));
            }
        }

        let (k, d2) = found?;
        used[k] = true;
        permutation[i] = k;
        residual = residual.max(d2);
        shift = linalg::add(shift, linalg::centered(linalg::sub(positions[k], mapped)));
    }

    let refined = linalg::add(translation, linalg::scale(shift, 1.0 / n as f64));
    let operation = SymOp::new(rotation, refined).ok()?;
    Some(AtomMapping {
        operation,
        permutation,
        residual,
    })
}

/// Best translation for one rotation, anchored on the rarest species.
fn search_rotation(
    cell: &Cell,
    metric: &Matrix3,
    rotation: Rotation,
    anchors: &[usize],
    tol: &Tolerance,
) -> Option<AtomMapping> {
    let positions = cell.get_atom_positions();
    let anchor = *anchors.first()?;
    let rotated = linalg::rotate(rotation, positions[anchor]);

    anchors
        .iter()
        .filter(|&&j| cell.same_site_label(anchor, j, tol.symprec))
        .filter_map(|&j| {
            let t = linalg::sub(positions[j], rotated);
            map_atoms(cell, metric, rotation, t, tol)
        })
        .min_by(|a, b| a.residual.partial_cmp(&b.residual).unwrap_or(Ordering::Equal))
}

/// Finds all symmetry operations of a primitive cell.
///
/// The cell must be primitive (see `crystal::find_primitive`): at most one
/// translation is kept per rotation.
pub fn find_operations(
    cell: &Cell,
    options: &DetectOptions,
) -> Result<DetectedSymmetry, DetectionError> {
    let tol = options.tolerance();
    if !tol.is_valid() {
        return Err(DetectionError::NonPositiveTolerance {
            symprec: tol.symprec,
        });
    }

    let metric = cell.get_latt().get_metric_tensor();
    let rotations = lattice_point_group(cell.get_latt(), &tol)?;
    let anchors = cell.rarest_type_indices();

    let found: Vec<Option<AtomMapping>> = if use_parallel(options, rotations.len()) {
        rotations
            .par_iter()
            .map(|r| search_rotation(cell, &metric, *r, &anchors, &tol))
            .collect()
    } else {
        rotations
            .iter()
            .map(|r| search_rotation(cell, &metric, *r, &anchors, &tol))
            .collect()
    };

    let mut mappings: Vec<AtomMapping> = found.into_iter().flatten().collect();
    if !mappings
        .iter()
        .any(|m| *m.operation.rotation() == linalg::identity())
    {
        return Err(DetectionError::NoOperationsDetected);
    }
    mappings.sort_by(|lhs, rhs| cmp_operation(&lhs.operation, &rhs.operation));

    debug!(
        "{} of {} lattice rotations are symmetry operations",
        mappings.len(),
        rotations.len()
    );

    let operations: Vec<SymOp> = mappings.iter().map(|m| m.operation.clone()).collect();
    let sym_atom: Vec<Vec<usize>> = mappings.into_iter().map(|m| m.permutation).collect();
    trace!(
        "max metric deviation of detected rotations: {:.3e}",
        max_lattice_deviation(&operations, &metric)
    );

    if options.validate_group {
        validate_group(&operations, fractional_tolerance(cell.get_latt(), &tol))
            .map_err(DetectionError::InconsistentOperationSet)?;
    }

    let equivalent_atoms = equivalent_atoms_from(&sym_atom, cell.get_n_atoms());

    Ok(DetectedSymmetry {
        operations,
        candidate_rotations: rotations.len(),
        sym_atom,
        equivalent_atoms,
    })
}

/// Translation tolerance in fractional units for comparing refined
/// operations: a few `symprec` over the shortest axis.
pub fn fractional_tolerance(lattice: &Lattice, tol: &Tolerance) -> f64 {
    let min_len = lattice.lengths().iter().cloned().fold(f64::INFINITY, f64::min);
    4.0 * tol.symprec / min_len
}

/// Orbit representative (smallest index) per atom from the permutation table.
pub fn equivalent_atoms_from(sym_atom: &[Vec<usize>], n_atoms: usize) -> Vec<usize> {
    (0..n_atoms)
        .map(|i| {
            sym_atom
                .iter()
                .map(|perm| perm[i])
                .min()
                .unwrap_or(i)
                .min(i)
        })
        .collect()
}

/// Produces a canonical operation list:
/// - removes approximate duplicates (`tol` modulo lattice),
/// - sorts by rotation then translation for deterministic output.
pub fn standardize_operations(ops: &[SymOp], tol: f64) -> Vec<SymOp> {
    let mut out: Vec<SymOp> = Vec::new();
    for op in ops.iter() {
        if !out
            .iter()
            .any(|existing| sym_op_approx_eq(existing, op, tol))
        {
            out.push(op.clone());
        }
    }
    out.sort_by(cmp_operation);
    out
}

/// Identity first, then lexicographic on rotation and translation.
pub fn cmp_operation(lhs: &SymOp, rhs: &SymOp) -> Ordering {
    let id: Rotation = linalg::identity();
    let lhs_id = *lhs.rotation() == id;
    let rhs_id = *rhs.rotation() == id;
    if lhs_id != rhs_id {
        return if lhs_id { Ordering::Less } else { Ordering::Greater };
    }
    let rot_cmp = cmp_rotation(lhs.rotation(), rhs.rotation());
    if rot_cmp != Ordering::Equal {
        return rot_cmp;
    }
    let ltr = lhs.translation();
    let rtr = rhs.translation();
    for i in 0..3 {
        match ltr[i].partial_cmp(&rtr[i]) {
            Some(Ordering::Equal) => continue,
            Some(ord) => return ord,
            None => return Ordering::Equal,
        }
    }
    Ordering::Equal
}

/// Lexicographic compare for integer rotation matrices.
fn cmp_rotation(lhs: &Rotation, rhs: &Rotation) -> Ordering {
    for i in 0..3 {
        for j in 0..3 {
            let cmp = lhs[i][j].cmp(&rhs[i][j]);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(a: f64) -> Lattice {
        Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a])
    }

    fn all_ops_map_atoms(detected: &DetectedSymmetry, cell: &Cell) -> bool {
        let metric = cell.get_latt().get_metric_tensor();
        let tol = Tolerance::default();
        detected.operations.iter().all(|op| {
            map_atoms(cell, &metric, *op.rotation(), op.translation(), &tol).is_some()
        })
    }

    #[test]
    fn detect_cubic_single_atom() {
        let cell = Cell::new(cubic(1.0), vec![[0.0, 0.0, 0.0]], vec![1]).unwrap();
        let detected = find_operations(&cell, &DetectOptions::default()).unwrap();
        assert_eq!(detected.operations.len(), 48);
        assert_eq!(detected.candidate_rotations, 48);
        assert!(sym_op_approx_eq(
            &detected.operations[0],
            &SymOp::identity(),
            1.0e-9
        ));
        assert_eq!(detected.equivalent_atoms, vec![0]);
    }

    #[test]
    fn lattice_point_group_of_sheared_cubic_basis() {
        // a, a+b, a+b+c of a cube: the rotations are not all in {-1,0,1}
        let latt = Lattice::new([4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [4.0, 4.0, 4.0]);
        let rotations = lattice_point_group(&latt, &Tolerance::default()).unwrap();
        assert_eq!(rotations.len(), 48);
        let metric = latt.get_metric_tensor();
        for r in rotations.iter() {
            let g = transformed_metric(*r, &metric);
            for i in 0..3 {
                for j in 0..3 {
                    assert!((g[i][j] - metric[i][j]).abs() < 1.0e-9);
                }
            }
        }
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let cell = Cell::new(cubic(1.0), vec![[0.0, 0.0, 0.0]], vec![1]).unwrap();
        let options = DetectOptions {
            symprec: 0.0,
            ..DetectOptions::default()
        };
        assert!(matches!(
            find_operations(&cell, &options),
            Err(DetectionError::NonPositiveTolerance { .. })
        ));
    }

    #[test]
    fn standardize_operations_deduplicates() {
        let id = SymOp::identity();
        let c2z = SymOp::new([[-1, 0, 0], [0, -1, 0], [0, 0, 1]], [0.0, 0.0, 0.0]).unwrap();
        let standardized =
            standardize_operations(&[c2z.clone(), id.clone(), c2z.clone(), id.clone()], 1.0e-9);
        assert_eq!(standardized.len(), 2);
        assert!(sym_op_approx_eq(&standardized[0], &id, 1.0e-9));
        assert!(sym_op_approx_eq(&standardized[1], &c2z, 1.0e-9));
    }

    #[test]
    fn cesium_chloride_keeps_full_cubic_group() {
        let cell = Cell::new(
            cubic(4.1),
            vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
            vec![1, 2],
        )
        .unwrap();
        let detected = find_operations(&cell, &DetectOptions::default()).unwrap();
        assert_eq!(detected.operations.len(), 48);
        assert_eq!(detected.equivalent_atoms, vec![0, 1]);
        assert!(all_ops_map_atoms(&detected, &cell));
    }

    #[test]
    fn off_centre_atom_lowers_symmetry() {
        // tetragonal cell with an atom displaced along c: 4mm
        let latt = Lattice::new([3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 5.0]);
        let cell = Cell::new(
            latt,
            vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.3]],
            vec![1, 2],
        )
        .unwrap();
        let detected = find_operations(&cell, &DetectOptions::default()).unwrap();
        assert_eq!(detected.operations.len(), 8);
        assert_eq!(detected.rotations().len(), 8);
        assert!(detected.operations.iter().all(|op| op.apply_rotation([0.0, 0.0, 1.0])[2] > 0.0));
    }

    #[test]
    fn serial_and_parallel_agree() {
        let cell = Cell::new(
            cubic(4.0),
            vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5]],
            vec![1, 2, 2, 2],
        )
        .unwrap();
        let parallel = find_operations(&cell, &DetectOptions::default()).unwrap();
        let serial = find_operations(
            &cell,
            &DetectOptions {
                parallel: false,
                ..DetectOptions::default()
            },
        )
        .unwrap();
        assert_eq!(parallel.operations, serial.operations);
        assert_eq!(parallel.sym_atom, serial.sym_atom);
        assert_eq!(parallel.equivalent_atoms, vec![0, 1, 1, 1]);
    }

    #[test]
    fn detect_low_symmetry_structure_is_identity_only() {
        let latt = Lattice::new([1.0, 0.0, 0.0], [0.2, 1.1, 0.0], [0.3, 0.4, 0.9]);
        let cell = Cell::new(
            latt,
            vec![[0.113, 0.271, 0.389], [0.457, 0.613, 0.791], [0.8, 0.05, 0.33]],
            vec![1, 2, 3],
        )
        .unwrap();
        let detected = find_operations(&cell, &DetectOptions::default()).unwrap();
        assert_eq!(detected.operations.len(), 1);
        assert!(sym_op_approx_eq(
            &detected.operations[0],
            &SymOp::identity(),
            1.0e-9
        ));
        assert_eq!(detected.sym_atom, vec![vec![0, 1, 2]]);
        assert_eq!(detected.equivalent_atoms, vec![0, 1, 2]);
    }
}
