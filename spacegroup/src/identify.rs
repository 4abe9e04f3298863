//! Space-group type identification.
//!
//! The operations found on a primitive cell are carried into every candidate
//! conventional setting and compared with the reference entries of the same
//! point group and centering. For each entry the origin shift `s` is solved
//! from `(W - I) s = t_ref - w (mod 1)` over the generators, every centering
//! combination included, and the whole operation set is then checked.

use std::cmp::Ordering;

use itertools::Itertools;
use lattice::Lattice;
use linalg::{Tolerance, Vector3};
use log::{debug, trace};
use symops::{
    classify_operations, fractional_tolerance, validate_group, ClassificationError, PointGroup,
    SymOp,
};
use thiserror::Error;

use crate::conventional::{bravais_class, candidate_settings, ConventionalSetting};
use crate::database::{space_group_types, SpaceGroupType};
use crate::hall::HallError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdentifyError {
    #[error("no space-group type matches the {n_operations} operations of point group {point_group}")]
    NoMatchingSpaceGroup {
        point_group: &'static str,
        n_operations: usize,
    },

    #[error("conventional operation set is inconsistent: {0}")]
    InconsistentOperationSet(String),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Database(#[from] HallError),
}

/// Result of matching an operation set against the reference table.
#[derive(Clone, Debug)]
pub struct SpaceGroupMatch {
    pub space_group: &'static SpaceGroupType,
    /// Primitive to conventional basis.
    pub setting: ConventionalSetting,
    /// Preferred origin shift: `x_std = P^-1 x_prim - s`.
    pub origin_shift: Vector3,
    /// Every origin shift that reproduces the reference operations, modulo
    /// centering, preferred first.
    pub origin_shifts: Vec<Vector3>,
    pub bravais: &'static str,
}

impl SpaceGroupMatch {
    pub fn number(&self) -> usize {
        self.space_group.number
    }

    pub fn hall_symbol(&self) -> &'static str {
        self.space_group.hall_symbol
    }

    pub fn hall_number(&self) -> usize {
        self.space_group.hall_number
    }

    pub fn international(&self) -> &'static str {
        self.space_group.international
    }

    pub fn point_group(&self) -> &PointGroup {
        &self.space_group.point_group
    }

    /// Same match with another of the equivalent origins.
    pub fn with_origin(&self, origin_shift: Vector3) -> SpaceGroupMatch {
        SpaceGroupMatch {
            origin_shift,
            ..self.clone()
        }
    }
}

/// Identifies the space-group type of the operations of a primitive cell
/// with lattice `lattice`. The operations must form a group.
pub fn identify(
    lattice: &Lattice,
    operations: &[SymOp],
    tol: &Tolerance,
) -> Result<SpaceGroupMatch, IdentifyError> {
    validate_group(operations, fractional_tolerance(lattice, tol))
        .map_err(|e| IdentifyError::InconsistentOperationSet(e.to_string()))?;
    let point_group = classify_operations(operations)?;
    let rotations: Vec<_> = operations.iter().map(|op| *op.rotation()).collect();
    let settings = candidate_settings(lattice, &rotations, &point_group);

    let candidates: Vec<&'static SpaceGroupType> = space_group_types()?
        .iter()
        .filter(|sg| sg.point_group == point_group)
        .sorted_by(|a, b| {
            b.operations
                .len()
                .cmp(&a.operations.len())
                .then(a.number.cmp(&b.number))
        })
        .collect();

    for setting in settings.iter() {
        let p = setting.transformation_real();
        let p_inv = match setting.inverse() {
            Some(m) => m,
            None => continue,
        };
        let conv_ops: Vec<SymOp> = operations
            .iter()
            .filter_map(|op| op.change_basis(&p, &p_inv))
            .collect();
        if conv_ops.len() != operations.len() {
            trace!("setting {:?} does not keep every rotation integral", setting.transformation);
            continue;
        }
        let ftol = fractional_tolerance(&lattice.transformed(&p), tol);

        for sg in candidates.iter().filter(|sg| sg.centering == setting.centering) {
            if let Some(shifts) = match_origin(&conv_ops, sg, ftol) {
                debug!(
                    "matched {} ({}) in setting {:?} with {} origin shifts",
                    sg.number,
                    sg.international,
                    setting.transformation,
                    shifts.len()
                );
                return Ok(SpaceGroupMatch {
                    space_group: sg,
                    setting: setting.clone(),
                    origin_shift: shifts[0],
                    origin_shifts: shifts,
                    bravais: bravais_class(point_group.crystal_system, setting.centering),
                });
            }
        }
    }

    Err(IdentifyError::NoMatchingSpaceGroup {
        point_group: point_group.symbol,
        n_operations: operations.len(),
    })
}

/// Origin shifts `s` that turn `conv_ops` (one per rotation, conventional
/// basis) into the operations of `sg`; `None` when there is none.
pub fn match_origin(conv_ops: &[SymOp], sg: &SpaceGroupType, tol: f64) -> Option<Vec<Vector3>> {
    let centering = sg.lattice_points();
    if conv_ops.len() * centering.len() != sg.operations.len() {
        return None;
    }

    let mut pairs: Vec<(&SymOp, &SymOp)> = Vec::with_capacity(sg.generators.len());
    for g in sg.generators.iter() {
        let own = conv_ops.iter().find(|op| op.rotation() == g.rotation())?;
        pairs.push((g, own));
    }

    let mut shifts: Vec<Vector3> = Vec::new();
    let combos = (0..pairs.len())
        .map(|_| 0..centering.len())
        .multi_cartesian_product();
    for combo in combos {
        let mut a: Vec<[i64; 3]> = Vec::with_capacity(3 * pairs.len());
        let mut b: Vec<f64> = Vec::with_capacity(3 * pairs.len());
        for ((reference, own), &ic) in pairs.iter().zip(combo.iter()) {
            let w = linalg::mat_sub(*own.rotation(), linalg::identity());
            let rhs = linalg::sub(
                linalg::add(reference.translation(), centering[ic]),
                own.translation(),
            );
            for i in 0..3 {
                a.push([
                    i64::from(w[i][0]),
                    i64::from(w[i][1]),
                    i64::from(w[i][2]),
                ]);
                b.push(rhs[i]);
            }
        }

        let solution = match linalg::solve_modular(&a, &b, tol) {
            Some(s) => s,
            None => continue,
        };
        for z in solution.shifts.iter() {
            let s = linalg::wrapped(linalg::add(solution.particular, *z));
            let known = shifts.iter().any(|k| {
                centering
                    .iter()
                    .any(|c| linalg::approx_eq_mod_lattice(linalg::add(*k, *c), s, tol))
            });
            if !known && reproduces(conv_ops, sg, s, tol) {
                shifts.push(s);
            }
        }
    }

    if shifts.is_empty() {
        return None;
    }
    shifts.sort_by(|x, y| {
        norm_centered(*x)
            .partial_cmp(&norm_centered(*y))
            .unwrap_or(Ordering::Equal)
    });
    Some(shifts)
}

fn norm_centered(s: Vector3) -> f64 {
    linalg::norm(linalg::centered(s))
}

/// Whether every `(W, w)` of `conv_ops` becomes a reference operation
/// `(W, w + (W - I) s)`.
fn reproduces(conv_ops: &[SymOp], sg: &SpaceGroupType, s: Vector3, tol: f64) -> bool {
    conv_ops.iter().all(|op| {
        let t = linalg::add(
            op.translation(),
            linalg::sub(linalg::rotate(*op.rotation(), s), s),
        );
        sg.operations.iter().any(|r| {
            r.rotation() == op.rotation() && linalg::approx_eq_mod_lattice(r.translation(), t, tol)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::space_group_type;
    use crystal::{find_primitive, Cell};
    use symops::{find_operations, DetectOptions};

    fn identify_cell(cell: &Cell) -> SpaceGroupMatch {
        let tol = Tolerance::default();
        let prim = find_primitive(cell, &tol).unwrap();
        let ops = find_operations(&prim.cell, &DetectOptions::default())
            .unwrap()
            .operations;
        identify(prim.cell.get_latt(), &ops, &tol).unwrap()
    }

    fn cubic(a: f64) -> Lattice {
        Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a])
    }

    #[test]
    fn reference_operations_match_themselves() {
        for &n in [2, 14, 62, 141, 166, 194, 227].iter() {
            let sg = space_group_type(n).unwrap().unwrap();
            let reps: Vec<SymOp> = sg.coset_representatives().into_iter().cloned().collect();
            let shifts = match_origin(&reps, sg, 1.0e-8).unwrap();
            assert!(linalg::norm(linalg::centered(shifts[0])) < 1.0e-8, "{}", n);
        }
    }

    #[test]
    fn shifted_origin_is_recovered() {
        let sg = space_group_type(62).unwrap().unwrap();
        let s = [0.1, 0.2, 0.3];
        // operations seen from an origin moved by -s
        let moved: Vec<SymOp> = sg
            .coset_representatives()
            .into_iter()
            .map(|op| {
                let t = linalg::sub(
                    op.translation(),
                    linalg::sub(linalg::rotate(*op.rotation(), s), s),
                );
                op.with_translation(t)
            })
            .collect();
        let shifts = match_origin(&moved, sg, 1.0e-8).unwrap();
        assert!(shifts
            .iter()
            .any(|x| linalg::approx_eq_mod_lattice(*x, s, 1.0e-8)));
    }

    fn c2(axis: usize) -> SymOp {
        let mut r = [[-1, 0, 0], [0, -1, 0], [0, 0, -1]];
        r[axis][axis] = 1;
        SymOp::new(r, [0.0; 3]).unwrap()
    }

    #[test]
    fn centred_translation_matches_no_type() {
        // a second lattice point means the cell is not primitive
        let ops = vec![SymOp::identity(), SymOp::translation_only([0.5, 0.0, 0.0])];
        let lattice = Lattice::new([4.0, 0.1, 0.2], [0.3, 5.0, 0.1], [0.2, 0.4, 6.0]);
        assert!(matches!(
            identify(&lattice, &ops, &Tolerance::default()),
            Err(IdentifyError::NoMatchingSpaceGroup {
                point_group: "1",
                n_operations: 2
            })
        ));
        let p1 = space_group_type(1).unwrap().unwrap();
        assert!(match_origin(&ops, p1, 1.0e-8).is_none());
    }

    #[test]
    fn unclosed_operations_are_inconsistent() {
        // 2z and 2x without their product 2y
        let ops = vec![SymOp::identity(), c2(2), c2(0)];
        let result = identify(&cubic(4.0), &ops, &Tolerance::default());
        assert!(matches!(
            result,
            Err(IdentifyError::InconsistentOperationSet(ref reason)) if reason.contains("closed")
        ));
    }

    #[test]
    fn simple_cubic_is_221() {
        let cell = Cell::new(cubic(4.0), vec![[0.0; 3]], vec![1]).unwrap();
        let m = identify_cell(&cell);
        assert_eq!(m.number(), 221);
        assert_eq!(m.international(), "Pm-3m");
        assert_eq!(m.bravais, "cP");
    }

    #[test]
    fn rocksalt_is_225() {
        let mut positions = Vec::new();
        let mut types = Vec::new();
        for f in [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]].iter() {
            positions.push(*f);
            types.push(11);
            positions.push(linalg::wrapped(linalg::add(*f, [0.5, 0.5, 0.5])));
            types.push(17);
        }
        let cell = Cell::new(cubic(5.64), positions, types).unwrap();
        let m = identify_cell(&cell);
        assert_eq!(m.number(), 225);
        assert_eq!(m.setting.centering, crate::hall::Centering::F);
        assert_eq!(m.bravais, "cF");
    }

    #[test]
    fn hcp_is_194() {
        let (a, c) = (3.2, 5.2);
        let lattice = Lattice::new(
            [a, 0.0, 0.0],
            [-a / 2.0, a * 3f64.sqrt() / 2.0, 0.0],
            [0.0, 0.0, c],
        );
        let cell = Cell::new(
            lattice,
            vec![[1.0 / 3.0, 2.0 / 3.0, 0.25], [2.0 / 3.0, 1.0 / 3.0, 0.75]],
            vec![1, 1],
        )
        .unwrap();
        let m = identify_cell(&cell);
        assert_eq!(m.number(), 194);
        assert_eq!(m.hall_symbol(), "-P 6c 2c");
    }

    #[test]
    fn generic_triclinic_is_p1() {
        let lattice = Lattice::new([4.0, 0.1, 0.2], [0.3, 5.0, 0.1], [0.2, 0.4, 6.0]);
        let cell = Cell::new(
            lattice,
            vec![[0.1, 0.2, 0.3], [0.4, 0.7, 0.1], [0.8, 0.35, 0.6]],
            vec![1, 2, 3],
        )
        .unwrap();
        let m = identify_cell(&cell);
        assert_eq!(m.number(), 1);
        assert_eq!(m.bravais, "aP");
    }
}
