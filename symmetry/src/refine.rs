//! Idealized (refined) structures.
//!
//! The conventional metric is averaged over the point group and rebuilt with
//! a along x and b in the xy plane. Every orbit representative is averaged
//! with its orbit, projected onto its site, snapped to small fractions,
//! projected again and expanded with the exact reference operations.

use crystal::Cell;
use lattice::Lattice;
use linalg::{Matrix3, Tolerance, Vector3};
use log::debug;
use spacegroup::{Centering, SpaceGroupType};
use symops::{DetectOptions, Rotation};

use crate::error::SymmetryError;
use crate::site::site_symmetry;
use crate::SymmetryDataset;

const DEDUP_TOL: f64 = 1.0e-6;

/// Standardized structure in the setting of the reference table.
#[derive(Clone, Debug)]
pub struct RefinedCell {
    /// Conventional cell.
    pub cell: Cell,
    /// Primitive cell obtained from `cell` by removing the centering.
    pub primitive: Cell,
    /// For every input atom, the index of its atom in `cell`.
    pub mapping_to_refined: Vec<usize>,
    /// Wyckoff letter of every atom of `cell`.
    pub wyckoffs: Vec<char>,
    pub spacegroup_number: usize,
}

/// Metric averaged over the rotations of `space_group`, `Σ WᵀGW / n`.
pub fn symmetrize_metric(metric: &Matrix3, space_group: &SpaceGroupType) -> Matrix3 {
    let mut rotations: Vec<Rotation> = Vec::new();
    for op in space_group.operations.iter() {
        if !rotations.contains(op.rotation()) {
            rotations.push(*op.rotation());
        }
    }

    let mut sum = [[0.0; 3]; 3];
    for w in rotations.iter() {
        let w = linalg::to_real(*w);
        sum = linalg::mat_add(
            sum,
            linalg::mat_mul(linalg::mat_mul(linalg::transpose(w), *metric), w),
        );
    }
    linalg::mat_scale(sum, 1.0 / rotations.len() as f64)
}

/// Lattice with metric `g`, a along x and b in the xy plane.
pub fn lattice_from_metric(g: &Matrix3) -> Lattice {
    let a = g[0][0].sqrt();
    let b = g[1][1].sqrt();
    let c = g[2][2].sqrt();
    let cos_alpha = g[1][2] / (b * c);
    let cos_beta = g[0][2] / (a * c);
    let cos_gamma = g[0][1] / (a * b);
    let sin_gamma = (1.0 - cos_gamma * cos_gamma).max(0.0).sqrt();

    let cx = c * cos_beta;
    let cy = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
    let cz = (c * c - cx * cx - cy * cy).max(0.0).sqrt();

    Lattice::new(
        [a, 0.0, 0.0],
        [b * cos_gamma, b * sin_gamma, 0.0],
        [cx, cy, cz],
    )
}

/// Conventional to primitive basis for a centering, `L_prim = L_conv · Q`.
pub fn centering_transformation(centering: Centering) -> Matrix3 {
    let third = 1.0 / 3.0;
    let columns: [Vector3; 3] = match centering {
        Centering::P => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        Centering::A => [[1.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.0, -0.5, 0.5]],
        Centering::B => [[0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [-0.5, 0.0, 0.5]],
        Centering::C => [[0.5, -0.5, 0.0], [0.5, 0.5, 0.0], [0.0, 0.0, 1.0]],
        Centering::I => [[-0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, -0.5]],
        Centering::R => [
            [2.0 * third, third, third],
            [-third, third, third],
            [-third, -2.0 * third, third],
        ],
        Centering::F => [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]],
    };
    linalg::from_columns(columns[0], columns[1], columns[2])
}

fn push_unique(points: &mut Vec<Vector3>, x: Vector3) -> bool {
    if points
        .iter()
        .any(|p| linalg::approx_eq_mod_lattice(*p, x, DEDUP_TOL))
    {
        false
    } else {
        points.push(x);
        true
    }
}

fn snapped(x: Vector3, lengths: Vector3, symprec: f64) -> Vector3 {
    [
        linalg::snap_to_fraction(x[0], symprec / lengths[0]),
        linalg::snap_to_fraction(x[1], symprec / lengths[1]),
        linalg::snap_to_fraction(x[2], symprec / lengths[2]),
    ]
}

/// Standard position of atom `iat` averaged with the other members of its
/// orbit, each carried back by an operation that maps `iat` onto it.
fn orbit_average(
    cell: &Cell,
    dataset: &SymmetryDataset,
    iat: usize,
    tol: &Tolerance,
) -> Vector3 {
    let frame = dataset.standard_frame();
    let metric = frame.lattice.get_metric_tensor();
    let positions = cell.get_atom_positions();
    let x = frame.to_standard(positions[iat]);

    let mut sum = [0.0; 3];
    let mut n = 0;
    for (j, y) in positions.iter().enumerate() {
        if dataset.equivalent_atoms[j] != iat {
            continue;
        }
        let y = frame.to_standard(*y);
        let back = frame.space_group.operations.iter().find_map(|op| {
            if tol.within(&metric, linalg::sub(op.apply_unwrapped(x), y)) {
                op.inverse().ok().map(|inv| inv.apply_unwrapped(y))
            } else {
                None
            }
        });
        if let Some(z) = back {
            let offset = linalg::sub(x, z);
            let lattice_shift = [offset[0].round(), offset[1].round(), offset[2].round()];
            sum = linalg::add(sum, linalg::add(z, lattice_shift));
            n += 1;
        }
    }

    if n == 0 {
        x
    } else {
        linalg::scale(sum, 1.0 / f64::from(n))
    }
}

/// Refines `cell` with its symmetry dataset.
pub fn refine(cell: &Cell, dataset: &SymmetryDataset) -> Result<RefinedCell, SymmetryError> {
    let tol = dataset.tolerance();
    let frame = dataset.standard_frame();
    let sg = frame.space_group;

    let metric = symmetrize_metric(&frame.lattice.get_metric_tensor(), sg);
    let lattice = lattice_from_metric(&metric);
    let lengths = lattice.lengths();

    let spins = cell.get_atom_spins();
    let mut positions: Vec<Vector3> = Vec::new();
    let mut types: Vec<i32> = Vec::new();
    let mut refined_spins: Vec<f64> = Vec::new();
    let mut wyckoffs: Vec<char> = Vec::new();

    for iat in 0..cell.get_n_atoms() {
        if dataset.equivalent_atoms[iat] != iat {
            continue;
        }
        let mean = orbit_average(cell, dataset, iat, &tol);
        let site = site_symmetry(frame, linalg::wrapped(mean), &tol)?;
        let x = site.symmetrize(sg, snapped(site.position, lengths, tol.symprec));

        let start = positions.len();
        for op in sg.operations.iter() {
            if push_unique(&mut positions, op.apply_fractional(x)) {
                types.push(cell.get_atom_types()[iat]);
                if let Some(s) = spins {
                    refined_spins.push(s[iat]);
                }
                wyckoffs.push(site.letter());
            }
        }
        let found = positions.len() - start;
        if found != site.wyckoff.multiplicity {
            return Err(SymmetryError::inconsistent(format!(
                "orbit of atom {} has {} sites, Wyckoff {}{} needs {}",
                iat,
                found,
                site.wyckoff.multiplicity,
                site.letter(),
                site.wyckoff.multiplicity
            )));
        }
    }
    debug!(
        "refined conventional cell of {} holds {} atoms",
        sg.international,
        positions.len()
    );

    let refined_metric = lattice.get_metric_tensor();
    let mut mapping_to_refined = Vec::with_capacity(cell.get_n_atoms());
    for (iat, x) in cell.get_atom_positions().iter().enumerate() {
        let x_std = frame.to_standard(*x);
        let label = cell.get_atom_types()[iat];
        let best = (0..positions.len())
            .filter(|&k| types[k] == label)
            .map(|k| {
                let diff = linalg::sub(positions[k], x_std);
                (k, linalg::min_image_distance_sq(&refined_metric, diff))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| {
                SymmetryError::inconsistent(format!("atom {} has no refined image", iat))
            })?;
        mapping_to_refined.push(best.0);
    }

    let primitive = primitive_of(
        &lattice,
        sg,
        &positions,
        &types,
        spins.map(|_| refined_spins.as_slice()),
    )?;

    let refined = match spins {
        Some(_) => Cell::with_spins(lattice, positions, types, refined_spins)?,
        None => Cell::new(lattice, positions, types)?,
    };

    Ok(RefinedCell {
        cell: refined,
        primitive,
        mapping_to_refined,
        wyckoffs,
        spacegroup_number: sg.number,
    })
}

/// Removes the centering of a refined conventional cell.
fn primitive_of(
    lattice: &Lattice,
    sg: &SpaceGroupType,
    positions: &[Vector3],
    types: &[i32],
    spins: Option<&[f64]>,
) -> Result<Cell, SymmetryError> {
    let q = centering_transformation(sg.centering);
    let q_inv = linalg::inverse(q)
        .ok_or_else(|| SymmetryError::inconsistent("singular centering transformation"))?;

    let mut prim_positions: Vec<Vector3> = Vec::new();
    let mut prim_types = Vec::new();
    let mut prim_spins = Vec::new();
    for (i, x) in positions.iter().enumerate() {
        let y = linalg::wrapped(linalg::mat_vec(q_inv, *x));
        if push_unique(&mut prim_positions, y) {
            prim_types.push(types[i]);
            if let Some(s) = spins {
                prim_spins.push(s[i]);
            }
        }
    }

    let expected = positions.len() / sg.centering.order();
    if prim_positions.len() != expected {
        return Err(SymmetryError::inconsistent(format!(
            "{} atoms left after removing {} centering, expected {}",
            prim_positions.len(),
            sg.centering,
            expected
        )));
    }

    let prim_lattice = lattice.transformed(&q);
    let cell = match spins {
        Some(_) => Cell::with_spins(prim_lattice, prim_positions, prim_types, prim_spins)?,
        None => Cell::new(prim_lattice, prim_positions, prim_types)?,
    };
    Ok(cell)
}

/// Finds the symmetry of `cell` and refines it.
pub fn refine_cell(cell: &Cell, options: &DetectOptions) -> Result<RefinedCell, SymmetryError> {
    let dataset = SymmetryDataset::new(cell, options)?;
    refine(cell, &dataset)
}

/// Standardized primitive cell of `cell`.
pub fn standardize_primitive(cell: &Cell, options: &DetectOptions) -> Result<Cell, SymmetryError> {
    Ok(refine_cell(cell, options)?.primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use spacegroup::space_group_type;

    #[test]
    fn hexagonal_metric_is_restored() {
        let sg = space_group_type(194).unwrap().unwrap();
        // gamma slightly off 120 degrees and a != b
        let noisy = Lattice::new(
            [3.2, 0.0, 0.0],
            [-1.600_001, 2.771_28, 0.0],
            [0.0, 0.0, 5.2],
        );
        let g = symmetrize_metric(&noisy.get_metric_tensor(), sg);
        let l = lattice_from_metric(&g);
        let lengths = l.lengths();
        assert_abs_diff_eq!(lengths[0], lengths[1], epsilon = 1.0e-12);
        assert_abs_diff_eq!(l.angles()[2], 120.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(l.get_vector_a()[1], 0.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(l.get_vector_b()[2], 0.0, epsilon = 1.0e-15);
    }

    #[test]
    fn centering_transformations_have_the_right_volume() {
        for &(c, order) in [
            (Centering::P, 1.0),
            (Centering::A, 2.0),
            (Centering::B, 2.0),
            (Centering::C, 2.0),
            (Centering::I, 2.0),
            (Centering::R, 3.0),
            (Centering::F, 4.0),
        ]
        .iter()
        {
            let q = centering_transformation(c);
            assert_abs_diff_eq!(linalg::determinant(q), 1.0 / order, epsilon = 1.0e-12);
            assert_eq!(c.order() as f64, order);
            // every column is a lattice point of the centred cell
            for j in 0..3 {
                let col = linalg::column(q, j);
                assert!(c
                    .lattice_points()
                    .iter()
                    .any(|p| linalg::approx_eq_mod_lattice(*p, col, 1.0e-12)));
            }
        }
    }
}
