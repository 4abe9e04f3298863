//! Primitive-cell extraction.
//!
//! Pure translations are found by anchoring on the rarest species, the
//! lattice they generate together with the input basis is built with an
//! integer Hermite normal form, and the atoms are folded into that smaller
//! cell and Niggli-reduced.

use crate::{Cell, CellError};
use lattice::{niggli_reduce, Lattice};
use linalg::{Matrix3, Tolerance, Vector3};
use log::debug;

/// Primitive cell of a structure.
#[derive(Debug, Clone)]
pub struct PrimitiveCell {
    /// Niggli-reduced primitive cell.
    pub cell: Cell,
    /// For every input atom, the index of its primitive-cell atom.
    pub mapping_to_primitive: Vec<usize>,
    /// Real matrix `P` with `L_primitive = L_input · P`.
    pub transformation: Matrix3,
    /// Pure translations of the input cell (fractional, zero first).
    pub translations: Vec<Vector3>,
}

impl PrimitiveCell {
    /// Number of input cells' worth of lattice points per input cell.
    pub fn multiplicity(&self) -> usize {
        self.translations.len()
    }
}

/// Fractional translations `t` (zero included) that map the structure onto
/// itself: for every atom `x_i` there is an atom with the same site label at
/// `x_i + t`.
pub fn find_pure_translations(cell: &Cell, tol: &Tolerance) -> Vec<Vector3> {
    let metric = cell.get_latt().get_metric_tensor();
    let positions = cell.get_atom_positions();
    let anchor_candidates = cell.rarest_type_indices();
    let anchor = match anchor_candidates.first() {
        Some(a) => *a,
        None => return Vec::new(),
    };

    let mut translations = vec![[0.0; 3]];
    for &j in anchor_candidates.iter().skip(1) {
        if !cell.same_site_label(anchor, j, tol.symprec) {
            continue;
        }
        let t = linalg::sub(positions[j], positions[anchor]);
        if let Some(refined) = refine_translation(cell, &metric, t, tol) {
            translations.push(linalg::wrapped(refined));
        }
    }
    translations
}

/// Checks that `t` maps every atom onto an equivalent one and returns it
/// corrected by the mean residual.
fn refine_translation(
    cell: &Cell,
    metric: &Matrix3,
    t: Vector3,
    tol: &Tolerance,
) -> Option<Vector3> {
    let positions = cell.get_atom_positions();
    let mut residual = [0.0; 3];
    for (i, xi) in positions.iter().enumerate() {
        let moved = linalg::add(*xi, t);
        let partner = (0..positions.len()).find(|&k| {
            cell.same_site_label(i, k, tol.symprec)
                && tol.within(metric, linalg::sub(positions[k], moved))
        })?;
        residual = linalg::add(
            residual,
            linalg::centered(linalg::sub(positions[partner], moved)),
        );
    }
    let n = positions.len() as f64;
    Some(linalg::add(t, linalg::scale(residual, 1.0 / n)))
}

/// Finds the primitive cell of `cell`. An already primitive input comes back
/// Niggli-reduced with the identity mapping.
pub fn find_primitive(cell: &Cell, tol: &Tolerance) -> Result<PrimitiveCell, CellError> {
    cell.validate(tol)?;

    // right-handed working basis
    let flip = if cell.get_latt().volume() < 0.0 { -1.0 } else { 1.0 };
    let mut transformation: Matrix3 = linalg::mat_scale(linalg::identity(), flip);
    let work = Cell::build(
        cell.get_latt().transformed(&transformation),
        cell.get_atom_positions()
            .iter()
            .map(|x| linalg::scale(*x, flip))
            .collect(),
        cell.get_atom_types().to_vec(),
        cell.get_atom_spins().map(|s| s.to_vec()),
    )?;

    let translations = find_pure_translations(&work, tol);
    let n_trans = translations.len();
    let n_atoms = work.get_n_atoms();
    debug!("{} pure translations found for {} atoms", n_trans, n_atoms);

    if n_trans == 0 || n_atoms % n_trans != 0 {
        return Err(CellError::InconsistentOperationSet {
            n_atoms,
            n_translations: n_trans,
        });
    }

    let (sub_basis, positions, types, spins, mapping) = if n_trans == 1 {
        (
            linalg::identity(),
            work.get_atom_positions().to_vec(),
            work.get_atom_types().to_vec(),
            work.get_atom_spins().map(|s| s.to_vec()),
            (0..n_atoms).collect::<Vec<usize>>(),
        )
    } else {
        let sub_basis = primitive_basis(&translations).ok_or(
            CellError::InconsistentOperationSet {
                n_atoms,
                n_translations: n_trans,
            },
        )?;
        let folded = fold_atoms(&work, &sub_basis, n_trans, tol)?;
        (sub_basis, folded.0, folded.1, folded.2, folded.3)
    };

    transformation = linalg::mat_mul(transformation, sub_basis);
    let prim_latt: Lattice = work.get_latt().transformed(&sub_basis);

    let reduced = niggli_reduce(&prim_latt, tol.symprec)?;
    let red_inv = linalg::inverse_unimodular(reduced.transformation).ok_or(
        CellError::InconsistentOperationSet {
            n_atoms,
            n_translations: n_trans,
        },
    )?;
    transformation = linalg::mat_mul(transformation, linalg::to_real(reduced.transformation));

    let positions = positions
        .iter()
        .map(|x| linalg::rotate(red_inv, *x))
        .collect();
    let prim = Cell::build(reduced.lattice, positions, types, spins)?;

    Ok(PrimitiveCell {
        cell: prim,
        mapping_to_primitive: mapping,
        transformation,
        translations,
    })
}

/// Basis of the lattice generated by the unit cell and `translations`,
/// as columns in the input fractional basis.
fn primitive_basis(translations: &[Vector3]) -> Option<Matrix3> {
    let n = translations.len() as i64;
    let mut generators: Vec<[i64; 3]> = vec![[n, 0, 0], [0, n, 0], [0, 0, n]];
    for t in translations.iter().skip(1) {
        generators.push([
            (t[0] * n as f64).round() as i64,
            (t[1] * n as f64).round() as i64,
            (t[2] * n as f64).round() as i64,
        ]);
    }
    let h = linalg::hermite_normal_form(&generators)?;
    let det = h[0][0] * h[1][1] * h[2][2];
    if det != n * n {
        return None;
    }

    let mut basis = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            basis[i][j] = h[i][j] as f64 / n as f64;
        }
    }
    Some(basis)
}

type Folded = (Vec<Vector3>, Vec<i32>, Option<Vec<f64>>, Vec<usize>);

/// Re-expresses atoms in the sub-basis and merges images of each other.
fn fold_atoms(
    work: &Cell,
    sub_basis: &Matrix3,
    n_trans: usize,
    tol: &Tolerance,
) -> Result<Folded, CellError> {
    let n_atoms = work.get_n_atoms();
    let inconsistent = || CellError::InconsistentOperationSet {
        n_atoms,
        n_translations: n_trans,
    };
    let inv = linalg::inverse(*sub_basis).ok_or_else(inconsistent)?;
    let metric = work.get_latt().transformed(sub_basis).get_metric_tensor();

    let reexpressed: Vec<Vector3> = work
        .get_atom_positions()
        .iter()
        .map(|x| linalg::wrapped(linalg::mat_vec(inv, *x)))
        .collect();

    let mut mapping = vec![usize::MAX; n_atoms];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..n_atoms {
        if mapping[i] != usize::MAX {
            continue;
        }
        let members: Vec<usize> = (i..n_atoms)
            .filter(|&k| {
                mapping[k] == usize::MAX
                    && work.same_site_label(i, k, tol.symprec)
                    && tol.within(&metric, linalg::sub(reexpressed[k], reexpressed[i]))
            })
            .collect();
        if members.len() != n_trans {
            return Err(inconsistent());
        }
        for &k in members.iter() {
            mapping[k] = groups.len();
        }
        groups.push(members);
    }

    let mut positions = Vec::with_capacity(groups.len());
    let mut types = Vec::with_capacity(groups.len());
    let mut spins = work.get_atom_spins().map(|_| Vec::with_capacity(groups.len()));
    for members in groups.iter() {
        let first = members[0];
        let base = reexpressed[first];
        let mut shift = [0.0; 3];
        for &k in members.iter() {
            shift = linalg::add(shift, linalg::centered(linalg::sub(reexpressed[k], base)));
        }
        positions.push(linalg::wrapped(linalg::add(
            base,
            linalg::scale(shift, 1.0 / members.len() as f64),
        )));
        types.push(work.get_atom_types()[first]);
        if let (Some(out), Some(src)) = (spins.as_mut(), work.get_atom_spins()) {
            let mean = members.iter().map(|&k| src[k]).sum::<f64>() / members.len() as f64;
            out.push(mean);
        }
    }

    Ok((positions, types, spins, mapping))
}
