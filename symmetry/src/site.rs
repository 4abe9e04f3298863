//! Per-atom site symmetry and Wyckoff positions.
//!
//! Atoms are carried into the standard setting of the identified type,
//! their stabilizer is collected from the reference operations and looked up
//! in the Wyckoff table of the type.

use crystal::Cell;
use lattice::Lattice;
use linalg::{Matrix3, Tolerance, Vector3};
use log::trace;
use spacegroup::{wyckoff_table, SpaceGroupMatch, SpaceGroupType, StabilizerKey, WyckoffPosition};

use crate::error::SymmetryError;

/// Map between input fractional coordinates and the standard setting:
/// `x_std = T x + p` with `T = to_standard` and `p = -origin_shift`.
#[derive(Clone, Debug)]
pub struct StandardFrame {
    pub space_group: &'static SpaceGroupType,
    /// Input to conventional basis, `L_conv = L_input · M`.
    pub conventional_basis: Matrix3,
    pub to_standard: Matrix3,
    pub origin_shift: Vector3,
    /// Conventional lattice as measured (not yet symmetrized).
    pub lattice: Lattice,
}

impl StandardFrame {
    /// `primitive_transformation` is the `P` of `L_prim = L_input · P`.
    pub fn new(
        input_lattice: &Lattice,
        primitive_transformation: &Matrix3,
        matched: &SpaceGroupMatch,
    ) -> Option<StandardFrame> {
        let conventional_basis = linalg::mat_mul(
            *primitive_transformation,
            matched.setting.transformation_real(),
        );
        let to_standard = linalg::inverse(conventional_basis)?;
        Some(StandardFrame {
            space_group: matched.space_group,
            conventional_basis,
            to_standard,
            origin_shift: matched.origin_shift,
            lattice: input_lattice.transformed(&conventional_basis),
        })
    }

    pub fn with_origin_shift(&self, origin_shift: Vector3) -> StandardFrame {
        StandardFrame {
            origin_shift,
            ..self.clone()
        }
    }

    /// Standard coordinate of an input position, wrapped into `[0, 1)`.
    pub fn to_standard(&self, x: Vector3) -> Vector3 {
        linalg::wrapped(linalg::sub(
            linalg::mat_vec(self.to_standard, x),
            self.origin_shift,
        ))
    }

    /// Input coordinate of a standard position.
    pub fn from_standard(&self, x: Vector3) -> Vector3 {
        linalg::mat_vec(
            self.conventional_basis,
            linalg::add(x, self.origin_shift),
        )
    }
}

/// Site symmetry of one position in the standard setting.
#[derive(Clone, Debug)]
pub struct SiteSymmetry {
    pub wyckoff: &'static WyckoffPosition,
    /// Indices into the reference operations of the type.
    pub stabilizer: Vec<usize>,
    /// Lattice vector `L` of each stabilizer operation, `g(x) = x + L`.
    pub lattice_shifts: Vec<[i32; 3]>,
    /// Position averaged over its stabilizer.
    pub position: Vector3,
}

impl SiteSymmetry {
    pub fn letter(&self) -> char {
        self.wyckoff.letter
    }

    pub fn site_symmetry_symbol(&self) -> &'static str {
        self.wyckoff.site_symmetry
    }

    /// Projects `x` onto the fixed subspace of the stabilizer.
    pub fn symmetrize(&self, space_group: &SpaceGroupType, x: Vector3) -> Vector3 {
        let mut sum = [0.0; 3];
        for (&io, l) in self.stabilizer.iter().zip(self.lattice_shifts.iter()) {
            let image = space_group.operations[io].apply_unwrapped(x);
            sum = linalg::add(sum, linalg::sub(image, linalg::to_real_vec(*l)));
        }
        linalg::scale(sum, 1.0 / self.stabilizer.len() as f64)
    }
}

/// Moves coordinates within `symprec` below 1 to just below 0, so that the
/// lattice vectors of the stabilizer match those of the Wyckoff grid.
fn fold_near_one(x: Vector3, lengths: Vector3, symprec: f64) -> Vector3 {
    let mut out = x;
    for i in 0..3 {
        if (1.0 - out[i]) * lengths[i] < symprec {
            out[i] -= 1.0;
        }
    }
    out
}

/// Site symmetry of the standard position `x_std`.
pub fn site_symmetry(
    frame: &StandardFrame,
    x_std: Vector3,
    tol: &Tolerance,
) -> Result<SiteSymmetry, SymmetryError> {
    let sg = frame.space_group;
    let metric = frame.lattice.get_metric_tensor();
    let x = fold_near_one(x_std, frame.lattice.lengths(), tol.symprec);
    let tol2 = tol.symprec * tol.symprec;

    let mut key: StabilizerKey = Vec::new();
    for (io, op) in sg.operations.iter().enumerate() {
        let d = linalg::sub(op.apply_unwrapped(x), x);
        let l = [d[0].round(), d[1].round(), d[2].round()];
        if linalg::cart_distance_sq(&metric, linalg::sub(d, l)) <= tol2 {
            key.push((io, [l[0] as i32, l[1] as i32, l[2] as i32]));
        }
    }

    let wyckoff = wyckoff_table(sg)?.position_of(&key).ok_or_else(|| {
        SymmetryError::inconsistent(format!(
            "site {:?} with {} stabilizing operations matches no Wyckoff position of {}",
            x_std,
            key.len(),
            sg.international
        ))
    })?;

    let site = SiteSymmetry {
        wyckoff,
        stabilizer: key.iter().map(|(io, _)| *io).collect(),
        lattice_shifts: key.iter().map(|(_, l)| *l).collect(),
        position: x,
    };
    let position = site.symmetrize(sg, x);
    trace!(
        "site {:?} -> Wyckoff {}{} ({})",
        x_std,
        wyckoff.multiplicity,
        wyckoff.letter,
        wyckoff.site_symmetry
    );
    Ok(SiteSymmetry { position, ..site })
}

/// Site symmetry of every atom of `cell`.
pub fn resolve_sites(
    cell: &Cell,
    frame: &StandardFrame,
    tol: &Tolerance,
) -> Result<Vec<SiteSymmetry>, SymmetryError> {
    cell.get_atom_positions()
        .iter()
        .map(|x| site_symmetry(frame, frame.to_standard(*x), tol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use spacegroup::space_group_type;

    fn standard_frame(number: usize, lattice: Lattice) -> StandardFrame {
        StandardFrame {
            space_group: space_group_type(number).unwrap().unwrap(),
            conventional_basis: linalg::identity(),
            to_standard: linalg::identity(),
            origin_shift: [0.0; 3],
            lattice,
        }
    }

    fn cubic(a: f64) -> Lattice {
        Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a])
    }

    #[test]
    fn special_positions_of_pm3m() {
        let frame = standard_frame(221, cubic(4.0));
        let tol = Tolerance::default();

        let origin = site_symmetry(&frame, [0.0; 3], &tol).unwrap();
        assert_eq!(origin.letter(), 'a');
        assert_eq!(origin.site_symmetry_symbol(), "m-3m");
        assert_eq!(origin.stabilizer.len(), 48);

        let near_one = site_symmetry(&frame, [0.999_999_9, 0.0, 1.0e-7], &tol).unwrap();
        assert_eq!(near_one.letter(), 'a');
        assert_abs_diff_eq!(near_one.position[0], 0.0, epsilon = 1.0e-6);

        let general = site_symmetry(&frame, [0.11, 0.23, 0.37], &tol).unwrap();
        assert_eq!(general.wyckoff.multiplicity, 48);
        assert_eq!(general.stabilizer, vec![0]);
    }

    #[test]
    fn noisy_site_is_symmetrized() {
        let frame = standard_frame(221, cubic(4.0));
        let tol = Tolerance::default();
        // on the 4-fold axis x,0,0 with a little noise off it
        let site = site_symmetry(&frame, [0.2, 1.0e-7, 0.999_999_9], &tol).unwrap();
        assert_eq!(site.wyckoff.multiplicity, 6);
        assert_eq!(site.site_symmetry_symbol(), "4m.m");
        assert_eq!(site.letter(), 'e');
        assert_abs_diff_eq!(site.position[1], 0.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(site.position[2], 0.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(site.position[0], 0.2, epsilon = 1.0e-12);
    }

    #[test]
    fn frame_round_trip() {
        let frame = StandardFrame {
            origin_shift: [0.25, 0.0, 0.5],
            ..standard_frame(2, cubic(3.0))
        };
        let x = [0.1, 0.2, 0.3];
        let back = frame.from_standard(frame.to_standard(x));
        assert!(linalg::approx_eq_mod_lattice(back, x, 1.0e-12));
    }
}
