//! Conventional cells of a primitive lattice.
//!
//! The conventional basis is read off the rotation axes of the point group.
//! Where the axes leave a choice (monoclinic in-plane vectors, orthorhombic
//! and cubic axis order) every candidate is returned in a fixed order and the
//! identifier tries them in turn.

use std::cmp::Ordering;

use itertools::{iproduct, Itertools};
use lattice::Lattice;
use linalg::{IMatrix3, Matrix3, Vector3};
use log::debug;
use symops::{rotation_axis, CrystalSystem, PointGroup, Rotation};

use crate::hall::Centering;

/// Conventional basis as integer columns in primitive fractional coordinates,
/// `L_conv = L_prim · P`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConventionalSetting {
    pub transformation: IMatrix3,
    pub centering: Centering,
}

impl ConventionalSetting {
    pub fn transformation_real(&self) -> Matrix3 {
        linalg::to_real(self.transformation)
    }

    pub fn inverse(&self) -> Option<Matrix3> {
        linalg::inverse(self.transformation_real())
    }
}

const SEARCH_RANGE: i32 = 3;

/// Lattice points of the primitive lattice inside the cell spanned by the
/// columns of `p`, zero first; `None` unless `det p > 0`.
pub fn lattice_points(p: &IMatrix3) -> Option<Vec<Vector3>> {
    let det = linalg::determinant(*p);
    if det <= 0 {
        return None;
    }
    let inv = linalg::inverse(linalg::to_real(*p))?;

    let mut points: Vec<Vector3> = vec![[0.0; 3]];
    for (i, j, k) in iproduct!(0..det, 0..det, 0..det) {
        let v = linalg::wrapped(linalg::mat_vec(
            inv,
            [f64::from(i), f64::from(j), f64::from(k)],
        ));
        if !points
            .iter()
            .any(|q| linalg::approx_eq_mod_lattice(*q, v, 1.0e-8))
        {
            points.push(v);
        }
        if points.len() == det as usize {
            break;
        }
    }
    Some(points)
}

/// Centering of the cell spanned by `p`; `None` for non-standard centerings
/// (reverse rhombohedral included).
pub fn centering_of(p: &IMatrix3) -> Option<Centering> {
    let points = lattice_points(p)?;
    [
        Centering::P,
        Centering::A,
        Centering::B,
        Centering::C,
        Centering::I,
        Centering::R,
        Centering::F,
    ]
    .iter()
    .copied()
    .find(|c| same_points(&c.lattice_points(), &points))
}

fn same_points(lhs: &[Vector3], rhs: &[Vector3]) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .all(|a| rhs.iter().any(|b| linalg::approx_eq_mod_lattice(*a, *b, 1.0e-8)))
}

fn proper(r: &Rotation) -> Rotation {
    let det = linalg::determinant(*r);
    let mut m = *r;
    for row in m.iter_mut() {
        for v in row.iter_mut() {
            *v *= det;
        }
    }
    m
}

/// Proper parts with the given trace (`-1` twofold, `0` threefold, `1`
/// fourfold, `2` sixfold), duplicates removed.
fn proper_rotations(rotations: &[Rotation], trace: i32) -> Vec<Rotation> {
    rotations
        .iter()
        .map(proper)
        .filter(|r| linalg::trace(*r) == trace)
        .unique()
        .collect()
}

fn distinct_axes(rotations: &[Rotation]) -> Vec<[i32; 3]> {
    rotations
        .iter()
        .filter_map(rotation_axis)
        .unique()
        .sorted()
        .collect()
}

fn length(metric: &Matrix3, v: [i32; 3]) -> f64 {
    linalg::cart_distance_sq(metric, linalg::to_real_vec(v)).sqrt()
}

/// Lattice vectors (one sign each) satisfying `accept`, shortest first.
fn short_vectors<F>(metric: &Matrix3, accept: F) -> Vec<[i32; 3]>
where
    F: Fn([i32; 3]) -> bool,
{
    let r = SEARCH_RANGE;
    iproduct!(-r..=r, -r..=r, -r..=r)
        .map(|(i, j, k)| [i, j, k])
        .filter(|v| *v != [0, 0, 0])
        .filter(|v| v.iter().find(|x| **x != 0).map_or(false, |x| *x > 0))
        .filter(|v| accept(*v))
        .sorted_by(|a, b| {
            length(metric, *a)
                .partial_cmp(&length(metric, *b))
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(b))
        })
        .collect()
}

fn neg(v: [i32; 3]) -> [i32; 3] {
    [-v[0], -v[1], -v[2]]
}

fn with_positive_det(a: [i32; 3], b: [i32; 3], c: [i32; 3]) -> IMatrix3 {
    let p = linalg::from_columns(a, b, c);
    if linalg::determinant(p) < 0 {
        linalg::from_columns(a, b, neg(c))
    } else {
        p
    }
}

/// Candidate conventional settings of a primitive `lattice` whose point
/// group is `point_group`, in the order they should be tried.
pub fn candidate_settings(
    lattice: &Lattice,
    rotations: &[Rotation],
    point_group: &PointGroup,
) -> Vec<ConventionalSetting> {
    let metric = lattice.get_metric_tensor();
    let matrices = match point_group.crystal_system {
        CrystalSystem::Triclinic => vec![linalg::identity()],
        CrystalSystem::Monoclinic => monoclinic(&metric, rotations),
        CrystalSystem::Orthorhombic => orthorhombic(rotations),
        CrystalSystem::Tetragonal => tetragonal(&metric, rotations),
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => hexagonal(&metric, rotations),
        CrystalSystem::Cubic => cubic(rotations),
    };

    let mut settings: Vec<ConventionalSetting> = Vec::new();
    for p in matrices.into_iter() {
        if let Some(centering) = centering_of(&p) {
            let setting = ConventionalSetting {
                transformation: p,
                centering,
            };
            if !settings.contains(&setting) {
                settings.push(setting);
            }
        }
    }
    debug!(
        "{} candidate conventional settings for point group {}",
        settings.len(),
        point_group.symbol
    );
    settings
}

fn monoclinic(metric: &Matrix3, rotations: &[Rotation]) -> Vec<IMatrix3> {
    let two = match proper_rotations(rotations, -1).first() {
        Some(r) => *r,
        None => return Vec::new(),
    };
    let b = match rotation_axis(&two) {
        Some(axis) => axis,
        None => return Vec::new(),
    };
    let plane: Vec<[i32; 3]> = short_vectors(metric, |v| linalg::mat_vec(two, v) == neg(v))
        .into_iter()
        .take(5)
        .collect();

    let mut out = Vec::new();
    for (a, c) in Itertools::tuple_combinations(plane.iter()) {
        for &(x, y) in [(*a, *c), (*c, *a)].iter() {
            for &sign in [1, -1].iter() {
                let y = if sign > 0 { y } else { neg(y) };
                let p = linalg::from_columns(x, b, y);
                let det = linalg::determinant(p);
                if det == 1 || det == 2 {
                    out.push(p);
                }
            }
        }
    }
    out.into_iter()
        .filter(|p| matches!(centering_of(p), Some(Centering::P) | Some(Centering::C)))
        .collect()
}

fn orthorhombic(rotations: &[Rotation]) -> Vec<IMatrix3> {
    let axes = distinct_axes(&proper_rotations(rotations, -1));
    if axes.len() != 3 {
        return Vec::new();
    }
    axes.iter()
        .permutations(3)
        .map(|p| with_positive_det(*p[0], *p[1], *p[2]))
        .collect()
}

fn tetragonal(metric: &Matrix3, rotations: &[Rotation]) -> Vec<IMatrix3> {
    let four = match proper_rotations(rotations, 1).first() {
        Some(r) => *r,
        None => return Vec::new(),
    };
    let c = match rotation_axis(&four) {
        Some(axis) => axis,
        None => return Vec::new(),
    };
    let two = linalg::mat_mul(four, four);
    short_vectors(metric, |v| linalg::mat_vec(two, v) == neg(v))
        .into_iter()
        .take(1)
        .map(|a| with_positive_det(a, linalg::mat_vec(four, a), c))
        .collect()
}

fn hexagonal(metric: &Matrix3, rotations: &[Rotation]) -> Vec<IMatrix3> {
    let three = match proper_rotations(rotations, 0).first() {
        Some(r) => *r,
        None => return Vec::new(),
    };
    let c = match rotation_axis(&three) {
        Some(axis) => axis,
        None => return Vec::new(),
    };
    let three_sq = linalg::mat_mul(three, three);
    let in_plane = |v: [i32; 3]| {
        let w1 = linalg::mat_vec(three, v);
        let w2 = linalg::mat_vec(three_sq, v);
        (0..3).all(|k| v[k] + w1[k] + w2[k] == 0)
    };

    let mut out = Vec::new();
    for a in short_vectors(metric, in_plane).into_iter().take(1) {
        let mut p = linalg::from_columns(a, linalg::mat_vec(three, a), c);
        if linalg::determinant(p) < 0 {
            p = linalg::from_columns(a, linalg::mat_vec(three_sq, a), c);
        }
        if linalg::determinant(p) == 3 && centering_of(&p).is_none() {
            // reverse setting: rotate by 180 degrees about c
            let a = neg(linalg::column(p, 0));
            let b = neg(linalg::column(p, 1));
            p = linalg::from_columns(a, b, c);
        }
        out.push(p);
    }
    out
}

fn cubic(rotations: &[Rotation]) -> Vec<IMatrix3> {
    let mut axes = distinct_axes(&proper_rotations(rotations, 1));
    if axes.len() != 3 {
        axes = distinct_axes(&proper_rotations(rotations, -1));
    }
    if axes.len() != 3 {
        return Vec::new();
    }
    axes.iter()
        .permutations(3)
        .map(|p| with_positive_det(*p[0], *p[1], *p[2]))
        .collect()
}

/// Bravais class symbol from crystal system and centering.
pub fn bravais_class(system: CrystalSystem, centering: Centering) -> &'static str {
    match (system, centering) {
        (CrystalSystem::Triclinic, _) => "aP",
        (CrystalSystem::Monoclinic, Centering::P) => "mP",
        (CrystalSystem::Monoclinic, _) => "mC",
        (CrystalSystem::Orthorhombic, Centering::P) => "oP",
        (CrystalSystem::Orthorhombic, Centering::I) => "oI",
        (CrystalSystem::Orthorhombic, Centering::F) => "oF",
        (CrystalSystem::Orthorhombic, _) => "oS",
        (CrystalSystem::Tetragonal, Centering::I) => "tI",
        (CrystalSystem::Tetragonal, _) => "tP",
        (CrystalSystem::Trigonal, Centering::R) => "hR",
        (CrystalSystem::Trigonal, _) | (CrystalSystem::Hexagonal, _) => "hP",
        (CrystalSystem::Cubic, Centering::I) => "cI",
        (CrystalSystem::Cubic, Centering::F) => "cF",
        (CrystalSystem::Cubic, _) => "cP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symops::{classify_point_group, lattice_point_group};
    use linalg::Tolerance;

    fn settings_of(lattice: &Lattice) -> Vec<ConventionalSetting> {
        let rotations = lattice_point_group(lattice, &Tolerance::default()).unwrap();
        let pg = classify_point_group(&rotations).unwrap();
        candidate_settings(lattice, &rotations, &pg)
    }

    #[test]
    fn centering_from_transformation() {
        assert_eq!(centering_of(&linalg::identity()), Some(Centering::P));
        let fcc = [[-1, 1, 1], [1, -1, 1], [1, 1, -1]];
        assert_eq!(centering_of(&fcc), Some(Centering::F));
        let obverse = [[1, 0, 1], [-1, 1, 1], [0, -1, 1]];
        assert_eq!(linalg::determinant(obverse), 3);
        assert_eq!(centering_of(&obverse), Some(Centering::R));
        assert_eq!(centering_of(&[[2, 0, 0], [0, 1, 0], [0, 0, 1]]), None);
        assert_eq!(lattice_points(&[[0, 1, 0], [1, 0, 0], [0, 0, 1]]), None);
    }

    #[test]
    fn face_centred_primitive_cell() {
        let h = 2.0;
        let lattice = Lattice::new([0.0, h, h], [h, 0.0, h], [h, h, 0.0]);
        let settings = settings_of(&lattice);
        assert!(!settings.is_empty());
        for s in settings.iter() {
            assert_eq!(s.centering, Centering::F);
            let conv = lattice.transformed(&s.transformation_real());
            for l in conv.lengths().iter() {
                assert!((l - 4.0).abs() < 1.0e-9);
            }
        }
    }

    #[test]
    fn body_centred_tetragonal() {
        let (a, c) = (3.0, 5.0);
        let lattice = Lattice::new(
            [-a / 2.0, a / 2.0, c / 2.0],
            [a / 2.0, -a / 2.0, c / 2.0],
            [a / 2.0, a / 2.0, -c / 2.0],
        );
        let settings = settings_of(&lattice);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].centering, Centering::I);
        let conv = lattice.transformed(&settings[0].transformation_real());
        let l = conv.lengths();
        assert!((l[0] - a).abs() < 1.0e-9);
        assert!((l[2] - c).abs() < 1.0e-9);
    }

    #[test]
    fn rhombohedral_is_obverse() {
        // primitive rhombohedral cell of a hexagonal a = 3, c = 10 lattice
        let (a, c) = (3.0, 10.0);
        let ah = [a, 0.0, 0.0];
        let bh = [-a / 2.0, a * 3f64.sqrt() / 2.0, 0.0];
        let ch = [0.0, 0.0, c];
        let comb = |x: f64, y: f64, z: f64| {
            linalg::add(
                linalg::add(linalg::scale(ah, x), linalg::scale(bh, y)),
                linalg::scale(ch, z),
            )
        };
        let lattice = Lattice::new(
            comb(2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
            comb(-1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
            comb(-1.0 / 3.0, -2.0 / 3.0, 1.0 / 3.0),
        );
        let settings = settings_of(&lattice);
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].centering, Centering::R);
        let conv = lattice.transformed(&settings[0].transformation_real());
        let l = conv.lengths();
        assert!((l[0] - a).abs() < 1.0e-9);
        assert!((l[2] - c).abs() < 1.0e-9);
    }

    #[test]
    fn bravais_symbols() {
        assert_eq!(bravais_class(CrystalSystem::Cubic, Centering::F), "cF");
        assert_eq!(bravais_class(CrystalSystem::Orthorhombic, Centering::A), "oS");
        assert_eq!(bravais_class(CrystalSystem::Trigonal, Centering::R), "hR");
        assert_eq!(bravais_class(CrystalSystem::Hexagonal, Centering::P), "hP");
    }
}
