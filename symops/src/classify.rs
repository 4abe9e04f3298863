//! Point-group classification.
//!
//! Each distinct rotation is typed by determinant and trace into one of
//! `-6, -4, -3, m, -1, 1, 2, 3, 4, 6`; the count of each type identifies the
//! crystallographic point group uniquely among the 32.

use std::fmt;

use thiserror::Error;

use crate::{Rotation, SymOp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrystalSystem::Triclinic => "triclinic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Cubic => "cubic",
        };
        write!(f, "{}", name)
    }
}

/// One of the 32 crystallographic point groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointGroup {
    /// Position in the conventional ordering, 1 (`1`) to 32 (`m-3m`).
    pub number: usize,
    /// International (Hermann–Mauguin) symbol.
    pub symbol: &'static str,
    pub schoenflies: &'static str,
    pub crystal_system: CrystalSystem,
    pub laue: &'static str,
    pub holohedry: &'static str,
    /// Number of rotations.
    pub order: usize,
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.schoenflies)
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("no rotations provided")]
    EmptyOperations,

    #[error("rotation {rotation:?} is not crystallographic")]
    UnknownRotation { rotation: Rotation },

    #[error("rotation type counts {counts:?} match no crystallographic point group")]
    NoMatchingPointGroup { counts: [usize; 10] },

    #[error("point group {structure} has a higher holohedry than the lattice ({lattice})")]
    HolohedryExceedsLattice {
        structure: &'static str,
        lattice: &'static str,
    },
}

use CrystalSystem::*;

// symbol, Schoenflies, system, Laue class, holohedry,
// counts of rotation types [-6, -4, -3, m, -1, 1, 2, 3, 4, 6]
type TableRow = (
    &'static str,
    &'static str,
    CrystalSystem,
    &'static str,
    &'static str,
    [usize; 10],
);

const POINT_GROUP_TABLE: [TableRow; 32] = [
    ("1", "C1", Triclinic, "-1", "-1", [0, 0, 0, 0, 0, 1, 0, 0, 0, 0]),
    ("-1", "Ci", Triclinic, "-1", "-1", [0, 0, 0, 0, 1, 1, 0, 0, 0, 0]),
    ("2", "C2", Monoclinic, "2/m", "2/m", [0, 0, 0, 0, 0, 1, 1, 0, 0, 0]),
    ("m", "Cs", Monoclinic, "2/m", "2/m", [0, 0, 0, 1, 0, 1, 0, 0, 0, 0]),
    ("2/m", "C2h", Monoclinic, "2/m", "2/m", [0, 0, 0, 1, 1, 1, 1, 0, 0, 0]),
    ("222", "D2", Orthorhombic, "mmm", "mmm", [0, 0, 0, 0, 0, 1, 3, 0, 0, 0]),
    ("mm2", "C2v", Orthorhombic, "mmm", "mmm", [0, 0, 0, 2, 0, 1, 1, 0, 0, 0]),
    ("mmm", "D2h", Orthorhombic, "mmm", "mmm", [0, 0, 0, 3, 1, 1, 3, 0, 0, 0]),
    ("4", "C4", Tetragonal, "4/m", "4/mmm", [0, 0, 0, 0, 0, 1, 1, 0, 2, 0]),
    ("-4", "S4", Tetragonal, "4/m", "4/mmm", [0, 2, 0, 0, 0, 1, 1, 0, 0, 0]),
    ("4/m", "C4h", Tetragonal, "4/m", "4/mmm", [0, 2, 0, 1, 1, 1, 1, 0, 2, 0]),
    ("422", "D4", Tetragonal, "4/mmm", "4/mmm", [0, 0, 0, 0, 0, 1, 5, 0, 2, 0]),
    ("4mm", "C4v", Tetragonal, "4/mmm", "4/mmm", [0, 0, 0, 4, 0, 1, 1, 0, 2, 0]),
    ("-42m", "D2d", Tetragonal, "4/mmm", "4/mmm", [0, 2, 0, 2, 0, 1, 3, 0, 0, 0]),
    ("4/mmm", "D4h", Tetragonal, "4/mmm", "4/mmm", [0, 2, 0, 5, 1, 1, 5, 0, 2, 0]),
    ("3", "C3", Trigonal, "-3", "-3m", [0, 0, 0, 0, 0, 1, 0, 2, 0, 0]),
    ("-3", "C3i", Trigonal, "-3", "-3m", [0, 0, 2, 0, 1, 1, 0, 2, 0, 0]),
    ("32", "D3", Trigonal, "-3m", "-3m", [0, 0, 0, 0, 0, 1, 3, 2, 0, 0]),
    ("3m", "C3v", Trigonal, "-3m", "-3m", [0, 0, 0, 3, 0, 1, 0, 2, 0, 0]),
    ("-3m", "D3d", Trigonal, "-3m", "-3m", [0, 0, 2, 3, 1, 1, 3, 2, 0, 0]),
    ("6", "C6", Hexagonal, "6/m", "6/mmm", [0, 0, 0, 0, 0, 1, 1, 2, 0, 2]),
    ("-6", "C3h", Hexagonal, "6/m", "6/mmm", [2, 0, 0, 1, 0, 1, 0, 2, 0, 0]),
    ("6/m", "C6h", Hexagonal, "6/m", "6/mmm", [2, 0, 2, 1, 1, 1, 1, 2, 0, 2]),
    ("622", "D6", Hexagonal, "6/mmm", "6/mmm", [0, 0, 0, 0, 0, 1, 7, 2, 0, 2]),
    ("6mm", "C6v", Hexagonal, "6/mmm", "6/mmm", [0, 0, 0, 6, 0, 1, 1, 2, 0, 2]),
    ("-6m2", "D3h", Hexagonal, "6/mmm", "6/mmm", [2, 0, 0, 4, 0, 1, 3, 2, 0, 0]),
    ("6/mmm", "D6h", Hexagonal, "6/mmm", "6/mmm", [2, 0, 2, 7, 1, 1, 7, 2, 0, 2]),
    ("23", "T", Cubic, "m-3", "m-3m", [0, 0, 0, 0, 0, 1, 3, 8, 0, 0]),
    ("m-3", "Th", Cubic, "m-3", "m-3m", [0, 0, 8, 3, 1, 1, 3, 8, 0, 0]),
    ("432", "O", Cubic, "m-3m", "m-3m", [0, 0, 0, 0, 0, 1, 9, 8, 6, 0]),
    ("-43m", "Td", Cubic, "m-3m", "m-3m", [0, 6, 0, 6, 0, 1, 3, 8, 0, 0]),
    ("m-3m", "Oh", Cubic, "m-3m", "m-3m", [0, 6, 8, 9, 1, 1, 9, 8, 6, 0]),
];

fn entry(number: usize) -> PointGroup {
    let (symbol, schoenflies, crystal_system, laue, holohedry, counts) =
        POINT_GROUP_TABLE[number - 1];
    PointGroup {
        number,
        symbol,
        schoenflies,
        crystal_system,
        laue,
        holohedry,
        order: counts.iter().sum(),
    }
}

/// Point group by international symbol, e.g. `"m-3m"`.
pub fn point_group_by_symbol(symbol: &str) -> Option<PointGroup> {
    POINT_GROUP_TABLE
        .iter()
        .position(|row| row.0 == symbol)
        .map(|i| entry(i + 1))
}

/// Rotation type from determinant and trace: `1, 2, 3, 4, 6` for proper
/// rotations, `-1, -2 (m), -3, -4, -6` for improper ones.
pub fn rotation_type(rotation: &Rotation) -> Option<i32> {
    let det = linalg::determinant(*rotation);
    let trace = linalg::trace(*rotation);
    match (det, trace) {
        (1, 3) => Some(1),
        (1, -1) => Some(2),
        (1, 0) => Some(3),
        (1, 1) => Some(4),
        (1, 2) => Some(6),
        (-1, -3) => Some(-1),
        (-1, 1) => Some(-2),
        (-1, 0) => Some(-3),
        (-1, -1) => Some(-4),
        (-1, -2) => Some(-6),
        _ => None,
    }
}

fn type_slot(rotation_type: i32) -> usize {
    match rotation_type {
        -6 => 0,
        -4 => 1,
        -3 => 2,
        -2 => 3,
        -1 => 4,
        1 => 5,
        2 => 6,
        3 => 7,
        4 => 8,
        _ => 9,
    }
}

/// Classifies a set of rotations (duplicates ignored).
pub fn classify_point_group(rotations: &[Rotation]) -> Result<PointGroup, ClassificationError> {
    if rotations.is_empty() {
        return Err(ClassificationError::EmptyOperations);
    }

    let mut distinct: Vec<Rotation> = Vec::new();
    for r in rotations.iter() {
        if !distinct.contains(r) {
            distinct.push(*r);
        }
    }

    let mut counts = [0_usize; 10];
    for r in distinct.iter() {
        let t = rotation_type(r).ok_or(ClassificationError::UnknownRotation { rotation: *r })?;
        counts[type_slot(t)] += 1;
    }

    POINT_GROUP_TABLE
        .iter()
        .position(|row| row.5 == counts)
        .map(|i| entry(i + 1))
        .ok_or(ClassificationError::NoMatchingPointGroup { counts })
}

/// Point group of the rotation parts of an operation set.
pub fn classify_operations(ops: &[SymOp]) -> Result<PointGroup, ClassificationError> {
    let rotations: Vec<Rotation> = ops.iter().map(|op| *op.rotation()).collect();
    classify_point_group(&rotations)
}

/// Fails when the structure's holohedry is richer than the lattice's.
pub fn check_lattice_holohedry(
    structure: &PointGroup,
    lattice: &PointGroup,
) -> Result<(), ClassificationError> {
    let holohedry_order = |pg: &PointGroup| point_group_by_symbol(pg.holohedry).map_or(0, |h| h.order);
    if holohedry_order(structure) > holohedry_order(lattice) {
        return Err(ClassificationError::HolohedryExceedsLattice {
            structure: structure.symbol,
            lattice: lattice.symbol,
        });
    }
    Ok(())
}

/// Computes multiplicative order of integer rotation matrix.
///
/// Returns `None` if identity is not reached by order 12.
pub fn rotation_order(rotation: &Rotation) -> Option<u8> {
    let identity: Rotation = linalg::identity();
    let mut power = identity;
    for order in 1..=12 {
        power = linalg::mat_mul(power, *rotation);
        if power == identity {
            return Some(order as u8);
        }
    }
    None
}

/// Primitive integer direction of the axis of `rotation` (the fixed axis of
/// its proper part), first non-zero component positive. `None` for `±1`.
pub fn rotation_axis(rotation: &Rotation) -> Option<[i32; 3]> {
    let det = linalg::determinant(*rotation);
    let mut m = *rotation;
    for row in m.iter_mut() {
        for v in row.iter_mut() {
            *v *= det;
        }
    }
    if m == linalg::identity() {
        return None;
    }
    for (i, row) in m.iter_mut().enumerate() {
        row[i] -= 1;
    }

    // the null space of (W' - I) is the cross product of two independent rows
    let rows = [m[0], m[1], m[2]];
    let mut axis = [0_i32; 3];
    'outer: for a in 0..3 {
        for b in (a + 1)..3 {
            let c = cross_i(rows[a], rows[b]);
            if c != [0, 0, 0] {
                axis = c;
                break 'outer;
            }
        }
    }
    if axis == [0, 0, 0] {
        return None;
    }

    let g = axis
        .iter()
        .fold(0_i64, |g, &v| linalg::extended_gcd(g, i64::from(v)).0) as i32;
    for v in axis.iter_mut() {
        *v /= g;
    }
    if let Some(first) = axis.iter().find(|v| **v != 0) {
        if *first < 0 {
            for v in axis.iter_mut() {
                *v = -*v;
            }
        }
    }
    Some(axis)
}

fn cross_i(a: [i32; 3], b: [i32; 3]) -> [i32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::close_group;
    use crate::detect::{find_operations, DetectOptions};
    use crystal::Cell;
    use lattice::Lattice;

    fn op(r: Rotation) -> SymOp {
        SymOp::new(r, [0.0; 3]).unwrap()
    }

    fn point_group_of(generators: &[Rotation]) -> PointGroup {
        let ops: Vec<SymOp> = generators.iter().map(|r| op(*r)).collect();
        let group = close_group(&ops, 1.0e-9).unwrap();
        classify_operations(&group).unwrap()
    }

    const INVERSION: Rotation = [[-1, 0, 0], [0, -1, 0], [0, 0, -1]];
    const C6Z: Rotation = [[1, -1, 0], [1, 0, 0], [0, 0, 1]];
    const C3Z: Rotation = [[0, -1, 0], [1, -1, 0], [0, 0, 1]];
    const C2A_HEX: Rotation = [[1, -1, 0], [0, -1, 0], [0, 0, -1]];
    const C4Z: Rotation = [[0, -1, 0], [1, 0, 0], [0, 0, 1]];

    #[test]
    fn table_orders_are_consistent() {
        for number in 1..=32 {
            let pg = entry(number);
            assert_eq!(point_group_by_symbol(pg.symbol), Some(pg));
            assert!(pg.order % 2 == 0 || pg.order == 1 || pg.order == 3);
        }
        assert_eq!(point_group_by_symbol("m-3m").unwrap().order, 48);
        assert_eq!(point_group_by_symbol("-6m2").unwrap().order, 12);
        assert_eq!(point_group_by_symbol("bogus"), None);
    }

    #[test]
    fn classify_p1_and_inversion() {
        let pg = classify_point_group(&[linalg::identity()]).unwrap();
        assert_eq!(pg.symbol, "1");
        assert_eq!(pg.crystal_system, CrystalSystem::Triclinic);
        let pg = point_group_of(&[INVERSION]);
        assert_eq!(pg.symbol, "-1");
        assert_eq!(pg.schoenflies, "Ci");
    }

    #[test]
    fn hexagonal_and_trigonal_groups() {
        let pg = point_group_of(&[C6Z, C2A_HEX, INVERSION]);
        assert_eq!(pg.symbol, "6/mmm");
        assert_eq!(pg.order, 24);

        let pg = point_group_of(&[C3Z, C2A_HEX]);
        assert_eq!(pg.symbol, "32");
        assert_eq!(pg.laue, "-3m");

        let minus_six = linalg::mat_mul(C3Z, [[1, 0, 0], [0, 1, 0], [0, 0, -1]]);
        assert_eq!(point_group_of(&[minus_six]).symbol, "-6");
    }

    #[test]
    fn tetragonal_groups() {
        assert_eq!(point_group_of(&[C4Z, INVERSION]).symbol, "4/m");
        let minus_four = linalg::mat_mul(C4Z, INVERSION);
        assert_eq!(point_group_of(&[minus_four]).symbol, "-4");
        let mirror_x = [[-1, 0, 0], [0, 1, 0], [0, 0, 1]];
        assert_eq!(point_group_of(&[C4Z, mirror_x]).symbol, "4mm");
    }

    #[test]
    fn non_group_is_rejected() {
        assert!(matches!(
            classify_point_group(&[linalg::identity(), C4Z]),
            Err(ClassificationError::NoMatchingPointGroup { .. })
        ));
        assert!(matches!(
            classify_point_group(&[[[1, 1, 0], [0, 1, 0], [0, 0, 1]]]),
            Err(ClassificationError::UnknownRotation { .. })
        ));
        assert_eq!(classify_point_group(&[]), Err(ClassificationError::EmptyOperations));
    }

    #[test]
    fn holohedry_check() {
        let cubic = point_group_by_symbol("m-3m").unwrap();
        let hex = point_group_by_symbol("6/mmm").unwrap();
        let trig = point_group_by_symbol("-3").unwrap();
        assert!(check_lattice_holohedry(&trig, &hex).is_ok());
        assert!(check_lattice_holohedry(&cubic, &hex).is_err());
    }

    #[test]
    fn rotation_axes_and_orders() {
        assert_eq!(rotation_axis(&C4Z), Some([0, 0, 1]));
        assert_eq!(rotation_axis(&C2A_HEX), Some([1, 0, 0]));
        assert_eq!(rotation_axis(&INVERSION), None);
        let three_fold_body = [[0, 0, 1], [1, 0, 0], [0, 1, 0]];
        assert_eq!(rotation_axis(&three_fold_body), Some([1, 1, 1]));
        assert_eq!(rotation_order(&C6Z), Some(6));
        assert_eq!(rotation_order(&INVERSION), Some(2));
    }

    #[test]
    fn classify_cubic_detector_output() {
        let latt = Lattice::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        let cell = Cell::new(latt, vec![[0.0, 0.0, 0.0]], vec![1]).unwrap();
        let detected = find_operations(&cell, &DetectOptions::default()).unwrap();
        let pg = classify_operations(&detected.operations).unwrap();
        assert_eq!(pg.symbol, "m-3m");
        assert_eq!(pg.crystal_system, CrystalSystem::Cubic);
    }
}
