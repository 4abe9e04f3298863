#![allow(dead_code)]

use crystal::Cell;
use lattice::Lattice;
use linalg::Vector3;
use spacegroup::space_group_type;
use symops::DetectOptions;
use symmetry::SymmetryDataset;

pub fn cubic(a: f64) -> Lattice {
    Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a])
}

pub fn tetragonal(a: f64, c: f64) -> Lattice {
    Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, c])
}

pub fn hexagonal(a: f64, c: f64) -> Lattice {
    Lattice::new(
        [a, 0.0, 0.0],
        [-a / 2.0, a * 3f64.sqrt() / 2.0, 0.0],
        [0.0, 0.0, c],
    )
}

pub fn options(symprec: f64) -> DetectOptions {
    DetectOptions {
        symprec,
        ..DetectOptions::default()
    }
}

pub fn dataset(cell: &Cell) -> SymmetryDataset {
    SymmetryDataset::new(cell, &DetectOptions::default()).unwrap()
}

fn add(a: Vector3, b: Vector3) -> Vector3 {
    linalg::wrapped(linalg::add(a, b))
}

pub fn simple_cubic() -> Cell {
    Cell::new(cubic(4.0), vec![[0.0; 3]], vec![1]).unwrap()
}

const FCC_POINTS: [Vector3; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

/// Conventional cell with `basis` repeated on every F lattice point.
pub fn face_centred(a: f64, basis: &[(Vector3, i32)]) -> Cell {
    let mut positions = Vec::new();
    let mut types = Vec::new();
    for f in FCC_POINTS.iter() {
        for (x, t) in basis.iter() {
            positions.push(add(*f, *x));
            types.push(*t);
        }
    }
    Cell::new(cubic(a), positions, types).unwrap()
}

pub fn fcc_conventional() -> Cell {
    face_centred(4.05, &[([0.0; 3], 13)])
}

pub fn fcc_primitive() -> Cell {
    let h = 4.05 / 2.0;
    let lattice = Lattice::new([0.0, h, h], [h, 0.0, h], [h, h, 0.0]);
    Cell::new(lattice, vec![[0.0; 3]], vec![13]).unwrap()
}

pub fn bcc() -> Cell {
    Cell::new(cubic(2.87), vec![[0.0; 3], [0.5; 3]], vec![26, 26]).unwrap()
}

pub fn rocksalt() -> Cell {
    face_centred(5.64, &[([0.0; 3], 11), ([0.5, 0.5, 0.5], 17)])
}

pub fn diamond() -> Cell {
    face_centred(5.43, &[([0.0; 3], 14), ([0.25, 0.25, 0.25], 14)])
}

pub fn hcp() -> Cell {
    Cell::new(
        hexagonal(3.21, 5.21),
        vec![[1.0 / 3.0, 2.0 / 3.0, 0.25], [2.0 / 3.0, 1.0 / 3.0, 0.75]],
        vec![12, 12],
    )
    .unwrap()
}

pub fn rutile() -> Cell {
    let u = 0.305;
    Cell::new(
        tetragonal(4.594, 2.959),
        vec![
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.5],
            [u, u, 0.0],
            [1.0 - u, 1.0 - u, 0.0],
            [0.5 + u, 0.5 - u, 0.5],
            [0.5 - u, 0.5 + u, 0.5],
        ],
        vec![22, 22, 8, 8, 8, 8],
    )
    .unwrap()
}

pub fn wurtzite() -> Cell {
    let u = 0.382;
    Cell::new(
        hexagonal(3.25, 5.21),
        vec![
            [1.0 / 3.0, 2.0 / 3.0, 0.0],
            [2.0 / 3.0, 1.0 / 3.0, 0.5],
            [1.0 / 3.0, 2.0 / 3.0, u],
            [2.0 / 3.0, 1.0 / 3.0, 0.5 + u],
        ],
        vec![30, 30, 8, 8],
    )
    .unwrap()
}

/// Orbits of `points` under the reference operations of type `number`.
pub fn from_space_group(number: usize, lattice: Lattice, points: &[(Vector3, i32)]) -> Cell {
    let sg = space_group_type(number).unwrap().unwrap();
    let mut positions: Vec<Vector3> = Vec::new();
    let mut types = Vec::new();
    for (x, t) in points.iter() {
        for op in sg.operations.iter() {
            let y = op.apply_fractional(*x);
            if !positions
                .iter()
                .any(|p| linalg::approx_eq_mod_lattice(*p, y, 1.0e-8))
            {
                positions.push(y);
                types.push(*t);
            }
        }
    }
    Cell::new(lattice, positions, types).unwrap()
}

/// P 1 21/c 1 with one atom type on the general position.
pub fn monoclinic() -> Cell {
    let beta = 100f64.to_radians();
    let lattice = Lattice::new(
        [5.0, 0.0, 0.0],
        [0.0, 6.0, 0.0],
        [7.0 * beta.cos(), 0.0, 7.0 * beta.sin()],
    );
    from_space_group(14, lattice, &[([0.1, 0.2, 0.3], 6)])
}

/// P n m a with atoms on 4c and 8d.
pub fn orthorhombic() -> Cell {
    let lattice = Lattice::new([5.3, 0.0, 0.0], [0.0, 7.6, 0.0], [0.0, 0.0, 5.5]);
    from_space_group(
        62,
        lattice,
        &[([0.05, 0.25, 0.48], 20), ([0.29, 0.04, 0.71], 8)],
    )
}

/// Three distinct species at generic positions of a generic cell.
pub fn no_symmetry() -> Cell {
    let lattice = Lattice::new([4.0, 0.1, 0.2], [0.3, 5.0, 0.1], [0.2, 0.4, 6.0]);
    Cell::new(
        lattice,
        vec![[0.1, 0.2, 0.3], [0.4, 0.7, 0.1], [0.8, 0.35, 0.6]],
        vec![1, 2, 3],
    )
    .unwrap()
}

/// `cell` with every lattice component and position moved by up to `noise`.
pub fn perturbed(cell: &Cell, noise: f64) -> Cell {
    let pattern = [0.3, -0.7, 1.0, -0.2, 0.9, -1.0, 0.5, -0.4, 0.8];
    let m = cell.get_latt().as_matrix();
    let mut data = *m;
    for i in 0..3 {
        for j in 0..3 {
            data[i][j] += noise * pattern[3 * i + j];
        }
    }
    let positions = cell
        .get_atom_positions()
        .iter()
        .enumerate()
        .map(|(k, x)| {
            let d = pattern[k % 9] * noise / 4.0;
            [x[0] + d, x[1] - d, x[2] + 0.5 * d]
        })
        .collect();
    Cell::new(
        Lattice::from_columns(data),
        positions,
        cell.get_atom_types().to_vec(),
    )
    .unwrap()
}
