//! Test module for the cell model and primitive-cell extraction.

use super::*;
use approx::assert_abs_diff_eq;

fn cubic(a: f64) -> Lattice {
    Lattice::new([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a])
}

/// Conventional face-centred cubic cell with one atom per lattice point.
fn fcc_conventional(a: f64) -> Cell {
    Cell::new(
        cubic(a),
        vec![
            [0.0, 0.0, 0.0],
            [0.0, 0.5, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.5, 0.0],
        ],
        vec![1; 4],
    )
    .unwrap()
}

fn fixture() -> std::path::PathBuf {
    let mut d = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("src/in.crystal");
    d
}

#[test]
fn test_cell_new_rejects_bad_input() {
    assert!(matches!(
        Cell::new(cubic(4.0), vec![], vec![]),
        Err(CellError::EmptyStructure)
    ));
    assert!(matches!(
        Cell::new(cubic(4.0), vec![[0.0; 3]], vec![1, 2]),
        Err(CellError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        Cell::with_spins(cubic(4.0), vec![[0.0; 3]], vec![1], vec![]),
        Err(CellError::MismatchedInputs { .. })
    ));
}

#[test]
fn test_positions_are_wrapped() {
    let cell = Cell::new(cubic(4.0), vec![[1.25, -0.25, 2.0]], vec![1]).unwrap();
    let p = cell.get_atom_positions()[0];
    assert_abs_diff_eq!(p[0], 0.25, epsilon = 1.0e-12);
    assert_abs_diff_eq!(p[1], 0.75, epsilon = 1.0e-12);
    assert_abs_diff_eq!(p[2], 0.0, epsilon = 1.0e-12);
}

#[test]
fn test_validate() {
    let tol = Tolerance::default();
    let cell = Cell::new(
        cubic(4.0),
        vec![[0.0, 0.0, 0.0], [0.999_999_9, 0.0, 0.0]],
        vec![1, 2],
    )
    .unwrap();
    assert!(matches!(
        cell.validate(&tol),
        Err(CellError::OverlappingAtoms {
            first: 0,
            second: 1,
            ..
        })
    ));

    let ok = fcc_conventional(4.0);
    assert!(ok.validate(&tol).is_ok());
    assert!(matches!(
        ok.validate(&Tolerance::new(-1.0)),
        Err(CellError::NonPositiveTolerance { .. })
    ));
}

#[test]
fn test_read_file() {
    let cell = Cell::read_file(fixture()).unwrap();
    assert_eq!(cell.get_n_atoms(), 8);
    assert_eq!(cell.get_unique_types(), vec![1, 2]);
    assert_eq!(cell.get_atom_indices_of_type(2), vec![4, 5, 6, 7]);
    assert_abs_diff_eq!(cell.get_latt().volume(), 5.64f64.powi(3), epsilon = 1.0e-9);
    assert!(cell.get_atom_spins().is_none());
}

#[test]
fn test_read_file_reports_missing_file() {
    assert!(matches!(
        Cell::read_file("does/not/exist.crystal"),
        Err(CellError::Io { .. })
    ));
}

#[test]
fn test_rarest_type() {
    let cell = Cell::new(
        cubic(5.0),
        vec![
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.5],
            [0.5, 0.0, 0.0],
            [0.0, 0.5, 0.0],
        ],
        vec![3, 3, 7, 3],
    )
    .unwrap();
    assert_eq!(cell.rarest_type_indices(), vec![2]);
    assert_eq!(cell.type_counts(), vec![(3, 3), (7, 1)]);
}

#[test]
fn test_spin_is_part_of_site_label() {
    let cell = Cell::with_spins(
        cubic(4.0),
        vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
        vec![1, 1],
        vec![1.0, -1.0],
    )
    .unwrap();
    assert!(!cell.same_site_label(0, 1, 1.0e-5));
    let prim = find_primitive(&cell, &Tolerance::default()).unwrap();
    assert_eq!(prim.cell.get_n_atoms(), 2);
}

#[test]
fn test_change_basis_keeps_cartesian_positions() {
    let cell = Cell::new(
        cubic(4.0),
        vec![[0.1, 0.2, 0.3], [0.6, 0.7, 0.8]],
        vec![1, 2],
    )
    .unwrap();
    let moved = cell.change_basis(&[[1, 1, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
    let metric = moved.get_latt().get_metric_tensor();
    assert_abs_diff_eq!(moved.get_latt().volume(), 64.0, epsilon = 1.0e-9);
    let cart = cell.get_atom_positions_cart();
    for (i, pos) in moved.get_atom_positions().iter().enumerate() {
        let back = moved.get_latt().cart_to_frac(cart[i]).unwrap();
        assert!(linalg::min_image_distance_sq(&metric, linalg::sub(back, *pos)) < 1.0e-16);
    }
    assert!(cell.change_basis(&[[2, 0, 0], [0, 1, 0], [0, 0, 1]]).is_err());
}

#[test]
fn test_fcc_primitive() {
    let tol = Tolerance::default();
    let cell = fcc_conventional(4.0);
    assert_eq!(find_pure_translations(&cell, &tol).len(), 4);

    let prim = find_primitive(&cell, &tol).unwrap();
    assert_eq!(prim.cell.get_n_atoms(), 1);
    assert_eq!(prim.multiplicity(), 4);
    assert_eq!(prim.mapping_to_primitive, vec![0, 0, 0, 0]);
    assert_abs_diff_eq!(prim.cell.get_latt().volume(), 16.0, epsilon = 1.0e-9);
    for l in prim.cell.get_latt().lengths().iter() {
        assert_abs_diff_eq!(*l, 4.0 / 2f64.sqrt(), epsilon = 1.0e-9);
    }

    let rebuilt = cell.get_latt().transformed(&prim.transformation);
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(
                rebuilt.as_matrix()[i][j],
                prim.cell.get_latt().as_matrix()[i][j],
                epsilon = 1.0e-9
            );
        }
    }
}

#[test]
fn test_rocksalt_primitive() {
    let cell = Cell::read_file(fixture()).unwrap();
    let prim = find_primitive(&cell, &Tolerance::default()).unwrap();
    assert_eq!(prim.cell.get_n_atoms(), 2);
    assert_eq!(prim.mapping_to_primitive[0..4], [0, 0, 0, 0]);
    assert_eq!(prim.mapping_to_primitive[4..8], [1, 1, 1, 1]);
    assert_eq!(prim.cell.get_atom_types(), &[1, 2]);
}

#[test]
fn test_bcc_primitive_and_already_primitive() {
    let tol = Tolerance::default();
    let bcc = Cell::new(
        cubic(3.0),
        vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
        vec![1, 1],
    )
    .unwrap();
    let prim = find_primitive(&bcc, &tol).unwrap();
    assert_eq!(prim.cell.get_n_atoms(), 1);
    assert_abs_diff_eq!(prim.cell.get_latt().volume(), 13.5, epsilon = 1.0e-9);

    let sc = Cell::new(cubic(4.0), vec![[0.0; 3]], vec![1]).unwrap();
    let prim = find_primitive(&sc, &tol).unwrap();
    assert_eq!(prim.cell.get_n_atoms(), 1);
    assert_eq!(prim.mapping_to_primitive, vec![0]);
    assert_eq!(prim.translations.len(), 1);
}

#[test]
fn test_left_handed_input_becomes_right_handed() {
    let latt = Lattice::new([4.0, 0.0, 0.0], [0.0, 0.0, 4.0], [0.0, 4.0, 0.0]);
    assert!(latt.volume() < 0.0);
    let cell = Cell::new(latt, vec![[0.1, 0.2, 0.3]], vec![1]).unwrap();
    let prim = find_primitive(&cell, &Tolerance::default()).unwrap();
    assert!(prim.cell.get_latt().volume() > 0.0);
    assert!(linalg::determinant(prim.transformation) < 0.0);
}

#[test]
fn test_display() {
    let text = format!("{}", fcc_conventional(4.0));
    assert!(text.contains("crystal structure"));
    assert!(text.contains("natoms = 4"));
}
