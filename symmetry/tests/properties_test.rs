mod common;

use approx::assert_abs_diff_eq;
use common::*;
use crystal::Cell;
use symmetry::{refine_cell, standardize_primitive, SymmetryDataset};
use symops::{validate_group, DetectOptions, SymOp};

fn sorted_lengths(cell: &Cell) -> Vec<f64> {
    let mut l = cell.get_latt().lengths().to_vec();
    l.sort_by(|a, b| a.partial_cmp(b).unwrap());
    l
}

fn sorted_letters(letters: &[char]) -> Vec<char> {
    let mut l = letters.to_vec();
    l.sort_unstable();
    l
}

fn structures() -> Vec<(&'static str, Cell)> {
    vec![
        ("simple cubic", simple_cubic()),
        ("bcc", bcc()),
        ("rocksalt", rocksalt()),
        ("diamond", diamond()),
        ("hcp", hcp()),
        ("rutile", rutile()),
        ("wurtzite", wurtzite()),
        ("monoclinic", monoclinic()),
        ("orthorhombic", orthorhombic()),
        ("no symmetry", no_symmetry()),
    ]
}

#[test]
fn test_operations_form_a_group() {
    for (name, cell) in structures() {
        let d = dataset(&cell);
        let ops: Vec<SymOp> = d.operations();
        assert_eq!(ops.len(), d.n_operations(), "{}", name);
        assert_eq!(ops[0], SymOp::identity(), "{}", name);
        validate_group(&ops, 1.0e-6).unwrap_or_else(|e| panic!("{}: {}", name, e));
        for op in ops.iter() {
            let inv = op.inverse().unwrap();
            assert!(
                ops.iter()
                    .any(|o| o.rotation() == inv.rotation()
                        && linalg::approx_eq_mod_lattice(o.translation(), inv.translation(), 1.0e-6)),
                "{}: inverse of {} missing",
                name,
                op
            );
        }
        // every operation maps the structure onto itself
        for perm in d.sym_atom.iter() {
            for (i, &j) in perm.iter().enumerate() {
                assert_eq!(cell.get_atom_types()[i], cell.get_atom_types()[j], "{}", name);
            }
        }
    }
}

#[test]
fn test_refinement_is_idempotent() {
    for (name, cell) in structures() {
        let once = refine_cell(&perturbed(&cell, 1.0e-7), &DetectOptions::default()).unwrap();
        let twice = refine_cell(&once.cell, &DetectOptions::default()).unwrap();

        assert_eq!(once.spacegroup_number, twice.spacegroup_number, "{}", name);
        assert_eq!(once.cell.get_n_atoms(), twice.cell.get_n_atoms(), "{}", name);
        assert_eq!(once.primitive.get_n_atoms(), twice.primitive.get_n_atoms(), "{}", name);
        assert_eq!(sorted_letters(&once.wyckoffs), sorted_letters(&twice.wyckoffs), "{}", name);
        for (a, b) in sorted_lengths(&once.cell)
            .iter()
            .zip(sorted_lengths(&twice.cell).iter())
        {
            assert_abs_diff_eq!(a, b, epsilon = 1.0e-10);
        }
        assert_abs_diff_eq!(
            once.cell.get_latt().volume(),
            twice.cell.get_latt().volume(),
            epsilon = 1.0e-8
        );
    }
}

#[test]
fn test_refined_cell_is_exact() {
    let refined = refine_cell(&perturbed(&rocksalt(), 1.0e-7), &DetectOptions::default()).unwrap();
    assert_eq!(refined.spacegroup_number, 225);
    assert_eq!(refined.cell.get_n_atoms(), 8);
    assert_eq!(refined.primitive.get_n_atoms(), 2);
    let lengths = refined.cell.get_latt().lengths();
    assert_abs_diff_eq!(lengths[0], lengths[1], epsilon = 1.0e-12);
    assert_abs_diff_eq!(lengths[0], lengths[2], epsilon = 1.0e-12);
    for x in refined.cell.get_atom_positions().iter() {
        for c in x.iter() {
            assert_abs_diff_eq!(c * 2.0, (c * 2.0).round(), epsilon = 1.0e-12);
        }
    }
    assert_eq!(refined.mapping_to_refined.len(), 8);
    let mut mapped = refined.mapping_to_refined.clone();
    mapped.sort_unstable();
    mapped.dedup();
    assert_eq!(mapped.len(), 8);

    let prim = standardize_primitive(&fcc_conventional(), &DetectOptions::default()).unwrap();
    assert_eq!(prim.get_n_atoms(), 1);
    assert_abs_diff_eq!(prim.get_latt().volume(), 4.05f64.powi(3) / 4.0, epsilon = 1.0e-8);
}

#[test]
fn test_basis_invariance() {
    let changes = [
        [[1, 1, 0], [0, 1, 0], [0, 0, 1]],
        [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
        [[1, 0, 1], [0, 1, -1], [0, 0, 1]],
    ];
    for (name, cell) in structures() {
        let reference = dataset(&cell);
        for p in changes.iter() {
            let moved = cell.change_basis(p).unwrap();
            let d = dataset(&moved);
            assert_eq!(d.spacegroup_number, reference.spacegroup_number, "{} {:?}", name, p);
            assert_eq!(d.hall_symbol, reference.hall_symbol, "{} {:?}", name, p);
            assert_eq!(
                sorted_letters(&d.wyckoffs),
                sorted_letters(&reference.wyckoffs),
                "{} {:?}",
                name,
                p
            );
        }
    }
}

#[test]
fn test_tolerance_monotonicity() {
    let noisy = perturbed(&rutile(), 1.0e-4);
    let mut previous = 0;
    for &symprec in [1.0e-9, 1.0e-6, 1.0e-3, 1.0e-2].iter() {
        let d = SymmetryDataset::new(&noisy, &options(symprec)).unwrap();
        assert!(
            d.n_operations() >= previous,
            "symprec {} found {} operations, fewer than {}",
            symprec,
            d.n_operations(),
            previous
        );
        previous = d.n_operations();
    }
    assert_eq!(previous, 16);
}
