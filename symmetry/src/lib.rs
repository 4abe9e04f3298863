//! Symmetry of a periodic structure: operations, space-group type, Wyckoff
//! positions and refined cells, behind the `SymmetryDriver` interface.

use std::fmt;

use crystal::{find_primitive, Cell, PrimitiveCell};
use lattice::Lattice;
use linalg::{Matrix3, Tolerance, Vector3};
use log::{debug, info, trace};
use spacegroup::{identify, SpaceGroupMatch};
use symops::{
    check_lattice_holohedry, classify_operations, classify_point_group, find_operations,
    lattice_point_group, map_atoms, standardize_operations, DetectOptions, DetectedSymmetry,
    SymOp,
};

pub mod control;
pub mod error;
pub mod refine;
pub mod site;

pub use control::Control;
pub use error::SymmetryError;
pub use refine::{refine, refine_cell, standardize_primitive, RefinedCell};
pub use site::{resolve_sites, site_symmetry, SiteSymmetry, StandardFrame};

pub trait SymmetryDriver {
    fn get_n_sym_ops(&self) -> usize;
    fn get_spacegroup_number(&self) -> usize;
    fn get_hall_symbol(&self) -> &str;
    fn get_hall_number(&self) -> usize;
    fn get_international_symbol(&self) -> &str;
    fn get_rotation(&self, isym: usize) -> &[[i32; 3]; 3];
    fn get_translation(&self, isym: usize) -> &[f64];
    fn operation_on_vector(&self, isym: usize, v: &mut [f64; 3]);
    fn center_vector(&self, v: &mut [f64; 3]);
    fn display(&self);
    fn display_brief(&self);
    /// `sym_atom[isym][iat]`: atom that `iat` is mapped onto by operation `isym`.
    fn get_sym_atom(&self) -> &[Vec<usize>];
}

/// Everything known about the symmetry of one input cell.
#[derive(Clone, Debug)]
pub struct SymmetryDataset {
    pub spacegroup_number: usize,
    /// Hall number of the standard setting, 1 to 530.
    pub hall_number: usize,
    pub hall_symbol: &'static str,
    pub international: &'static str,
    pub point_group: &'static str,
    pub bravais: &'static str,
    /// Operations in the input basis, identity first.
    pub rotations: Vec<[[i32; 3]; 3]>,
    pub translations: Vec<Vector3>,
    /// `x_std = transformation_matrix · x + origin_shift`.
    pub transformation_matrix: Matrix3,
    pub origin_shift: Vector3,
    /// Smallest atom index of each atom's orbit.
    pub equivalent_atoms: Vec<usize>,
    /// Orbit number of each atom, counted in order of first appearance.
    pub crystallographic_orbits: Vec<usize>,
    pub wyckoffs: Vec<char>,
    pub site_symmetry_symbols: Vec<&'static str>,
    pub mapping_to_primitive: Vec<usize>,
    pub primitive_lattice: Lattice,
    pub sym_atom: Vec<Vec<usize>>,
    frame: StandardFrame,
    options: DetectOptions,
}

impl SymmetryDataset {
    /// Runs the whole search on `cell`: primitive cell, operations,
    /// point group, space-group type, origin choice and Wyckoff positions.
    pub fn new(cell: &Cell, options: &DetectOptions) -> Result<SymmetryDataset, SymmetryError> {
        let tol = options.tolerance();
        cell.validate(&tol)?;

        let primitive = find_primitive(cell, &tol)?;
        let detected = find_operations(&primitive.cell, options)?;
        debug!(
            "{} operations on the {}-atom primitive cell",
            detected.operations.len(),
            primitive.cell.get_n_atoms()
        );

        let point_group = classify_operations(&detected.operations)?;
        let holohedry = classify_point_group(&lattice_point_group(
            primitive.cell.get_latt(),
            &tol,
        )?)?;
        check_lattice_holohedry(&point_group, &holohedry)?;

        let matched = identify(primitive.cell.get_latt(), &detected.operations, &tol)?;
        let (equivalent_atoms, crystallographic_orbits) = orbits(&primitive, &detected);

        let frame = choose_origin(cell, &primitive, &matched, &equivalent_atoms, &tol)?;
        let sites = resolve_sites(cell, &frame, &tol)?;

        let operations = input_operations(&frame, &primitive);
        let metric = cell.get_latt().get_metric_tensor();
        // reference translations may sit a few symprec off the measured ones
        let mapping_tol = tol.scaled(4.0);
        let sym_atom = operations
            .iter()
            .map(|op| {
                map_atoms(cell, &metric, *op.rotation(), op.translation(), &mapping_tol)
                    .map(|m| m.permutation)
                    .ok_or_else(|| {
                        SymmetryError::inconsistent(format!(
                            "operation {} does not map the input atoms onto each other",
                            op
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "space group {} ({}), {} operations",
            matched.number(),
            matched.international(),
            operations.len()
        );

        Ok(SymmetryDataset {
            spacegroup_number: matched.number(),
            hall_number: matched.hall_number(),
            hall_symbol: matched.hall_symbol(),
            international: matched.international(),
            point_group: point_group.symbol,
            bravais: matched.bravais,
            rotations: operations.iter().map(|op| *op.rotation()).collect(),
            translations: operations.iter().map(|op| op.translation()).collect(),
            transformation_matrix: frame.to_standard,
            origin_shift: linalg::scale(frame.origin_shift, -1.0),
            equivalent_atoms,
            crystallographic_orbits,
            wyckoffs: sites.iter().map(|s| s.letter()).collect(),
            site_symmetry_symbols: sites.iter().map(|s| s.site_symmetry_symbol()).collect(),
            mapping_to_primitive: primitive.mapping_to_primitive.clone(),
            primitive_lattice: primitive.cell.get_latt().clone(),
            sym_atom,
            frame,
            options: *options,
        })
    }

    pub fn tolerance(&self) -> Tolerance {
        self.options.tolerance()
    }

    pub fn standard_frame(&self) -> &StandardFrame {
        &self.frame
    }

    pub fn operations(&self) -> Vec<SymOp> {
        self.rotations
            .iter()
            .zip(self.translations.iter())
            .filter_map(|(r, t)| SymOp::new(*r, *t).ok())
            .collect()
    }

    pub fn n_operations(&self) -> usize {
        self.rotations.len()
    }
}

/// Orbits of the input atoms, read off the primitive-cell orbits.
fn orbits(primitive: &PrimitiveCell, detected: &DetectedSymmetry) -> (Vec<usize>, Vec<usize>) {
    let n = primitive.mapping_to_primitive.len();
    let orbit_of = |i: usize| detected.equivalent_atoms[primitive.mapping_to_primitive[i]];

    let mut equivalent = Vec::with_capacity(n);
    let mut ordinal = Vec::with_capacity(n);
    let mut seen: Vec<usize> = Vec::new();
    for i in 0..n {
        let orbit = orbit_of(i);
        let first = (0..=i).find(|&j| orbit_of(j) == orbit).unwrap_or(i);
        equivalent.push(first);
        match seen.iter().position(|&o| o == orbit) {
            Some(k) => ordinal.push(k),
            None => {
                ordinal.push(seen.len());
                seen.push(orbit);
            }
        }
    }
    (equivalent, ordinal)
}

/// Picks among the equivalent origins the one giving the earliest Wyckoff
/// letters, atom by atom over the orbit representatives; ties keep the
/// shortest shift.
fn choose_origin(
    cell: &Cell,
    primitive: &PrimitiveCell,
    matched: &SpaceGroupMatch,
    equivalent_atoms: &[usize],
    tol: &Tolerance,
) -> Result<StandardFrame, SymmetryError> {
    let base = StandardFrame::new(cell.get_latt(), &primitive.transformation, matched)
        .ok_or_else(|| SymmetryError::inconsistent("singular conventional transformation"))?;
    let representatives: Vec<usize> = (0..cell.get_n_atoms())
        .filter(|&i| equivalent_atoms[i] == i)
        .collect();

    let mut best: Option<(Vec<char>, StandardFrame)> = None;
    for s in matched.origin_shifts.iter() {
        let frame = base.with_origin_shift(*s);
        let letters: Result<Vec<char>, SymmetryError> = representatives
            .iter()
            .map(|&i| {
                let x = frame.to_standard(cell.get_atom_positions()[i]);
                site::site_symmetry(&frame, x, tol).map(|site| site.letter())
            })
            .collect();
        let letters = match letters {
            Ok(l) => l,
            Err(e) => {
                trace!("origin shift {:?} rejected: {}", s, e);
                continue;
            }
        };
        if best.as_ref().map_or(true, |(b, _)| letters < *b) {
            best = Some((letters, frame));
        }
    }

    best.map(|(letters, frame)| {
        debug!("origin shift {:?}, Wyckoff letters {:?}", frame.origin_shift, letters);
        frame
    })
    .ok_or_else(|| SymmetryError::inconsistent("no origin places every atom on a Wyckoff position"))
}

/// Reference operations of the type carried into the input basis, combined
/// with the pure translations of the input cell.
fn input_operations(frame: &StandardFrame, primitive: &PrimitiveCell) -> Vec<SymOp> {
    let s = frame.origin_shift;
    let m_inv = frame.to_standard;
    let m = frame.conventional_basis;

    let mut ops = Vec::new();
    for op in frame.space_group.operations.iter() {
        // origin moved back from the standard to the conventional cell
        let shift = linalg::sub(op.apply_rotation(s), s);
        let conventional = op.with_translation(linalg::sub(op.translation(), shift));
        match conventional.change_basis(&m_inv, &m) {
            Some(input) => {
                for t in primitive.translations.iter() {
                    ops.push(input.with_translation(linalg::add(input.translation(), *t)));
                }
            }
            None => trace!("operation {} is not integral in the input basis", op),
        }
    }
    standardize_operations(&ops, 1.0e-6)
}

impl fmt::Display for SymmetryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_brief(f)?;
        writeln!(f, "   {:<18}: {}", "transformation", format_matrix(&self.transformation_matrix))?;
        writeln!(f, "   {:<18}: {:?}", "origin_shift", self.origin_shift)?;
        writeln!(f)?;
        writeln!(f, "   {:>6} {:>6} {:>6} {:>8}", "atom", "orbit", "wyck", "site")?;
        for i in 0..self.wyckoffs.len() {
            writeln!(
                f,
                "   {:>6} {:>6} {:>6} {:>8}",
                i, self.equivalent_atoms[i], self.wyckoffs[i], self.site_symmetry_symbols[i]
            )?;
        }
        writeln!(f)?;
        for (i, op) in self.operations().iter().enumerate() {
            writeln!(f, "   symmetry operation {:>3} : {}", i, op)?;
        }
        Ok(())
    }
}

impl SymmetryDataset {
    fn fmt_brief(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   {:-^80}", " symmetry ")?;
        writeln!(f, "   {:<18}: {}", "spacegroup_number", self.spacegroup_number)?;
        writeln!(f, "   {:<18}: {}", "international", self.international)?;
        writeln!(f, "   {:<18}: {}", "hall_symbol", self.hall_symbol)?;
        writeln!(f, "   {:<18}: {}", "hall_number", self.hall_number)?;
        writeln!(f, "   {:<18}: {}", "point_group", self.point_group)?;
        writeln!(f, "   {:<18}: {}", "bravais_lattice", self.bravais)?;
        writeln!(f, "   {:<18}: {}", "n_operations", self.n_operations())
    }
}

struct Brief<'a>(&'a SymmetryDataset);

impl fmt::Display for Brief<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_brief(f)
    }
}

fn format_matrix(m: &Matrix3) -> String {
    let rows: Vec<String> = m
        .iter()
        .map(|r| format!("[{:.4} {:.4} {:.4}]", r[0], r[1], r[2]))
        .collect();
    rows.join(" ")
}

impl SymmetryDriver for SymmetryDataset {
    fn get_n_sym_ops(&self) -> usize {
        self.rotations.len()
    }

    fn get_spacegroup_number(&self) -> usize {
        self.spacegroup_number
    }

    fn get_hall_symbol(&self) -> &str {
        self.hall_symbol
    }

    fn get_hall_number(&self) -> usize {
        self.hall_number
    }

    fn get_international_symbol(&self) -> &str {
        self.international
    }

    fn get_rotation(&self, isym: usize) -> &[[i32; 3]; 3] {
        &self.rotations[isym]
    }

    fn get_translation(&self, isym: usize) -> &[f64] {
        &self.translations[isym]
    }

    fn operation_on_vector(&self, isym: usize, v: &mut [f64; 3]) {
        let rotated = linalg::rotate(self.rotations[isym], *v);
        *v = linalg::add(rotated, self.translations[isym]);
    }

    fn center_vector(&self, v: &mut [f64; 3]) {
        *v = linalg::centered(*v);
    }

    fn display(&self) {
        println!("{}", self);
    }

    fn display_brief(&self) {
        println!("{}", Brief(self));
    }

    fn get_sym_atom(&self) -> &[Vec<usize>] {
        &self.sym_atom
    }
}

/// Symmetry driver for a structure given as lattice rows, fractional
/// positions and species.
pub fn new(
    latt: &[[f64; 3]; 3],
    position: &[[f64; 3]],
    types: &[i32],
    symprec: f64,
) -> Result<Box<dyn SymmetryDriver>, SymmetryError> {
    let cell = Cell::new(Lattice::from_rows(*latt), position.to_vec(), types.to_vec())?;
    let options = DetectOptions::from_tolerance(&Tolerance::new(symprec));
    Ok(Box::new(SymmetryDataset::new(&cell, &options)?))
}

/// Dataset and, when `control` asks for it, the refined conventional cell.
pub fn run(
    cell: &Cell,
    control: &Control,
) -> Result<(SymmetryDataset, Option<RefinedCell>), SymmetryError> {
    let dataset = SymmetryDataset::new(cell, &control.detect_options())?;
    let refined = if control.get_conventional() {
        Some(refine(cell, &dataset)?)
    } else {
        None
    };
    Ok((dataset, refined))
}
