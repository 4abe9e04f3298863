use itertools::Itertools;
use lattice::{Lattice, LatticeError};
use linalg::{IMatrix3, Tolerance, Vector3};
use thiserror::Error;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub mod primitive;

pub use primitive::*;

#[derive(Error, Debug)]
pub enum CellError {
    #[error("structure contains no atoms")]
    EmptyStructure,

    #[error("{what}: expected {expected} entries, found {found}")]
    MismatchedInputs {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("atoms {first} and {second} overlap (distance {distance:.3e})")]
    OverlappingAtoms {
        first: usize,
        second: usize,
        distance: f64,
    },

    #[error("tolerance must be positive and finite, got {symprec}")]
    NonPositiveTolerance { symprec: f64 },

    #[error("{n_atoms} atoms cannot be split evenly over {n_translations} lattice translations")]
    InconsistentOperationSet {
        n_atoms: usize,
        n_translations: usize,
    },

    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error("cannot read structure file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("structure file line {line}: {message}")]
    Parse { line: usize, message: String },
}

// Periodic structure container.
//
// Coordinates:
// - lattice vectors are the columns of `latt`
// - atomic positions stored in fractional coordinates, wrapped into [0,1)
// - an optional scalar spin per atom is part of the site label
#[derive(Debug, Clone, Default)]
pub struct Cell {
    latt: Lattice,
    atom_positions: Vec<Vector3>,
    atom_types: Vec<i32>,
    atom_spins: Option<Vec<f64>>,
}

impl Cell {
    pub fn new(
        latt: Lattice,
        atom_positions: Vec<Vector3>,
        atom_types: Vec<i32>,
    ) -> Result<Cell, CellError> {
        Cell::build(latt, atom_positions, atom_types, None)
    }

    pub fn with_spins(
        latt: Lattice,
        atom_positions: Vec<Vector3>,
        atom_types: Vec<i32>,
        atom_spins: Vec<f64>,
    ) -> Result<Cell, CellError> {
        Cell::build(latt, atom_positions, atom_types, Some(atom_spins))
    }

    fn build(
        latt: Lattice,
        atom_positions: Vec<Vector3>,
        atom_types: Vec<i32>,
        atom_spins: Option<Vec<f64>>,
    ) -> Result<Cell, CellError> {
        if atom_positions.is_empty() {
            return Err(CellError::EmptyStructure);
        }
        if atom_types.len() != atom_positions.len() {
            return Err(CellError::MismatchedInputs {
                what: "atom types",
                expected: atom_positions.len(),
                found: atom_types.len(),
            });
        }
        if let Some(spins) = atom_spins.as_ref() {
            if spins.len() != atom_positions.len() {
                return Err(CellError::MismatchedInputs {
                    what: "atom spins",
                    expected: atom_positions.len(),
                    found: spins.len(),
                });
            }
        }

        let atom_positions = atom_positions.into_iter().map(linalg::wrapped).collect();

        Ok(Cell {
            latt,
            atom_positions,
            atom_types,
            atom_spins,
        })
    }

    /// Rejects non-positive tolerances, degenerate lattices and atoms closer
    /// than `symprec` to each other.
    pub fn validate(&self, tol: &Tolerance) -> Result<(), CellError> {
        if !tol.is_valid() {
            return Err(CellError::NonPositiveTolerance {
                symprec: tol.symprec,
            });
        }
        self.latt.check_degenerate(tol.symprec)?;

        let metric = self.latt.get_metric_tensor();
        for (i, j) in Itertools::tuple_combinations(0..self.get_n_atoms()) {
            let diff = linalg::sub(self.atom_positions[i], self.atom_positions[j]);
            if tol.within(&metric, diff) {
                return Err(CellError::OverlappingAtoms {
                    first: i,
                    second: j,
                    distance: linalg::min_image_distance_sq(&metric, diff).sqrt(),
                });
            }
        }
        Ok(())
    }

    pub fn get_latt(&self) -> &Lattice {
        &self.latt
    }

    pub fn get_n_atoms(&self) -> usize {
        self.atom_positions.len()
    }

    pub fn get_atom_positions(&self) -> &[Vector3] {
        &self.atom_positions
    }

    pub fn get_atom_types(&self) -> &[i32] {
        &self.atom_types
    }

    pub fn get_atom_spins(&self) -> Option<&[f64]> {
        self.atom_spins.as_deref()
    }

    pub fn get_atom_positions_cart(&self) -> Vec<Vector3> {
        self.atom_positions
            .iter()
            .map(|pos| self.latt.frac_to_cart(*pos))
            .collect()
    }

    pub fn get_unique_types(&self) -> Vec<i32> {
        // Preserve first-occurrence order while removing duplicates.
        self.atom_types.iter().cloned().unique().collect()
    }

    pub fn get_atom_indices_of_type(&self, atom_type: i32) -> Vec<usize> {
        self.atom_types
            .iter()
            .positions(|t| *t == atom_type)
            .collect()
    }

    /// Indices of the atoms of the least frequent type; ties go to the type
    /// seen first.
    pub fn rarest_type_indices(&self) -> Vec<usize> {
        self.get_unique_types()
            .into_iter()
            .map(|t| self.get_atom_indices_of_type(t))
            .min_by_key(|indices| indices.len())
            .unwrap_or_default()
    }

    /// Whether atoms `i` and `j` carry the same site label (type and spin).
    pub fn same_site_label(&self, i: usize, j: usize, tol: f64) -> bool {
        if self.atom_types[i] != self.atom_types[j] {
            return false;
        }
        match self.atom_spins.as_ref() {
            Some(spins) => (spins[i] - spins[j]).abs() <= tol,
            None => true,
        }
    }

    /// Count of atoms per type, sorted by type.
    pub fn type_counts(&self) -> Vec<(i32, usize)> {
        self.atom_types
            .iter()
            .cloned()
            .sorted()
            .dedup_with_count()
            .map(|(count, t)| (t, count))
            .collect()
    }

    /// Same structure in the basis `L·P` for an integer matrix with
    /// determinant `+1` (positions become `P^-1 x`).
    pub fn change_basis(&self, p: &IMatrix3) -> Result<Cell, CellError> {
        let inv = linalg::inverse_unimodular(*p).ok_or(CellError::MismatchedInputs {
            what: "unimodular basis change determinant",
            expected: 1,
            found: linalg::determinant(*p).unsigned_abs() as usize,
        })?;
        let latt = self.latt.transformed(&linalg::to_real(*p));
        let positions = self
            .atom_positions
            .iter()
            .map(|x| linalg::rotate(inv, *x))
            .collect();
        Cell::build(
            latt,
            positions,
            self.atom_types.clone(),
            self.atom_spins.clone(),
        )
    }

    pub fn read_file<P: AsRef<Path>>(inpfile: P) -> Result<Cell, CellError> {
        // Parse in.crystal with format:
        // line 1: scale_a scale_b scale_c
        // line 2-4: lattice vectors (trailing tokens ignored)
        // remaining lines: species x y z [spin] (fractional atomic positions)
        let path = inpfile.as_ref();
        let file = File::open(path).map_err(|source| CellError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lines = BufReader::new(file).lines();

        let mut scale = [1.0; 3];
        let mut vecs = [[0.0; 3]; 3];
        let mut species: Vec<String> = Vec::new();
        let mut positions = Vec::new();
        let mut spins = Vec::new();

        for (i, line) in lines.enumerate() {
            let line = line.map_err(|source| CellError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let s: Vec<&str> = line.split_whitespace().collect();

            match i {
                0 => {
                    for k in 0..3 {
                        scale[k] = parse_field(&s, k, i)?;
                    }
                }

                1..=3 => {
                    for k in 0..3 {
                        vecs[i - 1][k] = parse_field(&s, k, i)? * scale[i - 1];
                    }
                }

                // atoms
                _ => {
                    if s.is_empty() {
                        continue;
                    }

                    species.push(s[0].to_string());
                    positions.push([
                        parse_field(&s, 1, i)?,
                        parse_field(&s, 2, i)?,
                        parse_field(&s, 3, i)?,
                    ]);
                    if s.len() > 4 {
                        spins.push(parse_field(&s, 4, i)?);
                    }
                }
            }
        }

        // species -> type index, first occurrence gets 1
        let unique: Vec<&String> = species.iter().unique().collect();
        let types = species
            .iter()
            .map(|sp| unique.iter().position(|u| *u == sp).map_or(0, |p| p as i32 + 1))
            .collect();

        let latt = Lattice::new(vecs[0], vecs[1], vecs[2]);
        if spins.is_empty() {
            Cell::new(latt, positions, types)
        } else {
            Cell::with_spins(latt, positions, types, spins)
        }
    }
}

fn parse_field(s: &[&str], k: usize, line: usize) -> Result<f64, CellError> {
    let token = s.get(k).ok_or(CellError::Parse {
        line: line + 1,
        message: format!("missing field {}", k + 1),
    })?;
    token.parse().map_err(|_| CellError::Parse {
        line: line + 1,
        message: format!("cannot parse '{}' as a number", token),
    })
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "   {:-^88}", " crystal structure ")?;
        writeln!(f)?;
        writeln!(f, "   lattice_vectors")?;
        writeln!(f)?;

        for (name, v) in [
            ("a", self.latt.get_vector_a()),
            ("b", self.latt.get_vector_b()),
            ("c", self.latt.get_vector_c()),
        ]
        .iter()
        {
            writeln!(f, "   {} = {:20.12}  {:20.12}  {:20.12}", name, v[0], v[1], v[2])?;
        }

        writeln!(f)?;
        writeln!(f, "   natoms = {}", self.get_n_atoms())?;
        writeln!(f, "   atom_positions\n")?;
        writeln!(f, "                fractional                                                cartesian")?;
        writeln!(f)?;

        for (i, atom) in self.atom_positions.iter().enumerate() {
            let pos_c = self.latt.frac_to_cart(*atom);
            writeln!(
                f,
                "   {:<3} {:>4} : {:16.12}  {:16.12}  {:16.12}  {:20.12}  {:20.12}  {:20.12}",
                i + 1,
                self.atom_types[i],
                atom[0],
                atom[1],
                atom[2],
                pos_c[0],
                pos_c[1],
                pos_c[2]
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
