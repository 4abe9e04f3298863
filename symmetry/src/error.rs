use crystal::CellError;
use lattice::LatticeError;
use spacegroup::{HallError, IdentifyError, WyckoffError};
use symops::{ClassificationError, DetectionError};
use thiserror::Error;

/// Every way a symmetry search can fail, flattened for callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
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

    #[error("lattice is degenerate (volume = {volume:.3e})")]
    DegenerateLattice { volume: f64 },

    #[error("Niggli reduction did not converge after {iterations} iterations")]
    ReductionDidNotConverge { iterations: usize },

    #[error("no space-group type matches the {n_operations} operations of point group {point_group}")]
    NoMatchingSpaceGroup {
        point_group: &'static str,
        n_operations: usize,
    },

    #[error("inconsistent operation set: {reason}")]
    InconsistentOperationSet { reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SymmetryError {
    pub(crate) fn inconsistent<S: ToString>(reason: S) -> SymmetryError {
        SymmetryError::InconsistentOperationSet {
            reason: reason.to_string(),
        }
    }
}

impl From<LatticeError> for SymmetryError {
    fn from(e: LatticeError) -> Self {
        match e {
            LatticeError::DegenerateLattice { volume, .. } => {
                SymmetryError::DegenerateLattice { volume }
            }
            LatticeError::ReductionDidNotConverge { iterations } => {
                SymmetryError::ReductionDidNotConverge { iterations }
            }
        }
    }
}

impl From<CellError> for SymmetryError {
    fn from(e: CellError) -> Self {
        match e {
            CellError::EmptyStructure => SymmetryError::EmptyStructure,
            CellError::MismatchedInputs {
                what,
                expected,
                found,
            } => SymmetryError::MismatchedInputs {
                what,
                expected,
                found,
            },
            CellError::OverlappingAtoms {
                first,
                second,
                distance,
            } => SymmetryError::OverlappingAtoms {
                first,
                second,
                distance,
            },
            CellError::NonPositiveTolerance { symprec } => {
                SymmetryError::NonPositiveTolerance { symprec }
            }
            CellError::Lattice(e) => e.into(),
            e @ CellError::InconsistentOperationSet { .. } => SymmetryError::inconsistent(e),
            e @ CellError::Io { .. } | e @ CellError::Parse { .. } => {
                SymmetryError::InvalidInput {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl From<DetectionError> for SymmetryError {
    fn from(e: DetectionError) -> Self {
        match e {
            DetectionError::NonPositiveTolerance { symprec } => {
                SymmetryError::NonPositiveTolerance { symprec }
            }
            DetectionError::Cell(e) => e.into(),
            DetectionError::Lattice(e) => e.into(),
            e => SymmetryError::inconsistent(e),
        }
    }
}

impl From<ClassificationError> for SymmetryError {
    fn from(e: ClassificationError) -> Self {
        SymmetryError::inconsistent(e)
    }
}

impl From<HallError> for SymmetryError {
    fn from(e: HallError) -> Self {
        SymmetryError::inconsistent(format!("reference table: {}", e))
    }
}

impl From<WyckoffError> for SymmetryError {
    fn from(e: WyckoffError) -> Self {
        SymmetryError::inconsistent(format!("Wyckoff table: {}", e))
    }
}

impl From<IdentifyError> for SymmetryError {
    fn from(e: IdentifyError) -> Self {
        match e {
            IdentifyError::NoMatchingSpaceGroup {
                point_group,
                n_operations,
            } => SymmetryError::NoMatchingSpaceGroup {
                point_group,
                n_operations,
            },
            IdentifyError::InconsistentOperationSet(reason) => {
                SymmetryError::InconsistentOperationSet { reason }
            }
            IdentifyError::Classification(e) => e.into(),
            IdentifyError::Database(e) => e.into(),
        }
    }
}
