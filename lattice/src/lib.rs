use linalg::{Matrix3, Vector3};
use std::{f64::consts, fmt};
use thiserror::Error;

pub mod niggli;

pub use niggli::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    #[error("lattice is degenerate (volume = {volume:.3e}, thinnest height = {height:.3e})")]
    DegenerateLattice { volume: f64, height: f64 },

    #[error("Niggli reduction did not converge after {iterations} iterations")]
    ReductionDidNotConverge { iterations: usize },
}

/// Three basis vectors stored as the columns `a, b, c` of a 3x3 matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    data: Matrix3,
}

impl Default for Lattice {
    fn default() -> Self {
        Lattice {
            data: linalg::identity(),
        }
    }
}

impl Lattice {
    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Lattice {
        Lattice {
            data: linalg::from_columns(a, b, c),
        }
    }

    /// Builds a lattice from a matrix whose columns are the basis vectors.
    pub fn from_columns(data: Matrix3) -> Lattice {
        Lattice { data }
    }

    /// Builds a lattice from a matrix whose rows are the basis vectors.
    pub fn from_rows(rows: Matrix3) -> Lattice {
        Lattice {
            data: linalg::transpose(rows),
        }
    }

    pub fn get_metric_tensor(&self) -> Matrix3 {
        linalg::mat_mul(linalg::transpose(self.data), self.data)
    }

    pub fn as_matrix(&self) -> &Matrix3 {
        &self.data
    }

    pub fn as_2d_array_row_major(&self) -> Matrix3 {
        linalg::transpose(self.data)
    }

    // ( a x b ) . c
    pub fn volume(&self) -> f64 {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        linalg::dot(linalg::cross(a, b), c)
    }

    // ra = 2 x PI x (b x c) / volume
    // rb = 2 x PI x (c x a) / volume
    // rc = 2 x PI x (a x b) / volume
    pub fn reciprocal(&self) -> Lattice {
        let factor = 2.0 * consts::PI / self.volume();

        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        Lattice::new(
            linalg::scale(linalg::cross(b, c), factor),
            linalg::scale(linalg::cross(c, a), factor),
            linalg::scale(linalg::cross(a, b), factor),
        )
    }

    pub fn get_vector_a(&self) -> Vector3 {
        linalg::column(self.data, 0)
    }

    pub fn get_vector_b(&self) -> Vector3 {
        linalg::column(self.data, 1)
    }

    pub fn get_vector_c(&self) -> Vector3 {
        linalg::column(self.data, 2)
    }

    /// Lengths `|a|, |b|, |c|`.
    pub fn lengths(&self) -> Vector3 {
        [
            linalg::norm(self.get_vector_a()),
            linalg::norm(self.get_vector_b()),
            linalg::norm(self.get_vector_c()),
        ]
    }

    /// Inter-axial angles `alpha, beta, gamma` in degrees.
    pub fn angles(&self) -> Vector3 {
        let g = self.get_metric_tensor();
        let l = self.lengths();
        let angle = |i: usize, j: usize| (g[i][j] / (l[i] * l[j])).max(-1.0).min(1.0).acos().to_degrees();
        [angle(1, 2), angle(0, 2), angle(0, 1)]
    }

    pub fn scaled_by(&mut self, f: f64) {
        self.data
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|v| *v *= f);
    }

    /// New lattice `L·P`, i.e. basis vectors re-expressed through the columns of `P`.
    pub fn transformed(&self, p: &Matrix3) -> Lattice {
        Lattice {
            data: linalg::mat_mul(self.data, *p),
        }
    }

    pub fn frac_to_cart(&self, pos_f: Vector3) -> Vector3 {
        linalg::mat_vec(self.data, pos_f)
    }

    pub fn cart_to_frac(&self, pos_c: Vector3) -> Result<Vector3, LatticeError> {
        let inv = linalg::inverse(self.data).ok_or(LatticeError::DegenerateLattice {
            volume: self.volume(),
            height: 0.0,
        })?;
        Ok(linalg::mat_vec(inv, pos_c))
    }

    /// Smallest distance between a lattice plane spanned by two basis vectors
    /// and its neighbour.
    pub fn min_height(&self) -> f64 {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();
        let volume = self.volume().abs();

        [linalg::cross(a, b), linalg::cross(b, c), linalg::cross(c, a)]
            .iter()
            .map(|face| {
                let area = linalg::norm(*face);
                if area > 0.0 {
                    volume / area
                } else {
                    0.0
                }
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// Rejects lattices whose cell is thinner than `symprec` in any direction.
    pub fn check_degenerate(&self, symprec: f64) -> Result<(), LatticeError> {
        let volume = self.volume();
        let height = self.min_height();
        if !volume.is_finite() || !height.is_finite() || height < symprec {
            return Err(LatticeError::DegenerateLattice { volume, height });
        }
        Ok(())
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        write!(f,
               "{}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}", "Lattice",
               a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lattice() {
        let latt = Lattice::new([1.0, 0.1, 0.0], [0.0, 1.0, 0.2], [0.0, 0.3, 1.0]);

        let blatt = latt.reciprocal();
        let prod = linalg::mat_mul(latt.as_2d_array_row_major(), *blatt.as_matrix());
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 * consts::PI } else { 0.0 };
                assert_abs_diff_eq!(prod[i][j], expected, epsilon = 1.0e-12);
            }
        }

        let pos_f = [0.2, 0.3, 0.4];
        let pos_c = latt.frac_to_cart(pos_f);
        let pos_f_2 = latt.cart_to_frac(pos_c).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(pos_f[i], pos_f_2[i], epsilon = 1.0e-12);
        }
    }

    #[test]
    fn scaling_scales_volume_cubically() {
        let mut latt = Lattice::new([2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]);
        assert_abs_diff_eq!(latt.volume(), 24.0, epsilon = 1.0e-12);
        latt.scaled_by(0.5);
        assert_abs_diff_eq!(latt.volume(), 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn hexagonal_parameters() {
        let a = 3.0;
        let latt = Lattice::new(
            [a, 0.0, 0.0],
            [-0.5 * a, 0.5 * 3f64.sqrt() * a, 0.0],
            [0.0, 0.0, 5.0],
        );
        let angles = latt.angles();
        assert_abs_diff_eq!(angles[0], 90.0, epsilon = 1.0e-10);
        assert_abs_diff_eq!(angles[2], 120.0, epsilon = 1.0e-10);
        assert_abs_diff_eq!(latt.lengths()[1], a, epsilon = 1.0e-12);
    }

    #[test]
    fn flat_cell_is_degenerate() {
        let latt = Lattice::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 1.0e-9]);
        assert!(matches!(
            latt.check_degenerate(1.0e-5),
            Err(LatticeError::DegenerateLattice { .. })
        ));
        let ok = Lattice::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        assert_eq!(ok.check_degenerate(1.0e-5), Ok(()));
    }
}
