//! Fixed-size 3x3 linear algebra for crystallographic work.
//!
//! Matrices are plain row-major arrays (`m[row][col]`). Integer matrices act
//! on fractional coordinates, real matrices hold lattices, metrics and
//! transformations. Generic helpers work for both through `num-traits`.

use num_traits::{Num, One, Zero};

pub mod intmat;
pub mod tolerance;

pub use intmat::*;
pub use tolerance::*;

/// Real 3x3 matrix, row-major.
pub type Matrix3 = [[f64; 3]; 3];

/// Integer 3x3 matrix, row-major.
pub type IMatrix3 = [[i32; 3]; 3];

/// Real 3-vector (fractional or Cartesian, depending on context).
pub type Vector3 = [f64; 3];

/// Integer 3-vector.
pub type IVector3 = [i32; 3];

pub fn identity<T: Zero + One + Copy>() -> [[T; 3]; 3] {
    let mut out = [[T::zero(); 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = T::one();
    }
    out
}

pub fn mat_mul<T: Num + Copy>(lhs: [[T; 3]; 3], rhs: [[T; 3]; 3]) -> [[T; 3]; 3] {
    let mut out = [[T::zero(); 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = lhs[i][0] * rhs[0][j] + lhs[i][1] * rhs[1][j] + lhs[i][2] * rhs[2][j];
        }
    }
    out
}

pub fn mat_vec<T: Num + Copy>(mat: [[T; 3]; 3], vector: [T; 3]) -> [T; 3] {
    let mut out = [T::zero(); 3];
    for i in 0..3 {
        out[i] = mat[i][0] * vector[0] + mat[i][1] * vector[1] + mat[i][2] * vector[2];
    }
    out
}

pub fn transpose<T: Copy>(mat: [[T; 3]; 3]) -> [[T; 3]; 3] {
    let mut out = mat;
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = mat[j][i];
        }
    }
    out
}

pub fn determinant<T: Num + Copy>(m: [[T; 3]; 3]) -> T {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

pub fn trace<T: Num + Copy>(m: [[T; 3]; 3]) -> T {
    m[0][0] + m[1][1] + m[2][2]
}

pub fn mat_add<T: Num + Copy>(lhs: [[T; 3]; 3], rhs: [[T; 3]; 3]) -> [[T; 3]; 3] {
    let mut out = lhs;
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = lhs[i][j] + rhs[i][j];
        }
    }
    out
}

pub fn mat_sub<T: Num + Copy>(lhs: [[T; 3]; 3], rhs: [[T; 3]; 3]) -> [[T; 3]; 3] {
    let mut out = lhs;
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = lhs[i][j] - rhs[i][j];
        }
    }
    out
}

pub fn mat_scale(mat: Matrix3, factor: f64) -> Matrix3 {
    let mut out = mat;
    out.iter_mut()
        .flat_map(|row| row.iter_mut())
        .for_each(|x| *x *= factor);
    out
}

/// Converts an integer matrix to its real counterpart.
pub fn to_real(mat: IMatrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = f64::from(mat[i][j]);
        }
    }
    out
}

pub fn to_real_vec(v: IVector3) -> Vector3 {
    [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])]
}

/// Applies an integer matrix to a real vector.
pub fn rotate(rotation: IMatrix3, vector: Vector3) -> Vector3 {
    mat_vec(to_real(rotation), vector)
}

/// Rounds a real matrix to integers if every entry lies within `tol` of one.
pub fn round_matrix(mat: Matrix3, tol: f64) -> Option<IMatrix3> {
    let mut out = [[0_i32; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            let r = mat[i][j].round();
            if (mat[i][j] - r).abs() > tol {
                return None;
            }
            out[i][j] = r as i32;
        }
    }
    Some(out)
}

/// Inverse of a real matrix, `None` when the determinant is numerically zero.
pub fn inverse(m: Matrix3) -> Option<Matrix3> {
    let det = determinant(m);
    if det.abs() < 1.0e-14 || !det.is_finite() {
        return None;
    }
    let mut inv = [[0.0; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            let r1 = (col + 1) % 3;
            let r2 = (col + 2) % 3;
            let c1 = (row + 1) % 3;
            let c2 = (row + 2) % 3;
            inv[row][col] = (m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]) / det;
        }
    }
    Some(inv)
}

pub fn add(lhs: Vector3, rhs: Vector3) -> Vector3 {
    [lhs[0] + rhs[0], lhs[1] + rhs[1], lhs[2] + rhs[2]]
}

pub fn sub(lhs: Vector3, rhs: Vector3) -> Vector3 {
    [lhs[0] - rhs[0], lhs[1] - rhs[1], lhs[2] - rhs[2]]
}

pub fn scale(vector: Vector3, factor: f64) -> Vector3 {
    [factor * vector[0], factor * vector[1], factor * vector[2]]
}

pub fn dot(lhs: Vector3, rhs: Vector3) -> f64 {
    lhs[0] * rhs[0] + lhs[1] * rhs[1] + lhs[2] * rhs[2]
}

//
// c.x = a.y * b.z - a.z * b.y
// c.y = a.z * b.x - a.x * b.z
// c.z = a.x * b.y - a.y * b.x
//
pub fn cross(lhs: Vector3, rhs: Vector3) -> Vector3 {
    [
        lhs[1] * rhs[2] - lhs[2] * rhs[1],
        lhs[2] * rhs[0] - lhs[0] * rhs[2],
        lhs[0] * rhs[1] - lhs[1] * rhs[0],
    ]
}

pub fn norm(vector: Vector3) -> f64 {
    dot(vector, vector).sqrt()
}

/// Column `j` of a matrix.
pub fn column<T: Copy>(mat: [[T; 3]; 3], j: usize) -> [T; 3] {
    [mat[0][j], mat[1][j], mat[2][j]]
}

/// Builds a matrix from three column vectors.
pub fn from_columns<T: Copy>(a: [T; 3], b: [T; 3], c: [T; 3]) -> [[T; 3]; 3] {
    [[a[0], b[0], c[0]], [a[1], b[1], c[1]], [a[2], b[2], c[2]]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = [[2.0, 0.5, 0.0], [0.1, 3.0, 0.2], [0.0, -0.4, 1.5]];
        let inv = inverse(m).unwrap();
        let prod = mat_mul(m, inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(prod[i][j], expected, epsilon = 1.0e-12);
            }
        }
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]];
        assert!(inverse(m).is_none());
    }

    #[test]
    fn integer_and_real_determinants_agree() {
        let m: IMatrix3 = [[0, -1, 0], [1, -1, 0], [0, 0, 1]];
        assert_eq!(determinant(m), 1);
        assert_abs_diff_eq!(determinant(to_real(m)), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn cross_product_is_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn columns_round_trip() {
        let m = from_columns([1, 2, 3], [4, 5, 6], [7, 8, 9]);
        assert_eq!(column(m, 1), [4, 5, 6]);
        assert_eq!(m[2][0], 3);
    }
}
