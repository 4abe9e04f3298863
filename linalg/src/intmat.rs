//! Integer matrix algorithms: unimodular inverse, Hermite and Smith normal
//! forms, and congruence solving `A·s ≡ b (mod 1)`.

use crate::tolerance::{wrap_centered, wrap_fractional};
use crate::{IMatrix3, Vector3};
use itertools::{iproduct, Itertools};

/// Inverse of an integer matrix with determinant `±1`.
pub fn inverse_unimodular(m: IMatrix3) -> Option<IMatrix3> {
    let det = crate::determinant(m);
    if det != 1 && det != -1 {
        return None;
    }
    let mut inv = [[0_i32; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            inv[col][row] = cofactor(m, row, col) / det;
        }
    }
    Some(inv)
}

/// Adjugate-based inverse scaled by the determinant: `det(m) * m^-1`.
pub fn adjugate(m: IMatrix3) -> IMatrix3 {
    let mut adj = [[0_i32; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            adj[col][row] = cofactor(m, row, col);
        }
    }
    adj
}

fn cofactor(m: IMatrix3, row: usize, col: usize) -> i32 {
    let minor = minor_det(m, row, col);
    if (row + col) % 2 == 0 {
        minor
    } else {
        -minor
    }
}

fn minor_det(m: IMatrix3, row: usize, col: usize) -> i32 {
    let mut vals = [0_i32; 4];
    let mut idx = 0;
    for i in (0..3).filter(|&i| i != row) {
        for j in (0..3).filter(|&j| j != col) {
            vals[idx] = m[i][j];
            idx += 1;
        }
    }
    vals[0] * vals[3] - vals[1] * vals[2]
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y = g >= 0`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1_i64, 0_i64);
    let (mut old_t, mut t) = (0_i64, 1_i64);
    while r != 0 {
        let q = old_r / r;
        let tmp = old_r - q * r;
        old_r = r;
        r = tmp;
        let tmp = old_s - q * s;
        old_s = s;
        s = tmp;
        let tmp = old_t - q * t;
        old_t = t;
        t = tmp;
    }
    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Column-style Hermite normal form of the lattice generated by `generators`.
///
/// Returns the basis as a matrix whose columns are lattice vectors, lower
/// triangular with positive diagonal and `0 <= H[r][j] < H[r][r]` for `j < r`.
/// `None` when the generators do not span three dimensions.
pub fn hermite_normal_form(generators: &[[i64; 3]]) -> Option<[[i64; 3]; 3]> {
    let mut cols: Vec<[i64; 3]> = generators.to_vec();
    if cols.len() < 3 {
        return None;
    }

    for r in 0..3 {
        // bring the gcd of row r (columns r..) into column r
        for j in (r + 1)..cols.len() {
            let a = cols[r][r];
            let b = cols[j][r];
            if b == 0 {
                continue;
            }
            let (g, x, y) = extended_gcd(a, b);
            let (ua, ub) = (a / g, b / g);
            let cr = cols[r];
            let cj = cols[j];
            for k in 0..3 {
                cols[r][k] = x * cr[k] + y * cj[k];
                cols[j][k] = -ub * cr[k] + ua * cj[k];
            }
        }
        if cols[r][r] == 0 {
            return None;
        }
        if cols[r][r] < 0 {
            for k in 0..3 {
                cols[r][k] = -cols[r][k];
            }
        }
        let pivot = cols[r][r];
        for j in 0..r {
            let q = cols[j][r].div_euclid(pivot);
            if q != 0 {
                let cr = cols[r];
                for k in 0..3 {
                    cols[j][k] -= q * cr[k];
                }
            }
        }
    }

    let mut h = [[0_i64; 3]; 3];
    for j in 0..3 {
        for i in 0..3 {
            h[i][j] = cols[j][i];
        }
    }
    Some(h)
}

/// Smith normal form `D = L·A·R` of an `m×3` integer matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct SmithNormalForm {
    /// Diagonal `m×3` matrix, each diagonal entry divides the next.
    pub diagonal: Vec<[i64; 3]>,
    /// Unimodular `m×m` row transformation.
    pub left: Vec<Vec<i64>>,
    /// Unimodular `3×3` column transformation.
    pub right: [[i64; 3]; 3],
}

impl SmithNormalForm {
    /// Diagonal entries `d_0, d_1, d_2` (zero beyond the rank).
    pub fn invariants(&self) -> [i64; 3] {
        let mut out = [0_i64; 3];
        for (i, row) in self.diagonal.iter().take(3).enumerate() {
            out[i] = row[i];
        }
        out
    }
}

pub fn smith_normal_form(a: &[[i64; 3]]) -> SmithNormalForm {
    let m = a.len();
    let mut d: Vec<[i64; 3]> = a.to_vec();
    let mut left: Vec<Vec<i64>> = (0..m)
        .map(|i| (0..m).map(|j| if i == j { 1 } else { 0 }).collect())
        .collect();
    let mut right = [[1_i64, 0, 0], [0, 1, 0], [0, 0, 1]];

    for t in 0..m.min(3) {
        loop {
            let pivot = (t..m)
                .cartesian_product(t..3)
                .filter(|&(i, j)| d[i][j] != 0)
                .min_by_key(|&(i, j)| (d[i][j].abs(), i, j));
            let (pi, pj) = match pivot {
                Some(p) => p,
                None => break,
            };
            d.swap(t, pi);
            left.swap(t, pi);
            if pj != t {
                for row in d.iter_mut() {
                    row.swap(t, pj);
                }
                for row in right.iter_mut() {
                    row.swap(t, pj);
                }
            }

            let p = d[t][t];
            let mut clean = true;
            for i in (t + 1)..m {
                let q = d[i][t] / p;
                if q != 0 {
                    let dt = d[t];
                    for k in 0..3 {
                        d[i][k] -= q * dt[k];
                    }
                    let lt = left[t].clone();
                    for k in 0..m {
                        left[i][k] -= q * lt[k];
                    }
                }
                if d[i][t] != 0 {
                    clean = false;
                }
            }
            for j in (t + 1)..3 {
                let q = d[t][j] / p;
                if q != 0 {
                    for row in d.iter_mut() {
                        row[j] -= q * row[t];
                    }
                    for row in right.iter_mut() {
                        row[j] -= q * row[t];
                    }
                }
                if d[t][j] != 0 {
                    clean = false;
                }
            }
            if !clean {
                continue;
            }

            // divisibility of the remaining block by the pivot
            let offender = (t + 1..m)
                .cartesian_product(t + 1..3)
                .find(|&(i, j)| d[i][j] % p != 0);
            match offender {
                Some((i, _)) => {
                    let di = d[i];
                    for k in 0..3 {
                        d[t][k] += di[k];
                    }
                    let li = left[i].clone();
                    for k in 0..m {
                        left[t][k] += li[k];
                    }
                }
                None => break,
            }
        }
        if t < m && d[t][t] < 0 {
            for k in 0..3 {
                d[t][k] = -d[t][k];
            }
            for k in 0..m {
                left[t][k] = -left[t][k];
            }
        }
    }

    SmithNormalForm {
        diagonal: d,
        left,
        right,
    }
}

/// Solutions of `A·s ≡ b (mod 1)` for an `m×3` integer matrix `A`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModularSolution {
    /// One solution, wrapped into `[0, 1)`.
    pub particular: Vector3,
    /// Every `s` with `A·s ≡ 0 (mod 1)` modulo the unit lattice, zero first.
    pub shifts: Vec<Vector3>,
    /// Directions along which solutions are continuous (rank deficiency).
    pub free_axes: Vec<[i64; 3]>,
}

/// Solves `A·s ≡ b (mod 1)`; `None` if no solution satisfies every row
/// within `tol`.
pub fn solve_modular(a: &[[i64; 3]], b: &[f64], tol: f64) -> Option<ModularSolution> {
    if a.len() != b.len() {
        return None;
    }
    let snf = smith_normal_form(a);
    let m = a.len();
    let c: Vec<f64> = (0..m)
        .map(|i| (0..m).map(|k| snf.left[i][k] as f64 * b[k]).sum())
        .collect();
    let inv = snf.invariants();

    let mut y = [0.0; 3];
    for i in 0..3.min(m) {
        if inv[i] != 0 {
            y[i] = c[i] / inv[i] as f64;
        }
    }
    let particular = wrap_vector(apply_i64(snf.right, y));

    // verify every row
    for (row, bi) in a.iter().zip(b.iter()) {
        let lhs: f64 = (0..3).map(|k| row[k] as f64 * particular[k]).sum();
        if wrap_centered(lhs - bi).abs() > tol {
            return None;
        }
    }

    let ranges: Vec<Vec<i64>> = (0..3)
        .map(|i| {
            if inv[i] > 0 {
                (0..inv[i]).collect()
            } else {
                vec![0]
            }
        })
        .collect();
    let mut shifts: Vec<Vector3> = Vec::new();
    for (k0, k1, k2) in iproduct!(
        ranges[0].iter(),
        ranges[1].iter(),
        ranges[2].iter()
    ) {
        let ks = [*k0, *k1, *k2];
        let mut z = [0.0; 3];
        for i in 0..3 {
            if inv[i] > 0 {
                z[i] = ks[i] as f64 / inv[i] as f64;
            }
        }
        let shift = wrap_vector(apply_i64(snf.right, z));
        if !shifts
            .iter()
            .any(|s| (0..3).all(|k| wrap_centered(s[k] - shift[k]).abs() < 1.0e-8))
        {
            shifts.push(shift);
        }
    }

    let free_axes = (0..3)
        .filter(|&i| inv[i] == 0)
        .map(|i| [snf.right[0][i], snf.right[1][i], snf.right[2][i]])
        .collect();

    Some(ModularSolution {
        particular,
        shifts,
        free_axes,
    })
}

fn apply_i64(m: [[i64; 3]; 3], v: Vector3) -> Vector3 {
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = m[i][0] as f64 * v[0] + m[i][1] as f64 * v[1] + m[i][2] as f64 * v[2];
    }
    out
}

fn wrap_vector(v: Vector3) -> Vector3 {
    [
        wrap_fractional(v[0]),
        wrap_fractional(v[1]),
        wrap_fractional(v[2]),
    ]
}

pub fn widen(m: IMatrix3) -> [[i64; 3]; 3] {
    let mut out = [[0_i64; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = i64::from(m[i][j]);
        }
    }
    out
}
