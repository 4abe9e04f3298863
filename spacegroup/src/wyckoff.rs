//! Wyckoff positions of the reference types.
//!
//! Letters, multiplicities, oriented site-symmetry symbols and coordinate
//! triplets come from the static table in `wyckoff_db`. Each tabulated
//! triplet is matched against the site classes of a 1/24 grid of the
//! conventional cell: every grid point is keyed by its stabilizer, the
//! operations `(W, w)` with `W x + w = x + L` together with `L`, and points
//! related by the group action or sharing a key form one class. The match
//! checks the table entry by entry and yields the key lookup used for atoms.

use std::collections::HashMap;
use std::sync::OnceLock;

use itertools::iproduct;
use linalg::Vector3;
use log::debug;
use symops::SymOp;
use thiserror::Error;

use crate::database::SpaceGroupType;
use crate::wyckoff_db::WYCKOFF_POSITIONS;

/// Grid divisions per axis; every reference translation is a multiple of
/// `1/GRID`.
pub const GRID: i32 = 24;

/// Free parameters substituted into a triplet before matching; no
/// tabulated position lands on a more special one at these values.
const GENERIC_XYZ: Vector3 = [0.1372, 0.2719, 0.3547];

/// Site-symmetry key: operation index and lattice vector `L` of each
/// operation fixing the point.
pub type StabilizerKey = Vec<(usize, [i32; 3])>;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum WyckoffError {
    #[error("no Wyckoff data for space-group type {0}")]
    UnknownType(usize),

    #[error("type {number}: cannot parse coordinate triplet '{triplet}'")]
    BadTriplet {
        number: usize,
        triplet: &'static str,
    },

    #[error("type {number}: position {letter} ({triplet}) lies in no site class")]
    OffGrid {
        number: usize,
        letter: char,
        triplet: &'static str,
    },

    #[error("type {number}: position {letter} lists multiplicity {listed}, its site class has {derived}")]
    Multiplicity {
        number: usize,
        letter: char,
        listed: usize,
        derived: usize,
    },

    #[error("type {number}: positions {first} and {second} fall in the same site class")]
    Duplicate {
        number: usize,
        first: char,
        second: char,
    },

    #[error("type {number}: {listed} positions listed for {derived} site classes")]
    Count {
        number: usize,
        listed: usize,
        derived: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WyckoffPosition {
    pub letter: char,
    pub multiplicity: usize,
    /// Oriented site-symmetry symbol, e.g. `4/mm.m`.
    pub site_symmetry: &'static str,
    /// First coordinate triplet of the position, e.g. `x,1/2,0`.
    pub coordinates: &'static str,
    /// The triplet at `x = y = z = 0`, wrapped into `[0, 1)`.
    pub representative: Vector3,
}

#[derive(Clone, Debug, Default)]
pub struct WyckoffTable {
    pub positions: Vec<WyckoffPosition>,
    lookup: HashMap<StabilizerKey, usize>,
}

impl WyckoffTable {
    /// Position of a point with site-symmetry key `key`.
    pub fn position_of(&self, key: &[(usize, [i32; 3])]) -> Option<&WyckoffPosition> {
        self.lookup.get(key).map(|&i| &self.positions[i])
    }

    pub fn general_position(&self) -> Option<&WyckoffPosition> {
        self.positions.last()
    }

    pub fn by_letter(&self, letter: char) -> Option<&WyckoffPosition> {
        self.positions.iter().find(|p| p.letter == letter)
    }
}

/// Letter of the `index`-th position: `a` to `z`, then `α`.
pub fn wyckoff_letter(index: usize) -> char {
    if index < 26 {
        (b'a' + index as u8) as char
    } else {
        'α'
    }
}

/// Affine coordinate triplet such as `x,x+1/2,1/4` or `-x,2x,z`.
#[derive(Clone, Debug, PartialEq)]
pub struct Triplet {
    /// Row `i` holds the coefficients of x, y, z in component `i`.
    pub coefficients: [[i32; 3]; 3],
    pub constant: Vector3,
}

impl Triplet {
    pub fn parse(text: &str) -> Option<Triplet> {
        let mut parts = text.split(',');
        let mut coefficients = [[0; 3]; 3];
        let mut constant = [0.0; 3];
        for i in 0..3 {
            let (row, c) = parse_component(parts.next()?)?;
            coefficients[i] = row;
            constant[i] = c;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Triplet {
            coefficients,
            constant,
        })
    }

    pub fn evaluate(&self, xyz: Vector3) -> Vector3 {
        let mut out = self.constant;
        for i in 0..3 {
            for j in 0..3 {
                out[i] += f64::from(self.coefficients[i][j]) * xyz[j];
            }
        }
        out
    }
}

/// One component: signed terms, each a variable with an optional integer
/// factor or a constant `p` or `p/q`.
fn parse_component(text: &str) -> Option<([i32; 3], f64)> {
    let mut row = [0; 3];
    let mut constant = 0.0;
    let mut rest = text.trim();
    if rest.is_empty() {
        return None;
    }
    while !rest.is_empty() {
        let (sign, body) = match rest.as_bytes()[0] {
            b'+' => (1, &rest[1..]),
            b'-' => (-1, &rest[1..]),
            _ => (1, rest),
        };
        let end = body.find(|c| c == '+' || c == '-').unwrap_or_else(|| body.len());
        let (term, tail) = body.split_at(end);
        rest = tail;
        match term.chars().last()? {
            v @ 'x'..='z' => {
                let axis = (v as u8 - b'x') as usize;
                let factor = &term[..term.len() - 1];
                let factor: i32 = if factor.is_empty() {
                    1
                } else {
                    factor.parse().ok()?
                };
                row[axis] += sign * factor;
            }
            _ => {
                let value = match term.split_once('/') {
                    Some((p, q)) => {
                        let p: i32 = p.parse().ok()?;
                        let q: i32 = q.parse().ok()?;
                        if q == 0 {
                            return None;
                        }
                        f64::from(p) / f64::from(q)
                    }
                    None => f64::from(term.parse::<i32>().ok()?),
                };
                constant += f64::from(sign) * value;
            }
        }
    }
    Some((row, constant))
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

fn grid_index(p: [i32; 3]) -> usize {
    ((p[0] * GRID + p[1]) * GRID + p[2]) as usize
}

/// Site classes of the grid: multiplicity of each class and the class of
/// every stabilizer key met on the grid.
struct SiteClasses {
    multiplicities: Vec<usize>,
    lookup: HashMap<StabilizerKey, usize>,
}

impl SiteClasses {
    fn derive(operations: &[SymOp]) -> SiteClasses {
        let n = GRID;
        let ops: Vec<([[i32; 3]; 3], [i32; 3])> = operations
            .iter()
            .map(|op| {
                let t = op.translation();
                let scaled = [
                    (t[0] * f64::from(n)).round() as i32,
                    (t[1] * f64::from(n)).round() as i32,
                    (t[2] * f64::from(n)).round() as i32,
                ];
                (*op.rotation(), scaled)
            })
            .collect();

        let points: Vec<[i32; 3]> = iproduct!(0..n, 0..n, 0..n)
            .map(|(i, j, k)| [i, j, k])
            .collect();

        let mut keys: Vec<StabilizerKey> = Vec::with_capacity(points.len());
        let mut uf = UnionFind::new(points.len());
        for (ip, p) in points.iter().enumerate() {
            let mut key = Vec::new();
            for (io, (w, t)) in ops.iter().enumerate() {
                let q = linalg::mat_vec(*w, *p);
                let d = [q[0] + t[0] - p[0], q[1] + t[1] - p[1], q[2] + t[2] - p[2]];
                if d.iter().all(|x| x % n == 0) {
                    key.push((io, [d[0] / n, d[1] / n, d[2] / n]));
                } else {
                    let image = [
                        (q[0] + t[0]).rem_euclid(n),
                        (q[1] + t[1]).rem_euclid(n),
                        (q[2] + t[2]).rem_euclid(n),
                    ];
                    uf.union(ip, grid_index(image));
                }
            }
            keys.push(key);
        }

        let mut first_with_key: HashMap<&StabilizerKey, usize> = HashMap::new();
        for (ip, key) in keys.iter().enumerate() {
            match first_with_key.get(key) {
                Some(&other) => uf.union(ip, other),
                None => {
                    first_with_key.insert(key, ip);
                }
            }
        }

        let mut multiplicities = Vec::new();
        let mut class_of_root: HashMap<usize, usize> = HashMap::new();
        let mut lookup = HashMap::new();
        for (ip, key) in keys.into_iter().enumerate() {
            let root = uf.find(ip);
            let class = *class_of_root.entry(root).or_insert_with(|| {
                multiplicities.push(operations.len() / key.len().max(1));
                multiplicities.len() - 1
            });
            lookup.entry(key).or_insert(class);
        }
        SiteClasses {
            multiplicities,
            lookup,
        }
    }
}

/// Stabilizer key of an exactly placed point.
fn stabilizer_key(operations: &[SymOp], x: Vector3) -> StabilizerKey {
    operations
        .iter()
        .enumerate()
        .filter_map(|(io, op)| {
            let d = linalg::sub(op.apply_unwrapped(x), x);
            let l = [d[0].round(), d[1].round(), d[2].round()];
            if (0..3).all(|i| (d[i] - l[i]).abs() < 1.0e-7) {
                Some((io, [l[0] as i32, l[1] as i32, l[2] as i32]))
            } else {
                None
            }
        })
        .collect()
}

/// Builds the Wyckoff table of `sg` from its tabulated positions, checking
/// each one against the site classes of the operations.
pub fn build_wyckoff_table(sg: &SpaceGroupType) -> Result<WyckoffTable, WyckoffError> {
    let number = sg.number;
    let entries = WYCKOFF_POSITIONS
        .get(number.wrapping_sub(1))
        .ok_or(WyckoffError::UnknownType(number))?;
    let classes = SiteClasses::derive(&sg.operations);
    if entries.len() != classes.multiplicities.len() {
        return Err(WyckoffError::Count {
            number,
            listed: entries.len(),
            derived: classes.multiplicities.len(),
        });
    }

    let mut position_of_class: Vec<Option<usize>> = vec![None; classes.multiplicities.len()];
    let mut positions = Vec::with_capacity(entries.len());
    for (i, &(multiplicity, site_symmetry, coordinates)) in entries.iter().enumerate() {
        let letter = wyckoff_letter(i);
        let triplet = Triplet::parse(coordinates).ok_or(WyckoffError::BadTriplet {
            number,
            triplet: coordinates,
        })?;
        let key = stabilizer_key(
            &sg.operations,
            linalg::wrapped(triplet.evaluate(GENERIC_XYZ)),
        );
        let class = *classes.lookup.get(&key).ok_or(WyckoffError::OffGrid {
            number,
            letter,
            triplet: coordinates,
        })?;
        if classes.multiplicities[class] != multiplicity {
            return Err(WyckoffError::Multiplicity {
                number,
                letter,
                listed: multiplicity,
                derived: classes.multiplicities[class],
            });
        }
        if let Some(first) = position_of_class[class] {
            return Err(WyckoffError::Duplicate {
                number,
                first: wyckoff_letter(first),
                second: letter,
            });
        }
        position_of_class[class] = Some(i);
        positions.push(WyckoffPosition {
            letter,
            multiplicity,
            site_symmetry,
            coordinates,
            representative: linalg::wrapped(triplet.evaluate([0.0; 3])),
        });
    }

    // equal counts and no duplicates leave every class with a position
    let lookup = classes
        .lookup
        .into_iter()
        .filter_map(|(key, class)| position_of_class[class].map(|i| (key, i)))
        .collect();

    debug!(
        "{} Wyckoff positions of type {} matched",
        positions.len(),
        number
    );
    Ok(WyckoffTable { positions, lookup })
}

type CachedTable = OnceLock<Result<WyckoffTable, WyckoffError>>;

static TABLES: OnceLock<Vec<CachedTable>> = OnceLock::new();

/// Wyckoff table of a reference type, built on first use.
pub fn wyckoff_table(sg: &SpaceGroupType) -> Result<&'static WyckoffTable, WyckoffError> {
    let tables = TABLES.get_or_init(|| (0..WYCKOFF_POSITIONS.len()).map(|_| OnceLock::new()).collect());
    let slot = tables
        .get(sg.number.wrapping_sub(1))
        .ok_or(WyckoffError::UnknownType(sg.number))?;
    match slot.get_or_init(|| build_wyckoff_table(sg)) {
        Ok(table) => Ok(table),
        Err(e) => Err(e.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{space_group_type, space_group_types};

    fn table(n: usize) -> &'static WyckoffTable {
        wyckoff_table(space_group_type(n).unwrap().unwrap()).unwrap()
    }

    fn summary(t: &WyckoffTable) -> Vec<(char, usize, &'static str)> {
        t.positions
            .iter()
            .map(|p| (p.letter, p.multiplicity, p.site_symmetry))
            .collect()
    }

    #[test]
    fn every_type_matches_its_site_classes() {
        for sg in space_group_types().unwrap().iter() {
            let t = wyckoff_table(sg).unwrap();
            let general = t.general_position().unwrap();
            assert_eq!(general.multiplicity, sg.operations.len(), "{}", sg.number);
            assert_eq!(general.site_symmetry, "1", "{}", sg.number);
        }
    }

    #[test]
    fn triplets() {
        let t = Triplet::parse("x,-x+1/2,1/4").unwrap();
        assert_eq!(t.coefficients, [[1, 0, 0], [-1, 0, 0], [0, 0, 0]]);
        assert_eq!(t.evaluate([0.25, 0.0, 0.0]), [0.25, 0.25, 0.25]);
        let t = Triplet::parse("x,2x,z").unwrap();
        assert_eq!(t.coefficients[1], [2, 0, 0]);
        assert!(Triplet::parse("x,y").is_none());
        assert!(Triplet::parse("x,y,1/0").is_none());
        assert!(Triplet::parse("x,y,z,0").is_none());
        assert!(Triplet::parse("x,,z").is_none());
        assert!(Triplet::parse("x,w,z").is_none());
    }

    #[test]
    fn triclinic_tables() {
        assert_eq!(summary(table(1)), vec![('a', 1, "1")]);
        let t = table(2);
        let inversion_centres: Vec<(char, Vector3)> = t.positions[..8]
            .iter()
            .map(|p| (p.letter, p.representative))
            .collect();
        assert_eq!(
            inversion_centres,
            vec![
                ('a', [0.0, 0.0, 0.0]),
                ('b', [0.0, 0.0, 0.5]),
                ('c', [0.0, 0.5, 0.0]),
                ('d', [0.5, 0.0, 0.0]),
                ('e', [0.5, 0.5, 0.0]),
                ('f', [0.5, 0.0, 0.5]),
                ('g', [0.0, 0.5, 0.5]),
                ('h', [0.5, 0.5, 0.5]),
            ]
        );
        assert!(t.positions[..8].iter().all(|p| p.site_symmetry == "-1"));
        assert_eq!(t.general_position().unwrap().letter, 'i');
        assert_eq!(t.general_position().unwrap().multiplicity, 2);
    }

    #[test]
    fn pm3m_table() {
        let t = table(221);
        assert_eq!(
            summary(t),
            vec![
                ('a', 1, "m-3m"),
                ('b', 1, "m-3m"),
                ('c', 3, "4/mm.m"),
                ('d', 3, "4/mm.m"),
                ('e', 6, "4m.m"),
                ('f', 6, "4m.m"),
                ('g', 8, ".3m"),
                ('h', 12, "mm2.."),
                ('i', 12, "m.m2"),
                ('j', 12, "m.m2"),
                ('k', 24, "m.."),
                ('l', 24, "m.."),
                ('m', 24, "..m"),
                ('n', 48, "1"),
            ]
        );
        assert_eq!(t.positions[1].representative, [0.5, 0.5, 0.5]);
        assert_eq!(t.by_letter('c').unwrap().coordinates, "0,1/2,1/2");
        assert_eq!(t.by_letter('d').unwrap().representative, [0.5, 0.0, 0.0]);
        assert_eq!(t.by_letter('g').unwrap().coordinates, "x,x,x");
    }

    #[test]
    fn fm3m_table() {
        let t = table(225);
        assert_eq!(t.positions.len(), 12);
        assert_eq!(t.positions[0].multiplicity, 4);
        assert_eq!(t.positions[1].representative, [0.5, 0.5, 0.5]);
        let c = t.by_letter('c').unwrap();
        assert_eq!((c.multiplicity, c.site_symmetry), (8, "-43m"));
        assert_eq!(t.by_letter('d').unwrap().site_symmetry, "m.mm");
        assert_eq!(t.general_position().unwrap().multiplicity, 192);
    }

    #[test]
    fn letters_follow_the_tabulated_order() {
        // P6_3/mmc: the hcp site 2c lies on -6m2
        let hcp = table(194).by_letter('c').unwrap();
        assert_eq!((hcp.multiplicity, hcp.coordinates), (2, "1/3,2/3,1/4"));
        assert_eq!(hcp.site_symmetry, "-6m2");
        // Fd-3m, origin choice 2: 8a and 16c
        let fd3m = table(227);
        assert_eq!(fd3m.by_letter('a').unwrap().coordinates, "1/8,1/8,1/8");
        assert_eq!(fd3m.by_letter('c').unwrap().site_symmetry, ".-3m");
        // Pnma: 4c on the mirror
        let pnma = table(62).by_letter('c').unwrap();
        assert_eq!((pnma.multiplicity, pnma.coordinates), (4, "x,1/4,z"));
    }

    #[test]
    fn key_lookup() {
        let sg = space_group_type(2).unwrap().unwrap();
        let t = wyckoff_table(sg).unwrap();
        // inversion centre at (1/2, 0, 0): -x + 0 = x - 1 along a
        let key: StabilizerKey = vec![(0, [0, 0, 0]), (1, [-1, 0, 0])];
        let pos = t.position_of(&key).unwrap();
        assert_eq!(pos.letter, 'd');
        assert_eq!(pos.representative, [0.5, 0.0, 0.0]);
        assert!(t.position_of(&[(0, [5, 5, 5])]).is_none());
        assert_eq!(wyckoff_letter(26), 'α');
    }

    #[test]
    fn mismatched_entries_are_reported() {
        let sg = space_group_type(2).unwrap().unwrap();
        assert_eq!(SiteClasses::derive(&sg.operations).multiplicities.len(), 9);
        let pm3m = space_group_type(221).unwrap().unwrap();
        assert_eq!(stabilizer_key(&pm3m.operations, [0.5, 0.0, 0.0]).len(), 16);
        let mut unknown = sg.clone();
        unknown.number = 231;
        assert_eq!(
            build_wyckoff_table(&unknown).unwrap_err(),
            WyckoffError::UnknownType(231)
        );
        // a P-1 type labelled as P1 lists one position for nine classes
        let mut relabelled = sg.clone();
        relabelled.number = 1;
        assert_eq!(
            build_wyckoff_table(&relabelled).unwrap_err(),
            WyckoffError::Count {
                number: 1,
                listed: 1,
                derived: 9
            }
        );
    }
}
