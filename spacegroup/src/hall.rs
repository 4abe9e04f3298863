//! Hall-symbol parser.
//!
//! A symbol such as `-P 4n 2 3` or `P 31 2c (0 0 1)` is read as a lattice
//! symbol (leading `-` adds the inversion), up to three matrix symbols and an
//! optional origin shift given in twelfths.

use std::fmt;

use linalg::Vector3;
use symops::{close_group, Rotation, SymOp, SymOpError};
use thiserror::Error;

/// Lattice centering of a conventional cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Centering {
    P,
    A,
    B,
    C,
    I,
    R,
    F,
}

impl Centering {
    pub fn from_symbol(c: char) -> Option<Centering> {
        match c {
            'P' => Some(Centering::P),
            'A' => Some(Centering::A),
            'B' => Some(Centering::B),
            'C' => Some(Centering::C),
            'I' => Some(Centering::I),
            'R' => Some(Centering::R),
            'F' => Some(Centering::F),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Centering::P => 'P',
            Centering::A => 'A',
            Centering::B => 'B',
            Centering::C => 'C',
            Centering::I => 'I',
            Centering::R => 'R',
            Centering::F => 'F',
        }
    }

    /// Lattice points of the conventional cell, zero first. `R` is the
    /// obverse setting on hexagonal axes.
    pub fn lattice_points(&self) -> Vec<Vector3> {
        let zero = [0.0, 0.0, 0.0];
        match self {
            Centering::P => vec![zero],
            Centering::A => vec![zero, [0.0, 0.5, 0.5]],
            Centering::B => vec![zero, [0.5, 0.0, 0.5]],
            Centering::C => vec![zero, [0.5, 0.5, 0.0]],
            Centering::I => vec![zero, [0.5, 0.5, 0.5]],
            Centering::R => vec![
                zero,
                [2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
                [1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0],
            ],
            Centering::F => vec![zero, [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]],
        }
    }

    /// Number of lattice points per conventional cell.
    pub fn order(&self) -> usize {
        match self {
            Centering::P => 1,
            Centering::A | Centering::B | Centering::C | Centering::I => 2,
            Centering::R => 3,
            Centering::F => 4,
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum HallError {
    #[error("empty Hall symbol")]
    Empty,

    #[error("unknown lattice symbol '{0}'")]
    UnknownLattice(String),

    #[error("cannot parse matrix symbol '{token}' at position {position}")]
    BadMatrixSymbol { token: String, position: usize },

    #[error("cannot parse origin shift '{0}'")]
    BadOriginShift(String),

    #[error("operations of '{0}' do not form a crystallographic point group")]
    NotCrystallographic(String),

    #[error("no tabulated setting has Hall number {0}")]
    UnknownHallNumber(usize),

    #[error(transparent)]
    Group(#[from] SymOpError),
}

/// Parsed Hall symbol: centering plus generator operations (origin shift
/// already applied, inversion included for centrosymmetric symbols).
#[derive(Clone, Debug)]
pub struct HallSymbol {
    pub symbol: String,
    pub centering: Centering,
    pub centrosymmetric: bool,
    pub generators: Vec<SymOp>,
}

impl HallSymbol {
    pub fn parse(symbol: &str) -> Result<HallSymbol, HallError> {
        let (body, shift) = match symbol.find('(') {
            Some(i) => (&symbol[..i], Some(&symbol[i..])),
            None => (symbol, None),
        };

        let mut tokens = body.split_whitespace();
        let lattice = tokens.next().ok_or(HallError::Empty)?;
        let (centrosymmetric, lattice_char) = match lattice.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lattice),
        };
        let mut chars = lattice_char.chars();
        let centering = match (chars.next(), chars.next()) {
            (Some(c), None) => Centering::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| HallError::UnknownLattice(lattice.to_string()))?;

        let mut generators = Vec::new();
        if centrosymmetric {
            generators.push(SymOp::new(INVERSION, [0.0; 3])?);
        }

        let mut previous: Option<(u32, char)> = None;
        for (position, token) in tokens.enumerate() {
            let bad = || HallError::BadMatrixSymbol {
                token: token.to_string(),
                position,
            };
            let matrix = MatrixSymbol::parse(token, position, previous).ok_or_else(bad)?;
            generators.push(matrix.operation(previous).ok_or_else(bad)??);
            previous = Some((matrix.order, matrix.axis));
        }

        if let Some(shift) = shift {
            let v = parse_origin_shift(shift)?;
            generators = generators.iter().map(|g| shift_origin(g, v)).collect();
        }

        Ok(HallSymbol {
            symbol: symbol.to_string(),
            centering,
            centrosymmetric,
            generators,
        })
    }

    /// Full operation set in the conventional cell, centering translations
    /// included, identity first.
    pub fn operations(&self) -> Result<Vec<SymOp>, HallError> {
        let mut generators: Vec<SymOp> = self
            .centering
            .lattice_points()
            .into_iter()
            .skip(1)
            .map(SymOp::translation_only)
            .collect();
        generators.extend(self.generators.iter().cloned());
        Ok(close_group(&generators, 1.0e-9)?)
    }
}

const INVERSION: Rotation = [[-1, 0, 0], [0, -1, 0], [0, 0, -1]];

#[derive(Clone, Copy, Debug)]
struct MatrixSymbol {
    improper: bool,
    order: u32,
    axis: char,
    translation: Vector3,
}

impl MatrixSymbol {
    fn parse(token: &str, position: usize, previous: Option<(u32, char)>) -> Option<MatrixSymbol> {
        let chars: Vec<char> = token.chars().collect();
        let mut i = 0;

        let improper = chars.first() == Some(&'-');
        if improper {
            i += 1;
        }

        let order = chars.get(i)?.to_digit(10)?;
        if ![1, 2, 3, 4, 6].contains(&order) {
            return None;
        }
        i += 1;

        let mut screw = 0;
        if let Some(s) = chars.get(i).and_then(|c| c.to_digit(10)) {
            if s == 0 || s >= order {
                return None;
            }
            screw = s;
            i += 1;
        }

        let axis = match chars.get(i) {
            Some(&c) if "xyz'\"*".contains(c) => {
                i += 1;
                c
            }
            _ => default_axis(order, position, previous)?,
        };

        let mut translation = [0.0; 3];
        for c in chars[i..].iter() {
            let t = match c {
                'a' => [0.5, 0.0, 0.0],
                'b' => [0.0, 0.5, 0.0],
                'c' => [0.0, 0.0, 0.5],
                'n' => [0.5, 0.5, 0.5],
                'u' => [0.25, 0.0, 0.0],
                'v' => [0.0, 0.25, 0.0],
                'w' => [0.0, 0.0, 0.25],
                'd' => [0.25, 0.25, 0.25],
                _ => return None,
            };
            translation = linalg::add(translation, t);
        }

        if screw > 0 {
            let k = match axis {
                'x' => 0,
                'y' => 1,
                'z' => 2,
                _ => return None,
            };
            translation[k] += f64::from(screw) / f64::from(order);
        }

        Some(MatrixSymbol {
            improper,
            order,
            axis,
            translation,
        })
    }

    fn operation(&self, previous: Option<(u32, char)>) -> Option<Result<SymOp, SymOpError>> {
        let reference = previous.map_or('z', |p| p.1);
        let mut rotation = rotation_matrix(self.order, self.axis, reference)?;
        if self.improper {
            rotation = linalg::mat_mul(INVERSION, rotation);
        }
        Some(SymOp::new(rotation, self.translation))
    }
}

fn default_axis(order: u32, position: usize, previous: Option<(u32, char)>) -> Option<char> {
    match position {
        0 => Some('z'),
        1 if order == 2 => match previous?.0 {
            2 | 4 => Some('x'),
            3 | 6 => Some('\''),
            _ => None,
        },
        2 if order == 3 => Some('*'),
        _ if order == 1 => Some('z'),
        _ => None,
    }
}

/// Rotation for `order` about `axis`; primed axes are taken relative to
/// `reference`, the axis of the preceding matrix symbol.
fn rotation_matrix(order: u32, axis: char, reference: char) -> Option<Rotation> {
    let m = match (order, axis) {
        (1, _) => [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
        (2, 'x') => [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
        (3, 'x') => [[1, 0, 0], [0, 0, -1], [0, 1, -1]],
        (4, 'x') => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
        (6, 'x') => [[1, 0, 0], [0, 1, -1], [0, 1, 0]],
        (2, 'y') => [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
        (3, 'y') => [[-1, 0, 1], [0, 1, 0], [-1, 0, 0]],
        (4, 'y') => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
        (6, 'y') => [[0, 0, 1], [0, 1, 0], [-1, 0, 1]],
        (2, 'z') => [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
        (3, 'z') => [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
        (4, 'z') => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
        (6, 'z') => [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
        (2, '\'') => match reference {
            'x' => [[-1, 0, 0], [0, 0, -1], [0, -1, 0]],
            'y' => [[0, 0, -1], [0, -1, 0], [-1, 0, 0]],
            _ => [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
        },
        (2, '"') => match reference {
            'x' => [[-1, 0, 0], [0, 0, 1], [0, 1, 0]],
            'y' => [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
            _ => [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
        },
        (3, '*') => [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
        _ => return None,
    };
    Some(m)
}

fn parse_origin_shift(text: &str) -> Result<Vector3, HallError> {
    let bad = || HallError::BadOriginShift(text.to_string());
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(bad)?;
    let values: Vec<f64> = inner
        .split_whitespace()
        .map(|v| v.parse::<i32>().map(|n| f64::from(n) / 12.0))
        .collect::<Result<_, _>>()
        .map_err(|_| bad())?;
    if values.len() != 3 {
        return Err(bad());
    }
    Ok([values[0], values[1], values[2]])
}

/// `(W, w)` seen from an origin moved by `v`: `(W, w + v - W v)`.
fn shift_origin(op: &SymOp, v: Vector3) -> SymOp {
    let t = linalg::add(
        op.translation(),
        linalg::sub(v, linalg::rotate(*op.rotation(), v)),
    );
    op.with_translation(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symops::{classify_operations, validate_group};

    fn count(symbol: &str) -> usize {
        HallSymbol::parse(symbol).unwrap().operations().unwrap().len()
    }

    #[test]
    fn lattice_symbols() {
        let h = HallSymbol::parse("-F 4 2 3").unwrap();
        assert_eq!(h.centering, Centering::F);
        assert!(h.centrosymmetric);
        assert_eq!(h.generators.len(), 4);
        assert!(matches!(
            HallSymbol::parse("Q 2"),
            Err(HallError::UnknownLattice(_))
        ));
        assert_eq!(HallSymbol::parse("   ").unwrap_err(), HallError::Empty);
    }

    #[test]
    fn group_orders() {
        assert_eq!(count("P 1"), 1);
        assert_eq!(count("-P 1"), 2);
        assert_eq!(count("P 2yb"), 2);
        assert_eq!(count("C 2y"), 4);
        assert_eq!(count("-P 4 2 3"), 48);
        assert_eq!(count("-F 4 2 3"), 192);
        assert_eq!(count("-R 3 2\"c"), 36);
        assert_eq!(count("P 61 2 (0 0 -1)"), 12);
    }

    #[test]
    fn screw_and_glide_translations() {
        let h = HallSymbol::parse("P 61").unwrap();
        let t = h.generators[0].translation();
        assert!((t[2] - 1.0 / 6.0).abs() < 1.0e-12);

        let h = HallSymbol::parse("P -2yc").unwrap();
        assert_eq!(*h.generators[0].rotation(), [[1, 0, 0], [0, -1, 0], [0, 0, 1]]);
        assert_eq!(h.generators[0].translation(), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn default_axes() {
        let h = HallSymbol::parse("P 3 2").unwrap();
        assert_eq!(*h.generators[1].rotation(), [[0, -1, 0], [-1, 0, 0], [0, 0, -1]]);
        let h = HallSymbol::parse("P 4 2").unwrap();
        assert_eq!(*h.generators[1].rotation(), [[1, 0, 0], [0, -1, 0], [0, 0, -1]]);
        let h = HallSymbol::parse("P 2 2 3").unwrap();
        assert_eq!(*h.generators[2].rotation(), [[0, 0, 1], [1, 0, 0], [0, 1, 0]]);
        assert!(matches!(
            HallSymbol::parse("P 2 3"),
            Err(HallError::BadMatrixSymbol { position: 1, .. })
        ));
    }

    #[test]
    fn origin_shift_moves_translations() {
        let h = HallSymbol::parse("P 31 2c (0 0 1)").unwrap();
        let ops = h.operations().unwrap();
        assert_eq!(ops.len(), 6);
        assert_eq!(validate_group(&ops, 1.0e-9), Ok(()));
        assert_eq!(classify_operations(&ops).unwrap().symbol, "32");
        assert!(matches!(
            HallSymbol::parse("P 3 (0 0"),
            Err(HallError::BadOriginShift(_))
        ));
    }

    #[test]
    fn centering_points() {
        assert_eq!(Centering::R.lattice_points().len(), 3);
        assert_eq!(Centering::F.order(), 4);
        assert_eq!(Centering::from_symbol('I'), Some(Centering::I));
        assert_eq!(Centering::C.to_string(), "C");
    }
}
