//! Reference table of the 230 space-group types.
//!
//! Each type is built from the Hall symbol of its default setting: unique
//! axis b (cell choice 1) for monoclinic groups, origin choice 2 where two
//! origins are tabulated, hexagonal axes for rhombohedral groups.

use std::sync::OnceLock;

use linalg::Vector3;
use symops::{classify_operations, point_group_by_symbol, PointGroup, SymOp};

use crate::hall::{Centering, HallError, HallSymbol};
use crate::settings::{default_hall_number, hall_setting};

/// A space-group type with its operations in the standard conventional cell.
#[derive(Clone, Debug)]
pub struct SpaceGroupType {
    pub number: usize,
    /// Hall number of the default setting, 1 to 530.
    pub hall_number: usize,
    pub hall_symbol: &'static str,
    /// Short Hermann–Mauguin symbol, subscripts written with `_`.
    pub international: &'static str,
    pub centering: Centering,
    pub point_group: PointGroup,
    /// Hall generators, inversion included for centrosymmetric types.
    pub generators: Vec<SymOp>,
    /// Every operation, centering translations included, identity first.
    pub operations: Vec<SymOp>,
}

impl SpaceGroupType {
    pub fn lattice_points(&self) -> Vec<Vector3> {
        self.centering.lattice_points()
    }

    /// Operations with zero-translation centering removed: one per rotation.
    pub fn coset_representatives(&self) -> Vec<&SymOp> {
        let mut out: Vec<&SymOp> = Vec::new();
        for op in self.operations.iter() {
            if !out.iter().any(|r| r.rotation() == op.rotation()) {
                out.push(op);
            }
        }
        out
    }
}

/// Short Hermann–Mauguin symbols, subscripts written with `_`.
const INTERNATIONAL: [&str; 230] = [
    "P1", "P-1", "P2", "P2_1", "C2", "Pm",
    "Pc", "Cm", "Cc", "P2/m", "P2_1/m", "C2/m",
    "P2/c", "P2_1/c", "C2/c", "P222", "P222_1", "P2_12_12",
    "P2_12_12_1", "C222_1", "C222", "F222", "I222", "I2_12_12_1",
    "Pmm2", "Pmc2_1", "Pcc2", "Pma2", "Pca2_1", "Pnc2",
    "Pmn2_1", "Pba2", "Pna2_1", "Pnn2", "Cmm2", "Cmc2_1",
    "Ccc2", "Amm2", "Aem2", "Ama2", "Aea2", "Fmm2",
    "Fdd2", "Imm2", "Iba2", "Ima2", "Pmmm", "Pnnn",
    "Pccm", "Pban", "Pmma", "Pnna", "Pmna", "Pcca",
    "Pbam", "Pccn", "Pbcm", "Pnnm", "Pmmn", "Pbcn",
    "Pbca", "Pnma", "Cmcm", "Cmce", "Cmmm", "Cccm",
    "Cmme", "Ccce", "Fmmm", "Fddd", "Immm", "Ibam",
    "Ibca", "Imma", "P4", "P4_1", "P4_2", "P4_3",
    "I4", "I4_1", "P-4", "I-4", "P4/m", "P4_2/m",
    "P4/n", "P4_2/n", "I4/m", "I4_1/a", "P422", "P42_12",
    "P4_122", "P4_12_12", "P4_222", "P4_22_12", "P4_322", "P4_32_12",
    "I422", "I4_122", "P4mm", "P4bm", "P4_2cm", "P4_2nm",
    "P4cc", "P4nc", "P4_2mc", "P4_2bc", "I4mm", "I4cm",
    "I4_1md", "I4_1cd", "P-42m", "P-42c", "P-42_1m", "P-42_1c",
    "P-4m2", "P-4c2", "P-4b2", "P-4n2", "I-4m2", "I-4c2",
    "I-42m", "I-42d", "P4/mmm", "P4/mcc", "P4/nbm", "P4/nnc",
    "P4/mbm", "P4/mnc", "P4/nmm", "P4/ncc", "P4_2/mmc", "P4_2/mcm",
    "P4_2/nbc", "P4_2/nnm", "P4_2/mbc", "P4_2/mnm", "P4_2/nmc", "P4_2/ncm",
    "I4/mmm", "I4/mcm", "I4_1/amd", "I4_1/acd", "P3", "P3_1",
    "P3_2", "R3", "P-3", "R-3", "P312", "P321",
    "P3_112", "P3_121", "P3_212", "P3_221", "R32", "P3m1",
    "P31m", "P3c1", "P31c", "R3m", "R3c", "P-31m",
    "P-31c", "P-3m1", "P-3c1", "R-3m", "R-3c", "P6",
    "P6_1", "P6_5", "P6_2", "P6_4", "P6_3", "P-6",
    "P6/m", "P6_3/m", "P622", "P6_122", "P6_522", "P6_222",
    "P6_422", "P6_322", "P6mm", "P6cc", "P6_3cm", "P6_3mc",
    "P-6m2", "P-6c2", "P-62m", "P-62c", "P6/mmm", "P6/mcc",
    "P6_3/mcm", "P6_3/mmc", "P23", "F23", "I23", "P2_13",
    "I2_13", "Pm-3", "Pn-3", "Fm-3", "Fd-3", "Im-3",
    "Pa-3", "Ia-3", "P432", "P4_232", "F432", "F4_132",
    "I432", "P4_332", "P4_132", "I4_132", "P-43m", "F-43m",
    "I-43m", "P-43n", "F-43c", "I-43d", "Pm-3m", "Pn-3n",
    "Pm-3n", "Pn-3m", "Fm-3m", "Fm-3c", "Fd-3m", "Fd-3c",
    "Im-3m", "Ia-3d",
];

// last space-group number of each point group, in table order
const POINT_GROUP_RANGES: [(usize, &str); 32] = [
    (1, "1"),
    (2, "-1"),
    (5, "2"),
    (9, "m"),
    (15, "2/m"),
    (24, "222"),
    (46, "mm2"),
    (74, "mmm"),
    (80, "4"),
    (82, "-4"),
    (88, "4/m"),
    (98, "422"),
    (110, "4mm"),
    (122, "-42m"),
    (142, "4/mmm"),
    (146, "3"),
    (148, "-3"),
    (155, "32"),
    (161, "3m"),
    (167, "-3m"),
    (173, "6"),
    (174, "-6"),
    (176, "6/m"),
    (182, "622"),
    (186, "6mm"),
    (190, "-6m2"),
    (194, "6/mmm"),
    (199, "23"),
    (206, "m-3"),
    (214, "432"),
    (220, "-43m"),
    (230, "m-3m"),
];

/// Point group of space-group type `number`, from the number ranges.
pub fn point_group_of_number(number: usize) -> Option<PointGroup> {
    if number == 0 || number > 230 {
        return None;
    }
    POINT_GROUP_RANGES
        .iter()
        .find(|(last, _)| number <= *last)
        .and_then(|(_, symbol)| point_group_by_symbol(symbol))
}

static DATABASE: OnceLock<Result<Vec<SpaceGroupType>, HallError>> = OnceLock::new();

fn build() -> Result<Vec<SpaceGroupType>, HallError> {
    let mut out = Vec::with_capacity(INTERNATIONAL.len());
    for (i, international) in INTERNATIONAL.iter().enumerate() {
        let number = i + 1;
        let hall_number = default_hall_number(number).unwrap_or(0);
        let setting = hall_setting(hall_number).ok_or(HallError::UnknownHallNumber(hall_number))?;
        let hall = HallSymbol::parse(setting.hall_symbol)?;
        let operations = hall.operations()?;
        let point_group = classify_operations(&operations)
            .map_err(|_| HallError::NotCrystallographic(setting.hall_symbol.to_string()))?;
        out.push(SpaceGroupType {
            number,
            hall_number: setting.hall_number,
            hall_symbol: setting.hall_symbol,
            international: *international,
            centering: hall.centering,
            point_group,
            generators: hall.generators,
            operations,
        });
    }
    Ok(out)
}

/// All 230 types, parsed on first use.
pub fn space_group_types() -> Result<&'static [SpaceGroupType], HallError> {
    match DATABASE.get_or_init(build) {
        Ok(types) => Ok(types.as_slice()),
        Err(e) => Err(e.clone()),
    }
}

/// Type by number (1 to 230).
pub fn space_group_type(number: usize) -> Result<Option<&'static SpaceGroupType>, HallError> {
    Ok(space_group_types()?.get(number.wrapping_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use symops::validate_group;

    #[test]
    fn every_entry_generates_a_finite_group_of_the_right_order() {
        let types = space_group_types().unwrap();
        assert_eq!(types.len(), 230);
        for sg in types.iter() {
            let expected_pg = point_group_of_number(sg.number).unwrap();
            assert_eq!(
                sg.point_group, expected_pg,
                "point group of {} ({})",
                sg.number, sg.hall_symbol
            );
            assert_eq!(
                sg.operations.len(),
                expected_pg.order * sg.centering.order(),
                "operation count of {} ({})",
                sg.number,
                sg.hall_symbol
            );
            assert_eq!(sg.coset_representatives().len(), expected_pg.order);
        }
    }

    #[test]
    fn centering_matches_symbol() {
        for sg in space_group_types().unwrap().iter() {
            let first = sg.international.chars().next().unwrap();
            assert_eq!(sg.centering.symbol(), first, "{}", sg.number);
        }
    }

    #[test]
    fn selected_groups_are_closed() {
        for &n in [14, 62, 136, 167, 194, 227, 230].iter() {
            let sg = space_group_type(n).unwrap().unwrap();
            assert_eq!(validate_group(&sg.operations, 1.0e-9), Ok(()), "{}", n);
        }
    }

    #[test]
    fn lookup_by_number() {
        let sg = space_group_type(221).unwrap().unwrap();
        assert_eq!(sg.international, "Pm-3m");
        assert_eq!(sg.hall_number, 517);
        assert_eq!(sg.hall_symbol, "-P 4 2 3");
        assert_eq!(sg.operations.len(), 48);
        assert_eq!(space_group_type(227).unwrap().unwrap().hall_number, 526);
        assert!(space_group_type(0).unwrap().is_none());
        assert!(space_group_type(231).unwrap().is_none());
        assert_eq!(point_group_of_number(186).unwrap().symbol, "6mm");
        assert!(point_group_of_number(0).is_none());
    }
}
