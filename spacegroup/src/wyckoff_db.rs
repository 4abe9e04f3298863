//! Wyckoff positions of the 230 types in the settings of the reference
//! table (unique axis b, origin choice 2, hexagonal axes).
//!
//! Each type lists its positions from `a` on as
//! `(multiplicity, oriented site-symmetry symbol, first coordinate triplet)`.

pub(crate) type WyckoffEntry = (usize, &'static str, &'static str);

pub(crate) const WYCKOFF_POSITIONS: [&[WyckoffEntry]; 230] = [
    // 1 P1
    &[(1, "1", "x,y,z")],
    // 2 P-1
    &[
        (1, "-1", "0,0,0"),
        (1, "-1", "0,0,1/2"),
        (1, "-1", "0,1/2,0"),
        (1, "-1", "1/2,0,0"),
        (1, "-1", "1/2,1/2,0"),
        (1, "-1", "1/2,0,1/2"),
        (1, "-1", "0,1/2,1/2"),
        (1, "-1", "1/2,1/2,1/2"),
        (2, "1", "x,y,z"),
    ],
    // 3 P2
    &[
        (1, "2", "0,y,0"),
        (1, "2", "0,y,1/2"),
        (1, "2", "1/2,y,0"),
        (1, "2", "1/2,y,1/2"),
        (2, "1", "x,y,z"),
    ],
    // 4 P2_1
    &[(2, "1", "x,y,z")],
    // 5 C2
    &[
        (2, "2", "0,y,0"),
        (2, "2", "0,y,1/2"),
        (4, "1", "x,y,z"),
    ],
    // 6 Pm
    &[
        (1, "m", "x,0,z"),
        (1, "m", "x,1/2,z"),
        (2, "1", "x,y,z"),
    ],
    // 7 Pc
    &[(2, "1", "x,y,z")],
    // 8 Cm
    &[(2, "m", "x,0,z"), (4, "1", "x,y,z")],
    // 9 Cc
    &[(4, "1", "x,y,z")],
    // 10 P2/m
    &[
        (1, "2/m", "0,0,0"),
        (1, "2/m", "0,1/2,0"),
        (1, "2/m", "0,0,1/2"),
        (1, "2/m", "1/2,0,0"),
        (1, "2/m", "1/2,1/2,0"),
        (1, "2/m", "0,1/2,1/2"),
        (1, "2/m", "1/2,0,1/2"),
        (1, "2/m", "1/2,1/2,1/2"),
        (2, "2", "0,y,0"),
        (2, "2", "1/2,y,0"),
        (2, "2", "0,y,1/2"),
        (2, "2", "1/2,y,1/2"),
        (2, "m", "x,0,z"),
        (2, "m", "x,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 11 P2_1/m
    &[
        (2, "-1", "0,0,0"),
        (2, "-1", "1/2,0,0"),
        (2, "-1", "0,0,1/2"),
        (2, "-1", "1/2,0,1/2"),
        (2, "m", "x,1/4,z"),
        (4, "1", "x,y,z"),
    ],
    // 12 C2/m
    &[
        (2, "2/m", "0,0,0"),
        (2, "2/m", "0,1/2,0"),
        (2, "2/m", "0,0,1/2"),
        (2, "2/m", "0,1/2,1/2"),
        (4, "-1", "1/4,1/4,0"),
        (4, "-1", "1/4,1/4,1/2"),
        (4, "2", "0,y,0"),
        (4, "2", "0,y,1/2"),
        (4, "m", "x,0,z"),
        (8, "1", "x,y,z"),
    ],
    // 13 P2/c
    &[
        (2, "-1", "0,0,0"),
        (2, "-1", "1/2,1/2,0"),
        (2, "-1", "0,1/2,0"),
        (2, "-1", "1/2,0,0"),
        (2, "2", "0,y,1/4"),
        (2, "2", "1/2,y,1/4"),
        (4, "1", "x,y,z"),
    ],
    // 14 P2_1/c
    &[
        (2, "-1", "0,0,0"),
        (2, "-1", "1/2,0,0"),
        (2, "-1", "0,0,1/2"),
        (2, "-1", "1/2,0,1/2"),
        (4, "1", "x,y,z"),
    ],
    // 15 C2/c
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,1/2,0"),
        (4, "-1", "1/4,1/4,0"),
        (4, "-1", "1/4,1/4,1/2"),
        (4, "2", "0,y,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 16 P222
    &[
        (1, "222", "0,0,0"),
        (1, "222", "1/2,0,0"),
        (1, "222", "0,1/2,0"),
        (1, "222", "0,0,1/2"),
        (1, "222", "1/2,1/2,0"),
        (1, "222", "1/2,0,1/2"),
        (1, "222", "0,1/2,1/2"),
        (1, "222", "1/2,1/2,1/2"),
        (2, "2..", "x,0,0"),
        (2, "2..", "x,0,1/2"),
        (2, "2..", "x,1/2,0"),
        (2, "2..", "x,1/2,1/2"),
        (2, ".2.", "0,y,0"),
        (2, ".2.", "0,y,1/2"),
        (2, ".2.", "1/2,y,0"),
        (2, ".2.", "1/2,y,1/2"),
        (2, "..2", "0,0,z"),
        (2, "..2", "1/2,0,z"),
        (2, "..2", "0,1/2,z"),
        (2, "..2", "1/2,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 17 P222_1
    &[
        (2, "2..", "x,0,0"),
        (2, "2..", "x,1/2,0"),
        (2, ".2.", "0,y,1/4"),
        (2, ".2.", "1/2,y,1/4"),
        (4, "1", "x,y,z"),
    ],
    // 18 P2_12_12
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 19 P2_12_12_1
    &[(4, "1", "x,y,z")],
    // 20 C222_1
    &[
        (4, "2..", "x,0,0"),
        (4, ".2.", "0,y,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 21 C222
    &[
        (2, "222", "0,0,0"),
        (2, "222", "0,1/2,0"),
        (2, "222", "1/2,0,1/2"),
        (2, "222", "0,0,1/2"),
        (4, "2..", "x,0,0"),
        (4, "2..", "x,0,1/2"),
        (4, ".2.", "0,y,0"),
        (4, ".2.", "0,y,1/2"),
        (4, "..2", "0,0,z"),
        (4, "..2", "0,1/2,z"),
        (4, "..2", "1/4,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 22 F222
    &[
        (4, "222", "0,0,0"),
        (4, "222", "0,0,1/2"),
        (4, "222", "1/4,1/4,1/4"),
        (4, "222", "1/4,1/4,3/4"),
        (8, "2..", "x,0,0"),
        (8, ".2.", "0,y,0"),
        (8, "..2", "0,0,z"),
        (8, "..2", "1/4,1/4,z"),
        (8, ".2.", "1/4,y,1/4"),
        (8, "2..", "x,1/4,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 23 I222
    &[
        (2, "222", "0,0,0"),
        (2, "222", "1/2,0,0"),
        (2, "222", "0,0,1/2"),
        (2, "222", "0,1/2,0"),
        (4, "2..", "x,0,0"),
        (4, "2..", "x,0,1/2"),
        (4, ".2.", "0,y,0"),
        (4, ".2.", "1/2,y,0"),
        (4, "..2", "0,0,z"),
        (4, "..2", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 24 I2_12_12_1
    &[
        (4, "2..", "x,0,1/4"),
        (4, ".2.", "1/4,y,0"),
        (4, "..2", "0,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 25 Pmm2
    &[
        (1, "mm2", "0,0,z"),
        (1, "mm2", "0,1/2,z"),
        (1, "mm2", "1/2,0,z"),
        (1, "mm2", "1/2,1/2,z"),
        (2, ".m.", "x,0,z"),
        (2, ".m.", "x,1/2,z"),
        (2, "m..", "0,y,z"),
        (2, "m..", "1/2,y,z"),
        (4, "1", "x,y,z"),
    ],
    // 26 Pmc2_1
    &[
        (2, "m..", "0,y,z"),
        (2, "m..", "1/2,y,z"),
        (4, "1", "x,y,z"),
    ],
    // 27 Pcc2
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "0,1/2,z"),
        (2, "..2", "1/2,0,z"),
        (2, "..2", "1/2,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 28 Pma2
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "0,1/2,z"),
        (2, "m..", "1/4,y,z"),
        (4, "1", "x,y,z"),
    ],
    // 29 Pca2_1
    &[(4, "1", "x,y,z")],
    // 30 Pnc2
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "1/2,0,z"),
        (4, "1", "x,y,z"),
    ],
    // 31 Pmn2_1
    &[
        (2, "m..", "0,y,z"),
        (4, "1", "x,y,z"),
    ],
    // 32 Pba2
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 33 Pna2_1
    &[(4, "1", "x,y,z")],
    // 34 Pnn2
    &[
        (2, "..2", "0,0,z"),
        (2, "..2", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 35 Cmm2
    &[
        (2, "mm2", "0,0,z"),
        (2, "mm2", "0,1/2,z"),
        (4, "..2", "1/4,1/4,z"),
        (4, ".m.", "x,0,z"),
        (4, "m..", "0,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 36 Cmc2_1
    &[
        (4, "m..", "0,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 37 Ccc2
    &[
        (4, "..2", "0,0,z"),
        (4, "..2", "0,1/2,z"),
        (4, "..2", "1/4,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 38 Amm2
    &[
        (2, "mm2", "0,0,z"),
        (2, "mm2", "1/2,0,z"),
        (4, ".m.", "x,0,z"),
        (4, "m..", "0,y,z"),
        (4, "m..", "1/2,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 39 Aem2
    &[
        (4, "..2", "0,0,z"),
        (4, "..2", "1/2,0,z"),
        (4, ".m.", "x,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 40 Ama2
    &[
        (4, "..2", "0,0,z"),
        (4, "m..", "1/4,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 41 Aea2
    &[
        (4, "..2", "0,0,z"),
        (8, "1", "x,y,z"),
    ],
    // 42 Fmm2
    &[
        (4, "mm2", "0,0,z"),
        (8, "..2", "1/4,1/4,z"),
        (8, ".m.", "x,0,z"),
        (8, "m..", "0,y,z"),
        (16, "1", "x,y,z"),
    ],
    // 43 Fdd2
    &[
        (8, "..2", "0,0,z"),
        (16, "1", "x,y,z"),
    ],
    // 44 Imm2
    &[
        (2, "mm2", "0,0,z"),
        (2, "mm2", "0,1/2,z"),
        (4, ".m.", "x,0,z"),
        (4, "m..", "0,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 45 Iba2
    &[
        (4, "..2", "0,0,z"),
        (4, "..2", "1/2,0,z"),
        (8, "1", "x,y,z"),
    ],
    // 46 Ima2
    &[
        (4, "..2", "0,0,z"),
        (4, "m..", "1/4,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 47 Pmmm
    &[
        (1, "mmm", "0,0,0"),
        (1, "mmm", "1/2,0,0"),
        (1, "mmm", "0,0,1/2"),
        (1, "mmm", "1/2,0,1/2"),
        (1, "mmm", "0,1/2,0"),
        (1, "mmm", "1/2,1/2,0"),
        (1, "mmm", "0,1/2,1/2"),
        (1, "mmm", "1/2,1/2,1/2"),
        (2, "2mm", "x,0,0"),
        (2, "2mm", "x,0,1/2"),
        (2, "2mm", "x,1/2,0"),
        (2, "2mm", "x,1/2,1/2"),
        (2, "m2m", "0,y,0"),
        (2, "m2m", "0,y,1/2"),
        (2, "m2m", "1/2,y,0"),
        (2, "m2m", "1/2,y,1/2"),
        (2, "mm2", "0,0,z"),
        (2, "mm2", "0,1/2,z"),
        (2, "mm2", "1/2,0,z"),
        (2, "mm2", "1/2,1/2,z"),
        (4, "..m", "x,y,0"),
        (4, "..m", "x,y,1/2"),
        (4, ".m.", "x,0,z"),
        (4, ".m.", "x,1/2,z"),
        (4, "m..", "0,y,z"),
        (4, "m..", "1/2,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 48 Pnnn
    &[
        (2, "222", "1/4,1/4,1/4"),
        (2, "222", "3/4,1/4,1/4"),
        (2, "222", "1/4,1/4,3/4"),
        (2, "222", "1/4,3/4,1/4"),
        (4, "-1", "0,0,0"),
        (4, "-1", "1/2,1/2,1/2"),
        (4, "2..", "x,1/4,1/4"),
        (4, "2..", "x,1/4,3/4"),
        (4, ".2.", "1/4,y,1/4"),
        (4, ".2.", "3/4,y,1/4"),
        (4, "..2", "1/4,1/4,z"),
        (4, "..2", "3/4,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 49 Pccm
    &[
        (2, "222", "0,0,1/4"),
        (2, "222", "1/2,1/2,1/4"),
        (2, "222", "0,1/2,1/4"),
        (2, "222", "1/2,0,1/4"),
        (2, "..2/m", "0,0,0"),
        (2, "..2/m", "1/2,0,0"),
        (2, "..2/m", "0,1/2,0"),
        (2, "..2/m", "1/2,1/2,0"),
        (4, "..2", "0,0,z"),
        (4, "..2", "1/2,1/2,z"),
        (4, "..2", "0,1/2,z"),
        (4, "..2", "1/2,0,z"),
        (4, "2..", "x,0,1/4"),
        (4, "2..", "x,1/2,1/4"),
        (4, ".2.", "0,y,1/4"),
        (4, ".2.", "1/2,y,1/4"),
        (4, "..m", "x,y,0"),
        (8, "1", "x,y,z"),
    ],
    // 50 Pban
    &[
        (2, "222", "1/4,1/4,0"),
        (2, "222", "3/4,1/4,0"),
        (2, "222", "3/4,1/4,1/2"),
        (2, "222", "1/4,1/4,1/2"),
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, "2..", "x,1/4,0"),
        (4, "2..", "x,1/4,1/2"),
        (4, ".2.", "1/4,y,0"),
        (4, ".2.", "1/4,y,1/2"),
        (4, "..2", "1/4,1/4,z"),
        (4, "..2", "1/4,3/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 51 Pmma
    &[
        (2, "2/m..", "0,0,0"),
        (2, "2/m..", "0,1/2,0"),
        (2, "2/m..", "0,0,1/2"),
        (2, "2/m..", "0,1/2,1/2"),
        (2, "mm2", "1/4,0,z"),
        (2, "mm2", "1/4,1/2,z"),
        (4, ".2.", "0,y,0"),
        (4, ".2.", "0,y,1/2"),
        (4, ".m.", "x,0,z"),
        (4, ".m.", "x,1/2,z"),
        (4, "m..", "1/4,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 52 Pnna
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, "..2", "1/4,0,z"),
        (4, "2..", "x,1/4,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 53 Pmna
    &[
        (2, "2/m..", "0,0,0"),
        (2, "2/m..", "1/2,0,0"),
        (2, "2/m..", "1/2,1/2,0"),
        (2, "2/m..", "0,1/2,0"),
        (4, "2..", "x,0,0"),
        (4, "2..", "x,1/2,0"),
        (4, ".2.", "1/4,y,1/4"),
        (4, "m..", "0,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 54 Pcca
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,1/2,0"),
        (4, ".2.", "0,y,1/4"),
        (4, "..2", "1/4,0,z"),
        (4, "..2", "1/4,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 55 Pbam
    &[
        (2, "..2/m", "0,0,0"),
        (2, "..2/m", "0,0,1/2"),
        (2, "..2/m", "0,1/2,0"),
        (2, "..2/m", "0,1/2,1/2"),
        (4, "..2", "0,0,z"),
        (4, "..2", "0,1/2,z"),
        (4, "..m", "x,y,0"),
        (4, "..m", "x,y,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 56 Pccn
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, "..2", "1/4,1/4,z"),
        (4, "..2", "1/4,3/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 57 Pbcm
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "1/2,0,0"),
        (4, "2..", "x,1/4,0"),
        (4, "..m", "x,y,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 58 Pnnm
    &[
        (2, "..2/m", "0,0,0"),
        (2, "..2/m", "0,0,1/2"),
        (2, "..2/m", "0,1/2,0"),
        (2, "..2/m", "0,1/2,1/2"),
        (4, "..2", "0,0,z"),
        (4, "..2", "0,1/2,z"),
        (4, "..m", "x,y,0"),
        (8, "1", "x,y,z"),
    ],
    // 59 Pmmn
    &[
        (2, "mm2", "1/4,1/4,z"),
        (2, "mm2", "1/4,3/4,z"),
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, ".m.", "x,1/4,z"),
        (4, "m..", "1/4,y,z"),
        (8, "1", "x,y,z"),
    ],
    // 60 Pbcn
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,1/2,0"),
        (4, ".2.", "0,y,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 61 Pbca
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 62 Pnma
    &[
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, ".m.", "x,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 63 Cmcm
    &[
        (4, "2/m..", "0,0,0"),
        (4, "2/m..", "0,1/2,0"),
        (4, "m2m", "0,y,1/4"),
        (8, "-1", "1/4,1/4,0"),
        (8, "2..", "x,0,0"),
        (8, "m..", "0,y,z"),
        (8, "..m", "x,y,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 64 Cmce
    &[
        (4, "2/m..", "0,0,0"),
        (4, "2/m..", "1/2,0,0"),
        (8, "-1", "1/4,1/4,0"),
        (8, "2..", "x,0,0"),
        (8, ".2.", "1/4,y,1/4"),
        (8, "m..", "0,y,z"),
        (16, "1", "x,y,z"),
    ],
    // 65 Cmmm
    &[
        (2, "mmm", "0,0,0"),
        (2, "mmm", "1/2,0,0"),
        (2, "mmm", "1/2,0,1/2"),
        (2, "mmm", "0,0,1/2"),
        (4, "..2/m", "1/4,1/4,0"),
        (4, "..2/m", "1/4,1/4,1/2"),
        (4, "2mm", "x,0,0"),
        (4, "2mm", "x,0,1/2"),
        (4, "m2m", "0,y,0"),
        (4, "m2m", "0,y,1/2"),
        (4, "mm2", "0,0,z"),
        (4, "mm2", "0,1/2,z"),
        (8, "..2", "1/4,1/4,z"),
        (8, "m..", "0,y,z"),
        (8, ".m.", "x,0,z"),
        (8, "..m", "x,y,0"),
        (8, "..m", "x,y,1/2"),
        (16, "1", "x,y,z"),
    ],
    // 66 Cccm
    &[
        (4, "222", "0,0,1/4"),
        (4, "222", "0,1/2,1/4"),
        (4, "..2/m", "0,0,0"),
        (4, "..2/m", "0,1/2,0"),
        (4, "..2/m", "1/4,1/4,0"),
        (4, "..2/m", "1/4,3/4,0"),
        (8, "2..", "x,0,1/4"),
        (8, ".2.", "0,y,1/4"),
        (8, "..2", "0,0,z"),
        (8, "..2", "0,1/2,z"),
        (8, "..2", "1/4,1/4,z"),
        (8, "..m", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 67 Cmme
    &[
        (4, "222", "1/4,0,0"),
        (4, "222", "1/4,0,1/2"),
        (4, "2/m..", "0,0,0"),
        (4, "2/m..", "0,0,1/2"),
        (4, ".2/m.", "1/4,1/4,0"),
        (4, ".2/m.", "1/4,1/4,1/2"),
        (4, "mm2", "0,1/4,z"),
        (8, "2..", "x,0,0"),
        (8, "2..", "x,0,1/2"),
        (8, ".2.", "1/4,y,0"),
        (8, ".2.", "1/4,y,1/2"),
        (8, "..2", "1/4,0,z"),
        (8, "m..", "0,y,z"),
        (8, ".m.", "x,1/4,z"),
        (16, "1", "x,y,z"),
    ],
    // 68 Ccce
    &[
        (4, "222", "0,1/4,1/4"),
        (4, "222", "0,1/4,3/4"),
        (8, "-1", "1/4,3/4,0"),
        (8, "-1", "0,0,0"),
        (8, "2..", "x,1/4,1/4"),
        (8, ".2.", "0,y,1/4"),
        (8, "..2", "0,1/4,z"),
        (8, "..2", "1/4,0,z"),
        (16, "1", "x,y,z"),
    ],
    // 69 Fmmm
    &[
        (4, "mmm", "0,0,0"),
        (4, "mmm", "0,0,1/2"),
        (8, "2/m..", "0,1/4,1/4"),
        (8, ".2/m.", "1/4,0,1/4"),
        (8, "..2/m", "1/4,1/4,0"),
        (8, "222", "1/4,1/4,1/4"),
        (8, "2mm", "x,0,0"),
        (8, "m2m", "0,y,0"),
        (8, "mm2", "0,0,z"),
        (16, "..2", "1/4,1/4,z"),
        (16, ".2.", "1/4,y,1/4"),
        (16, "2..", "x,1/4,1/4"),
        (16, "m..", "0,y,z"),
        (16, ".m.", "x,0,z"),
        (16, "..m", "x,y,0"),
        (32, "1", "x,y,z"),
    ],
    // 70 Fddd
    &[
        (8, "222", "1/8,1/8,1/8"),
        (8, "222", "1/8,1/8,5/8"),
        (16, "-1", "0,0,0"),
        (16, "-1", "1/2,1/2,1/2"),
        (16, "2..", "x,1/8,1/8"),
        (16, ".2.", "1/8,y,1/8"),
        (16, "..2", "1/8,1/8,z"),
        (32, "1", "x,y,z"),
    ],
    // 71 Immm
    &[
        (2, "mmm", "0,0,0"),
        (2, "mmm", "0,1/2,1/2"),
        (2, "mmm", "1/2,1/2,0"),
        (2, "mmm", "1/2,0,1/2"),
        (4, "2mm", "x,0,0"),
        (4, "2mm", "x,1/2,0"),
        (4, "m2m", "0,y,0"),
        (4, "m2m", "0,y,1/2"),
        (4, "mm2", "0,0,z"),
        (4, "mm2", "1/2,0,z"),
        (8, "-1", "1/4,1/4,1/4"),
        (8, "m..", "0,y,z"),
        (8, ".m.", "x,0,z"),
        (8, "..m", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 72 Ibam
    &[
        (4, "222", "0,0,1/4"),
        (4, "222", "1/2,0,1/4"),
        (4, "..2/m", "0,0,0"),
        (4, "..2/m", "1/2,0,0"),
        (8, "-1", "1/4,1/4,1/4"),
        (8, "2..", "x,0,1/4"),
        (8, ".2.", "0,y,1/4"),
        (8, "..2", "0,1/2,z"),
        (8, "..2", "0,0,z"),
        (8, "..m", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 73 Ibca
    &[
        (8, "-1", "0,0,0"),
        (8, "-1", "1/4,1/4,1/4"),
        (8, "2..", "x,0,1/4"),
        (8, ".2.", "1/4,y,0"),
        (8, "..2", "0,1/4,z"),
        (16, "1", "x,y,z"),
    ],
    // 74 Imma
    &[
        (4, "2/m..", "0,0,0"),
        (4, "2/m..", "0,0,1/2"),
        (4, ".2/m.", "1/4,1/4,1/4"),
        (4, ".2/m.", "1/4,1/4,3/4"),
        (4, "mm2", "0,1/4,z"),
        (8, "2..", "x,0,0"),
        (8, ".2.", "1/4,y,1/4"),
        (8, "m..", "0,y,z"),
        (8, ".m.", "x,1/4,z"),
        (16, "1", "x,y,z"),
    ],
    // 75 P4
    &[
        (1, "4..", "0,0,z"),
        (1, "4..", "1/2,1/2,z"),
        (2, "2..", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 76 P41
    &[(4, "1", "x,y,z")],
    // 77 P42
    &[
        (2, "2..", "0,0,z"),
        (2, "2..", "1/2,1/2,z"),
        (2, "2..", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 78 P43
    &[(4, "1", "x,y,z")],
    // 79 I4
    &[
        (2, "4..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 80 I41
    &[
        (4, "2..", "0,0,z"),
        (8, "1", "x,y,z"),
    ],
    // 81 P-4
    &[
        (1, "-4..", "0,0,0"),
        (1, "-4..", "0,0,1/2"),
        (1, "-4..", "1/2,1/2,0"),
        (1, "-4..", "1/2,1/2,1/2"),
        (2, "2..", "0,0,z"),
        (2, "2..", "1/2,1/2,z"),
        (2, "2..", "0,1/2,z"),
        (4, "1", "x,y,z"),
    ],
    // 82 I-4
    &[
        (2, "-4..", "0,0,0"),
        (2, "-4..", "0,0,1/2"),
        (2, "-4..", "0,1/2,1/4"),
        (2, "-4..", "0,1/2,3/4"),
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 83 P4/m
    &[
        (1, "4/m..", "0,0,0"),
        (1, "4/m..", "0,0,1/2"),
        (1, "4/m..", "1/2,1/2,0"),
        (1, "4/m..", "1/2,1/2,1/2"),
        (2, "2/m..", "0,1/2,0"),
        (2, "2/m..", "0,1/2,1/2"),
        (2, "4..", "0,0,z"),
        (2, "4..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, "m..", "x,y,0"),
        (4, "m..", "x,y,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 84 P42/m
    &[
        (2, "2/m..", "0,0,0"),
        (2, "2/m..", "1/2,1/2,0"),
        (2, "2/m..", "0,1/2,0"),
        (2, "2/m..", "0,1/2,1/2"),
        (2, "-4..", "0,0,1/4"),
        (2, "-4..", "1/2,1/2,1/4"),
        (4, "2..", "0,0,z"),
        (4, "2..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, "m..", "x,y,0"),
        (8, "1", "x,y,z"),
    ],
    // 85 P4/n
    &[
        (2, "-4..", "1/4,3/4,0"),
        (2, "-4..", "1/4,3/4,1/2"),
        (2, "4..", "1/4,1/4,z"),
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, "2..", "1/4,3/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 86 P42/n
    &[
        (2, "-4..", "1/4,1/4,1/4"),
        (2, "-4..", "1/4,1/4,3/4"),
        (4, "-1", "0,0,0"),
        (4, "-1", "0,0,1/2"),
        (4, "2..", "3/4,1/4,z"),
        (4, "2..", "1/4,1/4,z"),
        (8, "1", "x,y,z"),
    ],
    // 87 I4/m
    &[
        (2, "4/m..", "0,0,0"),
        (2, "4/m..", "0,0,1/2"),
        (4, "2/m..", "0,1/2,0"),
        (4, "-4..", "0,1/2,1/4"),
        (4, "4..", "0,0,z"),
        (8, "-1", "1/4,1/4,1/4"),
        (8, "2..", "0,1/2,z"),
        (8, "m..", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 88 I41/a
    &[
        (4, "-4..", "0,1/4,1/8"),
        (4, "-4..", "0,1/4,5/8"),
        (8, "-1", "0,0,0"),
        (8, "-1", "0,0,1/2"),
        (8, "2..", "0,1/4,z"),
        (16, "1", "x,y,z"),
    ],
    // 89 P422
    &[
        (1, "422", "0,0,0"),
        (1, "422", "0,0,1/2"),
        (1, "422", "1/2,1/2,0"),
        (1, "422", "1/2,1/2,1/2"),
        (2, "222.", "1/2,0,0"),
        (2, "222.", "1/2,0,1/2"),
        (2, "4..", "0,0,z"),
        (2, "4..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, ".2.", "x,0,0"),
        (4, ".2.", "x,1/2,1/2"),
        (4, ".2.", "x,0,1/2"),
        (4, ".2.", "x,1/2,0"),
        (4, "..2", "x,x,0"),
        (4, "..2", "x,x,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 90 P4212
    &[
        (2, "2.22", "0,0,0"),
        (2, "2.22", "0,0,1/2"),
        (2, "4..", "0,1/2,z"),
        (4, "2..", "0,0,z"),
        (4, "..2", "x,x,0"),
        (4, "..2", "x,x,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 91 P4122
    &[
        (4, ".2.", "0,y,0"),
        (4, ".2.", "1/2,y,0"),
        (4, "..2", "x,x,3/8"),
        (8, "1", "x,y,z"),
    ],
    // 92 P41212
    &[
        (4, "..2", "x,x,0"),
        (8, "1", "x,y,z"),
    ],
    // 93 P4222
    &[
        (2, "222.", "0,0,0"),
        (2, "222.", "1/2,1/2,0"),
        (2, "222.", "0,1/2,0"),
        (2, "222.", "0,1/2,1/2"),
        (2, "2.22", "0,0,1/4"),
        (2, "2.22", "1/2,1/2,1/4"),
        (4, "2..", "0,0,z"),
        (4, "2..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, ".2.", "x,0,0"),
        (4, ".2.", "x,1/2,1/2"),
        (4, ".2.", "x,0,1/2"),
        (4, ".2.", "x,1/2,0"),
        (4, "..2", "x,x,1/4"),
        (4, "..2", "x,x,3/4"),
        (8, "1", "x,y,z"),
    ],
    // 94 P42212
    &[
        (2, "2.22", "0,0,0"),
        (2, "2.22", "0,0,1/2"),
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (4, "..2", "x,x,0"),
        (4, "..2", "x,x,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 95 P4322
    &[
        (4, ".2.", "0,y,0"),
        (4, ".2.", "1/2,y,0"),
        (4, "..2", "x,x,5/8"),
        (8, "1", "x,y,z"),
    ],
    // 96 P43212
    &[
        (4, "..2", "x,x,0"),
        (8, "1", "x,y,z"),
    ],
    // 97 I422
    &[
        (2, "422", "0,0,0"),
        (2, "422", "0,0,1/2"),
        (4, "222.", "0,1/2,0"),
        (4, "2.22", "0,1/2,1/4"),
        (4, "4..", "0,0,z"),
        (8, "2..", "0,1/2,z"),
        (8, ".2.", "x,0,0"),
        (8, ".2.", "x,0,1/2"),
        (8, "..2", "x,x,0"),
        (8, "..2", "x,x+1/2,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 98 I4122
    &[
        (4, "2.22", "0,0,0"),
        (4, "2.22", "0,0,1/2"),
        (8, "2..", "0,0,z"),
        (8, "..2", "x,x,0"),
        (8, "..2", "-x,x,0"),
        (8, ".2.", "x,1/4,1/8"),
        (16, "1", "x,y,z"),
    ],
    // 99 P4mm
    &[
        (1, "4mm", "0,0,z"),
        (1, "4mm", "1/2,1/2,z"),
        (2, "2mm.", "1/2,0,z"),
        (4, "..m", "x,x,z"),
        (4, ".m.", "x,0,z"),
        (4, ".m.", "x,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 100 P4bm
    &[
        (2, "4..", "0,0,z"),
        (2, "2.mm", "1/2,0,z"),
        (4, "..m", "x,x+1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 101 P42cm
    &[
        (2, "2.mm", "0,0,z"),
        (2, "2.mm", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, "..m", "x,x,z"),
        (8, "1", "x,y,z"),
    ],
    // 102 P42nm
    &[
        (2, "2.mm", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (4, "..m", "x,x,z"),
        (8, "1", "x,y,z"),
    ],
    // 103 P4cc
    &[
        (2, "4..", "0,0,z"),
        (2, "4..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 104 P4nc
    &[
        (2, "4..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 105 P42mc
    &[
        (2, "2mm.", "0,0,z"),
        (2, "2mm.", "1/2,1/2,z"),
        (2, "2mm.", "0,1/2,z"),
        (4, ".m.", "x,0,z"),
        (4, ".m.", "x,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 106 P42bc
    &[
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 107 I4mm
    &[
        (2, "4mm", "0,0,z"),
        (4, "2mm.", "0,1/2,z"),
        (8, ".m.", "x,0,z"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 108 I4cm
    &[
        (4, "4..", "0,0,z"),
        (4, "2.mm", "1/2,0,z"),
        (8, "..m", "x,x+1/2,z"),
        (16, "1", "x,y,z"),
    ],
    // 109 I41md
    &[
        (4, "2mm.", "0,0,z"),
        (8, ".m.", "0,y,z"),
        (16, "1", "x,y,z"),
    ],
    // 110 I41cd
    &[
        (8, "2..", "0,0,z"),
        (16, "1", "x,y,z"),
    ],
    // 111 P-42m
    &[
        (1, "-42m", "0,0,0"),
        (1, "-42m", "1/2,1/2,1/2"),
        (1, "-42m", "0,0,1/2"),
        (1, "-42m", "1/2,1/2,0"),
        (2, "222.", "1/2,0,1/2"),
        (2, "222.", "1/2,0,0"),
        (2, "2.mm", "0,0,z"),
        (2, "2.mm", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, ".2.", "x,0,0"),
        (4, ".2.", "x,1/2,1/2"),
        (4, ".2.", "x,0,1/2"),
        (4, ".2.", "x,1/2,0"),
        (4, "..m", "x,x,z"),
        (8, "1", "x,y,z"),
    ],
    // 112 P-42c
    &[
        (2, "2.22", "0,0,1/4"),
        (2, "2.22", "1/2,0,1/4"),
        (2, "2.22", "1/2,1/2,1/4"),
        (2, "2.22", "0,1/2,1/4"),
        (2, "-4..", "0,0,0"),
        (2, "-4..", "1/2,1/2,0"),
        (4, "2..", "0,0,z"),
        (4, "2..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (4, ".2.", "x,0,1/4"),
        (4, ".2.", "1/2,y,1/4"),
        (4, ".2.", "x,1/2,1/4"),
        (4, ".2.", "0,y,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 113 P-421m
    &[
        (2, "-4..", "0,0,0"),
        (2, "-4..", "0,0,1/2"),
        (2, "2.mm", "0,1/2,z"),
        (4, "2..", "0,0,z"),
        (4, "..m", "x,x+1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 114 P-421c
    &[
        (2, "-4..", "0,0,0"),
        (2, "-4..", "0,0,1/2"),
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 115 P-4m2
    &[
        (1, "-4m2", "0,0,0"),
        (1, "-4m2", "1/2,1/2,0"),
        (1, "-4m2", "1/2,1/2,1/2"),
        (1, "-4m2", "0,0,1/2"),
        (2, "2mm.", "0,0,z"),
        (2, "2mm.", "1/2,1/2,z"),
        (2, "2mm.", "0,1/2,z"),
        (4, "..2", "x,x,0"),
        (4, "..2", "x,x,1/2"),
        (4, ".m.", "x,0,z"),
        (4, ".m.", "x,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 116 P-4c2
    &[
        (2, "2.22", "0,0,1/4"),
        (2, "2.22", "1/2,1/2,1/4"),
        (2, "-4..", "0,0,0"),
        (2, "-4..", "1/2,1/2,0"),
        (4, "..2", "x,x,1/4"),
        (4, "..2", "x,x,3/4"),
        (4, "2..", "0,0,z"),
        (4, "2..", "1/2,1/2,z"),
        (4, "2..", "0,1/2,z"),
        (8, "1", "x,y,z"),
    ],
    // 117 P-4b2
    &[
        (2, "-4..", "0,0,0"),
        (2, "-4..", "0,0,1/2"),
        (2, "2.22", "0,1/2,0"),
        (2, "2.22", "0,1/2,1/2"),
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (4, "..2", "x,x+1/2,0"),
        (4, "..2", "x,x+1/2,1/2"),
        (8, "1", "x,y,z"),
    ],
    // 118 P-4n2
    &[
        (2, "-4..", "0,0,0"),
        (2, "-4..", "0,0,1/2"),
        (2, "2.22", "0,1/2,1/4"),
        (2, "2.22", "0,1/2,3/4"),
        (4, "2..", "0,0,z"),
        (4, "2..", "0,1/2,z"),
        (4, "..2", "x,-x+1/2,1/4"),
        (4, "..2", "x,x+1/2,1/4"),
        (8, "1", "x,y,z"),
    ],
    // 119 I-4m2
    &[
        (2, "-4m2", "0,0,0"),
        (2, "-4m2", "0,0,1/2"),
        (2, "-4m2", "0,1/2,1/4"),
        (2, "-4m2", "0,1/2,3/4"),
        (4, "2mm.", "0,0,z"),
        (4, "2mm.", "0,1/2,z"),
        (8, "..2", "x,x,0"),
        (8, "..2", "x,x+1/2,1/4"),
        (8, ".m.", "x,0,z"),
        (16, "1", "x,y,z"),
    ],
    // 120 I-4c2
    &[
        (4, "2.22", "0,0,1/4"),
        (4, "-4..", "0,0,0"),
        (4, "2.22", "0,1/2,0"),
        (4, "-4..", "0,1/2,1/4"),
        (8, "..2", "x,x,1/4"),
        (8, "2..", "0,0,z"),
        (8, "2..", "0,1/2,z"),
        (8, "..2", "x,x+1/2,0"),
        (16, "1", "x,y,z"),
    ],
    // 121 I-42m
    &[
        (2, "-42m", "0,0,0"),
        (2, "-42m", "0,0,1/2"),
        (4, "222.", "0,1/2,0"),
        (4, "-4..", "0,1/2,1/4"),
        (4, "2.mm", "0,0,z"),
        (8, ".2.", "x,0,0"),
        (8, ".2.", "x,0,1/2"),
        (8, "2..", "0,1/2,z"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 122 I-42d
    &[
        (4, "-4..", "0,0,0"),
        (4, "-4..", "0,0,1/2"),
        (8, "2..", "0,0,z"),
        (8, ".2.", "x,1/4,1/8"),
        (16, "1", "x,y,z"),
    ],
    // 123 P4/mmm
    &[
        (1, "4/mmm", "0,0,0"),
        (1, "4/mmm", "0,0,1/2"),
        (1, "4/mmm", "1/2,1/2,0"),
        (1, "4/mmm", "1/2,1/2,1/2"),
        (2, "mmm.", "0,1/2,1/2"),
        (2, "mmm.", "0,1/2,0"),
        (2, "4mm", "0,0,z"),
        (2, "4mm", "1/2,1/2,z"),
        (4, "2mm.", "0,1/2,z"),
        (4, "m.2m", "x,x,0"),
        (4, "m.2m", "x,x,1/2"),
        (4, "m2m.", "x,0,0"),
        (4, "m2m.", "x,0,1/2"),
        (4, "m2m.", "x,1/2,0"),
        (4, "m2m.", "x,1/2,1/2"),
        (8, "m..", "x,y,0"),
        (8, "m..", "x,y,1/2"),
        (8, "..m", "x,x,z"),
        (8, ".m.", "x,0,z"),
        (8, ".m.", "x,1/2,z"),
        (16, "1", "x,y,z"),
    ],
    // 124 P4/mcc
    &[
        (2, "422", "0,0,1/4"),
        (2, "4/m..", "0,0,0"),
        (2, "422", "1/2,1/2,1/4"),
        (2, "4/m..", "1/2,1/2,0"),
        (4, "2/m..", "0,1/2,0"),
        (4, "222.", "0,1/2,1/4"),
        (4, "4..", "0,0,z"),
        (4, "4..", "1/2,1/2,z"),
        (8, "2..", "0,1/2,z"),
        (8, ".2.", "x,0,1/4"),
        (8, ".2.", "x,1/2,1/4"),
        (8, "..2", "x,x,1/4"),
        (8, "m..", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 125 P4/nbm
    &[
        (2, "422", "1/4,1/4,0"),
        (2, "422", "1/4,1/4,1/2"),
        (2, "-42m", "3/4,1/4,0"),
        (2, "-42m", "3/4,1/4,1/2"),
        (4, "..2/m", "0,0,0"),
        (4, "..2/m", "0,0,1/2"),
        (4, "4..", "1/4,1/4,z"),
        (4, "2.mm", "3/4,1/4,z"),
        (8, ".2.", "x,1/4,0"),
        (8, ".2.", "x,1/4,1/2"),
        (8, "..2", "x,x,0"),
        (8, "..2", "x,x,1/2"),
        (8, "..m", "x,-x,z"),
        (16, "1", "x,y,z"),
    ],
    // 126 P4/nnc
    &[
        (2, "422", "1/4,1/4,1/4"),
        (2, "422", "1/4,1/4,3/4"),
        (4, "2.22", "1/4,3/4,3/4"),
        (4, "-4..", "1/4,3/4,0"),
        (4, "4..", "1/4,1/4,z"),
        (8, "-1", "0,0,0"),
        (8, "2..", "1/4,3/4,z"),
        (8, ".2.", "x,1/4,1/4"),
        (8, ".2.", "x,1/4,3/4"),
        (8, "..2", "x,x,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 127 P4/mbm
    &[
        (2, "4/m..", "0,0,0"),
        (2, "4/m..", "0,0,1/2"),
        (2, "m.mm", "0,1/2,1/2"),
        (2, "m.mm", "0,1/2,0"),
        (4, "4..", "0,0,z"),
        (4, "2.mm", "0,1/2,z"),
        (4, "m.2m", "x,x+1/2,0"),
        (4, "m.2m", "x,x+1/2,1/2"),
        (8, "m..", "x,y,0"),
        (8, "m..", "x,y,1/2"),
        (8, "..m", "x,x+1/2,z"),
        (16, "1", "x,y,z"),
    ],
    // 128 P4/mnc
    &[
        (2, "4/m..", "0,0,0"),
        (2, "4/m..", "0,0,1/2"),
        (4, "2/m..", "0,1/2,0"),
        (4, "2.22", "0,1/2,1/4"),
        (4, "4..", "0,0,z"),
        (8, "2..", "0,1/2,z"),
        (8, "..2", "x,x+1/2,1/4"),
        (8, "m..", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 129 P4/nmm
    &[
        (2, "-4m2", "3/4,1/4,0"),
        (2, "-4m2", "3/4,1/4,1/2"),
        (2, "4mm", "1/4,1/4,z"),
        (4, "..2/m", "0,0,0"),
        (4, "..2/m", "0,0,1/2"),
        (4, "2mm.", "3/4,1/4,z"),
        (8, "..2", "x,-x,0"),
        (8, "..2", "x,-x,1/2"),
        (8, ".m.", "1/4,y,z"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 130 P4/ncc
    &[
        (4, "2.22", "3/4,1/4,1/4"),
        (4, "-4..", "3/4,1/4,0"),
        (4, "4..", "1/4,1/4,z"),
        (8, "-1", "0,0,0"),
        (8, "2..", "3/4,1/4,z"),
        (8, "..2", "x,-x,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 131 P42/mmc
    &[
        (2, "mmm.", "0,0,0"),
        (2, "mmm.", "1/2,1/2,0"),
        (2, "mmm.", "0,1/2,1/2"),
        (2, "mmm.", "0,1/2,0"),
        (2, "-4m2", "0,0,1/4"),
        (2, "-4m2", "1/2,1/2,1/4"),
        (4, "2mm.", "0,0,z"),
        (4, "2mm.", "1/2,1/2,z"),
        (4, "2mm.", "0,1/2,z"),
        (4, "m2m.", "x,0,0"),
        (4, "m2m.", "x,1/2,1/2"),
        (4, "m2m.", "x,0,1/2"),
        (4, "m2m.", "x,1/2,0"),
        (8, "..2", "x,x,1/4"),
        (8, ".m.", "0,y,z"),
        (8, ".m.", "1/2,y,z"),
        (8, "m..", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 132 P42/mcm
    &[
        (2, "m.mm", "0,0,0"),
        (2, "-42m", "0,0,1/4"),
        (2, "m.mm", "1/2,1/2,0"),
        (2, "-42m", "1/2,1/2,1/4"),
        (4, "2/m..", "0,1/2,0"),
        (4, "222.", "0,1/2,1/4"),
        (4, "2.mm", "0,0,z"),
        (4, "2.mm", "1/2,1/2,z"),
        (4, "m.2m", "x,x,0"),
        (4, "m.2m", "x,x,1/2"),
        (8, "2..", "0,1/2,z"),
        (8, ".2.", "x,0,1/4"),
        (8, ".2.", "x,1/2,1/4"),
        (8, "m..", "x,y,0"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 133 P42/nbc
    &[
        (4, "2.22", "1/4,1/4,0"),
        (4, "222.", "1/4,3/4,0"),
        (4, "2.22", "1/4,1/4,1/4"),
        (4, "-4..", "1/4,3/4,1/4"),
        (8, "-1", "0,0,0"),
        (8, "2..", "1/4,1/4,z"),
        (8, "2..", "1/4,3/4,z"),
        (8, ".2.", "x,1/4,0"),
        (8, ".2.", "x,1/4,1/2"),
        (8, "..2", "x,x,1/4"),
        (16, "1", "x,y,z"),
    ],
    // 134 P42/nnm
    &[
        (2, "-42m", "3/4,1/4,3/4"),
        (2, "-42m", "3/4,1/4,1/4"),
        (4, "222.", "1/4,1/4,1/4"),
        (4, "2.22", "1/4,1/4,0"),
        (4, "..2/m", "0,0,1/2"),
        (4, "..2/m", "0,0,0"),
        (4, "2.mm", "3/4,1/4,z"),
        (8, "2..", "1/4,1/4,z"),
        (8, ".2.", "x,1/4,3/4"),
        (8, ".2.", "x,1/4,1/4"),
        (8, "..2", "x,x,1/2"),
        (8, "..2", "x,x,0"),
        (8, "..m", "x,-x,z"),
        (16, "1", "x,y,z"),
    ],
    // 135 P42/mbc
    &[
        (4, "2/m..", "0,0,0"),
        (4, "-4..", "0,0,1/4"),
        (4, "2/m..", "0,1/2,0"),
        (4, "2.22", "0,1/2,1/4"),
        (8, "2..", "0,0,z"),
        (8, "2..", "0,1/2,z"),
        (8, "..2", "x,x+1/2,1/4"),
        (8, "m..", "x,y,0"),
        (16, "1", "x,y,z"),
    ],
    // 136 P42/mnm
    &[
        (2, "m.mm", "0,0,0"),
        (2, "m.mm", "0,0,1/2"),
        (4, "2/m..", "0,1/2,0"),
        (4, "-4..", "0,1/2,1/4"),
        (4, "2.mm", "0,0,z"),
        (4, "m.2m", "x,x,0"),
        (4, "m.2m", "x,-x,0"),
        (8, "2..", "0,1/2,z"),
        (8, "m..", "x,y,0"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 137 P42/nmc
    &[
        (2, "-4m2", "3/4,1/4,3/4"),
        (2, "-4m2", "3/4,1/4,1/4"),
        (4, "2mm.", "1/4,1/4,z"),
        (4, "2mm.", "3/4,1/4,z"),
        (8, "-1", "0,0,0"),
        (8, "..2", "x,-x,1/4"),
        (8, ".m.", "1/4,y,z"),
        (16, "1", "x,y,z"),
    ],
    // 138 P42/ncm
    &[
        (4, "222.", "3/4,1/4,0"),
        (4, "-4..", "3/4,1/4,1/4"),
        (4, "..2/m", "0,0,1/2"),
        (4, "..2/m", "0,0,0"),
        (4, "2.mm", "1/4,1/4,z"),
        (8, "2..", "3/4,1/4,z"),
        (8, "..2", "x,x+1/2,0"),
        (8, "..2", "x,x+1/2,1/2"),
        (8, "..m", "x,x,z"),
        (16, "1", "x,y,z"),
    ],
    // 139 I4/mmm
    &[
        (2, "4/mmm", "0,0,0"),
        (2, "4/mmm", "0,0,1/2"),
        (4, "mmm.", "0,1/2,0"),
        (4, "-4m2", "0,1/2,1/4"),
        (4, "4mm", "0,0,z"),
        (8, "..2/m", "1/4,1/4,1/4"),
        (8, "m.2m", "x,x,0"),
        (8, "m2m.", "x,0,0"),
        (8, "m2m.", "x,0,1/2"),
        (8, "2mm.", "0,1/2,z"),
        (16, "..2", "x,x+1/2,1/4"),
        (16, "m..", "x,y,0"),
        (16, ".m.", "x,0,z"),
        (16, "..m", "x,x,z"),
        (32, "1", "x,y,z"),
    ],
    // 140 I4/mcm
    &[
        (4, "422", "0,0,1/4"),
        (4, "4/m..", "0,0,0"),
        (4, "-42m", "0,1/2,1/4"),
        (4, "m.mm", "0,1/2,0"),
        (8, "..2/m", "1/4,1/4,1/4"),
        (8, "4..", "0,0,z"),
        (8, "2.mm", "0,1/2,z"),
        (8, "m.2m", "x,x+1/2,0"),
        (16, ".2.", "x,0,1/4"),
        (16, "..2", "x,x,1/4"),
        (16, "m..", "x,y,0"),
        (16, "..m", "x,x+1/2,z"),
        (32, "1", "x,y,z"),
    ],
    // 141 I41/amd
    &[
        (4, "-4m2", "0,3/4,1/8"),
        (4, "-4m2", "0,1/4,3/8"),
        (8, ".2/m.", "0,0,0"),
        (8, ".2/m.", "0,0,1/2"),
        (8, "2mm.", "0,1/4,z"),
        (16, ".2.", "x,0,0"),
        (16, "..2", "-x,x+1/4,7/8"),
        (16, ".m.", "0,y,z"),
        (32, "1", "x,y,z"),
    ],
    // 142 I41/acd
    &[
        (8, "2.22", "0,1/4,1/8"),
        (8, "-4..", "0,1/4,3/8"),
        (16, "-1", "0,0,0"),
        (16, "2..", "0,1/4,z"),
        (16, ".2.", "x,0,1/4"),
        (16, "..2", "x,x+1/4,1/8"),
        (32, "1", "x,y,z"),
    ],
    // 143 P3
    &[
        (1, "3..", "0,0,z"),
        (1, "3..", "1/3,2/3,z"),
        (1, "3..", "2/3,1/3,z"),
        (3, "1", "x,y,z"),
    ],
    // 144 P31
    &[(3, "1", "x,y,z")],
    // 145 P32
    &[(3, "1", "x,y,z")],
    // 146 R3
    &[
        (3, "3.", "0,0,z"),
        (9, "1", "x,y,z"),
    ],
    // 147 P-3
    &[
        (1, "-3..", "0,0,0"),
        (1, "-3..", "0,0,1/2"),
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (3, "-1", "1/2,0,0"),
        (3, "-1", "1/2,0,1/2"),
        (6, "1", "x,y,z"),
    ],
    // 148 R-3
    &[
        (3, "-3.", "0,0,0"),
        (3, "-3.", "0,0,1/2"),
        (6, "3.", "0,0,z"),
        (9, "-1", "1/2,0,1/2"),
        (9, "-1", "1/2,0,0"),
        (18, "1", "x,y,z"),
    ],
    // 149 P312
    &[
        (1, "3.2", "0,0,0"),
        (1, "3.2", "0,0,1/2"),
        (1, "3.2", "1/3,2/3,0"),
        (1, "3.2", "1/3,2/3,1/2"),
        (1, "3.2", "2/3,1/3,0"),
        (1, "3.2", "2/3,1/3,1/2"),
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (2, "3..", "2/3,1/3,z"),
        (3, "..2", "x,-x,0"),
        (3, "..2", "x,-x,1/2"),
        (6, "1", "x,y,z"),
    ],
    // 150 P321
    &[
        (1, "32.", "0,0,0"),
        (1, "32.", "0,0,1/2"),
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (3, ".2.", "x,0,0"),
        (3, ".2.", "x,0,1/2"),
        (6, "1", "x,y,z"),
    ],
    // 151 P3112
    &[
        (3, "..2", "x,-x,1/3"),
        (3, "..2", "x,-x,5/6"),
        (6, "1", "x,y,z"),
    ],
    // 152 P3121
    &[
        (3, ".2.", "x,0,1/3"),
        (3, ".2.", "x,0,5/6"),
        (6, "1", "x,y,z"),
    ],
    // 153 P3212
    &[
        (3, "..2", "x,-x,2/3"),
        (3, "..2", "x,-x,1/6"),
        (6, "1", "x,y,z"),
    ],
    // 154 P3221
    &[
        (3, ".2.", "x,0,2/3"),
        (3, ".2.", "x,0,1/6"),
        (6, "1", "x,y,z"),
    ],
    // 155 R32
    &[
        (3, "32", "0,0,0"),
        (3, "32", "0,0,1/2"),
        (6, "3.", "0,0,z"),
        (9, ".2", "x,0,0"),
        (9, ".2", "x,0,1/2"),
        (18, "1", "x,y,z"),
    ],
    // 156 P3m1
    &[
        (1, "3m.", "0,0,z"),
        (1, "3m.", "1/3,2/3,z"),
        (1, "3m.", "2/3,1/3,z"),
        (3, ".m.", "x,-x,z"),
        (6, "1", "x,y,z"),
    ],
    // 157 P31m
    &[
        (1, "3.m", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (3, "..m", "x,0,z"),
        (6, "1", "x,y,z"),
    ],
    // 158 P3c1
    &[
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (2, "3..", "2/3,1/3,z"),
        (6, "1", "x,y,z"),
    ],
    // 159 P31c
    &[
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (6, "1", "x,y,z"),
    ],
    // 160 R3m
    &[
        (3, "3m", "0,0,z"),
        (9, ".m", "x,-x,z"),
        (18, "1", "x,y,z"),
    ],
    // 161 R3c
    &[
        (6, "3.", "0,0,z"),
        (18, "1", "x,y,z"),
    ],
    // 162 P-31m
    &[
        (1, "-3.m", "0,0,0"),
        (1, "-3.m", "0,0,1/2"),
        (2, "3.2", "1/3,2/3,0"),
        (2, "3.2", "1/3,2/3,1/2"),
        (2, "3.m", "0,0,z"),
        (3, "..2/m", "1/2,0,0"),
        (3, "..2/m", "1/2,0,1/2"),
        (4, "3..", "1/3,2/3,z"),
        (6, "..2", "x,2x,0"),
        (6, "..2", "x,2x,1/2"),
        (6, "..m", "x,0,z"),
        (12, "1", "x,y,z"),
    ],
    // 163 P-31c
    &[
        (2, "3.2", "0,0,1/4"),
        (2, "-3..", "0,0,0"),
        (2, "3.2", "1/3,2/3,1/4"),
        (2, "3.2", "2/3,1/3,1/4"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, "-1", "1/2,0,0"),
        (6, "..2", "x,2x,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 164 P-3m1
    &[
        (1, "-3m.", "0,0,0"),
        (1, "-3m.", "0,0,1/2"),
        (2, "3m.", "0,0,z"),
        (2, "3m.", "1/3,2/3,z"),
        (3, ".2/m.", "1/2,0,0"),
        (3, ".2/m.", "1/2,0,1/2"),
        (6, ".2.", "x,0,0"),
        (6, ".2.", "x,0,1/2"),
        (6, ".m.", "x,-x,z"),
        (12, "1", "x,y,z"),
    ],
    // 165 P-3c1
    &[
        (2, "32.", "0,0,1/4"),
        (2, "-3..", "0,0,0"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, "-1", "1/2,0,0"),
        (6, ".2.", "x,0,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 166 R-3m
    &[
        (3, "-3m", "0,0,0"),
        (3, "-3m", "0,0,1/2"),
        (6, "3m", "0,0,z"),
        (9, ".2/m", "1/2,0,1/2"),
        (9, ".2/m", "1/2,0,0"),
        (18, ".2", "x,0,0"),
        (18, ".2", "x,0,1/2"),
        (18, ".m", "x,-x,z"),
        (36, "1", "x,y,z"),
    ],
    // 167 R-3c
    &[
        (6, "32", "0,0,1/4"),
        (6, "-3.", "0,0,0"),
        (12, "3.", "0,0,z"),
        (18, "-1", "1/2,0,0"),
        (18, ".2", "x,0,1/4"),
        (36, "1", "x,y,z"),
    ],
    // 168 P6
    &[
        (1, "6..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (3, "2..", "1/2,0,z"),
        (6, "1", "x,y,z"),
    ],
    // 169 P61
    &[(6, "1", "x,y,z")],
    // 170 P65
    &[(6, "1", "x,y,z")],
    // 171 P62
    &[
        (3, "2..", "0,0,z"),
        (3, "2..", "1/2,1/2,z"),
        (6, "1", "x,y,z"),
    ],
    // 172 P64
    &[
        (3, "2..", "0,0,z"),
        (3, "2..", "1/2,1/2,z"),
        (6, "1", "x,y,z"),
    ],
    // 173 P63
    &[
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (6, "1", "x,y,z"),
    ],
    // 174 P-6
    &[
        (1, "-6..", "0,0,0"),
        (1, "-6..", "0,0,1/2"),
        (1, "-6..", "1/3,2/3,0"),
        (1, "-6..", "1/3,2/3,1/2"),
        (1, "-6..", "2/3,1/3,0"),
        (1, "-6..", "2/3,1/3,1/2"),
        (2, "3..", "0,0,z"),
        (2, "3..", "1/3,2/3,z"),
        (2, "3..", "2/3,1/3,z"),
        (3, "m..", "x,y,0"),
        (3, "m..", "x,y,1/2"),
        (6, "1", "x,y,z"),
    ],
    // 175 P6/m
    &[
        (1, "6/m..", "0,0,0"),
        (1, "6/m..", "0,0,1/2"),
        (2, "-6..", "1/3,2/3,0"),
        (2, "-6..", "1/3,2/3,1/2"),
        (2, "6..", "0,0,z"),
        (3, "2/m..", "1/2,0,0"),
        (3, "2/m..", "1/2,0,1/2"),
        (4, "3..", "1/3,2/3,z"),
        (6, "2..", "1/2,0,z"),
        (6, "m..", "x,y,0"),
        (6, "m..", "x,y,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 176 P63/m
    &[
        (2, "-3..", "0,0,0"),
        (2, "-6..", "0,0,1/4"),
        (2, "-6..", "1/3,2/3,1/4"),
        (2, "-6..", "2/3,1/3,1/4"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, "-1", "1/2,0,0"),
        (6, "m..", "x,y,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 177 P622
    &[
        (1, "622", "0,0,0"),
        (1, "622", "0,0,1/2"),
        (2, "3.2", "1/3,2/3,0"),
        (2, "3.2", "1/3,2/3,1/2"),
        (2, "6..", "0,0,z"),
        (3, "222", "1/2,0,0"),
        (3, "222", "1/2,0,1/2"),
        (4, "3..", "1/3,2/3,z"),
        (6, "2..", "1/2,0,z"),
        (6, ".2.", "x,0,0"),
        (6, ".2.", "x,0,1/2"),
        (6, "..2", "x,2x,0"),
        (6, "..2", "x,2x,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 178 P6122
    &[
        (6, ".2.", "x,0,0"),
        (6, "..2", "x,2x,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 179 P6522
    &[
        (6, ".2.", "x,0,0"),
        (6, "..2", "x,2x,3/4"),
        (12, "1", "x,y,z"),
    ],
    // 180 P6222
    &[
        (3, "222", "0,0,0"),
        (3, "222", "0,0,1/2"),
        (3, "222", "1/2,0,0"),
        (3, "222", "1/2,0,1/2"),
        (6, "2..", "0,0,z"),
        (6, "2..", "1/2,0,z"),
        (6, ".2.", "x,0,0"),
        (6, ".2.", "x,0,1/2"),
        (6, "..2", "x,2x,0"),
        (6, "..2", "x,2x,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 181 P6422
    &[
        (3, "222", "0,0,0"),
        (3, "222", "0,0,1/2"),
        (3, "222", "1/2,0,0"),
        (3, "222", "1/2,0,1/2"),
        (6, "2..", "0,0,z"),
        (6, "2..", "1/2,0,z"),
        (6, ".2.", "x,0,0"),
        (6, ".2.", "x,0,1/2"),
        (6, "..2", "x,2x,0"),
        (6, "..2", "x,2x,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 182 P6322
    &[
        (2, "32.", "0,0,0"),
        (2, "3.2", "0,0,1/4"),
        (2, "3.2", "1/3,2/3,1/4"),
        (2, "3.2", "1/3,2/3,3/4"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, ".2.", "x,0,0"),
        (6, "..2", "x,2x,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 183 P6mm
    &[
        (1, "6mm", "0,0,z"),
        (2, "3m.", "1/3,2/3,z"),
        (3, "2mm", "1/2,0,z"),
        (6, ".m.", "x,-x,z"),
        (6, "..m", "x,0,z"),
        (12, "1", "x,y,z"),
    ],
    // 184 P6cc
    &[
        (2, "6..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, "2..", "1/2,0,z"),
        (12, "1", "x,y,z"),
    ],
    // 185 P63cm
    &[
        (2, "3.m", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, "..m", "x,0,z"),
        (12, "1", "x,y,z"),
    ],
    // 186 P63mc
    &[
        (2, "3m.", "0,0,z"),
        (2, "3m.", "1/3,2/3,z"),
        (6, ".m.", "x,-x,z"),
        (12, "1", "x,y,z"),
    ],
    // 187 P-6m2
    &[
        (1, "-6m2", "0,0,0"),
        (1, "-6m2", "0,0,1/2"),
        (1, "-6m2", "1/3,2/3,0"),
        (1, "-6m2", "1/3,2/3,1/2"),
        (1, "-6m2", "2/3,1/3,0"),
        (1, "-6m2", "2/3,1/3,1/2"),
        (2, "3m.", "0,0,z"),
        (2, "3m.", "1/3,2/3,z"),
        (2, "3m.", "2/3,1/3,z"),
        (3, "mm2", "x,-x,0"),
        (3, "mm2", "x,-x,1/2"),
        (6, "m..", "x,y,0"),
        (6, "m..", "x,y,1/2"),
        (6, ".m.", "x,-x,z"),
        (12, "1", "x,y,z"),
    ],
    // 188 P-6c2
    &[
        (2, "32.", "0,0,0"),
        (2, "-6..", "0,0,1/4"),
        (2, "32.", "1/3,2/3,0"),
        (2, "-6..", "1/3,2/3,1/4"),
        (2, "32.", "2/3,1/3,0"),
        (2, "-6..", "2/3,1/3,1/4"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (4, "3..", "2/3,1/3,z"),
        (6, ".2.", "x,-x,0"),
        (6, "m..", "x,y,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 189 P-62m
    &[
        (1, "-62m", "0,0,0"),
        (1, "-62m", "0,0,1/2"),
        (2, "-6..", "1/3,2/3,0"),
        (2, "-6..", "1/3,2/3,1/2"),
        (2, "3.m", "0,0,z"),
        (3, "m2m", "x,0,0"),
        (3, "m2m", "x,0,1/2"),
        (4, "3..", "1/3,2/3,z"),
        (6, "..m", "x,0,z"),
        (6, "m..", "x,y,0"),
        (6, "m..", "x,y,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 190 P-62c
    &[
        (2, "32.", "0,0,0"),
        (2, "-6..", "0,0,1/4"),
        (2, "-6..", "1/3,2/3,1/4"),
        (2, "-6..", "1/3,2/3,3/4"),
        (4, "3..", "0,0,z"),
        (4, "3..", "1/3,2/3,z"),
        (6, ".2.", "x,0,0"),
        (6, "m..", "x,y,1/4"),
        (12, "1", "x,y,z"),
    ],
    // 191 P6/mmm
    &[
        (1, "6/mmm", "0,0,0"),
        (1, "6/mmm", "0,0,1/2"),
        (2, "-6m2", "1/3,2/3,0"),
        (2, "-6m2", "1/3,2/3,1/2"),
        (2, "6mm", "0,0,z"),
        (3, "mmm", "1/2,0,0"),
        (3, "mmm", "1/2,0,1/2"),
        (4, "3m.", "1/3,2/3,z"),
        (6, "2mm", "1/2,0,z"),
        (6, "m2m", "x,0,0"),
        (6, "m2m", "x,0,1/2"),
        (6, "mm2", "x,2x,0"),
        (6, "mm2", "x,2x,1/2"),
        (12, "..m", "x,0,z"),
        (12, ".m.", "x,2x,z"),
        (12, "m..", "x,y,0"),
        (12, "m..", "x,y,1/2"),
        (24, "1", "x,y,z"),
    ],
    // 192 P6/mcc
    &[
        (2, "622", "0,0,1/4"),
        (2, "6/m..", "0,0,0"),
        (4, "3.2", "1/3,2/3,1/4"),
        (4, "-6..", "1/3,2/3,0"),
        (4, "6..", "0,0,z"),
        (6, "222", "1/2,0,1/4"),
        (6, "2/m..", "1/2,0,0"),
        (8, "3..", "1/3,2/3,z"),
        (12, "..2", "x,2x,1/4"),
        (12, ".2.", "x,0,1/4"),
        (12, "2..", "1/2,0,z"),
        (12, "m..", "x,y,0"),
        (24, "1", "x,y,z"),
    ],
    // 193 P63/mcm
    &[
        (2, "-62m", "0,0,1/4"),
        (2, "-3.m", "0,0,0"),
        (4, "-6..", "1/3,2/3,1/4"),
        (4, "3.2", "1/3,2/3,0"),
        (4, "3.m", "0,0,z"),
        (6, "..2/m", "1/2,0,0"),
        (6, "m2m", "x,0,1/4"),
        (8, "3..", "1/3,2/3,z"),
        (12, "..2", "x,2x,0"),
        (12, "m..", "x,y,1/4"),
        (12, "..m", "x,0,z"),
        (24, "1", "x,y,z"),
    ],
    // 194 P63/mmc
    &[
        (2, "-3m.", "0,0,0"),
        (2, "-6m2", "0,0,1/4"),
        (2, "-6m2", "1/3,2/3,1/4"),
        (2, "-6m2", "1/3,2/3,3/4"),
        (4, "3m.", "0,0,z"),
        (4, "3m.", "1/3,2/3,z"),
        (6, ".2/m.", "1/2,0,0"),
        (6, "mm2", "x,2x,1/4"),
        (12, ".2.", "x,0,0"),
        (12, "m..", "x,y,1/4"),
        (12, ".m.", "x,2x,z"),
        (24, "1", "x,y,z"),
    ],
    // 195 P23
    &[
        (1, "23.", "0,0,0"),
        (1, "23.", "1/2,1/2,1/2"),
        (3, "222..", "0,1/2,1/2"),
        (3, "222..", "1/2,0,0"),
        (4, ".3.", "x,x,x"),
        (6, "2..", "x,0,0"),
        (6, "2..", "x,0,1/2"),
        (6, "2..", "x,1/2,0"),
        (6, "2..", "x,1/2,1/2"),
        (12, "1", "x,y,z"),
    ],
    // 196 F23
    &[
        (4, "23.", "0,0,0"),
        (4, "23.", "1/2,1/2,1/2"),
        (4, "23.", "1/4,1/4,1/4"),
        (4, "23.", "3/4,3/4,3/4"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,0,0"),
        (24, "2..", "x,1/4,1/4"),
        (48, "1", "x,y,z"),
    ],
    // 197 I23
    &[
        (2, "23.", "0,0,0"),
        (6, "222..", "0,1/2,1/2"),
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,0,0"),
        (12, "2..", "x,1/2,0"),
        (24, "1", "x,y,z"),
    ],
    // 198 P213
    &[
        (4, ".3.", "x,x,x"),
        (12, "1", "x,y,z"),
    ],
    // 199 I213
    &[
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,0,1/4"),
        (24, "1", "x,y,z"),
    ],
    // 200 Pm-3
    &[
        (1, "m-3.", "0,0,0"),
        (1, "m-3.", "1/2,1/2,1/2"),
        (3, "mmm..", "0,1/2,1/2"),
        (3, "mmm..", "1/2,0,0"),
        (6, "mm2..", "x,0,0"),
        (6, "mm2..", "x,0,1/2"),
        (6, "mm2..", "x,1/2,0"),
        (6, "mm2..", "x,1/2,1/2"),
        (8, ".3.", "x,x,x"),
        (12, "m..", "0,y,z"),
        (12, "m..", "1/2,y,z"),
        (24, "1", "x,y,z"),
    ],
    // 201 Pn-3
    &[
        (2, "23.", "1/4,1/4,1/4"),
        (4, ".-3.", "0,0,0"),
        (4, ".-3.", "1/2,1/2,1/2"),
        (6, "222..", "1/4,3/4,3/4"),
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,1/4,1/4"),
        (12, "2..", "x,3/4,1/4"),
        (24, "1", "x,y,z"),
    ],
    // 202 Fm-3
    &[
        (4, "m-3.", "0,0,0"),
        (4, "m-3.", "1/2,1/2,1/2"),
        (8, "23.", "1/4,1/4,1/4"),
        (24, "2/m..", "0,1/4,1/4"),
        (24, "mm2..", "x,0,0"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,1/4,1/4"),
        (48, "m..", "0,y,z"),
        (96, "1", "x,y,z"),
    ],
    // 203 Fd-3
    &[
        (8, "23.", "1/8,1/8,1/8"),
        (8, "23.", "5/8,5/8,5/8"),
        (16, ".-3.", "0,0,0"),
        (16, ".-3.", "1/2,1/2,1/2"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,1/8,1/8"),
        (96, "1", "x,y,z"),
    ],
    // 204 Im-3
    &[
        (2, "m-3.", "0,0,0"),
        (6, "mmm..", "0,1/2,1/2"),
        (8, ".-3.", "1/4,1/4,1/4"),
        (12, "mm2..", "x,0,0"),
        (12, "mm2..", "x,0,1/2"),
        (16, ".3.", "x,x,x"),
        (24, "m..", "0,y,z"),
        (48, "1", "x,y,z"),
    ],
    // 205 Pa-3
    &[
        (4, ".-3.", "0,0,0"),
        (4, ".-3.", "1/2,1/2,1/2"),
        (8, ".3.", "x,x,x"),
        (24, "1", "x,y,z"),
    ],
    // 206 Ia-3
    &[
        (8, ".-3.", "0,0,0"),
        (8, ".-3.", "1/4,1/4,1/4"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,0,1/4"),
        (48, "1", "x,y,z"),
    ],
    // 207 P432
    &[
        (1, "432", "0,0,0"),
        (1, "432", "1/2,1/2,1/2"),
        (3, "42.2", "0,1/2,1/2"),
        (3, "42.2", "1/2,0,0"),
        (6, "4..", "x,0,0"),
        (6, "4..", "x,1/2,1/2"),
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,1/2,0"),
        (12, "..2", "0,y,y"),
        (12, "..2", "1/2,y,y"),
        (24, "1", "x,y,z"),
    ],
    // 208 P4232
    &[
        (2, "23.", "0,0,0"),
        (4, ".32", "1/4,1/4,1/4"),
        (4, ".32", "3/4,3/4,3/4"),
        (6, "222..", "0,1/2,1/2"),
        (6, "2.22", "1/4,0,1/2"),
        (6, "2.22", "1/4,1/2,0"),
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,0,0"),
        (12, "2..", "x,0,1/2"),
        (12, "2..", "x,1/2,0"),
        (12, "..2", "1/4,y,-y+1/2"),
        (12, "..2", "1/4,y,y+1/2"),
        (24, "1", "x,y,z"),
    ],
    // 209 F432
    &[
        (4, "432", "0,0,0"),
        (4, "432", "1/2,1/2,1/2"),
        (8, "23.", "1/4,1/4,1/4"),
        (24, "2.22", "0,1/4,1/4"),
        (24, "4..", "x,0,0"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,1/4,1/4"),
        (48, "..2", "0,y,y"),
        (48, "..2", "1/2,y,y"),
        (96, "1", "x,y,z"),
    ],
    // 210 F4132
    &[
        (8, "23.", "0,0,0"),
        (8, "23.", "1/2,1/2,1/2"),
        (16, ".32", "1/8,1/8,1/8"),
        (16, ".32", "5/8,5/8,5/8"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,0,0"),
        (48, "..2", "1/8,y,-y+1/4"),
        (96, "1", "x,y,z"),
    ],
    // 211 I432
    &[
        (2, "432", "0,0,0"),
        (6, "42.2", "0,1/2,1/2"),
        (8, ".32", "1/4,1/4,1/4"),
        (12, "2.22", "1/4,1/2,0"),
        (12, "4..", "x,0,0"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,1/2,0"),
        (24, "..2", "0,y,y"),
        (24, "..2", "1/4,y,-y+1/2"),
        (48, "1", "x,y,z"),
    ],
    // 212 P4332
    &[
        (4, ".32", "1/8,1/8,1/8"),
        (4, ".32", "5/8,5/8,5/8"),
        (8, ".3.", "x,x,x"),
        (12, "..2", "1/8,y,-y+1/4"),
        (24, "1", "x,y,z"),
    ],
    // 213 P4132
    &[
        (4, ".32", "3/8,3/8,3/8"),
        (4, ".32", "7/8,7/8,7/8"),
        (8, ".3.", "x,x,x"),
        (12, "..2", "1/8,y,y+1/4"),
        (24, "1", "x,y,z"),
    ],
    // 214 I4132
    &[
        (8, ".32", "1/8,1/8,1/8"),
        (8, ".32", "7/8,7/8,7/8"),
        (12, "2.22", "1/8,0,1/4"),
        (12, "2.22", "5/8,0,1/4"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,0,1/4"),
        (24, "..2", "1/8,y,-y+1/4"),
        (24, "..2", "5/8,y,y+1/4"),
        (48, "1", "x,y,z"),
    ],
    // 215 P-43m
    &[
        (1, "-43m", "0,0,0"),
        (1, "-43m", "1/2,1/2,1/2"),
        (3, "-42.m", "0,1/2,1/2"),
        (3, "-42.m", "1/2,0,0"),
        (4, ".3m", "x,x,x"),
        (6, "2.mm", "x,0,0"),
        (6, "2.mm", "x,1/2,1/2"),
        (12, "2..", "x,1/2,0"),
        (12, "..m", "x,x,z"),
        (24, "1", "x,y,z"),
    ],
    // 216 F-43m
    &[
        (4, "-43m", "0,0,0"),
        (4, "-43m", "1/2,1/2,1/2"),
        (4, "-43m", "1/4,1/4,1/4"),
        (4, "-43m", "3/4,3/4,3/4"),
        (16, ".3m", "x,x,x"),
        (24, "2.mm", "x,0,0"),
        (24, "2.mm", "x,1/4,1/4"),
        (48, "..m", "x,x,z"),
        (96, "1", "x,y,z"),
    ],
    // 217 I-43m
    &[
        (2, "-43m", "0,0,0"),
        (6, "-42.m", "0,1/2,1/2"),
        (8, ".3m", "x,x,x"),
        (12, "-4..", "1/4,1/2,0"),
        (12, "2.mm", "x,0,0"),
        (24, "2..", "x,1/2,0"),
        (24, "..m", "x,x,z"),
        (48, "1", "x,y,z"),
    ],
    // 218 P-43n
    &[
        (2, "23.", "0,0,0"),
        (6, "222..", "0,1/2,1/2"),
        (6, "-4..", "1/4,1/2,0"),
        (6, "-4..", "1/4,0,1/2"),
        (8, ".3.", "x,x,x"),
        (12, "2..", "x,0,0"),
        (12, "2..", "x,1/2,0"),
        (12, "2..", "x,0,1/2"),
        (24, "1", "x,y,z"),
    ],
    // 219 F-43c
    &[
        (8, "23.", "0,0,0"),
        (8, "23.", "1/4,1/4,1/4"),
        (24, "-4..", "1/4,0,0"),
        (24, "-4..", "0,1/4,1/4"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,0,0"),
        (48, "2..", "x,1/4,1/4"),
        (96, "1", "x,y,z"),
    ],
    // 220 I-43d
    &[
        (12, "-4..", "3/8,0,1/4"),
        (12, "-4..", "7/8,0,1/4"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,0,1/4"),
        (48, "1", "x,y,z"),
    ],
    // 221 Pm-3m
    &[
        (1, "m-3m", "0,0,0"),
        (1, "m-3m", "1/2,1/2,1/2"),
        (3, "4/mm.m", "0,1/2,1/2"),
        (3, "4/mm.m", "1/2,0,0"),
        (6, "4m.m", "x,0,0"),
        (6, "4m.m", "x,1/2,1/2"),
        (8, ".3m", "x,x,x"),
        (12, "mm2..", "x,1/2,0"),
        (12, "m.m2", "0,y,y"),
        (12, "m.m2", "1/2,y,y"),
        (24, "m..", "0,y,z"),
        (24, "m..", "1/2,y,z"),
        (24, "..m", "x,x,z"),
        (48, "1", "x,y,z"),
    ],
    // 222 Pn-3n
    &[
        (2, "432", "1/4,1/4,1/4"),
        (6, "42.2", "3/4,1/4,1/4"),
        (8, ".-3.", "0,0,0"),
        (12, "-4..", "0,3/4,1/4"),
        (12, "4..", "x,1/4,1/4"),
        (16, ".3.", "x,x,x"),
        (24, "2..", "x,3/4,1/4"),
        (24, "..2", "1/4,y,y"),
        (48, "1", "x,y,z"),
    ],
    // 223 Pm-3n
    &[
        (2, "m-3.", "0,0,0"),
        (6, "mmm..", "0,1/2,1/2"),
        (6, "-4m.2", "1/4,0,1/2"),
        (6, "-4m.2", "1/4,1/2,0"),
        (8, ".32", "1/4,1/4,1/4"),
        (12, "mm2..", "x,0,0"),
        (12, "mm2..", "x,0,1/2"),
        (12, "mm2..", "x,1/2,0"),
        (16, ".3.", "x,x,x"),
        (24, "..2", "1/4,y,y+1/2"),
        (24, "m..", "0,y,z"),
        (48, "1", "x,y,z"),
    ],
    // 224 Pn-3m
    &[
        (2, "-43m", "1/4,1/4,1/4"),
        (4, ".-3m", "0,0,0"),
        (4, ".-3m", "1/2,1/2,1/2"),
        (6, "-42.m", "1/4,3/4,3/4"),
        (8, ".3m", "x,x,x"),
        (12, "2.22", "1/2,1/4,3/4"),
        (12, "2.mm", "x,1/4,1/4"),
        (24, "2..", "x,1/4,3/4"),
        (24, "..2", "0,y,y+1/2"),
        (24, "..2", "0,y,-y"),
        (24, "..m", "x,x,z"),
        (48, "1", "x,y,z"),
    ],
    // 225 Fm-3m
    &[
        (4, "m-3m", "0,0,0"),
        (4, "m-3m", "1/2,1/2,1/2"),
        (8, "-43m", "1/4,1/4,1/4"),
        (24, "m.mm", "0,1/4,1/4"),
        (24, "4m.m", "x,0,0"),
        (32, ".3m", "x,x,x"),
        (48, "2.mm", "x,1/4,1/4"),
        (48, "m.m2", "0,y,y"),
        (48, "m.m2", "1/2,y,y"),
        (96, "m..", "0,y,z"),
        (96, "..m", "x,x,z"),
        (192, "1", "x,y,z"),
    ],
    // 226 Fm-3c
    &[
        (8, "432", "1/4,1/4,1/4"),
        (8, "m-3.", "0,0,0"),
        (24, "-4m.2", "1/4,0,0"),
        (24, "4/m..", "0,1/4,1/4"),
        (48, "mm2..", "x,0,0"),
        (48, "4..", "x,1/4,1/4"),
        (64, ".3.", "x,x,x"),
        (96, "..2", "1/4,y,y"),
        (96, "m..", "0,y,z"),
        (192, "1", "x,y,z"),
    ],
    // 227 Fd-3m
    &[
        (8, "-43m", "1/8,1/8,1/8"),
        (8, "-43m", "3/8,3/8,3/8"),
        (16, ".-3m", "0,0,0"),
        (16, ".-3m", "1/2,1/2,1/2"),
        (32, ".3m", "x,x,x"),
        (48, "2.mm", "x,1/8,1/8"),
        (96, "..2", "0,y,-y"),
        (96, "..m", "x,x,z"),
        (192, "1", "x,y,z"),
    ],
    // 228 Fd-3c
    &[
        (16, "23.", "1/8,1/8,1/8"),
        (32, ".32", "1/4,1/4,1/4"),
        (32, ".-3.", "0,0,0"),
        (48, "-4..", "7/8,1/8,3/8"),
        (64, ".3.", "x,x,x"),
        (96, "2..", "x,1/8,1/8"),
        (96, "..2", "1/4,y,-y"),
        (192, "1", "x,y,z"),
    ],
    // 229 Im-3m
    &[
        (2, "m-3m", "0,0,0"),
        (6, "4/mm.m", "0,1/2,1/2"),
        (8, ".-3m", "1/4,1/4,1/4"),
        (12, "-4m.2", "1/4,0,1/2"),
        (12, "4m.m", "x,0,0"),
        (16, ".3m", "x,x,x"),
        (24, "mm2..", "x,0,1/2"),
        (24, "m.m2", "0,y,y"),
        (48, "..2", "1/4,y,-y+1/2"),
        (48, "m..", "0,y,z"),
        (48, "..m", "x,x,z"),
        (96, "1", "x,y,z"),
    ],
    // 230 Ia-3d
    &[
        (16, ".-3.", "0,0,0"),
        (16, ".32", "1/8,1/8,1/8"),
        (24, "2.22", "1/8,0,1/4"),
        (24, "-4..", "3/8,0,1/4"),
        (32, ".3.", "x,x,x"),
        (48, "2..", "x,0,1/4"),
        (48, "..2", "1/8,y,-y+1/4"),
        (96, "1", "x,y,z"),
    ],
];
