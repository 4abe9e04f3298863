//! The 530 tabulated settings of the space-group types, keyed by Hall
//! number.
//!
//! Settings of one type are contiguous and numbered in table order. The
//! choice label names the unique axis and cell choice of monoclinic types,
//! the axis permutation of orthorhombic types, the origin choice (`1`, `2`)
//! and the axes (`H`, `R`) of rhombohedral types.

use symops::SymOp;

use crate::hall::{HallError, HallSymbol};

/// Number of tabulated settings.
pub const N_HALL_SETTINGS: usize = 530;

/// One setting of a space-group type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HallSetting {
    pub hall_number: usize,
    pub number: usize,
    /// Empty for types with a single setting and for the `abc` setting.
    pub choice: &'static str,
    pub hall_symbol: &'static str,
}

impl HallSetting {
    /// Whether this is the setting the reference table of its type uses.
    pub fn is_default(&self) -> bool {
        default_hall_number(self.number) == Some(self.hall_number)
    }

    /// Operations of this setting, centering translations included.
    pub fn operations(&self) -> Result<Vec<SymOp>, HallError> {
        HallSymbol::parse(self.hall_symbol)?.operations()
    }
}

const SETTINGS: [(usize, &str, &str); N_HALL_SETTINGS] = [
    // 1 P1
    (1, "", "P 1"),
    // 2 P-1
    (2, "", "-P 1"),
    // 3 P2
    (3, "b", "P 2y"),
    (3, "c", "P 2"),
    (3, "a", "P 2x"),
    // 4 P2_1
    (4, "b", "P 2yb"),
    (4, "c", "P 2c"),
    (4, "a", "P 2xa"),
    // 5 C2
    (5, "b1", "C 2y"),
    (5, "b2", "A 2y"),
    (5, "b3", "I 2y"),
    (5, "c1", "A 2"),
    (5, "c2", "B 2"),
    (5, "c3", "I 2"),
    (5, "a1", "B 2x"),
    (5, "a2", "C 2x"),
    (5, "a3", "I 2x"),
    // 6 Pm
    (6, "b", "P -2y"),
    (6, "c", "P -2"),
    (6, "a", "P -2x"),
    // 7 Pc
    (7, "b1", "P -2yc"),
    (7, "b2", "P -2yac"),
    (7, "b3", "P -2ya"),
    (7, "c1", "P -2a"),
    (7, "c2", "P -2ab"),
    (7, "c3", "P -2b"),
    (7, "a1", "P -2xb"),
    (7, "a2", "P -2xbc"),
    (7, "a3", "P -2xc"),
    // 8 Cm
    (8, "b1", "C -2y"),
    (8, "b2", "A -2y"),
    (8, "b3", "I -2y"),
    (8, "c1", "A -2"),
    (8, "c2", "B -2"),
    (8, "c3", "I -2"),
    (8, "a1", "B -2x"),
    (8, "a2", "C -2x"),
    (8, "a3", "I -2x"),
    // 9 Cc
    (9, "b1", "C -2yc"),
    (9, "b2", "A -2yac"),
    (9, "b3", "I -2ya"),
    (9, "-b1", "A -2ya"),
    (9, "-b2", "C -2ybc"),
    (9, "-b3", "I -2yc"),
    (9, "c1", "A -2a"),
    (9, "c2", "B -2bc"),
    (9, "c3", "I -2b"),
    (9, "-c1", "B -2b"),
    (9, "-c2", "A -2ac"),
    (9, "-c3", "I -2a"),
    (9, "a1", "B -2xb"),
    (9, "a2", "C -2xbc"),
    (9, "a3", "I -2xc"),
    (9, "-a1", "C -2xc"),
    (9, "-a2", "B -2xbc"),
    (9, "-a3", "I -2xb"),
    // 10 P2/m
    (10, "b", "-P 2y"),
    (10, "c", "-P 2"),
    (10, "a", "-P 2x"),
    // 11 P2_1/m
    (11, "b", "-P 2yb"),
    (11, "c", "-P 2c"),
    (11, "a", "-P 2xa"),
    // 12 C2/m
    (12, "b1", "-C 2y"),
    (12, "b2", "-A 2y"),
    (12, "b3", "-I 2y"),
    (12, "c1", "-A 2"),
    (12, "c2", "-B 2"),
    (12, "c3", "-I 2"),
    (12, "a1", "-B 2x"),
    (12, "a2", "-C 2x"),
    (12, "a3", "-I 2x"),
    // 13 P2/c
    (13, "b1", "-P 2yc"),
    (13, "b2", "-P 2yac"),
    (13, "b3", "-P 2ya"),
    (13, "c1", "-P 2a"),
    (13, "c2", "-P 2ab"),
    (13, "c3", "-P 2b"),
    (13, "a1", "-P 2xb"),
    (13, "a2", "-P 2xbc"),
    (13, "a3", "-P 2xc"),
    // 14 P2_1/c
    (14, "b1", "-P 2ybc"),
    (14, "b2", "-P 2yn"),
    (14, "b3", "-P 2yab"),
    (14, "c1", "-P 2ac"),
    (14, "c2", "-P 2n"),
    (14, "c3", "-P 2bc"),
    (14, "a1", "-P 2xab"),
    (14, "a2", "-P 2xn"),
    (14, "a3", "-P 2xac"),
    // 15 C2/c
    (15, "b1", "-C 2yc"),
    (15, "b2", "-A 2yac"),
    (15, "b3", "-I 2ya"),
    (15, "-b1", "-A 2ya"),
    (15, "-b2", "-C 2ybc"),
    (15, "-b3", "-I 2yc"),
    (15, "c1", "-A 2a"),
    (15, "c2", "-B 2bc"),
    (15, "c3", "-I 2b"),
    (15, "-c1", "-B 2b"),
    (15, "-c2", "-A 2ac"),
    (15, "-c3", "-I 2a"),
    (15, "a1", "-B 2xb"),
    (15, "a2", "-C 2xbc"),
    (15, "a3", "-I 2xc"),
    (15, "-a1", "-C 2xc"),
    (15, "-a2", "-B 2xbc"),
    (15, "-a3", "-I 2xb"),
    // 16 P222
    (16, "", "P 2 2"),
    // 17 P222_1
    (17, "", "P 2c 2"),
    (17, "cab", "P 2a 2a"),
    (17, "bca", "P 2 2b"),
    // 18 P2_12_12
    (18, "", "P 2 2ab"),
    (18, "cab", "P 2bc 2"),
    (18, "bca", "P 2ac 2ac"),
    // 19 P2_12_12_1
    (19, "", "P 2ac 2ab"),
    // 20 C222_1
    (20, "", "C 2c 2"),
    (20, "cab", "A 2a 2a"),
    (20, "bca", "B 2 2b"),
    // 21 C222
    (21, "", "C 2 2"),
    (21, "cab", "A 2 2"),
    (21, "bca", "B 2 2"),
    // 22 F222
    (22, "", "F 2 2"),
    // 23 I222
    (23, "", "I 2 2"),
    // 24 I2_12_12_1
    (24, "", "I 2b 2c"),
    // 25 Pmm2
    (25, "", "P 2 -2"),
    (25, "cab", "P -2 2"),
    (25, "bca", "P -2 -2"),
    // 26 Pmc2_1
    (26, "", "P 2c -2"),
    (26, "ba-c", "P 2c -2c"),
    (26, "cab", "P -2a 2a"),
    (26, "-cba", "P -2 2a"),
    (26, "bca", "P -2 -2b"),
    (26, "a-cb", "P -2b -2"),
    // 27 Pcc2
    (27, "", "P 2 -2c"),
    (27, "cab", "P -2a 2"),
    (27, "bca", "P -2b -2b"),
    // 28 Pma2
    (28, "", "P 2 -2a"),
    (28, "ba-c", "P 2 -2b"),
    (28, "cab", "P -2b 2"),
    (28, "-cba", "P -2c 2"),
    (28, "bca", "P -2c -2c"),
    (28, "a-cb", "P -2a -2a"),
    // 29 Pca2_1
    (29, "", "P 2c -2ac"),
    (29, "ba-c", "P 2c -2b"),
    (29, "cab", "P -2b 2a"),
    (29, "-cba", "P -2ac 2a"),
    (29, "bca", "P -2bc -2c"),
    (29, "a-cb", "P -2a -2ab"),
    // 30 Pnc2
    (30, "", "P 2 -2bc"),
    (30, "ba-c", "P 2 -2ac"),
    (30, "cab", "P -2ac 2"),
    (30, "-cba", "P -2ab 2"),
    (30, "bca", "P -2ab -2ab"),
    (30, "a-cb", "P -2bc -2bc"),
    // 31 Pmn2_1
    (31, "", "P 2ac -2"),
    (31, "ba-c", "P 2bc -2bc"),
    (31, "cab", "P -2ab 2ab"),
    (31, "-cba", "P -2 2ac"),
    (31, "bca", "P -2 -2bc"),
    (31, "a-cb", "P -2ab -2"),
    // 32 Pba2
    (32, "", "P 2 -2ab"),
    (32, "cab", "P -2bc 2"),
    (32, "bca", "P -2ac -2ac"),
    // 33 Pna2_1
    (33, "", "P 2c -2n"),
    (33, "ba-c", "P 2c -2ab"),
    (33, "cab", "P -2bc 2a"),
    (33, "-cba", "P -2n 2a"),
    (33, "bca", "P -2n -2ac"),
    (33, "a-cb", "P -2ac -2n"),
    // 34 Pnn2
    (34, "", "P 2 -2n"),
    (34, "cab", "P -2n 2"),
    (34, "bca", "P -2n -2n"),
    // 35 Cmm2
    (35, "", "C 2 -2"),
    (35, "cab", "A -2 2"),
    (35, "bca", "B -2 -2"),
    // 36 Cmc2_1
    (36, "", "C 2c -2"),
    (36, "ba-c", "C 2c -2c"),
    (36, "cab", "A -2a 2a"),
    (36, "-cba", "A -2 2a"),
    (36, "bca", "B -2 -2b"),
    (36, "a-cb", "B -2b -2"),
    // 37 Ccc2
    (37, "", "C 2 -2c"),
    (37, "cab", "A -2a 2"),
    (37, "bca", "B -2b -2b"),
    // 38 Amm2
    (38, "", "A 2 -2"),
    (38, "ba-c", "B 2 -2"),
    (38, "cab", "B -2 2"),
    (38, "-cba", "C -2 2"),
    (38, "bca", "C -2 -2"),
    (38, "a-cb", "A -2 -2"),
    // 39 Aem2
    (39, "", "A 2 -2c"),
    (39, "ba-c", "B 2 -2c"),
    (39, "cab", "B -2c 2"),
    (39, "-cba", "C -2b 2"),
    (39, "bca", "C -2b -2b"),
    (39, "a-cb", "A -2c -2c"),
    // 40 Ama2
    (40, "", "A 2 -2a"),
    (40, "ba-c", "B 2 -2b"),
    (40, "cab", "B -2b 2"),
    (40, "-cba", "C -2c 2"),
    (40, "bca", "C -2c -2c"),
    (40, "a-cb", "A -2a -2a"),
    // 41 Aea2
    (41, "", "A 2 -2ac"),
    (41, "ba-c", "B 2 -2bc"),
    (41, "cab", "B -2bc 2"),
    (41, "-cba", "C -2bc 2"),
    (41, "bca", "C -2bc -2bc"),
    (41, "a-cb", "A -2ac -2ac"),
    // 42 Fmm2
    (42, "", "F 2 -2"),
    (42, "cab", "F -2 2"),
    (42, "bca", "F -2 -2"),
    // 43 Fdd2
    (43, "", "F 2 -2d"),
    (43, "cab", "F -2d 2"),
    (43, "bca", "F -2d -2d"),
    // 44 Imm2
    (44, "", "I 2 -2"),
    (44, "cab", "I -2 2"),
    (44, "bca", "I -2 -2"),
    // 45 Iba2
    (45, "", "I 2 -2c"),
    (45, "cab", "I -2a 2"),
    (45, "bca", "I -2b -2b"),
    // 46 Ima2
    (46, "", "I 2 -2a"),
    (46, "ba-c", "I 2 -2b"),
    (46, "cab", "I -2b 2"),
    (46, "-cba", "I -2c 2"),
    (46, "bca", "I -2c -2c"),
    (46, "a-cb", "I -2a -2a"),
    // 47 Pmmm
    (47, "", "-P 2 2"),
    // 48 Pnnn
    (48, "1", "P 2 2 -1n"),
    (48, "2", "-P 2ab 2bc"),
    // 49 Pccm
    (49, "", "-P 2 2c"),
    (49, "cab", "-P 2a 2"),
    (49, "bca", "-P 2b 2b"),
    // 50 Pban
    (50, "1", "P 2 2 -1ab"),
    (50, "2", "-P 2ab 2b"),
    (50, "1cab", "P 2 2 -1bc"),
    (50, "2cab", "-P 2b 2bc"),
    (50, "1bca", "P 2 2 -1ac"),
    (50, "2bca", "-P 2a 2c"),
    // 51 Pmma
    (51, "", "-P 2a 2a"),
    (51, "ba-c", "-P 2b 2"),
    (51, "cab", "-P 2 2b"),
    (51, "-cba", "-P 2c 2c"),
    (51, "bca", "-P 2c 2"),
    (51, "a-cb", "-P 2 2a"),
    // 52 Pnna
    (52, "", "-P 2a 2bc"),
    (52, "ba-c", "-P 2b 2n"),
    (52, "cab", "-P 2n 2b"),
    (52, "-cba", "-P 2ab 2c"),
    (52, "bca", "-P 2ab 2n"),
    (52, "a-cb", "-P 2n 2bc"),
    // 53 Pmna
    (53, "", "-P 2ac 2"),
    (53, "ba-c", "-P 2bc 2bc"),
    (53, "cab", "-P 2ab 2ab"),
    (53, "-cba", "-P 2 2ac"),
    (53, "bca", "-P 2 2bc"),
    (53, "a-cb", "-P 2ab 2"),
    // 54 Pcca
    (54, "", "-P 2a 2ac"),
    (54, "ba-c", "-P 2b 2c"),
    (54, "cab", "-P 2a 2b"),
    (54, "-cba", "-P 2ac 2c"),
    (54, "bca", "-P 2bc 2b"),
    (54, "a-cb", "-P 2b 2ab"),
    // 55 Pbam
    (55, "", "-P 2 2ab"),
    (55, "cab", "-P 2bc 2"),
    (55, "bca", "-P 2ac 2ac"),
    // 56 Pccn
    (56, "", "-P 2ab 2ac"),
    (56, "cab", "-P 2ac 2bc"),
    (56, "bca", "-P 2bc 2ab"),
    // 57 Pbcm
    (57, "", "-P 2c 2b"),
    (57, "ba-c", "-P 2c 2ac"),
    (57, "cab", "-P 2ac 2a"),
    (57, "-cba", "-P 2b 2a"),
    (57, "bca", "-P 2a 2ab"),
    (57, "a-cb", "-P 2bc 2c"),
    // 58 Pnnm
    (58, "", "-P 2 2n"),
    (58, "cab", "-P 2n 2"),
    (58, "bca", "-P 2n 2n"),
    // 59 Pmmn
    (59, "1", "P 2 2ab -1ab"),
    (59, "2", "-P 2ab 2a"),
    (59, "1cab", "P 2bc 2 -1bc"),
    (59, "2cab", "-P 2c 2bc"),
    (59, "1bca", "P 2ac 2ac -1ac"),
    (59, "2bca", "-P 2c 2a"),
    // 60 Pbcn
    (60, "", "-P 2n 2ab"),
    (60, "ba-c", "-P 2n 2c"),
    (60, "cab", "-P 2a 2n"),
    (60, "-cba", "-P 2bc 2n"),
    (60, "bca", "-P 2ac 2b"),
    (60, "a-cb", "-P 2b 2ac"),
    // 61 Pbca
    (61, "", "-P 2ac 2ab"),
    (61, "ba-c", "-P 2bc 2ac"),
    // 62 Pnma
    (62, "", "-P 2ac 2n"),
    (62, "ba-c", "-P 2bc 2a"),
    (62, "cab", "-P 2c 2ab"),
    (62, "-cba", "-P 2n 2ac"),
    (62, "bca", "-P 2n 2a"),
    (62, "a-cb", "-P 2c 2n"),
    // 63 Cmcm
    (63, "", "-C 2c 2"),
    (63, "ba-c", "-C 2c 2c"),
    (63, "cab", "-A 2a 2a"),
    (63, "-cba", "-A 2 2a"),
    (63, "bca", "-B 2 2b"),
    (63, "a-cb", "-B 2b 2"),
    // 64 Cmce
    (64, "", "-C 2bc 2"),
    (64, "ba-c", "-C 2bc 2bc"),
    (64, "cab", "-A 2ac 2ac"),
    (64, "-cba", "-A 2 2ac"),
    (64, "bca", "-B 2 2bc"),
    (64, "a-cb", "-B 2bc 2"),
    // 65 Cmmm
    (65, "", "-C 2 2"),
    (65, "cab", "-A 2 2"),
    (65, "bca", "-B 2 2"),
    // 66 Cccm
    (66, "", "-C 2 2c"),
    (66, "cab", "-A 2a 2"),
    (66, "bca", "-B 2b 2b"),
    // 67 Cmme
    (67, "", "-C 2b 2"),
    (67, "ba-c", "-C 2b 2b"),
    (67, "cab", "-A 2c 2c"),
    (67, "-cba", "-A 2 2c"),
    (67, "bca", "-B 2 2c"),
    (67, "a-cb", "-B 2c 2"),
    // 68 Ccce
    (68, "1", "C 2 2 -1bc"),
    (68, "2", "-C 2b 2bc"),
    (68, "1ba-c", "C 2 2 -1bc"),
    (68, "2ba-c", "-C 2b 2c"),
    (68, "1cab", "A 2 2 -1ac"),
    (68, "2cab", "-A 2a 2c"),
    (68, "1-cba", "A 2 2 -1ac"),
    (68, "2-cba", "-A 2ac 2c"),
    (68, "1bca", "B 2 2 -1bc"),
    (68, "2bca", "-B 2bc 2b"),
    (68, "1a-cb", "B 2 2 -1bc"),
    (68, "2a-cb", "-B 2b 2bc"),
    // 69 Fmmm
    (69, "", "-F 2 2"),
    // 70 Fddd
    (70, "1", "F 2 2 -1d"),
    (70, "2", "-F 2uv 2vw"),
    // 71 Immm
    (71, "", "-I 2 2"),
    // 72 Ibam
    (72, "", "-I 2 2c"),
    (72, "cab", "-I 2a 2"),
    (72, "bca", "-I 2b 2b"),
    // 73 Ibca
    (73, "", "-I 2b 2c"),
    (73, "ba-c", "-I 2a 2b"),
    // 74 Imma
    (74, "", "-I 2b 2"),
    (74, "ba-c", "-I 2a 2a"),
    (74, "cab", "-I 2c 2c"),
    (74, "-cba", "-I 2 2b"),
    (74, "bca", "-I 2 2a"),
    (74, "a-cb", "-I 2c 2"),
    // 75 P4
    (75, "", "P 4"),
    // 76 P4_1
    (76, "", "P 4w"),
    // 77 P4_2
    (77, "", "P 4c"),
    // 78 P4_3
    (78, "", "P 4cw"),
    // 79 I4
    (79, "", "I 4"),
    // 80 I4_1
    (80, "", "I 4bw"),
    // 81 P-4
    (81, "", "P -4"),
    // 82 I-4
    (82, "", "I -4"),
    // 83 P4/m
    (83, "", "-P 4"),
    // 84 P4_2/m
    (84, "", "-P 4c"),
    // 85 P4/n
    (85, "1", "P 4ab -1ab"),
    (85, "2", "-P 4a"),
    // 86 P4_2/n
    (86, "1", "P 4n -1n"),
    (86, "2", "-P 4bc"),
    // 87 I4/m
    (87, "", "-I 4"),
    // 88 I4_1/a
    (88, "1", "I 4bw -1bw"),
    (88, "2", "-I 4ad"),
    // 89 P422
    (89, "", "P 4 2"),
    // 90 P42_12
    (90, "", "P 4ab 2ab"),
    // 91 P4_122
    (91, "", "P 4w 2c"),
    // 92 P4_12_12
    (92, "", "P 4abw 2nw"),
    // 93 P4_222
    (93, "", "P 4c 2"),
    // 94 P4_22_12
    (94, "", "P 4n 2n"),
    // 95 P4_322
    (95, "", "P 4cw 2c"),
    // 96 P4_32_12
    (96, "", "P 4nw 2abw"),
    // 97 I422
    (97, "", "I 4 2"),
    // 98 I4_122
    (98, "", "I 4bw 2bw"),
    // 99 P4mm
    (99, "", "P 4 -2"),
    // 100 P4bm
    (100, "", "P 4 -2ab"),
    // 101 P4_2cm
    (101, "", "P 4c -2c"),
    // 102 P4_2nm
    (102, "", "P 4n -2n"),
    // 103 P4cc
    (103, "", "P 4 -2c"),
    // 104 P4nc
    (104, "", "P 4 -2n"),
    // 105 P4_2mc
    (105, "", "P 4c -2"),
    // 106 P4_2bc
    (106, "", "P 4c -2ab"),
    // 107 I4mm
    (107, "", "I 4 -2"),
    // 108 I4cm
    (108, "", "I 4 -2c"),
    // 109 I4_1md
    (109, "", "I 4bw -2"),
    // 110 I4_1cd
    (110, "", "I 4bw -2c"),
    // 111 P-42m
    (111, "", "P -4 2"),
    // 112 P-42c
    (112, "", "P -4 2c"),
    // 113 P-42_1m
    (113, "", "P -4 2ab"),
    // 114 P-42_1c
    (114, "", "P -4 2n"),
    // 115 P-4m2
    (115, "", "P -4 -2"),
    // 116 P-4c2
    (116, "", "P -4 -2c"),
    // 117 P-4b2
    (117, "", "P -4 -2ab"),
    // 118 P-4n2
    (118, "", "P -4 -2n"),
    // 119 I-4m2
    (119, "", "I -4 -2"),
    // 120 I-4c2
    (120, "", "I -4 -2c"),
    // 121 I-42m
    (121, "", "I -4 2"),
    // 122 I-42d
    (122, "", "I -4 2bw"),
    // 123 P4/mmm
    (123, "", "-P 4 2"),
    // 124 P4/mcc
    (124, "", "-P 4 2c"),
    // 125 P4/nbm
    (125, "1", "P 4 2 -1ab"),
    (125, "2", "-P 4a 2b"),
    // 126 P4/nnc
    (126, "1", "P 4 2 -1n"),
    (126, "2", "-P 4a 2bc"),
    // 127 P4/mbm
    (127, "", "-P 4 2ab"),
    // 128 P4/mnc
    (128, "", "-P 4 2n"),
    // 129 P4/nmm
    (129, "1", "P 4ab 2ab -1ab"),
    (129, "2", "-P 4a 2a"),
    // 130 P4/ncc
    (130, "1", "P 4ab 2n -1ab"),
    (130, "2", "-P 4a 2ac"),
    // 131 P4_2/mmc
    (131, "", "-P 4c 2"),
    // 132 P4_2/mcm
    (132, "", "-P 4c 2c"),
    // 133 P4_2/nbc
    (133, "1", "P 4n 2c -1n"),
    (133, "2", "-P 4ac 2b"),
    // 134 P4_2/nnm
    (134, "1", "P 4n 2 -1n"),
    (134, "2", "-P 4ac 2bc"),
    // 135 P4_2/mbc
    (135, "", "-P 4c 2ab"),
    // 136 P4_2/mnm
    (136, "", "-P 4n 2n"),
    // 137 P4_2/nmc
    (137, "1", "P 4n 2n -1n"),
    (137, "2", "-P 4ac 2a"),
    // 138 P4_2/ncm
    (138, "1", "P 4n 2ab -1n"),
    (138, "2", "-P 4ac 2ac"),
    // 139 I4/mmm
    (139, "", "-I 4 2"),
    // 140 I4/mcm
    (140, "", "-I 4 2c"),
    // 141 I4_1/amd
    (141, "1", "I 4bw 2bw -1bw"),
    (141, "2", "-I 4bd 2"),
    // 142 I4_1/acd
    (142, "1", "I 4bw 2aw -1bw"),
    (142, "2", "-I 4bd 2c"),
    // 143 P3
    (143, "", "P 3"),
    // 144 P3_1
    (144, "", "P 31"),
    // 145 P3_2
    (145, "", "P 32"),
    // 146 R3
    (146, "H", "R 3"),
    (146, "R", "P 3*"),
    // 147 P-3
    (147, "", "-P 3"),
    // 148 R-3
    (148, "H", "-R 3"),
    (148, "R", "-P 3*"),
    // 149 P312
    (149, "", "P 3 2"),
    // 150 P321
    (150, "", "P 3 2\""),
    // 151 P3_112
    (151, "", "P 31 2c (0 0 1)"),
    // 152 P3_121
    (152, "", "P 31 2\""),
    // 153 P3_212
    (153, "", "P 32 2c (0 0 -1)"),
    // 154 P3_221
    (154, "", "P 32 2\""),
    // 155 R32
    (155, "H", "R 3 2\""),
    (155, "R", "P 3* 2"),
    // 156 P3m1
    (156, "", "P 3 -2\""),
    // 157 P31m
    (157, "", "P 3 -2"),
    // 158 P3c1
    (158, "", "P 3 -2\"c"),
    // 159 P31c
    (159, "", "P 3 -2c"),
    // 160 R3m
    (160, "H", "R 3 -2\""),
    (160, "R", "P 3* -2"),
    // 161 R3c
    (161, "H", "R 3 -2\"c"),
    (161, "R", "P 3* -2n"),
    // 162 P-31m
    (162, "", "-P 3 2"),
    // 163 P-31c
    (163, "", "-P 3 2c"),
    // 164 P-3m1
    (164, "", "-P 3 2\""),
    // 165 P-3c1
    (165, "", "-P 3 2\"c"),
    // 166 R-3m
    (166, "H", "-R 3 2\""),
    (166, "R", "-P 3* 2"),
    // 167 R-3c
    (167, "H", "-R 3 2\"c"),
    (167, "R", "-P 3* 2n"),
    // 168 P6
    (168, "", "P 6"),
    // 169 P6_1
    (169, "", "P 61"),
    // 170 P6_5
    (170, "", "P 65"),
    // 171 P6_2
    (171, "", "P 62"),
    // 172 P6_4
    (172, "", "P 64"),
    // 173 P6_3
    (173, "", "P 6c"),
    // 174 P-6
    (174, "", "P -6"),
    // 175 P6/m
    (175, "", "-P 6"),
    // 176 P6_3/m
    (176, "", "-P 6c"),
    // 177 P622
    (177, "", "P 6 2"),
    // 178 P6_122
    (178, "", "P 61 2 (0 0 -1)"),
    // 179 P6_522
    (179, "", "P 65 2 (0 0 1)"),
    // 180 P6_222
    (180, "", "P 62 2c (0 0 1)"),
    // 181 P6_422
    (181, "", "P 64 2c (0 0 -1)"),
    // 182 P6_322
    (182, "", "P 6c 2c"),
    // 183 P6mm
    (183, "", "P 6 -2"),
    // 184 P6cc
    (184, "", "P 6 -2c"),
    // 185 P6_3cm
    (185, "", "P 6c -2"),
    // 186 P6_3mc
    (186, "", "P 6c -2c"),
    // 187 P-6m2
    (187, "", "P -6 2"),
    // 188 P-6c2
    (188, "", "P -6c 2"),
    // 189 P-62m
    (189, "", "P -6 -2"),
    // 190 P-62c
    (190, "", "P -6c -2c"),
    // 191 P6/mmm
    (191, "", "-P 6 2"),
    // 192 P6/mcc
    (192, "", "-P 6 2c"),
    // 193 P6_3/mcm
    (193, "", "-P 6c 2"),
    // 194 P6_3/mmc
    (194, "", "-P 6c 2c"),
    // 195 P23
    (195, "", "P 2 2 3"),
    // 196 F23
    (196, "", "F 2 2 3"),
    // 197 I23
    (197, "", "I 2 2 3"),
    // 198 P2_13
    (198, "", "P 2ac 2ab 3"),
    // 199 I2_13
    (199, "", "I 2b 2c 3"),
    // 200 Pm-3
    (200, "", "-P 2 2 3"),
    // 201 Pn-3
    (201, "1", "P 2 2 3 -1n"),
    (201, "2", "-P 2ab 2bc 3"),
    // 202 Fm-3
    (202, "", "-F 2 2 3"),
    // 203 Fd-3
    (203, "1", "F 2 2 3 -1d"),
    (203, "2", "-F 2uv 2vw 3"),
    // 204 Im-3
    (204, "", "-I 2 2 3"),
    // 205 Pa-3
    (205, "", "-P 2ac 2ab 3"),
    // 206 Ia-3
    (206, "", "-I 2b 2c 3"),
    // 207 P432
    (207, "", "P 4 2 3"),
    // 208 P4_232
    (208, "", "P 4n 2 3"),
    // 209 F432
    (209, "", "F 4 2 3"),
    // 210 F4_132
    (210, "", "F 4d 2 3"),
    // 211 I432
    (211, "", "I 4 2 3"),
    // 212 P4_332
    (212, "", "P 4acd 2ab 3"),
    // 213 P4_132
    (213, "", "P 4bd 2ab 3"),
    // 214 I4_132
    (214, "", "I 4bd 2c 3"),
    // 215 P-43m
    (215, "", "P -4 2 3"),
    // 216 F-43m
    (216, "", "F -4 2 3"),
    // 217 I-43m
    (217, "", "I -4 2 3"),
    // 218 P-43n
    (218, "", "P -4n 2 3"),
    // 219 F-43c
    (219, "", "F -4c 2 3"),
    // 220 I-43d
    (220, "", "I -4bd 2c 3"),
    // 221 Pm-3m
    (221, "", "-P 4 2 3"),
    // 222 Pn-3n
    (222, "1", "P 4 2 3 -1n"),
    (222, "2", "-P 4a 2bc 3"),
    // 223 Pm-3n
    (223, "", "-P 4n 2 3"),
    // 224 Pn-3m
    (224, "1", "P 4n 2 3 -1n"),
    (224, "2", "-P 4bc 2bc 3"),
    // 225 Fm-3m
    (225, "", "-F 4 2 3"),
    // 226 Fm-3c
    (226, "", "-F 4c 2 3"),
    // 227 Fd-3m
    (227, "1", "F 4d 2 3 -1d"),
    (227, "2", "-F 4vw 2vw 3"),
    // 228 Fd-3c
    (228, "1", "F 4d 2 3 -1cd"),
    (228, "2", "-F 4cvw 2vw 3"),
    // 229 Im-3m
    (229, "", "-I 4 2 3"),
    // 230 Ia-3d
    (230, "", "-I 4bd 2c 3"),
];

fn setting_at(index: usize) -> Option<HallSetting> {
    SETTINGS
        .get(index)
        .map(|&(number, choice, hall_symbol)| HallSetting {
            hall_number: index + 1,
            number,
            choice,
            hall_symbol,
        })
}

/// Setting with Hall number `hall_number` (1 to 530).
pub fn hall_setting(hall_number: usize) -> Option<HallSetting> {
    setting_at(hall_number.wrapping_sub(1))
}

/// Every setting of type `number`, in Hall-number order.
pub fn hall_settings(number: usize) -> impl Iterator<Item = HallSetting> {
    (0..N_HALL_SETTINGS)
        .filter_map(setting_at)
        .filter(move |s| s.number == number)
}

/// Hall number of the default setting of type `number`: the first one,
/// except origin choice 2 where two origins are tabulated.
pub fn default_hall_number(number: usize) -> Option<usize> {
    let mut settings = hall_settings(number);
    let first = settings.next()?;
    let origin_two = if first.choice == "1" {
        settings.find(|s| s.choice == "2")
    } else {
        None
    };
    Some(origin_two.unwrap_or(first).hall_number)
}

/// Operations of the setting with Hall number `hall_number`.
pub fn operations_of_hall_number(hall_number: usize) -> Result<Vec<SymOp>, HallError> {
    hall_setting(hall_number)
        .ok_or(HallError::UnknownHallNumber(hall_number))?
        .operations()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{point_group_of_number, space_group_type};
    use symops::classify_operations;

    #[test]
    fn every_setting_has_the_order_of_its_type() {
        for hall_number in 1..=N_HALL_SETTINGS {
            let setting = hall_setting(hall_number).unwrap();
            let hall = HallSymbol::parse(setting.hall_symbol).unwrap();
            let ops = hall.operations().unwrap();
            let pg = point_group_of_number(setting.number).unwrap();
            assert_eq!(
                ops.len(),
                pg.order * hall.centering.order(),
                "{} {}",
                hall_number,
                setting.hall_symbol
            );
            assert_eq!(
                classify_operations(&ops).unwrap().symbol,
                pg.symbol,
                "{} {}",
                hall_number,
                setting.hall_symbol
            );
        }
    }

    #[test]
    fn settings_are_contiguous() {
        let mut last = 0;
        for hall_number in 1..=N_HALL_SETTINGS {
            let number = hall_setting(hall_number).unwrap().number;
            assert!(number == last || number == last + 1, "{}", hall_number);
            last = number;
        }
        assert_eq!(last, 230);
        assert_eq!(hall_settings(15).count(), 18);
        assert_eq!(hall_settings(68).count(), 12);
        assert_eq!(hall_settings(221).count(), 1);
    }

    #[test]
    fn defaults_match_the_reference_types() {
        for number in 1..=230 {
            let hall_number = default_hall_number(number).unwrap();
            let setting = hall_setting(hall_number).unwrap();
            assert_eq!(setting.number, number);
            assert!(setting.is_default());
            let sg = space_group_type(number).unwrap().unwrap();
            assert_eq!(sg.hall_number, hall_number);
            assert_eq!(sg.hall_symbol, setting.hall_symbol);
        }
        assert_eq!(default_hall_number(1), Some(1));
        assert_eq!(default_hall_number(14), Some(81));
        assert_eq!(default_hall_number(166), Some(458));
        assert_eq!(default_hall_number(227), Some(526));
        assert_eq!(default_hall_number(0), None);
        assert_eq!(default_hall_number(231), None);
    }

    #[test]
    fn lookup_by_hall_number() {
        let fd3m = hall_setting(525).unwrap();
        assert_eq!(fd3m.number, 227);
        assert_eq!(fd3m.choice, "1");
        assert_eq!(fd3m.hall_symbol, "F 4d 2 3 -1d");
        assert!(!fd3m.is_default());
        assert_eq!(operations_of_hall_number(525).unwrap().len(), 192);

        let rhombohedral = hall_setting(459).unwrap();
        assert_eq!(rhombohedral.number, 166);
        assert_eq!(rhombohedral.choice, "R");
        assert_eq!(operations_of_hall_number(459).unwrap().len(), 12);

        let p21c = hall_setting(84).unwrap();
        assert_eq!((p21c.number, p21c.choice), (14, "c1"));
        assert_eq!(p21c.hall_symbol, "-P 2ac");

        assert_eq!(hall_setting(0), None);
        assert_eq!(
            operations_of_hall_number(531),
            Err(HallError::UnknownHallNumber(531))
        );
    }
}
