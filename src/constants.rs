use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::facelet::Color;
use crate::moves::Move::{self, *};

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

pub const SOLVED: u16 = 0;

pub const N_PERM_4: usize = 24;
/// number of cube symmetries of full group Oh
pub const N_SYM: usize = 48;
/// number of possible face moves
pub const N_MOVE: usize = 18;
/// 3^7 possible corner orientations
pub const N_TWIST: usize = 2187;
/// Number of symmetries of subgroup D4h
pub const N_SYM_D4H: usize = 16;
/// 2^11 possible edge orientations
pub const N_FLIP: usize = 2048;
/// 12*11*10*9 possible positions and permutations of the FR, FL, BL, BR edges
pub const N_SLICE_SORTED: usize = 11880;
/// 2^11 * 12*11*10*9 combined flip and slice_sorted coordinates
pub const N_FLIPSLICESORTED: usize = N_FLIP * N_SLICE_SORTED;
/// number of equivalence classes of the flipslicesorted coordinate concerning symmetry group D4h
pub const N_FLIPSLICESORTED_CLASS: usize = 1523864;
/// 8! corner permutations
pub const N_CORNERS: usize = 40320;
/// Binomial(8,4)/2 locations of the four U-face corners, U and D location sets identified
pub const N_UDCORNERS: usize = 35;
