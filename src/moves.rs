use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::cubie::{self, Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::{decode_table, write_table};

/// Layer moves, Up, Right, Front, Down, Face, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" | "R3" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" | "L3" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" | "U3" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" | "D3" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" | "F3" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" | "B3" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// The move undoing this move.
    pub fn get_inverse(self) -> Self {
        let face = self as usize / 3;
        ALL_MOVES[3 * face + (2 - self as usize % 3)]
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the permutations of the edges
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_sorted_move: Vec<u16>,
    pub corners_move: Vec<u16>,
    pub udcorners_move: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist_move: move_twist().unwrap(),
            flip_move: move_flip().unwrap(),
            slice_sorted_move: move_slice_sorted().unwrap(),
            corners_move: move_corners().unwrap(),
            udcorners_move: move_udcorners().unwrap(),
        }
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Move table for the twists of the corners.
///
/// The twist coordinate describes the 3^7 = 2187 possible orientations of the 8 corners.
pub fn move_twist() -> Result<Vec<u16>, Error> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let fname = "tables/move_twist";
    let move_twist_table = std::fs::read(fname).unwrap_or("".into());
    let mut twist_move = vec![0; N_TWIST * N_MOVE];
    if move_twist_table.is_empty() {
        println!("Creating {} table...", fname);
        for i in 0..N_TWIST {
            a.set_twist(i as u16);
            for j in ALL_COLORS {
                // six faces U, R, F, D, L, B
                for k in 0..3 {
                    // three moves for each face, for example U, U2, U3 = U'
                    a.corner_multiply(bmc[j as usize]);
                    twist_move[N_MOVE * i + 3 * j as usize + k] = a.get_twist();
                }
                a.corner_multiply(bmc[j as usize]); // 4. move restores face
            }
        }
        write_table(fname, &twist_move)?;
    } else {
        twist_move = decode_table(&move_twist_table)?;
    }
    Ok(twist_move)
}

/// Move table for the flip of the edges.
///
/// The flip coordinate describes the 2^11 = 2048 possible orientations of the 12 edges.
pub fn move_flip() -> Result<Vec<u16>, Error> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let fname = "tables/move_flip";
    let flip_move_table = std::fs::read(fname).unwrap_or("".into());
    let mut flip_move = vec![0; N_FLIP * N_MOVE];
    if flip_move_table.is_empty() {
        println!("Creating {} table...", fname);
        for i in 0..N_FLIP {
            a.set_flip(i as u16);
            for j in ALL_COLORS {
                for k in 0..3 {
                    a.edge_multiply(bmc[j as usize]);
                    flip_move[N_MOVE * i + 3 * j as usize + k] = a.get_flip();
                }
                a.edge_multiply(bmc[j as usize]);
            }
        }
        write_table(fname, &flip_move)?;
    } else {
        flip_move = decode_table(&flip_move_table)?;
    }
    Ok(flip_move)
}

/// Move table for the four UD-slice edges FR, FL, BL and BR.
///
/// The slice_sorted coordinate describes the 12!/8! = 11880 possible positions and
/// permutations of the FR, FL, BL and BR edges.
pub fn move_slice_sorted() -> Result<Vec<u16>, Error> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let fname = "tables/move_slice_sorted";
    let slice_move_table = std::fs::read(fname).unwrap_or("".into());
    let mut slice_move = vec![0; N_SLICE_SORTED * N_MOVE];
    if slice_move_table.is_empty() {
        println!("Creating {} table...", fname);
        for i in 0..N_SLICE_SORTED {
            a.set_slice_sorted(i as u16);
            for j in ALL_COLORS {
                for k in 0..3 {
                    a.edge_multiply(bmc[j as usize]);
                    slice_move[N_MOVE * i + 3 * j as usize + k] = a.get_slice_sorted();
                }
                a.edge_multiply(bmc[j as usize]);
            }
        }
        write_table(fname, &slice_move)?;
    } else {
        slice_move = decode_table(&slice_move_table)?;
    }
    Ok(slice_move)
}

/// Move table for the corners coordinate.
///
/// The corners coordinate describes the 8! = 40320 permutations of the corners.
pub fn move_corners() -> Result<Vec<u16>, Error> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let fname = "tables/move_corners";
    let move_corners_table = std::fs::read(fname).unwrap_or("".into());
    let mut corners_move = vec![0; N_CORNERS * N_MOVE];
    if move_corners_table.is_empty() {
        println!("Creating {} table...", fname);
        for i in 0..N_CORNERS {
            a.set_corners(i as u16);
            for j in ALL_COLORS {
                for k in 0..3 {
                    a.corner_multiply(bmc[j as usize]);
                    corners_move[N_MOVE * i + 3 * j as usize + k] = a.get_corners();
                }
                a.corner_multiply(bmc[j as usize]);
            }
        }
        write_table(fname, &corners_move)?;
    } else {
        corners_move = decode_table(&move_corners_table)?;
    }
    Ok(corners_move)
}

/// Move table for the location of the four U-face corners.
///
/// The udcorners coordinate describes the Binomial(8,4)/2 = 35 locations of the
/// URF, UFL, ULB and UBR corners, the U-set and the complementary D-set identified.
pub fn move_udcorners() -> Result<Vec<u16>, Error> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let fname = "tables/move_udcorners";
    let move_udcorners_table = std::fs::read(fname).unwrap_or("".into());
    let mut udcorners_move = vec![0; N_UDCORNERS * N_MOVE];
    if move_udcorners_table.is_empty() {
        println!("Creating {} table...", fname);
        for i in 0..N_UDCORNERS {
            a.set_udcorners(i as u16);
            for j in ALL_COLORS {
                for k in 0..3 {
                    a.corner_multiply(bmc[j as usize]);
                    udcorners_move[N_MOVE * i + 3 * j as usize + k] = a.get_udcorners();
                }
                a.corner_multiply(bmc[j as usize]);
            }
        }
        write_table(fname, &udcorners_move)?;
    } else {
        udcorners_move = decode_table(&move_udcorners_table)?;
    }
    Ok(udcorners_move)
}
