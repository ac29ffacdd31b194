use std::fmt;

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;
use crate::symmetries::SymmetriesTables;

/// The three orientations of the cube used by the solver: the cube as given and
/// the cube rotated by 120° and 240° about the URF-DBL axis. The rotations move
/// the RL-slice and the FB-slice into the UD-slice, so the same coordinates and
/// the same pruning table describe all three views.
pub const UD: usize = 0;
pub const RL: usize = 1;
pub const FB: usize = 2;

/// Represent a cube on the coordinate level, simultaneously in the three views.
///
/// Per view the state is described by the four coordinates twist, flip,
/// slice_sorted and udcorners; the corner permutation is shared since it is
/// tracked in the UD frame only.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CoordCube {
    /// twist of corners relative to the view's axis
    pub twist: [u16; 3],
    /// flip of edges relative to the view's axis
    pub flip: [u16; 3],
    /// position and permutation of the view's slice edges
    pub slice_sorted: [u16; 3],
    /// location of the four U-face corners in the view's frame
    pub udcorners: [u16; 3],
    /// corner permutation
    pub corners: u16,
}

impl Default for CoordCube {
    fn default() -> Self {
        Self {
            twist: [SOLVED; 3],
            flip: [SOLVED; 3],
            slice_sorted: [SOLVED; 3],
            udcorners: [SOLVED; 3],
            corners: SOLVED,
        }
    }
}

impl fmt::Display for CoordCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (a, name) in ["UD", "RL", "FB"].iter().enumerate() {
            writeln!(
                f,
                "({}_twist: {}, {}_flip: {}, {}_slice_sorted: {}, {}_udcorners: {})",
                name,
                self.twist[a],
                name,
                self.flip[a],
                name,
                self.slice_sorted[a],
                name,
                self.udcorners[a]
            )?;
        }
        write!(f, "(corners: {})", self.corners)
    }
}

impl CoordCube {
    /// Build a CoordCube from a CubieCube.
    ///
    /// The RL and FB views are obtained by conjugating the cube with the 120°
    /// rotations sc[16] and sc[32] before reading the coordinates.
    pub fn from_cubie(cc: &CubieCube, sy: &SymmetriesTables) -> Result<Self, Error> {
        cc.verify()?;

        let mut twist = [0; 3];
        let mut flip = [0; 3];
        let mut slice_sorted = [0; 3];
        let mut udcorners = [0; 3];

        for a in [UD, RL, FB] {
            let view = match a {
                UD => *cc,
                _ => {
                    // sc[16]*cc*sc[32] for RL, sc[32]*cc*sc[16] for FB
                    let rot = if a == RL { 16 } else { 32 };
                    let mut ss = sy.sc[rot];
                    ss.multiply(*cc);
                    ss.multiply(sy.sc[sy.inv_idx[rot] as usize]);
                    ss
                }
            };
            twist[a] = view.get_twist();
            flip[a] = view.get_flip();
            slice_sorted[a] = view.get_slice_sorted();
            udcorners[a] = view.get_udcorners();
        }

        Ok(Self {
            twist,
            flip,
            slice_sorted,
            udcorners,
            corners: cc.get_corners(),
        })
    }

    /// Update the coordinates of all three views when move m is applied.
    ///
    /// The UD view advances with m itself, the RL and FB views with the move as
    /// seen from their rotated frames.
    pub fn move_coords(&mut self, m: Move, sy: &SymmetriesTables, mv: &MoveTables) {
        for a in [UD, RL, FB] {
            let ma = sy.conj_move[N_MOVE * 16 * a + m as usize] as usize;
            self.twist[a] = mv.twist_move[N_MOVE * self.twist[a] as usize + ma];
            self.flip[a] = mv.flip_move[N_MOVE * self.flip[a] as usize + ma];
            self.slice_sorted[a] =
                mv.slice_sorted_move[N_MOVE * self.slice_sorted[a] as usize + ma];
            self.udcorners[a] = mv.udcorners_move[N_MOVE * self.udcorners[a] as usize + ma];
        }
        self.corners = mv.corners_move[N_MOVE * self.corners as usize + m as usize];
    }

    /// Compute the distance of one view to the subgroup where
    /// flip = slice_sorted = twist = 0 and the U-face corners are home.
    ///
    /// The pruning table stores the distance only modulo 3, so the absolute
    /// value is recovered by walking down: from the current state repeatedly
    /// take any move whose successor entry is smaller modulo 3. Every such step
    /// decreases the distance by exactly one.
    pub fn fsstc_depth(
        &self,
        a: usize,
        sy: &SymmetriesTables,
        mv: &MoveTables,
        pr: &PruningTables,
    ) -> u16 {
        let mut twist = self.twist[a];
        let mut flip = self.flip[a];
        let mut slicesorted = self.slice_sorted[a];
        let mut udcorners = self.udcorners[a];

        let mut depth_mod3 = fsstc_slot_depth3(twist, flip, slicesorted, udcorners, sy, pr);
        let mut depth = 0;
        while twist != SOLVED || flip != SOLVED || slicesorted != SOLVED || udcorners != SOLVED {
            if depth_mod3 == 0 {
                depth_mod3 = 3;
            }
            for m in ALL_MOVES {
                let twist1 = mv.twist_move[N_MOVE * twist as usize + m as usize];
                let flip1 = mv.flip_move[N_MOVE * flip as usize + m as usize];
                let slicesorted1 =
                    mv.slice_sorted_move[N_MOVE * slicesorted as usize + m as usize];
                let udcorners1 = mv.udcorners_move[N_MOVE * udcorners as usize + m as usize];
                if fsstc_slot_depth3(twist1, flip1, slicesorted1, udcorners1, sy, pr)
                    == depth_mod3 - 1
                {
                    depth += 1;
                    twist = twist1;
                    flip = flip1;
                    slicesorted = slicesorted1;
                    udcorners = udcorners1;
                    depth_mod3 -= 1;
                    break;
                }
            }
        }
        depth
    }
}

/// Look up the mod 3 distance of a raw (twist, flip, slice_sorted, udcorners)
/// tuple: reduce flipslicesorted to its class and conjugate the twist and the
/// udcorners coordinate into the frame of the class representant.
pub fn fsstc_slot_depth3(
    twist: u16,
    flip: u16,
    slicesorted: u16,
    udcorners: u16,
    sy: &SymmetriesTables,
    pr: &PruningTables,
) -> u32 {
    let flipslicesorted = N_FLIP * slicesorted as usize + flip as usize;
    let classidx = sy.flipslicesorted_classidx[flipslicesorted] as usize;
    let s = sy.flipslicesorted_sym[flipslicesorted] as usize;
    pr.get_fsstc_depth3(
        sy.udcorners_conj[((udcorners as usize) << 4) + s] as usize,
        N_TWIST * classidx + sy.twist_conj[((twist as usize) << 4) + s] as usize,
    )
}

#[cfg(test)]
mod test {
    use crate::coord::*;
    use crate::moves::Move;

    #[test]
    fn test_default() {
        let cdc = CoordCube::default();
        assert_eq!(cdc.twist, [0; 3]);
        assert_eq!(cdc.flip, [0; 3]);
        assert_eq!(cdc.slice_sorted, [0; 3]);
        assert_eq!(cdc.udcorners, [0; 3]);
        assert_eq!(cdc.corners, 0);
    }

    #[test]
    #[ignore = "builds the flipslicesorted symmetry tables"]
    fn test_coordcube_views() {
        let sy = SymmetriesTables::new();
        let mv = MoveTables::new();

        let cc = CubieCube::default();
        let cdc = CoordCube::from_cubie(&cc, &sy).unwrap();
        assert_eq!(cdc, CoordCube::default());

        // advancing the coordinates move by move matches projecting the moved cube
        let moves = vec![
            Move::R,
            Move::U,
            Move::F3,
            Move::D2,
            Move::B,
            Move::L3,
            Move::U2,
            Move::R2,
        ];
        let mut cdc = CoordCube::from_cubie(&cc, &sy).unwrap();
        let mut cc = CubieCube::default();
        for m in moves {
            cdc.move_coords(m, &sy, &mv);
            cc = cc.apply_move(m);
            let projected = CoordCube::from_cubie(&cc, &sy).unwrap();
            assert_eq!(cdc, projected);
        }
    }
}
