use std::cmp::max;
use std::time::Instant;

use crate::constants::*;
use crate::coord::{self, CoordCube, FB, RL, UD};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;
use crate::scramble::scramble_from_str;
use crate::symmetries::SymmetriesTables;

/// All immutable tables of the solver. They are created (or loaded from the
/// working directory) on the first solve and shared by all later solves.
pub struct Tables {
    pub sy: SymmetriesTables,
    pub mv: MoveTables,
    pub pr: PruningTables,
}

impl Tables {
    pub fn new() -> Self {
        let sy = SymmetriesTables::new();
        let mv = MoveTables::new();
        let mut pr = PruningTables::default();
        pr.create_cornerprun_table(&mv).unwrap();
        pr.create_fsstc_table(&sy, &mv).unwrap();
        Self { sy, mv, pr }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref TABLES: Tables = Tables::new();
}

/// The coordinates of one rotated view inside a search node.
#[derive(Debug, Clone, Copy)]
struct AxisCoords {
    twist: u16,
    flip: u16,
    slice_sorted: u16,
    udcorners: u16,
    /// absolute distance of this view to its solved subgroup
    dist: u16,
}

/// One node of the iterative deepening search: the three view coordinate
/// records plus the shared corner permutation.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    axes: [AxisCoords; 3],
    corners: u16,
}

/// Single-phase IDA* solver. The bound starts at the largest of the three view
/// distances and grows by one per failed iteration, so the first maneuver found
/// is optimal.
pub struct OptimalSolver<'a> {
    tables: &'a Tables,
    sofar: Vec<Move>,
    nodecount: u64,
}

impl<'a> OptimalSolver<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Self {
            tables,
            sofar: Vec::new(),
            nodecount: 0,
        }
    }

    /// Solve the cube, returning the optimal maneuver.
    pub fn solve(&mut self, cc: &CubieCube) -> Result<Vec<Move>, Error> {
        let coc = CoordCube::from_cubie(cc, &self.tables.sy)?;

        let mut axes = [AxisCoords {
            twist: 0,
            flip: 0,
            slice_sorted: 0,
            udcorners: 0,
            dist: 0,
        }; 3];
        for a in [UD, RL, FB] {
            axes[a] = AxisCoords {
                twist: coc.twist[a],
                flip: coc.flip[a],
                slice_sorted: coc.slice_sorted[a],
                udcorners: coc.udcorners[a],
                dist: coc.fsstc_depth(a, &self.tables.sy, &self.tables.mv, &self.tables.pr),
            };
        }
        let root = SearchNode {
            axes,
            corners: coc.corners,
        };

        // lower bound for the distance to the solved cube
        let mut togo = max(axes[UD].dist, max(axes[RL].dist, axes[FB].dist));
        loop {
            self.sofar.clear();
            self.nodecount = 0;
            let s_time = Instant::now();
            if self.search(&root, togo) {
                return Ok(self.sofar.clone());
            }
            if togo > 14 {
                let t = s_time.elapsed().as_secs_f64() + 0.0001;
                println!(
                    "depth {} done in {:.2} s, {} nodes generated, about {} nodes/s",
                    togo,
                    t,
                    self.nodecount,
                    (self.nodecount as f64 / t).round()
                );
            }
            togo += 1;
        }
    }

    fn search(&mut self, node: &SearchNode, togo: u16) -> bool {
        if togo == 0 {
            // the three view distances are zero here, else this depth would
            // have been pruned, so the cube is solved iff the corners are
            return node.corners == SOLVED;
        }

        for m in ALL_MOVES {
            if let Some(&p) = self.sofar.last() {
                let diff = p as i8 / 3 - m as i8 / 3;
                if diff == 0 || diff == 3 {
                    // successive moves on the same face or on the same axis in the wrong order
                    continue;
                }
            }
            self.nodecount += 1;

            let sy = &self.tables.sy;
            let mv = &self.tables.mv;
            let pr = &self.tables.pr;

            let mut axes = node.axes;
            for (a, axis) in axes.iter_mut().enumerate() {
                let ma = sy.conj_move[N_MOVE * 16 * a + m as usize] as usize;
                let twist1 = mv.twist_move[N_MOVE * axis.twist as usize + ma];
                let flip1 = mv.flip_move[N_MOVE * axis.flip as usize + ma];
                let slice_sorted1 =
                    mv.slice_sorted_move[N_MOVE * axis.slice_sorted as usize + ma];
                let udcorners1 = mv.udcorners_move[N_MOVE * axis.udcorners as usize + ma];

                let dist1_mod3 =
                    coord::fsstc_slot_depth3(twist1, flip1, slice_sorted1, udcorners1, sy, pr);
                let dist1 = pr.distance[3 * axis.dist as usize + dist1_mod3 as usize];

                *axis = AxisCoords {
                    twist: twist1,
                    flip: flip1,
                    slice_sorted: slice_sorted1,
                    udcorners: udcorners1,
                    dist: dist1,
                };
            }

            let mut dist_new = max(axes[UD].dist, max(axes[RL].dist, axes[FB].dist));
            if axes[UD].dist != 0
                && axes[UD].dist == axes[RL].dist
                && axes[RL].dist == axes[FB].dist
            {
                // three equal nonzero view distances cannot all decrease with a
                // single face turn
                dist_new += 1;
            }
            let corners1 = mv.corners_move[N_MOVE * node.corners as usize + m as usize];
            dist_new = max(dist_new, pr.corner_depth[corners1 as usize] as u16);

            if dist_new >= togo {
                // impossible to reach the solved cube in togo - 1 moves
                continue;
            }

            self.sofar.push(m);
            let child = SearchNode {
                axes,
                corners: corners1,
            };
            if self.search(&child, togo - 1) {
                return true;
            }
            self.sofar.pop();
        }
        false
    }
}

/// Format a maneuver the way the solver reports it: the moves by name, then the
/// number of face turns and a `*` marking the maneuver as proven optimal.
pub fn maneuver_to_str(moves: &[Move]) -> String {
    let mut s = String::new();
    for m in moves {
        s += &format!("{:?} ", m);
    }
    format!("{}({}f*)", s, moves.len())
}

/// Solve a cube defined by its cube definition string.
///
/// The format of the string is given in the Facelet module. The solution is
/// returned like `U2 R3 F (3f*)`; invalid or unsolvable cubes give the
/// corresponding error.
pub fn solve(cubestring: &str) -> Result<String, Error> {
    // validate before the tables are touched, an invalid input must not
    // trigger the table build
    let fc = FaceCube::try_from(cubestring)?;
    let cc = CubieCube::try_from(&fc)?;
    cc.verify()?;

    solve_cubie(&cc, &TABLES)
}

/// Solve a cube given as a scramble maneuver applied to the solved cube.
pub fn solve_scramble(s: &str) -> Result<String, Error> {
    let scramble = scramble_from_str(s)?;
    let cc = CubieCube::from(&scramble);

    solve_cubie(&cc, &TABLES)
}

/// Solve a cube on the cubie level against an explicit table set.
pub fn solve_cubie(cc: &CubieCube, tables: &Tables) -> Result<String, Error> {
    let mut solver = OptimalSolver::new(tables);
    let solution = solver.solve(cc)?;
    Ok(maneuver_to_str(&solution))
}

#[cfg(test)]
mod test {
    use crate::facelet::FaceCube;
    use crate::solver::*;

    #[test]
    fn test_maneuver_to_str() {
        assert_eq!(maneuver_to_str(&[]), "(0f*)");
        assert_eq!(maneuver_to_str(&[Move::U3]), "U3 (1f*)");
        assert_eq!(
            maneuver_to_str(&[Move::R, Move::F2, Move::L3]),
            "R F2 L3 (3f*)"
        );
    }

    #[test]
    fn test_solve_rejects_invalid_input() {
        // scenario: empty string
        assert!(matches!(solve(""), Err(Error::InvalidFaceletString)));
        // 54 legal letters but ten U facelets
        let s = "UUUUUUUUUURRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        assert!(matches!(solve(s), Err(Error::InvalidFaceletString)));
    }

    #[test]
    fn test_solve_rejects_unsolvable_cube() {
        // scenario: one corner twisted clockwise
        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        let s = FaceCube::from(&cc).to_string();
        assert!(matches!(solve(&s), Err(Error::TwistError)));
    }

    #[test]
    #[ignore = "requires the 29 GB fsstc pruning table"]
    fn test_solve_solved_cube() {
        let s = FaceCube::default().to_string();
        assert_eq!(solve(&s).unwrap(), "(0f*)");
    }

    #[test]
    #[ignore = "requires the 29 GB fsstc pruning table"]
    fn test_solve_single_move() {
        // a cube scrambled with U is solved by U3
        let cc = CubieCube::default().apply_move(Move::U);
        let s = FaceCube::from(&cc).to_string();
        assert_eq!(solve(&s).unwrap(), "U3 (1f*)");
    }

    #[test]
    #[ignore = "requires the 29 GB fsstc pruning table"]
    fn test_solve_short_scrambles_optimally() {
        // scrambles with known optimal length
        for (scr, len) in [
            ("U", 1),
            ("R2", 1),
            ("R U", 2),
            ("F R3 U2", 3),
            ("R U R3 U3", 4),
        ] {
            let result = solve_scramble(scr).unwrap();
            assert!(result.ends_with(&format!("({}f*)", len)), "{}", result);
        }
    }

    #[test]
    #[ignore = "requires the 29 GB fsstc pruning table"]
    fn test_solve_roundtrip() {
        use std::str::FromStr;
        // a 10 move scramble must give a maneuver of length <= 10 which
        // restores the solved cube
        let scr = "R U2 F3 D B2 L F U3 R2 B";
        let scramble = crate::scramble::scramble_from_str(scr).unwrap();
        let cc = CubieCube::from(&scramble);
        let result = solve_scramble(scr).unwrap();

        let tokens: Vec<&str> = result.split_whitespace().collect();
        let moves: Vec<Move> = tokens[..tokens.len() - 1]
            .iter()
            .map(|t| Move::from_str(t).unwrap())
            .collect();
        assert!(moves.len() <= 10);
        assert_eq!(cc.apply_moves(&moves), CubieCube::default());
    }

    #[test]
    #[ignore = "requires the 29 GB fsstc pruning table"]
    fn test_solve_superflip() {
        use std::str::FromStr;
        // the superflip, all twelve edges flipped in place, needs 20 moves
        let mut cc = CubieCube::default();
        cc.eo = [1; 12];
        let s = FaceCube::from(&cc).to_string();
        let result = solve(&s).unwrap();
        assert!(result.ends_with("(20f*)"), "{}", result);

        let tokens: Vec<&str> = result.split_whitespace().collect();
        let moves: Vec<Move> = tokens[..tokens.len() - 1]
            .iter()
            .map(|t| Move::from_str(t).unwrap())
            .collect();
        assert_eq!(cc.apply_moves(&moves), CubieCube::default());
    }
}
