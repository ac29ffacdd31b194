use crate::constants::*;
use crate::cubie::{Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::{decode_table, write_table};

/// 120° rotation about the long diagonal through the URF and DBL corners.
pub const ROT_URF3: CubieCube = CubieCube {
    cp: [URF, DFR, DLF, UFL, UBR, DRB, DBL, ULB],
    co: [1, 2, 1, 2, 2, 1, 2, 1],
    ep: [UF, FR, DF, FL, UB, BR, DB, BL, UR, DR, DL, UL],
    eo: [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
};

/// 180° rotation about the axis through the F and B centers.
pub const ROT_F2: CubieCube = CubieCube {
    cp: [DLF, DFR, DRB, DBL, UFL, URF, UBR, ULB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [DL, DF, DR, DB, UL, UF, UR, UB, FL, FR, BR, BL],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// 90° rotation about the axis through the U and D centers.
pub const ROT_U4: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DRB, DFR, DLF, DBL],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DB, DR, DF, DL, BR, FR, FL, BL],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
};

/// Reflection at the plane through the U, D, F and B centers.
pub const MIRR_LR2: CubieCube = CubieCube {
    cp: [UFL, URF, UBR, ULB, DLF, DFR, DRB, DBL],
    co: [3, 3, 3, 3, 3, 3, 3, 3],
    ep: [UL, UF, UR, UB, DL, DF, DR, DB, FL, FR, BR, BL],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The 48 cube symmetries as cubie cubes, generated as products of the four
/// basic symmetries.
///
/// Indices 0..16 form the subgroup D4h which keeps the UD-axis fixed.
/// sym_cubes()[16] and sym_cubes()[32] are the 120° and 240° rotations about the
/// URF-DBL axis which move the RL-slice and the FB-slice into the UD-slice.
pub fn sym_cubes() -> Vec<CubieCube> {
    let mut sc = Vec::with_capacity(N_SYM);
    let mut cc = CubieCube::default();
    for _urf3 in 0..3 {
        for _f2 in 0..2 {
            for _u4 in 0..4 {
                for _lr2 in 0..2 {
                    sc.push(cc);
                    cc.multiply(MIRR_LR2);
                }
                cc.multiply(ROT_U4);
            }
            cc.multiply(ROT_F2);
        }
        cc.multiply(ROT_URF3);
    }
    sc
}

/// For each symmetry the index of its inverse symmetry.
pub fn inverse_idx(sc: &[CubieCube]) -> [u8; N_SYM] {
    let mut inv_idx = [0; N_SYM];
    for j in 0..N_SYM {
        for i in 0..N_SYM {
            let mut cc = sc[j];
            cc.corner_multiply(sc[i]);
            if cc.cp[URF as usize] == URF && cc.cp[UFL as usize] == UFL && cc.cp[ULB as usize] == ULB
            {
                inv_idx[j] = i as u8;
                break;
            }
        }
    }
    inv_idx
}

/// conj_move[N_MOVE * s + m] is the move s*m*s^-1, the move m viewed from the
/// symmetry s.
pub fn conj_move_table() -> Vec<u16> {
    let sc = sym_cubes();
    let inv_idx = inverse_idx(&sc);
    let move_cubes: Vec<CubieCube> = ALL_MOVES
        .iter()
        .map(|&m| CubieCube::default().apply_move(m))
        .collect();
    let mut conj_move = vec![0; N_MOVE * N_SYM];
    for s in 0..N_SYM {
        for (m, mc) in move_cubes.iter().enumerate() {
            let mut ss = sc[s];
            ss.multiply(*mc); // s*m
            ss.multiply(sc[inv_idx[s] as usize]); // s*m*s^-1
            for (m2, mc2) in move_cubes.iter().enumerate() {
                if ss == *mc2 {
                    conj_move[N_MOVE * s + m] = m2 as u16;
                }
            }
        }
    }
    conj_move
}

/// Generate the table for the conjugation of the twist by a symmetry of D4h.
///
/// conj_twist()[(t << 4) + s] = twist of the cube s*T*s^-1 where T carries twist t.
pub fn conj_twist() -> Result<Vec<u16>, Error> {
    let fname = "tables/conj_twist";
    let conj_twist_table = std::fs::read(fname).unwrap_or("".into());
    let mut twist_conj = vec![0; N_TWIST * N_SYM_D4H];
    if conj_twist_table.is_empty() {
        println!("Creating {} table...", fname);
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        let mut cc = CubieCube::default();
        for t in 0..N_TWIST {
            cc.set_twist(t as u16);
            for s in 0..N_SYM_D4H {
                let mut ss = sc[s]; // copy cube
                ss.corner_multiply(cc); // s*t
                ss.corner_multiply(sc[inv_idx[s] as usize]); // s*t*s^-1
                twist_conj[(t << 4) + s] = ss.get_twist();
            }
        }
        write_table(fname, &twist_conj)?;
    } else {
        twist_conj = decode_table(&conj_twist_table)?;
    }
    Ok(twist_conj)
}

/// Generate the table for the conjugation of the udcorners coordinate by a
/// symmetry of D4h. The conjugation is well defined on the U/D quotient since
/// every symmetry either keeps or swaps the two corner location sets.
///
/// conj_udcorners()[(u << 4) + s] = udcorners of the cube s*C*s^-1.
pub fn conj_udcorners() -> Vec<u16> {
    let sc = sym_cubes();
    let inv_idx = inverse_idx(&sc);
    let mut udcorners_conj = vec![0; N_UDCORNERS * N_SYM_D4H];
    let mut cc = CubieCube::default();
    for u in 0..N_UDCORNERS {
        cc.set_udcorners(u as u16);
        for s in 0..N_SYM_D4H {
            let mut ss = sc[s]; // copy cube
            ss.corner_multiply(cc); // s*u
            ss.corner_multiply(sc[inv_idx[s] as usize]); // s*u*s^-1
            udcorners_conj[(u << 4) + s] = ss.get_udcorners();
        }
    }
    udcorners_conj
}

/// The symmetry reduced flipslicesorted coordinate.
pub struct FlipSliceSortedSyms {
    /// class index of the D4h equivalence class of a raw coordinate
    pub classidx: Vec<u32>,
    /// symmetry s with raw = s^-1 * rep * s
    pub sym: Vec<u8>,
    /// smallest raw coordinate of each class, the representant
    pub rep: Vec<u32>,
}

/// Generate/load the tables to handle the symmetry reduced flipslicesorted
/// coordinate. All 2^11 * 11880 raw coordinates are scanned in increasing order,
/// each new class is conjugated by the 16 symmetries of D4h and the images are
/// assigned to the class of their representant.
pub fn flipslicesorted_syms() -> Result<FlipSliceSortedSyms, Error> {
    let fname_classidx = "tables/fs24_classidx";
    let fname_sym = "tables/fs24_sym";
    let fname_rep = "tables/fs24_rep";
    let classidx_table = std::fs::read(fname_classidx).unwrap_or("".into());
    let sym_table = std::fs::read(fname_sym).unwrap_or("".into());
    let rep_table = std::fs::read(fname_rep).unwrap_or("".into());

    if classidx_table.is_empty() || sym_table.is_empty() || rep_table.is_empty() {
        println!("Creating {} tables...", fname_classidx);
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        let mut classidx = vec![u32::MAX; N_FLIPSLICESORTED];
        let mut sym = vec![0; N_FLIPSLICESORTED];
        let mut rep = Vec::with_capacity(N_FLIPSLICESORTED_CLASS);
        let mut classcount = 0;
        let mut cc = CubieCube::default();
        for slicesorted in 0..N_SLICE_SORTED {
            if (slicesorted + 1) % 400 == 0 {
                print!(".");
            }
            cc.set_slice_sorted(slicesorted as u16);
            for flip in 0..N_FLIP {
                cc.set_flip(flip as u16);
                let idx = N_FLIP * slicesorted + flip;
                if classidx[idx] != u32::MAX {
                    continue;
                }
                classidx[idx] = classcount;
                sym[idx] = 0;
                rep.push(idx as u32);
                for s in 0..N_SYM_D4H {
                    let mut ss = sc[inv_idx[s] as usize]; // copy cube
                    ss.edge_multiply(cc); // s^-1*cc
                    ss.edge_multiply(sc[s]); // s^-1*cc*s
                    let idx_new =
                        N_FLIP * ss.get_slice_sorted() as usize + ss.get_flip() as usize;
                    if classidx[idx_new] == u32::MAX {
                        classidx[idx_new] = classcount;
                        sym[idx_new] = s as u8;
                    }
                }
                classcount += 1;
            }
        }
        println!();
        write_table(fname_classidx, &classidx)?;
        write_table(fname_sym, &sym)?;
        write_table(fname_rep, &rep)?;
        Ok(FlipSliceSortedSyms { classidx, sym, rep })
    } else {
        Ok(FlipSliceSortedSyms {
            classidx: decode_table(&classidx_table)?,
            sym: decode_table(&sym_table)?,
            rep: decode_table(&rep_table)?,
        })
    }
}

/// All symmetry related tables collected.
pub struct SymmetriesTables {
    pub sc: Vec<CubieCube>,
    pub inv_idx: [u8; N_SYM],
    pub conj_move: Vec<u16>,
    pub twist_conj: Vec<u16>,
    pub udcorners_conj: Vec<u16>,
    pub flipslicesorted_classidx: Vec<u32>,
    pub flipslicesorted_sym: Vec<u8>,
    pub flipslicesorted_rep: Vec<u32>,
}

impl SymmetriesTables {
    pub fn new() -> Self {
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        let fs = flipslicesorted_syms().unwrap();
        Self {
            sc,
            inv_idx,
            conj_move: conj_move_table(),
            twist_conj: conj_twist().unwrap(),
            udcorners_conj: conj_udcorners(),
            flipslicesorted_classidx: fs.classidx,
            flipslicesorted_sym: fs.sym,
            flipslicesorted_rep: fs.rep,
        }
    }
}

impl Default for SymmetriesTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::constants::*;
    use crate::cubie::CubieCube;
    use crate::moves::Move;
    use crate::symmetries::*;

    #[test]
    fn test_sym_cubes() {
        let sc = sym_cubes();
        assert_eq!(sc.len(), 48);
        assert_eq!(sc[0], CubieCube::default());
        // sc[16] and sc[32] are the two 120° rotations, inverse to each other
        let mut cc = sc[16];
        cc.multiply(sc[32]);
        assert_eq!(cc, CubieCube::default());
        let mut cc = sc[16];
        cc.multiply(sc[16]);
        assert_eq!(cc, sc[32]);
        // the first 16 symmetries keep the UD-slice
        for s in 0..16 {
            assert_eq!(sc[s].get_slice_sorted() / 24, 0);
        }
    }

    #[test]
    fn test_inverse_idx() {
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        assert_eq!(inv_idx[0], 0);
        for s in 0..N_SYM {
            let mut cc = sc[s];
            cc.multiply(sc[inv_idx[s] as usize]);
            assert_eq!(cc, CubieCube::default());
        }
        // D4h is closed under inversion
        for s in 0..N_SYM_D4H {
            assert!((inv_idx[s] as usize) < N_SYM_D4H);
        }
    }

    #[test]
    fn test_conj_move() {
        let conj_move = conj_move_table();
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        // conjugation by the identity changes nothing
        for m in 0..N_MOVE {
            assert_eq!(conj_move[m] as usize, m);
        }
        // conjugating by s and then by s^-1 gives the move back
        for s in 0..N_SYM {
            for m in 0..N_MOVE {
                let m1 = conj_move[N_MOVE * s + m] as usize;
                let m2 = conj_move[N_MOVE * inv_idx[s] as usize + m1] as usize;
                assert_eq!(m2, m);
            }
        }
        // the 120° rotation maps the U face to the F..., R... axes
        assert_eq!(conj_move[N_MOVE * 16 + Move::U as usize], Move::F as u16);
    }

    #[test]
    fn test_conj_twist() {
        let twist_conj = conj_twist().unwrap();
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        for t in 0..N_TWIST {
            assert_eq!(twist_conj[t << 4] as usize, t);
            for s in 0..N_SYM_D4H {
                let t1 = twist_conj[(t << 4) + s] as usize;
                let t2 = twist_conj[(t1 << 4) + inv_idx[s] as usize] as usize;
                assert_eq!(t2, t);
            }
        }
    }

    #[test]
    fn test_conj_udcorners() {
        let udcorners_conj = conj_udcorners();
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        for u in 0..N_UDCORNERS {
            assert_eq!(udcorners_conj[u << 4] as usize, u);
            for s in 0..N_SYM_D4H {
                let u1 = udcorners_conj[(u << 4) + s] as usize;
                let u2 = udcorners_conj[(u1 << 4) + inv_idx[s] as usize] as usize;
                assert_eq!(u2, u);
            }
        }
    }

    #[test]
    #[ignore = "scans all 24330240 raw flipslicesorted coordinates"]
    fn test_flipslicesorted_syms() {
        let fs = flipslicesorted_syms().unwrap();
        assert_eq!(fs.rep.len(), N_FLIPSLICESORTED_CLASS);
        assert_eq!(fs.classidx.len(), N_FLIPSLICESORTED);
        // the representant is the smallest coordinate of its class
        for x in (0..N_FLIPSLICESORTED).step_by(997) {
            let c = fs.classidx[x] as usize;
            assert!(fs.rep[c] as usize <= x);
        }
        // the recorded symmetry maps the representant onto the raw coordinate
        let sc = sym_cubes();
        let inv_idx = inverse_idx(&sc);
        let mut cc = CubieCube::default();
        for x in (0..N_FLIPSLICESORTED).step_by(99991) {
            let c = fs.classidx[x] as usize;
            let s = fs.sym[x] as usize;
            let rep = fs.rep[c] as usize;
            cc.set_slice_sorted((rep / N_FLIP) as u16);
            cc.set_flip((rep % N_FLIP) as u16);
            let mut ss = sc[inv_idx[s] as usize];
            ss.edge_multiply(cc);
            ss.edge_multiply(sc[s]); // s^-1*rep*s
            let image = N_FLIP * ss.get_slice_sorted() as usize + ss.get_flip() as usize;
            assert_eq!(image, x);
        }
    }
}
