//! The cubie-level cube model: permutation/orientation arrays and the six
//! quarter-turn mutators described in the move-semantics table.

use crate::error::Error;
use crate::moves::Move;

/// Corner cubie identities, indexed the same way as their solved home slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    URF = 0,
    UFL = 1,
    ULB = 2,
    UBR = 3,
    DFR = 4,
    DLF = 5,
    DBL = 6,
    DRB = 7,
}

impl TryFrom<u8> for Corner {
    type Error = Error;
    fn try_from(v: u8) -> Result<Self, Error> {
        use Corner::*;
        Ok(match v {
            0 => URF,
            1 => UFL,
            2 => ULB,
            3 => UBR,
            4 => DFR,
            5 => DLF,
            6 => DBL,
            7 => DRB,
            _ => return Err(Error::UnmatchedCubie),
        })
    }
}

/// Edge cubie identities. Slot order matches the data-model slot labels:
/// UF, UL, UB, UR, FR, FL, BL, BR, DF, DL, DB, DR. Edges 4..7 (FR,FL,BL,BR)
/// are the UD-slice edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    UF = 0,
    UL = 1,
    UB = 2,
    UR = 3,
    FR = 4,
    FL = 5,
    BL = 6,
    BR = 7,
    DF = 8,
    DL = 9,
    DB = 10,
    DR = 11,
}

impl TryFrom<u8> for Edge {
    type Error = Error;
    fn try_from(v: u8) -> Result<Self, Error> {
        use Edge::*;
        Ok(match v {
            0 => UF,
            1 => UL,
            2 => UB,
            3 => UR,
            4 => FR,
            5 => FL,
            6 => BL,
            7 => BR,
            8 => DF,
            9 => DL,
            10 => DB,
            11 => DR,
            _ => return Err(Error::UnmatchedCubie),
        })
    }
}

impl Edge {
    /// Whether this edge cubie is one of the four UD-slice edges (FR,FL,BL,BR).
    pub fn is_slice_edge(self) -> bool {
        matches!(self, Edge::FR | Edge::FL | Edge::BL | Edge::BR)
    }
}

/// Cubie-level cube state: a corner permutation/orientation pair and an edge
/// permutation/orientation pair. ~40 bytes, `Copy`, freely cloned during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ],
    co: [0; 8],
    ep: [
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::UR,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
    ],
    eo: [0; 12],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

/// Rotate four slots of an array by one: the value at `slots[3]` moves into
/// `slots[0]`, and each later-listed slot takes the previous listed slot's
/// old value.
fn rotate4<T: Copy>(arr: &mut [T], slots: [usize; 4]) {
    let tmp = arr[slots[3]];
    arr[slots[3]] = arr[slots[2]];
    arr[slots[2]] = arr[slots[1]];
    arr[slots[1]] = arr[slots[0]];
    arr[slots[0]] = tmp;
}

impl CubieCube {
    pub fn is_solved(&self) -> bool {
        *self == SOLVED_CUBIE_CUBE
    }

    fn apply_corner_cycle(&mut self, slots: [usize; 4], deltas: [u8; 4]) {
        rotate4(&mut self.cp, slots);
        rotate4(&mut self.co, slots);
        for (k, &slot) in slots.iter().enumerate() {
            self.co[slot] = (self.co[slot] + deltas[k]) % 3;
        }
    }

    fn apply_edge_cycle(&mut self, slots: [usize; 4], flip: bool) {
        rotate4(&mut self.ep, slots);
        rotate4(&mut self.eo, slots);
        if flip {
            for &slot in &slots {
                self.eo[slot] ^= 1;
            }
        }
    }

    pub fn turn_u(&mut self) {
        self.apply_corner_cycle([0, 3, 2, 1], [0, 0, 0, 0]);
        self.apply_edge_cycle([0, 3, 2, 1], false);
    }

    pub fn turn_d(&mut self) {
        self.apply_corner_cycle([4, 5, 6, 7], [0, 0, 0, 0]);
        self.apply_edge_cycle([8, 9, 10, 11], false);
    }

    pub fn turn_r(&mut self) {
        self.apply_corner_cycle([0, 4, 7, 3], [1, 2, 1, 2]);
        self.apply_edge_cycle([3, 4, 11, 7], false);
    }

    pub fn turn_l(&mut self) {
        self.apply_corner_cycle([1, 2, 6, 5], [2, 1, 2, 1]);
        self.apply_edge_cycle([1, 6, 9, 5], false);
    }

    pub fn turn_f(&mut self) {
        self.apply_corner_cycle([0, 1, 5, 4], [2, 1, 2, 1]);
        self.apply_edge_cycle([0, 5, 8, 4], true);
    }

    pub fn turn_b(&mut self) {
        self.apply_corner_cycle([2, 3, 7, 6], [2, 1, 2, 1]);
        self.apply_edge_cycle([2, 7, 10, 6], true);
    }

    /// Apply a single quarter-turn in place.
    pub fn apply_move(&mut self, m: Move) {
        match m {
            Move::U => self.turn_u(),
            Move::D => self.turn_d(),
            Move::L => self.turn_l(),
            Move::R => self.turn_r(),
            Move::F => self.turn_f(),
            Move::B => self.turn_b(),
        }
    }

    /// Apply a sequence of quarter-turns in place.
    pub fn multiply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Return a copy with a sequence of quarter-turns applied.
    pub fn apply_moves(&self, moves: &[Move]) -> CubieCube {
        let mut c = *self;
        c.multiply_moves(moves);
        c
    }

    fn corner_parity(&self) -> bool {
        let mut inversions = 0;
        for i in 0..8 {
            for j in (i + 1)..8 {
                if self.cp[i] as u8 > self.cp[j] as u8 {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    fn edge_parity(&self) -> bool {
        let mut inversions = 0;
        for i in 0..12 {
            for j in (i + 1)..12 {
                if self.ep[i] as u8 > self.ep[j] as u8 {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Check the three reachability invariants from the data model: orientation
    /// sums and permutation parity match. Permutation validity (each cubie
    /// appears exactly once) is guaranteed by the `[Corner; 8]`/`[Edge; 12]`
    /// representation only if constructed from a true permutation; callers
    /// that build a `CubieCube` from untrusted input (the facelet parser)
    /// must additionally confirm every id 0..7 / 0..11 appears exactly once.
    pub fn verify(&self) -> Result<(), Error> {
        let mut seen_c = [false; 8];
        for &c in &self.cp {
            seen_c[c as usize] = true;
        }
        if seen_c.iter().any(|&s| !s) {
            return Err(Error::InfeasibleScramble);
        }
        let mut seen_e = [false; 12];
        for &e in &self.ep {
            seen_e[e as usize] = true;
        }
        if seen_e.iter().any(|&s| !s) {
            return Err(Error::InfeasibleScramble);
        }
        let co_sum: u32 = self.co.iter().map(|&x| x as u32).sum();
        if co_sum % 3 != 0 {
            return Err(Error::InfeasibleScramble);
        }
        let eo_sum: u32 = self.eo.iter().map(|&x| x as u32).sum();
        if eo_sum % 2 != 0 {
            return Err(Error::InfeasibleScramble);
        }
        if self.corner_parity() != self.edge_parity() {
            return Err(Error::InfeasibleScramble);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn solved_is_solved() {
        assert!(CubieCube::default().is_solved());
    }

    #[test]
    fn solved_verifies() {
        assert!(CubieCube::default().verify().is_ok());
    }

    #[test]
    fn every_quarter_turn_has_order_four() {
        for &m in &[U, D, L, R, F, B] {
            let mut c = CubieCube::default();
            for _ in 0..4 {
                c.apply_move(m);
            }
            assert!(c.is_solved(), "{:?}^4 should be identity", m);
        }
    }

    #[test]
    fn every_quarter_turn_preserves_invariants() {
        for &m in &[U, D, L, R, F, B] {
            let mut c = CubieCube::default();
            c.apply_move(m);
            assert!(c.verify().is_ok(), "{:?} should preserve invariants", m);
        }
    }

    #[test]
    fn triple_application_is_inverse() {
        for &m in &[U, D, L, R, F, B] {
            let mut c = CubieCube::default();
            c.apply_move(m);
            c.apply_move(m);
            c.apply_move(m);
            c.apply_move(m);
            assert!(c.is_solved());
        }
    }

    #[test]
    fn r_once_is_not_solved() {
        let mut c = CubieCube::default();
        c.apply_move(R);
        assert!(!c.is_solved());
    }

    #[test]
    fn scramble_then_reverse_is_identity() {
        let moves = [U, R, F, D, L, B, U, U, R, F, F, F];
        let mut c = CubieCube::default();
        c.multiply_moves(&moves);
        for &m in moves.iter().rev() {
            c.apply_move(m);
            c.apply_move(m);
            c.apply_move(m);
        }
        assert!(c.is_solved());
    }
}
