//! The move alphabets (`Move` for Phase-1 quarter-turns, `Phase2Move` for the
//! restricted ten-move Phase-2 generator) and the coordinate transition
//! tables built from them.

use std::fmt;
use std::str::FromStr;

use crate::constants::{N_CORNERS, N_FLIP, N_MOVES1, N_MOVES2, N_SLICE, N_TWIST, N_UD_EDGES};
use crate::coord::{co_index, cp_index, eo_index, set_co, set_cp, set_eo, set_slice, set_ud8,
    slice_index, ud8_index};
use crate::cubie::CubieCube;
use crate::error::Error;

/// A single 90° clockwise quarter-turn of one face. This is both the unit
/// the Phase-1 search explores and the unit of the emitted solution string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    U,
    D,
    L,
    R,
    F,
    B,
}

pub const ALL_MOVES: [Move; 6] = [Move::U, Move::D, Move::L, Move::R, Move::F, Move::B];

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Move::U => 'U',
            Move::D => 'D',
            Move::L => 'L',
            Move::R => 'R',
            Move::F => 'F',
            Move::B => 'B',
        };
        write!(f, "{c}")
    }
}

impl FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "U" => Ok(Move::U),
            "D" => Ok(Move::D),
            "L" => Ok(Move::L),
            "R" => Ok(Move::R),
            "F" => Ok(Move::F),
            "B" => Ok(Move::B),
            _ => Err(Error::InvalidMove(s.to_string())),
        }
    }
}

/// An atomic move of the restricted Phase-2 generator
/// `{U, U2, U3, D, D2, D3, R2, L2, F2, B2}`, each expanding to 1-3 quarter-turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase2Move {
    U,
    U2,
    U3,
    D,
    D2,
    D3,
    R2,
    L2,
    F2,
    B2,
}

pub const PHASE2_MOVES: [Phase2Move; 10] = [
    Phase2Move::U,
    Phase2Move::U2,
    Phase2Move::U3,
    Phase2Move::D,
    Phase2Move::D2,
    Phase2Move::D3,
    Phase2Move::R2,
    Phase2Move::L2,
    Phase2Move::F2,
    Phase2Move::B2,
];

impl Phase2Move {
    /// Expand this atomic move into the quarter-turns it represents.
    pub fn quarter_turns(self) -> &'static [Move] {
        use Move::*;
        match self {
            Phase2Move::U => &[U],
            Phase2Move::U2 => &[U, U],
            Phase2Move::U3 => &[U, U, U],
            Phase2Move::D => &[D],
            Phase2Move::D2 => &[D, D],
            Phase2Move::D3 => &[D, D, D],
            Phase2Move::R2 => &[R, R],
            Phase2Move::L2 => &[L, L],
            Phase2Move::F2 => &[F, F],
            Phase2Move::B2 => &[B, B],
        }
    }
}

impl fmt::Display for Phase2Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.quarter_turns() {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// Build the CO transition table: `table[co * 6 + move_index]` is the CO
/// coordinate reached by applying that quarter-turn to any cube with that CO.
pub fn move_co() -> Vec<u16> {
    let mut table = vec![0u16; N_TWIST * N_MOVES1];
    for i in 0..N_TWIST {
        let mut base = CubieCube::default();
        set_co(&mut base, i as u16);
        for (mi, &m) in ALL_MOVES.iter().enumerate() {
            let mut c = base;
            c.apply_move(m);
            table[i * N_MOVES1 + mi] = co_index(&c);
        }
    }
    table
}

/// Build the EO transition table, analogous to [`move_co`].
pub fn move_eo() -> Vec<u16> {
    let mut table = vec![0u16; N_FLIP * N_MOVES1];
    for i in 0..N_FLIP {
        let mut base = CubieCube::default();
        set_eo(&mut base, i as u16);
        for (mi, &m) in ALL_MOVES.iter().enumerate() {
            let mut c = base;
            c.apply_move(m);
            table[i * N_MOVES1 + mi] = eo_index(&c);
        }
    }
    table
}

/// Build the SLICE transition table, analogous to [`move_co`].
pub fn move_slice() -> Vec<u16> {
    let mut table = vec![0u16; N_SLICE * N_MOVES1];
    for i in 0..N_SLICE {
        let mut base = CubieCube::default();
        set_slice(&mut base, i as u16);
        for (mi, &m) in ALL_MOVES.iter().enumerate() {
            let mut c = base;
            c.apply_move(m);
            table[i * N_MOVES1 + mi] = slice_index(&c);
        }
    }
    table
}

/// Build the CP transition table under the ten-move Phase-2 generator.
/// Each atomic move is applied as its full sequence of quarter-turns to a
/// full representative cube, so the table is correct even though individual
/// quarter-turns inside a compound move may pass through states outside G1.
pub fn move_cp_phase2() -> Vec<u16> {
    let mut table = vec![0u16; N_CORNERS * N_MOVES2];
    for i in 0..N_CORNERS {
        let mut base = CubieCube::default();
        set_cp(&mut base, i as u16);
        for (mi, mv) in PHASE2_MOVES.iter().enumerate() {
            let mut c = base;
            c.multiply_moves(mv.quarter_turns());
            table[i * N_MOVES2 + mi] = cp_index(&c);
        }
    }
    table
}

/// Build the UD8 transition table under the ten-move Phase-2 generator.
pub fn move_ud8_phase2() -> Vec<u16> {
    let mut table = vec![0u16; N_UD_EDGES * N_MOVES2];
    for i in 0..N_UD_EDGES {
        let mut base = CubieCube::default();
        set_ud8(&mut base, i as u16);
        for (mi, mv) in PHASE2_MOVES.iter().enumerate() {
            let mut c = base;
            c.multiply_moves(mv.quarter_turns());
            table[i * N_MOVES2 + mi] = ud8_index(&c);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_display_roundtrips_through_fromstr() {
        for &m in &ALL_MOVES {
            let s = m.to_string();
            assert_eq!(Move::from_str(&s).unwrap(), m);
        }
    }

    #[test]
    fn phase2_move_expands_to_expected_quarter_turn_count() {
        assert_eq!(Phase2Move::U.quarter_turns().len(), 1);
        assert_eq!(Phase2Move::U2.quarter_turns().len(), 2);
        assert_eq!(Phase2Move::U3.quarter_turns().len(), 3);
        assert_eq!(Phase2Move::R2.quarter_turns().len(), 2);
    }

    #[test]
    fn phase2_move_display_matches_quarter_turn_string() {
        assert_eq!(Phase2Move::U3.to_string(), "UUU");
        assert_eq!(Phase2Move::R2.to_string(), "RR");
    }

    #[test]
    fn invalid_move_token_is_rejected() {
        assert!(Move::from_str("X").is_err());
    }

    #[test]
    fn move_co_table_has_expected_shape() {
        let table = move_co();
        assert_eq!(table.len(), N_TWIST * N_MOVES1);
        // U leaves CO untouched everywhere (U never twists a corner).
        for i in 0..N_TWIST {
            assert_eq!(table[i * N_MOVES1], i as u16);
        }
    }

    #[test]
    fn move_slice_table_solved_row_matches_direct_application() {
        let table = move_slice();
        let solved_slice = slice_index(&CubieCube::default());
        let mut c = CubieCube::default();
        c.apply_move(Move::R);
        assert_eq!(
            table[solved_slice as usize * N_MOVES1 + 3], // R is index 3 in ALL_MOVES
            slice_index(&c)
        );
    }

    #[test]
    fn move_cp_phase2_u_move_matches_direct_application() {
        let table = move_cp_phase2();
        let mut c = CubieCube::default();
        c.apply_move(Move::U);
        assert_eq!(table[0], cp_index(&c));
    }

    #[test]
    fn move_ud8_phase2_r2_returns_to_g1() {
        let table = move_ud8_phase2();
        // R2 applied to the solved cube's UD8 representative must itself decode
        // to a valid UD8 value without panicking (checked implicitly by building
        // the table above) and must round-trip back to 0 after R2 R2.
        let r2_idx = 6; // PHASE2_MOVES index of R2
        let once = table[0 * N_MOVES2 + r2_idx];
        let twice = table[once as usize * N_MOVES2 + r2_idx];
        assert_eq!(twice, 0);
    }
}
