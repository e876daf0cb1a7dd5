//! Pruning-table construction: breadth-first search over the projected
//! coordinate spaces, producing admissible lower-bound distance tables for
//! the Phase-1 and Phase-2 heuristics.

use bincode::{Decode, Encode};

use crate::constants::{
    N_CORNERS, N_FLIP, N_MOVES1, N_MOVES2, N_SLICE, N_TWIST, N_UD_EDGES, UNVISITED,
};
use crate::coord;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves;

/// Breadth-first search over a single coordinate's transition table.
fn bfs_single(n: usize, n_moves: usize, move_table: &[u16], start: usize) -> Vec<u8> {
    let mut dist = vec![UNVISITED; n];
    dist[start] = 0;
    let mut frontier = vec![start];
    let mut depth: u8 = 0;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &s in &frontier {
            for m in 0..n_moves {
                let t = move_table[s * n_moves + m] as usize;
                if dist[t] == UNVISITED {
                    dist[t] = depth + 1;
                    next.push(t);
                }
            }
        }
        depth += 1;
        frontier = next;
    }
    dist
}

/// Breadth-first search over the joint (CO,EO) space, combining the two
/// independent per-coordinate transition tables (a move updates CO and EO
/// simultaneously but independently, so no separate joint move table exists).
fn bfs_joint_co_eo(move_co: &[u16], move_eo: &[u16]) -> Vec<u8> {
    let n = N_TWIST * N_FLIP;
    let mut dist = vec![UNVISITED; n];
    let start = 0;
    dist[start] = 0;
    let mut frontier = vec![start];
    let mut depth: u8 = 0;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &s in &frontier {
            let co = s / N_FLIP;
            let eo = s % N_FLIP;
            for m in 0..N_MOVES1 {
                let co2 = move_co[co * N_MOVES1 + m] as usize;
                let eo2 = move_eo[eo * N_MOVES1 + m] as usize;
                let t = co2 * N_FLIP + eo2;
                if dist[t] == UNVISITED {
                    dist[t] = depth + 1;
                    next.push(t);
                }
            }
        }
        depth += 1;
        frontier = next;
    }
    dist
}

fn check_complete(name: &'static str, dist: &[u8]) -> Result<(), Error> {
    let filled = dist.iter().filter(|&&d| d != UNVISITED).count();
    if filled != dist.len() {
        return Err(Error::PruningTableIncomplete {
            table: name,
            filled,
            total: dist.len(),
        });
    }
    Ok(())
}

/// The six pruning tables from the data model, plus the move tables needed
/// to apply them during search (kept alongside so a solve only needs one
/// memoized bundle).
#[derive(Debug, Clone, Encode, Decode)]
pub struct SolverTables {
    pub move_co: Vec<u16>,
    pub move_eo: Vec<u16>,
    pub move_slice: Vec<u16>,
    pub move_cp: Vec<u16>,
    pub move_ud8: Vec<u16>,

    pub dist_co: Vec<u8>,
    pub dist_eo: Vec<u8>,
    pub dist_slice: Vec<u8>,
    pub dist_coeo: Vec<u8>,
    pub dist_cp: Vec<u8>,
    pub dist_ud8: Vec<u8>,
}

impl SolverTables {
    /// Build every move table and BFS every pruning table from scratch.
    pub fn build() -> Result<Self, Error> {
        let move_co = moves::move_co();
        let move_eo = moves::move_eo();
        let move_slice = moves::move_slice();
        let move_cp = moves::move_cp_phase2();
        let move_ud8 = moves::move_ud8_phase2();

        let dist_co = bfs_single(N_TWIST, N_MOVES1, &move_co, 0);
        let dist_eo = bfs_single(N_FLIP, N_MOVES1, &move_eo, 0);
        let start_slice = coord::slice_index(&CubieCube::default()) as usize;
        let dist_slice = bfs_single(N_SLICE, N_MOVES1, &move_slice, start_slice);
        let dist_coeo = bfs_joint_co_eo(&move_co, &move_eo);
        let dist_cp = bfs_single(N_CORNERS, N_MOVES2, &move_cp, 0);
        let dist_ud8 = bfs_single(N_UD_EDGES, N_MOVES2, &move_ud8, 0);

        let tables = SolverTables {
            move_co,
            move_eo,
            move_slice,
            move_cp,
            move_ud8,
            dist_co,
            dist_eo,
            dist_slice,
            dist_coeo,
            dist_cp,
            dist_ud8,
        };
        tables.check()?;
        Ok(tables)
    }

    fn check(&self) -> Result<(), Error> {
        check_complete("distCO", &self.dist_co)?;
        check_complete("distEO", &self.dist_eo)?;
        check_complete("distSLICE", &self.dist_slice)?;
        check_complete("distCOEO", &self.dist_coeo)?;
        check_complete("distCP", &self.dist_cp)?;
        check_complete("distUD8", &self.dist_ud8)?;
        Ok(())
    }

    /// Phase-1 admissible heuristic: the tightest of the four orientation/slice bounds.
    pub fn h1(&self, co: u16, eo: u16, slice: u16) -> u8 {
        let a = self.dist_co[co as usize];
        let b = self.dist_eo[eo as usize];
        let c = self.dist_slice[slice as usize];
        let d = self.dist_coeo[co as usize * N_FLIP + eo as usize];
        a.max(b).max(c).max(d)
    }

    /// Phase-2 admissible heuristic: CP/UD8 bounds and their averaged joint bound.
    pub fn h2(&self, cp: u16, ud8: u16) -> u8 {
        let a = self.dist_cp[cp as usize];
        let b = self.dist_ud8[ud8 as usize];
        let joint = ((a as u16 + b as u16 + 1) / 2) as u8;
        a.max(b).max(joint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_build_and_are_complete() {
        let tables = SolverTables::build().expect("pruning tables must fully populate");
        assert_eq!(tables.dist_co[0], 0);
        assert_eq!(tables.dist_eo[0], 0);
        assert_eq!(tables.dist_cp[0], 0);
        assert_eq!(tables.dist_ud8[0], 0);
    }

    #[test]
    fn h1_of_solved_is_zero() {
        let tables = SolverTables::build().unwrap();
        let solved = CubieCube::default();
        let h = tables.h1(
            coord::co_index(&solved),
            coord::eo_index(&solved),
            coord::slice_index(&solved),
        );
        assert_eq!(h, 0);
    }

    #[test]
    fn h2_of_solved_is_zero() {
        let tables = SolverTables::build().unwrap();
        let solved = CubieCube::default();
        let h = tables.h2(coord::cp_index(&solved), coord::ud8_index(&solved));
        assert_eq!(h, 0);
    }

    #[test]
    fn h1_of_one_move_scramble_is_one() {
        let tables = SolverTables::build().unwrap();
        let mut c = CubieCube::default();
        c.apply_move(crate::moves::Move::R);
        let h = tables.h1(
            coord::co_index(&c),
            coord::eo_index(&c),
            coord::slice_index(&c),
        );
        assert_eq!(h, 1);
    }
}
