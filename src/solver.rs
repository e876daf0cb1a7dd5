//! The two-phase IDA* search and the iterative-deepening orchestrator that
//! ties Phase 1 and Phase 2 together under a single time/depth budget.
//!
//! `solve` is the public entry point: it accepts the flat 54-character
//! facelet string (see `facelet::FaceCube`), verifies the cube's invariants,
//! and returns the solution as a string of quarter-turn characters, or
//! `None` if no solution was found within the deadline.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::constants::{MAX_TOTAL_DEPTH, N_UD_EDGES};
use crate::coord;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{Move, Phase2Move, ALL_MOVES, PHASE2_MOVES};
use crate::pruning::SolverTables;

use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    /// The move/pruning tables, built once per process and shared read-only
    /// afterward. A solve never mutates this; the mutex only guards the
    /// one-time construction.
    static ref TABLES: Mutex<Option<SolverTables>> = Mutex::new(None);
}

fn with_tables<R>(f: impl FnOnce(&SolverTables) -> R) -> Result<R, Error> {
    let mut guard = TABLES.lock().expect("table lock poisoned");
    if guard.is_none() {
        *guard = Some(crate::load_or_build_tables(crate::TABLES_PATH)?);
    }
    Ok(f(guard.as_ref().unwrap()))
}

/// Load or build the move/pruning tables if they aren't already memoized.
/// Called before the deadline clock starts so a cold cache's build/load
/// time is never charged against the caller's solve timeout.
fn ensure_tables_loaded() -> Result<(), Error> {
    with_tables(|_| ())
}

enum Step {
    Found(Vec<Move>),
    Bound,
    TimedOut,
}

fn pack_key(co: u16, eo: u16, slice: u16) -> u32 {
    (co as u32) << 20 | (eo as u32) << 9 | slice as u32
}

/// Phase-1 IDA*: search for a path into G1 (CO=0, EO=0, slice edges in
/// slots 4..7) whose remaining budget admits a successful Phase-2 call.
#[allow(clippy::too_many_arguments)]
fn phase1_search(
    cube: &CubieCube,
    g: usize,
    bound: usize,
    tables: &SolverTables,
    solved_slice: u16,
    path: &mut Vec<Move>,
    visited: &mut HashMap<u32, u8>,
    deadline: Instant,
) -> Step {
    if Instant::now() >= deadline {
        return Step::TimedOut;
    }

    let co = coord::co_index(cube);
    let eo = coord::eo_index(cube);
    let slice = coord::slice_index(cube);
    let h = tables.h1(co, eo, slice) as usize;
    if g + h > bound {
        return Step::Bound;
    }

    if co == 0 && eo == 0 && slice == solved_slice {
        match phase2_search(cube, bound - g, tables, deadline) {
            Ok(Some(p2)) => {
                let mut solution = path.clone();
                solution.extend(p2);
                return Step::Found(solution);
            }
            Ok(None) => {
                // This G1 entry doesn't admit a Phase-2 solution within
                // budget; keep exploring other Phase-1 endings.
            }
            Err(()) => return Step::TimedOut,
        }
    }

    let key = pack_key(co, eo, slice);
    if let Some(&best) = visited.get(&key) {
        if best as usize <= g {
            return Step::Bound;
        }
    }
    visited.insert(key, g as u8);

    let mut children: Vec<(Move, CubieCube, usize)> = ALL_MOVES
        .iter()
        .map(|&m| {
            let mut c = *cube;
            c.apply_move(m);
            let h = tables.h1(
                coord::co_index(&c),
                coord::eo_index(&c),
                coord::slice_index(&c),
            ) as usize;
            (m, c, h)
        })
        .collect();
    children.sort_by_key(|&(_, _, h)| h);

    for (m, child, _) in children {
        path.push(m);
        match phase1_search(&child, g + 1, bound, tables, solved_slice, path, visited, deadline) {
            Step::Found(sol) => return Step::Found(sol),
            Step::TimedOut => return Step::TimedOut,
            Step::Bound => {
                path.pop();
            }
        }
    }
    Step::Bound
}

/// Phase-2 IDA*, bounded by the quarter-turn budget handed down from Phase 1.
/// `distCP`/`distUD8` measure distance in atomic Phase-2 moves, which is
/// always ≤ the true quarter-turn distance, so using them directly as a
/// lower bound in quarter-turn units remains admissible (just looser).
fn phase2_search(
    cube: &CubieCube,
    bound: usize,
    tables: &SolverTables,
    deadline: Instant,
) -> Result<Option<Vec<Move>>, ()> {
    let cp = coord::cp_index(cube);
    let ud8 = coord::ud8_index(cube);
    let start_h = tables.h2(cp, ud8) as usize;
    for b in start_h..=bound {
        let mut path = Vec::new();
        let mut visited = HashMap::new();
        match phase2_dfs(cube, 0, b, tables, &mut path, &mut visited, deadline) {
            Step::Found(sol) => return Ok(Some(sol)),
            Step::TimedOut => return Err(()),
            Step::Bound => continue,
        }
    }
    Ok(None)
}

#[allow(clippy::too_many_arguments)]
fn phase2_dfs(
    cube: &CubieCube,
    g: usize,
    bound: usize,
    tables: &SolverTables,
    path: &mut Vec<Move>,
    visited: &mut HashMap<u32, u8>,
    deadline: Instant,
) -> Step {
    if Instant::now() >= deadline {
        return Step::TimedOut;
    }
    if cube.is_solved() {
        return Step::Found(path.clone());
    }

    let cp = coord::cp_index(cube);
    let ud8 = coord::ud8_index(cube);
    let h = tables.h2(cp, ud8) as usize;
    if g + h > bound {
        return Step::Bound;
    }

    let key = cp as u32 * N_UD_EDGES as u32 + ud8 as u32;
    if let Some(&best) = visited.get(&key) {
        if best as usize <= g {
            return Step::Bound;
        }
    }
    visited.insert(key, g as u8);

    let mut children: Vec<(Phase2Move, CubieCube, usize)> = PHASE2_MOVES
        .iter()
        .map(|&m| {
            let mut c = *cube;
            c.multiply_moves(m.quarter_turns());
            let h = tables.h2(coord::cp_index(&c), coord::ud8_index(&c)) as usize;
            (m, c, h)
        })
        .collect();
    children.sort_by_key(|&(_, _, h)| h);

    for (m, child, _) in children {
        let qturns = m.quarter_turns();
        let next_g = g + qturns.len();
        if next_g > bound {
            continue;
        }
        path.extend_from_slice(qturns);
        match phase2_dfs(&child, next_g, bound, tables, path, visited, deadline) {
            Step::Found(sol) => return Step::Found(sol),
            Step::TimedOut => return Step::TimedOut,
            Step::Bound => {
                for _ in 0..qturns.len() {
                    path.pop();
                }
            }
        }
    }
    Step::Bound
}

/// Solve a cube given as a `CubieCube`. `max_length` caps the total
/// quarter-turn count explored; `timeout` is the wall-clock budget in
/// seconds. Returns `Ok(Some(moves))` on success, `Ok(None)` if the budget
/// was exhausted without a solution, or `Err` if the cube itself is
/// infeasible (fails `CubieCube::verify`).
pub fn solve_cube(
    cube: &CubieCube,
    max_length: usize,
    timeout: f64,
) -> Result<Option<Vec<Move>>, Error> {
    cube.verify()?;
    if cube.is_solved() {
        return Ok(Some(Vec::new()));
    }

    // Tables are loaded/built (and cached to disk on a cold run) before the
    // deadline clock starts, so a first-run BFS never eats into the caller's
    // solve timeout.
    ensure_tables_loaded()?;

    let solved_slice = coord::slice_index(&CubieCube::default());
    let deadline = Instant::now() + Duration::from_secs_f64(timeout.max(0.0));
    let max_total = max_length.min(MAX_TOTAL_DEPTH);

    let result = with_tables(|tables| {
        let co = coord::co_index(cube);
        let eo = coord::eo_index(cube);
        let slice = coord::slice_index(cube);
        let start_bound = tables.h1(co, eo, slice) as usize;

        for bound in start_bound..=max_total {
            let mut path = Vec::new();
            let mut visited = HashMap::new();
            match phase1_search(cube, 0, bound, tables, solved_slice, &mut path, &mut visited, deadline)
            {
                Step::Found(sol) => return Some(sol),
                Step::TimedOut => return None,
                Step::Bound => continue,
            }
        }
        None
    })?;

    Ok(result)
}

/// Solve a cube given as the flat 54-character facelet string (see
/// `facelet::FaceCube`), returning the solution as a quarter-turn string.
pub fn solve(cubestring: &str, max_length: usize, timeout: f64) -> Result<Option<String>, Error> {
    let face = FaceCube::try_from_flat(cubestring)?;
    let cube = CubieCube::try_from(&face)?;
    let moves = solve_cube(&cube, max_length, timeout)?;
    Ok(moves.map(|ms| ms.iter().map(|m| m.to_string()).collect()))
}
