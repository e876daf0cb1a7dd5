//! # rubik-solver
//! A two-phase Kociemba-style solver for the 3x3 Rubik's cube: parse a
//! facelet description, search a cubie-level model guided by precomputed
//! pruning tables, emit a quarter-turn solution string.

#[macro_use]
extern crate lazy_static;

/// Error define.
pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Module for represent a cube on the coordinate level.
pub mod coord;

/// Module for represent a cube on the cubie level.
pub mod cubie;

/// Module for represent a cube on the facelet level.
pub mod facelet;

/// Module for represent moves and build the coordinate transition tables.
pub mod moves;

/// Module for create/load pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;

/// Module containing functions for scrambling the cube.
pub mod scramble;

/// Module for the two-phase IDA* solver.
pub mod solver;

use std::{fs, path::Path};
use bincode::{
    config::{self, Configuration},
    decode_from_slice, encode_to_vec,
    error::DecodeError,
    Decode, Encode,
};
use crate::error::Error;
use crate::pruning::SolverTables;

const CONFIG: Configuration = config::standard();

/// Default on-disk location for the cached move/pruning tables.
pub const TABLES_PATH: &str = "tables/solver_tables.bin";

fn write_table<P, T: Encode>(path: P, table: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let encoded = encode_to_vec(table, CONFIG)?;
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, encoded)?;
    Ok(())
}

fn decode_table<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, written) = decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;

    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}

/// Load the move/pruning tables from `path` if present and well-formed,
/// otherwise build them from scratch and cache the result there so the
/// next process start can skip the BFS.
pub fn load_or_build_tables<P: AsRef<Path>>(path: P) -> Result<SolverTables, Error> {
    if let Ok(bytes) = fs::read(path.as_ref()) {
        if let Ok(tables) = decode_table(&bytes) {
            return Ok(tables);
        }
    }
    let tables = SolverTables::build()?;
    write_table(path, &tables)?;
    Ok(tables)
}
