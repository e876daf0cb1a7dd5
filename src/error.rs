//! Error types shared by the parser, solver, and CLI boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: solve <input-file> <output-file>")]
    Args,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("facelet net malformed: expected {expected} lines (width {width} each), got {got}")]
    NetShape {
        expected: usize,
        width: usize,
        got: usize,
    },

    #[error("unrecognized sticker color '{0}'")]
    UnknownColor(char),

    #[error("facelet string has the wrong length: expected 54, got {0}")]
    FaceletLength(usize),

    #[error("no reference cubie matches the stickers at this slot")]
    UnmatchedCubie,

    #[error("scramble violates cube invariants (twist/flip/parity)")]
    InfeasibleScramble,

    #[error("'{0}' is not a recognized move")]
    InvalidMove(String),

    #[error("pruning table '{table}' incomplete: {filled}/{total} cells reached")]
    PruningTableIncomplete {
        table: &'static str,
        filled: usize,
        total: usize,
    },

    #[error(transparent)]
    TableEncode(#[from] bincode::error::EncodeError),

    #[error(transparent)]
    TableDecode(#[from] bincode::error::DecodeError),
}
