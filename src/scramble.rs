//! Human-readable scramble notation: parsing tokens like `R`, `R'`, `R2`
//! into quarter-turns, the inverse compaction back to notation, and random
//! scramble generation for the CLI's `scramble` subcommand.

use rand::Rng;

use crate::error::Error;
use crate::moves::{Move, ALL_MOVES};

/// Parse a space-separated scramble string (`"R U R' U2"`) into the
/// quarter-turn sequence it expands to.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    let mut moves = Vec::new();
    for token in s.split_whitespace() {
        let mut chars = token.chars();
        let face = chars
            .next()
            .ok_or_else(|| Error::InvalidMove(token.to_string()))?;
        let base: Move = face.to_string().parse()?;
        match chars.as_str() {
            "" => moves.push(base),
            "2" => moves.extend([base, base]),
            "'" => moves.extend([base, base, base]),
            _ => return Err(Error::InvalidMove(token.to_string())),
        }
    }
    Ok(moves)
}

/// Compact a quarter-turn sequence back into notation, grouping consecutive
/// repeats of the same face into `X`, `X2`, or `X'`.
pub fn scramble_to_str(moves: &[Move]) -> String {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < moves.len() {
        let m = moves[i];
        let mut count = 1;
        while count < 3 && i + count < moves.len() && moves[i + count] == m {
            count += 1;
        }
        tokens.push(match count {
            1 => m.to_string(),
            2 => format!("{m}2"),
            _ => format!("{m}'"),
        });
        i += count;
    }
    tokens.join(" ")
}

/// Generate `n` random quarter-turns. Adjacent same-face repeats are
/// allowed, matching real scramble generators (a `Move` here is a single
/// quarter-turn, so e.g. two consecutive `R`s is just how `R2` is drawn).
pub fn random_scramble(n: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn scramble_from_str_expands_modifiers() {
        let m = scramble_from_str("R U R' U' F L' D' B2").unwrap();
        assert_eq!(
            m,
            vec![R, U, R, R, R, U, U, U, F, L, L, L, D, D, D, B, B]
        );
    }

    #[test]
    fn scramble_to_str_regroups_runs() {
        let s = scramble_to_str(&[R, U, U, D, D, D]);
        assert_eq!(s, "R U2 D'");
    }

    #[test]
    fn round_trip_through_notation() {
        let original = "R U2 D' F2 L B'";
        let moves = scramble_from_str(original).unwrap();
        assert_eq!(scramble_to_str(&moves), original);
    }

    #[test]
    fn invalid_token_is_rejected() {
        assert!(scramble_from_str("X2").is_err());
        assert!(scramble_from_str("R3").is_err());
    }

    #[test]
    fn random_scramble_has_requested_length() {
        let s = random_scramble(25);
        assert_eq!(s.len(), 25);
    }
}
