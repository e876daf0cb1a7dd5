//! Coordinate encoders: pure projections from `CubieCube` to small integer
//! indices, plus the inverse ("set") constructors used only by the move- and
//! pruning-table builders in `moves` and `pruning`.

use crate::constants::{SLICE_EDGE_SLOTS, UD_EDGE_SLOTS};
use crate::cubie::{Corner, CubieCube, Edge};
use lazy_static::lazy_static;

fn factorial(n: usize) -> u32 {
    (1..=n as u32).product::<u32>().max(1)
}

/// Lehmer-code rank of a permutation of `0..seq.len()`.
fn lehmer_rank(seq: &[u8]) -> u32 {
    let n = seq.len();
    let mut rank = 0u32;
    for i in 0..n {
        let smaller = seq[i + 1..].iter().filter(|&&x| x < seq[i]).count() as u32;
        rank += smaller * factorial(n - 1 - i);
    }
    rank
}

/// Inverse of [`lehmer_rank`]: the `idx`-th permutation of `0..n` in
/// factorial-number-system order.
fn lehmer_unrank(n: usize, mut idx: u32) -> Vec<u8> {
    let mut pool: Vec<u8> = (0..n as u8).collect();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let f = factorial(n - 1 - i);
        let k = (idx / f) as usize;
        idx %= f;
        out.push(pool.remove(k));
    }
    out
}

/// CO: corner-orientation coordinate, `Σ co[i]·3^(6−i)` for `i=0..6`.
pub fn co_index(c: &CubieCube) -> u16 {
    let mut idx: u32 = 0;
    for i in 0..7 {
        idx = idx * 3 + c.co[i] as u32;
    }
    idx as u16
}

/// Reconstruct a representative's `co` array (and only `co`) for a given CO coordinate.
pub fn set_co(c: &mut CubieCube, mut idx: u16) {
    let mut sum = 0u32;
    for i in (0..7).rev() {
        let v = (idx % 3) as u8;
        c.co[i] = v;
        sum += v as u32;
        idx /= 3;
    }
    c.co[7] = ((3 - sum % 3) % 3) as u8;
}

/// EO: edge-orientation coordinate, `Σ eo[i]·2^(10−i)` for `i=0..10`.
pub fn eo_index(c: &CubieCube) -> u16 {
    let mut idx: u32 = 0;
    for i in 0..11 {
        idx = idx * 2 + c.eo[i] as u32;
    }
    idx as u16
}

pub fn set_eo(c: &mut CubieCube, mut idx: u16) {
    let mut sum = 0u32;
    for i in (0..11).rev() {
        let v = (idx % 2) as u8;
        c.eo[i] = v;
        sum += v as u32;
        idx /= 2;
    }
    c.eo[11] = ((2 - sum % 2) % 2) as u8;
}

/// Rank of the 4-subset of slice positions via the r-of-remaining-positions
/// combinatorial numbering described in the data model.
fn slice_rank_of(is_slice: &[bool; 12]) -> u16 {
    let mut r: i32 = 4;
    let mut idx: u32 = 0;
    for pos in 0..12 {
        if is_slice[pos] {
            r -= 1;
        } else if r > 0 {
            idx += binom(11 - pos as u32, (r - 1) as u32);
        }
    }
    idx as u16
}

fn binom(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    let mut num = 1u64;
    let mut den = 1u64;
    for i in 0..k {
        num *= (n - i) as u64;
        den *= (i + 1) as u64;
    }
    (num / den) as u32
}

/// SLICE: index identifying which 4 of the 12 edge slots hold the UD-slice
/// edges (FR,FL,BL,BR), regardless of order.
pub fn slice_index(c: &CubieCube) -> u16 {
    let mut is_slice = [false; 12];
    for (pos, &e) in c.ep.iter().enumerate() {
        is_slice[pos] = e.is_slice_edge();
    }
    slice_rank_of(&is_slice)
}

lazy_static! {
    /// `SLICE_COMBOS[rank]` is the set of 4 slots (ascending) that rank decodes to.
    /// Built once by brute-force enumeration of all C(12,4) subsets, using the
    /// exact same ranking function as `slice_index`, so encode/decode are a
    /// verified bijection by construction.
    static ref SLICE_COMBOS: Vec<[usize; 4]> = {
        let mut combos = vec![[0usize; 4]; 495];
        for a in 0..12 {
            for b in (a + 1)..12 {
                for cc in (b + 1)..12 {
                    for d in (cc + 1)..12 {
                        let mut is_slice = [false; 12];
                        for &p in &[a, b, cc, d] {
                            is_slice[p] = true;
                        }
                        let rank = slice_rank_of(&is_slice);
                        combos[rank as usize] = [a, b, cc, d];
                    }
                }
            }
        }
        combos
    };
}

/// Reconstruct a representative's `ep` array (and only `ep`) for a given SLICE coordinate.
pub fn set_slice(c: &mut CubieCube, idx: u16) {
    let slots = SLICE_COMBOS[idx as usize];
    let slice_ids = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];
    let other_ids = [
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::UR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
    ];
    let mut other_iter = other_ids.iter();
    for pos in 0..12 {
        if let Some(k) = slots.iter().position(|&s| s == pos) {
            c.ep[pos] = slice_ids[k];
        } else {
            c.ep[pos] = *other_iter.next().expect("exactly 8 non-slice slots");
        }
    }
}

/// CP: Lehmer rank of the corner permutation over `0..7`.
pub fn cp_index(c: &CubieCube) -> u16 {
    let seq: Vec<u8> = c.cp.iter().map(|&x| x as u8).collect();
    lehmer_rank(&seq) as u16
}

pub fn set_cp(c: &mut CubieCube, idx: u16) {
    let seq = lehmer_unrank(8, idx as u32);
    for i in 0..8 {
        c.cp[i] = Corner::try_from(seq[i]).expect("lehmer_unrank(8,_) yields 0..7");
    }
}

fn compact_ud_id(e: Edge) -> u8 {
    match e {
        Edge::UF => 0,
        Edge::UL => 1,
        Edge::UB => 2,
        Edge::UR => 3,
        Edge::DF => 4,
        Edge::DL => 5,
        Edge::DB => 6,
        Edge::DR => 7,
        _ => unreachable!("UD8 queried on a non-G1 cube"),
    }
}

fn expand_ud_id(v: u8) -> Edge {
    match v {
        0 => Edge::UF,
        1 => Edge::UL,
        2 => Edge::UB,
        3 => Edge::UR,
        4 => Edge::DF,
        5 => Edge::DL,
        6 => Edge::DB,
        7 => Edge::DR,
        _ => unreachable!(),
    }
}

/// UD8: Lehmer rank of the permutation induced on the eight U/D-layer edge
/// slots. Only meaningful once the slice edges occupy slots 4..7 (i.e. the
/// cube lies in G1) — callers outside `moves`/`pruning` must confirm that
/// via `slice_index` before relying on this value.
pub fn ud8_index(c: &CubieCube) -> u16 {
    let seq: Vec<u8> = UD_EDGE_SLOTS
        .iter()
        .map(|&s| compact_ud_id(c.ep[s]))
        .collect();
    lehmer_rank(&seq) as u16
}

pub fn set_ud8(c: &mut CubieCube, idx: u16) {
    let seq = lehmer_unrank(8, idx as u32);
    for (&slot, &v) in UD_EDGE_SLOTS.iter().zip(seq.iter()) {
        c.ep[slot] = expand_ud_id(v);
    }
    for (&slot, &e) in SLICE_EDGE_SLOTS
        .iter()
        .zip([Edge::FR, Edge::FL, Edge::BL, Edge::BR].iter())
    {
        c.ep[slot] = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co_roundtrips() {
        for idx in [0u16, 1, 2186, 1000] {
            let mut c = CubieCube::default();
            set_co(&mut c, idx);
            assert_eq!(co_index(&c), idx);
        }
    }

    #[test]
    fn eo_roundtrips() {
        for idx in [0u16, 1, 2047, 1024] {
            let mut c = CubieCube::default();
            set_eo(&mut c, idx);
            assert_eq!(eo_index(&c), idx);
        }
    }

    #[test]
    fn slice_roundtrips_all_495() {
        for idx in 0..495u16 {
            let mut c = CubieCube::default();
            set_slice(&mut c, idx);
            assert_eq!(slice_index(&c), idx);
        }
    }

    #[test]
    fn cp_roundtrips() {
        for idx in [0u16, 1, 40319, 20000] {
            let mut c = CubieCube::default();
            set_cp(&mut c, idx);
            assert_eq!(cp_index(&c), idx);
        }
    }

    #[test]
    fn ud8_roundtrips() {
        for idx in [0u16, 1, 40319, 20000] {
            let mut c = CubieCube::default();
            set_ud8(&mut c, idx);
            assert_eq!(ud8_index(&c), idx);
        }
    }

    #[test]
    fn solved_cube_has_zero_cp() {
        assert_eq!(cp_index(&CubieCube::default()), 0);
    }

    #[test]
    fn solved_cube_has_zero_co_and_eo() {
        assert_eq!(co_index(&CubieCube::default()), 0);
        assert_eq!(eo_index(&CubieCube::default()), 0);
    }
}
