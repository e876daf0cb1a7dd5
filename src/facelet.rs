//! The facelet-level cube model: 54 colored stickers, the 9-line net and
//! flat-54 string parsers, and the cubie-identification algorithm that
//! turns a sticker layout into a [`CubieCube`].

use crate::cubie::{Corner, CubieCube, Edge};
use crate::error::Error;

/// One of the six face colors. The color alphabet itself is arbitrary —
/// a parsed net infers which character means which `Color` from the nine
/// center stickers — this enum just names the six possibilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

impl Color {
    fn to_char(self) -> char {
        match self {
            Color::U => 'U',
            Color::R => 'R',
            Color::F => 'F',
            Color::D => 'D',
            Color::L => 'L',
            Color::B => 'B',
        }
    }
}

/// Facelet indices touched by each corner, in a fixed home-ordered cycle
/// (the U/D sticker always listed first). Global facelet numbering is
/// U0..8, R9..17, F18..26, D27..35, L36..44, B45..53, each face read
/// row-major.
const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],   // URF
    [6, 18, 38],  // UFL
    [0, 36, 47],  // ULB
    [2, 45, 11],  // UBR
    [29, 26, 15], // DFR
    [27, 44, 24], // DLF
    [33, 53, 42], // DBL
    [35, 17, 51], // DRB
];

const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F], // URF
    [Color::U, Color::F, Color::L], // UFL
    [Color::U, Color::L, Color::B], // ULB
    [Color::U, Color::B, Color::R], // UBR
    [Color::D, Color::F, Color::R], // DFR
    [Color::D, Color::L, Color::F], // DLF
    [Color::D, Color::B, Color::L], // DBL
    [Color::D, Color::R, Color::B], // DRB
];

/// Facelet indices touched by each edge, in slot order (matching
/// `cubie::Edge`'s UF,UL,UB,UR,FR,FL,BL,BR,DF,DL,DB,DR order).
const EDGE_FACELET: [[usize; 2]; 12] = [
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [5, 10],  // UR
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [32, 16], // DR
];

const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::F], // UF
    [Color::U, Color::L], // UL
    [Color::U, Color::B], // UB
    [Color::U, Color::R], // UR
    [Color::F, Color::R], // FR
    [Color::F, Color::L], // FL
    [Color::B, Color::L], // BL
    [Color::B, Color::R], // BR
    [Color::D, Color::F], // DF
    [Color::D, Color::L], // DL
    [Color::D, Color::B], // DB
    [Color::D, Color::R], // DR
];

/// The centers are immobile, so their facelet index always names their color.
const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// A cube described by its 54 facelet colors, in the global numbering
/// U0..8, R9..17, F18..26, D27..35, L36..44, B45..53.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCube {
    pub f: [Color; 54],
}

fn solved_faces() -> [Color; 54] {
    let mut f = [Color::U; 54];
    for i in 0..9 {
        f[i] = Color::U;
        f[9 + i] = Color::R;
        f[18 + i] = Color::F;
        f[27 + i] = Color::D;
        f[36 + i] = Color::L;
        f[45 + i] = Color::B;
    }
    f
}

impl Default for FaceCube {
    fn default() -> Self {
        FaceCube { f: solved_faces() }
    }
}

impl FaceCube {
    /// Parse the 9-line facelet net described in the input file format:
    /// three U rows (each 3 leading spaces then 3 stickers), three middle
    /// rows (12 stickers, L-F-R-B left to right), three D rows.
    pub fn from_net(s: &str) -> Result<FaceCube, Error> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        if lines.len() != 9 {
            return Err(Error::NetShape {
                expected: 9,
                width: 0,
                got: lines.len(),
            });
        }
        for (i, line) in lines.iter().enumerate() {
            let expected_width = if (3..6).contains(&i) { 12 } else { 6 };
            if line.chars().count() != expected_width {
                return Err(Error::NetShape {
                    expected: 9,
                    width: expected_width,
                    got: line.chars().count(),
                });
            }
        }

        let row = |line: &str, skip: usize| -> Vec<char> {
            line.chars().skip(skip).take(3).collect()
        };

        let mut u_chars = Vec::with_capacity(9);
        let mut d_chars = Vec::with_capacity(9);
        for i in 0..3 {
            u_chars.extend(row(lines[i], 3));
            d_chars.extend(row(lines[6 + i], 3));
        }

        let mut l_chars = Vec::with_capacity(9);
        let mut f_chars = Vec::with_capacity(9);
        let mut r_chars = Vec::with_capacity(9);
        let mut b_chars = Vec::with_capacity(9);
        for i in 0..3 {
            let line = lines[3 + i];
            l_chars.extend(row(line, 0));
            f_chars.extend(row(line, 3));
            r_chars.extend(row(line, 6));
            b_chars.extend(row(line, 9));
        }

        let mut flat = String::with_capacity(54);
        for chars in [&u_chars, &r_chars, &f_chars, &d_chars, &l_chars, &b_chars] {
            flat.extend(chars);
        }
        Self::try_from_flat(&flat)
    }

    /// Parse the flat 54-character alternate form. The center of each face
    /// (global indices 4,13,22,31,40,49) defines the alphabet used for the
    /// other stickers on that face.
    pub fn try_from_flat(s: &str) -> Result<FaceCube, Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 54 {
            return Err(Error::FaceletLength(chars.len()));
        }

        let mut alphabet: Vec<(char, Color)> = Vec::with_capacity(6);
        for (&idx, &color) in CENTER_FACELET.iter().zip(ALL_COLORS.iter()) {
            alphabet.push((chars[idx], color));
        }

        let mut f = [Color::U; 54];
        for (i, &ch) in chars.iter().enumerate() {
            let color = alphabet
                .iter()
                .find(|&&(c, _)| c == ch)
                .map(|&(_, color)| color)
                .ok_or(Error::UnknownColor(ch))?;
            f[i] = color;
        }
        Ok(FaceCube { f })
    }

    /// Serialize back to the flat 54-character form, using the fixed
    /// alphabet U/R/F/D/L/B.
    pub fn to_flat_string(&self) -> String {
        self.f.iter().map(|c| c.to_char()).collect()
    }
}

impl From<&CubieCube> for FaceCube {
    /// Reconstruct a facelet layout from a cubie-level cube: place each
    /// corner/edge's home-color triple/pair at its slot's facelets,
    /// rotated or swapped according to its orientation.
    fn from(c: &CubieCube) -> FaceCube {
        let mut f = solved_faces();

        for (slot, facelets) in CORNER_FACELET.iter().enumerate() {
            let piece = c.cp[slot] as usize;
            let ori = c.co[slot] as usize;
            for (k, &idx) in facelets.iter().enumerate() {
                f[idx] = CORNER_COLOR[piece][(k + 3 - ori) % 3];
            }
        }

        for (slot, facelets) in EDGE_FACELET.iter().enumerate() {
            let piece = c.ep[slot] as usize;
            let flipped = c.eo[slot] == 1;
            let colors = EDGE_COLOR[piece];
            f[facelets[0]] = if flipped { colors[1] } else { colors[0] };
            f[facelets[1]] = if flipped { colors[0] } else { colors[1] };
        }

        FaceCube { f }
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    /// Identify each corner and edge cubie by matching the unordered set
    /// of colors at its slot's facelets against the solved reference sets,
    /// recovering orientation from the position of the home (U/D, or F/B
    /// for edges lacking a U/D sticker) color within that set.
    fn try_from(face: &FaceCube) -> Result<CubieCube, Error> {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for (slot, facelets) in CORNER_FACELET.iter().enumerate() {
            let colors = [face.f[facelets[0]], face.f[facelets[1]], face.f[facelets[2]]];
            let ori = colors
                .iter()
                .position(|&c| c == Color::U || c == Color::D)
                .ok_or(Error::UnmatchedCubie)?;
            let rotated = [colors[ori], colors[(ori + 1) % 3], colors[(ori + 2) % 3]];
            let piece = CORNER_COLOR
                .iter()
                .position(|&ref_colors| ref_colors == rotated)
                .ok_or(Error::UnmatchedCubie)?;
            cp[slot] = Corner::try_from(piece as u8)?;
            co[slot] = ori as u8;
        }

        let mut ep = [Edge::UF; 12];
        let mut eo = [0u8; 12];
        for (slot, facelets) in EDGE_FACELET.iter().enumerate() {
            let colors = [face.f[facelets[0]], face.f[facelets[1]]];
            if let Some(piece) = EDGE_COLOR.iter().position(|&rc| rc == colors) {
                ep[slot] = Edge::try_from(piece as u8)?;
                eo[slot] = 0;
            } else if let Some(piece) = EDGE_COLOR
                .iter()
                .position(|&rc| rc == [colors[1], colors[0]])
            {
                ep[slot] = Edge::try_from(piece as u8)?;
                eo[slot] = 1;
            } else {
                return Err(Error::UnmatchedCubie);
            }
        }

        Ok(CubieCube { cp, co, ep, eo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    const SOLVED_NET: &str = "   UUU\n   UUU\n   UUU\nLLLFFFRRRBBB\nLLLFFFRRRBBB\nLLLFFFRRRBBB\n   DDD\n   DDD\n   DDD";

    #[test]
    fn solved_net_parses_to_solved_flat_string() {
        let face = FaceCube::from_net(SOLVED_NET).unwrap();
        assert_eq!(face.to_flat_string(), FaceCube::default().to_flat_string());
    }

    #[test]
    fn solved_net_identifies_as_solved_cubie_cube() {
        let face = FaceCube::from_net(SOLVED_NET).unwrap();
        let cube = CubieCube::try_from(&face).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn wrong_line_count_is_rejected() {
        assert!(FaceCube::from_net("   UUU\n   UUU").is_err());
    }

    #[test]
    fn wrong_facelet_length_is_rejected() {
        assert!(FaceCube::try_from_flat("UUU").is_err());
    }

    #[test]
    fn unknown_color_is_rejected() {
        let mut s = FaceCube::default().to_flat_string();
        s.replace_range(5..6, "X");
        assert!(FaceCube::try_from_flat(&s).is_err());
    }

    #[test]
    fn arbitrary_alphabet_round_trips_through_cubie_identification() {
        // Same layout as the solved net, but with an unrelated 6-letter
        // alphabet; centers still define which symbol means which face.
        let net = "   111\n   111\n   111\n222333444555\n222333444555\n222333444555\n   666\n   666\n   666";
        let face = FaceCube::from_net(net).unwrap();
        let cube = CubieCube::try_from(&face).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn cubie_to_facelet_to_cubie_round_trips_after_a_scramble() {
        let mut c = CubieCube::default();
        for m in [Move::U, Move::R, Move::F, Move::D, Move::L, Move::B] {
            c.apply_move(m);
        }
        let face = FaceCube::from(&c);
        let back = CubieCube::try_from(&face).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn one_move_scramble_facelet_round_trips() {
        let mut c = CubieCube::default();
        c.apply_move(Move::R);
        let face = FaceCube::from(&c);
        let s = face.to_flat_string();
        let reparsed = FaceCube::try_from_flat(&s).unwrap();
        let back = CubieCube::try_from(&reparsed).unwrap();
        assert_eq!(c, back);
    }
}
