use std::fmt;

/// One atomic puzzle piece.
///
/// Corners span 2 wedge-units and render as `'A'..='H'`; edges span 1
/// wedge-unit and render as `'1'..='8'`. The index is always in `0..8`.
/// Each of the 16 identities appears exactly once across the whole puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Corner(u8),
    Edge(u8),
}

impl Piece {
    /// All 16 piece identities in canonical order: corners `A..H`, then
    /// edges `1..8`. Used for multiset validation of full-state input.
    pub const ALL: [Piece; 16] = [
        Piece::Corner(0),
        Piece::Corner(1),
        Piece::Corner(2),
        Piece::Corner(3),
        Piece::Corner(4),
        Piece::Corner(5),
        Piece::Corner(6),
        Piece::Corner(7),
        Piece::Edge(0),
        Piece::Edge(1),
        Piece::Edge(2),
        Piece::Edge(3),
        Piece::Edge(4),
        Piece::Edge(5),
        Piece::Edge(6),
        Piece::Edge(7),
    ];

    /// Width of the piece in wedge-units (1/12 of a full ring each).
    pub const fn width(self) -> u8 {
        match self {
            Piece::Corner(_) => 2,
            Piece::Edge(_) => 1,
        }
    }

    /// Parse a piece from its notation character (`A`-`H` or `1`-`8`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A'..='H' => Some(Piece::Corner(c as u8 - b'A')),
            '1'..='8' => Some(Piece::Edge(c as u8 - b'1')),
            _ => None,
        }
    }

    /// The notation character for this piece.
    pub fn as_char(self) -> char {
        match self {
            Piece::Corner(i) => (b'A' + i) as char,
            Piece::Edge(i) => (b'1' + i) as char,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Piece::Corner(0).width(), 2);
        assert_eq!(Piece::Edge(7).width(), 1);

        // Full piece set covers exactly two 12-wedge rings.
        let total: u32 = Piece::ALL.iter().map(|p| u32::from(p.width())).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_char_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_char(piece.as_char()), Some(piece));
        }
    }

    #[test]
    fn test_rejects_non_piece_chars() {
        assert_eq!(Piece::from_char('I'), None);
        assert_eq!(Piece::from_char('9'), None);
        assert_eq!(Piece::from_char('0'), None);
        assert_eq!(Piece::from_char('/'), None);
        assert_eq!(Piece::from_char('a'), None);
    }
}
