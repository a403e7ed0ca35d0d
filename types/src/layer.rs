use std::fmt;
use std::str::FromStr;

use thiserror::Error as ThisError;

use crate::Piece;

/// Wedge-units in one full ring.
pub const LAYER_WEDGES: u32 = 12;

/// Wedge-units in one half of a ring, i.e. the slice plane offset.
pub(crate) const HALF_WEDGES: u32 = 6;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum LayerError {
    #[error("unrecognized piece '{0}'")]
    UnknownPiece(char),
    #[error("layer wedge sum must be {expected} (got {got})")]
    WrongWedgeSum { got: u32, expected: u32 },
}

/// One of the two 12-wedge rings of the puzzle.
///
/// The piece sequence is circular: index 0 sits at the slice plane and the
/// sequence runs around the ring, each piece occupying its own wedge width.
/// Every `Layer` holds pieces whose widths sum to exactly 12; constructors
/// that accept external input validate this, while [`Layer::new`] trusts the
/// caller (rotation and slicing both preserve the sum).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pieces: Vec<Piece>,
}

impl Layer {
    /// Build a layer from pieces already known to sum to 12 wedges.
    pub fn new(pieces: Vec<Piece>) -> Self {
        debug_assert_eq!(
            pieces.iter().map(|p| u32::from(p.width())).sum::<u32>(),
            LAYER_WEDGES
        );
        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Sum of the piece widths in wedge-units.
    pub fn wedge_sum(&self) -> u32 {
        self.pieces.iter().map(|p| u32::from(p.width())).sum()
    }

    /// Check the wedge-sum invariant explicitly.
    pub fn validate(&self) -> Result<(), LayerError> {
        let got = self.wedge_sum();
        if got != LAYER_WEDGES {
            return Err(LayerError::WrongWedgeSum {
                got,
                expected: LAYER_WEDGES,
            });
        }
        Ok(())
    }

    /// Index of the piece boundary where the running wedge sum first reaches
    /// exactly 6, if any. Past 6 without landing on it, no slice is possible.
    fn split_index(&self) -> Option<usize> {
        let mut sum = 0;
        for (i, piece) in self.pieces.iter().enumerate() {
            sum += u32::from(piece.width());
            if sum == HALF_WEDGES {
                return Some(i + 1);
            }
            if sum > HALF_WEDGES {
                return None;
            }
        }
        None
    }

    /// Whether the ring can be partitioned into two 6-wedge halves at piece
    /// boundaries, the structural precondition for a slice.
    pub fn is_sliceable(&self) -> bool {
        self.split_index().is_some()
    }

    /// The two 6-wedge halves of the ring, or `None` when unsliceable.
    pub fn halves(&self) -> Option<(&[Piece], &[Piece])> {
        self.split_index().map(|i| self.pieces.split_at(i))
    }

    /// Rotate the ring by `amount` wedge-units. Positive amounts pull the
    /// trailing piece around to the front, negative amounts push the leading
    /// piece to the back; `0` is always legal and a no-op.
    ///
    /// The walk consumes each boundary piece's width from the remaining
    /// amount. The turn succeeds only if the amount is exhausted exactly at a
    /// piece boundary and the rotated ring is still sliceable; otherwise the
    /// pre-call composition is restored and `false` is returned. Zero-width
    /// landings on an unsliceable ring are rejected because every turn in
    /// notation is followed by a slice.
    pub fn turn(&mut self, amount: i32) -> bool {
        if amount == 0 {
            return true;
        }

        let saved = self.pieces.clone();
        let mut remaining = amount.unsigned_abs();

        loop {
            let boundary = if amount > 0 {
                self.pieces.last()
            } else {
                self.pieces.first()
            };
            let Some(&piece) = boundary else {
                // Empty ring: nothing to rotate against.
                self.pieces = saved;
                return false;
            };

            let width = u32::from(piece.width());
            if remaining < width {
                if remaining == 0 && self.is_sliceable() {
                    return true;
                }
                self.pieces = saved;
                return false;
            }
            remaining -= width;
            if amount > 0 {
                self.pieces.rotate_right(1);
            } else {
                self.pieces.rotate_left(1);
            }
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            write!(f, "{}", piece.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Layer {
    type Err = LayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pieces = Vec::with_capacity(s.len());
        for c in s.chars() {
            pieces.push(Piece::from_char(c).ok_or(LayerError::UnknownPiece(c))?);
        }
        let layer = Self { pieces };
        layer.validate()?;
        Ok(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(s: &str) -> Layer {
        s.parse().expect("test layer must parse")
    }

    #[test]
    fn test_parse_and_display() {
        let top = layer("A1B2C3D4");
        assert_eq!(top.to_string(), "A1B2C3D4");
        assert_eq!(top.wedge_sum(), 12);

        let corners = layer("ABCDEF");
        assert_eq!(corners.wedge_sum(), 12);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "A1B2C3DX".parse::<Layer>(),
            Err(LayerError::UnknownPiece('X'))
        );
        assert_eq!(
            "A1B2C3D".parse::<Layer>(),
            Err(LayerError::WrongWedgeSum {
                got: 11,
                expected: 12
            })
        );
        assert_eq!(
            "A1B2C3D44".parse::<Layer>(),
            Err(LayerError::WrongWedgeSum {
                got: 13,
                expected: 12
            })
        );
    }

    #[test]
    fn test_sliceable() {
        // Running sums 2, 3, 5, 6: boundary lands after "A1B2".
        assert!(layer("A1B2C3D4").is_sliceable());
        assert!(layer("ABCDEF").is_sliceable());

        // 1 + A..E (10) + 8 runs 1,3,5,7: the sum skips 6 entirely.
        assert!(!layer("1ABCDE8").is_sliceable());
    }

    #[test]
    fn test_halves() {
        let top = layer("A1B2C3D4");
        let (left, right) = top.halves().expect("solved top is sliceable");
        let render = |half: &[Piece]| half.iter().copied().map(Piece::as_char).collect::<String>();
        assert_eq!(render(left), "A1B2");
        assert_eq!(render(right), "C3D4");

        assert_eq!(layer("1ABCDE8").halves(), None);
    }

    #[test]
    fn test_turn_zero_is_noop() {
        let mut top = layer("A1B2C3D4");
        assert!(top.turn(0));
        assert_eq!(top.to_string(), "A1B2C3D4");
    }

    #[test]
    fn test_turn_positive() {
        let mut top = layer("A1B2C3D4");
        assert!(top.turn(1));
        assert_eq!(top.to_string(), "4A1B2C3D");

        assert!(top.turn(2));
        assert_eq!(top.to_string(), "D4A1B2C3");
    }

    #[test]
    fn test_turn_negative() {
        let mut top = layer("A1B2C3D4");
        assert!(top.turn(-2));
        assert_eq!(top.to_string(), "1B2C3D4A");

        assert!(top.turn(-1));
        assert_eq!(top.to_string(), "B2C3D4A1");
    }

    #[test]
    fn test_turn_round_trip() {
        let mut top = layer("A1B2C3D4");
        assert!(top.turn(3));
        assert!(top.turn(-3));
        assert_eq!(top.to_string(), "A1B2C3D4");
    }

    #[test]
    fn test_turn_mid_piece_fails_and_restores() {
        // From solved, +2 exhausts after pulling '4' around with one wedge
        // left against corner 'D'.
        let mut top = layer("A1B2C3D4");
        assert!(!top.turn(2));
        assert_eq!(top.to_string(), "A1B2C3D4");

        let mut bottom = layer("5E6F7G8H");
        assert!(!bottom.turn(-2));
        assert_eq!(bottom.to_string(), "5E6F7G8H");
    }

    #[test]
    fn test_turn_boundary_landing_must_stay_sliceable() {
        // +3 lands exactly on a boundary ("E2ABC1D") but the result runs
        // 2,3,5,7 past the slice plane, so the turn is rejected.
        let mut ring = layer("ABC1DE2");
        assert!(!ring.turn(3));
        assert_eq!(ring.to_string(), "ABC1DE2");

        // The half rotation lands on a boundary and stays sliceable.
        assert!(ring.turn(6));
        assert_eq!(ring.to_string(), "1DE2ABC");
    }

    #[test]
    fn test_turn_full_rotation() {
        let mut top = layer("A1B2C3D4");
        assert!(top.turn(6));
        assert_eq!(top.to_string(), "C3D4A1B2");
        assert!(top.turn(6));
        assert_eq!(top.to_string(), "A1B2C3D4");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// A successful turn is undone by the opposite turn; a failed
            /// turn leaves the composition untouched. Holds for any
            /// sliceable starting ring.
            #[test]
            fn prop_turn_inverse_restores(
                start in proptest::sample::select(vec![
                    "A1B2C3D4", "5E6F7G8H", "ABCDEF", "GH12345678", "1DE2ABC",
                ]),
                amount in -6i32..=6,
            ) {
                let mut ring = layer(start);
                let before = ring.to_string();
                if ring.turn(amount) {
                    prop_assert_eq!(ring.wedge_sum(), 12);
                    prop_assert!(ring.turn(-amount));
                    prop_assert_eq!(ring.to_string(), before);
                } else {
                    prop_assert_eq!(ring.to_string(), before);
                }
            }
        }
    }
}
