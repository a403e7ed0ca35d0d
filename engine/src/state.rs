use std::fmt;

use squareone_types::{Layer, Piece, LAYER_WEDGES};

use crate::notation::{self, ParsedMove};
use crate::PuzzleError;

/// Solved reference composition of the top ring.
const SOLVED_TOP: [Piece; 8] = [
    Piece::Corner(0), // A
    Piece::Edge(0),   // 1
    Piece::Corner(1), // B
    Piece::Edge(1),   // 2
    Piece::Corner(2), // C
    Piece::Edge(2),   // 3
    Piece::Corner(3), // D
    Piece::Edge(3),   // 4
];

/// Solved reference composition of the bottom ring.
const SOLVED_BOTTOM: [Piece; 8] = [
    Piece::Edge(4),   // 5
    Piece::Corner(4), // E
    Piece::Edge(5),   // 6
    Piece::Corner(5), // F
    Piece::Edge(6),   // 7
    Piece::Corner(6), // G
    Piece::Edge(7),   // 8
    Piece::Corner(7), // H
];

/// The full Square-1 apparatus: two 12-wedge rings joined at the equator.
///
/// Every mutating operation is transactional: it either commits completely
/// or restores the snapshot taken at entry and reports a [`PuzzleError`].
/// The puzzle is exclusively owned state with no interior mutability;
/// concurrent callers must serialize access to an instance themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    top: Layer,
    bottom: Layer,
    /// Whether the two rings are joined in swapped (`/`) rather than
    /// original (`-`) orientation relative to solved. Display only; piece
    /// positions are unaffected.
    equator_flipped: bool,
    last_error: String,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleState {
    /// A puzzle in the solved reference composition.
    pub fn new() -> Self {
        Self {
            top: Layer::new(SOLVED_TOP.to_vec()),
            bottom: Layer::new(SOLVED_BOTTOM.to_vec()),
            equator_flipped: false,
            last_error: String::new(),
        }
    }

    pub fn top(&self) -> &Layer {
        &self.top
    }

    pub fn bottom(&self) -> &Layer {
        &self.bottom
    }

    pub fn equator_flipped(&self) -> bool {
        self.equator_flipped
    }

    /// Message of the most recent failed operation; empty after a success.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Apply algorithm notation to the puzzle.
    ///
    /// With `for_case` set, the parsed sequence is inverted before
    /// application: the algorithm is read as one that *produces* the current
    /// appearance from solved, so applying its inverse recovers solved.
    ///
    /// Per move-group, in order: top turn, bottom turn, then an
    /// unconditional slice; one closing slice follows the final group. Any
    /// failure rolls the whole puzzle back and records [`last_error`].
    ///
    /// [`last_error`]: PuzzleState::last_error
    pub fn apply_algorithm(&mut self, alg: &str, for_case: bool) -> Result<(), PuzzleError> {
        let snapshot = self.clone();
        match self.apply_algorithm_inner(alg, for_case) {
            Ok(()) => {
                self.last_error.clear();
                tracing::debug!(alg, for_case, state = %self, "algorithm applied");
                Ok(())
            }
            Err(err) => {
                *self = snapshot;
                self.last_error = err.to_string();
                tracing::warn!(alg, for_case, ?err, "algorithm rejected");
                Err(err)
            }
        }
    }

    fn apply_algorithm_inner(&mut self, alg: &str, for_case: bool) -> Result<(), PuzzleError> {
        let mut moves = notation::parse(alg)?;
        if for_case {
            moves = notation::invert(moves);
        }

        let total = moves.len();
        for (index, mv) in moves.iter().enumerate() {
            let legal = self.top.turn(mv.top_amount())
                && self.bottom.turn(mv.bottom_amount())
                && self.slash();
            if !legal {
                return Err(turn_error(mv, original_position(index, total, for_case), for_case));
            }
        }

        // Closing slice. The final group's slice left both rings split at
        // the 6-wedge boundary, so this cannot fail; the guard keeps the
        // error path total anyway.
        if let Some(mv) = moves.last() {
            if !self.slash() {
                return Err(turn_error(
                    mv,
                    original_position(total - 1, total, for_case),
                    for_case,
                ));
            }
        }
        Ok(())
    }

    /// Load a full-state description, replacing both rings and the equator
    /// flag. Whitespace is ignored and letters are case-insensitive. The 16
    /// piece identities must each appear exactly once, with at most one
    /// orientation marker (`/` flipped, `-` or absent: not flipped).
    pub fn apply_state(&mut self, state: &str) -> Result<(), PuzzleError> {
        let snapshot = self.clone();
        match self.apply_state_inner(state) {
            Ok(()) => {
                self.last_error.clear();
                tracing::debug!(state = %self, "state loaded");
                Ok(())
            }
            Err(err) => {
                *self = snapshot;
                self.last_error = err.to_string();
                tracing::warn!(input = state, ?err, "state rejected");
                Err(err)
            }
        }
    }

    fn apply_state_inner(&mut self, state: &str) -> Result<(), PuzzleError> {
        let cleaned: String = state
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let mut pieces = Vec::with_capacity(16);
        let mut marker = None;
        let mut residue = String::new();
        for c in cleaned.chars() {
            if let Some(piece) = Piece::from_char(c) {
                pieces.push(piece);
            } else if (c == '/' || c == '-') && marker.is_none() {
                marker = Some(c);
            } else {
                residue.push(c);
            }
        }

        // Missing identities are reported first, in canonical piece order.
        for required in Piece::ALL {
            if !pieces.contains(&required) {
                return Err(PuzzleError::MissingPiece {
                    input: cleaned.clone(),
                    piece: required.as_char(),
                });
            }
        }

        // All 16 identities are present, so any repeat is a duplicate.
        let mut seen: Vec<Piece> = Vec::with_capacity(16);
        for piece in &pieces {
            if seen.contains(piece) {
                residue.push(piece.as_char());
            } else {
                seen.push(*piece);
            }
        }
        if !residue.is_empty() {
            return Err(PuzzleError::UnexpectedPieces {
                input: cleaned.clone(),
                residue,
            });
        }

        // Split where the running wedge sum first reaches one full ring.
        let mut split = None;
        let mut sum = 0;
        for (index, piece) in pieces.iter().enumerate() {
            sum += u32::from(piece.width());
            if sum == LAYER_WEDGES {
                split = Some(index + 1);
                break;
            }
            if sum > LAYER_WEDGES {
                break;
            }
        }
        let Some(split) = split else {
            return Err(PuzzleError::ImpossibleSplit { input: cleaned });
        };

        let (top, bottom) = pieces.split_at(split);
        self.top = Layer::new(top.to_vec());
        self.bottom = Layer::new(bottom.to_vec());
        self.equator_flipped = marker == Some('/');
        Ok(())
    }

    /// Slice: exchange the facing 6-wedge halves of the two rings and toggle
    /// the equator orientation. Returns `false` (leaving the puzzle
    /// untouched) when either ring has no piece boundary at the slice plane,
    /// which the apply loop reports as an illegal move.
    fn slash(&mut self) -> bool {
        let recombined = match (self.top.halves(), self.bottom.halves()) {
            (Some((top_front, top_back)), Some((bottom_front, bottom_back))) => (
                [top_front, bottom_front].concat(),
                [top_back, bottom_back].concat(),
            ),
            _ => return false,
        };
        self.top = Layer::new(recombined.0);
        self.bottom = Layer::new(recombined.1);
        self.equator_flipped = !self.equator_flipped;
        true
    }
}

/// Map a group index in application order back to the 1-based position in
/// the user's original input: inversion reverses the order, so in case mode
/// the index counts from the end.
fn original_position(index: usize, total: usize, for_case: bool) -> usize {
    if for_case {
        total - index
    } else {
        index + 1
    }
}

fn turn_error(mv: &ParsedMove, position: usize, for_case: bool) -> PuzzleError {
    if for_case {
        PuzzleError::CaseAlignment {
            group: mv.raw.clone(),
            position,
        }
    } else {
        PuzzleError::IllegalTurn {
            group: mv.raw.clone(),
            position,
        }
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.equator_flipped { '/' } else { '-' };
        write!(f, "{}{}{}", self.top, sep, self.bottom)
    }
}
