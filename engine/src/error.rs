use thiserror::Error as ThisError;

/// Structured failure reported by a mutating puzzle operation.
///
/// Every variant is non-fatal: the operation that produced it has already
/// rolled the puzzle back to its pre-call state. `group` is the cleaned
/// move-group text and `position` its 1-based index in the caller's
/// original move order; `input` is the cleaned full-state text.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PuzzleError {
    #[error("syntax error at \"{group}\" (move #{position})")]
    Syntax { group: String, position: usize },
    #[error("illegal turn at \"{group}\" (move #{position}): a layer is left unsliceable")]
    IllegalTurn { group: String, position: usize },
    #[error(
        "cannot invert case at \"{group}\" (move #{position}): \
         check that the case starts and ends with the equator aligned"
    )]
    CaseAlignment { group: String, position: usize },
    #[error("state \"{input}\" is missing piece '{piece}'")]
    MissingPiece { input: String, piece: char },
    #[error("state \"{input}\" contains unexpected input \"{residue}\"")]
    UnexpectedPieces { input: String, residue: String },
    #[error("state \"{input}\" cannot be split into two 12-wedge layers")]
    ImpossibleSplit { input: String },
}
