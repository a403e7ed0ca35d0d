//! Lenient move-notation tokenizer.
//!
//! Algorithm text is scanned character by character and everything outside
//! the digit / `/` / `,` / `-` classes is silently discarded, so inputs like
//! `"(1,0) / ignore this (3,0)"` read the same as `"1,0/3,0"`. The cleaned
//! stream splits on `/` into move-groups (one slice point each) and each
//! group on `,` into at most two signed turn fields: top, then bottom. An
//! absent or empty field means no rotation.

use crate::PuzzleError;

/// One slash-delimited move-group: up to two layer turns followed by a
/// slice. `None` fields were absent in the notation; `raw` keeps the cleaned
/// group text for error reporting and survives inversion unchanged, so a
/// failing inverted move is always described in the user's own notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParsedMove {
    pub top: Option<i32>,
    pub bottom: Option<i32>,
    pub raw: String,
}

impl ParsedMove {
    pub fn top_amount(&self) -> i32 {
        self.top.unwrap_or(0)
    }

    pub fn bottom_amount(&self) -> i32 {
        self.bottom.unwrap_or(0)
    }
}

/// Strip every character the grammar does not know about.
fn simplify(alg: &str) -> String {
    alg.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '/' | ',' | '-'))
        .collect()
}

/// Fold a turn amount into `[-6, 6]`, wrapping by whole rings toward zero.
/// Truncating `%` keeps the dividend's sign and cannot overflow for any
/// `i32` (12 is never -1), so extreme amounts fold without panicking.
fn normalize(amount: i32) -> i32 {
    let mut folded = amount % 12;
    if folded > 6 {
        folded -= 12;
    } else if folded < -6 {
        folded += 12;
    }
    folded
}

/// `Ok(None)` for an empty field, `Err(())` for non-numeric residue such as
/// an isolated or doubled `-`.
fn parse_field(field: &str) -> Result<Option<i32>, ()> {
    if field.is_empty() {
        return Ok(None);
    }
    match field.parse::<i32>() {
        Ok(amount) => Ok(Some(normalize(amount))),
        Err(_) => Err(()),
    }
}

/// Tokenize algorithm text into an ordered move-group sequence.
///
/// Parsing is an eager phase: syntax errors surface before any turn is
/// applied, tagged with the offending group text and its 1-based position.
pub(crate) fn parse(alg: &str) -> Result<Vec<ParsedMove>, PuzzleError> {
    let cleaned = simplify(alg);
    let mut moves = Vec::new();

    for (index, group) in cleaned.split('/').enumerate() {
        let syntax_error = || PuzzleError::Syntax {
            group: group.to_string(),
            position: index + 1,
        };

        let fields: Vec<&str> = group.split(',').collect();
        if fields.len() > 2 {
            return Err(syntax_error());
        }

        let top = parse_field(fields[0]).map_err(|()| syntax_error())?;
        let bottom = match fields.get(1) {
            Some(field) => parse_field(field).map_err(|()| syntax_error())?,
            None => None,
        };

        moves.push(ParsedMove {
            top,
            bottom,
            raw: group.to_string(),
        });
    }

    Ok(moves)
}

/// Invert a move sequence: reverse the group order and negate every present
/// turn amount. Composing a sequence with its inversion (in either order)
/// has zero net effect on the puzzle.
pub(crate) fn invert(mut moves: Vec<ParsedMove>) -> Vec<ParsedMove> {
    moves.reverse();
    for mv in &mut moves {
        mv.top = mv.top.map(|amount| -amount);
        mv.bottom = mv.bottom.map(|amount| -amount);
    }
    moves
}
