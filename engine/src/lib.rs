//! Square-1 puzzle state engine.
//!
//! This crate models the Square-1 twisty puzzle as pure, deterministic
//! state: two 12-wedge rings (`squareone-types`) joined at a sliceable
//! equator. [`PuzzleState`] owns the lenient notation parser, per-move turn
//! legality, algorithm inversion, and full-state loading.
//!
//! ## Transactional discipline
//! Every mutating operation snapshots the puzzle at entry and restores it
//! wholesale on any failure: from the caller's perspective an operation
//! either commits completely or changes nothing. Failures are structured
//! [`PuzzleError`]s and are also recorded as a human-readable message via
//! [`PuzzleState::last_error`], which clears on the next success.
//!
//! ## Notation
//! Algorithms are slash-delimited move-groups, each holding up to two
//! comma-separated signed turn amounts (top, bottom) in wedge-units; every
//! group boundary is a slice. Characters outside the digit / `/` / `,` /
//! `-` classes are ignored, so annotated or parenthesized input is fine:
//!
//! ```
//! use squareone_engine::PuzzleState;
//!
//! let mut puzzle = PuzzleState::new();
//! puzzle.apply_algorithm("(1,0) / nothing else to see here", false)?;
//! assert_eq!(puzzle.to_string(), "4A1B5E6F/2C3D7G8H");
//! # Ok::<(), squareone_engine::PuzzleError>(())
//! ```
//!
//! Full states use the 16 piece characters plus an optional orientation
//! marker: `puzzle.apply_state("ABCDEF GH12345678 /")`.

mod error;
mod notation;
mod state;

pub use error::PuzzleError;
pub use state::PuzzleState;
