//! Piece and layer data model for the Square-1 puzzle engine.
//!
//! A Square-1 ring holds 12 wedge-units of pieces: corners span 2 units and
//! edges span 1. This crate owns the per-ring logic (rotation legality and
//! slice-eligibility); composing two rings into a full puzzle lives in
//! `squareone-engine`.

mod layer;
mod piece;

pub use layer::{Layer, LayerError, LAYER_WEDGES};
pub use piece::Piece;
