//! Core game logic: grid, shape tables, piece supply, and the engine that
//! ties them together.

pub mod board;
pub mod engine;
pub mod piece_gen;
pub mod pieces;

pub use board::Board;
pub use engine::{ActivePiece, BoardEngine};
pub use piece_gen::PieceGen;
pub use pieces::{shape, CellOffset, ShapePattern};
