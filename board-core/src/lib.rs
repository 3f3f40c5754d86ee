//! Interaction model for the grid board editor.
//!
//! Everything here is plain data and total operations; the browser host in
//! `board-wasm` only translates DOM events into calls on [`BoardController`].

mod board;
mod catalog;
mod config;
mod geometry;
mod piece;
mod render;
mod session;

pub use board::{BoardController, BoardSnapshot, Settled};
pub use catalog::{DEFAULT_CATALOG, PieceArchetype};
pub use config::{BoardConfig, GRID_UNIT, OUTLINE_COLOR};
pub use geometry::{Point, snap};
pub use piece::PlacedPiece;
pub use render::Surface;
pub use session::{DragSession, ParsePolicyError, ReleasePolicy};
