pub mod board;
pub mod piece;
pub mod source;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{Piece, Shape};
pub use source::{PieceSource, RandomSource, SequenceSource};
pub use state::{Game, Phase, RenderCell};
