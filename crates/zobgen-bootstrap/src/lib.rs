mod color;
mod piece;
mod rng;
mod zobrist_map;

pub use color::*;
pub use piece::*;
pub use rng::*;
pub use zobrist_map::*;
