//! Core game types.
//!
//! - `Piece`, `Color` and `BonusRule` - the 19 piece kinds and the two sides
//! - `Square` - playable squares of the cut-corner 12x12 board
//! - `Move` and `MoveList` - board moves and drops
//! - `Score` - signed score with win-distance encoding

mod moves;
mod piece;
mod score;
mod square;

pub use moves::{Move, MoveList, MAX_PLY};
pub use piece::{BonusRule, Color, Piece};
pub use score::Score;
pub use square::{Square, CORNER, HEIGHT, NUM_SLOTS, SANCTUARIES, WIDTH};
