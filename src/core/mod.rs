//! Core module - the simulation engine
//!
//! Pure game rules and state management. No terminal or rendering
//! dependencies; persistence is reached only through the
//! [`HighScoreStore`] trait and randomness only through [`SimpleRng`].

pub mod board;
pub mod game_state;
pub mod gate;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use gate::HoldGate;
pub use pieces::{canonical_form, rotate, Form, Piece};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use store::{FileStore, HighScoreStore, MemoryStore};
