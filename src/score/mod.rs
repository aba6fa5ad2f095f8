//! High-score persistence
//!
//! The engine talks to a [`ScoreStore`]; the file-backed implementation
//! migrates the two storage formats older versions of the game wrote.

pub mod store;

pub use store::{FileScoreStore, HighScore, MemoryScoreStore, ScoreStore, DEFAULT_OWNER};
