//! Input adapter: keyboard mapping and swipe gesture resolution

pub mod handler;
pub mod swipe;

pub use handler::{InputAction, InputHandler};
pub use swipe::{SwipeTracker, SWIPE_MIN_DISTANCE};
