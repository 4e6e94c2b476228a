//! Input module - translates terminal key events into engine actions.

pub mod map;

pub use map::{is_forced_quit, map_key};
