//! Terminal brick-game Tetris.
//!
//! The simulation engine lives in [`core`] and is deterministic: it takes an
//! injectable random source and an injectable high-score store, and exposes a
//! tick/action/snapshot API. The [`input`] and [`term`] modules are the
//! terminal front-end and never leak into the core.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
