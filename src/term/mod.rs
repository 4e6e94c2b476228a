//! Terminal module - raw-mode setup and frame rendering.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
