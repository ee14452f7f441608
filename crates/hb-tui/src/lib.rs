//! hb-tui: Terminal UI layer using ratatui
//!
//! Renders a hydrated table page and maps mouse and keyboard input
//! onto the page interaction model from `hb-core`.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, Command};
pub use theme::Theme;
