//! TUI application module
//!
//! Contains the terminal user interface components, section navigation,
//! and the application event loop.

pub mod app;
pub mod palette;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use palette::Palette;
pub use state::{NavAction, Navigator, Section};
pub use tui::Tui;
