//! UI rendering for the TUI.

mod layout;
pub mod tabs;
pub mod widgets;

pub use layout::render;
