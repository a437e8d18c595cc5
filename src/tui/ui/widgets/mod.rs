//! Shared chrome: status bar, tab bar, help bar and the overlays.

pub mod help_bar;
pub mod help_overlay;
pub mod job_form;
pub mod status_bar;
pub mod tab_bar;
