//! Color theme definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::projector::{JobStatus, OccurrenceStatus};

/// Dark theme colors for the TUI.
pub struct Theme;

impl Theme {
    // Status colors
    pub const ACTIVE: Color = Color::Green;
    pub const PENDING: Color = Color::Yellow;
    pub const UNKNOWN: Color = Color::DarkGray;
    pub const FAILURE: Color = Color::Red;

    // UI colors
    pub const HEADER_BG: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;
    pub const SELECTED_BG: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Gray;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Cyan;

    /// Style for an occurrence status.
    pub fn occurrence_status(status: OccurrenceStatus) -> Style {
        match status {
            OccurrenceStatus::Active => Style::default().fg(Self::ACTIVE),
            OccurrenceStatus::Pending => Style::default().fg(Self::PENDING),
        }
    }

    /// Style for a job status.
    pub fn job_status(status: JobStatus) -> Style {
        match status {
            JobStatus::Active => Style::default().fg(Self::ACTIVE),
            JobStatus::Pending => Style::default().fg(Self::PENDING),
            JobStatus::Unknown => Style::default().fg(Self::UNKNOWN),
        }
    }

    /// Style for failure counts and errors.
    pub fn failure() -> Style {
        Style::default().fg(Self::FAILURE)
    }

    /// Style for success counts.
    pub fn success() -> Style {
        Style::default().fg(Self::ACTIVE)
    }

    /// Style for selected/highlighted items.
    pub fn selected() -> Style {
        Style::default()
            .bg(Self::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the header/status bar.
    pub fn header() -> Style {
        Style::default().bg(Self::HEADER_BG).fg(Self::HEADER_FG)
    }

    /// Style for tab labels.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive tabs.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Style for borders.
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Style for normal text.
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Style for dimmed/secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Style for headings and figures.
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }
}
