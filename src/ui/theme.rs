//! Color theme constants for the jobbot UI
//!
//! Minimal dark palette used throughout the form.

use ratatui::style::Color;

/// Card and inactive field borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused field border and the enabled submit control
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Card title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and the disabled submit control
pub const COLOR_DIM: Color = Color::DarkGray;

/// Success result and reachable backend
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Failure result and unreachable backend
pub const COLOR_ERROR: Color = Color::Red;

/// Validation notice
pub const COLOR_WARNING: Color = Color::Yellow;
