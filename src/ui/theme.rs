//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the placeholder view
pub mod placeholder {
    use super::*;

    /// Placeholder background (terminal default)
    pub const BACKGROUND: Color = Color::Reset;
    /// Title text color
    pub const TITLE: Color = Color::Gray;
    /// Detail text color
    pub const DETAIL: Color = Color::DarkGray;
    /// Image color when the image carries no style of its own
    pub const IMAGE: Color = Color::Cyan;
    /// Button title color
    pub const BUTTON_TITLE: Color = Color::Gray;
    /// Button title color while highlighted
    pub const BUTTON_HIGHLIGHT: Color = Color::White;
}

/// Colors for the demo list screen
pub mod list_view {
    use super::*;

    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
    /// Item index color
    pub const INDEX: Color = Color::Yellow;
    /// Border title color
    pub const TITLE: Color = Color::Cyan;
}

/// Colors for the demo status bar
pub mod status_bar {
    use super::*;

    /// Key hint color
    pub const KEY: Color = Color::Yellow;
    /// State label colors
    pub const LOADING: Color = Color::Cyan;
    pub const LOADED: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}
