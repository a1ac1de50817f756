//! Placeholder configuration
//!
//! Default sizes and styles of the placeholder view. Content sources can
//! still override image size, button size and vertical offset per reload.

use std::time::Duration;

use ratatui::{layout::Size, style::Style};

use crate::ui::theme;

/// Default image area (cells)
pub const DEFAULT_IMAGE_SIZE: Size = Size::new(24, 6);
/// Default button size (cells)
pub const DEFAULT_BUTTON_SIZE: Size = Size::new(16, 3);
/// Rows between image, title, detail and button
pub const DEFAULT_SPACING: u16 = 1;
/// Duration of one full cycle through an image sequence
pub const DEFAULT_ANIMATION_CYCLE: Duration = Duration::from_millis(800);

/// Configuration of a placeholder view
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderConfig {
    /// Size of the image element until a source overrides it
    pub image_size: Size,
    /// Size of a button whose natural size is zero
    pub button_size: Size,
    /// Vertical gap between stacked elements
    pub spacing: u16,
    /// Initial vertical offset from centre
    pub vertical_offset: i16,
    /// Duration of one full animation cycle
    pub animation_cycle: Duration,
    /// Style of the whole placeholder area
    pub background: Style,
    /// Base style of the title (source styling is patched on top)
    pub title_style: Style,
    /// Base style of the detail text
    pub detail_style: Style,
    /// Base style of button titles
    pub button_style: Style,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            button_size: DEFAULT_BUTTON_SIZE,
            spacing: DEFAULT_SPACING,
            vertical_offset: 0,
            animation_cycle: DEFAULT_ANIMATION_CYCLE,
            background: Style::default().bg(theme::placeholder::BACKGROUND),
            title_style: Style::default().fg(theme::placeholder::TITLE),
            detail_style: Style::default().fg(theme::placeholder::DETAIL),
            button_style: Style::default().fg(theme::placeholder::BUTTON_TITLE),
        }
    }
}

impl PlaceholderConfig {
    pub fn with_image_size(mut self, size: Size) -> Self {
        self.image_size = size;
        self
    }

    pub fn with_button_size(mut self, size: Size) -> Self {
        self.button_size = size;
        self
    }

    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_vertical_offset(mut self, offset: i16) -> Self {
        self.vertical_offset = offset;
        self
    }

    pub fn with_animation_cycle(mut self, cycle: Duration) -> Self {
        self.animation_cycle = cycle;
        self
    }

    pub fn with_background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }
}
