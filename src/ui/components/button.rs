//! Button component
//!
//! A rectangular, activatable region with a title and background image per
//! control state. Used both as the placeholder's default button and as the
//! caller-supplied custom button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::model::{ControlState, Image};
use crate::ui::theme;

/// Button state and appearance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    /// Caller-chosen identifier, reported back on tap
    tag: Option<String>,
    titles: [Option<Line<'static>>; 4],
    background_images: [Option<Image>; 4],
    background_color: Option<Color>,
    control_state: ControlState,
    /// Natural size; zero means "use the configured default"
    size: Size,
    hidden: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a caller-supplied button identified by `tag`
    pub fn custom(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<Line<'static>>, state: ControlState) -> Self {
        self.set_title(Some(title.into()), state);
        self
    }

    pub fn with_background_image(mut self, image: Image, state: ControlState) -> Self {
        self.set_background_image(Some(image), state);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_title(&mut self, title: Option<Line<'static>>, state: ControlState) {
        self.titles[state.index()] = title;
    }

    pub fn title(&self, state: ControlState) -> Option<&Line<'static>> {
        self.titles[state.index()].as_ref()
    }

    /// Title for the current control state, falling back to the normal title
    pub fn current_title(&self) -> Option<&Line<'static>> {
        self.title(self.control_state)
            .or_else(|| self.title(ControlState::Normal))
    }

    pub fn set_background_image(&mut self, image: Option<Image>, state: ControlState) {
        self.background_images[state.index()] = image;
    }

    pub fn background_image(&self, state: ControlState) -> Option<&Image> {
        self.background_images[state.index()].as_ref()
    }

    /// Background image for the current control state, falling back to normal
    pub fn current_background_image(&self) -> Option<&Image> {
        self.background_image(self.control_state)
            .or_else(|| self.background_image(ControlState::Normal))
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn control_state(&self) -> ControlState {
        self.control_state
    }

    pub fn set_control_state(&mut self, state: ControlState) {
        self.control_state = state;
    }

    pub fn is_enabled(&self) -> bool {
        self.control_state != ControlState::Disabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Natural size of the button (zero if unset)
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// True if the button has any title, background image or color
    pub fn has_content(&self) -> bool {
        self.titles.iter().any(Option::is_some)
            || self.background_images.iter().any(Option::is_some)
            || self.background_color.is_some()
    }

    /// Drop every title, background image and the background color
    pub fn clear_content(&mut self) {
        self.titles = Default::default();
        self.background_images = Default::default();
        self.background_color = None;
    }

    /// Render with `base` as the title style
    pub fn render_styled(&self, area: Rect, buf: &mut Buffer, base: Style) {
        if self.hidden || area.is_empty() {
            return;
        }

        let mut style = base;
        if let Some(color) = self.background_color {
            style = style.bg(color);
        }
        match self.control_state {
            ControlState::Highlighted => {
                style = style
                    .fg(theme::placeholder::BUTTON_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD);
            }
            ControlState::Selected => style = style.add_modifier(Modifier::REVERSED),
            ControlState::Disabled => style = style.add_modifier(Modifier::DIM),
            ControlState::Normal => {}
        }
        buf.set_style(area, style);

        if let Some(image) = self.current_background_image() {
            Paragraph::new(image.text().clone())
                .alignment(Alignment::Center)
                .render(area, buf);
        }

        if let Some(title) = self.current_title() {
            // Title sits on the middle row
            let row = Rect {
                y: area.y + area.height.saturating_sub(1) / 2,
                height: 1,
                ..area
            };
            Paragraph::new(title.clone())
                .alignment(Alignment::Center)
                .render(row, buf);
        }
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_styled(
            area,
            buf,
            Style::default().fg(theme::placeholder::BUTTON_TITLE),
        );
    }
}
