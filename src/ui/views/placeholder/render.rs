//! Placeholder View rendering

use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::PlaceholderView;
use crate::ui::theme;

impl PlaceholderView {
    /// Render the placeholder over `area`, replacing what is underneath
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_at(area, frame.buffer_mut(), Instant::now());
    }

    /// Render as of `now` (selects the animation frame)
    pub fn render_at(&mut self, area: Rect, buf: &mut Buffer, now: Instant) {
        if self.hidden || area.is_empty() {
            return;
        }
        let layout = self.layout_if_needed(area);

        Clear.render(area, buf);
        buf.set_style(area, self.config.background);

        self.image_view.render_at(
            layout.image.clip(area),
            buf,
            Style::default().fg(theme::placeholder::IMAGE),
            now,
        );

        if let Some(title) = &self.title {
            Paragraph::new(title.clone())
                .style(self.config.title_style)
                .alignment(Alignment::Center)
                .render(layout.title.clip(area), buf);
        }

        if let Some(detail) = &self.detail {
            Paragraph::new(detail.clone())
                .style(self.config.detail_style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(layout.detail.clip(area), buf);
        }

        self.candidate_button()
            .render_styled(layout.button.clip(area), buf, self.config.button_style);
    }
}
