//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::model::EmptyDataSetState;
use crate::ui::theme;

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Label span for the placeholder state
fn state_span(state: EmptyDataSetState, item_count: usize) -> Span<'static> {
    let color = match state {
        EmptyDataSetState::Loading => theme::status_bar::LOADING,
        EmptyDataSetState::Error => theme::status_bar::ERROR,
        EmptyDataSetState::Loaded | EmptyDataSetState::None => theme::status_bar::LOADED,
    };
    Span::styled(
        format!(" {} · {} items ", state.label(), item_count),
        Style::default().fg(Color::Black).bg(color),
    )
}

/// Calculate status bar area at bottom of `area`
pub fn status_bar_area(area: Rect) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the demo status bar
pub fn render_status_bar(frame: &mut Frame, state: EmptyDataSetState, item_count: usize) {
    let Some(status_area) = status_bar_area(frame.area()) else {
        return;
    };

    let status =
        build_status_bar_with_prefix(vec![state_span(state, item_count)], keys::DEMO_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}
