//! Rendering logic for the application

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::state::App;
use crate::ui::theme;
use crate::ui::widgets::{render_error_banner, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [list_area, _status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.render_list(frame, list_area);

        // The placeholder covers the list's inner area when it is empty
        self.empty_data_set.render(frame);

        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        render_status_bar(frame, self.state, self.items.len());
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_fetching() {
            " Items (fetching…) ".to_string()
        } else {
            format!(" Items ({}) ", self.items.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title).fg(theme::list_view::TITLE));
        let inner = block.inner(area);
        self.table.set_bounds(inner);

        let items: Vec<ListItem> = self
            .items
            .to_vec()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3} ", index + 1),
                        Style::default().fg(theme::list_view::INDEX),
                    ),
                    Span::raw(item),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(selected_row_style());
        let mut state = ListState::default().with_selected(
            (!self.items.is_empty()).then_some(self.selected),
        );
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Style of a selected list row
fn selected_row_style() -> Style {
    Style::default()
        .bg(theme::list_view::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}
