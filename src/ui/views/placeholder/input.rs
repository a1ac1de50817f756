//! Placeholder View input handling

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::PlaceholderView;
use crate::keys;
use crate::model::ControlState;

impl PlaceholderView {
    /// Handle a key press; returns true if the button was tapped
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.hidden || !keys::is_activate(key.code) {
            return false;
        }
        self.tap_button()
    }

    /// Handle a mouse event; returns true if the event was consumed
    ///
    /// A left press inside the button highlights it, and releasing inside
    /// the button taps it.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if self.hidden {
            return false;
        }
        let inside = self
            .button_rect()
            .is_some_and(|rect| rect.contains(Position::new(event.column, event.row)));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                let button = self.candidate_button_mut();
                if !button.is_enabled() {
                    return false;
                }
                let previous = button.control_state();
                button.set_control_state(ControlState::Highlighted);
                self.pressed_from = Some(previous);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(previous) = self.pressed_from.take() else {
                    return false;
                };
                self.candidate_button_mut().set_control_state(previous);
                if inside {
                    self.tap_button();
                }
                true
            }
            _ => false,
        }
    }

    /// Screen area of the visible button from the last layout pass
    pub fn button_rect(&self) -> Option<Rect> {
        if self.candidate_button().is_hidden() {
            return None;
        }
        let layout = self.layout.as_ref()?;
        let rect = layout.button.clip(layout.area);
        (!rect.is_empty()).then_some(rect)
    }
}
