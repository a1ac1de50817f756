//! Input handling for the application

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

use super::state::App;
use crate::keys;
use crate::model::EmptyDataSetState;

impl App {
    /// Dispatch one polled terminal event, if any, then advance time
    ///
    /// The tick runs for every call so a steady stream of input cannot
    /// hold back a pending fetch.
    pub fn on_event(&mut self, event: Option<Event>, now: Instant) {
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.on_key_event_at(key, now);
            }
            Some(Event::Mouse(mouse)) => self.on_mouse_event_at(mouse, now),
            _ => {}
        }
        self.on_tick(now);
    }

    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        self.on_key_event_at(key, Instant::now());
    }

    pub(crate) fn on_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // The placeholder button gets first look at activation keys
        if self.empty_data_set.handle_key(key) {
            self.process_taps(now);
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::ADD_ITEM => self.add_item(),
            keys::REMOVE_ITEM => self.remove_item(),
            keys::CLEAR_ITEMS => self.clear_items(),
            keys::SHOW_LOADING => self.start_fetch(0, now),
            keys::SHOW_ERROR => self.fail_fetch(),
            keys::RELOAD => self.reload(EmptyDataSetState::Loaded),
            code if keys::is_move_up(code) => self.move_up(),
            code if keys::is_move_down(code) => self.move_down(),
            _ => {}
        }
    }

    /// Handle mouse events
    pub fn on_mouse_event(&mut self, event: MouseEvent) {
        self.on_mouse_event_at(event, Instant::now());
    }

    pub(crate) fn on_mouse_event_at(&mut self, event: MouseEvent, now: Instant) {
        if self.empty_data_set.handle_mouse(event) {
            self.process_taps(now);
        }
    }
}
