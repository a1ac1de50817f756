//! Application state

use std::rc::Rc;
use std::time::{Duration, Instant};

use super::source::{DemoItems, DemoSource, TapAction};
use crate::container::TableView;
use crate::empty_data_set::EmptyDataSet;
use crate::model::{EmptyDataSetState, Image};

/// How long a simulated fetch stays in the loading state
pub const FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Items a successful retry brings back
const RETRY_ITEMS: usize = 3;

/// A simulated fetch resolved on a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingFetch {
    pub ready_at: Instant,
    /// Number of items the fetch returns
    pub items: usize,
}

/// The demo application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub(crate) items: Rc<DemoItems>,
    pub(crate) table: Rc<TableView>,
    pub(crate) source: Rc<DemoSource>,
    pub(crate) empty_data_set: EmptyDataSet,
    /// State used for the next reload
    pub(crate) state: EmptyDataSetState,
    /// Selected list row
    pub(crate) selected: usize,
    pub(crate) pending_fetch: Option<PendingFetch>,
    /// Counter used to name new items
    next_item: usize,
    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] with the built-in spinner
    pub fn new() -> Self {
        Self::with_source(DemoSource::default())
    }

    /// Construct an [`App`] that animates `frames` while loading
    pub fn with_spinner(frames: Vec<Image>) -> Self {
        Self::with_source(DemoSource::new(frames))
    }

    fn with_source(source: DemoSource) -> Self {
        let items = Rc::new(DemoItems::default());
        let table = Rc::new(TableView::new());
        table.set_data_source(&items);
        let source = Rc::new(source);
        let empty_data_set = EmptyDataSet::attach(&source, &source, &table);

        let mut app = Self {
            running: true,
            items,
            table,
            source,
            empty_data_set,
            state: EmptyDataSetState::Loaded,
            selected: 0,
            pending_fetch: None,
            next_item: 1,
            error_message: None,
        };

        app.reload(EmptyDataSetState::Loaded);
        app
    }

    /// Reload the placeholder against the current items
    pub(crate) fn reload(&mut self, state: EmptyDataSetState) {
        self.state = state;
        self.empty_data_set.reload(self.table.as_ref(), state);
    }

    pub(crate) fn add_item(&mut self) {
        self.items.push(format!("Item {}", self.next_item));
        self.next_item += 1;
        self.pending_fetch = None;
        self.reload(EmptyDataSetState::Loaded);
    }

    pub(crate) fn remove_item(&mut self) {
        self.items.pop();
        self.clamp_selection();
        self.reload(EmptyDataSetState::Loaded);
    }

    pub(crate) fn clear_items(&mut self) {
        self.items.clear();
        self.selected = 0;
        self.reload(EmptyDataSetState::Loaded);
    }

    /// Empty the list and start a fetch returning `items` entries
    pub(crate) fn start_fetch(&mut self, items: usize, now: Instant) {
        self.items.clear();
        self.selected = 0;
        self.pending_fetch = Some(PendingFetch {
            ready_at: now + FETCH_DELAY,
            items,
        });
        tracing::info!(items, "fetch started");
        self.reload(EmptyDataSetState::Loading);
    }

    /// Drop the list and show the error placeholder
    pub(crate) fn fail_fetch(&mut self) {
        self.items.clear();
        self.selected = 0;
        self.pending_fetch = None;
        tracing::warn!("fetch failed");
        self.reload(EmptyDataSetState::Error);
    }

    /// Resolve a pending fetch whose delay has elapsed
    pub fn on_tick(&mut self, now: Instant) {
        let Some(fetch) = self.pending_fetch else {
            return;
        };
        if now < fetch.ready_at {
            return;
        }
        self.pending_fetch = None;
        for _ in 0..fetch.items {
            self.items.push(format!("Item {}", self.next_item));
            self.next_item += 1;
        }
        tracing::info!(items = fetch.items, "fetch finished");
        self.reload(EmptyDataSetState::Loaded);
    }

    /// Act on the last placeholder button tap
    pub(crate) fn process_taps(&mut self, now: Instant) {
        match self.source.take_tap() {
            Some(TapAction::Retry) => self.start_fetch(RETRY_ITEMS, now),
            Some(TapAction::AddItem) => self.add_item(),
            None => {}
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.empty_data_set.is_visible()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn placeholder_state(&self) -> EmptyDataSetState {
        self.empty_data_set.state()
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_shows_loaded_placeholder() {
        let app = App::new();
        assert!(app.running);
        assert!(app.is_placeholder_visible());
        assert_eq!(app.placeholder_state(), EmptyDataSetState::Loaded);
        assert_eq!(
            app.empty_data_set.view().title().map(ToString::to_string),
            Some("No Data".to_string())
        );
    }

    #[test]
    fn test_adding_item_hides_placeholder() {
        let mut app = App::new();
        app.add_item();
        assert_eq!(app.item_count(), 1);
        assert!(!app.is_placeholder_visible());

        app.remove_item();
        assert!(app.is_placeholder_visible());
    }

    #[test]
    fn test_fetch_resolves_after_delay() {
        let mut app = App::new();
        let start = Instant::now();
        app.start_fetch(2, start);
        assert!(app.is_fetching());
        assert_eq!(app.placeholder_state(), EmptyDataSetState::Loading);
        assert!(app.empty_data_set.view().image_view().is_animating());

        app.on_tick(start + FETCH_DELAY / 2);
        assert!(app.is_fetching());

        app.on_tick(start + FETCH_DELAY);
        assert!(!app.is_fetching());
        assert_eq!(app.item_count(), 2);
        assert!(!app.is_placeholder_visible());
    }

    #[test]
    fn test_empty_fetch_ends_in_loaded_placeholder() {
        let mut app = App::new();
        let start = Instant::now();
        app.start_fetch(0, start);
        app.on_tick(start + FETCH_DELAY);
        assert!(app.is_placeholder_visible());
        assert_eq!(app.placeholder_state(), EmptyDataSetState::Loaded);
    }

    #[test]
    fn test_retry_tap_starts_fetch() {
        let mut app = App::new();
        app.fail_fetch();
        assert_eq!(app.placeholder_state(), EmptyDataSetState::Error);

        assert!(app.empty_data_set.view_mut().tap_button());
        let now = Instant::now();
        app.process_taps(now);
        assert_eq!(
            app.pending_fetch,
            Some(PendingFetch {
                ready_at: now + FETCH_DELAY,
                items: RETRY_ITEMS,
            })
        );
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = App::new();
        app.add_item();
        app.add_item();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 1);
        app.remove_item();
        assert_eq!(app.selected, 0);
        app.move_up();
        assert_eq!(app.selected, 0);
    }
}
