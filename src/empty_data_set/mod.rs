//! Empty data set controller
//!
//! Binds a [`PlaceholderView`] to one scrollable container. Call
//! [`EmptyDataSet::reload`] whenever the container's data may have changed
//! (typically after a fetch completes): if the container holds no items the
//! placeholder is shown and refilled from the content source, otherwise it
//! is hidden.
//!
//! The source, the delegate and the container are all held weakly. If any
//! of them is dropped, the calls that need it quietly do nothing.

mod source;

use std::fmt;
use std::rc::{Rc, Weak};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

pub use source::{EmptyDataSetDelegate, EmptyDataSetSource};

use crate::config::PlaceholderConfig;
use crate::container::{ScrollContainer, item_count};
use crate::model::{ControlState, EmptyDataSetState};
use crate::ui::components::Button;
use crate::ui::views::PlaceholderView;

/// Placeholder controller for one container
pub struct EmptyDataSet {
    source: Option<Weak<dyn EmptyDataSetSource>>,
    container: Weak<dyn ScrollContainer>,
    view: PlaceholderView,
    /// State passed to the last reload that showed the placeholder
    state: EmptyDataSetState,
}

impl fmt::Debug for EmptyDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyDataSet")
            .field("has_source", &self.source().is_some())
            .field("has_container", &(self.container.strong_count() > 0))
            .field("state", &self.state)
            .field("view", &self.view)
            .finish()
    }
}

impl EmptyDataSet {
    /// Create a controller over `container` with the default configuration
    ///
    /// The placeholder starts hidden; nothing is queried until the first
    /// [`Self::reload`].
    pub fn new<C: ScrollContainer + 'static>(
        source: Option<Weak<dyn EmptyDataSetSource>>,
        delegate: Option<Weak<dyn EmptyDataSetDelegate>>,
        container: &Rc<C>,
    ) -> Self {
        Self::with_config(source, delegate, container, PlaceholderConfig::default())
    }

    /// Create a controller with a custom placeholder configuration
    pub fn with_config<C: ScrollContainer + 'static>(
        source: Option<Weak<dyn EmptyDataSetSource>>,
        delegate: Option<Weak<dyn EmptyDataSetDelegate>>,
        container: &Rc<C>,
        config: PlaceholderConfig,
    ) -> Self {
        let container = Rc::downgrade(container) as Weak<dyn ScrollContainer>;
        let mut empty_data_set = Self {
            source,
            container,
            view: PlaceholderView::with_config(config),
            state: EmptyDataSetState::None,
        };
        empty_data_set.set_delegate(delegate);
        empty_data_set
    }

    /// Shorthand for binding live objects that implement both sides
    pub fn attach<S, D, C>(source: &Rc<S>, delegate: &Rc<D>, container: &Rc<C>) -> Self
    where
        S: EmptyDataSetSource + 'static,
        D: EmptyDataSetDelegate + 'static,
        C: ScrollContainer + 'static,
    {
        let source = Rc::downgrade(source) as Weak<dyn EmptyDataSetSource>;
        let delegate = Rc::downgrade(delegate) as Weak<dyn EmptyDataSetDelegate>;
        Self::new(Some(source), Some(delegate), container)
    }

    /// Replace the content source
    pub fn set_source(&mut self, source: Option<Weak<dyn EmptyDataSetSource>>) {
        self.source = source;
    }

    /// Replace the delegate that receives button taps
    pub fn set_delegate(&mut self, delegate: Option<Weak<dyn EmptyDataSetDelegate>>) {
        self.view.set_on_button_tap(Box::new(move |button: &Button| {
            match delegate.as_ref().and_then(Weak::upgrade) {
                Some(delegate) => delegate.on_button_tap(button),
                None => tracing::trace!("button tap without a live delegate"),
            }
        }));
    }

    /// Show or hide the placeholder for the current contents of `container`
    pub fn reload(&mut self, container: &dyn ScrollContainer, state: EmptyDataSetState) {
        let count = item_count(container);
        if count > 0 {
            tracing::debug!(items = count, "container has items, hiding placeholder");
            self.view.set_hidden(true);
            return;
        }

        tracing::debug!(state = state.label(), "container is empty, showing placeholder");
        self.view.set_hidden(false);
        self.state = state;
        self.apply_state(state);
    }

    /// [`Self::reload`] in the loaded state
    pub fn reload_loaded(&mut self, container: &dyn ScrollContainer) {
        self.reload(container, EmptyDataSetState::Loaded);
    }

    /// Pull content for `state` from the source into the view
    fn apply_state(&mut self, state: EmptyDataSetState) {
        let Some(source) = self.source() else {
            tracing::debug!("content source is gone, placeholder left unchanged");
            return;
        };
        let container = self.container.upgrade();
        let container = container.as_deref();
        let view = &mut self.view;

        view.set_title(source.title(container, state));
        view.set_detail_text(source.detail_text(container, state));

        let image = source.image(container, state);
        let sequence = source.image_sequence(container, state).unwrap_or_default();
        view.clear_image();
        if !sequence.is_empty() {
            view.set_image_sequence(sequence);
        } else if image.is_some() {
            view.set_image(image);
        }

        if let Some(size) = source.image_size(container, state) {
            view.set_image_size(Some(size));
        }

        if state.is_loading() {
            view.reset_button();
            return;
        }

        if let Some(size) = source.button_size(container) {
            view.set_button_size(Some(size));
        }

        match source.custom_button(container) {
            Some(custom) => view.set_custom_button(Some(custom)),
            None => {
                view.set_custom_button(None);
                for control_state in ControlState::ALL {
                    view.set_button_title(source.button_title(container, control_state), control_state);
                }
                for control_state in ControlState::ALL {
                    view.set_button_background_image(
                        source.button_background_image(container, control_state),
                        control_state,
                    );
                }
                view.set_button_background_color(source.button_background_color(container));
            }
        }

        if let Some(offset) = source.vertical_offset(container) {
            view.set_vertical_offset(Some(offset));
        }
    }

    fn source(&self) -> Option<Rc<dyn EmptyDataSetSource>> {
        self.source.as_ref().and_then(Weak::upgrade)
    }

    /// Draw the placeholder over the bound container, if it is alive
    pub fn render(&mut self, frame: &mut Frame) {
        let Some(container) = self.container.upgrade() else {
            return;
        };
        let area = container.bounds();
        self.view.render(frame, area);
    }

    /// Draw the placeholder over an explicit area
    pub fn render_in(&mut self, frame: &mut Frame, area: Rect) {
        self.view.render(frame, area);
    }

    /// Route a key press to the placeholder; true if it was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.view.handle_key(key)
    }

    /// Route a mouse event to the placeholder; true if it was consumed
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        self.view.handle_mouse(event)
    }

    pub fn is_visible(&self) -> bool {
        !self.view.is_hidden()
    }

    /// State of the last reload that showed the placeholder
    pub fn state(&self) -> EmptyDataSetState {
        self.state
    }

    pub fn view(&self) -> &PlaceholderView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PlaceholderView {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use ratatui::layout::Size;
    use ratatui::style::Color;
    use ratatui::text::{Line, Text};

    use super::*;
    use crate::container::{TableDataSource, TableView};
    use crate::model::Image;

    #[derive(Default)]
    struct Rows(Cell<usize>);

    impl TableDataSource for Rows {
        fn number_of_rows(&self, _table: &TableView, _section: usize) -> usize {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Source {
        queries: Cell<usize>,
        with_custom: bool,
        sequence: Vec<Image>,
        offset: Option<i16>,
        seen_container: Cell<bool>,
    }

    impl EmptyDataSetSource for Source {
        fn title(
            &self,
            container: Option<&dyn ScrollContainer>,
            state: EmptyDataSetState,
        ) -> Option<Line<'static>> {
            self.queries.set(self.queries.get() + 1);
            self.seen_container.set(container.is_some());
            Some(Line::from(format!("title:{}", state.label())))
        }

        fn detail_text(
            &self,
            _container: Option<&dyn ScrollContainer>,
            _state: EmptyDataSetState,
        ) -> Option<Text<'static>> {
            Some(Text::from("detail"))
        }

        fn image(
            &self,
            _container: Option<&dyn ScrollContainer>,
            _state: EmptyDataSetState,
        ) -> Option<Image> {
            Some(Image::from_ascii("static"))
        }

        fn image_sequence(
            &self,
            _container: Option<&dyn ScrollContainer>,
            _state: EmptyDataSetState,
        ) -> Option<Vec<Image>> {
            Some(self.sequence.clone())
        }

        fn image_size(
            &self,
            _container: Option<&dyn ScrollContainer>,
            _state: EmptyDataSetState,
        ) -> Option<Size> {
            Some(Size::new(6, 2))
        }

        fn button_title(
            &self,
            _container: Option<&dyn ScrollContainer>,
            control_state: ControlState,
        ) -> Option<Line<'static>> {
            self.queries.set(self.queries.get() + 1);
            (control_state == ControlState::Normal).then(|| Line::from("Retry"))
        }

        fn button_size(&self, _container: Option<&dyn ScrollContainer>) -> Option<Size> {
            self.queries.set(self.queries.get() + 1);
            Some(Size::new(12, 1))
        }

        fn button_background_color(
            &self,
            _container: Option<&dyn ScrollContainer>,
        ) -> Option<Color> {
            Some(Color::Blue)
        }

        fn vertical_offset(&self, _container: Option<&dyn ScrollContainer>) -> Option<i16> {
            self.queries.set(self.queries.get() + 1);
            self.offset
        }

        fn custom_button(&self, _container: Option<&dyn ScrollContainer>) -> Option<Button> {
            self.with_custom
                .then(|| Button::custom("custom").with_title("Mine", ControlState::Normal))
        }
    }

    #[derive(Default)]
    struct Delegate {
        taps: RefCell<Vec<Option<String>>>,
    }

    impl EmptyDataSetDelegate for Delegate {
        fn on_button_tap(&self, button: &Button) {
            self.taps
                .borrow_mut()
                .push(button.tag().map(str::to_string));
        }
    }

    fn table_with(rows: &Rc<Rows>) -> Rc<TableView> {
        let table = Rc::new(TableView::new());
        table.set_data_source(rows);
        table
    }

    #[test]
    fn test_new_controller_is_hidden() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source::default());
        let delegate = Rc::new(Delegate::default());
        let eds = EmptyDataSet::attach(&source, &delegate, &table);

        assert!(!eds.is_visible());
        assert_eq!(eds.state(), EmptyDataSetState::None);
        assert_eq!(source.queries.get(), 0);
    }

    #[test]
    fn test_loaded_state_fills_view() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source {
            offset: Some(-2),
            ..Source::default()
        });
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload_loaded(table.as_ref());

        let view = eds.view();
        assert!(eds.is_visible());
        assert_eq!(eds.state(), EmptyDataSetState::Loaded);
        assert_eq!(view.title(), Some(&Line::from("title:loaded")));
        assert_eq!(view.detail_text(), Some(&Text::from("detail")));
        assert_eq!(view.image_view().image(), Some(&Image::from_ascii("static")));
        assert_eq!(view.image_size(), Size::new(6, 2));
        assert_eq!(view.button_size(), Size::new(12, 1));
        assert_eq!(view.vertical_offset(), -2);
        assert!(!view.default_button().is_hidden());
        assert_eq!(view.default_button().background_color(), Some(Color::Blue));
        assert!(source.seen_container.get());
    }

    #[test]
    fn test_loading_state_skips_button_and_offset() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source {
            offset: Some(4),
            ..Source::default()
        });
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload(table.as_ref(), EmptyDataSetState::Loaded);
        let before = source.queries.get();
        eds.view_mut().set_vertical_offset(Some(0));

        eds.reload(table.as_ref(), EmptyDataSetState::Loading);
        // only the title query
        assert_eq!(source.queries.get(), before + 1);
        assert!(eds.view().default_button().is_hidden());
        assert!(!eds.view().default_button().has_content());
        assert_eq!(eds.view().vertical_offset(), 0);
    }

    #[test]
    fn test_image_sequence_wins_over_image() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source {
            sequence: vec![Image::from_ascii("1"), Image::from_ascii("2")],
            ..Source::default()
        });
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload_loaded(table.as_ref());
        let image_view = eds.view().image_view();
        assert!(image_view.is_animating());
        assert!(image_view.image().is_none());
        assert_eq!(image_view.animation_images().len(), 2);
    }

    #[test]
    fn test_items_hide_placeholder_without_queries() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source::default());
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload(table.as_ref(), EmptyDataSetState::Error);
        assert!(eds.is_visible());
        let queries = source.queries.get();

        rows.0.set(5);
        eds.reload(table.as_ref(), EmptyDataSetState::Error);
        assert!(!eds.is_visible());
        assert_eq!(source.queries.get(), queries);
    }

    #[test]
    fn test_custom_button_tap_reaches_delegate() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source {
            with_custom: true,
            ..Source::default()
        });
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload_loaded(table.as_ref());
        assert!(eds.view().default_button().is_hidden());
        assert!(eds.view_mut().tap_button());
        assert_eq!(*delegate.taps.borrow(), vec![Some("custom".to_string())]);
    }

    #[test]
    fn test_dropped_source_leaves_view_unchanged() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source::default());
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload(table.as_ref(), EmptyDataSetState::Error);
        drop(source);
        eds.reload_loaded(table.as_ref());

        assert!(eds.is_visible());
        assert_eq!(eds.view().title(), Some(&Line::from("title:error")));
    }

    #[test]
    fn test_dropped_delegate_makes_tap_silent() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let source = Rc::new(Source::default());
        let delegate = Rc::new(Delegate::default());
        let mut eds = EmptyDataSet::attach(&source, &delegate, &table);

        eds.reload_loaded(table.as_ref());
        drop(delegate);
        // Button still taps; there is just nobody to tell
        assert!(eds.view_mut().tap_button());
    }

    #[test]
    fn test_no_source_at_all() {
        let rows = Rc::new(Rows::default());
        let table = table_with(&rows);
        let mut eds = EmptyDataSet::new(None, None, &table);

        eds.reload_loaded(table.as_ref());
        assert!(eds.is_visible());
        assert!(eds.view().title().is_none());
    }
}
