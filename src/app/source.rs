//! Demo list data and placeholder content

use std::cell::{Cell, RefCell};

use ratatui::{
    layout::Size,
    style::{Color, Modifier, Stylize},
    text::{Line, Text},
};

use crate::container::{ScrollContainer, TableDataSource, TableView};
use crate::empty_data_set::{EmptyDataSetDelegate, EmptyDataSetSource};
use crate::model::{ControlState, EmptyDataSetState, Image};
use crate::ui::{components::Button, symbols};

/// Items shown by the demo list
#[derive(Debug, Default)]
pub struct DemoItems {
    items: RefCell<Vec<String>>,
}

impl DemoItems {
    pub fn push(&self, item: impl Into<String>) {
        self.items.borrow_mut().push(item.into());
    }

    pub fn pop(&self) -> Option<String> {
        self.items.borrow_mut().pop()
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Snapshot of the current items
    pub fn to_vec(&self) -> Vec<String> {
        self.items.borrow().clone()
    }
}

impl TableDataSource for DemoItems {
    fn number_of_rows(&self, _table: &TableView, _section: usize) -> usize {
        self.len()
    }
}

/// What a tap on the placeholder button asks the demo to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// Retry the failed fetch
    Retry,
    /// Add the first item
    AddItem,
}

/// Placeholder content and tap handling for the demo
#[derive(Debug)]
pub struct DemoSource {
    spinner: Vec<Image>,
    /// State of the reload currently being applied
    current: Cell<EmptyDataSetState>,
    tap: Cell<Option<TapAction>>,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new(symbols::spinner())
    }
}

impl DemoSource {
    /// Create a source that animates `spinner` while loading
    pub fn new(spinner: Vec<Image>) -> Self {
        Self {
            spinner,
            current: Cell::new(EmptyDataSetState::None),
            tap: Cell::new(None),
        }
    }

    /// Take the action requested by the last tap, if any
    pub fn take_tap(&self) -> Option<TapAction> {
        self.tap.take()
    }
}

impl EmptyDataSetSource for DemoSource {
    fn title(
        &self,
        _container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Line<'static>> {
        // Title is queried first on every reload
        self.current.set(state);
        let title = match state {
            EmptyDataSetState::Loading => Line::from("Loading…"),
            EmptyDataSetState::Error => Line::from("Failed to load items").red().bold(),
            EmptyDataSetState::Loaded | EmptyDataSetState::None => Line::from("No Data").bold(),
        };
        Some(title)
    }

    fn detail_text(
        &self,
        _container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Text<'static>> {
        match state {
            EmptyDataSetState::Loading => None,
            EmptyDataSetState::Error => Some(Text::from("Check your connection and try again.")),
            EmptyDataSetState::Loaded | EmptyDataSetState::None => {
                Some(Text::from("There is nothing in this list yet."))
            }
        }
    }

    fn image(
        &self,
        _container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Image> {
        match state {
            EmptyDataSetState::Loading => None,
            EmptyDataSetState::Error => Some(symbols::error_sign().styled(Color::Red)),
            EmptyDataSetState::Loaded | EmptyDataSetState::None => Some(symbols::empty_box()),
        }
    }

    fn image_sequence(
        &self,
        _container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Vec<Image>> {
        state.is_loading().then(|| self.spinner.clone())
    }

    fn image_size(
        &self,
        _container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Size> {
        let size = match state {
            EmptyDataSetState::Loading => self
                .spinner
                .iter()
                .map(Image::size)
                .fold(Size::new(1, 1), |acc, s| {
                    Size::new(acc.width.max(s.width), acc.height.max(s.height))
                }),
            EmptyDataSetState::Error => symbols::error_sign().size(),
            EmptyDataSetState::Loaded | EmptyDataSetState::None => symbols::empty_box().size(),
        };
        Some(size)
    }

    fn button_title(
        &self,
        _container: Option<&dyn ScrollContainer>,
        control_state: ControlState,
    ) -> Option<Line<'static>> {
        let label = match self.current.get() {
            EmptyDataSetState::Error => "Retry",
            EmptyDataSetState::Loaded | EmptyDataSetState::None => "Add item",
            EmptyDataSetState::Loading => return None,
        };
        match control_state {
            ControlState::Normal => Some(Line::from(label)),
            ControlState::Highlighted => Some(Line::from(format!("» {label} «"))),
            ControlState::Selected => None,
            ControlState::Disabled => Some(Line::from(label).add_modifier(Modifier::CROSSED_OUT)),
        }
    }

    fn button_background_color(&self, _container: Option<&dyn ScrollContainer>) -> Option<Color> {
        match self.current.get() {
            EmptyDataSetState::Error => Some(Color::Red),
            _ => Some(Color::DarkGray),
        }
    }

    fn vertical_offset(&self, _container: Option<&dyn ScrollContainer>) -> Option<i16> {
        Some(-2)
    }
}

impl EmptyDataSetDelegate for DemoSource {
    fn on_button_tap(&self, button: &Button) {
        let action = match self.current.get() {
            EmptyDataSetState::Error => TapAction::Retry,
            _ => TapAction::AddItem,
        };
        tracing::info!(?action, tag = ?button.tag(), "placeholder button tapped");
        self.tap.set(Some(action));
    }
}
