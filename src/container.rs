//! Scrollable containers and their item count
//!
//! The placeholder only needs two things from the list or grid it decorates:
//! how many items it currently holds, and where it is drawn. Containers are
//! owned by the host screen; data sources are bound weakly so a container
//! never keeps its data alive.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::layout::Rect;

/// Number of sections counted by [`item_count`]
///
/// Containers are assumed to have a single section.
pub const COUNTED_SECTIONS: usize = 1;

/// Row source of a [`TableView`]
pub trait TableDataSource {
    /// Number of rows in `section`
    fn number_of_rows(&self, table: &TableView, section: usize) -> usize;
}

/// Cell source of a [`GridView`]
pub trait GridDataSource {
    /// Number of cells in `section`
    fn number_of_items(&self, grid: &GridView, section: usize) -> usize;
}

/// What kind of countable container this is
#[derive(Clone, Copy)]
pub enum ContainerKind<'a> {
    Table(&'a TableView),
    Grid(&'a GridView),
    /// Not countable; always treated as empty
    Other,
}

/// A scrollable region the placeholder can be laid over
pub trait ScrollContainer {
    /// Kind of the container, used for counting items
    fn kind(&self) -> ContainerKind<'_>;

    /// Screen area the container was last drawn into
    fn bounds(&self) -> Rect;
}

/// Total number of items in `container`
///
/// Returns 0 when the container has no (live) data source or is neither a
/// table nor a grid.
pub fn item_count(container: &dyn ScrollContainer) -> usize {
    match container.kind() {
        ContainerKind::Table(table) => match table.data_source() {
            Some(source) => (0..COUNTED_SECTIONS)
                .map(|section| source.number_of_rows(table, section))
                .sum(),
            None => 0,
        },
        ContainerKind::Grid(grid) => match grid.data_source() {
            Some(source) => (0..COUNTED_SECTIONS)
                .map(|section| source.number_of_items(grid, section))
                .sum(),
            None => 0,
        },
        ContainerKind::Other => 0,
    }
}

/// A vertical list of rows
#[derive(Default)]
pub struct TableView {
    data_source: RefCell<Option<Weak<dyn TableDataSource>>>,
    bounds: Cell<Rect>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the row source (held weakly)
    pub fn set_data_source<S: TableDataSource + 'static>(&self, source: &Rc<S>) {
        let weak = Rc::downgrade(source) as Weak<dyn TableDataSource>;
        *self.data_source.borrow_mut() = Some(weak);
    }

    pub fn clear_data_source(&self) {
        *self.data_source.borrow_mut() = None;
    }

    /// Live row source, if any
    pub fn data_source(&self) -> Option<Rc<dyn TableDataSource>> {
        self.data_source.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Record where the table was drawn (called from the host's render)
    pub fn set_bounds(&self, area: Rect) {
        self.bounds.set(area);
    }
}

impl fmt::Debug for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("has_data_source", &self.data_source().is_some())
            .field("bounds", &self.bounds.get())
            .finish()
    }
}

impl ScrollContainer for TableView {
    fn kind(&self) -> ContainerKind<'_> {
        ContainerKind::Table(self)
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }
}

/// A grid of cells
#[derive(Default)]
pub struct GridView {
    data_source: RefCell<Option<Weak<dyn GridDataSource>>>,
    bounds: Cell<Rect>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the cell source (held weakly)
    pub fn set_data_source<S: GridDataSource + 'static>(&self, source: &Rc<S>) {
        let weak = Rc::downgrade(source) as Weak<dyn GridDataSource>;
        *self.data_source.borrow_mut() = Some(weak);
    }

    pub fn clear_data_source(&self) {
        *self.data_source.borrow_mut() = None;
    }

    pub fn data_source(&self) -> Option<Rc<dyn GridDataSource>> {
        self.data_source.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn set_bounds(&self, area: Rect) {
        self.bounds.set(area);
    }
}

impl fmt::Debug for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("has_data_source", &self.data_source().is_some())
            .field("bounds", &self.bounds.get())
            .finish()
    }
}

impl ScrollContainer for GridView {
    fn kind(&self) -> ContainerKind<'_> {
        ContainerKind::Grid(self)
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }
}

/// A plain scrollable region with no countable items
#[derive(Debug, Default)]
pub struct ScrollView {
    bounds: Cell<Rect>,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&self, area: Rect) {
        self.bounds.set(area);
    }
}

impl ScrollContainer for ScrollView {
    fn kind(&self) -> ContainerKind<'_> {
        ContainerKind::Other
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }
}
