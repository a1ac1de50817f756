//! Placeholder and button states

/// State of the data behind an empty data set
///
/// Passed through to the content source so it can return different
/// content per state. Only [`EmptyDataSetState::Loading`] changes how the
/// placeholder itself behaves (the button is suppressed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyDataSetState {
    /// Initial state, treated like `Loaded`
    #[default]
    None,
    /// Data is being fetched
    Loading,
    /// Data was fetched and the list is empty
    Loaded,
    /// Fetching failed
    Error,
}

impl EmptyDataSetState {
    /// Whether the button must stay hidden in this state
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Short label used in logs and the demo status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        }
    }
}

/// Interaction state of a button
///
/// Selects which title and background image the button draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
    Selected,
    Disabled,
}

impl ControlState {
    /// All control states, in the order content is applied
    pub const ALL: [ControlState; 4] = [
        ControlState::Normal,
        ControlState::Highlighted,
        ControlState::Selected,
        ControlState::Disabled,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Highlighted => 1,
            Self::Selected => 2,
            Self::Disabled => 3,
        }
    }
}
