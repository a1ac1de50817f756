//! View components
//!
//! Each view owns its state, input handling and rendering.

mod placeholder;

pub use placeholder::{
    ButtonTapHandler, LayoutInput, LayoutScheduler, Placement, PlaceholderLayout,
    PlaceholderView, compute_layout,
};
