//! Demo application
//!
//! A list of items with an empty-state placeholder, split into:
//! - `state`: App struct and simulated fetches
//! - `source`: Item storage and placeholder content
//! - `input`: Key and mouse handling
//! - `render`: UI rendering

mod input;
mod render;
mod source;
mod state;

pub use source::{DemoItems, DemoSource, TapAction};
pub use state::{App, FETCH_DELAY};
