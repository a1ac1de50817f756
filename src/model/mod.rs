//! Data models for the empty data set
//!
//! UI-independent values: placeholder states, button control states and
//! text-art images.

mod image;
mod state;

pub use image::{FRAME_SEPARATOR, Image, ImageError, load_image_sequence, parse_image_sequence};
pub use state::{ControlState, EmptyDataSetState};
