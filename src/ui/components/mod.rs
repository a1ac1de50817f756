//! Reusable UI components
//!
//! Building blocks of the placeholder view.

mod button;
mod image_view;

pub use button::Button;
pub use image_view::ImageView;
