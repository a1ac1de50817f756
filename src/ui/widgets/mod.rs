//! Reusable UI widgets

mod error_banner;
mod status_bar;

pub use error_banner::{build_error_line, render_error_banner};
pub use status_bar::{build_status_bar_with_prefix, render_status_bar, status_bar_area};
