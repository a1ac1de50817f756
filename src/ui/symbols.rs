//! Built-in text-art images
//!
//! Ready-made images for the common placeholder states. Content sources
//! may use them or supply their own.
//!
//! ## Character Set Policy
//! - Spinner frames use Braille characters (single cell width)
//! - Box and error art use plain ASCII so they render on any terminal

use crate::model::Image;

/// Spinner frames (one full cycle)
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Empty box art
pub const EMPTY_BOX: &str = r"
 +--------+
 |        |
 |  ....  |
 +--------+";

/// Error art
pub const ERROR_SIGN: &str = r"
   /\
  /!!\
 /____\";

/// Spinner as an image sequence
pub fn spinner() -> Vec<Image> {
    SPINNER_FRAMES.iter().map(|frame| Image::from_ascii(frame)).collect()
}

/// Empty box as an image
pub fn empty_box() -> Image {
    Image::from_ascii(EMPTY_BOX.trim_start_matches('\n'))
}

/// Error sign as an image
pub fn error_sign() -> Image {
    Image::from_ascii(ERROR_SIGN.trim_start_matches('\n'))
}
