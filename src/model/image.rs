//! Text-art images and frame sheets
//!
//! The placeholder draws images as styled text. An image sequence (frame
//! animation) can be written by hand or loaded from a frame sheet: a plain
//! text file whose frames are separated by `---` lines.

use std::fs;
use std::io;
use std::path::Path;

use ratatui::{
    layout::Size,
    style::Style,
    text::{Line, Text},
};
use thiserror::Error;

/// Line separating two frames in a frame sheet
pub const FRAME_SEPARATOR: &str = "---";

/// Errors that can occur when reading a frame sheet
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("frame sheet contains no frames")]
    NoFrames,

    #[error("frame {index} of the frame sheet is empty")]
    EmptyFrame { index: usize },

    #[error("failed to read frame sheet: {0}")]
    Io(#[from] io::Error),
}

/// A text-art image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    text: Text<'static>,
}

impl Image {
    /// Create an image from already styled text
    pub fn new(text: impl Into<Text<'static>>) -> Self {
        Self { text: text.into() }
    }

    /// Create an unstyled image from multi-line text art
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<Line<'static>> = art
            .lines()
            .map(|line| Line::from(line.trim_end().to_string()))
            .collect();
        Self::new(Text::from(lines))
    }

    /// Apply a style on top of the image's existing styling
    pub fn styled(self, style: impl Into<Style>) -> Self {
        Self {
            text: self.text.patch_style(style),
        }
    }

    /// Natural size: widest line by number of lines
    pub fn size(&self) -> Size {
        Size::new(
            u16::try_from(self.text.width()).unwrap_or(u16::MAX),
            u16::try_from(self.text.height()).unwrap_or(u16::MAX),
        )
    }

    /// True if the image has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.text.lines.iter().all(|line| line.width() == 0)
    }

    pub fn text(&self) -> &Text<'static> {
        &self.text
    }
}

impl From<&str> for Image {
    fn from(art: &str) -> Self {
        Self::from_ascii(art)
    }
}

/// Parse a frame sheet into an image sequence
///
/// Frames are separated by lines whose trimmed content is [`FRAME_SEPARATOR`].
/// Blank lines at the top and bottom of a frame are dropped, and a trailing
/// separator is allowed.
pub fn parse_image_sequence(input: &str) -> Result<Vec<Image>, ImageError> {
    let mut chunks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.trim() == FRAME_SEPARATOR {
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    chunks.push(current);

    if chunks.iter().all(|chunk| is_blank(chunk)) {
        return Err(ImageError::NoFrames);
    }

    // "a\n---\n" ends with an empty chunk that is not a frame
    if chunks.len() > 1 && chunks.last().is_some_and(|chunk| is_blank(chunk)) {
        chunks.pop();
    }

    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            if is_blank(chunk) {
                return Err(ImageError::EmptyFrame { index });
            }
            Ok(frame_from_lines(chunk))
        })
        .collect()
}

/// Read and parse a frame sheet from disk
pub fn load_image_sequence(path: impl AsRef<Path>) -> Result<Vec<Image>, ImageError> {
    let content = fs::read_to_string(path)?;
    parse_image_sequence(&content)
}

fn is_blank(lines: &[&str]) -> bool {
    lines.iter().all(|line| line.trim().is_empty())
}

fn frame_from_lines(lines: &[&str]) -> Image {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |pos| pos + 1);

    Image::from_ascii(&lines[start..end].join("\n"))
}
