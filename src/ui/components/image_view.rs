//! Image element supporting a static image or a frame animation
//!
//! The animation is not timer driven: the frame to draw is derived from the
//! time elapsed since the animation started, so it advances whenever the
//! host redraws.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::config::DEFAULT_ANIMATION_CYCLE;
use crate::model::Image;

/// Static image plus an optional image sequence
#[derive(Debug, Clone)]
pub struct ImageView {
    image: Option<Image>,
    animation_images: Vec<Image>,
    animation_duration: Duration,
    /// 0 repeats forever
    animation_repeat_count: u32,
    animation_started_at: Option<Instant>,
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageView {
    pub fn new() -> Self {
        Self {
            image: None,
            animation_images: Vec::new(),
            animation_duration: DEFAULT_ANIMATION_CYCLE,
            animation_repeat_count: 0,
            animation_started_at: None,
        }
    }

    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Replace the animation frames; an empty list also stops the animation
    pub fn set_animation_images(&mut self, images: Vec<Image>) {
        if images.is_empty() {
            self.animation_started_at = None;
        }
        self.animation_images = images;
    }

    pub fn animation_images(&self) -> &[Image] {
        &self.animation_images
    }

    /// Duration of one full cycle through the frames
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Number of cycles to play, 0 for forever
    pub fn set_animation_repeat_count(&mut self, count: u32) {
        self.animation_repeat_count = count;
    }

    pub fn start_animating(&mut self) {
        self.start_animating_at(Instant::now());
    }

    pub fn start_animating_at(&mut self, now: Instant) {
        if !self.animation_images.is_empty() {
            self.animation_started_at = Some(now);
        }
    }

    pub fn stop_animating(&mut self) {
        self.animation_started_at = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animation_started_at.is_some() && !self.animation_images.is_empty()
    }

    /// Remove the static image and all animation frames
    pub fn clear(&mut self) {
        self.image = None;
        self.animation_images.clear();
        self.animation_started_at = None;
    }

    /// Frame to draw at `now`
    ///
    /// While animating this is the sequence frame for the elapsed time;
    /// once a finite animation has played out, or when not animating, it
    /// is the static image.
    pub fn frame_at(&self, now: Instant) -> Option<&Image> {
        let Some(started) = self.animation_started_at else {
            return self.image.as_ref();
        };
        let count = self.animation_images.len();
        if count == 0 {
            return self.image.as_ref();
        }

        let cycle = self.animation_duration.as_nanos().max(1);
        let elapsed = now.saturating_duration_since(started).as_nanos();
        if self.animation_repeat_count > 0
            && elapsed >= cycle * u128::from(self.animation_repeat_count)
        {
            return self.image.as_ref();
        }

        let position = elapsed % cycle;
        let index = (position * count as u128 / cycle) as usize;
        self.animation_images.get(index.min(count - 1))
    }

    /// Draw the frame for `now`, centred in `area`
    pub fn render_at(&self, area: Rect, buf: &mut Buffer, style: Style, now: Instant) {
        if area.is_empty() {
            return;
        }
        if let Some(frame) = self.frame_at(now) {
            Paragraph::new(frame.text().clone())
                .style(style)
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }
}
