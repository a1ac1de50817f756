//! Placeholder View shown over an empty list or grid
//!
//! Composed of a title, an image element (static or frame animation), a
//! detail text and a button. The button is either the built-in default
//! button or a caller-supplied custom button that replaces it.

mod input;
mod layout;
mod render;

use std::fmt;

use ratatui::{
    layout::{Rect, Size},
    style::Color,
    text::{Line, Text},
};

pub use layout::{LayoutInput, LayoutScheduler, Placement, PlaceholderLayout, compute_layout};

use crate::config::PlaceholderConfig;
use crate::model::{ControlState, Image};
use crate::ui::components::{Button, ImageView};

/// Callback invoked with the tapped button
pub type ButtonTapHandler = Box<dyn FnMut(&Button)>;

/// Placeholder View state
pub struct PlaceholderView {
    pub(super) config: PlaceholderConfig,
    pub(super) hidden: bool,
    pub(super) title: Option<Line<'static>>,
    pub(super) detail: Option<Text<'static>>,
    pub(super) image_view: ImageView,
    pub(super) button: Button,
    pub(super) custom_button: Option<Button>,
    pub(super) vertical_offset: i16,
    pub(super) image_size: Size,
    pub(super) button_size: Size,
    pub(super) scheduler: LayoutScheduler,
    /// Result of the last layout pass
    pub(super) layout: Option<PlaceholderLayout>,
    /// Control state to restore when a mouse press ends
    pub(super) pressed_from: Option<ControlState>,
    on_button_tap: Option<ButtonTapHandler>,
}

impl fmt::Debug for PlaceholderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderView")
            .field("hidden", &self.hidden)
            .field("title", &self.title)
            .field("detail", &self.detail)
            .field("image_view", &self.image_view)
            .field("button", &self.button)
            .field("custom_button", &self.custom_button)
            .field("vertical_offset", &self.vertical_offset)
            .field("image_size", &self.image_size)
            .field("button_size", &self.button_size)
            .field("layout", &self.layout)
            .field("has_tap_handler", &self.on_button_tap.is_some())
            .finish()
    }
}

impl Default for PlaceholderView {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderView {
    /// Create a hidden placeholder with the default configuration
    pub fn new() -> Self {
        Self::with_config(PlaceholderConfig::default())
    }

    /// Create a hidden placeholder with `config`
    pub fn with_config(config: PlaceholderConfig) -> Self {
        let mut image_view = ImageView::new();
        image_view.set_animation_duration(config.animation_cycle);

        let mut button = Button::new();
        button.set_hidden(true);

        Self {
            hidden: true,
            title: None,
            detail: None,
            image_view,
            button,
            custom_button: None,
            vertical_offset: config.vertical_offset,
            image_size: config.image_size,
            button_size: config.button_size,
            scheduler: LayoutScheduler::default(),
            layout: None,
            pressed_from: None,
            on_button_tap: None,
            config,
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    // =========================================================================
    // Content setters
    // =========================================================================

    pub fn set_title(&mut self, title: Option<Line<'static>>) {
        self.title = title;
        self.set_needs_layout();
    }

    pub fn title(&self) -> Option<&Line<'static>> {
        self.title.as_ref()
    }

    pub fn set_detail_text(&mut self, detail: Option<Text<'static>>) {
        self.detail = detail;
        self.set_needs_layout();
    }

    pub fn detail_text(&self) -> Option<&Text<'static>> {
        self.detail.as_ref()
    }

    /// Show a static image
    ///
    /// Does not touch a running animation; use [`Self::clear_image`] first
    /// when switching from a sequence to a static image.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image_view.set_image(image);
    }

    /// Show an image sequence as an endlessly repeating animation
    ///
    /// An empty sequence stops the animation and drops its frames.
    pub fn set_image_sequence(&mut self, images: Vec<Image>) {
        self.image_view.set_animation_images(images);
        if self.image_view.animation_images().is_empty() {
            return;
        }
        self.image_view
            .set_animation_duration(self.config.animation_cycle);
        self.image_view.set_animation_repeat_count(0);
        self.image_view.start_animating();
    }

    /// Remove both the static image and the image sequence
    pub fn clear_image(&mut self) {
        self.image_view.clear();
    }

    pub fn image_view(&self) -> &ImageView {
        &self.image_view
    }

    // =========================================================================
    // Geometry setters (each one schedules a layout pass)
    // =========================================================================

    /// Set the vertical offset from centre; `None` keeps the current one
    pub fn set_vertical_offset(&mut self, offset: Option<i16>) {
        if let Some(offset) = offset {
            self.vertical_offset = offset;
        }
        self.set_needs_layout();
    }

    pub fn vertical_offset(&self) -> i16 {
        self.vertical_offset
    }

    /// Set the image area size; `None` keeps the current one
    pub fn set_image_size(&mut self, size: Option<Size>) {
        if let Some(size) = size {
            self.image_size = size;
        }
        self.set_needs_layout();
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Set the default button size; `None` keeps the current one
    pub fn set_button_size(&mut self, size: Option<Size>) {
        if let Some(size) = size {
            self.button_size = size;
        }
        self.set_needs_layout();
    }

    pub fn button_size(&self) -> Size {
        self.button_size
    }

    // =========================================================================
    // Button
    // =========================================================================

    /// Set the default button's title for `state`
    ///
    /// The default button is only visible while it has a normal-state title
    /// and no custom button is installed.
    pub fn set_button_title(&mut self, title: Option<Line<'static>>, state: ControlState) {
        self.button.set_title(title, state);
        self.refresh_button_visibility();
    }

    /// Set the default button's background image for `state`
    pub fn set_button_background_image(&mut self, image: Option<Image>, state: ControlState) {
        self.button.set_background_image(image, state);
        self.refresh_button_visibility();
    }

    pub fn set_button_background_color(&mut self, color: Option<Color>) {
        self.button.set_background_color(color);
        self.refresh_button_visibility();
    }

    /// Install (`Some`) or remove (`None`) the custom button
    ///
    /// An installed custom button replaces the default button, which is
    /// hidden. Removing it makes the default button the layout candidate
    /// again.
    pub fn set_custom_button(&mut self, custom: Option<Button>) {
        self.cancel_press();
        self.custom_button = custom.map(|mut button| {
            button.set_hidden(false);
            button
        });
        self.refresh_button_visibility();
        self.set_needs_layout();
    }

    pub fn custom_button(&self) -> Option<&Button> {
        self.custom_button.as_ref()
    }

    pub fn default_button(&self) -> &Button {
        &self.button
    }

    /// Clear all button content and hide both buttons
    pub fn reset_button(&mut self) {
        self.cancel_press();
        self.button.clear_content();
        self.button.set_control_state(ControlState::Normal);
        self.button.set_hidden(true);
        if let Some(custom) = self.custom_button.as_mut() {
            custom.set_hidden(true);
        }
    }

    /// Button that takes part in layout: the custom button if installed
    pub fn candidate_button(&self) -> &Button {
        self.custom_button.as_ref().unwrap_or(&self.button)
    }

    pub(super) fn candidate_button_mut(&mut self) -> &mut Button {
        self.custom_button.as_mut().unwrap_or(&mut self.button)
    }

    /// Drop a pending mouse press, restoring the button it highlighted
    pub(super) fn cancel_press(&mut self) {
        if let Some(previous) = self.pressed_from.take() {
            self.candidate_button_mut().set_control_state(previous);
        }
    }

    fn refresh_button_visibility(&mut self) {
        let hidden =
            self.custom_button.is_some() || self.button.title(ControlState::Normal).is_none();
        self.button.set_hidden(hidden);
    }

    /// Register the single tap callback
    pub fn set_on_button_tap(&mut self, handler: ButtonTapHandler) {
        self.on_button_tap = Some(handler);
    }

    /// Tap the visible button
    ///
    /// Returns false (and invokes nothing) if the placeholder or the button
    /// is hidden, or the button is disabled.
    pub fn tap_button(&mut self) -> bool {
        let button = match &self.custom_button {
            Some(custom) => custom,
            None => &self.button,
        };
        if self.hidden || button.is_hidden() || !button.is_enabled() {
            return false;
        }

        tracing::trace!(tag = ?button.tag(), "placeholder button tapped");
        if let Some(handler) = self.on_button_tap.as_mut() {
            handler(button);
        }
        true
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Request a layout pass, replacing any pending request
    pub fn set_needs_layout(&mut self) {
        self.scheduler.schedule();
    }

    pub fn needs_layout(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Number of layout passes run so far
    pub fn layout_passes(&self) -> usize {
        self.scheduler.passes()
    }

    /// Result of the last layout pass
    pub fn layout(&self) -> Option<&PlaceholderLayout> {
        self.layout.as_ref()
    }

    /// Run the pending layout pass, or a new one if `area` changed
    pub fn layout_if_needed(&mut self, area: Rect) -> PlaceholderLayout {
        if self.layout.is_none_or(|layout| layout.area != area) {
            self.scheduler.schedule();
        }

        match (self.scheduler.run_pending(), self.layout) {
            (None, Some(layout)) => layout,
            (ticket, _) => {
                let layout = compute_layout(area, &self.layout_input(area));
                tracing::trace!(?ticket, ?area, "placeholder layout pass");
                self.layout = Some(layout);
                layout
            }
        }
    }

    fn layout_input(&self, area: Rect) -> LayoutInput {
        let title_size = match &self.title {
            Some(title) => Size::new(clamp_width(title.width(), area.width), 1),
            None => Size::new(0, 0),
        };

        let candidate = self.candidate_button();
        let button_size = if candidate.size().width == 0 || candidate.size().height == 0 {
            self.button_size
        } else {
            candidate.size()
        };

        LayoutInput {
            image_size: self.image_size,
            title_size,
            detail_size: detail_size(self.detail.as_ref(), area.width),
            button_size,
            spacing: self.config.spacing,
            vertical_offset: self.vertical_offset,
        }
    }
}

fn clamp_width(width: usize, max: u16) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX).min(max)
}

/// Size of the detail text when wrapped to `max_width`
fn detail_size(detail: Option<&Text<'static>>, max_width: u16) -> Size {
    let Some(text) = detail else {
        return Size::new(0, 0);
    };
    let width = clamp_width(text.width(), max_width);
    let rows: usize = text
        .lines
        .iter()
        .map(|line| match (line.width(), width) {
            (0, _) | (_, 0) => 1,
            (w, max) => w.div_ceil(usize::from(max)),
        })
        .sum();
    Size::new(width, u16::try_from(rows).unwrap_or(u16::MAX))
}
