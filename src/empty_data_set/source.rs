//! Content source and delegate traits
//!
//! Every method has a default implementation returning `None` (or doing
//! nothing), so implementors only provide what they want to override. A
//! `None` never means "use some built-in content"; it means "no override".

use ratatui::{
    layout::Size,
    style::Color,
    text::{Line, Text},
};

use crate::container::ScrollContainer;
use crate::model::{ControlState, EmptyDataSetState, Image};
use crate::ui::components::Button;

/// Supplies the placeholder's content and appearance
///
/// `container` is the container the placeholder is bound to, or `None` if
/// it has been dropped.
#[allow(unused_variables)]
pub trait EmptyDataSetSource {
    /// Title for `state`
    fn title(
        &self,
        container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Line<'static>> {
        None
    }

    /// Detail text under the title for `state`
    fn detail_text(
        &self,
        container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Text<'static>> {
        None
    }

    /// Static image for `state`
    fn image(
        &self,
        container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Image> {
        None
    }

    /// Image sequence for `state`; a non-empty sequence wins over [`Self::image`]
    fn image_sequence(
        &self,
        container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Vec<Image>> {
        None
    }

    /// Size of the image area for `state`
    fn image_size(
        &self,
        container: Option<&dyn ScrollContainer>,
        state: EmptyDataSetState,
    ) -> Option<Size> {
        None
    }

    /// Default button title for a control state
    fn button_title(
        &self,
        container: Option<&dyn ScrollContainer>,
        control_state: ControlState,
    ) -> Option<Line<'static>> {
        None
    }

    /// Default button size (used when the button has no natural size)
    fn button_size(&self, container: Option<&dyn ScrollContainer>) -> Option<Size> {
        None
    }

    /// Default button background image for a control state
    fn button_background_image(
        &self,
        container: Option<&dyn ScrollContainer>,
        control_state: ControlState,
    ) -> Option<Image> {
        None
    }

    /// Default button background color
    fn button_background_color(&self, container: Option<&dyn ScrollContainer>) -> Option<Color> {
        None
    }

    /// Rows to shift the placeholder from centre (positive moves down)
    fn vertical_offset(&self, container: Option<&dyn ScrollContainer>) -> Option<i16> {
        None
    }

    /// Button replacing the default button
    fn custom_button(&self, container: Option<&dyn ScrollContainer>) -> Option<Button> {
        None
    }
}

/// Receives placeholder events
#[allow(unused_variables)]
pub trait EmptyDataSetDelegate {
    /// The placeholder's button was tapped
    fn on_button_tap(&self, button: &Button) {}
}
