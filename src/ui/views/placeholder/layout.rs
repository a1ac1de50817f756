//! Placeholder layout pass and its scheduling
//!
//! Elements are stacked top to bottom: image, title, detail, button. The
//! image's centre sits at the vertical centre of the area shifted by the
//! vertical offset, and everything is centred horizontally. Placements are
//! kept in signed coordinates so large offsets or oversized images can
//! extend past the area; they are clipped only when drawn.

use ratatui::layout::{Rect, Size};

/// Position and size of an element before clipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Placement {
    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    /// Part of the placement inside `area` (zero-sized if none)
    pub fn clip(&self, area: Rect) -> Rect {
        let left = self.x.max(i32::from(area.x));
        let top = self.y.max(i32::from(area.y));
        let right = self.right().min(i32::from(area.right()));
        let bottom = self.bottom().min(i32::from(area.bottom()));

        if right <= left || bottom <= top {
            return Rect::new(area.x, area.y, 0, 0);
        }

        // Bounded by `area`, so the conversions cannot overflow
        Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    }
}

/// Measured inputs of a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    pub image_size: Size,
    pub title_size: Size,
    pub detail_size: Size,
    pub button_size: Size,
    pub spacing: u16,
    pub vertical_offset: i16,
}

/// Result of a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderLayout {
    /// Content area (the whole view)
    pub area: Rect,
    pub image: Placement,
    pub title: Placement,
    pub detail: Placement,
    pub button: Placement,
}

/// Run a layout pass over `area`
pub fn compute_layout(area: Rect, input: &LayoutInput) -> PlaceholderLayout {
    let spacing = i32::from(input.spacing);
    let centered = |size: Size, y: i32| Placement {
        x: i32::from(area.x) + (i32::from(area.width) - i32::from(size.width)) / 2,
        y,
        width: size.width,
        height: size.height,
    };

    let center_y =
        i32::from(area.y) + i32::from(area.height) / 2 + i32::from(input.vertical_offset);
    let image = centered(
        input.image_size,
        center_y - i32::from(input.image_size.height) / 2,
    );
    let title = centered(input.title_size, image.bottom() + spacing);
    let detail = centered(input.detail_size, title.bottom() + spacing);
    let button = centered(input.button_size, detail.bottom() + spacing);

    PlaceholderLayout {
        area,
        image,
        title,
        detail,
        button,
    }
}

/// Coalesces layout requests into a single deferred pass
///
/// Every request cancels the pending one and schedules a fresh ticket, so
/// any number of requests made before the next pass runs result in one
/// pass.
#[derive(Debug, Default)]
pub struct LayoutScheduler {
    next_ticket: u64,
    pending: Option<u64>,
    passes: usize,
}

impl LayoutScheduler {
    /// Cancel the pending pass (if any) and schedule a new one
    pub fn schedule(&mut self) -> u64 {
        self.cancel();
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.next_ticket
    }

    /// Cancel the pending pass, returning its ticket
    pub fn cancel(&mut self) -> Option<u64> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending ticket, counting one pass
    pub fn run_pending(&mut self) -> Option<u64> {
        let ticket = self.pending.take()?;
        self.passes += 1;
        Some(ticket)
    }

    /// Number of passes run so far
    pub fn passes(&self) -> usize {
        self.passes
    }
}
