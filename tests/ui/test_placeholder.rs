//! Snapshot tests for the Placeholder View
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use std::time::{Duration, Instant};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use insta::{assert_debug_snapshot, assert_snapshot};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
    text::{Line, Text},
};

use tij_empty::model::{ControlState, Image};
use tij_empty::ui::components::Button;
use tij_empty::ui::views::PlaceholderView;

fn rows(buf: &Buffer) -> Vec<String> {
    (buf.area.y..buf.area.bottom())
        .map(|y| {
            (buf.area.x..buf.area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Visible view with a title and a "Reload" button, no image
fn title_and_button() -> PlaceholderView {
    let mut view = PlaceholderView::new();
    view.set_hidden(false);
    view.set_title(Some(Line::from("No Data")));
    view.set_image_size(Some(Size::new(0, 0)));
    view.set_vertical_offset(Some(-2));
    view.set_button_title(Some(Line::from("Reload")), ControlState::Normal);
    view
}

#[test]
fn test_placeholder_title_and_button() {
    let mut view = title_and_button();

    let mut terminal = Terminal::new(TestBackend::new(20, 9)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "                    "
    "                    "
    "                    "
    "      No Data       "
    "                    "
    "                    "
    "                    "
    "       Reload       "
    "                    "
    "#);
}

#[test]
fn test_placeholder_layout_stack() {
    let mut view = PlaceholderView::new();
    view.set_hidden(false);
    view.set_image(Some(Image::from_ascii("+--------+\n|        |\n|        |\n+--------+")));
    view.set_image_size(Some(Size::new(10, 4)));
    view.set_title(Some(Line::from("No Data")));
    view.set_detail_text(Some(Text::from("Nothing here")));
    view.set_button_title(Some(Line::from("Retry")), ControlState::Normal);

    let layout = view.layout_if_needed(Rect::new(0, 0, 40, 20));

    assert_debug_snapshot!(
        [layout.image, layout.title, layout.detail, layout.button],
        @r"
    [
        Placement {
            x: 15,
            y: 8,
            width: 10,
            height: 4,
        },
        Placement {
            x: 16,
            y: 13,
            width: 7,
            height: 1,
        },
        Placement {
            x: 14,
            y: 15,
            width: 12,
            height: 1,
        },
        Placement {
            x: 12,
            y: 17,
            width: 16,
            height: 3,
        },
    ]
    "
    );
}

#[test]
fn test_hidden_placeholder_leaves_list_visible() {
    let mut view = title_and_button();
    view.set_hidden(true);

    let area = Rect::new(0, 0, 20, 3);
    let mut buf = Buffer::empty(area);
    buf.set_string(0, 1, "row underneath", Style::default());
    view.render_at(area, &mut buf, Instant::now());

    assert_eq!(rows(&buf)[1], "row underneath      ");
}

#[test]
fn test_visible_placeholder_covers_list() {
    let mut view = title_and_button();

    let area = Rect::new(0, 0, 20, 9);
    let mut buf = Buffer::empty(area);
    buf.set_string(0, 0, "row underneath", Style::default());
    view.render_at(area, &mut buf, Instant::now());

    assert_eq!(rows(&buf)[0].trim(), "");
    assert_eq!(rows(&buf)[3].trim(), "No Data");
}

#[test]
fn test_spinner_advances_with_time() {
    let mut view = PlaceholderView::new();
    view.set_hidden(false);
    view.set_image_size(Some(Size::new(1, 1)));
    view.set_image_sequence(vec![
        Image::from_ascii("1"),
        Image::from_ascii("2"),
        Image::from_ascii("3"),
        Image::from_ascii("4"),
    ]);

    let area = Rect::new(0, 0, 9, 5);
    let start = Instant::now();
    // Frames are 200ms apart in the default 800ms cycle
    let mut at = |offset_ms: u64| {
        let mut buf = Buffer::empty(area);
        view.render_at(area, &mut buf, start + Duration::from_millis(offset_ms));
        rows(&buf).concat().trim().to_string()
    };

    // Started before `start`, so allow either neighbour of the expected frame
    let first = at(0);
    assert!(first == "1" || first == "2", "unexpected frame {first:?}");
    let later = at(420);
    assert!(later == "3" || later == "4", "unexpected frame {later:?}");
}

#[test]
fn test_mouse_press_and_release_taps_button() {
    let mut view = title_and_button();
    let taps = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&taps);
    view.set_on_button_tap(Box::new(move |_: &Button| counter.set(counter.get() + 1)));

    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 9));
    view.render_at(buf.area, &mut buf, Instant::now());
    let button = view.button_rect().unwrap();
    assert_eq!(button, Rect::new(2, 6, 16, 3));

    let mouse = |kind| MouseEvent {
        kind,
        column: button.x + 1,
        row: button.y + 1,
        modifiers: KeyModifiers::NONE,
    };
    assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left))));
    assert_eq!(
        view.candidate_button().control_state(),
        ControlState::Highlighted
    );
    assert!(view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left))));
    assert_eq!(view.candidate_button().control_state(), ControlState::Normal);
    assert_eq!(taps.get(), 1);
}

#[test]
fn test_release_outside_does_not_tap() {
    let mut view = title_and_button();
    let taps = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&taps);
    view.set_on_button_tap(Box::new(move |_: &Button| counter.set(counter.get() + 1)));

    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 9));
    view.render_at(buf.area, &mut buf, Instant::now());

    view.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 7,
        modifiers: KeyModifiers::NONE,
    });
    view.handle_mouse(MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(taps.get(), 0);
}
