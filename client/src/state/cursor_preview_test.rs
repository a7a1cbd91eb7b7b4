#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn preview_starts_hidden() {
    let preview = CursorPreview::default();
    assert!(!preview.visible);
    assert!(preview.style(&Controls::default()).contains("display: none;"));
}

#[test]
fn show_move_hide_sequence() {
    let mut preview = CursorPreview::default();
    preview.apply_all([
        Action::ShowCursorPreview,
        Action::MoveCursorPreview { left: 12.5, top: 40.0 },
    ]);
    assert!(preview.visible);
    assert_eq!(preview.left, 12.5);
    assert_eq!(preview.top, 40.0);

    preview.apply(Action::HideCursorPreview);
    assert!(!preview.visible);
    assert_eq!(preview.left, 12.5);
}

#[test]
fn style_uses_width_and_stroke_color() {
    let preview = CursorPreview { visible: true, left: 1.0, top: 2.0 };
    let controls = Controls { width: 30.0, ..Controls::default() };
    assert_eq!(
        preview.style(&controls),
        "left: 1.00px; top: 2.00px; width: 30px; height: 30px; background-color: #0096ff; display: block;"
    );
}

#[test]
fn style_shows_background_color_while_erasing() {
    let preview = CursorPreview { visible: true, left: 0.0, top: 0.0 };
    let controls = Controls { erase: true, ..Controls::default() };
    assert!(preview.style(&controls).contains("background-color: #ffffff;"));
}
