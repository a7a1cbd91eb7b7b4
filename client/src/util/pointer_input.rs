//! Pointer and touch event mapping helpers.

#[cfg(feature = "csr")]
use canvas::surface::Point;

#[cfg(feature = "csr")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Client position of the first active touch. `None` for events that carry
/// no touches, which callers treat as a no-op.
#[cfg(feature = "csr")]
pub fn first_touch_point(ev: &leptos::ev::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Topmost element under a client position.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
pub fn element_at(point: Point) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.element_from_point(point.x as f32, point.y as f32))
}

/// Client position of the top-left corner of `bounds`.
#[cfg(feature = "csr")]
pub fn bounds_origin(bounds: &web_sys::HtmlDivElement) -> Point {
    let rect = bounds.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}
