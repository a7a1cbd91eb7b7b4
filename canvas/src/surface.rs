//! Surface geometry: local coordinates and the rotation mapping.
//!
//! The drawing buffer is spun visually by a CSS transform, so a point captured
//! under the pointer is in *local* coordinates (relative to the surface's
//! bounding box, independent of rotation) while drawing commands are issued
//! in the buffer's *unrotated* frame. [`Surface::derotate`] bridges the two.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either client (screen) or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotate `point` by `angle` radians around `center`.
#[must_use]
pub fn rotate_about(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: cos * dx - sin * dy + center.x,
        y: sin * dx + cos * dy + center.y,
    }
}

/// The mounted drawing surface.
///
/// `width` / `height` are the buffer dimensions in pixels. `origin` is the
/// top-left corner of the surface's (unrotated) bounding box in client
/// coordinates; the host refreshes it before forwarding pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { origin: Point::new(0.0, 0.0), width, height }
    }

    /// Buffer center; the pivot of the visual rotation.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a client-space point to surface-local coordinates.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point {
            x: client.x - self.origin.x,
            y: client.y - self.origin.y,
        }
    }

    /// Map a local point into the buffer frame for a surface currently
    /// rotated by `rotation` radians.
    #[must_use]
    pub fn derotate(&self, local: Point, rotation: f64) -> Point {
        rotate_about(local, self.center(), -rotation)
    }
}
