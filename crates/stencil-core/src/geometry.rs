//! Geometric primitives for positioning layers on a page.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in page space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - A layer frame: top-left origin plus size
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin of a [`Rect`] is its top-left corner, which is what symbol
//! placement overwrites when a symbol is moved onto a page.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in page coordinate space.
///
/// Coordinates are kept as `f64` so document values survive a round trip
/// unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Represents the dimensions of a layer with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// The frame of a layer: a top-left origin and a size.
///
/// Serialized flat as `{ "x", "y", "width", "height" }`.
///
/// # Examples
///
/// ```
/// # use stencil_core::geometry::{Point, Rect, Size};
/// let frame = Rect::new(Point::new(10.0, 20.0), Size::new(120.0, 40.0));
/// let moved = frame.with_origin(Point::new(300.0, 0.0));
///
/// assert_eq!(moved.origin(), Point::new(300.0, 0.0));
/// assert_eq!(moved.size(), frame.size());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(flatten)]
    origin: Point,
    #[serde(flatten)]
    size: Size,
}

impl Rect {
    /// Creates a new rect from a top-left origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size of the rect
    pub fn size(self) -> Size {
        self.size
    }

    /// Replaces the origin, keeping width and height.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_with_origin_keeps_size() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        let moved = rect.with_origin(Point::new(-5.0, 7.5));

        assert_approx_eq!(f64, moved.origin().x(), -5.0);
        assert_approx_eq!(f64, moved.origin().y(), 7.5);
        assert_eq!(moved.size(), rect.size());
    }

    #[test]
    fn test_precise_coordinates_survive_json() {
        let rect = Rect::new(Point::new(1234567.89, -0.1), Size::new(98765.4321, 0.3));
        let json = serde_json::to_string(&rect).unwrap();
        let decoded: Rect = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, rect);
        assert_eq!(decoded.origin().x(), 1234567.89);
    }

    #[test]
    fn test_rect_serializes_flat() {
        let rect = Rect::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        let value = serde_json::to_value(rect).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 })
        );
    }
}
