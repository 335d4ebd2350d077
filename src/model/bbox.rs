//! Labeled axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

use super::ids::Identifier;

/// An identified, labeled axis-aligned rectangle.
///
/// `(x, y)` is one corner and `(x + width, y + height)` the opposite corner.
///
/// Note: width and height are not required to be non-negative. Degenerate
/// boxes are valid inputs to every diff and delta operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub id: Identifier,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Creates a new bounding box.
    pub fn new(
        id: impl Into<Identifier>,
        label: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the far x coordinate (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the far y coordinate (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the area of the box.
    ///
    /// May be negative if exactly one of width and height is negative.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Intersection-over-union of two boxes.
    ///
    /// The intersection extents are clamped at zero, so disjoint boxes give
    /// 0.0. When the union area is zero (both boxes have zero area) the
    /// result is 0.0, including for two coincident zero-area boxes. Boxes
    /// with a negative width or height never overlap anything and give 0.0.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        let intersection = (right - left).max(0.0) * (bottom - top).max(0.0);
        let union = self.area() + other.area() - intersection;

        if intersection == 0.0 || union <= 0.0 {
            return 0.0;
        }

        intersection / union
    }
}
