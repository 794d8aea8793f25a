//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};
use shapekit_core::{Mat3, Vec2};

/// Axis-aligned bounding box in some coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min_by_axis(max),
            max: min.max_by_axis(max),
        }
    }

    /// Exact bounds of a point set, `None` when the set is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        Vec2::point_bounds(points).map(|(min, max)| Self { min, max })
    }

    /// Grows the box to include `point`.
    pub fn update(&mut self, point: Vec2) {
        self.min = self.min.min_by_axis(point);
        self.max = self.max.max_by_axis(point);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min_by_axis(other.min),
            max: self.max.max_by_axis(other.max),
        }
    }

    /// Corners in canonical order `[min,min]`, `[max,min]`, `[max,max]`, `[min,max]`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    pub fn center(&self) -> Vec2 {
        self.min.midpoint(self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment with an absolute tolerance.
    pub fn contains(&self, point: Vec2, tolerance: f64) -> bool {
        point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
    }

    /// Bounds of this box's corners after `matrix` is applied.
    pub fn transformed(&self, matrix: &Mat3) -> BoundingBox {
        let [a, b, c, d] = self.corners().map(|p| matrix.apply_to_point(p));
        let mut out = BoundingBox { min: a, max: a };
        for p in [b, c, d] {
            out.update(p);
        }
        out
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }
}
