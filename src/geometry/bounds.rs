//! Axis-aligned bounding areas.

use super::space::{Vector, VectorSpace};
use super::transform::VectorSpaceTransform;
use std::marker::PhantomData;

/// Axis-aligned rectangle in a coordinate space.
///
/// `x_min <= x_max` and `y_min <= y_max` hold for every area built through
/// [`from_corners`](Self::from_corners) or [`transform`](Self::transform).
/// Empty inputs produce the zero area `(0, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingArea<S: VectorSpace> {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    _space: PhantomData<S>,
}

impl<S: VectorSpace> BoundingArea<S> {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            _space: PhantomData,
        }
    }

    /// Smallest area containing both corners, in any order.
    pub fn from_corners(a: Vector<S>, b: Vector<S>) -> Self {
        Self::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
    }

    /// Square of half-size `radius` around `centre`.
    pub fn around(centre: Vector<S>, radius: f64) -> Self {
        Self::new(
            centre.x - radius,
            centre.x + radius,
            centre.y - radius,
            centre.y + radius,
        )
    }

    /// Strict intersection test: areas that only touch along an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x_max > other.x_min
            && other.x_max > self.x_min
            && self.y_max > other.y_min
            && other.y_max > self.y_min
    }

    /// Whether `other` lies entirely within this area (edges inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// All four edges are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite() && self.y_min.is_finite() && self.y_max.is_finite()
    }

    /// Map both corners through `transform`, re-normalising min/max.
    pub fn transform<O: VectorSpace>(&self, transform: &impl VectorSpaceTransform<S, O>) -> BoundingArea<O> {
        let min = Vector::<S>::new(self.x_min, self.y_min).transform(transform);
        let max = Vector::<S>::new(self.x_max, self.y_max).transform(transform);
        BoundingArea::from_corners(min, max)
    }

    pub fn centre(&self) -> Vector<S> {
        Vector::new((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }

    pub fn size(&self) -> Vector<S> {
        Vector::new(self.width(), self.height())
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn max_size(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn min_size(&self) -> f64 {
        self.width().min(self.height())
    }
}
