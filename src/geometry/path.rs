//! Sized points and polylines with a uniform `t` parameterisation.

use super::bounds::BoundingArea;
use super::space::{Scalar, Vector, VectorSpace};
use super::transform::VectorSpaceTransform;
use std::ops::Add;

/// A position with a size (radius), e.g. a tapped point scaled by pressure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<S: VectorSpace> {
    pub position: Vector<S>,
    pub size: Scalar<S>,
}

impl<S: VectorSpace> Point<S> {
    pub const fn new(position: Vector<S>, size: Scalar<S>) -> Self {
        Self { position, size }
    }

    pub fn transform<O: VectorSpace>(&self, transform: &impl VectorSpaceTransform<S, O>) -> Point<O> {
        Point::new(
            transform.transform_vector(self.position),
            transform.transform_scalar(self.size),
        )
    }
}

/// Sentinel `t` for a point that is not on any path.
pub const NO_T: f64 = -1.0;

/// A point on a path. `t` is the point's fraction of the path's arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint<S: VectorSpace> {
    pub position: Vector<S>,
    pub size: Scalar<S>,
    pub t: f64,
}

impl<S: VectorSpace> PathPoint<S> {
    pub const fn new(position: Vector<S>, size: Scalar<S>, t: f64) -> Self {
        Self { position, size, t }
    }

    /// Placeholder returned by [`Path::start_point`] and
    /// [`Path::end_point`] on an empty path.
    pub const fn none() -> Self {
        Self::new(Vector::zero(), Scalar::zero(), NO_T)
    }

    pub fn is_none(&self) -> bool {
        self.t == NO_T
    }

    pub fn transform<O: VectorSpace>(&self, transform: &impl VectorSpaceTransform<S, O>) -> PathPoint<O> {
        PathPoint::new(
            transform.transform_vector(self.position),
            transform.transform_scalar(self.size),
            self.t,
        )
    }
}

/// An ordered polyline with a cached arc length.
///
/// `length` is the sum of consecutive point distances, and each point's `t`
/// is its arc-length position divided by `length`. Concatenation (`+`)
/// preserves both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path<S: VectorSpace> {
    points: Vec<PathPoint<S>>,
    length: Scalar<S>,
}

impl<S: VectorSpace> Path<S> {
    pub const fn empty() -> Self {
        Self {
            points: Vec::new(),
            length: Scalar::zero(),
        }
    }

    /// Single-point path.
    pub fn of(position: Vector<S>, size: Scalar<S>) -> Self {
        Self {
            points: vec![PathPoint::new(position, size, 0.0)],
            length: Scalar::zero(),
        }
    }

    pub fn from_point(point: Point<S>) -> Self {
        Self::of(point.position, point.size)
    }

    pub fn from_path_point(point: PathPoint<S>) -> Self {
        Self {
            points: vec![point],
            length: Scalar::zero(),
        }
    }

    /// Build a path by concatenating single points in order.
    pub fn from_positions(points: impl IntoIterator<Item = (Vector<S>, Scalar<S>)>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |path, (position, size)| path + Self::of(position, size))
    }

    pub fn points(&self) -> &[PathPoint<S>] {
        &self.points
    }

    pub fn length(&self) -> Scalar<S> {
        self.length
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PathPoint<S>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PathPoint<S>> {
        self.points.last()
    }

    pub fn start_point(&self) -> PathPoint<S> {
        self.points.first().copied().unwrap_or_else(PathPoint::none)
    }

    pub fn end_point(&self) -> PathPoint<S> {
        self.points.last().copied().unwrap_or_else(PathPoint::none)
    }

    /// Displacement from the first point to the last.
    pub fn offset(&self) -> Vector<S> {
        self.end_point().position - self.start_point().position
    }

    /// Same geometry with every point's size mapped through `f`.
    pub fn map_sizes(&self, f: impl Fn(Scalar<S>) -> Scalar<S>) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| PathPoint::new(p.position, f(p.size), p.t))
                .collect(),
            length: self.length,
        }
    }

    /// Bounds of the path including each point's size as a radius.
    pub fn bounding_area(&self) -> BoundingArea<S> {
        if self.points.is_empty() {
            return BoundingArea::default();
        }

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in &self.points {
            let r = p.size.value;
            x_min = x_min.min(p.position.x - r);
            x_max = x_max.max(p.position.x + r);
            y_min = y_min.min(p.position.y - r);
            y_max = y_max.max(p.position.y + r);
        }
        BoundingArea::new(x_min, x_max, y_min, y_max)
    }

    /// Largest point size, zero for an empty path.
    pub fn max_size(&self) -> Scalar<S> {
        self.points
            .iter()
            .map(|p| p.size)
            .fold(Scalar::zero(), |a, b| if b > a { b } else { a })
    }

    pub fn transform<O: VectorSpace>(&self, transform: &impl VectorSpaceTransform<S, O>) -> Path<O> {
        Path {
            points: self.points.iter().map(|p| p.transform(transform)).collect(),
            length: transform.transform_scalar(self.length),
        }
    }
}

/// Concatenate two paths.
///
/// A shared endpoint (same position and size) is merged. Otherwise the gap between the paths is added
/// to the length. Either way every `t` is rescaled so the result is still a
/// uniform `[0, 1]` parameterisation of the combined arc length.
impl<S: VectorSpace> Add for Path<S> {
    type Output = Path<S>;

    fn add(self, other: Path<S>) -> Path<S> {
        let (Some(&last), Some(&first)) = (self.points.last(), other.points.first()) else {
            return if self.points.is_empty() { other } else { self };
        };

        // `t` is relative to each operand, so it plays no part in the match.
        let (skip, gap) = if last.position == first.position && last.size == first.size {
            (1, 0.0)
        } else {
            (0, last.position.distance(first.position))
        };

        let head_length = self.length.value;
        let tail_length = other.length.value;
        let new_length = head_length + tail_length + gap;

        let (head_scale, tail_scale, tail_offset) = if new_length > 0.0 {
            (
                head_length / new_length,
                tail_length / new_length,
                (head_length + gap) / new_length,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let mut points = Vec::with_capacity(self.points.len() + other.points.len() - skip);
        points.extend(
            self.points
                .into_iter()
                .map(|p| PathPoint::new(p.position, p.size, p.t * head_scale)),
        );
        points.extend(
            other
                .points
                .into_iter()
                .skip(skip)
                .map(|p| PathPoint::new(p.position, p.size, p.t * tail_scale + tail_offset)),
        );

        Path {
            points,
            length: Scalar::new(new_length),
        }
    }
}
