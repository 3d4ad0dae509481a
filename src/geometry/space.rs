//! Coordinate-space tagged scalars and vectors.
//!
//! Every magnitude and position carries a zero-sized space tag (`Screen`,
//! `View` or `World`). Arithmetic only composes values from the same space;
//! moving between spaces goes through a
//! [`VectorSpaceTransform`](super::VectorSpaceTransform).

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Marker for a coordinate system.
pub trait VectorSpace:
    fmt::Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static
{
    /// Short name used in debug output.
    const NAME: &'static str;
}

/// Pixel coordinates of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Screen;

/// Normalised space where the window width spans `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View;

/// The unbounded space sketch entities live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct World;

impl VectorSpace for Screen {
    const NAME: &'static str = "Screen";
}

impl VectorSpace for View {
    const NAME: &'static str = "View";
}

impl VectorSpace for World {
    const NAME: &'static str = "World";
}

// ============================================================================
// Scalar
// ============================================================================

/// A single magnitude in a coordinate space, e.g. a brush radius.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Scalar<S: VectorSpace> {
    pub value: f64,
    _space: PhantomData<S>,
}

impl<S: VectorSpace> Scalar<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _space: PhantomData,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0)
    }

    /// Apply `f` to the raw value, staying in the same space.
    #[inline]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self::new(f(self.value))
    }

    /// Reinterpret the value in another space. Only transforms should do this.
    #[inline]
    pub(crate) const fn cast<T: VectorSpace>(self) -> Scalar<T> {
        Scalar::new(self.value)
    }
}

impl<S: VectorSpace> fmt::Debug for Scalar<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>({})", S::NAME, self.value)
    }
}

impl<S: VectorSpace> PartialOrd for Scalar<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<S: VectorSpace> Add for Scalar<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<S: VectorSpace> Sub for Scalar<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<S: VectorSpace> Mul for Scalar<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value)
    }
}

impl<S: VectorSpace> Div for Scalar<S> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value)
    }
}

impl<S: VectorSpace> Mul<f64> for Scalar<S> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<S: VectorSpace> Div<f64> for Scalar<S> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<S: VectorSpace> Neg for Scalar<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

// ============================================================================
// Vector
// ============================================================================

/// A 2D position or offset in a coordinate space.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vector<S: VectorSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<S>,
}

impl<S: VectorSpace> Vector<S> {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalised(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            self
        } else {
            self / magnitude
        }
    }

    /// Rotate counter-clockwise by `theta` radians.
    pub fn rotate(self, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    #[inline]
    pub(crate) const fn cast<T: VectorSpace>(self) -> Vector<T> {
        Vector::new(self.x, self.y)
    }
}

impl<S: VectorSpace> fmt::Debug for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{}>({}, {})", S::NAME, self.x, self.y)
    }
}

impl<S: VectorSpace> Add for Vector<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: VectorSpace> Sub for Vector<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise product.
impl<S: VectorSpace> Mul for Vector<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Componentwise quotient.
impl<S: VectorSpace> Div for Vector<S> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<S: VectorSpace> Mul<f64> for Vector<S> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<S: VectorSpace> Div<f64> for Vector<S> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<S: VectorSpace> Mul<Scalar<S>> for Vector<S> {
    type Output = Self;
    fn mul(self, rhs: Scalar<S>) -> Self {
        self * rhs.value
    }
}

impl<S: VectorSpace> Div<Scalar<S>> for Vector<S> {
    type Output = Self;
    fn div(self, rhs: Scalar<S>) -> Self {
        self / rhs.value
    }
}

impl<S: VectorSpace> Neg for Vector<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
