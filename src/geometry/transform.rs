//! Transforms between coordinate spaces.

use super::space::{Scalar, Vector, VectorSpace};

/// Maps values from space `In` to space `Out`.
///
/// Implementors provide the scalar mapping; the default vector mappings apply
/// it to each component, which is right for purely linear transforms. Affine
/// transforms override [`transform_vector`](Self::transform_vector) and keep
/// [`transform_delta`](Self::transform_delta) linear so offsets (scroll
/// deltas, drag offsets) are not translated.
pub trait VectorSpaceTransform<In: VectorSpace, Out: VectorSpace> {
    fn transform_scalar(&self, scalar: Scalar<In>) -> Scalar<Out>;

    fn transform_vector(&self, vector: Vector<In>) -> Vector<Out> {
        self.transform_delta(vector)
    }

    fn transform_delta(&self, vector: Vector<In>) -> Vector<Out> {
        Vector::new(
            self.transform_scalar(Scalar::new(vector.x)).value,
            self.transform_scalar(Scalar::new(vector.y)).value,
        )
    }
}

impl<S: VectorSpace> Scalar<S> {
    #[inline]
    pub fn transform<O: VectorSpace>(self, transform: &impl VectorSpaceTransform<S, O>) -> Scalar<O> {
        transform.transform_scalar(self)
    }
}

impl<S: VectorSpace> Vector<S> {
    #[inline]
    pub fn transform<O: VectorSpace>(self, transform: &impl VectorSpaceTransform<S, O>) -> Vector<O> {
        transform.transform_vector(self)
    }

    /// Transform as an offset: scale only, no translation.
    #[inline]
    pub fn transform_delta<O: VectorSpace>(
        self,
        transform: &impl VectorSpaceTransform<S, O>,
    ) -> Vector<O> {
        transform.transform_delta(self)
    }
}
