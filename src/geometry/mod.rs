//! Vector-space algebra: tagged scalars and vectors, bounding areas, paths
//! and the transforms between spaces.

mod bounds;
pub mod curve_fit;
mod path;
mod space;
mod transform;

pub use bounds::BoundingArea;
pub use path::{NO_T, Path, PathPoint, Point};
pub use space::{Scalar, Screen, Vector, VectorSpace, View, World};
pub use transform::VectorSpaceTransform;
