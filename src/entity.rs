//! Drawable sketch entities.
//!
//! Entities are a closed set of variants. Each knows its world-space bounds
//! and its *detail*, the coarsest feature size (a point's radius, a stroke's
//! widest point), which the entity set uses to skip geometry too fine to see.

use crate::colour::Colour;
use crate::geometry::{BoundingArea, Path, Point, Scalar, World};
use std::fmt;

/// Identifier assigned by an [`EntitySet`](crate::entity_set::EntitySet)
/// in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single tapped point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEntity {
    pub point: Point<World>,
    pub colour: Colour,
}

impl PointEntity {
    pub const fn new(point: Point<World>, colour: Colour) -> Self {
        Self { point, colour }
    }

    pub fn bounding_area(&self) -> BoundingArea<World> {
        BoundingArea::around(self.point.position, self.point.size.value)
    }
}

/// A stroke. Bounds and detail are computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntity {
    path: Path<World>,
    colour: Colour,
    bounding_area: BoundingArea<World>,
    detail: Scalar<World>,
}

impl PathEntity {
    pub fn new(path: Path<World>, colour: Colour) -> Self {
        let bounding_area = path.bounding_area();
        let detail = path.max_size();
        Self {
            path,
            colour,
            bounding_area,
            detail,
        }
    }

    pub fn path(&self) -> &Path<World> {
        &self.path
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Point(PointEntity),
    Path(PathEntity),
}

impl Entity {
    pub fn point(point: Point<World>, colour: Colour) -> Self {
        Self::Point(PointEntity::new(point, colour))
    }

    pub fn path(path: Path<World>, colour: Colour) -> Self {
        Self::Path(PathEntity::new(path, colour))
    }

    pub fn bounding_area(&self) -> BoundingArea<World> {
        match self {
            Self::Point(point) => point.bounding_area(),
            Self::Path(path) => path.bounding_area,
        }
    }

    pub fn detail(&self) -> Scalar<World> {
        match self {
            Self::Point(point) => point.point.size,
            Self::Path(path) => path.detail,
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            Self::Point(point) => point.colour,
            Self::Path(path) => path.colour,
        }
    }
}

/// An entity together with the id its set assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntity {
    pub id: EntityId,
    pub entity: Entity,
}
