//! Spatial Index Module
//!
//! R-tree over entity bounding areas in world space. Queries return
//! candidates whose envelopes touch the query area; callers apply their own
//! exact predicate on top.

use crate::entity::EntityId;
use crate::geometry::{BoundingArea, World};
use rstar::{AABB, RTree, RTreeObject};
use tracing::warn;

/// A spatial entry representing an entity's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: EntityId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(id: EntityId, area: &BoundingArea<World>) -> Self {
        Self {
            id,
            min_x: area.x_min,
            min_y: area.y_min,
            max_x: area.x_max,
            max_y: area.y_max,
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index for sketch entities using an R-tree.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from `(id, bounds)` pairs. Entries with
    /// non-finite bounds are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EntityId, BoundingArea<World>)>,
    {
        let entries: Vec<SpatialEntry> = entries
            .into_iter()
            .filter(|(id, area)| indexable(*id, area))
            .map(|(id, area)| SpatialEntry::new(id, &area))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Index `id` under `area`. Returns false, leaving the index
    /// unchanged, if the area is not finite; rstar cannot order NaN.
    pub fn insert(&mut self, id: EntityId, area: &BoundingArea<World>) -> bool {
        if !indexable(id, area) {
            return false;
        }
        self.tree.insert(SpatialEntry::new(id, area));
        true
    }

    /// Ids of all entries whose envelope intersects `area`, edges inclusive.
    pub fn query_area(&self, area: &BoundingArea<World>) -> Vec<EntityId> {
        let envelope = AABB::from_corners([area.x_min, area.y_min], [area.x_max, area.y_max]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn indexable(id: EntityId, area: &BoundingArea<World>) -> bool {
    let finite = area.is_finite();
    if !finite {
        warn!(?id, ?area, "Skipping entity with non-finite bounds");
    }
    finite
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len()).finish()
    }
}
